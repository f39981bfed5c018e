use school_manager_api::{config, handlers, store};

#[tokio::main]
async fn main() {
    // Load .env if present so cargo run picks up SCHOOL_DB_PATH, JWT_SECRET, etc.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt::init();

    let config = config::config();
    tracing::info!("starting School Manager API in {:?} mode", config.environment);

    let pool = store::manager::connect(&config.database.path, config.database.max_connections)
        .await
        .unwrap_or_else(|e| panic!("failed to open database {}: {}", config.database.path, e));

    store::manager::initialize(&pool)
        .await
        .expect("schema initialization");

    let app = handlers::router(pool);

    let bind_addr = format!("{}:{}", config.server.bind_address, config.server.port);
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .unwrap_or_else(|e| panic!("failed to bind {}: {}", bind_addr, e));

    println!("🎓 School Manager server listening on http://{}", bind_addr);

    axum::serve(listener, app).await.expect("server");
}
