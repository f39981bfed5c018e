#![allow(dead_code)]

use std::sync::atomic::{AtomicU32, Ordering};

use anyhow::Result;
use serde_json::{json, Value};
use sqlx::SqlitePool;

static NEXT_DB: AtomicU32 = AtomicU32::new(0);

pub struct TestServer {
    pub base_url: String,
    pub pool: SqlitePool,
}

/// Serve the app router on an ephemeral port with a fresh database file.
/// Every test gets its own store so bootstrap-rule tests stay isolated.
pub async fn spawn() -> Result<TestServer> {
    let path = std::env::temp_dir().join(format!(
        "school-manager-test-{}-{}.db",
        std::process::id(),
        NEXT_DB.fetch_add(1, Ordering::SeqCst),
    ));
    let _ = std::fs::remove_file(&path);

    let pool = school_manager_api::store::manager::connect(&path, 5).await?;
    school_manager_api::store::manager::initialize(&pool).await?;

    let app = school_manager_api::handlers::router(pool.clone());
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("test server");
    });

    Ok(TestServer {
        base_url: format!("http://{}", addr),
        pool,
    })
}

/// Register an account and return (user, token).
pub async fn register(
    server: &TestServer,
    username: &str,
    password: &str,
    full_name: &str,
) -> Result<(Value, String)> {
    let client = reqwest::Client::new();
    let res = client
        .post(format!("{}/api/auth/register", server.base_url))
        .json(&json!({ "username": username, "password": password, "fullName": full_name }))
        .send()
        .await?;
    anyhow::ensure!(
        res.status() == reqwest::StatusCode::CREATED,
        "register failed: {}",
        res.status()
    );
    let body = res.json::<Value>().await?;
    let token = body["token"].as_str().unwrap_or_default().to_string();
    Ok((body["user"].clone(), token))
}

/// Create a record through the generic resource API and return it.
pub async fn create_record(server: &TestServer, collection: &str, fields: Value) -> Result<Value> {
    let client = reqwest::Client::new();
    let res = client
        .post(format!("{}/api/{}", server.base_url, collection))
        .json(&fields)
        .send()
        .await?;
    anyhow::ensure!(
        res.status() == reqwest::StatusCode::CREATED,
        "create {} failed: {}",
        collection,
        res.status()
    );
    Ok(res.json().await?)
}
