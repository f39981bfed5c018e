pub mod auth;
pub mod dashboard;
pub mod data;
pub mod reports;
pub mod settings;

use axum::{
    extract::Extension,
    middleware::from_fn,
    routing::{delete, get, post, put},
    Router,
};
use serde_json::{json, Value};
use sqlx::SqlitePool;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::config;
use crate::middleware::{authenticate, require_admin};
use crate::store;

/// Assemble the full application router around one store pool.
pub fn router(pool: SqlitePool) -> Router {
    let mut app = Router::new()
        // Service endpoints
        .route("/", get(root))
        .route("/health", get(health))
        // Identity & session
        .merge(auth_routes())
        // Settings and aggregate views (static paths take priority over the
        // generic collection capture below)
        .route("/api/settings", get(settings::get_settings).put(settings::put_settings))
        .route("/api/dashboard/stats", get(dashboard::stats))
        .route("/api/reports/attendance-summary", get(reports::attendance_summary))
        .route("/api/reports/fee-balance", get(reports::fee_balance))
        // Generic resource handler, one mount for every collection
        .route("/api/:collection", get(data::list).post(data::create))
        .route(
            "/api/:collection/:id",
            get(data::get_one).put(data::update).delete(data::delete),
        )
        .layer(TraceLayer::new_for_http())
        .layer(Extension(pool));

    if config::config().server.enable_cors {
        app = app.layer(CorsLayer::permissive());
    }

    app
}

fn auth_routes() -> Router {
    let admin = Router::new()
        .route("/api/auth/users", get(auth::list_users))
        .route("/api/auth/users/:id/role", put(auth::set_role))
        .route("/api/auth/users/:id", delete(auth::delete_user))
        .route_layer(from_fn(require_admin));

    Router::new()
        .route("/api/auth/me", get(auth::me))
        .merge(admin)
        .route_layer(from_fn(authenticate))
        .route("/api/auth/register", post(auth::register))
        .route("/api/auth/login", post(auth::login))
        .route("/api/auth/has-users", get(auth::has_users))
}

async fn root() -> axum::response::Json<Value> {
    axum::response::Json(json!({
        "name": "School Manager API",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": {
            "auth": "/api/auth/register, /api/auth/login, /api/auth/me, /api/auth/users",
            "collections": "/api/{collection}[/{id}]",
            "settings": "/api/settings",
            "dashboard": "/api/dashboard/stats",
            "reports": "/api/reports/attendance-summary, /api/reports/fee-balance",
        }
    }))
}

async fn health(Extension(pool): Extension<SqlitePool>) -> impl axum::response::IntoResponse {
    let now = chrono::Utc::now();

    match store::manager::health_check(&pool).await {
        Ok(_) => (
            axum::http::StatusCode::OK,
            axum::response::Json(json!({
                "status": "ok",
                "timestamp": now,
                "database": "ok"
            })),
        ),
        Err(e) => (
            axum::http::StatusCode::SERVICE_UNAVAILABLE,
            axum::response::Json(json!({
                "status": "degraded",
                "timestamp": now,
                "error": e.to_string()
            })),
        ),
    }
}
