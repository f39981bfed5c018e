use axum::{extract::Extension, http::StatusCode, response::Json};
use serde::Deserialize;
use serde_json::{json, Value};
use sqlx::SqlitePool;

use crate::auth::{self, Claims};
use crate::error::ApiError;
use crate::store::users::{UserStore, ROLE_ADMIN, ROLE_TEACHER};

const MIN_PASSWORD_LENGTH: usize = 4;

#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
    #[serde(default, rename = "fullName")]
    pub full_name: String,
}

/// POST /api/auth/register - create an account and issue a session token.
///
/// The very first account in an empty store becomes admin; every later one
/// starts as teacher.
pub async fn register(
    Extension(pool): Extension<SqlitePool>,
    Json(req): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    let username = req.username.trim();
    let full_name = req.full_name.trim();

    if username.is_empty() || req.password.is_empty() || full_name.is_empty() {
        return Err(ApiError::bad_request("All fields are required"));
    }
    if req.password.len() < MIN_PASSWORD_LENGTH {
        return Err(ApiError::bad_request("Password must be at least 4 characters"));
    }

    let store = UserStore::new(pool);

    // The NOCASE unique constraint on username backstops this check when
    // two registrations race between the lookup and the insert.
    if store.find_by_username(username).await?.is_some() {
        return Err(ApiError::conflict("Username already exists"));
    }

    let role = if store.count().await? == 0 {
        ROLE_ADMIN
    } else {
        ROLE_TEACHER
    };

    let password_hash = auth::hash_password(&req.password)?;
    let user = store.insert(username, &password_hash, full_name, role).await?;

    let claims = Claims::new(user.id, user.username.clone(), user.role.clone());
    let token = auth::generate_jwt(&claims)?;

    tracing::info!(username = %user.username, role = %user.role, "account registered");

    Ok((
        StatusCode::CREATED,
        Json(json!({ "user": user.to_profile(), "token": token })),
    ))
}
