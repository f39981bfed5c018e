use axum::{extract::Extension, response::Json};
use serde::Deserialize;
use serde_json::{json, Value};
use sqlx::SqlitePool;

use crate::auth::{self, Claims};
use crate::error::ApiError;
use crate::store::users::UserStore;

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

/// POST /api/auth/login - verify credentials and issue a session token.
///
/// Unknown account and wrong credential are distinguished only in the
/// response copy; timing is not part of this system's threat model.
pub async fn login(
    Extension(pool): Extension<SqlitePool>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<Value>, ApiError> {
    if req.username.is_empty() || req.password.is_empty() {
        return Err(ApiError::bad_request("Username and password are required"));
    }

    let user = UserStore::new(pool)
        .find_by_username(&req.username)
        .await?
        .ok_or_else(|| ApiError::unauthorized("User not found"))?;

    if !auth::verify_password(&req.password, &user.password_hash) {
        return Err(ApiError::unauthorized("Invalid password"));
    }

    let claims = Claims::new(user.id, user.username.clone(), user.role.clone());
    let token = auth::generate_jwt(&claims)?;

    Ok(Json(json!({ "user": user.to_profile(), "token": token })))
}
