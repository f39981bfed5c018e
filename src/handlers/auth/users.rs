//! Admin-only account management.

use axum::{
    extract::{Extension, Path},
    response::Json,
};
use serde::Deserialize;
use serde_json::{json, Value};
use sqlx::SqlitePool;

use crate::error::ApiError;
use crate::middleware::AuthUser;
use crate::store::users::{self, UserStore};

/// GET /api/auth/users - list all accounts
pub async fn list_users(Extension(pool): Extension<SqlitePool>) -> Result<Json<Value>, ApiError> {
    let users = UserStore::new(pool).list().await?;
    let profiles: Vec<Value> = users.iter().map(|u| u.to_profile()).collect();
    Ok(Json(Value::Array(profiles)))
}

#[derive(Debug, Deserialize)]
pub struct SetRoleRequest {
    #[serde(default)]
    pub role: String,
}

/// PUT /api/auth/users/:id/role - change an account's role.
///
/// An account can never change its own role, admin or not.
pub async fn set_role(
    Path(id): Path<i64>,
    Extension(auth_user): Extension<AuthUser>,
    Extension(pool): Extension<SqlitePool>,
    Json(req): Json<SetRoleRequest>,
) -> Result<Json<Value>, ApiError> {
    if !users::is_valid_role(&req.role) {
        return Err(ApiError::bad_request("Invalid role"));
    }
    if id == auth_user.id {
        return Err(ApiError::bad_request("Cannot change your own role"));
    }

    UserStore::new(pool).set_role(id, &req.role).await?;
    Ok(Json(json!({ "success": true })))
}

/// DELETE /api/auth/users/:id - remove an account. Self-deletion is
/// rejected, admin or not.
pub async fn delete_user(
    Path(id): Path<i64>,
    Extension(auth_user): Extension<AuthUser>,
    Extension(pool): Extension<SqlitePool>,
) -> Result<Json<Value>, ApiError> {
    if id == auth_user.id {
        return Err(ApiError::bad_request("Cannot delete your own account"));
    }

    UserStore::new(pool).delete(id).await?;
    Ok(Json(json!({ "success": true })))
}
