//! Identity and session handlers.
//!
//! Register/login issue long-lived session tokens; user management routes
//! require the admin role and may never target the caller's own account.

mod login;
mod register;
mod users;

pub use login::login;
pub use register::register;
pub use users::{delete_user, list_users, set_role};

use axum::{extract::Extension, response::Json};
use serde_json::{json, Value};
use sqlx::SqlitePool;

use crate::error::ApiError;
use crate::middleware::AuthUser;
use crate::store::users::UserStore;

/// GET /api/auth/me - profile for the authenticated session
pub async fn me(
    Extension(auth_user): Extension<AuthUser>,
    Extension(pool): Extension<SqlitePool>,
) -> Result<Json<Value>, ApiError> {
    let user = UserStore::new(pool)
        .find_by_id(auth_user.id)
        .await?
        .ok_or_else(|| ApiError::not_found("User not found"))?;
    Ok(Json(user.to_profile()))
}

/// GET /api/auth/has-users - lets the client decide between "create first
/// admin" and "sign in"
pub async fn has_users(Extension(pool): Extension<SqlitePool>) -> Result<Json<Value>, ApiError> {
    let count = UserStore::new(pool).count().await?;
    Ok(Json(json!({ "hasUsers": count > 0 })))
}
