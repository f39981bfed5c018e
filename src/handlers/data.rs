//! Generic resource handlers.
//!
//! Five collection-agnostic operations mounted once at `/api/:collection`;
//! a new record type needs only a registry entry, no new handler code.

use axum::{
    extract::{Extension, Path, Query},
    http::StatusCode,
    response::Json,
};
use serde::Deserialize;
use serde_json::{json, Map, Value};
use sqlx::SqlitePool;

use crate::error::ApiError;
use crate::store::collections::{self, Collection};
use crate::store::{Page, Repository};

#[derive(Debug, Deserialize)]
pub struct ListQuery {
    pub search: Option<String>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

fn resolve(path: &str) -> Result<&'static Collection, ApiError> {
    collections::find(path).ok_or_else(|| ApiError::not_found("Not found"))
}

/// The caller supplies a field map verbatim; the identifier is the one field
/// it may never set.
fn record_fields(payload: &Value) -> Result<&Map<String, Value>, ApiError> {
    let fields = payload
        .as_object()
        .ok_or_else(|| ApiError::bad_request("Expected a JSON object"))?;
    if fields.contains_key("id") {
        return Err(ApiError::bad_request("Field 'id' is assigned by the server"));
    }
    Ok(fields)
}

/// GET /api/:collection - list records with optional search and pagination
pub async fn list(
    Path(collection): Path<String>,
    Query(query): Query<ListQuery>,
    Extension(pool): Extension<SqlitePool>,
) -> Result<Json<Page>, ApiError> {
    let collection = resolve(&collection)?;

    let limit = query.limit.unwrap_or(100).max(0);
    let offset = query.offset.unwrap_or(0).max(0);

    let page = Repository::new(collection, pool)
        .query(query.search.as_deref(), limit, offset)
        .await?;
    Ok(Json(page))
}

/// GET /api/:collection/:id - fetch a single record
pub async fn get_one(
    Path((collection, id)): Path<(String, i64)>,
    Extension(pool): Extension<SqlitePool>,
) -> Result<Json<Value>, ApiError> {
    let collection = resolve(&collection)?;

    match Repository::new(collection, pool).get(id).await? {
        Some(record) => Ok(Json(record)),
        None => Err(ApiError::not_found("Not found")),
    }
}

/// POST /api/:collection - create a record from a field map
pub async fn create(
    Path(collection): Path<String>,
    Extension(pool): Extension<SqlitePool>,
    Json(payload): Json<Value>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    let collection = resolve(&collection)?;
    let fields = record_fields(&payload)?;

    let record = Repository::new(collection, pool).insert(fields).await?;
    Ok((StatusCode::CREATED, Json(record)))
}

/// PUT /api/:collection/:id - partial update; only supplied columns change
pub async fn update(
    Path((collection, id)): Path<(String, i64)>,
    Extension(pool): Extension<SqlitePool>,
    Json(payload): Json<Value>,
) -> Result<Json<Value>, ApiError> {
    let collection = resolve(&collection)?;
    let fields = record_fields(&payload)?;

    match Repository::new(collection, pool).update(id, fields).await? {
        Some(record) => Ok(Json(record)),
        None => Err(ApiError::not_found("Not found")),
    }
}

/// DELETE /api/:collection/:id - idempotent hard delete
pub async fn delete(
    Path((collection, id)): Path<(String, i64)>,
    Extension(pool): Extension<SqlitePool>,
) -> Result<Json<Value>, ApiError> {
    let collection = resolve(&collection)?;

    Repository::new(collection, pool).remove(id).await?;
    Ok(Json(json!({ "success": true })))
}
