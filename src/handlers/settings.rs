//! Settings: a flat key -> JSON-value map, upserted key-by-key and read back
//! as one flattened object.

use axum::{extract::Extension, response::Json};
use serde_json::{json, Map, Value};
use sqlx::{Row, SqlitePool};

use crate::error::ApiError;

/// GET /api/settings - flattened settings object
pub async fn get_settings(
    Extension(pool): Extension<SqlitePool>,
) -> Result<Json<Value>, ApiError> {
    let rows = sqlx::query("SELECT key, value FROM settings")
        .fetch_all(&pool)
        .await?;

    let mut settings = Map::new();
    for row in rows {
        let key: String = row.try_get("key")?;
        let raw: String = row.try_get("value")?;
        let value = serde_json::from_str(&raw).unwrap_or(Value::String(raw));
        settings.insert(key, value);
    }
    Ok(Json(Value::Object(settings)))
}

/// PUT /api/settings - all-or-nothing batch upsert
pub async fn put_settings(
    Extension(pool): Extension<SqlitePool>,
    Json(payload): Json<Value>,
) -> Result<Json<Value>, ApiError> {
    let entries = payload
        .as_object()
        .ok_or_else(|| ApiError::bad_request("Expected a JSON object"))?;

    let mut tx = pool.begin().await?;
    for (key, value) in entries {
        sqlx::query(
            "INSERT INTO settings (key, value) VALUES (?, ?) \
             ON CONFLICT(key) DO UPDATE SET value = excluded.value",
        )
        .bind(key)
        .bind(value.to_string())
        .execute(&mut *tx)
        .await?;
    }
    tx.commit().await?;

    Ok(Json(json!({ "success": true })))
}
