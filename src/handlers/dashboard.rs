//! Dashboard counters: read-only aggregates over the record store.

use axum::{extract::Extension, response::Json};
use serde_json::{json, Value};
use sqlx::SqlitePool;

use crate::error::ApiError;

/// GET /api/dashboard/stats
pub async fn stats(Extension(pool): Extension<SqlitePool>) -> Result<Json<Value>, ApiError> {
    let total_students: i64 =
        sqlx::query_scalar("SELECT COUNT(*) FROM students WHERE status = 'active'")
            .fetch_one(&pool)
            .await?;
    let total_staff: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM staff WHERE status = 'active'")
        .fetch_one(&pool)
        .await?;
    let total_classes: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM classes")
        .fetch_one(&pool)
        .await?;
    let today_attendance: i64 = sqlx::query_scalar(
        "SELECT COUNT(*) FROM attendance WHERE date = date('now') AND status = 'present'",
    )
    .fetch_one(&pool)
    .await?;
    let total_fees: f64 =
        sqlx::query_scalar("SELECT CAST(COALESCE(SUM(amount), 0) AS REAL) FROM fee_payments")
            .fetch_one(&pool)
            .await?;
    let pending_requisitions: i64 =
        sqlx::query_scalar("SELECT COUNT(*) FROM requisitions WHERE status = 'pending'")
            .fetch_one(&pool)
            .await?;

    Ok(Json(json!({
        "totalStudents": total_students,
        "totalStaff": total_staff,
        "totalClasses": total_classes,
        "todayAttendance": today_attendance,
        "totalFees": total_fees,
        "pendingRequisitions": pending_requisitions,
    })))
}
