//! Reporting views: server-side joins returned as plain JSON rows.

use axum::{
    extract::{Extension, Query},
    response::Json,
};
use serde::Deserialize;
use serde_json::Value;
use sqlx::SqlitePool;

use crate::error::ApiError;
use crate::store::repository::{bind_value, row_to_json};

#[derive(Debug, Deserialize)]
pub struct AttendanceSummaryQuery {
    pub class_id: Option<i64>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

/// GET /api/reports/attendance-summary - per-student present/absent day
/// counts, optionally narrowed by class and date range
pub async fn attendance_summary(
    Query(query): Query<AttendanceSummaryQuery>,
    Extension(pool): Extension<SqlitePool>,
) -> Result<Json<Value>, ApiError> {
    let mut sql = String::from(
        "SELECT s.first_name, s.last_name, \
         SUM(CASE WHEN a.status = 'present' THEN 1 ELSE 0 END) AS present_days, \
         SUM(CASE WHEN a.status = 'absent' THEN 1 ELSE 0 END) AS absent_days, \
         COUNT(a.id) AS total_days \
         FROM students s LEFT JOIN attendance a ON s.id = a.student_id \
         WHERE 1=1",
    );
    let mut params: Vec<Value> = Vec::new();

    if let Some(class_id) = query.class_id {
        sql.push_str(" AND s.class_id = ?");
        params.push(Value::from(class_id));
    }
    if let Some(start) = query.start_date {
        sql.push_str(" AND a.date >= ?");
        params.push(Value::String(start));
    }
    if let Some(end) = query.end_date {
        sql.push_str(" AND a.date <= ?");
        params.push(Value::String(end));
    }
    sql.push_str(" GROUP BY s.id ORDER BY s.first_name");

    let mut q = sqlx::query(&sql);
    for p in &params {
        q = bind_value(q, p);
    }
    let rows = q.fetch_all(&pool).await?;

    Ok(Json(Value::Array(rows.iter().map(row_to_json).collect())))
}

/// GET /api/reports/fee-balance - expected vs. paid fees per active student
pub async fn fee_balance(Extension(pool): Extension<SqlitePool>) -> Result<Json<Value>, ApiError> {
    let sql = "SELECT s.id, s.first_name, s.last_name, s.admission_number, \
               COALESCE(fs.total_fees, 0) AS total_fees, \
               COALESCE(fp.total_paid, 0) AS total_paid, \
               COALESCE(fs.total_fees, 0) - COALESCE(fp.total_paid, 0) AS balance \
               FROM students s \
               LEFT JOIN (SELECT class_id, SUM(amount) AS total_fees FROM fee_structures GROUP BY class_id) fs \
                 ON s.class_id = fs.class_id \
               LEFT JOIN (SELECT student_id, SUM(amount) AS total_paid FROM fee_payments GROUP BY student_id) fp \
                 ON s.id = fp.student_id \
               WHERE s.status = 'active' \
               ORDER BY balance DESC";

    let rows = sqlx::query(sql).fetch_all(&pool).await?;
    Ok(Json(Value::Array(rows.iter().map(row_to_json).collect())))
}
