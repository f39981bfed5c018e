//! Generic repository over a single collection.
//!
//! Records are untyped column -> scalar maps; the repository builds
//! parametrized SQL from the collection's declared configuration and decodes
//! rows back into JSON objects.

use serde::Serialize;
use serde_json::{Map, Number, Value};
use sqlx::sqlite::{SqliteArguments, SqliteRow};
use sqlx::{Column, Row, SqlitePool, TypeInfo, ValueRef};

use crate::store::collections::{self, Collection};
use crate::store::manager::StoreError;

/// One page of records plus the unfiltered collection size.
///
/// `total` deliberately ignores the active search filter; pagination UIs are
/// built around the full collection count.
#[derive(Debug, Serialize)]
pub struct Page {
    pub data: Vec<Value>,
    pub total: i64,
}

pub struct Repository {
    collection: &'static Collection,
    pool: SqlitePool,
}

impl Repository {
    pub fn new(collection: &'static Collection, pool: SqlitePool) -> Self {
        Self { collection, pool }
    }

    /// List records, optionally filtered by a free-text search term across
    /// the collection's declared search columns.
    pub async fn query(
        &self,
        search: Option<&str>,
        limit: i64,
        offset: i64,
    ) -> Result<Page, StoreError> {
        let mut sql = format!("SELECT * FROM \"{}\"", self.collection.table);
        let mut patterns: Vec<String> = Vec::new();

        if let Some(term) = search.filter(|t| !t.is_empty()) {
            if !self.collection.search_columns.is_empty() {
                let clauses: Vec<String> = self
                    .collection
                    .search_columns
                    .iter()
                    .map(|c| format!("\"{}\" LIKE ?", c))
                    .collect();
                sql.push_str(&format!(" WHERE ({})", clauses.join(" OR ")));
                patterns = self
                    .collection
                    .search_columns
                    .iter()
                    .map(|_| format!("%{}%", term))
                    .collect();
            }
        }

        sql.push_str(&format!(
            " ORDER BY {} LIMIT ? OFFSET ?",
            self.collection.order_by
        ));

        let mut q = sqlx::query(&sql);
        for p in &patterns {
            q = q.bind(p);
        }
        q = q.bind(limit).bind(offset);

        let rows = q.fetch_all(&self.pool).await?;
        let data = rows.iter().map(row_to_json).collect();

        let total: i64 =
            sqlx::query_scalar(&format!("SELECT COUNT(*) FROM \"{}\"", self.collection.table))
                .fetch_one(&self.pool)
                .await?;

        Ok(Page { data, total })
    }

    pub async fn get(&self, id: i64) -> Result<Option<Value>, StoreError> {
        let sql = format!("SELECT * FROM \"{}\" WHERE id = ?", self.collection.table);
        let row = sqlx::query(&sql).bind(id).fetch_optional(&self.pool).await?;
        Ok(row.as_ref().map(row_to_json))
    }

    /// Insert a record from caller-supplied fields. The identifier is
    /// assigned by the store and column defaults are applied to omitted
    /// fields; the full stored record is returned.
    pub async fn insert(&self, fields: &Map<String, Value>) -> Result<Value, StoreError> {
        let columns = validated_columns(fields)?;

        let id = if columns.is_empty() {
            let sql = format!("INSERT INTO \"{}\" DEFAULT VALUES", self.collection.table);
            sqlx::query(&sql).execute(&self.pool).await?.last_insert_rowid()
        } else {
            let quoted: Vec<String> = columns.iter().map(|c| format!("\"{}\"", c)).collect();
            let placeholders: Vec<&str> = columns.iter().map(|_| "?").collect();
            let sql = format!(
                "INSERT INTO \"{}\" ({}) VALUES ({})",
                self.collection.table,
                quoted.join(", "),
                placeholders.join(", ")
            );
            let mut q = sqlx::query(&sql);
            for col in &columns {
                q = bind_value(q, &fields[*col]);
            }
            q.execute(&self.pool).await?.last_insert_rowid()
        };

        // Read back so store-applied defaults are included
        self.get(id).await.map(|r| r.unwrap_or(Value::Null))
    }

    /// Overwrite only the supplied columns; untouched columns keep their
    /// values. Returns the stored record after the merge, or None when no
    /// record with that identifier exists.
    pub async fn update(
        &self,
        id: i64,
        fields: &Map<String, Value>,
    ) -> Result<Option<Value>, StoreError> {
        let columns = validated_columns(fields)?;

        if !columns.is_empty() {
            let sets: Vec<String> = columns.iter().map(|c| format!("\"{}\" = ?", c)).collect();
            let sql = format!(
                "UPDATE \"{}\" SET {} WHERE id = ?",
                self.collection.table,
                sets.join(", ")
            );
            let mut q = sqlx::query(&sql);
            for col in &columns {
                q = bind_value(q, &fields[*col]);
            }
            q.bind(id).execute(&self.pool).await?;
        }

        self.get(id).await
    }

    /// Delete a record. Idempotent: removing an absent identifier is a no-op.
    pub async fn remove(&self, id: i64) -> Result<(), StoreError> {
        let sql = format!("DELETE FROM \"{}\" WHERE id = ?", self.collection.table);
        sqlx::query(&sql).bind(id).execute(&self.pool).await?;
        Ok(())
    }
}

/// Validate caller-supplied field names. The identifier column is immutable
/// and never writable through the generic layer.
fn validated_columns(fields: &Map<String, Value>) -> Result<Vec<&str>, StoreError> {
    let mut columns = Vec::with_capacity(fields.len());
    for key in fields.keys() {
        if key == "id" || !collections::is_valid_identifier(key) {
            return Err(StoreError::InvalidField(key.clone()));
        }
        columns.push(key.as_str());
    }
    Ok(columns)
}

/// Decode a row into a JSON object using the column's declared SQLite type.
pub fn row_to_json(row: &SqliteRow) -> Value {
    let mut map = Map::new();
    for i in 0..row.len() {
        let name = row.column(i).name().to_string();
        map.insert(name, decode_column(row, i));
    }
    Value::Object(map)
}

fn decode_column(row: &SqliteRow, index: usize) -> Value {
    let raw = match row.try_get_raw(index) {
        Ok(raw) => raw,
        Err(_) => return Value::Null,
    };
    if raw.is_null() {
        return Value::Null;
    }

    match raw.type_info().name() {
        "INTEGER" => row
            .try_get::<i64, _>(index)
            .map(Value::from)
            .unwrap_or(Value::Null),
        "REAL" => row
            .try_get::<f64, _>(index)
            .ok()
            .and_then(Number::from_f64)
            .map(Value::Number)
            .unwrap_or(Value::Null),
        "BOOLEAN" => row
            .try_get::<bool, _>(index)
            .map(Value::Bool)
            .unwrap_or(Value::Null),
        _ => {
            // TEXT and date/time affinities; fall through the same ladder the
            // raw value would take in SQLite
            if let Ok(s) = row.try_get::<String, _>(index) {
                Value::String(s)
            } else if let Ok(n) = row.try_get::<i64, _>(index) {
                Value::from(n)
            } else if let Ok(f) = row.try_get::<f64, _>(index) {
                Number::from_f64(f).map(Value::Number).unwrap_or(Value::Null)
            } else {
                Value::Null
            }
        }
    }
}

/// Bind a JSON scalar as a SQLite parameter. Objects and arrays are stored
/// as serialized JSON text.
pub fn bind_value<'q>(
    q: sqlx::query::Query<'q, sqlx::Sqlite, SqliteArguments<'q>>,
    v: &'q Value,
) -> sqlx::query::Query<'q, sqlx::Sqlite, SqliteArguments<'q>> {
    match v {
        Value::Null => {
            let none: Option<String> = None;
            q.bind(none)
        }
        Value::Bool(b) => q.bind(*b),
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                q.bind(i)
            } else if let Some(f) = n.as_f64() {
                q.bind(f)
            } else {
                q.bind(n.to_string())
            }
        }
        Value::String(s) => q.bind(s.as_str()),
        Value::Array(_) | Value::Object(_) => q.bind(v.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn rejects_id_and_malformed_field_names() {
        let mut fields = Map::new();
        fields.insert("id".to_string(), json!(7));
        assert!(matches!(
            validated_columns(&fields),
            Err(StoreError::InvalidField(f)) if f == "id"
        ));

        let mut fields = Map::new();
        fields.insert("name\"; DROP TABLE x".to_string(), json!("x"));
        assert!(validated_columns(&fields).is_err());

        let mut fields = Map::new();
        fields.insert("first_name".to_string(), json!("Ann"));
        fields.insert("salary".to_string(), json!(120.5));
        let cols = validated_columns(&fields).unwrap();
        assert_eq!(cols.len(), 2);
    }
}
