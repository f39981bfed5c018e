use sqlx::error::ErrorKind;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::path::Path;
use thiserror::Error;
use tracing::info;

use crate::store::schema;

/// Errors from the record store
#[derive(Debug, Error)]
pub enum StoreError {
    /// Uniqueness / CHECK / NOT NULL violation. Surfaced to callers as an
    /// invalid-input failure, never as a generic fault.
    #[error("{0}")]
    Constraint(String),

    #[error("Invalid field name: {0}")]
    InvalidField(String),

    #[error("Connection error: {0}")]
    Connection(String),

    #[error(transparent)]
    Sqlx(sqlx::Error),
}

impl StoreError {
    /// Classify a sqlx failure. Constraint violations are the only database
    /// errors callers are expected to show to the user.
    pub fn from_sqlx(err: sqlx::Error) -> Self {
        if let sqlx::Error::Database(db) = &err {
            if matches!(
                db.kind(),
                ErrorKind::UniqueViolation
                    | ErrorKind::CheckViolation
                    | ErrorKind::NotNullViolation
                    | ErrorKind::ForeignKeyViolation
            ) {
                return StoreError::Constraint(db.message().to_string());
            }
        }
        StoreError::Sqlx(err)
    }
}

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        StoreError::from_sqlx(err)
    }
}

/// Open (or create) the SQLite database file and return a connection pool.
///
/// WAL mode keeps concurrent reads cheap while the single school server
/// process serializes writes.
pub async fn connect(path: impl AsRef<Path>, max_connections: u32) -> Result<SqlitePool, StoreError> {
    let options = SqliteConnectOptions::new()
        .filename(path.as_ref())
        .create_if_missing(true)
        .journal_mode(SqliteJournalMode::Wal)
        .foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(max_connections)
        .connect_with(options)
        .await
        .map_err(|e| StoreError::Connection(e.to_string()))?;

    info!("opened database at {}", path.as_ref().display());
    Ok(pool)
}

/// Idempotently ensure every known collection exists with its declared
/// columns and constraints. Safe to call on every process start.
pub async fn initialize(pool: &SqlitePool) -> Result<(), StoreError> {
    for ddl in schema::TABLES {
        sqlx::query(ddl).execute(pool).await?;
    }
    info!("database schema initialized ({} tables)", schema::TABLES.len());
    Ok(())
}

/// Pings the pool to ensure connectivity
pub async fn health_check(pool: &SqlitePool) -> Result<(), StoreError> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}
