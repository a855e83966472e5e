use sqlx::{SqlitePool, sqlite::SqlitePoolOptions};
use std::time::Duration;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DatabaseError {
    #[error("database.connection_error")]
    ConnectionError,
    #[error("database.schema_error")]
    SchemaError,
}

/// Configuration for the database connection
pub struct DatabaseConfig {
    pub connection_string: String,
    pub max_connections: u32,
    pub acquire_timeout: Duration,
}

impl DatabaseConfig {
    /// Creates a new database configuration with default values
    pub fn new(connection_string: String) -> Self {
        Self {
            connection_string,
            max_connections: 5,
            acquire_timeout: Duration::from_secs(30),
        }
    }
}

const CREATE_ITEMS_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS items (
    id TEXT PRIMARY KEY,
    barcode TEXT NOT NULL,
    name TEXT NOT NULL,
    brand TEXT NOT NULL,
    quantity INTEGER NOT NULL DEFAULT 1,
    expiration_date TEXT,
    added_at TEXT NOT NULL DEFAULT (strftime('%Y-%m-%dT%H:%M:%fZ', 'now'))
)"#;

const CREATE_BARCODE_INDEX: &str =
    "CREATE INDEX IF NOT EXISTS idx_items_barcode ON items (barcode)";

/// Creates a SQLite connection pool
pub async fn create_sqlite_pool(config: &DatabaseConfig) -> Result<SqlitePool, DatabaseError> {
    let pool = SqlitePoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(config.acquire_timeout)
        .connect(&config.connection_string)
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "Failed to open item store");
            DatabaseError::ConnectionError
        })?;

    Ok(pool)
}

/// Creates the items table and its barcode index when missing.
pub async fn ensure_schema(pool: &SqlitePool) -> Result<(), DatabaseError> {
    for statement in [CREATE_ITEMS_TABLE, CREATE_BARCODE_INDEX] {
        sqlx::query(statement).execute(pool).await.map_err(|e| {
            tracing::error!(error = %e, "Failed to bootstrap item store schema");
            DatabaseError::SchemaError
        })?;
    }
    Ok(())
}
