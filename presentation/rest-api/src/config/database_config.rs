use persistence::db::{DatabaseConfig, create_sqlite_pool, ensure_schema};
use sqlx::SqlitePool;

use super::env::{parse_var_or, var_or};

const DEFAULT_DATABASE_URL: &str = "sqlite://fridge.db?mode=rwc";

/// Initialize the item store from environment variables
///
/// Environment variables:
/// - DATABASE_URL: SQLite connection string (default: "sqlite://fridge.db?mode=rwc")
/// - DATABASE_MAX_CONNECTIONS: Pool size (default: 5)
///
/// The items table is created on first start.
pub async fn init_database() -> anyhow::Result<SqlitePool> {
    let mut config = DatabaseConfig::new(var_or("DATABASE_URL", DEFAULT_DATABASE_URL));
    config.max_connections = parse_var_or("DATABASE_MAX_CONNECTIONS", config.max_connections)?;

    let pool = create_sqlite_pool(&config).await?;
    ensure_schema(&pool).await?;
    tracing::info!(url = %config.connection_string, "Item store ready");
    Ok(pool)
}
