use std::str::FromStr;

use sqlx::migrate::Migrator;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};

use crate::domain::repositories::StoreResult;

static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

/// Opens a connection pool and brings the schema up to date
///
/// File databases are created when missing.
pub async fn connect(database_url: &str, max_connections: u32) -> StoreResult<SqlitePool> {
    let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(max_connections)
        .connect_with(options)
        .await?;

    migrate(&pool).await?;
    tracing::info!(database_url, "Database schema is up to date");

    Ok(pool)
}

/// Opens a private in-memory database with the schema applied
///
/// Every connection to `sqlite::memory:` sees its own database, so the pool
/// holds exactly one connection and never recycles it.
pub async fn connect_in_memory() -> StoreResult<SqlitePool> {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .min_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect("sqlite::memory:")
        .await?;

    migrate(&pool).await?;

    Ok(pool)
}

async fn migrate(pool: &SqlitePool) -> StoreResult<()> {
    MIGRATOR.run(pool).await?;
    Ok(())
}
