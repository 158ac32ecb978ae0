//! Catalog store access for the track search service.
//!
//! The catalog is an existing SQLite database (Chinook schema) that this
//! service only reads from.

use std::str::FromStr;
use std::time::Duration;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

pub mod models;
pub mod repositories;

pub type DbPool = sqlx::SqlitePool;

/// Errors raised while talking to the catalog store.
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    /// No connection could be acquired from the pool.
    #[error("Catalog connection failed: {0}")]
    Connection(#[source] sqlx::Error),

    /// The query failed to execute or a row failed to decode.
    #[error("Catalog query failed: {0}")]
    Query(#[source] sqlx::Error),
}

/// Create a read-only connection pool for the catalog at `database_url`.
///
/// Connections are opened lazily, so an unreachable catalog surfaces as a
/// [`DbError::Connection`] on the first request rather than at startup.
pub fn create_pool(
    database_url: &str,
    max_connections: u32,
    acquire_timeout: Duration,
) -> Result<DbPool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(database_url)?
        .read_only(true)
        .create_if_missing(false);

    Ok(SqlitePoolOptions::new()
        .max_connections(max_connections)
        .acquire_timeout(acquire_timeout)
        .connect_lazy_with(options))
}

/// Readiness query used by `/health` and at startup.
///
/// Reads through the same Track → Album → Artist join that searches use, so
/// a reachable file without the catalog tables fails here too.
const CATALOG_READY_SQL: &str = "\
    SELECT t.TrackId FROM Track t \
    INNER JOIN Album al ON t.AlbumId = al.AlbumId \
    INNER JOIN Artist ar ON al.ArtistId = ar.ArtistId \
    LIMIT 1";

/// Check that the catalog is reachable and has the tables searches join.
///
/// An empty but well-formed catalog passes.
pub async fn health_check(pool: &DbPool) -> Result<(), DbError> {
    let mut conn = pool.acquire().await.map_err(DbError::Connection)?;
    sqlx::query(CATALOG_READY_SQL)
        .fetch_optional(&mut *conn)
        .await
        .map_err(DbError::Query)?;
    Ok(())
}
