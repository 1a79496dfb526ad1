//! Persistence for the scheduling service.
//!
//! - [`models`] -- row structs and request DTOs.
//! - [`repositories`] -- one `*Repo` per PostgreSQL table.
//! - [`storage`] -- the [`Storage`] adapter trait and its two implementations.

use sqlx::postgres::PgPoolOptions;

pub mod models;
pub mod repositories;
pub mod storage;

pub use storage::memory::MemoryStorage;
pub use storage::postgres::PgStorage;
pub use storage::{Storage, StorageError};

pub type DbPool = sqlx::PgPool;

/// Create a connection pool from a database URL.
pub async fn create_pool(database_url: &str, max_connections: u32) -> Result<DbPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(database_url)
        .await
}

/// Round-trip a trivial query to prove the pool can reach the server.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// Apply any pending migrations from `crates/db/migrations`.
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    let migrator = sqlx::migrate!("./migrations");
    tracing::info!(count = migrator.iter().count(), "Applying database migrations");
    migrator.run(pool).await
}
