//! Startup wiring: storage construction and the seed admin.

use std::sync::Arc;

use agenda_db::{MemoryStorage, PgStorage, Storage};
use anyhow::Context;

use crate::config::{SeedAdminConfig, StorageConfig};
use crate::services::users;

/// Connect the configured storage backend.
///
/// For PostgreSQL this creates the pool, checks connectivity and applies
/// migrations. Any failure aborts startup.
pub async fn connect_storage(config: &StorageConfig) -> anyhow::Result<Arc<dyn Storage>> {
    match config {
        StorageConfig::Postgres {
            database_url,
            max_connections,
        } => {
            let pool = agenda_db::create_pool(database_url, *max_connections)
                .await
                .context("Failed to connect to database")?;
            tracing::info!(max_connections, "Database connection pool created");

            agenda_db::health_check(&pool)
                .await
                .context("Database health check failed")?;
            tracing::info!("Database health check passed");

            agenda_db::run_migrations(&pool)
                .await
                .context("Failed to run database migrations")?;
            tracing::info!("Database migrations applied");

            Ok(Arc::new(PgStorage::new(pool)))
        }
        StorageConfig::Memory => {
            tracing::warn!("Using in-memory storage; data is lost on shutdown");
            Ok(Arc::new(MemoryStorage::new()))
        }
    }
}

/// Ensure the seed admin exists.
pub async fn seed_admin(storage: &dyn Storage, seed: &SeedAdminConfig) -> anyhow::Result<()> {
    let created = users::ensure_seed_admin(storage, seed)
        .await
        .context("Failed to create seed admin")?;
    if created && seed.uses_default_password() {
        tracing::warn!(
            email = %seed.email,
            "Seed admin created with the default password; change it before exposing this service"
        );
    }
    Ok(())
}
