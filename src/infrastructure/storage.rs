//! Backend selection.
//!
//! Builds the trio of repositories for the configured [`StorageMode`]. The
//! result is constructed once at startup and handed to the services, so no
//! store lives in module-level state.

use anyhow::{Context, Result};
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use std::sync::Arc;
use std::time::Duration;

use crate::config::{Config, StorageMode};
use crate::domain::repositories::{ClickLedger, GlobalStateRepository, ProfileRepository};
use crate::infrastructure::memory::{
    InMemoryClickLedger, InMemoryGlobalStateRepository, InMemoryProfileRepository,
};
use crate::infrastructure::persistence::{
    PgClickLedger, PgGlobalStateRepository, PgProfileRepository,
};

/// Repository handles sharing one backend.
#[derive(Clone)]
pub struct Repositories {
    pub mode: StorageMode,
    pub profiles: Arc<dyn ProfileRepository>,
    pub global_state: Arc<dyn GlobalStateRepository>,
    pub clicks: Arc<dyn ClickLedger>,
}

impl Repositories {
    /// In-process stores. The ledger shares the same profile and global
    /// instances as the standalone repositories.
    pub fn in_memory() -> Self {
        let profiles = Arc::new(InMemoryProfileRepository::new());
        let global_state = Arc::new(InMemoryGlobalStateRepository::new());
        let clicks = Arc::new(InMemoryClickLedger::new(
            profiles.clone(),
            global_state.clone(),
        ));

        Self {
            mode: StorageMode::Memory,
            profiles,
            global_state,
            clicks,
        }
    }

    /// PostgreSQL stores over a shared pool.
    pub fn postgres(pool: Arc<PgPool>) -> Self {
        Self {
            mode: StorageMode::Postgres,
            profiles: Arc::new(PgProfileRepository::new(pool.clone())),
            global_state: Arc::new(PgGlobalStateRepository::new(pool.clone())),
            clicks: Arc::new(PgClickLedger::new(pool)),
        }
    }

    /// Builds the backend selected by `config`.
    ///
    /// In postgres mode this connects the pool and applies pending migrations.
    ///
    /// # Errors
    ///
    /// Returns an error if the database is unreachable or a migration fails.
    pub async fn from_config(config: &Config) -> Result<Self> {
        match config.storage_mode {
            StorageMode::Memory => {
                tracing::warn!("Using in-memory storage; state is lost on restart");
                Ok(Self::in_memory())
            }
            StorageMode::Postgres => {
                let pool = connect_pool(config).await?;
                run_migrations(&pool).await?;
                Ok(Self::postgres(Arc::new(pool)))
            }
        }
    }
}

/// Opens a connection pool using the pool settings from `config`.
///
/// # Errors
///
/// Returns an error if no database URL is configured or the connection fails.
pub async fn connect_pool(config: &Config) -> Result<PgPool> {
    let url = config
        .database_url
        .as_deref()
        .context("DATABASE_URL is required for PostgreSQL storage")?;

    let pool = PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .acquire_timeout(Duration::from_secs(config.db_connect_timeout))
        .idle_timeout(Duration::from_secs(config.db_idle_timeout))
        .max_lifetime(Duration::from_secs(config.db_max_lifetime))
        .connect(url)
        .await
        .context("Failed to connect to database")?;

    tracing::info!(
        max_connections = config.db_max_connections,
        "Connected to database"
    );

    Ok(pool)
}

/// Applies the embedded migrations.
pub async fn run_migrations(pool: &PgPool) -> Result<()> {
    sqlx::migrate!("./migrations")
        .run(pool)
        .await
        .context("Failed to run database migrations")?;

    tracing::info!("Database migrations applied");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_in_memory_ledger_shares_stores() {
        let repos = Repositories::in_memory();

        repos.clicks.record_clicks("device-1", 4).await.unwrap();

        let profile = repos.profiles.get_by_id("device-1").await.unwrap().unwrap();
        let global = repos.global_state.get_state().await.unwrap();

        assert_eq!(repos.mode, StorageMode::Memory);
        assert_eq!(profile.my_clicks, 4);
        assert_eq!(global.global_clicks, 4);
    }
}
