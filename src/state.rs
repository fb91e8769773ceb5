//! Application state shared across handlers.

use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use sqlx::postgres::PgPoolOptions;

use crate::{
    config::Config,
    db::{PostgresStudentStore, StudentStore},
    services::{SearchService, StudentService},
};

static MIGRATOR: sqlx::migrate::Migrator = sqlx::migrate!();

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub student_service: Arc<StudentService>,
    pub search_service: Arc<SearchService>,
}

impl AppState {
    /// Connect to PostgreSQL, apply pending migrations, and wire the
    /// services over the resulting store.
    pub async fn new(config: Config) -> anyhow::Result<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(config.database.max_connections)
            .acquire_timeout(Duration::from_secs(config.database.acquire_timeout_secs))
            .connect(&config.database.url)
            .await
            .context("Failed to connect to PostgreSQL")?;

        if config.database.run_migrations {
            MIGRATOR
                .run(&pool)
                .await
                .context("Failed to run database migrations")?;
        }

        let store: Arc<dyn StudentStore> = Arc::new(PostgresStudentStore::new(pool));
        Ok(Self::with_store(config, store))
    }

    /// Wire the services over an explicit store capability. Used by [`new`]
    /// and by tests substituting an in-memory store.
    ///
    /// [`new`]: AppState::new
    pub fn with_store(config: Config, store: Arc<dyn StudentStore>) -> Self {
        Self {
            config: Arc::new(config),
            student_service: Arc::new(StudentService::new(store.clone())),
            search_service: Arc::new(SearchService::new(store)),
        }
    }
}
