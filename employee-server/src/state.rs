//! Application state

use std::sync::Arc;

use sqlx::postgres::PgPoolOptions;

use crate::config::Config;
use crate::db::{EmployeeRepository, MemoryEmployeeRepository, PgEmployeeRepository};
use crate::services::EmployeeService;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub employees: EmployeeService,
}

impl AppState {
    /// Create a new AppState
    ///
    /// Connects to PostgreSQL and applies migrations when a database URL is
    /// configured; otherwise falls back to the in-memory store.
    pub async fn new(config: &Config) -> Result<Self, BoxError> {
        let repo: Arc<dyn EmployeeRepository> = match config.database_url.as_deref() {
            Some(url) => {
                let pool = PgPoolOptions::new()
                    .max_connections(config.database_max_connections)
                    .connect(url)
                    .await?;

                sqlx::migrate!("./migrations").run(&pool).await?;
                tracing::info!("Database ready (migrations applied)");

                Arc::new(PgEmployeeRepository::new(pool))
            }
            None => {
                tracing::warn!(
                    "DATABASE_URL not set, using in-memory storage. Data is lost on restart."
                );
                Arc::new(MemoryEmployeeRepository::new())
            }
        };

        Ok(Self::with_repository(repo))
    }

    /// Build state around an existing repository
    pub fn with_repository(repo: Arc<dyn EmployeeRepository>) -> Self {
        Self {
            employees: EmployeeService::new(repo),
        }
    }
}
