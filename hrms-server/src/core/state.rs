use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use axum::Router;

use crate::core::{Config, Result};
use crate::db::DbService;
use crate::db::repository::{EmployeeStore, RepoResult, with_deadline};

/// Server state handed to every handler
///
/// Cloning is cheap: the store sits behind an `Arc` and the config is
/// small. There is no mutable in-process state.
///
/// | Field | Description |
/// |-------|-------------|
/// | config | Configuration (immutable) |
/// | employees | Employee storage capability |
///
/// # Example
///
/// ```ignore
/// let state = ServerState::new(Config::default(), Arc::new(MemoryEmployeeRepository::new()));
/// let app = state.router();
/// ```
#[derive(Clone)]
pub struct ServerState {
    pub config: Config,
    pub employees: Arc<dyn EmployeeStore>,
}

impl ServerState {
    pub fn new(config: Config, employees: Arc<dyn EmployeeStore>) -> Self {
        Self { config, employees }
    }

    /// Connect to the database and build state around it
    ///
    /// Fails with `StorageUnavailable` when the database cannot be reached;
    /// callers treat that as fatal.
    pub async fn initialize(config: &Config) -> Result<Self> {
        let db = DbService::connect(config).await?;
        Ok(Self::new(
            config.clone(),
            Arc::new(db.employee_repository()),
        ))
    }

    pub fn operation_timeout(&self) -> Duration {
        self.config.operation_timeout
    }

    /// Run a storage operation under the per-operation deadline
    pub async fn bounded<T, F>(&self, operation: F) -> RepoResult<T>
    where
        F: Future<Output = RepoResult<T>>,
    {
        with_deadline(self.operation_timeout(), operation).await
    }

    /// Full application router with this state applied
    pub fn router(&self) -> Router {
        crate::services::http::build_router(self.clone())
    }
}
