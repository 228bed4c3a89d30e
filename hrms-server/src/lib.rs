//! HRMS Server - employee records over HTTP
//!
//! # Module layout
//!
//! ```text
//! hrms-server/src/
//! ├── core/       # config, state, bootstrap
//! ├── db/         # MongoDB client, storage projections, repositories
//! ├── api/        # routes and handlers
//! ├── services/   # router assembly, request logging
//! └── utils/      # logging setup, error re-exports
//! ```

pub mod api;
pub mod core;
pub mod db;
pub mod services;
pub mod utils;

// Re-export public types
pub use crate::core::{Config, Server, ServerError, ServerState};
pub use db::repository::{
    EmployeeStore, MemoryEmployeeRepository, MongoEmployeeRepository, RepoError, RepoResult,
};
pub use utils::{AppError, AppResult, ErrorCode};

// Re-export logger functions
pub use utils::logger::init_logger_with_file;

/// Start logging for the given configuration
///
/// Call once, before anything logs.
pub fn setup_environment(config: &Config) {
    init_logger_with_file(Some(&config.log_level), config.log_dir.as_deref());
}
