//! Shared types for the HRMS service
//!
//! Wire types used by the server and by anything that talks to it:
//! the employee model, the error vocabulary and the response envelopes.

pub mod error;
pub mod models;
pub mod response;

// Re-exports
pub use axum::Json;
pub use http;
pub use serde::{Deserialize, Serialize};

pub use error::{AppError, AppResult, ErrorCategory, ErrorCode};
pub use models::Employee;
pub use response::MessageResponse;
