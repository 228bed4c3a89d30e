//! Utilities
//!
//! - [`AppError`] - application error type (from shared::error)
//! - [`logger`] - tracing subscriber setup

pub mod logger;

// Re-export error types from shared
pub use shared::error::{AppError, AppResult, ErrorCategory, ErrorCode};
