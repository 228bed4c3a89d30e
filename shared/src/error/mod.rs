//! Error vocabulary for the HRMS service
//!
//! - [`ErrorCode`]: one code per failure the API can report
//! - [`ErrorCategory`]: whether the client or the storage backend caused it
//! - [`AppError`]: the error handlers return, rendered as the error envelope
//!
//! Every non-2xx response carries the same body shape:
//!
//! ```json
//! { "error": "employee not found" }
//! ```
//!
//! # Example
//!
//! ```
//! use shared::error::{AppError, ErrorCode};
//!
//! let err = AppError::new(ErrorCode::InvalidId);
//! assert_eq!(err.message, "Invalid id");
//! assert_eq!(err.http_status().as_u16(), 400);
//! ```

mod category;
mod codes;
mod http;
mod types;

pub use category::ErrorCategory;
pub use codes::{ErrorCode, InvalidErrorCode};
pub use types::{AppError, AppResult, ErrorBody};
