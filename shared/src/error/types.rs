//! Error type and the error envelope

use super::category::ErrorCategory;
use super::codes::ErrorCode;
use http::StatusCode;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Application error returned by every handler
///
/// `message` is what the client sees. `cause` keeps the underlying failure
/// (driver error, timeout) for the log and never leaves the server.
#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct AppError {
    /// The error code identifying the type of error
    pub code: ErrorCode,
    /// Client-facing message
    pub message: String,
    /// Underlying failure, logged but not serialized
    pub cause: Option<String>,
}

impl AppError {
    /// Create a new error with the fixed message for the error code
    pub fn new(code: ErrorCode) -> Self {
        Self {
            message: code.message().to_string(),
            code,
            cause: None,
        }
    }

    /// Attach the underlying failure
    pub fn with_cause(mut self, cause: impl ToString) -> Self {
        self.cause = Some(cause.to_string());
        self
    }

    /// Get the HTTP status code for this error
    pub fn http_status(&self) -> StatusCode {
        self.code.http_status()
    }

    // ==================== Convenience constructors ====================

    pub fn invalid_id() -> Self {
        Self::new(ErrorCode::InvalidId)
    }

    pub fn parse_error() -> Self {
        Self::new(ErrorCode::ParseError)
    }

    pub fn not_found() -> Self {
        Self::new(ErrorCode::EmployeeNotFound)
    }

    pub fn route_not_found() -> Self {
        Self::new(ErrorCode::RouteNotFound)
    }

    pub fn method_not_allowed() -> Self {
        Self::new(ErrorCode::MethodNotAllowed)
    }

    pub fn query_failed(cause: impl ToString) -> Self {
        Self::new(ErrorCode::QueryFailed).with_cause(cause)
    }

    pub fn create_failed(cause: impl ToString) -> Self {
        Self::new(ErrorCode::CreateFailed).with_cause(cause)
    }

    pub fn update_failed(cause: impl ToString) -> Self {
        Self::new(ErrorCode::UpdateFailed).with_cause(cause)
    }

    pub fn delete_failed(cause: impl ToString) -> Self {
        Self::new(ErrorCode::DeleteFailed).with_cause(cause)
    }
}

/// Body of every non-2xx response
///
/// ```json
/// { "error": "Invalid id" }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

impl From<&AppError> for ErrorBody {
    fn from(err: &AppError) -> Self {
        Self {
            error: err.message.clone(),
        }
    }
}

/// Type alias for Result with AppError
pub type AppResult<T> = Result<T, AppError>;

// ===== Axum Integration =====

impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        use axum::Json;

        let status = self.http_status();

        if self.code.category() == ErrorCategory::Storage {
            tracing::error!(
                code = %self.code,
                message = %self.message,
                cause = self.cause.as_deref().unwrap_or("-"),
                "Storage error occurred"
            );
        } else {
            tracing::debug!(code = %self.code, message = %self.message, "Request rejected");
        }

        (status, Json(ErrorBody::from(&self))).into_response()
    }
}
