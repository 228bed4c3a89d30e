//! Error category classification

use super::codes::ErrorCode;
use serde::{Deserialize, Serialize};

/// Who is responsible for an error, derived from the code range
///
/// - below 9000: request errors, caused by the client
/// - 9xxx: storage errors, caused by the backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCategory {
    /// Bad input or missing resource
    Request,
    /// Database failure or timeout
    Storage,
}

impl ErrorCategory {
    /// Determine category from error code value
    pub fn from_code(code: u16) -> Self {
        match code {
            0..9000 => Self::Request,
            _ => Self::Storage,
        }
    }
}

impl ErrorCode {
    /// Get the category for this error code
    pub fn category(&self) -> ErrorCategory {
        ErrorCategory::from_code(self.code())
    }
}
