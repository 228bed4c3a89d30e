//! API Response types
//!
//! Success envelopes for the write endpoints. Read endpoints return the
//! employee (or list) directly.

use serde::{Deserialize, Serialize};

/// Create, update and delete responses
///
/// ```json
/// { "message": "employee created", "data": { ... } }
/// ```
///
/// `data` is only present on create.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessageResponse<T> {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> MessageResponse<T> {
    /// Create a response carrying data
    pub fn with_data(message: impl Into<String>, data: T) -> Self {
        Self {
            message: message.into(),
            data: Some(data),
        }
    }
}

impl MessageResponse<()> {
    /// Create a response with only a message
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            data: None,
        }
    }
}
