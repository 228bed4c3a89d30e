//! Error codes reported by the HRMS API
//!
//! Codes are grouped by range:
//! - 1xxx: request errors (the client sent something unusable)
//! - 2xxx: lookup and routing errors
//! - 9xxx: storage errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Error code enum
///
/// Each code carries a fixed client-facing message, see [`ErrorCode::message`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 1xxx: Request ====================
    /// Path id is not a valid document identifier
    InvalidId = 1001,
    /// Request body could not be decoded as an employee
    ParseError = 1002,

    // ==================== 2xxx: Lookup and routing ====================
    /// Target employee does not exist
    EmployeeNotFound = 2001,
    /// No route matches the request path
    RouteNotFound = 2002,
    /// The path exists but not for this method
    MethodNotAllowed = 2003,

    // ==================== 9xxx: Storage ====================
    /// Listing or reading employees failed
    QueryFailed = 9001,
    /// Inserting an employee failed
    CreateFailed = 9002,
    /// Updating an employee failed
    UpdateFailed = 9003,
    /// Deleting an employee failed
    DeleteFailed = 9004,
}

impl ErrorCode {
    /// Get the numeric code value
    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    /// Client-facing message, sent verbatim in the error envelope
    pub const fn message(&self) -> &'static str {
        match self {
            ErrorCode::InvalidId => "Invalid id",
            ErrorCode::ParseError => "Error parsing employee",
            ErrorCode::EmployeeNotFound => "employee not found",
            ErrorCode::RouteNotFound => "route not found",
            ErrorCode::MethodNotAllowed => "method not allowed",
            ErrorCode::QueryFailed => "error finding employee",
            ErrorCode::CreateFailed => "error creating employee",
            ErrorCode::UpdateFailed => "error updating employee",
            ErrorCode::DeleteFailed => "error deleting employee",
        }
    }
}

impl From<ErrorCode> for u16 {
    #[inline]
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

/// Returned when converting an unknown numeric value into an [`ErrorCode`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidErrorCode(pub u16);

impl fmt::Display for InvalidErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid error code: {}", self.0)
    }
}

impl std::error::Error for InvalidErrorCode {}

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            1001 => Ok(ErrorCode::InvalidId),
            1002 => Ok(ErrorCode::ParseError),
            2001 => Ok(ErrorCode::EmployeeNotFound),
            2002 => Ok(ErrorCode::RouteNotFound),
            2003 => Ok(ErrorCode::MethodNotAllowed),
            9001 => Ok(ErrorCode::QueryFailed),
            9002 => Ok(ErrorCode::CreateFailed),
            9003 => Ok(ErrorCode::UpdateFailed),
            9004 => Ok(ErrorCode::DeleteFailed),
            _ => Err(InvalidErrorCode(value)),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
