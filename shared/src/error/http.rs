//! HTTP status code mapping for error codes

use super::codes::ErrorCode;
use http::StatusCode;

impl ErrorCode {
    /// Get the HTTP status code for this error code
    pub fn http_status(&self) -> StatusCode {
        match self {
            // 400 Bad Request
            Self::InvalidId | Self::ParseError => StatusCode::BAD_REQUEST,

            // Listing failures have always been reported as 400
            Self::QueryFailed => StatusCode::BAD_REQUEST,

            // 404 Not Found
            Self::EmployeeNotFound | Self::RouteNotFound => StatusCode::NOT_FOUND,

            // 405 Method Not Allowed
            Self::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,

            // 500 Internal Server Error
            Self::CreateFailed | Self::UpdateFailed | Self::DeleteFailed => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}
