//! HTTP status code mapping for error codes

use super::codes::ErrorCode;
use http::StatusCode;

impl ErrorCode {
    /// Get the appropriate HTTP status code for this error code
    ///
    /// A duplicate email is reported as 400 rather than 409: clients treat it
    /// like any other rejected input.
    pub fn http_status(&self) -> StatusCode {
        match self {
            // 404 Not Found
            Self::EmployeeNotFound => StatusCode::NOT_FOUND,

            // 400 Bad Request
            Self::ValidationFailed | Self::InvalidRequest | Self::EmployeeEmailExists => {
                StatusCode::BAD_REQUEST
            }

            // 500 Internal Server Error
            Self::DatabaseError => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Reason phrase used as the problem `title`
    pub fn title(&self) -> &'static str {
        self.http_status()
            .canonical_reason()
            .unwrap_or("Internal Server Error")
    }
}
