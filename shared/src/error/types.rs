//! Error types and problem response structures

use super::category::ErrorCategory;
use super::codes::ErrorCode;
use http::StatusCode;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use thiserror::Error;

/// Media type of every error body
pub const PROBLEM_JSON: &str = "application/problem+json";

/// Application error with structured error code and details
///
/// This is the one error type that leaves a handler. Its [`IntoResponse`]
/// implementation is the central translation from failures to HTTP:
/// the code picks the status, the message becomes the problem `detail`.
///
/// [`IntoResponse`]: axum::response::IntoResponse
#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct AppError {
    /// The error code identifying the type of error
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
    /// Optional additional details (field-level errors, context, etc.)
    pub details: Option<HashMap<String, Value>>,
}

impl AppError {
    /// Create a new error with the default message for the error code
    pub fn new(code: ErrorCode) -> Self {
        Self {
            message: code.message().to_string(),
            code,
            details: None,
        }
    }

    /// Create a new error with a custom message
    pub fn with_message(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: None,
        }
    }

    /// Add a detail entry to this error
    pub fn with_detail(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.details
            .get_or_insert_with(HashMap::new)
            .insert(key.into(), value.into());
        self
    }

    /// Get the HTTP status code for this error
    pub fn http_status(&self) -> StatusCode {
        self.code.http_status()
    }

    // ==================== Convenience constructors ====================

    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::ValidationFailed, msg)
    }

    /// Create an invalid request error
    pub fn invalid_request(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::InvalidRequest, msg)
    }

    /// Whether the client may see message and details
    fn is_public(&self) -> bool {
        !matches!(self.code.category(), ErrorCategory::System)
    }
}

/// RFC 7807 problem body
///
/// ```json
/// {
///   "type": "about:blank",
///   "title": "Bad Request",
///   "status": 400,
///   "detail": "Email \"johndoe@email.com\" already exists",
///   "code": 8002
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProblemDetail {
    #[serde(rename = "type")]
    pub problem_type: String,
    /// Reason phrase of the status
    pub title: String,
    pub status: u16,
    /// Human-readable explanation (absent for system errors)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
    /// Numeric [`ErrorCode`] (extension member)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<u16>,
    /// Structured details (extension member)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<HashMap<String, Value>>,
}

impl ProblemDetail {
    /// Build a problem for a status with only the reason phrase as title
    pub fn for_status(status: StatusCode) -> Self {
        Self {
            problem_type: "about:blank".to_string(),
            title: status
                .canonical_reason()
                .unwrap_or("Unknown Status")
                .to_string(),
            status: status.as_u16(),
            detail: None,
            code: None,
            details: None,
        }
    }
}

impl From<&AppError> for ProblemDetail {
    fn from(err: &AppError) -> Self {
        let mut problem = ProblemDetail::for_status(err.http_status());
        problem.title = err.code.title().to_string();
        problem.code = Some(err.code.code());
        if err.is_public() {
            problem.detail = Some(err.message.clone());
            problem.details = err.details.clone();
        }
        problem
    }
}

/// Type alias for Result with AppError
pub type AppResult<T> = Result<T, AppError>;

// ===== Axum Integration =====

impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        use axum::Json;
        use http::header::{CONTENT_TYPE, HeaderValue};

        let status = self.http_status();
        let body = ProblemDetail::from(&self);

        // Log system errors; they never reach the client in detail
        if !self.is_public() {
            tracing::error!(
                code = %self.code,
                message = %self.message,
                "System error occurred"
            );
        }

        let mut response = (status, Json(body)).into_response();
        response
            .headers_mut()
            .insert(CONTENT_TYPE, HeaderValue::from_static(PROBLEM_JSON));
        response
    }
}
