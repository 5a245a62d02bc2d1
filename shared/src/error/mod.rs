//! Unified error system for the employee service
//!
//! This module provides:
//! - [`ErrorCode`]: Standardized error codes for all error types
//! - [`ErrorCategory`]: Classification of errors by domain
//! - [`AppError`]: Rich error type with codes, messages, and details
//! - [`ProblemDetail`]: RFC 7807 body every [`AppError`] renders to
//!
//! # Error Code Ranges
//!
//! - 0xxx: General errors
//! - 8xxx: Employee errors
//! - 9xxx: System errors
//!
//! # Example
//!
//! ```
//! use shared::error::{AppError, ErrorCode, ProblemDetail};
//!
//! let err = AppError::with_message(ErrorCode::EmployeeNotFound, "no such employee")
//!     .with_detail("id", 42);
//!
//! let problem = ProblemDetail::from(&err);
//! assert_eq!(problem.status, 404);
//! ```

mod category;
mod codes;
mod http;
mod types;

pub use category::ErrorCategory;
pub use codes::{ErrorCode, InvalidErrorCode};
pub use types::{AppError, AppResult, PROBLEM_JSON, ProblemDetail};
