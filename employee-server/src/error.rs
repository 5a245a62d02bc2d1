//! Service-layer error type
//!
//! `ServiceError` bridges repository errors and business-rule failures to the
//! API-layer error (`AppError`), so handlers can use `?` and leave the HTTP
//! mapping to `AppError`'s `IntoResponse`.

use axum::response::IntoResponse;
use shared::error::{AppError, ErrorCode};
use shared::models::EmployeeId;

use crate::db::RepoError;

#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    /// Another record already owns the email
    #[error("Email \"{0}\" already exists")]
    DuplicateEmail(String),

    /// The record to update does not exist
    #[error("The Employee to update does not exist in the database yet (id={0})")]
    NotFound(EmployeeId),

    /// Storage failure (auto-logged, mapped to a bare 500)
    #[error(transparent)]
    Repo(RepoError),
}

impl From<RepoError> for ServiceError {
    fn from(e: RepoError) -> Self {
        match e {
            // The storage backstop reports the same outcome as the service check
            RepoError::DuplicateEmail(email) => ServiceError::DuplicateEmail(email),
            other => ServiceError::Repo(other),
        }
    }
}

impl From<ServiceError> for AppError {
    fn from(e: ServiceError) -> Self {
        match e {
            ServiceError::DuplicateEmail(ref email) => {
                AppError::with_message(ErrorCode::EmployeeEmailExists, e.to_string())
                    .with_detail("email", email.clone())
            }
            ServiceError::NotFound(id) => {
                AppError::with_message(ErrorCode::EmployeeNotFound, e.to_string())
                    .with_detail("id", id)
            }
            ServiceError::Repo(repo_err) => {
                tracing::error!(error = %repo_err, "Service database error");
                AppError::new(ErrorCode::DatabaseError)
            }
        }
    }
}

impl IntoResponse for ServiceError {
    fn into_response(self) -> axum::response::Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}

/// Convenience type alias for service-layer results
pub type ServiceResult<T> = Result<T, ServiceError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_email_message() {
        let err = ServiceError::DuplicateEmail("johndoe@email.com".into());
        assert_eq!(err.to_string(), "Email \"johndoe@email.com\" already exists");

        let app: AppError = err.into();
        assert_eq!(app.code, ErrorCode::EmployeeEmailExists);
        assert_eq!(app.message, "Email \"johndoe@email.com\" already exists");
    }

    #[test]
    fn test_not_found_names_id() {
        let app: AppError = ServiceError::NotFound(42).into();
        assert_eq!(app.code, ErrorCode::EmployeeNotFound);
        assert!(app.message.ends_with("(id=42)"));
    }

    #[test]
    fn test_repo_backstop_becomes_duplicate_email() {
        let err: ServiceError = RepoError::DuplicateEmail("a@b.c".into()).into();
        assert!(matches!(err, ServiceError::DuplicateEmail(email) if email == "a@b.c"));
    }

    #[test]
    fn test_database_error_is_opaque() {
        let err: ServiceError = RepoError::Database(sqlx::Error::PoolTimedOut).into();
        let app: AppError = err.into();
        assert_eq!(app.code, ErrorCode::DatabaseError);
        assert_eq!(app.message, "Database error");
    }
}
