//! Request extractors
//!
//! Both reject with [`AppError`], so a bad body or path renders as a problem
//! response like every other failure.

use axum::extract::{FromRequest, FromRequestParts, Json, Path, Request};
use http::request::Parts;
use serde::de::DeserializeOwned;
use shared::error::{AppError, ErrorCode};
use shared::models::EmployeeId;
use shared::validation::Validate;

/// JSON body that has passed its field rules
///
/// An unreadable body is rejected before validation runs. Handlers taking
/// this extractor only see valid records.
#[derive(Debug, Clone)]
pub struct ValidatedJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate + Send,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| {
                tracing::debug!(error = %rejection.body_text(), "Unreadable request body");
                AppError::new(ErrorCode::InvalidRequest)
            })?;

        value.validate().into_result()?;
        Ok(Self(value))
    }
}

/// Employee id taken from the `{id}` path segment
#[derive(Debug, Clone, Copy)]
pub struct IdPath(pub EmployeeId);

impl<S> FromRequestParts<S> for IdPath
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|_| AppError::new(ErrorCode::InvalidRequest))?;

        raw.parse().map(Self).map_err(|_| {
            AppError::invalid_request(format!("Failed to convert 'id' with value: '{raw}'"))
        })
    }
}
