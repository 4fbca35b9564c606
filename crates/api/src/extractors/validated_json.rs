//! Validated JSON extractor.

use axum::{
    async_trait,
    extract::{rejection::JsonRejection, FromRef, FromRequest, Request},
    Json,
};

use common::AppError;
use domain::{Limits, Schema};

use super::{rejection_error, validate};

/// JSON extractor that automatically validates the payload.
pub struct ValidatedJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    S: Send + Sync,
    T: Schema + Send,
    T::Raw: Send,
    Limits: FromRef<S>,
    Json<T::Raw>: FromRequest<S, Rejection = JsonRejection>,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        // Extract JSON
        let Json(raw) = Json::<T::Raw>::from_request(req, state)
            .await
            .map_err(|e| rejection_error(e.status(), e.body_text()))?;

        // Coerce and validate
        let value = validate::<S, T>(raw, state)?;

        Ok(ValidatedJson(value))
    }
}
