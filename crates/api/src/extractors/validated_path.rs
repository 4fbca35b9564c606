//! Validated path parameter extractor.

use axum::{
    async_trait,
    extract::{FromRef, FromRequestParts, Path},
    http::request::Parts,
};

use common::AppError;
use domain::{Limits, Schema};

use super::{rejection_error, validate};

/// Path extractor that validates the captured parameters.
pub struct ValidatedPath<T>(pub T);

#[async_trait]
impl<S, T> FromRequestParts<S> for ValidatedPath<T>
where
    S: Send + Sync,
    T: Schema + Send,
    T::Raw: Send,
    Limits: FromRef<S>,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<T::Raw>::from_request_parts(parts, state)
            .await
            .map_err(|e| rejection_error(e.status(), e.body_text()))?;

        let value = validate::<S, T>(raw, state)?;

        Ok(ValidatedPath(value))
    }
}
