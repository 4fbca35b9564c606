//! Validated query string extractor.

use axum::{
    async_trait,
    extract::{FromRef, FromRequestParts, Query},
    http::request::Parts,
};

use common::AppError;
use domain::{Limits, Schema};

use super::{rejection_error, validate};

/// Query string extractor that validates every parameter.
pub struct ValidatedQuery<T>(pub T);

#[async_trait]
impl<S, T> FromRequestParts<S> for ValidatedQuery<T>
where
    S: Send + Sync,
    T: Schema + Send,
    T::Raw: Send,
    Limits: FromRef<S>,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(raw) = Query::<T::Raw>::from_request_parts(parts, state)
            .await
            .map_err(|e| rejection_error(e.status(), e.body_text()))?;

        let value = validate::<S, T>(raw, state)?;

        Ok(ValidatedQuery(value))
    }
}
