//! Validated form extractor.

use axum::{
    async_trait,
    extract::{rejection::FormRejection, FromRef, FromRequest, Request},
    Form,
};

use common::AppError;
use domain::{Limits, Schema};

use super::{rejection_error, validate};

/// URL-encoded form extractor that validates every field.
pub struct ValidatedForm<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for ValidatedForm<T>
where
    S: Send + Sync,
    T: Schema + Send,
    T::Raw: Send,
    Limits: FromRef<S>,
    Form<T::Raw>: FromRequest<S, Rejection = FormRejection>,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Form(raw) = Form::<T::Raw>::from_request(req, state)
            .await
            .map_err(|e| rejection_error(e.status(), e.body_text()))?;

        let value = validate::<S, T>(raw, state)?;

        Ok(ValidatedForm(value))
    }
}
