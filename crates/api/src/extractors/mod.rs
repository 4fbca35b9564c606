//! Request extractors that deserialize a raw shape and coerce it through a [`Schema`].

mod validated_form;
mod validated_json;
mod validated_path;
mod validated_query;

pub use validated_form::ValidatedForm;
pub use validated_json::ValidatedJson;
pub use validated_path::ValidatedPath;
pub use validated_query::ValidatedQuery;

use axum::{extract::FromRef, http::StatusCode};

use common::AppError;
use domain::{Limits, Schema};

/// Coerce the raw shape with the limits held in the router state.
fn validate<S, T>(raw: T::Raw, state: &S) -> Result<T, AppError>
where
    T: Schema,
    Limits: FromRef<S>,
{
    T::validate(raw, &Limits::from_ref(state)).map_err(|failures| {
        tracing::debug!("Request rejected: {}", failures);
        AppError::from(failures)
    })
}

/// Map a framework rejection onto the application error.
///
/// A payload that could be read but has the wrong overall shape is a
/// validation error; one that could not be read at all is a bad request.
pub(crate) fn rejection_error(status: StatusCode, message: String) -> AppError {
    tracing::debug!("Request rejected: {}", message);
    match status {
        StatusCode::PAYLOAD_TOO_LARGE => AppError::PayloadTooLarge,
        StatusCode::UNPROCESSABLE_ENTITY => AppError::validation(message),
        status if status.is_server_error() => AppError::internal(message),
        _ => AppError::bad_request(message),
    }
}
