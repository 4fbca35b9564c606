//! Login handler.

use axum::{response::Json, routing::post, Router};
use serde::Deserialize;
use utoipa::ToSchema;

use domain::fields::{LOGIN_PASSWORD, USERNAME};
use domain::{DomainResult, Limits, LoginOut, Schema, ValidationFailures};

use crate::extractors::ValidatedForm;
use crate::state::AppState;

/// Login form fields
#[derive(Debug, Deserialize, ToSchema)]
pub struct LoginForm {
    /// Between 1 and 20 characters
    #[schema(value_type = String, example = "marty", min_length = 1, max_length = 20)]
    pub username: Option<String>,
    #[schema(value_type = String, example = "hoverboard", format = Password)]
    pub password: Option<String>,
}

/// Validated login credentials
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Schema for Credentials {
    type Raw = LoginForm;

    fn validate(raw: LoginForm, _limits: &Limits) -> DomainResult<Self> {
        let mut failures = ValidationFailures::new();
        let username = failures.check(USERNAME.take_str(raw.username));
        let password = failures.check(LOGIN_PASSWORD.take_str(raw.password));

        let credentials = match (username, password) {
            (Some(username), Some(password)) => Some(Credentials { username, password }),
            _ => None,
        };
        failures.finish(credentials)
    }
}

/// Create login routes
pub fn auth_routes() -> Router<AppState> {
    Router::new().route("/login", post(login))
}

/// Log a user in
///
/// Credentials are only validated for shape; no session is created.
#[utoipa::path(
    post,
    path = "/login",
    tag = "Auth",
    request_body(content = LoginForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 200, description = "Login successful", body = LoginOut),
        (status = 422, description = "Validation error")
    )
)]
pub async fn login(ValidatedForm(credentials): ValidatedForm<Credentials>) -> Json<LoginOut> {
    tracing::info!(username = %credentials.username, "Login");
    Json(LoginOut::success(credentials.username))
}
