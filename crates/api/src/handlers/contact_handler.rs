//! Contact handler.

use axum::{response::Json, routing::post, Router};
use axum_extra::{extract::CookieJar, headers::UserAgent, TypedHeader};
use serde::Deserialize;
use utoipa::ToSchema;

use domain::fields::{CONTACT_FIRST_NAME, CONTACT_LAST_NAME, EMAIL, MESSAGE};
use domain::{DomainResult, Limits, Schema, ValidationFailures};

use crate::extractors::ValidatedForm;
use crate::state::AppState;

/// Name of the optional advertising cookie
pub const ADS_COOKIE: &str = "ads";

/// Contact form fields
#[derive(Debug, Deserialize, ToSchema)]
pub struct ContactForm {
    /// Between 1 and 20 characters
    #[schema(value_type = String, example = "Marty", min_length = 1, max_length = 20)]
    pub first_name: Option<String>,
    /// Between 1 and 20 characters
    #[schema(value_type = String, example = "McFly", min_length = 1, max_length = 20)]
    pub last_name: Option<String>,
    #[schema(value_type = String, example = "marty@hillvalley.com", format = "email")]
    pub email: Option<String>,
    /// At least 20 characters
    #[schema(
        value_type = String,
        example = "Great Scott! The flux capacitor is broken.",
        min_length = 20
    )]
    pub message: Option<String>,
}

/// Validated contact message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactMessage {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub message: String,
}

impl Schema for ContactMessage {
    type Raw = ContactForm;

    fn validate(raw: ContactForm, _limits: &Limits) -> DomainResult<Self> {
        let mut failures = ValidationFailures::new();
        let first_name = failures.check(CONTACT_FIRST_NAME.take_str(raw.first_name));
        let last_name = failures.check(CONTACT_LAST_NAME.take_str(raw.last_name));
        let email = failures.check(EMAIL.take_str(raw.email));
        let message = failures.check(MESSAGE.take_str(raw.message));

        let contact = match (first_name, last_name, email, message) {
            (Some(first_name), Some(last_name), Some(email), Some(message)) => Some(ContactMessage {
                first_name,
                last_name,
                email,
                message,
            }),
            _ => None,
        };
        failures.finish(contact)
    }
}

/// Create contact routes
pub fn contact_routes() -> Router<AppState> {
    Router::new().route("/contact", post(contact))
}

/// Send a contact message
///
/// Echoes the caller's `User-Agent` header, or `null` when it is absent.
#[utoipa::path(
    post,
    path = "/contact",
    tag = "Contact",
    request_body(content = ContactForm, content_type = "application/x-www-form-urlencoded"),
    params(
        ("User-Agent" = Option<String>, Header, description = "Caller user agent"),
        ("ads" = Option<String>, Cookie, description = "Advertising cookie")
    ),
    responses(
        (status = 200, description = "Caller user agent", body = String),
        (status = 422, description = "Validation error")
    )
)]
pub async fn contact(
    user_agent: Option<TypedHeader<UserAgent>>,
    jar: CookieJar,
    ValidatedForm(form): ValidatedForm<ContactMessage>,
) -> Json<Option<String>> {
    let ads = jar.get(ADS_COOKIE).map(|cookie| cookie.value().to_string());
    tracing::info!(email = %form.email, ads = ?ads, "Contact message received");

    Json(user_agent.map(|TypedHeader(agent)| agent.as_str().to_string()))
}
