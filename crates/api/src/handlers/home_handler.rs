//! Home handler.

use axum::{response::Json, routing::get, Router};
use serde::Serialize;
use utoipa::ToSchema;

use crate::state::AppState;

/// Greeting returned by the root endpoint.
#[derive(Debug, Serialize, ToSchema)]
pub struct HelloResponse {
    #[serde(rename = "Hello")]
    #[schema(example = "World")]
    pub hello: String,
}

/// Create home routes
pub fn home_routes() -> Router<AppState> {
    Router::new().route("/", get(home))
}

/// Say hello
#[utoipa::path(
    get,
    path = "/",
    tag = "Home",
    responses(
        (status = 200, description = "Greeting", body = HelloResponse)
    )
)]
pub async fn home() -> Json<HelloResponse> {
    Json(HelloResponse {
        hello: "World".to_string(),
    })
}
