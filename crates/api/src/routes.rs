//! Route configuration.

use axum::{extract::DefaultBodyLimit, Router};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use common::AppError;

use crate::handlers::{auth_routes, contact_routes, home_routes, person_routes, upload_routes};
use crate::openapi::ApiDoc;
use crate::state::AppState;

/// Create the main router with all routes.
pub fn create_router(state: AppState) -> Router {
    let body_limit = state.config.upload.max_body_bytes;

    Router::new()
        .merge(home_routes())
        .merge(person_routes())
        .merge(auth_routes())
        .merge(contact_routes())
        .merge(upload_routes())
        // Swagger UI
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .fallback(not_found)
        // Global middleware
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Unknown routes use the same error body as everything else
async fn not_found() -> AppError {
    AppError::NotFound
}
