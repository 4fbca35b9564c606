//! Person API Library
//!
//! This crate provides the HTTP layer: validated extractors, handlers and
//! the OpenAPI document for the person endpoints.

pub mod config;
pub mod extractors;
pub mod handlers;
pub mod openapi;
pub mod routes;
pub mod state;

use std::net::SocketAddr;

use tracing::info;

use crate::config::ApiConfig;
use crate::routes::create_router;
use crate::state::AppState;

/// Run the HTTP server with the given configuration.
pub async fn run_server(config: ApiConfig) -> Result<(), Box<dyn std::error::Error>> {
    // Build address
    let addr: SocketAddr = config.service.addr().parse()?;

    info!(
        service = %config.service.service_name,
        max_person_age = config.validation.max_person_age,
        max_body_bytes = config.upload.max_body_bytes,
        "Validation limits loaded"
    );

    // Create app state
    let state = AppState::new(config);

    // Build router
    let app = create_router(state);

    info!("Person API listening on {}", addr);

    // Run server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
