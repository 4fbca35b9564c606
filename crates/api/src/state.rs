//! Application state shared across handlers.

use std::sync::Arc;

use axum::extract::FromRef;
use domain::Limits;

use crate::config::ApiConfig;

/// Application state shared across handlers.
///
/// Holds immutable configuration only; nothing is shared between requests.
#[derive(Clone)]
pub struct AppState {
    pub limits: Limits,
    pub config: Arc<ApiConfig>,
}

impl AppState {
    /// Create new app state.
    pub fn new(config: ApiConfig) -> Self {
        Self {
            limits: config.limits(),
            config: Arc::new(config),
        }
    }
}

impl FromRef<AppState> for Limits {
    fn from_ref(state: &AppState) -> Self {
        state.limits
    }
}
