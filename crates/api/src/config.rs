//! API configuration.

use std::env;

use common::{ServiceConfig, UploadConfig, ValidationConfig};
use domain::Limits;

/// API configuration.
#[derive(Debug, Clone, Default)]
pub struct ApiConfig {
    /// Bind address and logging
    pub service: ServiceConfig,
    /// Runtime validation bounds
    pub validation: ValidationConfig,
    /// Request body limits
    pub upload: UploadConfig,
}

impl ApiConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            service: ServiceConfig {
                service_name: defaults.service.service_name,
                host: env::var("API_HOST").unwrap_or(defaults.service.host),
                port: env::var("API_PORT")
                    .ok()
                    .and_then(|p| p.parse().ok())
                    .unwrap_or(defaults.service.port),
                log_level: env::var("RUST_LOG").unwrap_or(defaults.service.log_level),
            },
            validation: ValidationConfig {
                max_person_age: env::var("PERSON_MAX_AGE")
                    .ok()
                    .and_then(|a| a.parse().ok())
                    .filter(|age: &i64| *age > 0)
                    .unwrap_or(defaults.validation.max_person_age),
            },
            upload: UploadConfig {
                max_body_bytes: env::var("UPLOAD_LIMIT_BYTES")
                    .ok()
                    .and_then(|b| b.parse().ok())
                    .unwrap_or(defaults.upload.max_body_bytes),
            },
        }
    }

    /// Validation bounds shared by every extractor.
    pub fn limits(&self) -> Limits {
        Limits::from(&self.validation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_limits() {
        let config = ApiConfig::default();
        assert_eq!(config.limits().max_age, domain::DEFAULT_MAX_AGE);
        assert_eq!(config.service.port, 8000);
    }
}
