//! Shared configuration structures.

use serde::{Deserialize, Serialize};

/// Base service configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServiceConfig {
    /// Service name for logging and tracing
    pub service_name: String,
    /// Host address to bind
    pub host: String,
    /// Port to listen on
    pub port: u16,
    /// Log level
    pub log_level: String,
}

impl ServiceConfig {
    /// Address in `host:port` form.
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            service_name: "person-api".to_string(),
            host: "0.0.0.0".to_string(),
            port: 8000,
            log_level: "info".to_string(),
        }
    }
}

/// Request validation configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ValidationConfig {
    /// Inclusive upper bound applied to every age field
    pub max_person_age: i64,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            max_person_age: domain::DEFAULT_MAX_AGE,
        }
    }
}

impl From<&ValidationConfig> for domain::Limits {
    fn from(config: &ValidationConfig) -> Self {
        domain::Limits::new(config.max_person_age)
    }
}

/// Upload handling configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UploadConfig {
    /// Largest accepted request body, in bytes
    pub max_body_bytes: usize,
}

impl Default for UploadConfig {
    fn default() -> Self {
        Self {
            max_body_bytes: 10 * 1024 * 1024,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_service_addr() {
        let config = ServiceConfig {
            host: "127.0.0.1".to_string(),
            port: 9000,
            ..Default::default()
        };
        assert_eq!(config.addr(), "127.0.0.1:9000");
    }

    #[test]
    fn test_validation_config_into_limits() {
        let config = ValidationConfig { max_person_age: 120 };
        assert_eq!(domain::Limits::from(&config).max_age, 120);
        assert_eq!(
            domain::Limits::from(&ValidationConfig::default()),
            domain::Limits::default()
        );
    }
}
