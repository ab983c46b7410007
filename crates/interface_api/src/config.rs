//! API configuration

use serde::Deserialize;
use std::time::Duration;

/// API configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    /// Server host
    pub host: String,
    /// Server port
    pub port: u16,
    /// JWT secret for authentication
    pub jwt_secret: String,
    /// JWT expiration in seconds
    pub jwt_expiration_secs: u64,
    /// Log level
    pub log_level: String,
    /// Simulated upload delay before a claim is classified, in milliseconds
    pub processing_delay_ms: u64,
    /// Largest accepted claim submission body, in bytes. Photos arrive base64-encoded
    pub max_upload_bytes: usize,
    /// Seed for the damage classifier; random when absent
    #[serde(default)]
    pub classifier_seed: Option<u64>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            jwt_secret: "change-me-in-production".to_string(),
            jwt_expiration_secs: 3600,
            log_level: "info".to_string(),
            processing_delay_ms: 2000,
            max_upload_bytes: 16 * 1024 * 1024,
            classifier_seed: None,
        }
    }
}

impl ApiConfig {
    /// Loads configuration from `API_*` environment variables, falling back to defaults
    pub fn from_env() -> Result<Self, config::ConfigError> {
        let defaults = Self::default();

        config::Config::builder()
            .set_default("host", defaults.host)?
            .set_default("port", i64::from(defaults.port))?
            .set_default("jwt_secret", defaults.jwt_secret)?
            .set_default("jwt_expiration_secs", defaults.jwt_expiration_secs as i64)?
            .set_default("log_level", defaults.log_level)?
            .set_default("processing_delay_ms", defaults.processing_delay_ms as i64)?
            .set_default("max_upload_bytes", defaults.max_upload_bytes as i64)?
            .add_source(config::Environment::with_prefix("API").try_parsing(true))
            .build()?
            .try_deserialize()
    }

    /// Returns the server address
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn processing_delay(&self) -> Duration {
        Duration::from_millis(self.processing_delay_ms)
    }
}
