//! # Submission Configuration
//!
//! Endpoint and timeout settings for the HTTP submission client.
//!
//! Loaded from `COTIZADOR_`-prefixed environment variables
//! (`COTIZADOR_ENDPOINT_URL`, `COTIZADOR_TIMEOUT_MS`) or constructed
//! directly; every field has a serde default.

use serde::{Deserialize, Serialize};

fn default_endpoint_url() -> String {
    "http://localhost:8080/api/quotes".to_string()
}

const fn default_timeout_ms() -> u64 {
    10_000
}

/// Settings for the HTTP submission client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionConfig {
    /// Endpoint receiving the quote payload.
    #[serde(default = "default_endpoint_url")]
    pub endpoint_url: String,
    /// Transport timeout in milliseconds.
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

impl Default for SubmissionConfig {
    fn default() -> Self {
        Self {
            endpoint_url: default_endpoint_url(),
            timeout_ms: default_timeout_ms(),
        }
    }
}

impl SubmissionConfig {
    /// Loads the configuration from the environment.
    ///
    /// Unset variables fall back to the serde defaults.
    ///
    /// # Errors
    ///
    /// Returns a [`config::ConfigError`] if a variable is present but
    /// cannot be deserialized (e.g. a non-numeric timeout).
    pub fn from_env() -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(config::Environment::with_prefix("COTIZADOR"))
            .build()?
            .try_deserialize()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = SubmissionConfig::default();
        assert_eq!(config.endpoint_url, "http://localhost:8080/api/quotes");
        assert_eq!(config.timeout_ms, 10_000);
    }

    #[test]
    fn deserialize_with_partial_fields() {
        let config: SubmissionConfig =
            serde_json::from_str("{\"endpoint_url\":\"https://api.example.com/quotes\"}").unwrap();
        assert_eq!(config.endpoint_url, "https://api.example.com/quotes");
        assert_eq!(config.timeout_ms, 10_000);
    }
}
