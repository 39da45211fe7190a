//! Geoapify adapter configuration

use serde::{Deserialize, Serialize};

/// Configuration for the Geoapify adapter
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeoapifyConfig {
    /// API key used for authentication (required, non-empty)
    pub api_key: String,

    /// Base URL for the Geoapify API
    ///
    /// Overridable to point at a mock server in tests.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_base_url() -> String {
    "https://api.geoapify.com/v1".to_string()
}

const fn default_timeout_secs() -> u64 {
    10
}

impl GeoapifyConfig {
    /// Create a configuration with the given API key and defaults
    #[must_use]
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }

    /// Create a configuration pointed at a test server
    #[must_use]
    pub fn for_testing(base_url: impl Into<String>) -> Self {
        Self {
            api_key: "test-key".to_string(),
            base_url: base_url.into(),
            timeout_secs: 5,
        }
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error message if the configuration is invalid.
    pub fn validate(&self) -> Result<(), String> {
        if self.api_key.trim().is_empty() {
            return Err("api_key must be a non-empty string".to_string());
        }

        if self.base_url.is_empty() {
            return Err("base_url must not be empty".to_string());
        }

        if self.timeout_secs == 0 {
            return Err("timeout_secs must be greater than 0".to_string());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_applies_defaults() {
        let config = GeoapifyConfig::new("key-123");
        assert_eq!(config.api_key, "key-123");
        assert_eq!(config.base_url, "https://api.geoapify.com/v1");
        assert_eq!(config.timeout_secs, 10);
    }

    #[test]
    fn test_testing_config() {
        let config = GeoapifyConfig::for_testing("http://127.0.0.1:9999");
        assert_eq!(config.base_url, "http://127.0.0.1:9999");
        assert_eq!(config.timeout_secs, 5);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validation_empty_api_key() {
        assert!(GeoapifyConfig::new("").validate().is_err());
        assert!(GeoapifyConfig::new("   ").validate().is_err());
    }

    #[test]
    fn test_validation_empty_base_url() {
        let config = GeoapifyConfig {
            base_url: String::new(),
            ..GeoapifyConfig::new("key")
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_zero_timeout() {
        let config = GeoapifyConfig {
            timeout_secs: 0,
            ..GeoapifyConfig::new("key")
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_serialization_defaults_absent_fields() {
        let config: GeoapifyConfig =
            serde_json::from_str(r#"{"api_key":"key-123"}"#).expect("deserialize");
        assert_eq!(config.base_url, "https://api.geoapify.com/v1");
        assert_eq!(config.timeout_secs, 10);
    }
}
