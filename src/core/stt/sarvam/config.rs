//! Configuration for the Sarvam AI STT client.

use std::time::Duration;

/// Default transcription model identifier.
pub const DEFAULT_MODEL: &str = "saarika:v2.5";

/// Default source language code.
pub const DEFAULT_LANGUAGE_CODE: &str = "gu-IN";

/// Default speech-to-text endpoint.
pub const DEFAULT_API_URL: &str = "https://api.sarvam.ai/speech-to-text";

/// Default request timeout.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(120);

/// Default connect timeout.
const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(30);

/// Sarvam STT client configuration.
///
/// Model and language code are fixed per process; requests never override
/// them.
#[derive(Debug, Clone)]
pub struct SarvamConfig {
    /// API subscription key, sent as the `api-subscription-key` header.
    pub api_key: String,

    /// Full endpoint URL. Overridable for tests against a mock server.
    pub api_url: String,

    /// Model identifier sent with every transcription request.
    pub model: String,

    /// Source language code sent with every transcription request.
    pub language_code: String,

    /// Overall request timeout.
    pub timeout: Duration,

    /// Connect timeout.
    pub connect_timeout: Duration,
}

impl SarvamConfig {
    /// Build a configuration with defaults for everything but the key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            api_url: DEFAULT_API_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            language_code: DEFAULT_LANGUAGE_CODE.to_string(),
            timeout: DEFAULT_TIMEOUT,
            connect_timeout: DEFAULT_CONNECT_TIMEOUT,
        }
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if self.api_key.trim().is_empty() {
            return Err("API key is required for Sarvam STT".to_string());
        }
        if self.api_url.trim().is_empty() {
            return Err("API URL must not be empty".to_string());
        }
        if self.model.trim().is_empty() {
            return Err("model identifier must not be empty".to_string());
        }
        if self.language_code.trim().is_empty() {
            return Err("language code must not be empty".to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SarvamConfig::new("sk_test");
        assert_eq!(config.model, "saarika:v2.5");
        assert_eq!(config.language_code, "gu-IN");
        assert_eq!(config.api_url, DEFAULT_API_URL);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_api_key_rejected() {
        let config = SarvamConfig::new("");
        let err = config.validate().unwrap_err();
        assert!(err.contains("API key"));
    }

    #[test]
    fn test_empty_model_rejected() {
        let mut config = SarvamConfig::new("sk_test");
        config.model = String::new();
        assert!(config.validate().is_err());
    }
}
