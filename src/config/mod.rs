//! Configuration module for the Vaani gateway
//!
//! Configuration is loaded from environment variables (with `.env` support
//! via dotenvy, loaded in `main` before `from_env` is called). Every value
//! has a sensible default except the Sarvam API key, which is optional at
//! startup: a missing key keeps the server running but fails every
//! transcription request with a configuration error.
//!
//! # Example
//! ```rust,no_run
//! use vaani_gateway::config::ServerConfig;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ServerConfig::from_env()?;
//! println!("Server listening on {}", config.address());
//! # Ok(())
//! # }
//! ```

use thiserror::Error;

/// Default bind host.
const DEFAULT_HOST: &str = "0.0.0.0";

/// Default bind port.
const DEFAULT_PORT: u16 = 8000;

/// Default outbound request timeout for the transcription call (seconds).
const DEFAULT_STT_TIMEOUT_SECS: u64 = 120;

/// Configuration loading/validation error.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable present but unparseable.
    #[error("invalid value for {var}: {reason}")]
    InvalidValue { var: &'static str, reason: String },
}

/// Server configuration
///
/// Contains everything needed to run the gateway:
/// - Bind address (host, port)
/// - Sarvam AI credentials and endpoint
/// - Fixed transcription model and language code (never request-supplied)
/// - Outbound timeout and CORS settings
#[derive(Debug, Clone)]
pub struct ServerConfig {
    // Server settings
    pub host: String,
    pub port: u16,

    /// Sarvam AI API subscription key. `None` means the transcription
    /// client is never constructed and requests fail fast with 503.
    pub sarvam_api_key: Option<String>,

    /// Full URL of the Sarvam speech-to-text endpoint. Overridable for
    /// testing against a mock server.
    pub sarvam_api_url: Option<String>,

    /// Transcription model identifier sent with every request.
    pub stt_model: Option<String>,

    /// Source language code sent with every request.
    pub stt_language_code: Option<String>,

    /// Outbound request timeout in seconds.
    pub stt_timeout_secs: u64,

    /// Comma-separated allowed CORS origins, or "*" for any.
    /// `None` means same-origin only.
    pub cors_allowed_origins: Option<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            sarvam_api_key: None,
            sarvam_api_url: None,
            stt_model: None,
            stt_language_code: None,
            stt_timeout_secs: DEFAULT_STT_TIMEOUT_SECS,
            cors_allowed_origins: None,
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables.
    ///
    /// Recognized variables: `HOST`, `PORT`, `SARVAM_API_KEY`,
    /// `SARVAM_API_URL`, `STT_MODEL`, `STT_LANGUAGE_CODE`,
    /// `STT_TIMEOUT_SECS`, `CORS_ALLOWED_ORIGINS`.
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(host) = env_opt("HOST") {
            config.host = host;
        }

        if let Some(port) = env_opt("PORT") {
            config.port = port.parse().map_err(|e| ConfigError::InvalidValue {
                var: "PORT",
                reason: format!("{e}"),
            })?;
        }

        config.sarvam_api_key = env_opt("SARVAM_API_KEY");
        config.sarvam_api_url = env_opt("SARVAM_API_URL");
        config.stt_model = env_opt("STT_MODEL");
        config.stt_language_code = env_opt("STT_LANGUAGE_CODE");

        if let Some(timeout) = env_opt("STT_TIMEOUT_SECS") {
            config.stt_timeout_secs =
                timeout.parse().map_err(|e| ConfigError::InvalidValue {
                    var: "STT_TIMEOUT_SECS",
                    reason: format!("{e}"),
                })?;
        }

        config.cors_allowed_origins = env_opt("CORS_ALLOWED_ORIGINS");

        Ok(config)
    }

    /// Socket address string for binding.
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Read an environment variable, treating empty strings as absent.
fn env_opt(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}
