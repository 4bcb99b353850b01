//! Shared application state.

use std::sync::Arc;

use tracing::{error, info, warn};

use crate::config::ServerConfig;
use crate::core::stt::{SarvamClient, SarvamConfig};

/// State shared across all request handlers.
///
/// The transcription client is constructed exactly once here and injected
/// into handlers via axum `State`. When construction is impossible
/// (missing key) or fails, the server still starts; `stt` stays `None` and
/// every transcription request fails fast with service-unavailable.
pub struct AppState {
    pub config: ServerConfig,
    pub stt: Option<Arc<SarvamClient>>,
}

impl AppState {
    /// Build state from configuration, constructing the provider client.
    pub fn new(config: ServerConfig) -> Arc<Self> {
        let stt = match config.sarvam_api_key.as_deref() {
            Some(api_key) => {
                let mut sarvam = SarvamConfig::new(api_key);
                if let Some(url) = config.sarvam_api_url.clone() {
                    sarvam.api_url = url;
                }
                if let Some(model) = config.stt_model.clone() {
                    sarvam.model = model;
                }
                if let Some(language) = config.stt_language_code.clone() {
                    sarvam.language_code = language;
                }
                sarvam.timeout = std::time::Duration::from_secs(config.stt_timeout_secs);

                match SarvamClient::new(sarvam) {
                    Ok(client) => {
                        info!(
                            "Initialized {} (model: {})",
                            client.provider_info(),
                            client.model()
                        );
                        Some(Arc::new(client))
                    }
                    Err(e) => {
                        error!("Failed to initialize Sarvam client: {}", e);
                        None
                    }
                }
            }
            None => {
                warn!("SARVAM_API_KEY not set; transcription requests will fail");
                None
            }
        };

        Arc::new(Self { config, stt })
    }

    /// Build state around an already-constructed client (or none).
    /// Used by tests to point the gateway at a mock provider.
    pub fn with_client(config: ServerConfig, stt: Option<Arc<SarvamClient>>) -> Arc<Self> {
        Arc::new(Self { config, stt })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_without_api_key_has_no_client() {
        let state = AppState::new(ServerConfig::default());
        assert!(state.stt.is_none());
    }

    #[test]
    fn test_state_with_api_key_builds_client() {
        let config = ServerConfig {
            sarvam_api_key: Some("sk_test".to_string()),
            stt_model: Some("saarika:v2".to_string()),
            ..Default::default()
        };
        let state = AppState::new(config);
        let client = state.stt.as_ref().expect("client should initialize");
        assert_eq!(client.model(), "saarika:v2");
    }
}
