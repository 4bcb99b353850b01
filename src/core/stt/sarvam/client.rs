//! Sarvam AI STT client implementation.
//!
//! Sarvam's speech-to-text API is a REST batch API. This client:
//!
//! 1. Reads a local audio file
//! 2. Posts it as `multipart/form-data` with the configured model and
//!    language code
//! 3. Parses the response into a typed transcript
//!
//! The client holds a pooled `reqwest::Client` and is immutable after
//! construction, so one instance can serve concurrent requests without
//! locking.

use std::path::Path;

use reqwest::Client;
use reqwest::multipart::{Form, Part};
use tracing::{debug, info, warn};

use super::super::SttError;
use super::config::SarvamConfig;
use super::messages::{SarvamErrorResponse, SpeechToTextResponse, mime_for_extension};

/// User-Agent header value for API requests.
const USER_AGENT: &str = concat!("Vaani-Gateway/", env!("CARGO_PKG_VERSION"));

/// Sarvam AI speech-to-text client.
///
/// # Example
///
/// ```rust,ignore
/// use vaani_gateway::core::stt::{SarvamClient, SarvamConfig};
///
/// let client = SarvamClient::new(SarvamConfig::new("sk_..."))?;
/// let transcript = client.transcribe(Path::new("/tmp/clip.wav")).await?;
/// ```
pub struct SarvamClient {
    config: SarvamConfig,

    /// HTTP client for API requests (reused for connection pooling).
    http_client: Client,
}

impl SarvamClient {
    /// Create a new client, validating the configuration.
    pub fn new(config: SarvamConfig) -> Result<Self, SttError> {
        config.validate().map_err(SttError::ConfigurationError)?;

        let http_client = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .pool_max_idle_per_host(4)
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| {
                SttError::ConfigurationError(format!("Failed to create HTTP client: {e}"))
            })?;

        Ok(Self {
            config,
            http_client,
        })
    }

    /// Provider information string.
    pub fn provider_info(&self) -> &'static str {
        "Sarvam Saarika STT"
    }

    /// Configured model identifier.
    pub fn model(&self) -> &str {
        &self.config.model
    }

    /// Transcribe the audio file at `path`.
    ///
    /// The file must exist and be non-empty. The response must carry a
    /// transcript under `text` or `transcript`; a 2xx response with
    /// neither is an error, not an empty transcript.
    pub async fn transcribe(&self, path: &Path) -> Result<String, SttError> {
        let audio = tokio::fs::read(path).await.map_err(|e| {
            SttError::AudioProcessingError(format!(
                "failed to read audio file {}: {e}",
                path.display()
            ))
        })?;

        if audio.is_empty() {
            return Err(SttError::AudioProcessingError(format!(
                "audio file {} is empty",
                path.display()
            )));
        }

        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "audio.wav".to_string());
        let extension = path
            .extension()
            .map(|e| e.to_string_lossy().into_owned())
            .unwrap_or_default();

        info!(
            "Sending {} bytes of audio to Sarvam API (model: {})",
            audio.len(),
            self.config.model
        );

        let file_part = Part::bytes(audio)
            .file_name(file_name)
            .mime_str(mime_for_extension(&extension))
            .map_err(|e| SttError::ConfigurationError(format!("Invalid MIME type: {e}")))?;

        let form = Form::new()
            .part("file", file_part)
            .text("model", self.config.model.clone())
            .text("language_code", self.config.language_code.clone());

        let response = self
            .http_client
            .post(&self.config.api_url)
            .header("api-subscription-key", &self.config.api_key)
            .multipart(form)
            .send()
            .await
            .map_err(|e| SttError::NetworkError(format!("Request failed: {e}")))?;

        let request_id = response
            .headers()
            .get("x-request-id")
            .and_then(|v| v.to_str().ok())
            .map(String::from);

        if let Some(ref id) = request_id {
            debug!("Sarvam request ID: {}", id);
        }

        let status = response.status();
        let response_text = response
            .text()
            .await
            .map_err(|e| SttError::NetworkError(format!("Failed to read response: {e}")))?;

        if !status.is_success() {
            return Err(Self::classify_error(status, &response_text));
        }

        let parsed: SpeechToTextResponse =
            serde_json::from_str(&response_text).map_err(|e| {
                SttError::MalformedResponse(format!("Failed to parse response: {e}"))
            })?;

        match parsed.transcript_text() {
            Some(text) => {
                info!("Transcription complete: {} characters", text.len());
                Ok(text.to_string())
            }
            None => {
                warn!("Sarvam response carried no transcript: {}", response_text);
                Err(SttError::MalformedResponse(
                    "response contains neither \"text\" nor \"transcript\"".to_string(),
                ))
            }
        }
    }

    /// Map a non-2xx response to an error variant, extracting the
    /// provider's own message when the body parses as its error shape.
    fn classify_error(status: reqwest::StatusCode, body: &str) -> SttError {
        let error_msg =
            if let Ok(error_response) = serde_json::from_str::<SarvamErrorResponse>(body) {
                format!("Sarvam API error: {}", error_response.error.message)
            } else {
                format!("Sarvam API error ({status}): {body}")
            };

        match status.as_u16() {
            400 => SttError::ConfigurationError(error_msg),
            401 | 403 => SttError::AuthenticationFailed(error_msg),
            _ => SttError::ProviderError(error_msg),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let client = SarvamClient::new(SarvamConfig::new("sk_test")).unwrap();
        assert_eq!(client.provider_info(), "Sarvam Saarika STT");
        assert_eq!(client.model(), "saarika:v2.5");
    }

    #[test]
    fn test_empty_api_key_rejected() {
        let result = SarvamClient::new(SarvamConfig::new(""));
        assert!(matches!(result, Err(SttError::ConfigurationError(_))));
    }

    #[tokio::test]
    async fn test_transcribe_missing_file() {
        let client = SarvamClient::new(SarvamConfig::new("sk_test")).unwrap();
        let result = client
            .transcribe(Path::new("/nonexistent/audio.wav"))
            .await;
        assert!(matches!(result, Err(SttError::AudioProcessingError(_))));
    }

    #[tokio::test]
    async fn test_transcribe_empty_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.wav");
        tokio::fs::write(&path, b"").await.unwrap();

        let client = SarvamClient::new(SarvamConfig::new("sk_test")).unwrap();
        let result = client.transcribe(&path).await;
        assert!(matches!(result, Err(SttError::AudioProcessingError(_))));
    }

    #[test]
    fn test_classify_auth_error() {
        let err = SarvamClient::classify_error(
            reqwest::StatusCode::FORBIDDEN,
            r#"{"error": {"message": "invalid subscription key"}}"#,
        );
        match err {
            SttError::AuthenticationFailed(msg) => {
                assert!(msg.contains("invalid subscription key"));
            }
            other => panic!("Expected AuthenticationFailed, got: {other}"),
        }
    }

    #[test]
    fn test_classify_server_error_with_opaque_body() {
        let err = SarvamClient::classify_error(
            reqwest::StatusCode::INTERNAL_SERVER_ERROR,
            "upstream exploded",
        );
        match err {
            SttError::ProviderError(msg) => {
                assert!(msg.contains("upstream exploded"));
                assert!(msg.contains("500"));
            }
            other => panic!("Expected ProviderError, got: {other}"),
        }
    }
}
