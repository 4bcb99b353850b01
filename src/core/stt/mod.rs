//! Speech-to-text provider clients.
//!
//! One provider is built in: Sarvam AI (`saarika` models), a REST batch API
//! consumed over multipart uploads. The client is constructed once at
//! startup and shared read-only across requests.

use thiserror::Error;

pub mod sarvam;

pub use sarvam::{SarvamClient, SarvamConfig, SpeechToTextResponse};

/// Errors surfaced by STT provider clients.
///
/// All variants end up as a 503 at the HTTP boundary; the distinction
/// matters for logs and for callers embedding the client directly.
#[derive(Error, Debug, Clone)]
pub enum SttError {
    /// Client configuration is invalid (missing key, bad URL, bad MIME).
    #[error("STT configuration error: {0}")]
    ConfigurationError(String),

    /// Provider rejected the credentials.
    #[error("STT authentication failed: {0}")]
    AuthenticationFailed(String),

    /// Request never completed (DNS, connect, timeout, body read).
    #[error("STT network error: {0}")]
    NetworkError(String),

    /// Provider returned an error response.
    #[error("STT provider error: {0}")]
    ProviderError(String),

    /// Local audio could not be read or was empty.
    #[error("STT audio processing error: {0}")]
    AudioProcessingError(String),

    /// Provider returned 2xx but the body had no usable transcript.
    #[error("malformed STT response: {0}")]
    MalformedResponse(String),
}
