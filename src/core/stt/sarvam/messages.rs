//! Message types for Sarvam AI speech-to-text API responses.
//!
//! The provider's response contract is not stable on the transcript key
//! name: depending on model and API version the text arrives under `text`
//! or `transcript`. The types here keep both optional and expose a single
//! probe method so the caller decides how to treat a response carrying
//! neither.

use serde::{Deserialize, Serialize};

/// Successful transcription response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpeechToTextResponse {
    /// Transcript under the primary key name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,

    /// Transcript under the secondary key name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transcript: Option<String>,

    /// Provider request ID, when present.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_id: Option<String>,

    /// Detected or echoed language code, when present.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language_code: Option<String>,
}

impl SpeechToTextResponse {
    /// Transcript text, probing `text` before `transcript`.
    pub fn transcript_text(&self) -> Option<&str> {
        self.text.as_deref().or(self.transcript.as_deref())
    }
}

/// Error response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SarvamErrorResponse {
    pub error: SarvamErrorDetail,
}

/// Error detail within an error response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SarvamErrorDetail {
    pub message: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
}

/// Best-effort MIME type for a file extension (with or without the dot).
pub fn mime_for_extension(extension: &str) -> &'static str {
    match extension.trim_start_matches('.') {
        "wav" => "audio/wav",
        "mp3" => "audio/mpeg",
        "m4a" | "mp4" => "audio/mp4",
        "ogg" | "oga" => "audio/ogg",
        "flac" => "audio/flac",
        "webm" => "audio/webm",
        "aac" => "audio/aac",
        _ => "application/octet-stream",
    }
}
