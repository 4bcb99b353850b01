//! Audio transcription endpoints.
//!
//! Both endpoints share one pipeline: validate the input shape, persist
//! the audio bytes to a per-request temporary file, hand the path to the
//! Sarvam client, and release the file before returning — on success and
//! on failure alike. The two differ only in how the audio arrives
//! (multipart upload vs Base64 JSON field).

use std::path::Path;
use std::sync::Arc;

use axum::Json;
use axum::extract::{Multipart, State};
use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;
use bytes::Bytes;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::core::stt::SarvamClient;
use crate::errors::app_error::{AppError, AppResult};
use crate::state::AppState;
use crate::storage::TempAudioFile;

/// Multipart field carrying the audio upload.
const UPLOAD_FIELD: &str = "file";

/// Fallback filename when an upload declares none.
const FALLBACK_FILENAME: &str = "audio.wav";

/// Structured response for transcription output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranscriptionResponse {
    /// Name of the submitted file.
    pub filename: String,
    /// Full text returned by the provider.
    pub transcribed_text: String,
}

/// Structured input for Base64 audio submission.
#[derive(Debug, Deserialize)]
pub struct Base64AudioRequest {
    /// Base64 encoded audio bytes.
    pub audio_data: String,

    /// Original file extension (e.g. ".wav", ".mp3").
    #[serde(default = "default_file_extension")]
    pub file_extension: String,

    /// Name of the file, echoed back in the response.
    #[serde(default = "default_filename")]
    pub filename: String,
}

fn default_file_extension() -> String {
    ".wav".to_string()
}

fn default_filename() -> String {
    "voice_note.wav".to_string()
}

/// `POST /transcribe_audio_file` — multipart upload.
///
/// Requires a `file` field with an `audio/*` content type. The extension
/// is derived from the declared filename (defaulting to `.wav`).
pub async fn transcribe_audio_file(
    State(state): State<Arc<AppState>>,
    mut multipart: Multipart,
) -> AppResult<Json<TranscriptionResponse>> {
    let mut upload: Option<(String, Bytes)> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::InvalidInput(format!("Malformed multipart body: {e}")))?
    {
        if field.name() != Some(UPLOAD_FIELD) {
            continue;
        }

        // Content type must be declared and audio before any bytes are read.
        match field.content_type() {
            Some(ct) if ct.starts_with("audio/") => {}
            _ => {
                return Err(AppError::InvalidInput(
                    "Invalid file type. Only audio files are accepted.".to_string(),
                ));
            }
        }

        let filename = field
            .file_name()
            .filter(|n| !n.is_empty())
            .unwrap_or(FALLBACK_FILENAME)
            .to_string();

        // A body read failure mid-stream is a local storage problem,
        // distinct from provider errors.
        let bytes = field
            .bytes()
            .await
            .map_err(|e| AppError::Storage(format!("failed to read upload: {e}")))?;

        upload = Some((filename, bytes));
        break;
    }

    let Some((filename, bytes)) = upload else {
        return Err(AppError::InvalidInput(format!(
            "Missing multipart field \"{UPLOAD_FIELD}\"."
        )));
    };

    info!(
        "Transcribing uploaded file {} ({} bytes)",
        filename,
        bytes.len()
    );

    let text = run_pipeline(&state, &bytes, &extension_of(&filename)).await?;

    Ok(Json(TranscriptionResponse {
        filename,
        transcribed_text: text,
    }))
}

/// `POST /transcribe_base64_audio` — Base64 payload (e.g. browser mic
/// recordings).
pub async fn transcribe_base64_audio(
    State(state): State<Arc<AppState>>,
    Json(request): Json<Base64AudioRequest>,
) -> AppResult<Json<TranscriptionResponse>> {
    let audio_bytes = BASE64.decode(&request.audio_data).map_err(|_| {
        AppError::InvalidInput("Invalid Base64 audio data received.".to_string())
    })?;

    info!(
        "Transcribing Base64 audio {} ({} bytes decoded)",
        request.filename,
        audio_bytes.len()
    );

    let text = run_pipeline(&state, &audio_bytes, &request.file_extension).await?;

    Ok(Json(TranscriptionResponse {
        filename: request.filename,
        transcribed_text: text,
    }))
}

/// Shared store → transcribe → release sequence.
///
/// The temp file is released before the provider outcome is propagated,
/// and `TempAudioFile`'s drop guard covers any path that skips the
/// explicit release.
async fn run_pipeline(
    state: &AppState,
    bytes: &[u8],
    extension: &str,
) -> AppResult<String> {
    let client = ready_client(state)?;

    let temp = TempAudioFile::store(bytes, extension).await?;
    let outcome = client.transcribe(temp.path()).await;
    temp.release().await;

    Ok(outcome?)
}

/// Fail fast when the provider client never initialized.
fn ready_client(state: &AppState) -> AppResult<&Arc<SarvamClient>> {
    state.stt.as_ref().ok_or(AppError::ClientUninitialized)
}

/// Extension of `filename` including the dot, defaulting to `.wav`.
fn extension_of(filename: &str) -> String {
    Path::new(filename)
        .extension()
        .map(|e| format!(".{}", e.to_string_lossy()))
        .unwrap_or_else(|| ".wav".to_string())
}
