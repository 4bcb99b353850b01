use axum::Json;
use serde_json::{Value, json};

/// Health check: application status plus a pointer at the API surface.
pub async fn health_check() -> Json<Value> {
    Json(json!({
        "status": "Service is running",
        "documentation": "POST audio to /transcribe_audio_file (multipart) or /transcribe_base64_audio (JSON)."
    }))
}
