use axum::{Router, extract::DefaultBodyLimit, routing::post};
use tower_http::trace::TraceLayer;

use crate::handlers::transcribe;
use crate::state::AppState;
use std::sync::Arc;

/// Maximum accepted request body. Matches the provider's 25MB file limit.
const MAX_BODY_BYTES: usize = 25 * 1024 * 1024;

/// Create the API router with the transcription routes
pub fn create_api_router() -> Router<Arc<AppState>> {
    Router::new()
        .route(
            "/transcribe_audio_file",
            post(transcribe::transcribe_audio_file),
        )
        .route(
            "/transcribe_base64_audio",
            post(transcribe::transcribe_base64_audio),
        )
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .layer(TraceLayer::new_for_http())
}
