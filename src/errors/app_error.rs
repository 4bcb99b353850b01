//! Application-level error type for HTTP handlers.
//!
//! Every handler returns `AppResult<T>`; the error half maps onto the
//! response taxonomy: client input problems are 400, local storage
//! failures are 500, provider failures (including a client that never
//! initialized) are 503. Errors never propagate past the handler
//! boundary.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use thiserror::Error;
use tracing::{error, warn};

use crate::core::stt::SttError;
use crate::storage::StorageError;

/// Result type for HTTP handlers.
pub type AppResult<T> = Result<T, AppError>;

/// Errors surfaced to API callers.
#[derive(Error, Debug)]
pub enum AppError {
    /// Malformed or disallowed request shape. Never retried.
    #[error("{0}")]
    InvalidInput(String),

    /// Local filesystem failure while persisting audio.
    #[error("Failed to save audio temporarily: {0}")]
    Storage(String),

    /// The transcription provider is unreachable, misconfigured, or
    /// returned an error. The provider's message rides along for
    /// diagnostics.
    #[error("Transcription service failed: {0}")]
    Provider(String),

    /// The provider client never became ready at startup.
    #[error("Transcription client is not initialized. Check SARVAM_API_KEY.")]
    ClientUninitialized,
}

impl AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            AppError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Provider(_) | AppError::ClientUninitialized => {
                StatusCode::SERVICE_UNAVAILABLE
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        match &self {
            AppError::InvalidInput(msg) => warn!("Rejected request: {}", msg),
            other => error!("Request failed: {}", other),
        }
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}

impl From<StorageError> for AppError {
    fn from(err: StorageError) -> Self {
        AppError::Storage(err.to_string())
    }
}

impl From<SttError> for AppError {
    fn from(err: SttError) -> Self {
        AppError::Provider(err.to_string())
    }
}
