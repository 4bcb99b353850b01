//! HTTP request handlers
//!
//! - `api` - Health check endpoint
//! - `transcribe` - Audio transcription endpoints (file upload and Base64)

pub mod api;
pub mod transcribe;
