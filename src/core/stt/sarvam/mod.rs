//! Sarvam AI speech-to-text provider.

mod client;
mod config;
pub mod messages;

pub use client::SarvamClient;
pub use config::{
    DEFAULT_API_URL, DEFAULT_LANGUAGE_CODE, DEFAULT_MODEL, SarvamConfig,
};
pub use messages::SpeechToTextResponse;
