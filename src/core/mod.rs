//! Core voice processing functionality
//!
//! Currently a single concern: batch speech-to-text via the Sarvam AI API.

pub mod stt;
