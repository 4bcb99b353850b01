//! Temporary audio storage.
//!
//! Incoming audio bytes are written to a uniquely named file in the OS
//! temp directory so the provider client can read them back as a file.
//! The file lives for exactly one request: callers release it explicitly
//! on every exit path, and `Drop` removes it best-effort if they do not.

use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, warn};
use uuid::Uuid;

/// Extension applied when the caller supplies none.
const DEFAULT_EXTENSION: &str = ".wav";

/// Local filesystem failure while persisting audio.
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("failed to write temporary audio file {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// A temporary audio file owned by a single request.
///
/// Created by [`TempAudioFile::store`], destroyed by
/// [`TempAudioFile::release`] or on drop, whichever comes first.
#[derive(Debug)]
pub struct TempAudioFile {
    path: PathBuf,
    released: bool,
}

impl TempAudioFile {
    /// Write `bytes` to a new uniquely named file with the given suffix.
    ///
    /// The extension defaults to `.wav` when empty and gains a leading dot
    /// when missing one. Each call produces a distinct path, so concurrent
    /// requests never collide.
    pub async fn store(bytes: &[u8], extension: &str) -> Result<Self, StorageError> {
        let suffix = normalize_extension(extension);
        let path = std::env::temp_dir().join(format!("audio-{}{}", Uuid::new_v4(), suffix));

        tokio::fs::write(&path, bytes)
            .await
            .map_err(|source| StorageError::Write {
                path: path.clone(),
                source,
            })?;

        debug!("Stored {} bytes at {}", bytes.len(), path.display());

        Ok(Self {
            path,
            released: false,
        })
    }

    /// Path of the stored file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Delete the file. A file that is already gone is not an error.
    pub async fn release(mut self) {
        self.released = true;
        match tokio::fs::remove_file(&self.path).await {
            Ok(()) => debug!("Released {}", self.path.display()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => warn!("Failed to remove {}: {}", self.path.display(), e),
        }
    }
}

impl Drop for TempAudioFile {
    fn drop(&mut self) {
        if !self.released {
            let _ = std::fs::remove_file(&self.path);
        }
    }
}

/// Ensure a usable suffix: default when empty, leading dot when missing.
fn normalize_extension(extension: &str) -> String {
    let trimmed = extension.trim();
    if trimmed.is_empty() {
        DEFAULT_EXTENSION.to_string()
    } else if trimmed.starts_with('.') {
        trimmed.to_string()
    } else {
        format!(".{trimmed}")
    }
}
