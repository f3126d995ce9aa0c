use std::path::PathBuf;

use thiserror::Error;

/// Failures while reading or rewriting a history file.
///
/// The io cause is exposed through `source()`; render with anyhow's `{:#}`
/// to include it. Malformed records are not errors; they are collected in
/// [`LoadedHistory::malformed`](super::LoadedHistory) instead.
#[derive(Debug, Error)]
pub enum HistoryError {
    #[error("History file '{}' not found", .path.display())]
    NotFound { path: PathBuf },

    #[error("Failed to read history file '{}'", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write history file '{}'", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl HistoryError {
    pub(crate) fn read(path: PathBuf, source: std::io::Error) -> Self {
        if source.kind() == std::io::ErrorKind::NotFound {
            HistoryError::NotFound { path }
        } else {
            HistoryError::Read { path, source }
        }
    }
}
