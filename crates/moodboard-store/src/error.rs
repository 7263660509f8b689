//! Store error types.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while reading or writing persisted values.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Filesystem access failed.
    #[error("failed to access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Key cannot be mapped to a storage slot.
    #[error("invalid store key: {0:?}")]
    InvalidKey(String),

    /// History could not be serialized.
    #[error("failed to serialize mood history: {0}")]
    Serialize(#[from] serde_json::Error),

    /// No platform data directory could be resolved.
    #[error("could not resolve a data directory")]
    NoDataDir,
}

impl StoreError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        StoreError::Io {
            path: path.into(),
            source,
        }
    }
}
