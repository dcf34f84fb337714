//! Error types for the record model

use std::path::PathBuf;

/// Errors raised while loading or parsing records
#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    /// Record JSON could not be decoded
    #[error("invalid record json: {0}")]
    Json(#[from] serde_json::Error),

    /// Record file could not be read
    #[error("failed to read {path}: {source}")]
    Io {
        /// File that was being read
        path: PathBuf,
        /// Underlying I/O failure
        #[source]
        source: std::io::Error,
    },

    /// A string did not name a known marital status
    #[error("unknown marital status: {0}")]
    UnknownMaritalStatus(String),

    /// A string did not name a known document type
    #[error("unknown document type: {0}")]
    UnknownDocumentType(String),
}
