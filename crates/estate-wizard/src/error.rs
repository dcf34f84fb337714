//! Error types for the wizard crate
//!
//! Navigation and visibility are total; only configuration loading and
//! explicit family lookups can fail.

use std::path::PathBuf;

/// Wizard error type
#[derive(Debug, thiserror::Error)]
pub enum WizardError {
    /// A document-family name was not recognized
    #[error("unknown document family: {0}")]
    UnknownFamily(String),

    /// Configuration TOML could not be decoded
    #[error("invalid wizard config: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// Configuration decoded but holds unusable values
    #[error("invalid wizard config: {0}")]
    InvalidConfig(String),

    /// Configuration file could not be read
    #[error("failed to read config {path}: {source}")]
    Io {
        /// File that was being read
        path: PathBuf,
        /// Underlying I/O failure
        #[source]
        source: std::io::Error,
    },
}
