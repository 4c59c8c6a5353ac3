//! Error types for the extension runtime.

use thiserror::Error;

/// Result type alias for extension runtime operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in extension runtime operations.
#[derive(Error, Debug)]
pub enum Error {
    // Manifest errors
    #[error("Failed to read manifest at {path}: {source}")]
    ManifestReadFailed {
        path: String,
        source: std::io::Error,
    },

    #[error("Failed to parse manifest at {path}: {reason}")]
    ManifestParseFailed { path: String, reason: String },

    // Module errors
    #[error("Failed to load module at {path}: {reason}")]
    ModuleLoadFailed { path: String, reason: String },

    // Lifecycle errors
    #[error("Instance construction failed: {0}")]
    InstantiateFailed(String),

    #[error("Enable failed: {0}")]
    EnableFailed(String),

    #[error("Disable failed: {0}")]
    DisableFailed(String),

    // Registry errors
    #[error("Operation requires the authoritative process: {0}")]
    NotAuthoritative(String),

    // Serialization errors
    #[error("Serialization error: {0}")]
    SerializationError(String),

    // Generic errors
    #[error("Internal error: {0}")]
    Internal(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::SerializationError(err.to_string())
    }
}
