//! Error types returned by the logging facility.
//!
//! Only [`LogError::WriteFailed`] and [`LogError::OutOfMemory`] can reach a
//! `dispatch` caller. The remaining variants come out of plugin registration
//! and explicit backend selection; environment bootstrap swallows them and
//! falls back to the default backend.

use thiserror::Error;

/// Errors produced by plugin registration, backend selection and dispatch
#[derive(Debug, Error)]
pub enum LogError {
    /// Allocation for a new namespace entry failed
    #[error("out of memory while creating namespace '{0}'")]
    OutOfMemory(String),

    /// A plugin with the same (case-insensitive) name is already registered
    #[error("logger plugin '{0}' is already registered")]
    DuplicateName(String),

    /// No plugin is registered under the requested scheme
    #[error("no logger plugin registered for scheme '{0}'")]
    NotFound(String),

    /// The plugin rejected the URI or could not acquire its resources
    #[error("failed to open '{plugin}' logger: {reason}")]
    OpenFailed { plugin: String, reason: String },

    /// The backend selector could not be parsed as a URI
    #[error("invalid logger URI '{uri}': {source}")]
    InvalidUri {
        uri: String,
        #[source]
        source: url::ParseError,
    },

    /// Writing a record to the backend's sink failed
    #[error("failed to write log record: {0}")]
    WriteFailed(#[from] std::io::Error),
}

impl LogError {
    /// Shorthand used by plugins to reject an open request
    pub fn open_failed(plugin: &str, reason: impl Into<String>) -> Self {
        LogError::OpenFailed {
            plugin: plugin.to_string(),
            reason: reason.into(),
        }
    }
}

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, LogError>;
