//! Error types for the shortcut bridge.
//!
//! Most degraded conditions (unsupported platform, duplicate IDs, ineligible
//! icons) are logged rather than returned. The variants here cover what does
//! reach the caller: native failures, invalid requests and configuration.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the shortcut bridge.
#[derive(Debug, Error)]
pub enum ShortcutError {
    /// The platform shortcut service rejected or failed a call.
    #[error("Native call {operation} failed: {message}")]
    Native { operation: String, message: String },

    #[error("Validation error for {field}: {message}")]
    Validation { field: String, message: String },

    #[error("Icon encoding failed: {message}")]
    IconEncoding {
        message: String,
        #[source]
        source: Option<image::ImageError>,
    },

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("JSON error: {message}")]
    Json {
        message: String,
        #[source]
        source: Option<serde_json::Error>,
    },

    #[error("IO error at {path:?}: {message}")]
    Io {
        message: String,
        path: Option<PathBuf>,
        #[source]
        source: Option<std::io::Error>,
    },
}

/// Result type alias for shortcut operations.
pub type Result<T> = std::result::Result<T, ShortcutError>;

impl From<std::io::Error> for ShortcutError {
    fn from(err: std::io::Error) -> Self {
        ShortcutError::Io {
            message: err.to_string(),
            path: None,
            source: Some(err),
        }
    }
}

impl From<serde_json::Error> for ShortcutError {
    fn from(err: serde_json::Error) -> Self {
        ShortcutError::Json {
            message: err.to_string(),
            source: Some(err),
        }
    }
}

impl From<image::ImageError> for ShortcutError {
    fn from(err: image::ImageError) -> Self {
        ShortcutError::IconEncoding {
            message: err.to_string(),
            source: Some(err),
        }
    }
}

impl ShortcutError {
    /// Create a native failure for the named platform operation.
    pub fn native(operation: impl Into<String>, message: impl Into<String>) -> Self {
        ShortcutError::Native {
            operation: operation.into(),
            message: message.into(),
        }
    }

    /// Create an IO error with path context.
    pub fn io_with_path(err: std::io::Error, path: impl Into<PathBuf>) -> Self {
        ShortcutError::Io {
            message: err.to_string(),
            path: Some(path.into()),
            source: Some(err),
        }
    }

    /// Whether the error came from the platform boundary.
    pub fn is_native(&self) -> bool {
        matches!(self, ShortcutError::Native { .. })
    }
}
