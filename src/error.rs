//! Error types for json-columns
//!
//! Every stage of the pipeline returns `Result<T, Error>`. All errors are
//! fatal: the binary prints the message on stderr and exits non-zero.

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for json-columns
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Request Errors
    // ============================================================================
    #[error("Malformed request: {message}")]
    MalformedRequest { message: String },

    // ============================================================================
    // Document Errors
    // ============================================================================
    #[error("File not found or unreadable: {}", path.display())]
    FileNotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid JSON document '{}': {source}", path.display())]
    InvalidDocument {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Unsupported document shape in '{}': expected object, found {found}", path.display())]
    UnsupportedShape { path: PathBuf, found: &'static str },

    // ============================================================================
    // Output Errors
    // ============================================================================
    #[error("Failed to encode response: {0}")]
    Serialize(#[source] serde_json::Error),

    // ============================================================================
    // I/O Errors
    // ============================================================================
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Create a malformed request error
    pub fn malformed_request(message: impl Into<String>) -> Self {
        Self::MalformedRequest {
            message: message.into(),
        }
    }

    /// Create a file not found error
    pub fn file_not_found(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::FileNotFound {
            path: path.into(),
            source,
        }
    }

    /// Create an invalid document error
    pub fn invalid_document(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        Self::InvalidDocument {
            path: path.into(),
            source,
        }
    }

    /// Create an unsupported shape error
    pub fn unsupported_shape(path: impl Into<PathBuf>, found: &'static str) -> Self {
        Self::UnsupportedShape {
            path: path.into(),
            found,
        }
    }

    /// Short name of the error category, used in log fields
    pub fn kind(&self) -> &'static str {
        match self {
            Error::MalformedRequest { .. } => "MalformedRequest",
            Error::FileNotFound { .. } => "FileNotFound",
            Error::InvalidDocument { .. } => "InvalidDocument",
            Error::UnsupportedShape { .. } => "UnsupportedShape",
            Error::Serialize(_) => "Serialize",
            Error::Io(_) => "Io",
        }
    }
}

/// Result type alias for json-columns
pub type Result<T> = std::result::Result<T, Error>;
