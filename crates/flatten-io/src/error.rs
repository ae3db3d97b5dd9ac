//! Error types for I/O operations.
//!
//! Every variant that concerns a file carries its path so messages name the
//! offending input.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// I/O operation error.
#[derive(Debug, Error)]
pub enum IoError {
    /// File could not be opened or read.
    #[error("cannot open '{}': {source}", path.display())]
    Open {
        /// File being opened.
        path: PathBuf,
        /// Underlying OS error.
        #[source]
        source: io::Error,
    },

    /// File does not start with the PNG signature.
    #[error("'{}' is not a PNG file", path.display())]
    NotPng {
        /// Offending file.
        path: PathBuf,
    },

    /// PNG stream is corrupt or uses an unsupported layout.
    #[error("cannot decode '{}': {message}", path.display())]
    Decode {
        /// Offending file.
        path: PathBuf,
        /// Decoder message.
        message: String,
    },

    /// Encoding error.
    #[error("encode error: {0}")]
    Encode(String),

    /// Malformed layer source or option value.
    #[error("parse error: {0}")]
    Parse(String),

    /// Error from the pixel grid layer.
    #[error(transparent)]
    Core(#[from] flatten_core::Error),
}

impl IoError {
    pub(crate) fn decode(path: impl Into<PathBuf>, message: impl ToString) -> Self {
        Self::Decode {
            path: path.into(),
            message: message.to_string(),
        }
    }
}

/// Result type for I/O operations.
pub type IoResult<T> = Result<T, IoError>;
