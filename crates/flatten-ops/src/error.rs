//! Error types for blend operations.

use thiserror::Error;

/// Error type for blend operations.
#[derive(Error, Debug)]
pub enum OpsError {
    /// Base and top differ in width or height.
    #[error("size mismatch: {0}")]
    SizeMismatch(String),

    /// Invalid parameter value, such as an unknown operator code.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
}

impl OpsError {
    /// Builds a [`OpsError::SizeMismatch`] naming both sizes.
    pub fn size_mismatch(base: (u32, u32), top: (u32, u32)) -> Self {
        Self::SizeMismatch(format!(
            "base is {}x{}, top is {}x{}; base and top must have the same width and height",
            base.0, base.1, top.0, top.1
        ))
    }
}

/// Result type for blend operations.
pub type OpsResult<T> = Result<T, OpsError>;
