//! Error types for flatten-core operations.
//!
//! # Overview
//!
//! The [`Error`] enum covers the failure modes of building and converting
//! pixel grids:
//! - Zero or overflowing dimensions
//! - Raw buffers whose length does not match the dimensions
//! - Allocation failures on very large images
//!
//! # Usage
//!
//! ```rust
//! use flatten_core::{Error, ImageF32};
//!
//! let err = ImageF32::new(0, 4).unwrap_err();
//! assert!(matches!(err, Error::InvalidDimensions { .. }));
//! ```
//!
//! # Used By
//!
//! - `flatten-io` - grid construction and allocation failures while decoding

use thiserror::Error;

/// Result type alias using [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building or converting pixel grids.
#[derive(Debug, Error)]
pub enum Error {
    /// Invalid image dimensions.
    ///
    /// Returned when width or height is zero, or the buffer size would
    /// overflow `usize`.
    #[error("invalid dimensions: {width}x{height} ({reason})")]
    InvalidDimensions {
        /// Requested width
        width: u32,
        /// Requested height
        height: u32,
        /// Reason why dimensions are invalid
        reason: String,
    },

    /// Raw buffer length does not match `width * height * 4`.
    #[error("buffer size mismatch: expected {expected} elements, got {actual}")]
    BufferSize {
        /// Expected number of elements
        expected: usize,
        /// Provided number of elements
        actual: usize,
    },

    /// Pixel buffer allocation failed.
    #[error("failed to allocate {requested} elements: {reason}")]
    AllocationFailed {
        /// Number of elements requested
        requested: usize,
        /// Allocator message
        reason: String,
    },
}

impl Error {
    /// Creates an [`Error::InvalidDimensions`] error.
    #[inline]
    pub fn invalid_dimensions(width: u32, height: u32, reason: impl Into<String>) -> Self {
        Self::InvalidDimensions {
            width,
            height,
            reason: reason.into(),
        }
    }

    /// Creates an [`Error::AllocationFailed`] error.
    #[inline]
    pub fn allocation_failed(requested: usize, reason: impl Into<String>) -> Self {
        Self::AllocationFailed {
            requested,
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_allocation_failed() {
        let err = Error::allocation_failed(1 << 40, "capacity overflow");
        assert!(matches!(err, Error::AllocationFailed { requested, .. } if requested == 1 << 40));
        assert!(err.to_string().contains("capacity overflow"));
    }

    #[test]
    fn test_invalid_dimensions() {
        let err = Error::invalid_dimensions(0, 10, "width must be > 0");
        assert!(matches!(err, Error::InvalidDimensions { .. }));
        assert!(err.to_string().contains("0x10"));
    }
}
