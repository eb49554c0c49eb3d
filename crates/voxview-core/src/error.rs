//! Error types for image and point-set construction.
//!
//! This module provides structured error types for the data model,
//! enabling better error handling and debugging.

use thiserror::Error;

/// Main error type for data-model operations.
#[derive(Error, Debug)]
pub enum ImageError {
    /// Pixel element or channel configuration not supported.
    #[error("Unsupported pixel type: {0}")]
    UnsupportedPixelType(String),

    /// Dimension mismatch.
    #[error("Dimension mismatch: {0}")]
    DimensionMismatch(String),

    /// Shape mismatch.
    #[error("Shape mismatch: expected {expected:?}, got {actual:?}")]
    ShapeMismatch {
        expected: Vec<usize>,
        actual: Vec<usize>,
    },
}

/// Result type for data-model operations.
pub type Result<T> = std::result::Result<T, ImageError>;

impl ImageError {
    /// Create an unsupported pixel type error.
    pub fn unsupported_pixel_type(msg: impl Into<String>) -> Self {
        Self::UnsupportedPixelType(msg.into())
    }

    /// Create a dimension mismatch error.
    pub fn dimension_mismatch(msg: impl Into<String>) -> Self {
        Self::DimensionMismatch(msg.into())
    }

    /// Create a shape mismatch error.
    pub fn shape_mismatch(expected: Vec<usize>, actual: Vec<usize>) -> Self {
        Self::ShapeMismatch { expected, actual }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let err = ImageError::unsupported_pixel_type("rgb image with f32 components");
        assert!(matches!(err, ImageError::UnsupportedPixelType(_)));
    }

    #[test]
    fn test_error_display() {
        let err = ImageError::dimension_mismatch("buffer has 3 axes, expected 2");
        assert_eq!(err.to_string(), "Dimension mismatch: buffer has 3 axes, expected 2");
    }

    #[test]
    fn test_shape_mismatch() {
        let err = ImageError::shape_mismatch(vec![4, 4, 3], vec![4, 4, 2]);
        let err_str = err.to_string();
        assert!(err_str.contains("expected"));
        assert!(err_str.contains("got"));
    }
}
