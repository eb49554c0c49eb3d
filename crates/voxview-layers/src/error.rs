//! Error types for layer conversions.

use thiserror::Error;

use voxview_core::ImageError;

/// Main error type for conversions between the data model and viewer layers.
#[derive(Error, Debug)]
pub enum ConvertError {
    /// Color/channel configuration not recognized for a flagged-RGB layer.
    #[error("Unsupported pixel type: {0}")]
    UnsupportedPixelType(String),

    /// Transform component or coordinate rank disagrees with the data.
    #[error("Dimension mismatch: {0}")]
    DimensionMismatch(String),

    /// Failure raised by the underlying data model.
    #[error(transparent)]
    Image(#[from] ImageError),
}

/// Result type for layer conversions.
pub type Result<T> = std::result::Result<T, ConvertError>;

impl ConvertError {
    /// Create an unsupported pixel type error.
    pub fn unsupported_pixel_type(msg: impl Into<String>) -> Self {
        Self::UnsupportedPixelType(msg.into())
    }

    /// Create a dimension mismatch error.
    pub fn dimension_mismatch(msg: impl Into<String>) -> Self {
        Self::DimensionMismatch(msg.into())
    }
}
