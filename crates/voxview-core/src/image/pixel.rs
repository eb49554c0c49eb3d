//! Pixel type descriptors.
//!
//! Pixel polymorphism is modeled as a closed set of descriptors selected at
//! construction time: an image is either a grid of scalar elements or a grid
//! of 3/4-channel 8-bit color pixels stored on a trailing channel axis.

use serde::{Deserialize, Serialize};

/// Scalar element types an image buffer can hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ScalarType {
    U8,
    U16,
    I16,
    U32,
    I32,
    F32,
    F64,
}

impl ScalarType {
    /// Lowercase name of the element type, as used in error messages.
    pub fn name(&self) -> &'static str {
        match self {
            Self::U8 => "u8",
            Self::U16 => "u16",
            Self::I16 => "i16",
            Self::U32 => "u32",
            Self::I32 => "i32",
            Self::F32 => "f32",
            Self::F64 => "f64",
        }
    }
}

/// Pixel type of an image.
///
/// Color variants always store 8-bit unsigned components on the last buffer
/// axis; anything else is a scalar grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PixelType {
    Scalar(ScalarType),
    Rgb,
    Rgba,
}

impl PixelType {
    /// Check whether this is a color pixel type.
    pub fn is_color(&self) -> bool {
        matches!(self, Self::Rgb | Self::Rgba)
    }

    /// Number of components per pixel (1 for scalars).
    pub fn channels(&self) -> usize {
        match self {
            Self::Scalar(_) => 1,
            Self::Rgb => 3,
            Self::Rgba => 4,
        }
    }

    /// Short name of the pixel type, as used in error messages and logs.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Scalar(_) => "scalar",
            Self::Rgb => "rgb",
            Self::Rgba => "rgba",
        }
    }
}

/// Element types that can back an image buffer.
///
/// Ties a Rust element type to its [`ScalarType`] descriptor so that
/// generic code can reason about the stored type at runtime.
pub trait PixelElement: Copy + PartialEq + std::fmt::Debug + Send + Sync + 'static {
    /// Descriptor for this element type.
    const SCALAR: ScalarType;
}

impl PixelElement for u8 {
    const SCALAR: ScalarType = ScalarType::U8;
}

impl PixelElement for u16 {
    const SCALAR: ScalarType = ScalarType::U16;
}

impl PixelElement for i16 {
    const SCALAR: ScalarType = ScalarType::I16;
}

impl PixelElement for u32 {
    const SCALAR: ScalarType = ScalarType::U32;
}

impl PixelElement for i32 {
    const SCALAR: ScalarType = ScalarType::I32;
}

impl PixelElement for f32 {
    const SCALAR: ScalarType = ScalarType::F32;
}

impl PixelElement for f64 {
    const SCALAR: ScalarType = ScalarType::F64;
}
