//! Image types and operations.
//!
//! This module provides the Image type and related functionality
//! for representing images with physical metadata.

pub mod image;
pub mod pixel;

pub use image::Image;
pub use pixel::{PixelElement, PixelType, ScalarType};
