//! Image type with physical metadata and coordinate transformations.
//!
//! This module provides the Image struct which represents images with
//! pixel data and physical space metadata (origin, spacing, direction).

use ndarray::ArrayD;

use crate::error::{ImageError, Result};
use crate::metadata::Metadata;
use crate::spatial::{Direction, Point, Spacing, Vector};

use super::pixel::{PixelElement, PixelType, ScalarType};

/// Image with physical metadata.
///
/// The Image type combines an n-dimensional pixel buffer with physical
/// space metadata that describes how image indices map to physical
/// coordinates, plus a free-form key/value dictionary.
///
/// # Type Parameters
/// * `T` - The pixel element type stored in the buffer
/// * `D` - The number of spatial dimensions (2 or 3, typically)
///
/// Scalar images store a buffer of rank `D`. Color images (RGB/RGBA) store
/// a buffer of rank `D + 1` whose last axis holds the channel components;
/// the geometry still describes the `D` spatial axes only.
///
/// # Coordinate Systems
/// * **Index Space**: Discrete pixel/voxel indices, fastest-varying first
///   in `spacing`/`origin`/`direction` indexing
/// * **Physical Space**: Continuous coordinates in mm or other units
///
/// # Examples
/// ```rust
/// use ndarray::ArrayD;
/// use voxview_core::Image;
/// use voxview_core::spatial::Spacing3;
///
/// let data = ArrayD::<f32>::zeros(ndarray::IxDyn(&[10, 10, 10]));
/// let mut image = Image::<f32, 3>::new(data).unwrap();
/// image.set_spacing(Spacing3::new([1.0, 1.0, 2.5]));
/// ```
#[derive(Debug, Clone)]
pub struct Image<T: PixelElement, const D: usize> {
    data: ArrayD<T>,
    pixel_type: PixelType,
    origin: Point<D>,
    spacing: Spacing<D>,
    direction: Direction<D>,
    metadata: Metadata,
}

impl<T: PixelElement, const D: usize> Image<T, D> {
    /// Create a scalar image from a buffer of rank `D`.
    ///
    /// Geometry starts out at the defaults: unit spacing, zero origin,
    /// identity direction, empty metadata.
    pub fn new(data: ArrayD<T>) -> Result<Self> {
        if data.ndim() != D {
            return Err(ImageError::dimension_mismatch(format!(
                "scalar image buffer has {} axes, expected {}",
                data.ndim(),
                D
            )));
        }
        Ok(Self::with_pixel_type(data, PixelType::Scalar(T::SCALAR)))
    }

    /// Create an RGB image from a buffer of rank `D + 1` whose last axis
    /// has length 3.
    pub fn new_rgb(data: ArrayD<T>) -> Result<Self> {
        Self::new_color(data, PixelType::Rgb)
    }

    /// Create an RGBA image from a buffer of rank `D + 1` whose last axis
    /// has length 4.
    pub fn new_rgba(data: ArrayD<T>) -> Result<Self> {
        Self::new_color(data, PixelType::Rgba)
    }

    fn new_color(data: ArrayD<T>, pixel_type: PixelType) -> Result<Self> {
        if T::SCALAR != ScalarType::U8 {
            return Err(ImageError::unsupported_pixel_type(format!(
                "{} pixels require u8 components, got {}",
                pixel_type.name(),
                T::SCALAR.name()
            )));
        }
        if data.ndim() != D + 1 {
            return Err(ImageError::dimension_mismatch(format!(
                "{} image buffer has {} axes, expected {} (spatial plus channel)",
                pixel_type.name(),
                data.ndim(),
                D + 1
            )));
        }
        let channels = pixel_type.channels();
        if data.shape()[D] != channels {
            let mut expected = data.shape().to_vec();
            expected[D] = channels;
            return Err(ImageError::shape_mismatch(expected, data.shape().to_vec()));
        }
        Ok(Self::with_pixel_type(data, pixel_type))
    }

    fn with_pixel_type(data: ArrayD<T>, pixel_type: PixelType) -> Self {
        Self {
            data,
            pixel_type,
            origin: Point::origin(),
            spacing: Spacing::uniform(1.0),
            direction: Direction::identity(),
            metadata: Metadata::new(),
        }
    }

    /// Get the pixel buffer.
    pub fn data(&self) -> &ArrayD<T> {
        &self.data
    }

    /// Get the pixel type descriptor.
    pub fn pixel_type(&self) -> PixelType {
        self.pixel_type
    }

    /// Get the image origin (physical position of index zero).
    pub fn origin(&self) -> &Point<D> {
        &self.origin
    }

    /// Get the image spacing.
    pub fn spacing(&self) -> &Spacing<D> {
        &self.spacing
    }

    /// Get the image direction matrix.
    pub fn direction(&self) -> &Direction<D> {
        &self.direction
    }

    /// Get the free-form metadata dictionary.
    pub fn metadata(&self) -> &Metadata {
        &self.metadata
    }

    /// Get mutable access to the metadata dictionary.
    pub fn metadata_mut(&mut self) -> &mut Metadata {
        &mut self.metadata
    }

    /// Set the image origin.
    pub fn set_origin(&mut self, origin: Point<D>) {
        self.origin = origin;
    }

    /// Set the image spacing.
    pub fn set_spacing(&mut self, spacing: Spacing<D>) {
        self.spacing = spacing;
    }

    /// Set the image direction matrix.
    pub fn set_direction(&mut self, direction: Direction<D>) {
        self.direction = direction;
    }

    /// Replace the metadata dictionary.
    pub fn set_metadata(&mut self, metadata: Metadata) {
        self.metadata = metadata;
    }

    /// Get the full buffer shape, including the channel axis for color
    /// images.
    pub fn shape(&self) -> &[usize] {
        self.data.shape()
    }

    /// Get the shape of the spatial axes only.
    pub fn spatial_shape(&self) -> [usize; D] {
        let mut shape = [0usize; D];
        shape.copy_from_slice(&self.data.shape()[..D]);
        shape
    }

    /// Convert a continuous physical point to a continuous index.
    ///
    /// This transformation maps from physical space to index space using:
    /// `index = (Direction^-1 * (point - origin)) / spacing`
    pub fn transform_physical_point_to_continuous_index(&self, point: &Point<D>) -> Point<D> {
        let diff = *point - self.origin;
        let inv_dir = self
            .direction
            .try_inverse()
            .expect("Direction matrix must be invertible");
        let rotated = inv_dir * diff;

        // Element-wise division by spacing
        let mut index = Point::<D>::origin();
        for i in 0..D {
            index[i] = rotated[i] / self.spacing[i];
        }
        index
    }

    /// Convert a continuous index to a physical point.
    ///
    /// This transformation maps from index space to physical space using:
    /// `point = origin + Direction * (index * spacing)`
    pub fn transform_continuous_index_to_physical_point(&self, index: &Point<D>) -> Point<D> {
        let mut scaled_index = Vector::<D>::zeros();
        for i in 0..D {
            scaled_index[i] = index[i] * self.spacing[i];
        }

        let rotated = self.direction * scaled_index;
        self.origin + rotated
    }
}
