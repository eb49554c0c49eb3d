//! Conversions between images and viewer image layers.
//!
//! The toolkit indexes `spacing`/`origin`/`direction` fastest-varying
//! first, while the viewer orders `scale`/`translate` the way the buffer
//! axes are laid out. The sequences are therefore reversed relative to
//! each other, and the rotation matrices are transposes of each other.
//! Both conversions preserve that relationship exactly.

use nalgebra::DMatrix;
use ndarray::{ArrayD, ArrayViewD, CowArray, IxDyn};

use voxview_core::image::{Image, PixelElement};
use voxview_core::metadata::Metadata;
use voxview_core::spatial::{Direction, Point, Spacing};

use crate::affine::LayerAffine;
use crate::error::{ConvertError, Result};

/// Viewer-side image layer.
///
/// Holds the pixel buffer either as a borrowed view of a source image
/// (zero copy) or as owned data, plus the display attributes the viewer
/// understands: an `rgb` flag, the optional scale/rotate/translate pose,
/// and free-form metadata.
#[derive(Debug, Clone)]
pub struct ImageLayer<'a, T: PixelElement> {
    data: CowArray<'a, T, IxDyn>,
    rgb: bool,
    affine: LayerAffine,
    metadata: Metadata,
}

impl<'a, T: PixelElement> ImageLayer<'a, T> {
    /// Create a layer owning its pixel buffer, with no pose attributes set.
    pub fn new(data: ArrayD<T>) -> Self {
        Self {
            data: CowArray::from(data),
            rgb: false,
            affine: LayerAffine::new(),
            metadata: Metadata::new(),
        }
    }

    /// Create a layer borrowing its pixel buffer from elsewhere.
    pub fn from_view(data: ArrayViewD<'a, T>) -> Self {
        Self {
            data: CowArray::from(data),
            rgb: false,
            affine: LayerAffine::new(),
            metadata: Metadata::new(),
        }
    }

    /// Get a view of the pixel buffer.
    pub fn data(&self) -> ArrayViewD<'_, T> {
        self.data.view()
    }

    /// Check whether the layer borrows its buffer instead of owning it.
    pub fn is_view(&self) -> bool {
        self.data.is_view()
    }

    /// Number of buffer axes.
    pub fn ndim(&self) -> usize {
        self.data.ndim()
    }

    /// Buffer shape.
    pub fn shape(&self) -> &[usize] {
        self.data.shape()
    }

    /// Check whether the buffer holds color pixels on its last axis.
    pub fn rgb(&self) -> bool {
        self.rgb
    }

    /// Set the color interpretation flag.
    pub fn set_rgb(&mut self, rgb: bool) {
        self.rgb = rgb;
    }

    /// Get the per-axis scale factors, if set.
    pub fn scale(&self) -> Option<&[f64]> {
        self.affine.scale()
    }

    /// Set the per-axis scale factors (buffer axis order).
    pub fn set_scale(&mut self, scale: Vec<f64>) {
        self.affine.set_scale(scale);
    }

    /// Get the rotation matrix, if set.
    pub fn rotate(&self) -> Option<&DMatrix<f64>> {
        self.affine.rotate()
    }

    /// Set the rotation matrix (viewer convention).
    pub fn set_rotate(&mut self, rotate: DMatrix<f64>) {
        self.affine.set_rotate(rotate);
    }

    /// Get the per-axis translation offsets, if set.
    pub fn translate(&self) -> Option<&[f64]> {
        self.affine.translate()
    }

    /// Set the per-axis translation offsets (buffer axis order).
    pub fn set_translate(&mut self, translate: Vec<f64>) {
        self.affine.set_translate(translate);
    }

    /// Get the layer metadata.
    pub fn metadata(&self) -> &Metadata {
        &self.metadata
    }

    /// Get mutable access to the layer metadata.
    pub fn metadata_mut(&mut self) -> &mut Metadata {
        &mut self.metadata
    }

    /// Replace the layer metadata.
    pub fn set_metadata(&mut self, metadata: Metadata) {
        self.metadata = metadata;
    }
}

/// Reverse a full-length component sequence into toolkit axis order.
fn reversed_components<const D: usize>(values: &[f64]) -> [f64; D] {
    let mut components = [0.0; D];
    for i in 0..D {
        components[i] = values[D - 1 - i];
    }
    components
}

/// Create a viewer layer that borrows an image's pixel buffer.
///
/// The buffer is viewed, not copied. Metadata is cloned into an
/// independent mapping. `scale` and `translate` are the image spacing and
/// origin with their component order reversed, and `rotate` is the
/// transposed direction matrix; all three are always set.
pub fn image_layer_from_image<'a, T: PixelElement, const D: usize>(
    image: &'a Image<T, D>,
) -> ImageLayer<'a, T> {
    tracing::debug!(
        "Wrapping {}D {} image as a viewer layer",
        D,
        image.pixel_type().name()
    );

    let mut layer = ImageLayer {
        data: CowArray::from(image.data().view()),
        rgb: image.pixel_type().is_color(),
        affine: LayerAffine::new(),
        metadata: image.metadata().clone(),
    };
    layer.set_scale((0..D).rev().map(|i| image.spacing()[i]).collect());
    layer.set_translate((0..D).rev().map(|i| image.origin()[i]).collect());
    layer.set_rotate(DMatrix::from_fn(D, D, |i, j| image.direction()[(j, i)]));
    layer
}

/// Build an image from a viewer layer, copying the pixel buffer.
///
/// A layer flagged `rgb` must carry 3 or 4 color channels on its last
/// buffer axis. Unset pose attributes leave the image geometry at its
/// defaults; set attributes are mapped back by reversing `scale` into
/// spacing and `translate` into origin, and transposing `rotate` into the
/// direction matrix.
pub fn image_from_image_layer<T: PixelElement, const D: usize>(
    layer: &ImageLayer<'_, T>,
) -> Result<Image<T, D>> {
    tracing::debug!(
        "Building a {}D image from a viewer layer (rgb: {})",
        D,
        layer.rgb()
    );

    let data: ArrayD<T> = layer.data().to_owned();
    let mut image = if layer.rgb() {
        match data.shape().last().copied() {
            Some(3) => Image::new_rgb(data)?,
            Some(4) => Image::new_rgba(data)?,
            trailing => {
                return Err(ConvertError::unsupported_pixel_type(format!(
                    "rgb layer must carry 3 or 4 channels on its last axis, got {}",
                    trailing.unwrap_or(0)
                )))
            }
        }
    } else {
        Image::new(data)?
    };

    for (key, value) in layer.metadata().iter() {
        image.metadata_mut().insert(key, value.clone());
    }

    if let Some(scale) = layer.scale() {
        if scale.len() != D {
            return Err(ConvertError::dimension_mismatch(format!(
                "layer scale has {} components, expected {}",
                scale.len(),
                D
            )));
        }
        image.set_spacing(Spacing::new(reversed_components::<D>(scale)));
    }
    if let Some(translate) = layer.translate() {
        if translate.len() != D {
            return Err(ConvertError::dimension_mismatch(format!(
                "layer translate has {} components, expected {}",
                translate.len(),
                D
            )));
        }
        image.set_origin(Point::new(reversed_components::<D>(translate)));
    }
    if let Some(rotate) = layer.rotate() {
        if rotate.nrows() != D || rotate.ncols() != D {
            return Err(ConvertError::dimension_mismatch(format!(
                "layer rotate is {}x{}, expected {}x{}",
                rotate.nrows(),
                rotate.ncols(),
                D,
                D
            )));
        }
        image.set_direction(Direction::from_fn(|i, j| rotate[(j, i)]));
    }

    Ok(image)
}
