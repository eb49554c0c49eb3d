//! Layer-space affine transform.
//!
//! Viewer layers carry their spatial pose as three optional attributes:
//! `scale`, `rotate`, and `translate`. The composed transform maps layer
//! data coordinates to world coordinates as scale first, then rotation,
//! then translation.

use nalgebra::DMatrix;
use ndarray::Array2;

use crate::error::{ConvertError, Result};

/// Optional scale/rotate/translate attributes of a viewer layer.
///
/// Every attribute is independent: an absent component contributes nothing
/// to the composed transform. `rotate` uses the viewer convention, where
/// row coordinates are right-multiplied by the transposed matrix.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LayerAffine {
    scale: Option<Vec<f64>>,
    rotate: Option<DMatrix<f64>>,
    translate: Option<Vec<f64>>,
}

impl LayerAffine {
    /// Create a transform with no components set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the per-axis scale factors, if set.
    pub fn scale(&self) -> Option<&[f64]> {
        self.scale.as_deref()
    }

    /// Get the rotation matrix, if set.
    pub fn rotate(&self) -> Option<&DMatrix<f64>> {
        self.rotate.as_ref()
    }

    /// Get the per-axis translation offsets, if set.
    pub fn translate(&self) -> Option<&[f64]> {
        self.translate.as_deref()
    }

    /// Set the per-axis scale factors.
    pub fn set_scale(&mut self, scale: Vec<f64>) {
        self.scale = Some(scale);
    }

    /// Set the rotation matrix.
    pub fn set_rotate(&mut self, rotate: DMatrix<f64>) {
        self.rotate = Some(rotate);
    }

    /// Set the per-axis translation offsets.
    pub fn set_translate(&mut self, translate: Vec<f64>) {
        self.translate = Some(translate);
    }

    /// Check that every set component matches the coordinate dimension.
    pub fn validate(&self, dim: usize) -> Result<()> {
        if let Some(scale) = &self.scale {
            if scale.len() != dim {
                return Err(ConvertError::dimension_mismatch(format!(
                    "scale has {} components, expected {}",
                    scale.len(),
                    dim
                )));
            }
        }
        if let Some(rotate) = &self.rotate {
            if rotate.nrows() != dim || rotate.ncols() != dim {
                return Err(ConvertError::dimension_mismatch(format!(
                    "rotate is {}x{}, expected {}x{}",
                    rotate.nrows(),
                    rotate.ncols(),
                    dim,
                    dim
                )));
            }
        }
        if let Some(translate) = &self.translate {
            if translate.len() != dim {
                return Err(ConvertError::dimension_mismatch(format!(
                    "translate has {} components, expected {}",
                    translate.len(),
                    dim
                )));
            }
        }
        Ok(())
    }

    /// Map row coordinates from layer data space to world space.
    ///
    /// Applies scale, then rotation, then translation. Fails with
    /// [`ConvertError::DimensionMismatch`] if a set component disagrees
    /// with the column count.
    pub fn transform_points(&self, points: Array2<f64>) -> Result<Array2<f64>> {
        let dim = points.ncols();
        self.validate(dim)?;

        let mut points = points;
        if let Some(scale) = &self.scale {
            for mut row in points.rows_mut() {
                for (value, factor) in row.iter_mut().zip(scale) {
                    *value *= factor;
                }
            }
        }
        if let Some(rotate) = &self.rotate {
            // Row-vector convention: rows are multiplied by rotate^T, which
            // rotates each point by `rotate`
            let transposed = Array2::from_shape_fn((dim, dim), |(i, j)| rotate[(j, i)]);
            points = points.dot(&transposed);
        }
        if let Some(translate) = &self.translate {
            for mut row in points.rows_mut() {
                for (value, offset) in row.iter_mut().zip(translate) {
                    *value += offset;
                }
            }
        }
        Ok(points)
    }
}
