//! Conversions between point sets and viewer points layers.
//!
//! Layer coordinates are 64-bit rows in a `points x dimension` table;
//! point sets store 32-bit coordinates. Unlike image buffers, point
//! coordinates keep their axis order in both directions.

use nalgebra::DMatrix;
use ndarray::Array2;

use voxview_core::PointSet;

use crate::affine::LayerAffine;
use crate::error::{ConvertError, Result};
use crate::features::Features;

/// Name of the feature column that carries per-point data.
const POINT_DATA_FEATURE: &str = "feature";

/// Viewer-side points layer.
///
/// Holds a `points x dimension` coordinate table, an optional feature
/// table aligned with the rows, and the optional scale/rotate/translate
/// pose shared with image layers.
#[derive(Debug, Clone, PartialEq)]
pub struct PointsLayer {
    data: Array2<f64>,
    features: Option<Features>,
    affine: LayerAffine,
}

impl PointsLayer {
    /// Create a layer from a coordinate table, with no feature table and
    /// no pose attributes set.
    pub fn new(data: Array2<f64>) -> Self {
        Self {
            data,
            features: None,
            affine: LayerAffine::new(),
        }
    }

    /// Get the coordinate table.
    pub fn data(&self) -> &Array2<f64> {
        &self.data
    }

    /// Number of points (table rows).
    pub fn num_points(&self) -> usize {
        self.data.nrows()
    }

    /// Coordinate dimension (table columns).
    pub fn dim(&self) -> usize {
        self.data.ncols()
    }

    /// Get the feature table, if any.
    pub fn features(&self) -> Option<&Features> {
        self.features.as_ref()
    }

    /// Attach a feature table.
    pub fn set_features(&mut self, features: impl Into<Features>) {
        self.features = Some(features.into());
    }

    /// Get the composed layer pose.
    pub fn affine(&self) -> &LayerAffine {
        &self.affine
    }

    /// Get the per-axis scale factors, if set.
    pub fn scale(&self) -> Option<&[f64]> {
        self.affine.scale()
    }

    /// Set the per-axis scale factors.
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

    /// Set the per-axis translation offsets.
    pub fn set_translate(&mut self, translate: Vec<f64>) {
        self.affine.set_translate(translate);
    }
}

/// Create a viewer points layer from a point set.
///
/// Coordinates widen to `f64`. An empty point set produces an empty
/// 3-column table, since the dimension cannot be read off the data. When
/// per-point data is present, its first component becomes the `"feature"`
/// column; further components are dropped.
pub fn points_layer_from_pointset<const D: usize>(pointset: &PointSet<D>) -> PointsLayer {
    tracing::debug!(
        "Wrapping point set with {} points as a viewer layer",
        pointset.num_points()
    );

    let data = if pointset.is_empty() {
        Array2::zeros((0, 3))
    } else {
        Array2::from_shape_fn((pointset.num_points(), D), |(i, j)| {
            f64::from(pointset.points()[i][j])
        })
    };
    let mut layer = PointsLayer::new(data);

    if let Some(point_data) = pointset.point_data() {
        if point_data.nrows() > 0 && point_data.ncols() > 0 {
            if point_data.ncols() > 1 {
                tracing::debug!(
                    "Keeping the first of {} point data components as the feature column",
                    point_data.ncols()
                );
            }
            let column: Vec<f64> = point_data.column(0).iter().map(|&v| f64::from(v)).collect();
            let mut features = Features::new();
            features.insert(POINT_DATA_FEATURE, column);
            layer.set_features(features);
        }
    }

    layer
}

/// Build a point set from a viewer points layer, materializing world
/// coordinates.
///
/// The layer pose (scale, then rotation, then translation) is applied to
/// the coordinate table before narrowing to `f32`, so the point set holds
/// the positions the viewer displays. An empty table always produces an
/// empty point set, whatever `D` is. When the layer carries features, the
/// first declared column becomes the per-point data; further columns are
/// dropped.
pub fn pointset_from_points_layer<const D: usize>(layer: &PointsLayer) -> Result<PointSet<D>> {
    tracing::debug!(
        "Building a {}D point set from a viewer layer with {} points",
        D,
        layer.num_points()
    );

    let world = layer.affine().transform_points(layer.data().clone())?;
    if world.nrows() == 0 {
        return Ok(PointSet::new());
    }
    if world.ncols() != D {
        return Err(ConvertError::dimension_mismatch(format!(
            "points layer stores {}-dimensional coordinates, expected {}",
            world.ncols(),
            D
        )));
    }

    let points: Vec<[f32; D]> = world
        .rows()
        .into_iter()
        .map(|row| {
            let mut point = [0.0f32; D];
            for (target, &value) in point.iter_mut().zip(row.iter()) {
                *target = value as f32;
            }
            point
        })
        .collect();
    let mut pointset = PointSet::from_points(points);

    if let Some(features) = layer.features() {
        if let Some((name, column)) = features.first_column() {
            if features.num_features() > 1 {
                tracing::debug!(
                    "Keeping feature column '{}' of {} as point data",
                    name,
                    features.num_features()
                );
            }
            if column.len() != pointset.num_points() {
                return Err(ConvertError::dimension_mismatch(format!(
                    "feature column '{}' has {} values for {} points",
                    name,
                    column.len(),
                    pointset.num_points()
                )));
            }
            pointset.set_scalar_point_data(column.iter().map(|&v| v as f32).collect());
        }
    }

    Ok(pointset)
}
