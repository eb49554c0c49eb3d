//! Point-set type for sparse spatial data.
//!
//! A point set holds D-dimensional coordinates in physical space, plus an
//! optional per-point data table aligned with the coordinates.

use ndarray::Array2;

/// A collection of D-dimensional points with optional per-point data.
///
/// Coordinates are stored as 32-bit floats, matching the precision the
/// toolkit uses for sparse geometry. Per-point data is a `points x
/// components` table; most uses carry a single scalar component.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PointSet<const D: usize> {
    points: Vec<[f32; D]>,
    point_data: Option<Array2<f32>>,
}

impl<const D: usize> PointSet<D> {
    /// Create an empty point set.
    pub fn new() -> Self {
        Self {
            points: Vec::new(),
            point_data: None,
        }
    }

    /// Create a point set from coordinates.
    pub fn from_points(points: Vec<[f32; D]>) -> Self {
        Self {
            points,
            point_data: None,
        }
    }

    /// Append a point.
    pub fn push(&mut self, point: [f32; D]) {
        self.points.push(point);
    }

    /// Number of points.
    pub fn num_points(&self) -> usize {
        self.points.len()
    }

    /// Check whether the point set has no points.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Get the point coordinates.
    pub fn points(&self) -> &[[f32; D]] {
        &self.points
    }

    /// Get the per-point data table, if any.
    pub fn point_data(&self) -> Option<&Array2<f32>> {
        self.point_data.as_ref()
    }

    /// Attach a per-point data table.
    ///
    /// Rows are expected to align with the point coordinates; alignment is
    /// the caller's responsibility.
    pub fn set_point_data(&mut self, point_data: Array2<f32>) {
        self.point_data = Some(point_data);
    }

    /// Attach single-component per-point data from a flat value list.
    pub fn set_scalar_point_data(&mut self, values: Vec<f32>) {
        let rows = values.len();
        let table = Array2::from_shape_vec((rows, 1), values)
            .expect("row count derived from value count");
        self.point_data = Some(table);
    }

    /// Drop the per-point data table.
    pub fn clear_point_data(&mut self) {
        self.point_data = None;
    }
}
