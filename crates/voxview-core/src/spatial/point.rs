//! Point type for representing positions in physical space.

use nalgebra::Point as NaPoint;
use serde::{Deserialize, Serialize};

use super::vector::Vector;

/// A point in D-dimensional physical space.
///
/// Points represent absolute positions, as opposed to [`Vector`]s which
/// represent displacements. This is a thin wrapper around nalgebra's Point
/// to provide domain-specific functionality while maintaining all nalgebra
/// operations.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point<const D: usize>(pub NaPoint<f64, D>);

impl<const D: usize> Point<D> {
    /// Create a new point from coordinates.
    pub fn new(coords: [f64; D]) -> Self {
        Self(NaPoint::from(coords))
    }

    /// Create a point at the origin.
    pub fn origin() -> Self {
        Self(NaPoint::origin())
    }

    /// Create a new point from a slice of coordinates.
    pub fn from_slice(coords: &[f64]) -> Self {
        assert!(coords.len() == D, "Coordinate slice length must match dimension");
        let mut point = Self::origin();
        for i in 0..D {
            point.0[i] = coords[i];
        }
        point
    }

    /// Convert point to a vector of coordinates.
    pub fn to_vec(&self) -> Vec<f64> {
        (0..D).map(|i| self.0[i]).collect()
    }

    /// Get the inner nalgebra point.
    pub fn inner(&self) -> &NaPoint<f64, D> {
        &self.0
    }

    /// Get mutable reference to inner nalgebra point.
    pub fn inner_mut(&mut self) -> &mut NaPoint<f64, D> {
        &mut self.0
    }
}

impl<const D: usize> std::ops::Index<usize> for Point<D> {
    type Output = f64;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl<const D: usize> std::ops::IndexMut<usize> for Point<D> {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.0[index]
    }
}

impl<const D: usize> std::ops::Sub for Point<D> {
    type Output = Vector<D>;

    fn sub(self, other: Self) -> Self::Output {
        Vector(self.0.coords - other.0.coords)
    }
}

impl<const D: usize> std::ops::Add<Vector<D>> for Point<D> {
    type Output = Self;

    fn add(self, vector: Vector<D>) -> Self::Output {
        Self(self.0 + vector.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Type aliases for testing
    type Point3 = Point<3>;
    type Vector3 = Vector<3>;

    #[test]
    fn test_point_creation() {
        let p = Point3::new([1.0, 2.0, 3.0]);
        assert_eq!(p[0], 1.0);
        assert_eq!(p[1], 2.0);
        assert_eq!(p[2], 3.0);
    }

    #[test]
    fn test_point_origin() {
        let p = Point3::origin();
        assert_eq!(p, Point3::new([0.0, 0.0, 0.0]));
    }

    #[test]
    fn test_point_from_slice() {
        let coords = vec![4.0, 5.0, 6.0];
        let p = Point3::from_slice(&coords);
        assert_eq!(p.to_vec(), coords);
    }

    #[test]
    fn test_point_arithmetic() {
        let p1 = Point3::new([1.0, 2.0, 3.0]);
        let p2 = Point3::new([4.0, 6.0, 8.0]);

        let displacement = p2 - p1;
        assert_eq!(displacement, Vector3::new([3.0, 4.0, 5.0]));

        let moved = p1 + displacement;
        assert_eq!(moved, p2);
    }

    #[test]
    fn test_point_inner_access() {
        let mut p = Point3::new([1.0, 2.0, 3.0]);
        assert_eq!(p.inner().coords.as_slice(), &[1.0, 2.0, 3.0]);

        p.inner_mut()[0] = 9.0;
        assert_eq!(p[0], 9.0);
    }
}
