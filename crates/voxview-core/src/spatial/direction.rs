//! Direction matrix type for representing image orientation.
//!
//! The direction matrix describes how image axes map onto physical-space
//! axes. For medical images this is usually a rotation (orthonormal with
//! determinant one).

use nalgebra::SMatrix;
use serde::{Deserialize, Serialize};

use super::vector::Vector;

/// Orientation of image axes in D-dimensional physical space.
///
/// Column `i` of the matrix is the physical-space direction of image axis
/// `i`. This is a thin wrapper around nalgebra's SMatrix to provide
/// domain-specific functionality while maintaining all nalgebra operations.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Direction<const D: usize>(pub SMatrix<f64, D, D>);

impl<const D: usize> Direction<D> {
    /// Create an identity direction matrix (no rotation).
    pub fn identity() -> Self {
        Self(SMatrix::identity())
    }

    /// Create a direction matrix from a function of (row, column) indices.
    pub fn from_fn(f: impl FnMut(usize, usize) -> f64) -> Self {
        Self(SMatrix::from_fn(f))
    }

    /// Check if the direction matrix is orthogonal (a rotation matrix,
    /// possibly improper).
    pub fn is_orthogonal(&self) -> bool {
        let product = self.0 * self.0.transpose();
        let identity = Self::identity();
        (0..D).all(|i| {
            (0..D).all(|j| {
                (product[(i, j)] - identity.0[(i, j)]).abs() < 1e-6
            })
        })
    }

    /// Return the transposed direction matrix.
    ///
    /// For an orthonormal direction this is also its inverse.
    pub fn transposed(&self) -> Self {
        Self(self.0.transpose())
    }

    /// Try to compute the inverse of the direction matrix.
    pub fn try_inverse(&self) -> Option<Self> {
        self.0.try_inverse().map(Self)
    }

    /// Get the inner nalgebra matrix.
    pub fn inner(&self) -> &SMatrix<f64, D, D> {
        &self.0
    }

    /// Get mutable reference to inner nalgebra matrix.
    pub fn inner_mut(&mut self) -> &mut SMatrix<f64, D, D> {
        &mut self.0
    }
}

impl<const D: usize> std::ops::Index<(usize, usize)> for Direction<D> {
    type Output = f64;

    fn index(&self, index: (usize, usize)) -> &Self::Output {
        &self.0[index]
    }
}

impl<const D: usize> std::ops::IndexMut<(usize, usize)> for Direction<D> {
    fn index_mut(&mut self, index: (usize, usize)) -> &mut Self::Output {
        &mut self.0[index]
    }
}

impl<const D: usize> std::ops::Mul for Direction<D> {
    type Output = Self;

    fn mul(self, other: Self) -> Self::Output {
        Self(self.0 * other.0)
    }
}

impl<const D: usize> std::ops::Mul<Vector<D>> for Direction<D> {
    type Output = Vector<D>;

    fn mul(self, vector: Vector<D>) -> Self::Output {
        Vector(self.0 * vector.0)
    }
}
