//! Turntable rotation utilities

use nalgebra::{Matrix3, Point3};
use serde::{Deserialize, Serialize};

/// Yaw (horizontal orbit) and pitch (vertical orbit) of a turntable view, in radians
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Turntable {
    pub yaw: f64,
    pub pitch: f64,
}

impl Turntable {
    /// Create a new turntable orientation
    pub fn new(yaw: f64, pitch: f64) -> Self {
        Self { yaw, pitch }
    }

    /// Derive the rotation matrix for this orientation
    pub fn matrix(&self) -> RotationMatrix {
        RotationMatrix::turntable(self.yaw, self.pitch)
    }
}

impl Default for Turntable {
    fn default() -> Self {
        Self::new(0.5, 0.5)
    }
}

/// An orthographic 3x3 rotation, yaw about the vertical axis followed by pitch.
///
/// Always replaced wholesale when the orientation changes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RotationMatrix {
    pub matrix: Matrix3<f64>,
}

impl RotationMatrix {
    /// Create an identity rotation
    pub fn identity() -> Self {
        Self {
            matrix: Matrix3::identity(),
        }
    }

    /// Create the combined yaw-then-pitch rotation
    pub fn turntable(yaw: f64, pitch: f64) -> Self {
        let (sin_a, cos_a) = pitch.sin_cos();
        let (sin_b, cos_b) = yaw.sin_cos();

        #[rustfmt::skip]
        let matrix = Matrix3::new(
            cos_b,          0.0,    sin_b,
            sin_a * sin_b,  cos_a,  -sin_a * cos_b,
            -sin_b * cos_a, sin_a,  cos_a * cos_b,
        );

        Self { matrix }
    }

    /// Apply the rotation to a point
    pub fn transform_point(&self, point: &Point3<f64>) -> Point3<f64> {
        Point3::from(self.matrix * point.coords)
    }

    /// Check that the matrix is orthogonal (`M * M^T = I`) within `epsilon`
    pub fn is_orthogonal(&self, epsilon: f64) -> bool {
        let product = self.matrix * self.matrix.transpose();
        (product - Matrix3::identity()).norm() < epsilon
    }

    /// Check if this is approximately the identity rotation
    pub fn is_identity(&self, epsilon: f64) -> bool {
        (self.matrix - Matrix3::identity()).norm() < epsilon
    }
}

impl Default for RotationMatrix {
    fn default() -> Self {
        Self::identity()
    }
}

impl From<Turntable> for RotationMatrix {
    fn from(turntable: Turntable) -> Self {
        turntable.matrix()
    }
}
