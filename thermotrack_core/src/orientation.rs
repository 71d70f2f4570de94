// thermotrack_core/src/orientation.rs

use nalgebra::{Matrix3, Quaternion, UnitQuaternion, Vector3};
use serde::{Deserialize, Serialize};
use std::fmt;

/// An orientation quaternion exactly as it appears in the pose log.
///
/// `q0` is the scalar part (`w:` in the log), `q1..q3` the vector part
/// (`x:`, `y:`, `z:`). Nothing here normalises the quaternion: the log is
/// trusted to carry unit quaternions, and [`Orientation::rotation_matrix`] is
/// only a proper rotation when that holds. Use [`Orientation::is_unit`] (or the
/// parser's `QuaternionCheck::Reject`) when the input cannot be trusted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Orientation {
    pub q0: f64,
    pub q1: f64,
    pub q2: f64,
    pub q3: f64,
}

impl Default for Orientation {
    fn default() -> Self {
        Self::identity()
    }
}

impl Orientation {
    pub fn new(q0: f64, q1: f64, q2: f64, q3: f64) -> Self {
        Self { q0, q1, q2, q3 }
    }

    /// Builds from the log's field order (`x`, `y`, `z`, `w`).
    pub fn from_xyzw(x: f64, y: f64, z: f64, w: f64) -> Self {
        Self::new(w, x, y, z)
    }

    pub fn identity() -> Self {
        Self::new(1.0, 0.0, 0.0, 0.0)
    }

    pub fn norm(&self) -> f64 {
        (self.q0 * self.q0 + self.q1 * self.q1 + self.q2 * self.q2 + self.q3 * self.q3).sqrt()
    }

    /// True when `| |q| - 1 | <= tolerance`.
    pub fn is_unit(&self, tolerance: f64) -> bool {
        (self.norm() - 1.0).abs() <= tolerance
    }

    /// The 3x3 matrix of the rotation this quaternion represents.
    ///
    /// Computed with the unit-quaternion form
    ///
    /// ```text
    /// R(q) = [[2(q0²+q1²)-1, 2(q1q2-q0q3), 2(q1q3+q0q2)],
    ///         [2(q1q2+q0q3), 2(q0²+q2²)-1, 2(q2q3-q0q1)],
    ///         [2(q1q3-q0q2), 2(q2q3+q0q1), 2(q0²+q3²)-1]]
    /// ```
    ///
    /// so a non-unit quaternion yields a matrix that is not orthonormal.
    pub fn rotation_matrix(&self) -> Matrix3<f64> {
        let (q0, q1, q2, q3) = (self.q0, self.q1, self.q2, self.q3);
        Matrix3::new(
            2.0 * (q0 * q0 + q1 * q1) - 1.0,
            2.0 * (q1 * q2 - q0 * q3),
            2.0 * (q1 * q3 + q0 * q2),
            2.0 * (q1 * q2 + q0 * q3),
            2.0 * (q0 * q0 + q2 * q2) - 1.0,
            2.0 * (q2 * q3 - q0 * q1),
            2.0 * (q1 * q3 - q0 * q2),
            2.0 * (q2 * q3 + q0 * q1),
            2.0 * (q0 * q0 + q3 * q3) - 1.0,
        )
    }

    /// Rotates `v` by this orientation (`R(q) * v`).
    pub fn rotate_vector(&self, v: &Vector3<f64>) -> Vector3<f64> {
        self.rotation_matrix() * v
    }

    /// Converts to a normalised nalgebra quaternion, `None` for a zero quaternion.
    pub fn to_unit_quaternion(&self) -> Option<UnitQuaternion<f64>> {
        UnitQuaternion::try_new(Quaternion::new(self.q0, self.q1, self.q2, self.q3), 1e-12)
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Orientation(q0={}, q1={}, q2={}, q3={})",
            self.q0, self.q1, self.q2, self.q3
        )
    }
}
