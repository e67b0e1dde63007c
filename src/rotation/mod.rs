//! Rotation representations
//!
//! Conversions between rotation matrices, unit quaternions, canonical
//! axis-angle pairs and intrinsic XYZ Euler angles. Every conversion is total:
//! degenerate inputs resolve to documented defaults instead of failing.

mod axis_angle;
mod euler;
mod quaternion;

pub use axis_angle::{
    axis_angle_to_matrix, matrix_to_axis_angle, matrix_to_axis_angle_with_epsilon,
    quaternion_to_axis_angle, quaternion_to_axis_angle_with_epsilon, AxisAngle,
};
pub use euler::{euler_to_matrix, matrix_to_euler, EulerXyz};
pub use quaternion::{matrix_to_quaternion, quaternion_to_matrix};

use glam::{DMat3, DQuat, DVec3};
use serde::{Deserialize, Serialize};

use crate::error::{KinematicsError, Result};

/// Every representation of one rotation, computed together.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RotationViews {
    pub matrix: DMat3,
    pub quaternion: DQuat,
    pub axis_angle: AxisAngle,
    pub euler: EulerXyz,
}

impl RotationViews {
    pub fn from_matrix(matrix: DMat3) -> Self {
        let quaternion = matrix_to_quaternion(matrix);
        Self {
            matrix,
            quaternion,
            axis_angle: quaternion_to_axis_angle(quaternion),
            euler: matrix_to_euler(matrix),
        }
    }

    pub fn from_quaternion(quaternion: DQuat) -> Self {
        Self::from_matrix(quaternion_to_matrix(quaternion))
    }

    /// Same precondition as [`axis_angle_to_matrix`]: `axis` must be non-zero.
    pub fn from_axis_angle(axis: DVec3, angle: f64) -> Self {
        Self::from_matrix(axis_angle_to_matrix(axis, angle))
    }

    pub fn from_euler(euler: EulerXyz) -> Self {
        Self::from_matrix(euler_to_matrix(euler))
    }
}

impl Default for RotationViews {
    fn default() -> Self {
        Self::from_matrix(DMat3::IDENTITY)
    }
}

/// Builds a rotation block from 9 row-major numbers.
///
/// The result is not checked for orthonormality; see [`is_rotation_matrix`].
pub fn rotation_from_row_major(values: &[f64]) -> Result<DMat3> {
    if values.len() != 9 {
        return Err(KinematicsError::WrongElementCount {
            expected: 9,
            found: values.len(),
        });
    }

    let v = values;
    Ok(DMat3::from_cols(
        DVec3::new(v[0], v[3], v[6]),
        DVec3::new(v[1], v[4], v[7]),
        DVec3::new(v[2], v[5], v[8]),
    ))
}

pub fn rotation_to_row_major(m: DMat3) -> [f64; 9] {
    m.transpose().to_cols_array()
}

/// Orthonormal with determinant +1, within `tolerance`.
pub fn is_rotation_matrix(m: DMat3, tolerance: f64) -> bool {
    (m.transpose() * m).abs_diff_eq(DMat3::IDENTITY, tolerance)
        && (m.determinant() - 1.0).abs() <= tolerance
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::FRAC_PI_2;

    #[test]
    fn test_views_agree() {
        let views = RotationViews::from_axis_angle(DVec3::new(1.0, 1.0, 1.0), 1.0);

        assert!(quaternion_to_matrix(views.quaternion).abs_diff_eq(views.matrix, 1e-12));
        assert!(views.axis_angle.to_matrix().abs_diff_eq(views.matrix, 1e-12));
        assert!(views.euler.to_matrix().abs_diff_eq(views.matrix, 1e-12));
        assert_relative_eq!(views.axis_angle.angle, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_default_is_identity() {
        let views = RotationViews::default();
        assert_eq!(views.axis_angle, AxisAngle::IDENTITY);
        assert_eq!(views.euler, EulerXyz::ZERO);
    }

    #[test]
    fn test_row_major_rotation() {
        let values = [0.0, -1.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 1.0];
        let m = rotation_from_row_major(&values).unwrap();
        assert!(m.abs_diff_eq(DMat3::from_rotation_z(FRAC_PI_2), 1e-15));
        assert_eq!(rotation_to_row_major(m), values);
        assert!(is_rotation_matrix(m, 1e-12));
    }

    #[test]
    fn test_row_major_rotation_wrong_count() {
        let err = rotation_from_row_major(&[0.0; 16]).unwrap_err();
        assert_eq!(err.to_string(), "Expected 9 numbers, found 16");
    }

    #[test]
    fn test_rejects_non_rotations() {
        assert!(!is_rotation_matrix(DMat3::from_diagonal(DVec3::splat(2.0)), 1e-9));
        assert!(!is_rotation_matrix(DMat3::from_diagonal(DVec3::new(1.0, 1.0, -1.0)), 1e-9));
    }
}
