use glam::{DMat3, DMat4, DVec3};
use serde::{Deserialize, Serialize};
use std::ops::Mul;

use crate::error::{KinematicsError, Result};
use crate::rotation::{euler_to_matrix, matrix_to_euler, EulerXyz};

/// A rigid-body transform, element of SE(3).
///
/// Stored as a rotation block plus a translation, so the homogeneous bottom row
/// is always exactly `(0, 0, 0, 1)`. Composition never renormalizes the
/// rotation block.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Pose {
    pub rotation: DMat3,
    pub translation: DVec3,
}

impl Default for Pose {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Pose {
    pub const IDENTITY: Self = Self {
        rotation: DMat3::IDENTITY,
        translation: DVec3::ZERO,
    };

    pub fn new(rotation: DMat3, translation: DVec3) -> Self {
        Self {
            rotation,
            translation,
        }
    }

    pub fn from_translation(translation: DVec3) -> Self {
        Self {
            translation,
            ..Self::IDENTITY
        }
    }

    pub fn from_rotation(rotation: DMat3) -> Self {
        Self {
            rotation,
            ..Self::IDENTITY
        }
    }

    pub fn from_euler_translation(euler: EulerXyz, translation: DVec3) -> Self {
        Self::new(euler_to_matrix(euler), translation)
    }

    /// Takes the rotation block and translation column of a homogeneous
    /// matrix. The bottom row is not inspected.
    pub fn from_matrix(matrix: DMat4) -> Self {
        Self {
            rotation: DMat3::from_mat4(matrix),
            translation: matrix.w_axis.truncate(),
        }
    }

    pub fn to_matrix(&self) -> DMat4 {
        DMat4::from_cols(
            self.rotation.x_axis.extend(0.0),
            self.rotation.y_axis.extend(0.0),
            self.rotation.z_axis.extend(0.0),
            self.translation.extend(1.0),
        )
    }

    /// Builds a pose from 16 row-major numbers, `m00 m01 m02 m03 m10 ... m33`.
    ///
    /// The last row is accepted but ignored.
    pub fn from_row_major(values: &[f64]) -> Result<Self> {
        if values.len() != 16 {
            return Err(KinematicsError::WrongElementCount {
                expected: 16,
                found: values.len(),
            });
        }

        let v = values;
        Ok(Self {
            rotation: DMat3::from_cols(
                DVec3::new(v[0], v[4], v[8]),
                DVec3::new(v[1], v[5], v[9]),
                DVec3::new(v[2], v[6], v[10]),
            ),
            translation: DVec3::new(v[3], v[7], v[11]),
        })
    }

    pub fn to_row_major(&self) -> [f64; 16] {
        self.to_matrix().transpose().to_cols_array()
    }

    pub fn with_translation(self, translation: DVec3) -> Self {
        Self {
            translation,
            ..self
        }
    }

    pub fn with_rotation(self, rotation: DMat3) -> Self {
        Self { rotation, ..self }
    }

    pub fn euler(&self) -> EulerXyz {
        matrix_to_euler(self.rotation)
    }

    /// `self · other`: `other` expressed in the frame of `self`.
    pub fn compose(&self, other: &Self) -> Self {
        Self {
            rotation: self.rotation * other.rotation,
            translation: self.rotation * other.translation + self.translation,
        }
    }

    pub fn inverse(&self) -> Self {
        let rotation = self.rotation.transpose();
        Self {
            rotation,
            translation: -(rotation * self.translation),
        }
    }

    pub fn transform_point(&self, point: DVec3) -> DVec3 {
        self.rotation * point + self.translation
    }

    pub fn transform_vector(&self, vector: DVec3) -> DVec3 {
        self.rotation * vector
    }

    pub fn x_axis(&self) -> DVec3 {
        self.rotation.x_axis
    }

    pub fn y_axis(&self) -> DVec3 {
        self.rotation.y_axis
    }

    pub fn z_axis(&self) -> DVec3 {
        self.rotation.z_axis
    }

    pub fn abs_diff_eq(&self, other: &Self, max_abs_diff: f64) -> bool {
        self.rotation.abs_diff_eq(other.rotation, max_abs_diff)
            && self.translation.abs_diff_eq(other.translation, max_abs_diff)
    }
}

impl Mul for Pose {
    type Output = Pose;

    fn mul(self, rhs: Pose) -> Pose {
        self.compose(&rhs)
    }
}

impl From<DMat4> for Pose {
    fn from(matrix: DMat4) -> Self {
        Self::from_matrix(matrix)
    }
}

impl From<Pose> for DMat4 {
    fn from(pose: Pose) -> Self {
        pose.to_matrix()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::FRAC_PI_2;

    #[test]
    fn test_identity_matrix() {
        assert_eq!(Pose::IDENTITY.to_matrix(), DMat4::IDENTITY);
        assert_eq!(Pose::default(), Pose::IDENTITY);
    }

    #[test]
    fn test_compose_matches_matrix_product() {
        let a = Pose::new(DMat3::from_rotation_z(0.7), DVec3::new(1.0, -2.0, 0.5));
        let b = Pose::new(DMat3::from_rotation_x(-1.1), DVec3::new(0.3, 0.0, 2.0));

        let composed = (a * b).to_matrix();
        let expected = a.to_matrix() * b.to_matrix();
        assert!(composed.abs_diff_eq(expected, 1e-12));
        assert_eq!(composed.row(3), glam::DVec4::new(0.0, 0.0, 0.0, 1.0));
    }

    #[test]
    fn test_inverse() {
        let pose = Pose::new(DMat3::from_rotation_y(0.4), DVec3::new(1.0, 2.0, 3.0));
        assert!((pose * pose.inverse()).abs_diff_eq(&Pose::IDENTITY, 1e-12));
        assert!((pose.inverse() * pose).abs_diff_eq(&Pose::IDENTITY, 1e-12));
    }

    #[test]
    fn test_transform_point() {
        let pose = Pose::new(DMat3::from_rotation_z(FRAC_PI_2), DVec3::new(1.0, 0.0, 0.0));
        let p = pose.transform_point(DVec3::X);
        assert!(p.abs_diff_eq(DVec3::new(1.0, 1.0, 0.0), 1e-12));

        let v = pose.transform_vector(DVec3::X);
        assert!(v.abs_diff_eq(DVec3::Y, 1e-12));
    }

    #[test]
    fn test_row_major_layout() {
        #[rustfmt::skip]
        let values = [
            0.0, -1.0, 0.0, 1.0,
            1.0,  0.0, 0.0, 2.0,
            0.0,  0.0, 1.0, 3.0,
            0.0,  0.0, 0.0, 1.0,
        ];
        let pose = Pose::from_row_major(&values).unwrap();

        assert_eq!(pose.translation, DVec3::new(1.0, 2.0, 3.0));
        assert_eq!(pose.x_axis(), DVec3::Y);
        assert_eq!(pose.y_axis(), DVec3::NEG_X);
        assert_eq!(pose.to_row_major(), values);
    }

    #[test]
    fn test_row_major_wrong_count() {
        let err = Pose::from_row_major(&[1.0; 9]).unwrap_err();
        assert_eq!(
            err,
            KinematicsError::WrongElementCount {
                expected: 16,
                found: 9
            }
        );
        assert_eq!(err.to_string(), "Expected 16 numbers, found 9");
    }

    #[test]
    fn test_edit_one_part_keeps_other() {
        let pose = Pose::new(DMat3::from_rotation_x(0.3), DVec3::new(1.0, 1.0, 1.0));

        let moved = pose.with_translation(DVec3::ZERO);
        assert_eq!(moved.rotation, pose.rotation);

        let turned = pose.with_rotation(DMat3::IDENTITY);
        assert_eq!(turned.translation, pose.translation);
    }

    #[test]
    fn test_euler_translation_round_trip() {
        let euler = EulerXyz::new(0.1, -0.4, 1.2);
        let pose = Pose::from_euler_translation(euler, DVec3::new(0.5, 0.0, -0.5));
        let rebuilt = Pose::from_euler_translation(pose.euler(), pose.translation);
        assert!(rebuilt.abs_diff_eq(&pose, 1e-12));
    }
}
