use glam::{DMat3, DQuat, DVec3};
use serde::{Deserialize, Serialize};

use super::quaternion::matrix_to_quaternion;
use crate::math::EPSILON;

/// Canonical axis-angle form of a rotation.
///
/// `angle` lies in `[0, π]`. When the rotation is within epsilon of the
/// identity the axis carries no information and is set to `(0, 0, 1)` with an
/// angle of exactly zero; callers must check the angle before trusting the
/// axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisAngle {
    pub axis: DVec3,
    pub angle: f64,
}

impl Default for AxisAngle {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl AxisAngle {
    pub const IDENTITY: Self = Self {
        axis: DVec3::Z,
        angle: 0.0,
    };

    pub fn new(axis: DVec3, angle: f64) -> Self {
        Self { axis, angle }
    }

    pub fn is_identity(&self) -> bool {
        self.angle == 0.0
    }

    pub fn to_matrix(&self) -> DMat3 {
        axis_angle_to_matrix(self.axis, self.angle)
    }

    /// Rotation vector `axis · angle`.
    pub fn scaled_axis(&self) -> DVec3 {
        self.axis * self.angle
    }
}

pub fn quaternion_to_axis_angle(q: DQuat) -> AxisAngle {
    quaternion_to_axis_angle_with_epsilon(q, EPSILON)
}

pub fn quaternion_to_axis_angle_with_epsilon(q: DQuat, epsilon: f64) -> AxisAngle {
    let q = q.normalize();
    // q and -q are the same rotation; w >= 0 keeps the angle in [0, π].
    let q = if q.w < 0.0 { -q } else { q };

    let w = q.w.clamp(-1.0, 1.0);
    let v = DVec3::new(q.x, q.y, q.z);
    // sqrt(1 - w²) for a unit quaternion, without the cancellation near w = 1.
    let s = v.length();

    if s < epsilon {
        return AxisAngle::IDENTITY;
    }

    AxisAngle {
        axis: v / s,
        angle: 2.0 * s.atan2(w),
    }
}

pub fn matrix_to_axis_angle(m: DMat3) -> AxisAngle {
    matrix_to_axis_angle_with_epsilon(m, EPSILON)
}

pub fn matrix_to_axis_angle_with_epsilon(m: DMat3, epsilon: f64) -> AxisAngle {
    quaternion_to_axis_angle_with_epsilon(matrix_to_quaternion(m), epsilon)
}

/// Rotation of `angle` radians about `axis`.
///
/// `axis` is normalized here. A zero-length axis is a caller error and yields a
/// NaN matrix.
pub fn axis_angle_to_matrix(axis: DVec3, angle: f64) -> DMat3 {
    DMat3::from_axis_angle(axis.normalize(), angle)
}
