use glam::DMat3;
use serde::{Deserialize, Serialize};

/// Below this `cos(y)` the pitch is exactly ±90° to working precision and
/// roll/yaw are coupled.
const GIMBAL_COS_THRESHOLD: f64 = 1e-12;

/// Intrinsic XYZ Euler angles in radians: `R = Rx(x) · Ry(y) · Rz(z)`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct EulerXyz {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl EulerXyz {
    pub const ZERO: Self = Self {
        x: 0.0,
        y: 0.0,
        z: 0.0,
    };

    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    pub fn from_degrees(x: f64, y: f64, z: f64) -> Self {
        Self::new(x.to_radians(), y.to_radians(), z.to_radians())
    }

    pub fn to_degrees(self) -> [f64; 3] {
        [self.x.to_degrees(), self.y.to_degrees(), self.z.to_degrees()]
    }

    pub fn to_array(self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }

    pub fn to_matrix(self) -> DMat3 {
        euler_to_matrix(self)
    }
}

pub fn euler_to_matrix(euler: EulerXyz) -> DMat3 {
    DMat3::from_rotation_x(euler.x) * DMat3::from_rotation_y(euler.y) * DMat3::from_rotation_z(euler.z)
}

/// Decomposes a rotation into intrinsic XYZ angles.
///
/// In gimbal lock only `x ± z` is observable; `z` is then pinned to zero. The
/// angles are not unique there but `euler_to_matrix` of the result still
/// reproduces `m`.
pub fn matrix_to_euler(m: DMat3) -> EulerXyz {
    let (m00, m01, m02) = (m.x_axis.x, m.y_axis.x, m.z_axis.x);
    let (m11, m12) = (m.y_axis.y, m.z_axis.y);
    let (m21, m22) = (m.y_axis.z, m.z_axis.z);

    // cos(y) is recovered from the first row so the general branch keeps
    // working right up to the lock; both atan2 pairs scale by cos(y).
    let cos_y = m00.hypot(m01);
    let y = m02.clamp(-1.0, 1.0).atan2(cos_y);

    if cos_y >= GIMBAL_COS_THRESHOLD {
        EulerXyz {
            x: (-m12).atan2(m22),
            y,
            z: (-m01).atan2(m00),
        }
    } else {
        log::trace!("euler decomposition in gimbal lock (R02 = {m02})");
        EulerXyz {
            x: m21.atan2(m11),
            y,
            z: 0.0,
        }
    }
}
