use glam::{DMat3, DQuat};

/// Extracts a unit quaternion from a rotation matrix (Shepperd's method).
///
/// The branch is chosen from the largest of `{trace, R00, R11, R22}` so the
/// square root being divided by is never close to zero, including near a half
/// turn where the trace approaches -1.
pub fn matrix_to_quaternion(m: DMat3) -> DQuat {
    let (m00, m01, m02) = (m.x_axis.x, m.y_axis.x, m.z_axis.x);
    let (m10, m11, m12) = (m.x_axis.y, m.y_axis.y, m.z_axis.y);
    let (m20, m21, m22) = (m.x_axis.z, m.y_axis.z, m.z_axis.z);

    let trace = m00 + m11 + m22;

    let q = if trace >= m00 && trace >= m11 && trace >= m22 {
        let s = (1.0 + trace).sqrt() * 2.0;
        DQuat::from_xyzw((m21 - m12) / s, (m02 - m20) / s, (m10 - m01) / s, 0.25 * s)
    } else if m00 >= m11 && m00 >= m22 {
        let s = (1.0 + m00 - m11 - m22).sqrt() * 2.0;
        DQuat::from_xyzw(0.25 * s, (m01 + m10) / s, (m02 + m20) / s, (m21 - m12) / s)
    } else if m11 >= m22 {
        let s = (1.0 + m11 - m00 - m22).sqrt() * 2.0;
        DQuat::from_xyzw((m01 + m10) / s, 0.25 * s, (m12 + m21) / s, (m02 - m20) / s)
    } else {
        let s = (1.0 + m22 - m00 - m11).sqrt() * 2.0;
        DQuat::from_xyzw((m02 + m20) / s, (m12 + m21) / s, 0.25 * s, (m10 - m01) / s)
    };

    q.normalize()
}

pub fn quaternion_to_matrix(q: DQuat) -> DMat3 {
    DMat3::from_quat(q.normalize())
}
