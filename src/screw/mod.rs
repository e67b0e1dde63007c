//! Screw motions
//!
//! Every rigid displacement is a rotation about some line plus a translation
//! along that same line (Chasles). This module converts a [`Pose`] to that
//! line-and-motion description and back.

use glam::DVec3;
use serde::{Deserialize, Serialize};

use crate::math::{Pose, EPSILON};
use crate::rotation::{axis_angle_to_matrix, matrix_to_axis_angle_with_epsilon};

/// Screw description of a rigid motion.
///
/// For a pure translation `theta` is zero, `s` is the translation direction
/// (or `+Z` when there is no translation either), `d` the translation length
/// and `c` the origin: the axis location is meaningless in that case.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScrewParameters {
    /// Rotation about the axis, radians.
    pub theta: f64,
    /// Signed translation along the axis.
    pub d: f64,
    /// Unit axis direction.
    pub s: DVec3,
    /// Point on the axis.
    pub c: DVec3,
}

impl Default for ScrewParameters {
    fn default() -> Self {
        Self {
            theta: 0.0,
            d: 0.0,
            s: DVec3::Z,
            c: DVec3::ZERO,
        }
    }
}

impl ScrewParameters {
    pub fn new(theta: f64, d: f64, s: DVec3, c: DVec3) -> Self {
        Self { theta, d, s, c }
    }

    /// True on the degenerate branch of extraction, which writes an exact
    /// zero angle whatever threshold it was given.
    pub fn is_pure_translation(&self) -> bool {
        self.theta == 0.0
    }

    /// Translation per radian of rotation; `None` for a pure translation,
    /// whose pitch is infinite.
    pub fn pitch(&self) -> Option<f64> {
        if self.is_pure_translation() {
            None
        } else {
            Some(self.d / self.theta)
        }
    }

    /// Point at parameter `t` along the screw axis line.
    pub fn point_on_axis(&self, t: f64) -> DVec3 {
        self.c + self.s * t
    }

    pub fn to_pose(&self) -> Pose {
        build_pose(self)
    }
}

impl From<Pose> for ScrewParameters {
    fn from(pose: Pose) -> Self {
        extract_screw(&pose)
    }
}

impl From<ScrewParameters> for Pose {
    fn from(params: ScrewParameters) -> Self {
        build_pose(&params)
    }
}

pub fn extract_screw(pose: &Pose) -> ScrewParameters {
    extract_screw_with_epsilon(pose, EPSILON)
}

/// Screw parameters of `pose`, using `epsilon` both to detect the identity
/// rotation and to detect a zero translation.
pub fn extract_screw_with_epsilon(pose: &Pose, epsilon: f64) -> ScrewParameters {
    let axis_angle = matrix_to_axis_angle_with_epsilon(pose.rotation, epsilon);
    let p = pose.translation;

    // Below epsilon the axis-angle step has already forced theta to zero, so
    // cot(theta / 2) below is never evaluated near its pole.
    if axis_angle.angle.abs() < epsilon {
        let d = p.length();
        let s = if d > epsilon { p / d } else { DVec3::Z };
        log::trace!("pure translation screw: d = {d}");
        return ScrewParameters {
            theta: 0.0,
            d,
            s,
            c: DVec3::ZERO,
        };
    }

    let s = axis_angle.axis;
    let theta = axis_angle.angle;
    let d = p.dot(s);

    let cot_half = 1.0 / (theta / 2.0).tan();
    let c = 0.5 * (p - d * s) + 0.5 * cot_half * s.cross(p);

    ScrewParameters { theta, d, s, c }
}

/// Pose produced by rotating `theta` about the line through `c` along `s`,
/// then translating `d` along it.
///
/// `s` is normalized here and must be non-zero; a zero axis yields NaNs.
pub fn build_pose(params: &ScrewParameters) -> Pose {
    let s = params.s.normalize();
    let rotation = axis_angle_to_matrix(s, params.theta);
    let translation = params.c - rotation * params.c + params.d * s;

    Pose::new(rotation, translation)
}
