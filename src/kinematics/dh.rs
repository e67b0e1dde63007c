use glam::{DMat3, DVec3};
use serde::{Deserialize, Serialize};

use crate::error::{KinematicsError, Result};
use crate::math::Pose;

/// One row of a standard Denavit-Hartenberg table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct DhRow {
    /// Link length.
    pub a: f64,
    /// Link twist, radians.
    pub alpha: f64,
    /// Link offset.
    pub d: f64,
    /// Joint angle, radians.
    pub theta: f64,
}

impl DhRow {
    /// Row appended when a link is added interactively: unit length, no twist.
    pub const DEFAULT_LINK: Self = Self {
        a: 1.0,
        alpha: 0.0,
        d: 0.0,
        theta: 0.0,
    };

    pub fn new(a: f64, alpha: f64, d: f64, theta: f64) -> Self {
        Self { a, alpha, d, theta }
    }

    pub fn with_theta(self, theta: f64) -> Self {
        Self { theta, ..self }
    }

    pub fn transform(&self) -> Pose {
        dh_transform(self.a, self.alpha, self.d, self.theta)
    }
}

/// Link transform `Rot_z(θ) · Trans_z(d) · Trans_x(a) · Rot_x(α)` in closed form.
pub fn dh_transform(a: f64, alpha: f64, d: f64, theta: f64) -> Pose {
    let (st, ct) = theta.sin_cos();
    let (sa, ca) = alpha.sin_cos();

    Pose::new(
        DMat3::from_cols(
            DVec3::new(ct, st, 0.0),
            DVec3::new(-st * ca, ct * ca, sa),
            DVec3::new(st * sa, -ct * sa, ca),
        ),
        DVec3::new(a * ct, a * st, d),
    )
}

/// Reads a DH table given as consecutive `a, alpha, d, theta` groups.
pub fn rows_from_flat(values: &[f64]) -> Result<Vec<DhRow>> {
    if values.len() % 4 != 0 {
        return Err(KinematicsError::RaggedTable {
            width: 4,
            found: values.len(),
        });
    }

    Ok(values
        .chunks_exact(4)
        .map(|r| DhRow::new(r[0], r[1], r[2], r[3]))
        .collect())
}
