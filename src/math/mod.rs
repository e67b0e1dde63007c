//! Math utilities module
//!
//! Provides re-exports of the f64 glam types used throughout the crate and the
//! SE(3) [`Pose`] value type.

mod pose;

pub use pose::Pose;

// Re-export commonly used glam types
pub use glam::{DMat3, DMat4, DQuat, DVec3, DVec4};

/// Shared singularity threshold.
///
/// Used both for "is this rotation the identity" in axis-angle extraction and
/// for "is this a pure translation" in screw extraction, so the two tests can
/// never disagree.
pub const EPSILON: f64 = 1e-6;
