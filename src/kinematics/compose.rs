use glam::DVec3;
use serde::{Deserialize, Serialize};

use crate::math::Pose;

/// Frame in which each successive transform of a chain is expressed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CompositionMode {
    /// Moving (body) frame: post-multiply, `F_k = F_{k-1} · T_k`.
    #[default]
    Intrinsic,
    /// Fixed (world) frame: pre-multiply, `F_k = T_k · F_{k-1}`.
    Extrinsic,
}

impl CompositionMode {
    pub fn accumulate(self, current: &Pose, step: &Pose) -> Pose {
        match self {
            CompositionMode::Intrinsic => current.compose(step),
            CompositionMode::Extrinsic => step.compose(current),
        }
    }
}

/// Partial products of a composed chain.
///
/// `frames()[0]` is always the identity and the last frame is the final pose,
/// so a chain of N applied transforms has N + 1 frames.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChainFrames {
    frames: Vec<Pose>,
}

impl Default for ChainFrames {
    fn default() -> Self {
        Self::identity()
    }
}

impl ChainFrames {
    pub fn identity() -> Self {
        Self {
            frames: vec![Pose::IDENTITY],
        }
    }

    pub fn frames(&self) -> &[Pose] {
        &self.frames
    }

    pub fn into_frames(self) -> Vec<Pose> {
        self.frames
    }

    pub fn final_pose(&self) -> Pose {
        self.frames.last().copied().unwrap_or(Pose::IDENTITY)
    }

    /// Number of transforms applied (frames minus the base).
    pub fn step_count(&self) -> usize {
        self.frames.len().saturating_sub(1)
    }

    /// Origin of every frame, base first.
    pub fn origins(&self) -> Vec<DVec3> {
        self.frames.iter().map(|f| f.translation).collect()
    }

    fn push(&mut self, mode: CompositionMode, step: &Pose) {
        let next = mode.accumulate(&self.final_pose(), step);
        self.frames.push(next);
    }
}

/// Composes an ordered list of `(transform, active)` pairs.
///
/// Inactive steps are dropped entirely rather than treated as identity, so
/// they contribute no frame.
pub fn compose<I>(steps: I, mode: CompositionMode) -> ChainFrames
where
    I: IntoIterator<Item = (Pose, bool)>,
{
    let mut result = ChainFrames::identity();

    for (index, (pose, active)) in steps.into_iter().enumerate() {
        if !active {
            log::trace!("skipping inactive step {index}");
            continue;
        }
        result.push(mode, &pose);
    }

    result
}

pub fn compose_poses(poses: &[Pose], mode: CompositionMode) -> ChainFrames {
    compose(poses.iter().map(|p| (*p, true)), mode)
}
