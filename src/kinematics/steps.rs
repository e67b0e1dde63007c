use serde::{Deserialize, Serialize};

use super::compose::{compose, ChainFrames, CompositionMode};
use super::sequence::{ItemId, Sequence};
use crate::error::{KinematicsError, Result};
use crate::math::Pose;

/// A named, switchable transform in a user-built composition chain.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransformStep {
    pub name: String,
    pub pose: Pose,
    pub active: bool,
}

impl TransformStep {
    pub fn new(name: impl Into<String>, pose: Pose) -> Self {
        Self {
            name: name.into(),
            pose,
            active: true,
        }
    }

    pub fn inactive(self) -> Self {
        Self {
            active: false,
            ..self
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StepList {
    steps: Sequence<TransformStep>,
}

impl StepList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn steps(&self) -> &Sequence<TransformStep> {
        &self.steps
    }

    /// Mutable access for reordering, inserting and removing steps.
    pub fn steps_mut(&mut self) -> &mut Sequence<TransformStep> {
        &mut self.steps
    }

    pub fn push(&mut self, step: TransformStep) -> ItemId {
        self.steps.push(step)
    }

    /// Appends an active identity step named after its position, "Step N".
    pub fn add_identity_step(&mut self) -> ItemId {
        let name = format!("Step {}", self.steps.len() + 1);
        log::debug!("adding composition step {name:?}");
        self.steps.push(TransformStep::new(name, Pose::IDENTITY))
    }

    pub fn remove(&mut self, id: ItemId) -> Result<TransformStep> {
        self.steps.remove(id)
    }

    pub fn get(&self, id: ItemId) -> Option<&TransformStep> {
        self.steps.get(id)
    }

    pub fn set_active(&mut self, id: ItemId, active: bool) -> Result<()> {
        self.step_mut(id)?.active = active;
        Ok(())
    }

    pub fn set_pose(&mut self, id: ItemId, pose: Pose) -> Result<()> {
        self.step_mut(id)?.pose = pose;
        Ok(())
    }

    fn step_mut(&mut self, id: ItemId) -> Result<&mut TransformStep> {
        self.steps
            .get_mut(id)
            .ok_or(KinematicsError::UnknownItem(id))
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn active_count(&self) -> usize {
        self.steps.values().filter(|s| s.active).count()
    }

    /// Plain `(pose, active)` list in chain order, as consumed by [`compose`].
    pub fn pose_flags(&self) -> impl Iterator<Item = (Pose, bool)> + '_ {
        self.steps.values().map(|s| (s.pose, s.active))
    }

    pub fn compose(&self, mode: CompositionMode) -> ChainFrames {
        compose(self.pose_flags(), mode)
    }

    /// Symbolic matrix product of the active steps, e.g. `T_final = A * B`.
    ///
    /// Extrinsic composition pre-multiplies, so the names appear in reverse.
    /// With no active step the product is `Identity`.
    pub fn product_expression(&self, mode: CompositionMode) -> String {
        let mut names: Vec<&str> = self
            .steps
            .values()
            .filter(|s| s.active)
            .map(|s| s.name.as_str())
            .collect();

        if names.is_empty() {
            return "Identity".to_string();
        }
        if mode == CompositionMode::Extrinsic {
            names.reverse();
        }
        format!("T_final = {}", names.join(" * "))
    }
}

impl FromIterator<TransformStep> for StepList {
    fn from_iter<I: IntoIterator<Item = TransformStep>>(iter: I) -> Self {
        Self {
            steps: iter.into_iter().collect(),
        }
    }
}
