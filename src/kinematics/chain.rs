use std::f64::consts::FRAC_PI_2;

use glam::DVec3;
use serde::{Deserialize, Serialize};

use super::compose::{compose, ChainFrames, CompositionMode};
use super::dh::DhRow;
use super::sequence::Sequence;
use crate::error::{KinematicsError, Result};
use crate::math::Pose;

/// Serial manipulator described by a DH table, base to tip, with an optional
/// fixed tool transform after the last link.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SerialChain {
    pub(crate) links: Sequence<DhRow>,
    pub(crate) tool: Option<Pose>,
}

impl SerialChain {
    pub fn builder() -> SerialChainBuilder {
        SerialChainBuilder::new()
    }

    /// PUMA 560 at its zero joint configuration (lengths in metres).
    pub fn puma_560() -> Self {
        Self::builder()
            .link(DhRow::new(0.0, FRAC_PI_2, 0.0, 0.0))
            .link(DhRow::new(0.4318, 0.0, 0.0, 0.0))
            .link(DhRow::new(0.0203, -FRAC_PI_2, 0.15005, 0.0))
            .link(DhRow::new(0.0, FRAC_PI_2, 0.4318, 0.0))
            .link(DhRow::new(0.0, -FRAC_PI_2, 0.0, 0.0))
            .link(DhRow::new(0.0, 0.0, 0.0, 0.0))
            .build()
    }

    pub fn links(&self) -> &Sequence<DhRow> {
        &self.links
    }

    /// Mutable access for editing, inserting, removing and reordering rows.
    pub fn links_mut(&mut self) -> &mut Sequence<DhRow> {
        &mut self.links
    }

    pub fn link_count(&self) -> usize {
        self.links.len()
    }

    pub fn tool(&self) -> Option<&Pose> {
        self.tool.as_ref()
    }

    pub fn set_tool(&mut self, tool: Option<Pose>) {
        self.tool = tool;
    }

    pub fn joint_angles(&self) -> Vec<f64> {
        self.links.values().map(|row| row.theta).collect()
    }

    /// Replaces every joint angle, base first.
    pub fn set_joint_angles(&mut self, angles: &[f64]) -> Result<()> {
        if angles.len() != self.links.len() {
            return Err(KinematicsError::WrongElementCount {
                expected: self.links.len(),
                found: angles.len(),
            });
        }

        for (row, &theta) in self.links.values_mut().zip(angles) {
            row.theta = theta;
        }
        Ok(())
    }

    pub fn forward_kinematics(&self) -> ChainFrames {
        let rows: Vec<DhRow> = self.links.values().copied().collect();
        forward_kinematics(&rows, self.tool)
    }

    pub fn end_effector(&self) -> Pose {
        self.forward_kinematics().final_pose()
    }

    /// Origin of the base, every joint frame and the tool, in chain order.
    pub fn joint_origins(&self) -> Vec<DVec3> {
        self.forward_kinematics().origins()
    }
}

/// Intrinsic composition of the link transforms, followed by `tool` if given.
///
/// Yields one frame per row plus the base frame, and one more for the tool.
pub fn forward_kinematics(rows: &[DhRow], tool: Option<Pose>) -> ChainFrames {
    let links = rows.iter().map(|row| (row.transform(), true));
    let tool = tool.map(|pose| (pose, true));
    compose(links.chain(tool), CompositionMode::Intrinsic)
}

pub struct SerialChainBuilder {
    links: Vec<DhRow>,
    tool: Option<Pose>,
}

impl SerialChainBuilder {
    pub fn new() -> Self {
        Self {
            links: Vec::new(),
            tool: None,
        }
    }

    pub fn link(mut self, row: DhRow) -> Self {
        self.links.push(row);
        self
    }

    pub fn links(mut self, rows: impl IntoIterator<Item = DhRow>) -> Self {
        self.links.extend(rows);
        self
    }

    pub fn tool(mut self, tool: Pose) -> Self {
        self.tool = Some(tool);
        self
    }

    pub fn build(self) -> SerialChain {
        log::debug!(
            "built serial chain: {} links, tool: {}",
            self.links.len(),
            self.tool.is_some()
        );
        SerialChain {
            links: self.links.into_iter().collect(),
            tool: self.tool,
        }
    }
}

impl Default for SerialChainBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::DMat3;

    #[test]
    fn test_empty_chain_is_base_only() {
        let chain = SerialChain::builder().build();
        let frames = chain.forward_kinematics();
        assert_eq!(frames.frames(), &[Pose::IDENTITY]);
    }

    #[test]
    fn test_puma_frame_count() {
        let chain = SerialChain::puma_560();
        assert_eq!(chain.link_count(), 6);
        assert_eq!(chain.forward_kinematics().frames().len(), 7);
        assert_eq!(chain.joint_origins().len(), 7);
    }

    #[test]
    fn test_puma_zero_pose() {
        let end = SerialChain::puma_560().end_effector();
        assert!(end.rotation.abs_diff_eq(DMat3::IDENTITY, 1e-12));
        assert!(end
            .translation
            .abs_diff_eq(DVec3::new(0.4521, -0.15005, 0.4318), 1e-12));
    }

    #[test]
    fn test_tool_adds_trailing_frame() {
        let tool = Pose::from_translation(DVec3::new(0.0, 0.0, 0.1));
        let chain = SerialChain::builder()
            .link(DhRow::DEFAULT_LINK)
            .tool(tool)
            .build();

        let frames = chain.forward_kinematics();
        assert_eq!(frames.frames().len(), 3);
        assert!(frames
            .final_pose()
            .translation
            .abs_diff_eq(DVec3::new(1.0, 0.0, 0.1), 1e-12));
    }

    #[test]
    fn test_planar_two_link() {
        let mut chain = SerialChain::builder()
            .links([DhRow::DEFAULT_LINK, DhRow::DEFAULT_LINK])
            .build();
        chain.set_joint_angles(&[FRAC_PI_2, -FRAC_PI_2]).unwrap();

        let origins = chain.joint_origins();
        assert!(origins[1].abs_diff_eq(DVec3::Y, 1e-12));
        assert!(origins[2].abs_diff_eq(DVec3::new(1.0, 1.0, 0.0), 1e-12));
        assert_eq!(chain.joint_angles(), vec![FRAC_PI_2, -FRAC_PI_2]);
    }

    #[test]
    fn test_joint_angle_count_mismatch() {
        let mut chain = SerialChain::puma_560();
        let err = chain.set_joint_angles(&[0.0; 3]).unwrap_err();
        assert_eq!(
            err,
            KinematicsError::WrongElementCount {
                expected: 6,
                found: 3
            }
        );
    }

    #[test]
    fn test_removing_a_link() {
        let mut chain = SerialChain::puma_560();
        let last = chain.links().ids().last().unwrap();
        chain.links_mut().remove(last).unwrap();
        assert_eq!(chain.forward_kinematics().frames().len(), 6);
    }
}
