//! Chain kinematics module
//!
//! Denavit-Hartenberg link transforms, intrinsic/extrinsic composition of
//! transform lists, and the editable ordered collections a UI builds chains
//! from.

pub mod chain;
pub mod compose;
pub mod dh;
pub mod sequence;
pub mod steps;

pub use chain::{forward_kinematics, SerialChain, SerialChainBuilder};
pub use compose::{compose, compose_poses, ChainFrames, CompositionMode};
pub use dh::{dh_transform, rows_from_flat, DhRow};
pub use sequence::{Entry, ItemId, Sequence};
pub use steps::{StepList, TransformStep};
