//! # kinematics-core
//!
//! Pure numeric routines for 3D rigid-body kinematics, meant to sit underneath
//! an interactive visualization front end.
//!
//! ## Features
//! - Rotation conversions: matrix, quaternion, axis-angle, intrinsic XYZ Euler
//! - SE(3) poses and screw-motion extraction / reconstruction (Chasles)
//! - Standard Denavit-Hartenberg link transforms and forward kinematics
//! - Intrinsic (body frame) and extrinsic (world frame) chain composition
//! - Cross-platform: Native + WASM support
//!
//! Every function maps explicit inputs to fresh outputs; nothing is cached or
//! shared between calls.
//!
//! ## Example
//! ```rust,ignore
//! use kinematics_core::kinematics::{CompositionMode, SerialChain};
//! use kinematics_core::screw::extract_screw;
//!
//! let chain = SerialChain::puma_560();
//! let frames = chain.forward_kinematics();
//! let tip = frames.final_pose();
//!
//! let screw = extract_screw(&tip);
//! println!("theta = {}, d = {}, axis = {:?}", screw.theta, screw.d, screw.s);
//! ```

pub mod error;
pub mod kinematics;
pub mod math;
pub mod rotation;
pub mod screw;

#[cfg(target_arch = "wasm32")]
pub mod web;

pub use error::{KinematicsError, Result};
pub use kinematics::{
    compose, compose_poses, dh_transform, forward_kinematics, ChainFrames, CompositionMode, DhRow,
    ItemId, Sequence, SerialChain, SerialChainBuilder, StepList, TransformStep,
};
pub use math::{Pose, EPSILON};
pub use rotation::{
    axis_angle_to_matrix, euler_to_matrix, matrix_to_axis_angle, matrix_to_euler,
    matrix_to_quaternion, quaternion_to_axis_angle, quaternion_to_matrix, AxisAngle, EulerXyz,
    RotationViews,
};
pub use screw::{build_pose, extract_screw, ScrewParameters};
