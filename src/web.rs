//! WASM entry point - exposes the kinematics core to a browser UI
//!
//! Everything crosses the boundary as flat `f64` arrays: matrices row-major,
//! quaternions `[x, y, z, w]`, axis-angle `[ax, ay, az, angle]`, Euler
//! `[x, y, z]`, screws `[theta, d, sx, sy, sz, cx, cy, cz]`. Frame lists are
//! concatenated 16-number poses, base first.

use glam::{DQuat, DVec3};
use wasm_bindgen::prelude::*;

use crate::error::KinematicsError;
use crate::kinematics::{compose, forward_kinematics, rows_from_flat, ChainFrames, CompositionMode};
use crate::math::Pose;
use crate::rotation::{
    axis_angle_to_matrix, euler_to_matrix, matrix_to_axis_angle, matrix_to_euler,
    matrix_to_quaternion, quaternion_to_matrix, rotation_from_row_major, rotation_to_row_major,
    EulerXyz,
};
use crate::screw::{build_pose, extract_screw, ScrewParameters};

/// One composition step: active flag (non-zero = active) then 16 row-major numbers.
const STEP_WIDTH: usize = 17;

fn js_error(err: KinematicsError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

fn check_len(values: &[f64], expected: usize) -> Result<(), JsValue> {
    if values.len() != expected {
        return Err(js_error(KinematicsError::WrongElementCount {
            expected,
            found: values.len(),
        }));
    }
    Ok(())
}

fn flatten(frames: &ChainFrames) -> Vec<f64> {
    frames.frames().iter().flat_map(|f| f.to_row_major()).collect()
}

#[wasm_bindgen(js_name = rotationToQuaternion)]
pub fn rotation_to_quaternion(matrix: &[f64]) -> Result<Vec<f64>, JsValue> {
    let m = rotation_from_row_major(matrix).map_err(js_error)?;
    Ok(matrix_to_quaternion(m).to_array().to_vec())
}

#[wasm_bindgen(js_name = quaternionToRotation)]
pub fn quaternion_to_rotation(quaternion: &[f64]) -> Result<Vec<f64>, JsValue> {
    check_len(quaternion, 4)?;
    let q = DQuat::from_slice(quaternion);
    Ok(rotation_to_row_major(quaternion_to_matrix(q)).to_vec())
}

#[wasm_bindgen(js_name = rotationToAxisAngle)]
pub fn rotation_to_axis_angle(matrix: &[f64]) -> Result<Vec<f64>, JsValue> {
    let m = rotation_from_row_major(matrix).map_err(js_error)?;
    let aa = matrix_to_axis_angle(m);
    Ok(vec![aa.axis.x, aa.axis.y, aa.axis.z, aa.angle])
}

/// The caller must not pass a zero axis.
#[wasm_bindgen(js_name = axisAngleToRotation)]
pub fn axis_angle_to_rotation(axis_angle: &[f64]) -> Result<Vec<f64>, JsValue> {
    check_len(axis_angle, 4)?;
    let axis = DVec3::from_slice(axis_angle);
    Ok(rotation_to_row_major(axis_angle_to_matrix(axis, axis_angle[3])).to_vec())
}

#[wasm_bindgen(js_name = rotationToEuler)]
pub fn rotation_to_euler(matrix: &[f64]) -> Result<Vec<f64>, JsValue> {
    let m = rotation_from_row_major(matrix).map_err(js_error)?;
    Ok(matrix_to_euler(m).to_array().to_vec())
}

#[wasm_bindgen(js_name = eulerToRotation)]
pub fn euler_to_rotation(euler: &[f64]) -> Result<Vec<f64>, JsValue> {
    check_len(euler, 3)?;
    let euler = EulerXyz::new(euler[0], euler[1], euler[2]);
    Ok(rotation_to_row_major(euler_to_matrix(euler)).to_vec())
}

#[wasm_bindgen(js_name = poseToScrew)]
pub fn pose_to_screw(pose: &[f64]) -> Result<Vec<f64>, JsValue> {
    let pose = Pose::from_row_major(pose).map_err(js_error)?;
    let screw = extract_screw(&pose);
    let mut out = vec![screw.theta, screw.d];
    out.extend_from_slice(&screw.s.to_array());
    out.extend_from_slice(&screw.c.to_array());
    Ok(out)
}

/// The caller must not pass a zero axis direction.
#[wasm_bindgen(js_name = screwToPose)]
pub fn screw_to_pose(screw: &[f64]) -> Result<Vec<f64>, JsValue> {
    check_len(screw, 8)?;
    let params = ScrewParameters::new(
        screw[0],
        screw[1],
        DVec3::from_slice(&screw[2..5]),
        DVec3::from_slice(&screw[5..8]),
    );
    Ok(build_pose(&params).to_row_major().to_vec())
}

#[wasm_bindgen(js_name = dhTransform)]
pub fn dh_transform(a: f64, alpha: f64, d: f64, theta: f64) -> Vec<f64> {
    crate::kinematics::dh_transform(a, alpha, d, theta)
        .to_row_major()
        .to_vec()
}

/// `table` holds `a, alpha, d, theta` per link; `tool` is an optional pose.
#[wasm_bindgen(js_name = forwardKinematics)]
pub fn forward_kinematics_frames(table: &[f64], tool: Option<Vec<f64>>) -> Result<Vec<f64>, JsValue> {
    let rows = rows_from_flat(table).map_err(js_error)?;
    let tool = match tool {
        Some(values) => Some(Pose::from_row_major(&values).map_err(js_error)?),
        None => None,
    };
    Ok(flatten(&forward_kinematics(&rows, tool)))
}

#[wasm_bindgen(js_name = composeChain)]
pub fn compose_chain(steps: &[f64], extrinsic: bool) -> Result<Vec<f64>, JsValue> {
    if steps.len() % STEP_WIDTH != 0 {
        return Err(js_error(KinematicsError::RaggedTable {
            width: STEP_WIDTH,
            found: steps.len(),
        }));
    }

    let mut parsed = Vec::with_capacity(steps.len() / STEP_WIDTH);
    for chunk in steps.chunks_exact(STEP_WIDTH) {
        let pose = Pose::from_row_major(&chunk[1..]).map_err(js_error)?;
        parsed.push((pose, chunk[0] != 0.0));
    }

    let mode = if extrinsic {
        CompositionMode::Extrinsic
    } else {
        CompositionMode::Intrinsic
    };
    Ok(flatten(&compose(parsed, mode)))
}

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    // A second init (module re-instantiated by a dev server) keeps the first logger.
    console_log::init_with_level(log::Level::Warn).ok();
}
