//! Composition and forward-kinematics properties checked through the public API.

use glam::{DMat3, DVec3};
use kinematics_core::kinematics::{
    compose_poses, dh_transform, CompositionMode, DhRow, SerialChain, StepList, TransformStep,
};
use kinematics_core::math::Pose;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::f64::consts::FRAC_PI_2;

fn random_pose(rng: &mut StdRng) -> Pose {
    let axis = DVec3::new(
        rng.gen_range(-1.0..1.0),
        rng.gen_range(-1.0..1.0),
        rng.gen_range(-1.0..1.0),
    )
    .try_normalize()
    .unwrap_or(DVec3::Z);
    let rotation = DMat3::from_axis_angle(axis, rng.gen_range(-3.0..3.0));
    let translation = DVec3::new(
        rng.gen_range(-2.0..2.0),
        rng.gen_range(-2.0..2.0),
        rng.gen_range(-2.0..2.0),
    );
    Pose::new(rotation, translation)
}

#[test]
fn empty_composition_is_identity() {
    for mode in [CompositionMode::Intrinsic, CompositionMode::Extrinsic] {
        let frames = compose_poses(&[], mode);
        assert_eq!(frames.frames(), &[Pose::IDENTITY]);
        assert_eq!(StepList::new().compose(mode).final_pose(), Pose::IDENTITY);
    }
}

#[test]
fn rotation_about_x_commutes_with_shift_along_x() {
    let rot = Pose::from_rotation(DMat3::from_rotation_x(FRAC_PI_2));
    let shift = Pose::from_translation(DVec3::X);

    let intrinsic = compose_poses(&[rot, shift], CompositionMode::Intrinsic).final_pose();
    let extrinsic = compose_poses(&[rot, shift], CompositionMode::Extrinsic).final_pose();
    assert!(intrinsic.abs_diff_eq(&extrinsic, 1e-12));
}

#[test]
fn rotation_and_offset_shift_do_not_commute() {
    let rot = Pose::from_rotation(DMat3::from_rotation_x(FRAC_PI_2));
    let shift = Pose::from_translation(DVec3::Y);

    let intrinsic = compose_poses(&[rot, shift], CompositionMode::Intrinsic).final_pose();
    let extrinsic = compose_poses(&[rot, shift], CompositionMode::Extrinsic).final_pose();

    assert!(!intrinsic.abs_diff_eq(&extrinsic, 1e-3));
    assert!(intrinsic.translation.abs_diff_eq(DVec3::Z, 1e-12));
    assert!(extrinsic.translation.abs_diff_eq(DVec3::Y, 1e-12));
}

#[test]
fn extrinsic_equals_reversed_intrinsic() {
    let mut rng = StdRng::seed_from_u64(23);

    for len in 0..8 {
        let poses: Vec<Pose> = (0..len).map(|_| random_pose(&mut rng)).collect();
        let reversed: Vec<Pose> = poses.iter().rev().copied().collect();

        let extrinsic = compose_poses(&poses, CompositionMode::Extrinsic).final_pose();
        let intrinsic = compose_poses(&reversed, CompositionMode::Intrinsic).final_pose();
        assert!(extrinsic.abs_diff_eq(&intrinsic, 1e-9), "length {len}");
    }
}

#[test]
fn inactive_steps_leave_the_result_unchanged() {
    let mut rng = StdRng::seed_from_u64(29);
    let a = random_pose(&mut rng);
    let b = random_pose(&mut rng);
    let skipped = random_pose(&mut rng);

    let with_inactive: StepList = [
        TransformStep::new("a", a),
        TransformStep::new("skipped", skipped).inactive(),
        TransformStep::new("b", b),
    ]
    .into_iter()
    .collect();

    for mode in [CompositionMode::Intrinsic, CompositionMode::Extrinsic] {
        let expected = compose_poses(&[a, b], mode);
        let frames = with_inactive.compose(mode);
        assert_eq!(frames.frames().len(), 3);
        assert!(frames.final_pose().abs_diff_eq(&expected.final_pose(), 1e-15));
    }
}

#[test]
fn dh_zero_row_is_identity() {
    assert_eq!(dh_transform(0.0, 0.0, 0.0, 0.0), Pose::IDENTITY);
}

#[test]
fn puma_560_zero_pose_frames() {
    let frames = SerialChain::puma_560().forward_kinematics();
    assert_eq!(frames.frames().len(), 7);

    let shoulder = frames.frames()[2];
    let expected_rotation = DMat3::from_cols(
        DVec3::new(1.0, 0.0, 0.0),
        DVec3::new(0.0, 0.0, 1.0),
        DVec3::new(0.0, -1.0, 0.0),
    );
    assert!(shoulder.rotation.abs_diff_eq(expected_rotation, 1e-12));
    assert!(shoulder
        .translation
        .abs_diff_eq(DVec3::new(0.4318, 0.0, 0.0), 1e-12));

    let tip = frames.final_pose();
    assert!(tip.rotation.abs_diff_eq(DMat3::IDENTITY, 1e-12));
    assert!(tip
        .translation
        .abs_diff_eq(DVec3::new(0.4521, -0.15005, 0.4318), 1e-12));
}

#[test]
fn chain_forward_kinematics_matches_manual_product() {
    let mut rng = StdRng::seed_from_u64(31);
    let mut chain = SerialChain::puma_560();
    let angles: Vec<f64> = (0..chain.link_count())
        .map(|_| rng.gen_range(-3.0..3.0))
        .collect();
    chain.set_joint_angles(&angles).unwrap();

    let manual = chain
        .links()
        .values()
        .fold(Pose::IDENTITY, |acc, row: &DhRow| acc * row.transform());
    assert!(chain.end_effector().abs_diff_eq(&manual, 1e-12));
}

#[test]
fn chain_survives_json() {
    let mut chain = SerialChain::puma_560();
    chain.set_tool(Some(Pose::from_translation(DVec3::new(0.0, 0.0, 0.05))));

    let json = serde_json::to_string(&chain).unwrap();
    let restored: SerialChain = serde_json::from_str(&json).unwrap();

    assert_eq!(restored.link_count(), chain.link_count());
    assert!(restored
        .end_effector()
        .abs_diff_eq(&chain.end_effector(), 1e-12));
}
