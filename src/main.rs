use glam::{DMat3, DVec3};
use kinematics_core::kinematics::{CompositionMode, SerialChain, StepList, TransformStep};
use kinematics_core::math::Pose;
use kinematics_core::rotation::RotationViews;
use kinematics_core::screw::extract_screw;

fn print_pose(label: &str, pose: &Pose) {
    println!("{label}:");
    for row in pose.to_row_major().chunks_exact(4) {
        println!("  [{:>9.4} {:>9.4} {:>9.4} {:>9.4}]", row[0], row[1], row[2], row[3]);
    }
}

fn describe(pose: &Pose) {
    let views = RotationViews::from_matrix(pose.rotation);
    let [x, y, z] = views.euler.to_degrees();
    println!("  euler xyz (deg): [{x:.2}, {y:.2}, {z:.2}]");

    let q = views.quaternion;
    println!("  quaternion: [{:.4}, {:.4}, {:.4}, {:.4}]", q.x, q.y, q.z, q.w);

    let screw = extract_screw(pose);
    println!(
        "  screw: theta = {:.2} deg, d = {:.4}, s = {:.4?}, c = {:.4?}",
        screw.theta.to_degrees(),
        screw.d,
        screw.s.to_array(),
        screw.c.to_array()
    );
    match screw.pitch() {
        Some(pitch) => println!("  pitch: {pitch:.4}"),
        None => println!("  pitch: infinite (pure translation)"),
    }
}

fn main() {
    env_logger::init();

    let mut robot = SerialChain::puma_560();
    log::info!("PUMA 560 with {} links", robot.link_count());

    for (i, origin) in robot.joint_origins().iter().enumerate() {
        let label = if i == 0 { "Base".to_string() } else { format!("J{i}") };
        println!("{label:>4}: [{:.4}, {:.4}, {:.4}]", origin.x, origin.y, origin.z);
    }
    let tip = robot.end_effector();
    print_pose("end effector (zero pose)", &tip);
    describe(&tip);

    let angles = [0.0_f64, -45.0, 30.0, 0.0, 45.0, 90.0].map(f64::to_radians);
    if let Err(err) = robot.set_joint_angles(&angles) {
        log::error!("could not set joint angles: {err}");
        return;
    }
    let tip = robot.end_effector();
    print_pose("end effector (posed)", &tip);
    describe(&tip);

    let mut steps = StepList::new();
    steps.push(TransformStep::new(
        "rotate 90 about X",
        Pose::from_rotation(DMat3::from_rotation_x(90.0_f64.to_radians())),
    ));
    steps.push(TransformStep::new("translate Y", Pose::from_translation(DVec3::Y)));

    for mode in [CompositionMode::Intrinsic, CompositionMode::Extrinsic] {
        let frames = steps.compose(mode);
        print_pose(
            &format!("{mode:?} composition, {}", steps.product_expression(mode)),
            &frames.final_pose(),
        );
    }
}
