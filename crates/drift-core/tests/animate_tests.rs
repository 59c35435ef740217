// Host-side tests for the motion profiles and the animator.

use drift_core::*;
use glam::Vec3;
use std::f32::consts::{FRAC_PI_2, PI};

#[test]
fn oscillating_yaw_hits_known_samples() {
    let profile = MotionProfile::OscillateYaw;
    assert!(profile.rotation_at(0.0).y.abs() < 1e-6);
    assert!((profile.rotation_at(FRAC_PI_2).y - 1.0).abs() < 1e-6);
    assert!(profile.rotation_at(PI).y.abs() < 1e-6);
}

#[test]
fn oscillating_yaw_touches_only_yaw() {
    let rot = MotionProfile::OscillateYaw.rotation_at(1.3);
    assert_eq!(rot.x, 0.0);
    assert_eq!(rot.z, 0.0);
}

#[test]
fn uniform_spin_advances_all_axes_equally() {
    let profile = MotionProfile::UniformSpin { rate: 0.4 };
    let rot = profile.rotation_at(2.5);
    assert!((rot.x - 1.0).abs() < 1e-6);
    assert_eq!(rot.x, rot.y);
    assert_eq!(rot.y, rot.z);
}

#[test]
fn indexed_spin_rate_is_two_over_index() {
    for index in 1..10usize {
        let rot = MotionProfile::IndexedSpin { index }.rotation_at(3.0);
        let expected = 2.0 / index as f32 * 3.0;
        assert!(
            (rot.x - expected).abs() < 1e-5,
            "index {index}: got {} expected {expected}",
            rot.x
        );
        assert_eq!(rot.x, rot.y);
        assert_eq!(rot.y, rot.z);
    }
}

#[test]
fn indexed_spin_index_zero_is_inert() {
    // The naive 2/index rate is undefined at zero; it must come out as a
    // defined, motionless rotation rather than a fault.
    let rot = MotionProfile::IndexedSpin { index: 0 }.rotation_at(100.0);
    assert_eq!(rot, Vec3::ZERO);
    assert!(rot.x.is_finite());
}

#[test]
fn animator_applies_bound_profiles() {
    let mut scene = Scene::new();
    let knot = scene.spawn("knot", NodeKind::Knot, Transform::default());
    let spinner = scene.spawn("spinner", NodeKind::Spinner, Transform::default());

    let mut animator = SceneAnimator::new();
    animator.bind(knot, MotionProfile::OscillateYaw);
    animator.bind(spinner, MotionProfile::UniformSpin { rate: 0.4 });

    let updated = animator.apply(&mut scene, FRAC_PI_2);
    assert_eq!(updated, 2);

    let knot_rot = scene.node(knot).unwrap().transform.rotation;
    assert!((knot_rot.y - 1.0).abs() < 1e-6);
    let spinner_rot = scene.node(spinner).unwrap().transform.rotation;
    assert!((spinner_rot.x - 0.4 * FRAC_PI_2).abs() < 1e-6);
}

#[test]
fn animator_skips_handles_missing_from_scene() {
    let mut donor = Scene::new();
    donor.spawn("a", NodeKind::Ring, Transform::default());
    let foreign = donor.spawn("b", NodeKind::Ring, Transform::default());

    // A scene with fewer nodes cannot resolve the second handle.
    let mut scene = Scene::new();
    let local = scene.spawn("only", NodeKind::Ring, Transform::default());

    let mut animator = SceneAnimator::new();
    animator.bind(foreign, MotionProfile::UniformSpin { rate: 1.0 });
    animator.bind(local, MotionProfile::UniformSpin { rate: 1.0 });

    let updated = animator.apply(&mut scene, 2.0);
    assert_eq!(updated, 1, "the unresolved handle must be skipped");
    let rot = scene.node(local).unwrap().transform.rotation;
    assert!((rot.x - 2.0).abs() < 1e-6);
}

#[test]
fn profiles_are_stateless_across_applications() {
    let mut scene = Scene::new();
    let node = scene.spawn("ring", NodeKind::Ring, Transform::default());
    let mut animator = SceneAnimator::new();
    animator.bind(node, MotionProfile::IndexedSpin { index: 4 });

    animator.apply(&mut scene, 10.0);
    animator.apply(&mut scene, 3.0);
    // Absolute, not accumulated: the second application fully determines it.
    let rot = scene.node(node).unwrap().transform.rotation;
    assert!((rot.x - 1.5).abs() < 1e-5);
}
