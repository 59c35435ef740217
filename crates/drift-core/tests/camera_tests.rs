// Host-side tests for the camera rig and scroll mapping.

use drift_core::*;
use glam::Vec2;

#[test]
fn scroll_maps_one_viewport_height_to_one_section() {
    // 600px of scroll on a 600px-tall viewport is exactly one section down.
    let y = scroll_camera_y(600.0, 600.0, 4.0);
    assert!((y - (-4.0)).abs() < 1e-6, "got {y}");
}

#[test]
fn scroll_mapping_is_linear_and_signed() {
    assert_eq!(scroll_camera_y(0.0, 600.0, 4.0), 0.0);
    let down = scroll_camera_y(300.0, 600.0, 4.0);
    assert!((down - (-2.0)).abs() < 1e-6);
    // Scrolling back up restores the original value exactly.
    let up = scroll_camera_y(0.0, 600.0, 4.0);
    assert_eq!(up, 0.0);
}

#[test]
fn resize_round_trip_restores_camera_y() {
    let before = scroll_camera_y(450.0, 600.0, 4.0);
    let _resized = scroll_camera_y(450.0, 768.0, 4.0);
    let after = scroll_camera_y(450.0, 600.0, 4.0);
    assert_eq!(before, after);
}

#[test]
fn rig_target_inverts_cursor_y() {
    // Cursor below center (positive y) pushes the rig upward.
    let cursor = CursorState { x: 0.4, y: 0.1 };
    let target = CameraRig::target_for(cursor);
    assert!((target.x - 0.4).abs() < 1e-6);
    assert!((target.y - (-0.1)).abs() < 1e-6);
}

#[test]
fn rig_converges_monotonically_toward_fixed_cursor() {
    let mut rig = CameraRig::new();
    let cursor = CursorState { x: 0.4, y: 0.1 };
    let target = CameraRig::target_for(cursor);
    let mut prev_dist = (target - rig.offset).length();
    for step in 0..200 {
        rig.advance(cursor, 0.25);
        let dist = (target - rig.offset).length();
        assert!(
            dist <= prev_dist,
            "distance grew at step {step}: {dist} > {prev_dist}"
        );
        prev_dist = dist;
    }
    assert!(prev_dist < 1e-4, "rig never settled: {prev_dist}");
}

#[test]
fn rig_zero_delta_is_a_no_op() {
    let mut rig = CameraRig {
        offset: Vec2::new(0.2, -0.3),
    };
    let before = rig.offset;
    rig.advance(CursorState { x: 0.5, y: 0.5 }, 0.0);
    assert_eq!(rig.offset, before);
}

#[test]
fn view_matrix_moves_eye_to_origin() {
    let camera = Camera {
        eye: glam::Vec3::new(0.3, -1.2, CAMERA_Z),
        target: glam::Vec3::new(0.3, -1.2, 0.0),
        up: glam::Vec3::Y,
        aspect: 800.0 / 600.0,
        fovy_radians: CAMERA_FOV_DEG.to_radians(),
        znear: CAMERA_ZNEAR,
        zfar: CAMERA_ZFAR,
    };
    let eye_in_view = camera.view_matrix().transform_point3(camera.eye);
    assert!(eye_in_view.length() < 1e-5, "got {eye_in_view}");
}
