//! Camera description and the scroll/cursor-driven rig.

use glam::{Mat4, Vec2, Vec3};

use crate::constants::PARALLAX_DAMPING_PER_SEC;
use crate::input::CursorState;

/// Simple right-handed camera description with perspective projection.
#[derive(Clone, Debug)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Camera {
    /// Compute the clip-space projection matrix.
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }

    /// Compute the view matrix that transforms world to view space.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }
}

/// Smoothed 2D offset the camera rides on to follow the cursor.
///
/// Advanced once per frame by the frame driver; nothing else writes it.
#[derive(Clone, Copy, Debug, Default)]
pub struct CameraRig {
    pub offset: Vec2,
}

impl CameraRig {
    pub fn new() -> Self {
        Self::default()
    }

    /// The point the rig trends toward: cursor x, inverted cursor y.
    pub fn target_for(cursor: CursorState) -> Vec2 {
        Vec2::new(cursor.x, -cursor.y)
    }

    /// One step of first-order exponential smoothing toward the cursor
    /// target. No velocity state, so there is no overshoot as long as
    /// `dt_sec * PARALLAX_DAMPING_PER_SEC <= 1`; the frame driver's delta
    /// clamp keeps that product well under one.
    pub fn advance(&mut self, cursor: CursorState, dt_sec: f32) {
        let target = Self::target_for(cursor);
        self.offset += (target - self.offset) * PARALLAX_DAMPING_PER_SEC * dt_sec;
    }
}

/// Direct (undamped) mapping from scroll offset to the camera's vertical
/// position: one viewport height of scrolling moves the camera down one
/// section spacing.
pub fn scroll_camera_y(scroll_offset: f32, viewport_height: f32, section_spacing: f32) -> f32 {
    -scroll_offset / viewport_height.max(1.0) * section_spacing
}
