//! The per-frame driver.
//!
//! The clock is a trait so the loop can be driven deterministically in
//! tests; the host shell supplies the real scheduler (one `tick` per
//! display refresh) and performs the draw after each tick.

use instant::Instant;
use std::time::Duration;

use crate::animate::SceneAnimator;
use crate::camera::{scroll_camera_y, Camera, CameraRig};
use crate::constants::{MAX_FRAME_DELTA_SEC, OBJECT_SPACING};
use crate::input::InputSampler;
use crate::scene::Scene;

/// Monotonic time since some fixed origin (loop start).
pub trait Clock {
    fn elapsed(&self) -> Duration;
}

/// Wall clock; works on both native and wasm targets.
pub struct RealClock {
    start: Instant,
}

impl RealClock {
    pub fn start() -> Self {
        Self {
            start: Instant::now(),
        }
    }
}

impl Clock for RealClock {
    fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }
}

/// Hand-driven clock for tests and headless runs.
#[derive(Default)]
pub struct ManualClock {
    now: Duration,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn advance(&mut self, by: Duration) {
        self.now += by;
    }

    pub fn set(&mut self, to: Duration) {
        self.now = to;
    }
}

impl Clock for ManualClock {
    fn elapsed(&self) -> Duration {
        self.now
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum DriverState {
    Idle,
    Running,
}

/// Elapsed/delta pair measured at the top of a tick.
#[derive(Clone, Copy, Debug)]
pub struct FrameTiming {
    pub elapsed_sec: f32,
    pub delta_sec: f32,
}

/// Owns frame timing and the fixed per-tick ordering: camera vertical
/// from scroll, damped rig advance, then object animation. Rendering and
/// rescheduling stay with the host shell.
pub struct FrameDriver<C: Clock> {
    clock: C,
    state: DriverState,
    previous_sec: f32,
    max_delta_sec: f32,
    section_spacing: f32,
}

impl<C: Clock> FrameDriver<C> {
    pub fn new(clock: C) -> Self {
        Self {
            clock,
            state: DriverState::Idle,
            previous_sec: 0.0,
            max_delta_sec: MAX_FRAME_DELTA_SEC,
            section_spacing: OBJECT_SPACING,
        }
    }

    pub fn is_running(&self) -> bool {
        self.state == DriverState::Running
    }

    /// Access the injected clock, e.g. to advance a [`ManualClock`].
    pub fn clock_mut(&mut self) -> &mut C {
        &mut self.clock
    }

    /// Advance one frame. The delta is measured, never assumed, and is
    /// clamped so a stalled tab cannot make the rig leap past its target.
    pub fn tick(
        &mut self,
        input: &InputSampler,
        rig: &mut CameraRig,
        camera: &mut Camera,
        scene: &mut Scene,
        animator: &SceneAnimator,
    ) -> FrameTiming {
        let elapsed_sec = self.clock.elapsed().as_secs_f32();
        let delta_sec = (elapsed_sec - self.previous_sec).clamp(0.0, self.max_delta_sec);
        self.previous_sec = elapsed_sec;
        self.state = DriverState::Running;

        let base_y = scroll_camera_y(
            input.scroll().offset,
            input.viewport().height,
            self.section_spacing,
        );
        rig.advance(input.cursor(), delta_sec);

        camera.eye.x = rig.offset.x;
        camera.eye.y = base_y + rig.offset.y;
        camera.target.x = camera.eye.x;
        camera.target.y = camera.eye.y;
        camera.aspect = input.viewport().aspect();

        animator.apply(scene, elapsed_sec);

        FrameTiming {
            elapsed_sec,
            delta_sec,
        }
    }
}
