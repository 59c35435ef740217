//! Per-frame procedural motion.
//!
//! Every profile is a pure function of elapsed time, so a frame can be
//! replayed or skipped without drift.

use glam::Vec3;

use crate::constants::INDEXED_SPIN_NUMERATOR;
use crate::scene::{NodeHandle, Scene};

#[derive(Clone, Copy, Debug)]
pub enum MotionProfile {
    /// `rotation.y = sin(t)`: bounded yaw sway, period 2π seconds.
    OscillateYaw,
    /// All three axes advance at the same constant rate (rad/s).
    UniformSpin { rate: f32 },
    /// All three axes advance at `2 / index` rad/s. Index 0 would divide
    /// by zero, so its rate is pinned to 0 and the object holds still.
    IndexedSpin { index: usize },
}

impl MotionProfile {
    /// Absolute rotation for this profile at `elapsed_sec`.
    pub fn rotation_at(&self, elapsed_sec: f32) -> Vec3 {
        match *self {
            MotionProfile::OscillateYaw => Vec3::new(0.0, elapsed_sec.sin(), 0.0),
            MotionProfile::UniformSpin { rate } => Vec3::splat(rate * elapsed_sec),
            MotionProfile::IndexedSpin { index } => {
                Vec3::splat(Self::indexed_rate(index) * elapsed_sec)
            }
        }
    }

    fn indexed_rate(index: usize) -> f32 {
        if index == 0 {
            0.0
        } else {
            INDEXED_SPIN_NUMERATOR / index as f32
        }
    }
}

/// Bindings from node handles to motion profiles, applied every frame.
#[derive(Default)]
pub struct SceneAnimator {
    bindings: Vec<(NodeHandle, MotionProfile)>,
}

impl SceneAnimator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn bind(&mut self, handle: NodeHandle, profile: MotionProfile) {
        self.bindings.push((handle, profile));
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Set every bound node's rotation from its profile. A handle that no
    /// longer resolves is skipped for the frame, not a fault. Returns the
    /// number of nodes actually updated.
    pub fn apply(&self, scene: &mut Scene, elapsed_sec: f32) -> usize {
        let mut updated = 0;
        for (handle, profile) in &self.bindings {
            match scene.node_mut(*handle) {
                Some(node) => {
                    node.transform.rotation = profile.rotation_at(elapsed_sec);
                    updated += 1;
                }
                None => {
                    log::warn!("animator: handle {handle:?} not in scene, skipping this frame");
                }
            }
        }
        updated
    }
}
