// Page wiring and renderer tuning constants.

pub const CANVAS_ID: &str = "scene-canvas";
pub const COLOR_INPUT_ID: &str = "material-color";

// Backing-store resolution cap, matching the original page's pixel-ratio clamp
pub const MAX_DEVICE_PIXEL_RATIO: f64 = 2.0;

// Deterministic layout seed for the scatter helpers
pub const SCENE_SEED: u64 = 42;

// World-space footprint of a unit-scaled quad, per shape
pub const RING_BASE_SIZE: f32 = 3.0;
pub const KNOT_BASE_SIZE: f32 = 2.3;
pub const SPINNER_BASE_SIZE: f32 = 2.0;
pub const PARTICLE_SIZE: f32 = 0.06;

// Background clear color
pub const CLEAR_COLOR: wgpu::Color = wgpu::Color {
    r: 0.010,
    g: 0.012,
    b: 0.022,
    a: 1.0,
};
