// Shared layout and motion tuning constants used by the web frontend.

// Scene layout
pub const OBJECT_SPACING: f32 = 4.0; // world-space distance between page sections
pub const SECTION_COUNT: usize = 3;
pub const RING_COUNT: usize = 10;
pub const PARTICLE_COUNT: usize = 200;
pub const RING_SCATTER: f32 = 3.0; // half-extent cube each ring is scattered in
pub const RING_X_BIAS: f32 = -1.5; // rings sit left of the section text
pub const FEATURE_X: f32 = 1.5; // knot and spinner sit right of it
pub const PARTICLE_SCATTER: f32 = 10.0;

// Camera
pub const CAMERA_FOV_DEG: f32 = 35.0;
pub const CAMERA_Z: f32 = 6.0;
pub const CAMERA_ZNEAR: f32 = 0.1;
pub const CAMERA_ZFAR: f32 = 100.0;

// Motion
pub const PARALLAX_DAMPING_PER_SEC: f32 = 2.0; // rig convergence rate toward cursor target
pub const UNIFORM_SPIN_RATE: f32 = 0.4; // rad/s, all three axes
pub const INDEXED_SPIN_NUMERATOR: f32 = 2.0; // ring i spins at 2/i rad/s
pub const MAX_FRAME_DELTA_SEC: f32 = 0.1; // cap dt after a stall (backgrounded tab)

// Material
pub const DEFAULT_MATERIAL_COLOR: [f32; 3] = [0.180, 0.761, 0.494]; // #2ec27e

// Light
pub const LIGHT_DIRECTION: [f32; 3] = [1.0, 1.0, 0.0];
