//! Retained scene collection with typed handles.
//!
//! Names exist for build-time lookup and diagnostics; per-frame animation
//! goes through `NodeHandle`s acquired once at spawn, never through
//! repeated string lookup.

use fnv::FnvHashMap;
use glam::{Mat4, Quat, Vec3};
use rand::Rng;

use crate::constants::{
    OBJECT_SPACING, PARTICLE_SCATTER, RING_SCATTER, RING_X_BIAS, SECTION_COUNT,
};

#[derive(thiserror::Error, Debug)]
pub enum SceneError {
    #[error("no node named `{0}` in the scene")]
    UnknownName(String),
}

/// Stable handle to a node, valid for the lifetime of the scene.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct NodeHandle(usize);

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum NodeKind {
    Ring,
    Knot,
    Spinner,
}

/// Position, XYZ Euler rotation (radians) and scale of one node.
#[derive(Clone, Copy, Debug)]
pub struct Transform {
    pub position: Vec3,
    pub rotation: Vec3,
    pub scale: Vec3,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Vec3::ZERO,
            scale: Vec3::ONE,
        }
    }
}

impl Transform {
    pub fn at(position: Vec3) -> Self {
        Self {
            position,
            ..Self::default()
        }
    }

    pub fn matrix(&self) -> Mat4 {
        let rotation = Quat::from_euler(
            glam::EulerRot::XYZ,
            self.rotation.x,
            self.rotation.y,
            self.rotation.z,
        );
        Mat4::from_scale_rotation_translation(self.scale, rotation, self.position)
    }
}

#[derive(Clone, Debug)]
pub struct SceneNode {
    pub name: String,
    pub kind: NodeKind,
    pub transform: Transform,
}

/// Flat node store plus a name table filled at spawn time.
#[derive(Default)]
pub struct Scene {
    nodes: Vec<SceneNode>,
    by_name: FnvHashMap<String, usize>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn spawn(&mut self, name: impl Into<String>, kind: NodeKind, transform: Transform) -> NodeHandle {
        let name = name.into();
        let index = self.nodes.len();
        self.by_name.insert(name.clone(), index);
        self.nodes.push(SceneNode {
            name,
            kind,
            transform,
        });
        NodeHandle(index)
    }

    pub fn lookup(&self, name: &str) -> Result<NodeHandle, SceneError> {
        self.by_name
            .get(name)
            .copied()
            .map(NodeHandle)
            .ok_or_else(|| SceneError::UnknownName(name.to_owned()))
    }

    pub fn node(&self, handle: NodeHandle) -> Option<&SceneNode> {
        self.nodes.get(handle.0)
    }

    pub fn node_mut(&mut self, handle: NodeHandle) -> Option<&mut SceneNode> {
        self.nodes.get_mut(handle.0)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &SceneNode> {
        self.nodes.iter()
    }
}

/// Shared material state; the color control mutates this outside the
/// animation loop and the renderer reads it each frame.
#[derive(Clone, Copy, Debug)]
pub struct MaterialParams {
    pub color: [f32; 3],
}

impl Default for MaterialParams {
    fn default() -> Self {
        Self {
            color: crate::constants::DEFAULT_MATERIAL_COLOR,
        }
    }
}

/// Parse a `#rrggbb` color (as produced by `<input type="color">`) into
/// linear-ish [0,1] RGB. Returns `None` on anything malformed.
pub fn parse_hex_color(value: &str) -> Option<[f32; 3]> {
    let hex = value.strip_prefix('#')?;
    if hex.len() != 6 {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some([
        r as f32 / 255.0,
        g as f32 / 255.0,
        b as f32 / 255.0,
    ])
}

/// Scatter transform for ring `index` out of `count`: a small cube of
/// positions around the first section, scale growing linearly with index.
pub fn ring_transform(rng: &mut impl Rng, index: usize, count: usize) -> Transform {
    let spread = |r: f32| (r - 0.5) * RING_SCATTER;
    let position = Vec3::new(
        spread(rng.gen::<f32>()) + RING_X_BIAS,
        spread(rng.gen::<f32>()) - OBJECT_SPACING,
        spread(rng.gen::<f32>()),
    );
    let scale = index as f32 / count as f32 / 2.0;
    Transform {
        position,
        rotation: Vec3::ZERO,
        scale: Vec3::splat(scale),
    }
}

/// Static background points, spread wide in x/z and across all sections
/// in y. Not animated; drawn with the shared material color.
#[derive(Clone, Debug)]
pub struct ParticleField {
    pub positions: Vec<Vec3>,
}

impl ParticleField {
    pub fn scatter(rng: &mut impl Rng, count: usize) -> Self {
        let positions = (0..count)
            .map(|_| {
                Vec3::new(
                    (rng.gen::<f32>() - 0.5) * PARTICLE_SCATTER,
                    OBJECT_SPACING * (0.5 - rng.gen::<f32>() * SECTION_COUNT as f32),
                    (rng.gen::<f32>() - 0.5) * PARTICLE_SCATTER,
                )
            })
            .collect();
        Self { positions }
    }
}
