#![cfg(target_arch = "wasm32")]
//! Browser shell: builds the scene, wires input events, and drives the
//! frame loop against a WebGPU surface.

mod constants;
mod dom;
mod events;
mod frame;
mod render;

use drift_core::{
    ring_transform, Camera, CameraRig, FrameDriver, InputSampler, MaterialParams, MotionProfile,
    NodeKind, ParticleField, RealClock, Scene, SceneAnimator, Transform, ViewportSize,
    CAMERA_FOV_DEG, CAMERA_Z, CAMERA_ZFAR, CAMERA_ZNEAR, FEATURE_X, OBJECT_SPACING,
    PARTICLE_COUNT, RING_COUNT, UNIFORM_SPIN_RATE,
};
use glam::Vec3;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

use constants::{CANVAS_ID, SCENE_SEED};

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("drift-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas_el = document
        .get_element_by_id(CANVAS_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{CANVAS_ID}"))?;
    let canvas: web::HtmlCanvasElement = canvas_el
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
    dom::sync_canvas_backing_size(&canvas);

    let (width, height) = dom::viewport_size(&window);
    let input = Rc::new(RefCell::new(InputSampler::new(ViewportSize::new(
        width, height,
    ))));
    // A reloaded page can start mid-document.
    input.borrow_mut().set_scroll(dom::scroll_offset(&window));
    let material = Rc::new(RefCell::new(MaterialParams::default()));

    let (scene, animator, particles) = build_scene();
    log::info!(
        "scene ready: {} nodes, {} particles, {} animated",
        scene.len(),
        particles.positions.len(),
        animator.len()
    );

    events::wire_scroll(&window, input.clone());
    events::wire_pointer_move(&window, input.clone());
    events::wire_resize(&window, input.clone(), &canvas);
    events::wire_color_input(&document, material.clone());

    let gpu = frame::init_gpu(&canvas)
        .await
        .ok_or_else(|| anyhow::anyhow!("WebGPU unavailable"))?;

    let camera = Camera {
        eye: Vec3::new(0.0, 0.0, CAMERA_Z),
        target: Vec3::ZERO,
        up: Vec3::Y,
        aspect: input.borrow().viewport().aspect(),
        fovy_radians: CAMERA_FOV_DEG.to_radians(),
        znear: CAMERA_ZNEAR,
        zfar: CAMERA_ZFAR,
    };

    let ctx = frame::FrameContext {
        input,
        material,
        scene,
        particles,
        animator,
        rig: CameraRig::new(),
        camera,
        driver: FrameDriver::new(RealClock::start()),
        gpu,
        canvas,
    };
    // The page never stops the loop; dropping the handle leaves it running.
    let _loop = frame::start_loop(Rc::new(RefCell::new(ctx)));
    Ok(())
}

/// Ten scattered rings, a knot, a spinner and the particle backdrop, with
/// their motion profiles bound by handle at spawn time.
fn build_scene() -> (Scene, SceneAnimator, ParticleField) {
    let mut scene = Scene::new();
    let mut animator = SceneAnimator::new();
    let mut rng = StdRng::seed_from_u64(SCENE_SEED);

    for i in 0..RING_COUNT {
        let handle = scene.spawn(
            format!("ring{i}"),
            NodeKind::Ring,
            ring_transform(&mut rng, i, RING_COUNT),
        );
        animator.bind(handle, MotionProfile::IndexedSpin { index: i });
    }

    let knot = scene.spawn(
        "knot",
        NodeKind::Knot,
        Transform::at(Vec3::new(FEATURE_X, -2.0 * OBJECT_SPACING, 0.0)),
    );
    animator.bind(knot, MotionProfile::OscillateYaw);

    let spinner = scene.spawn(
        "spinner",
        NodeKind::Spinner,
        Transform::at(Vec3::new(FEATURE_X, 0.0, 0.0)),
    );
    animator.bind(
        spinner,
        MotionProfile::UniformSpin {
            rate: UNIFORM_SPIN_RATE,
        },
    );

    let particles = ParticleField::scatter(&mut rng, PARTICLE_COUNT);
    (scene, animator, particles)
}
