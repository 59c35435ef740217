//! Per-frame body and the requestAnimationFrame loop.

use drift_core::{
    Camera, CameraRig, FrameDriver, InputSampler, MaterialParams, ParticleField, RealClock, Scene,
    SceneAnimator, LIGHT_DIRECTION,
};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::render;

/// Everything one tick needs, owned in one place.
pub struct FrameContext {
    pub input: Rc<RefCell<InputSampler>>,
    pub material: Rc<RefCell<MaterialParams>>,
    pub scene: Scene,
    pub particles: ParticleField,
    pub animator: SceneAnimator,
    pub rig: CameraRig,
    pub camera: Camera,
    pub driver: FrameDriver<RealClock>,
    pub gpu: render::GpuState<'static>,
    pub canvas: web::HtmlCanvasElement,
}

impl FrameContext {
    /// Advance the driver, then draw. Tick ordering (camera before
    /// animation before draw) lives in the driver and is not repeated
    /// here.
    pub fn frame(&mut self) {
        let timing = {
            let input = self.input.borrow();
            self.driver.tick(
                &input,
                &mut self.rig,
                &mut self.camera,
                &mut self.scene,
                &self.animator,
            )
        };

        let material = *self.material.borrow();
        let instances = render::build_instances(&self.scene, &self.particles, &material);
        self.gpu
            .resize_if_needed(self.canvas.width(), self.canvas.height());
        if let Err(e) = self.gpu.render(&self.camera, &instances, LIGHT_DIRECTION) {
            log::error!("render error at t={:.2}s: {:?}", timing.elapsed_sec, e);
        }
    }
}

/// Cancels the loop: the next scheduled callback sees the flag and does
/// not reschedule.
pub struct LoopHandle {
    running: Rc<Cell<bool>>,
}

impl LoopHandle {
    pub fn stop(&self) {
        self.running.set(false);
    }

    pub fn is_running(&self) -> bool {
        self.running.get()
    }
}

pub async fn init_gpu(canvas: &web::HtmlCanvasElement) -> Option<render::GpuState<'static>> {
    // leak a canvas clone to satisfy 'static lifetime for the surface
    let leaked_canvas = Box::leak(Box::new(canvas.clone()));
    match render::GpuState::new(leaked_canvas).await {
        Ok(g) => Some(g),
        Err(e) => {
            log::error!("WebGPU init error: {:?}", e);
            None
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) -> LoopHandle {
    let running = Rc::new(Cell::new(true));
    let running_tick = running.clone();
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        if !running_tick.get() {
            log::info!("frame loop stopped");
            return;
        }
        frame_ctx_tick.borrow_mut().frame();
        if let Some(w) = web::window() {
            let _ = w.request_animation_frame(
                tick_clone
                    .borrow()
                    .as_ref()
                    .unwrap()
                    .as_ref()
                    .unchecked_ref(),
            );
        }
    }) as Box<dyn FnMut()>));
    if let Some(w) = web::window() {
        let _ = w.request_animation_frame(tick.borrow().as_ref().unwrap().as_ref().unchecked_ref());
    }
    LoopHandle { running }
}
