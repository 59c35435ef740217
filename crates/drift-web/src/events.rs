//! Host event wiring. Handlers only write snapshots through the sampler's
//! setters; all motion derived from them happens in the frame loop.

use drift_core::{parse_hex_color, InputSampler, MaterialParams};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::constants::COLOR_INPUT_ID;
use crate::dom;

pub fn wire_scroll(window: &web::Window, input: Rc<RefCell<InputSampler>>) {
    let win = window.clone();
    let closure = Closure::wrap(Box::new(move || {
        input.borrow_mut().set_scroll(dom::scroll_offset(&win));
    }) as Box<dyn FnMut()>);
    let _ = window.add_event_listener_with_callback("scroll", closure.as_ref().unchecked_ref());
    closure.forget();
}

pub fn wire_pointer_move(window: &web::Window, input: Rc<RefCell<InputSampler>>) {
    let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        input
            .borrow_mut()
            .set_pointer(ev.client_x() as f32, ev.client_y() as f32);
    }) as Box<dyn FnMut(_)>);
    let _ =
        window.add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
    closure.forget();
}

pub fn wire_resize(
    window: &web::Window,
    input: Rc<RefCell<InputSampler>>,
    canvas: &web::HtmlCanvasElement,
) {
    let win = window.clone();
    let canvas_resize = canvas.clone();
    let closure = Closure::wrap(Box::new(move || {
        let (width, height) = dom::viewport_size(&win);
        input.borrow_mut().set_viewport(width, height);
        dom::sync_canvas_backing_size(&canvas_resize);
    }) as Box<dyn FnMut()>);
    let _ = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
    closure.forget();
}

/// The page's single tunable: a color input re-tinting the shared
/// material. Missing element just means no control on this page.
pub fn wire_color_input(document: &web::Document, material: Rc<RefCell<MaterialParams>>) {
    let Some(el) = document.get_element_by_id(COLOR_INPUT_ID) else {
        log::info!("no #{COLOR_INPUT_ID} element, material color stays fixed");
        return;
    };
    let Ok(picker) = el.dyn_into::<web::HtmlInputElement>() else {
        log::warn!("#{COLOR_INPUT_ID} is not an <input>, ignoring");
        return;
    };
    let picker_read = picker.clone();
    let closure = Closure::wrap(Box::new(move |_: web::Event| {
        let value = picker_read.value();
        match parse_hex_color(&value) {
            Some(color) => material.borrow_mut().color = color,
            None => log::warn!("ignoring malformed color value {value:?}"),
        }
    }) as Box<dyn FnMut(_)>);
    let _ = picker.add_event_listener_with_callback("input", closure.as_ref().unchecked_ref());
    closure.forget();
}
