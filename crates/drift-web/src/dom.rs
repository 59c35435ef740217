use web_sys as web;

use crate::constants::MAX_DEVICE_PIXEL_RATIO;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// Current vertical scroll offset of the document, in CSS pixels.
#[inline]
pub fn scroll_offset(window: &web::Window) -> f32 {
    window.scroll_y().unwrap_or(0.0) as f32
}

/// Viewport size in CSS pixels, falling back to 1x1 if the host reports
/// nothing usable.
pub fn viewport_size(window: &web::Window) -> (f32, f32) {
    let width = window
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(1.0);
    let height = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(1.0);
    (width as f32, height as f32)
}

/// Keep the canvas backing store at CSS size * devicePixelRatio (capped).
pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement) {
    if let Some(w) = web::window() {
        let dpr = w.device_pixel_ratio().min(MAX_DEVICE_PIXEL_RATIO);
        let rect = canvas.get_bounding_client_rect();
        let w_px = (rect.width() * dpr) as u32;
        let h_px = (rect.height() * dpr) as u32;
        canvas.set_width(w_px.max(1));
        canvas.set_height(h_px.max(1));
    }
}
