use crate::config::Overrides;
use crate::constants::{
    CONNECTION_DISTANCE_ATTRIBUTE, DURATION_MS_ATTRIBUTE, GRAPH_ATTRIBUTE,
    MAX_DEVICE_PIXEL_RATIO, PARTICLE_COUNT_ATTRIBUTE, SEED_ATTRIBUTE, SECTION_ATTRIBUTE,
};
use glam::Vec2;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// Match the canvas backing store to its CSS box times the device pixel
/// ratio. Returns the CSS size and the ratio actually applied.
pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement) -> (Vec2, f64) {
    let dpr = web::window()
        .map(|w| w.device_pixel_ratio())
        .filter(|r| r.is_finite() && *r > 0.0)
        .unwrap_or(1.0)
        .min(MAX_DEVICE_PIXEL_RATIO);
    let rect = canvas.get_bounding_client_rect();
    let w_px = (rect.width() * dpr) as u32;
    let h_px = (rect.height() * dpr) as u32;
    canvas.set_width(w_px.max(1));
    canvas.set_height(h_px.max(1));
    (Vec2::new(rect.width() as f32, rect.height() as f32), dpr)
}

/// Pointer position relative to the canvas, in CSS pixels.
#[inline]
pub fn pointer_canvas_px(ev: &web::MouseEvent, canvas: &web::HtmlCanvasElement) -> Vec2 {
    let rect = canvas.get_bounding_client_rect();
    Vec2::new(
        ev.client_x() as f32 - rect.left() as f32,
        ev.client_y() as f32 - rect.top() as f32,
    )
}

pub fn read_overrides(canvas: &web::Element) -> Overrides {
    Overrides {
        particle_count: canvas.get_attribute(PARTICLE_COUNT_ATTRIBUTE),
        connection_distance: canvas.get_attribute(CONNECTION_DISTANCE_ATTRIBUTE),
        duration_ms: canvas.get_attribute(DURATION_MS_ATTRIBUTE),
        seed: canvas.get_attribute(SEED_ATTRIBUTE),
        graph: canvas.get_attribute(GRAPH_ATTRIBUTE),
    }
}

/// Every element carrying a section id, paired with that id.
pub fn section_buttons(document: &web::Document) -> Vec<(web::Element, String)> {
    let selector = format!("[{}]", SECTION_ATTRIBUTE);
    let nodes = match document.query_selector_all(&selector) {
        Ok(nodes) => nodes,
        Err(e) => {
            log::warn!("[dom] could not query {}: {:?}", selector, e);
            return Vec::new();
        }
    };
    (0..nodes.length())
        .filter_map(|i| nodes.get(i))
        .filter_map(|node| node.dyn_into::<web::Element>().ok())
        .filter_map(|el| {
            let id = el.get_attribute(SECTION_ATTRIBUTE)?;
            Some((el, id))
        })
        .collect()
}

#[inline]
pub fn set_cursor(canvas: &web::HtmlCanvasElement, cursor: &str) {
    _ = canvas.style().set_property("cursor", cursor);
}
