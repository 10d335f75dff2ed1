use crate::constants::{DEFAULT_CURSOR, HOVER_CURSOR};
use crate::dom;
use crate::frame::SharedCanvas;
use backdrop_core::NavigationOutcome;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// An attached DOM listener. Dropping it detaches the callback.
pub struct Listener {
    target: web::EventTarget,
    event: &'static str,
    closure: Closure<dyn FnMut(web::Event)>,
}

impl Listener {
    pub fn attach(
        target: &web::EventTarget,
        event: &'static str,
        handler: impl FnMut(web::Event) + 'static,
    ) -> Option<Self> {
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web::Event)>);
        if let Err(e) =
            target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
        {
            log::warn!("[events] could not listen for {}: {:?}", event, e);
            return None;
        }
        Some(Self {
            target: target.clone(),
            event,
            closure,
        })
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.closure.as_ref().unchecked_ref());
    }
}

/// Keep the canvas backing store and the field in step with the window size.
pub fn wire_resize(canvas: &SharedCanvas) -> Option<Listener> {
    let window = web::window()?;
    let canvas = canvas.clone();
    Listener::attach(&window, "resize", move |_| {
        let Ok(mut c) = canvas.try_borrow_mut() else {
            return;
        };
        let size = c.surface_mut().sync_size();
        if size == c.viewport() {
            return;
        }
        if let Err(e) = c.resize(size.x, size.y) {
            log::warn!("[events] resize to {:.0}x{:.0} skipped: {}", size.x, size.y, e);
        }
    })
}

/// Hover highlighting and click-to-navigate on the section nodes.
pub fn wire_canvas_pointer(
    element: &web::HtmlCanvasElement,
    canvas: &SharedCanvas,
) -> Vec<Listener> {
    let mut listeners = Vec::new();

    let hover_canvas = canvas.clone();
    let hover_element = element.clone();
    listeners.extend(Listener::attach(element, "pointermove", move |ev| {
        let Some(ev) = ev.dyn_ref::<web::MouseEvent>() else {
            return;
        };
        let Ok(mut c) = hover_canvas.try_borrow_mut() else {
            return;
        };
        let hit = c.hit_test(dom::pointer_canvas_px(ev, &hover_element));
        if hit != c.hovered() {
            c.set_hovered(hit);
            let cursor = if hit.is_some() { HOVER_CURSOR } else { DEFAULT_CURSOR };
            dom::set_cursor(&hover_element, cursor);
        }
    }));

    let leave_canvas = canvas.clone();
    let leave_element = element.clone();
    listeners.extend(Listener::attach(element, "pointerleave", move |_| {
        if let Ok(mut c) = leave_canvas.try_borrow_mut() {
            c.set_hovered(None);
        }
        dom::set_cursor(&leave_element, DEFAULT_CURSOR);
    }));

    let click_canvas = canvas.clone();
    let click_element = element.clone();
    listeners.extend(Listener::attach(element, "click", move |ev| {
        let Some(ev) = ev.dyn_ref::<web::MouseEvent>() else {
            return;
        };
        let Ok(mut c) = click_canvas.try_borrow_mut() else {
            return;
        };
        if let Some(section) = c.hit_test(dom::pointer_canvas_px(ev, &click_element)) {
            log::info!("[click] section node {}", section);
            c.request_section(section, instant::now());
        }
    }));

    listeners
}

/// Any `[data-section]` element requests its section on click.
pub fn wire_section_buttons(document: &web::Document, canvas: &SharedCanvas) -> Vec<Listener> {
    dom::section_buttons(document)
        .into_iter()
        .filter_map(|(el, id)| {
            let canvas = canvas.clone();
            Listener::attach(&el, "click", move |ev| {
                ev.prevent_default();
                let Ok(mut c) = canvas.try_borrow_mut() else {
                    return;
                };
                match c.request_section_change(&id, instant::now()) {
                    Ok(NavigationOutcome::Started { .. }) | Ok(NavigationOutcome::Busy) => {}
                    Ok(NavigationOutcome::AlreadyThere) => {
                        log::debug!("[click] already at {}", id);
                    }
                    Err(e) => log::warn!("[click] {}", e),
                }
            })
        })
        .collect()
}

