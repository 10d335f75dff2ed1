#![cfg(target_arch = "wasm32")]
use crate::constants::CANVAS_ELEMENT_ID;
use crate::frame::{FrameLoop, SharedCallbacks, SharedCanvas};
use crate::surface::CanvasSurface;
use anyhow::{anyhow, Context};
use backdrop_core::{BackdropConfig, BackgroundCanvas, NavigationOutcome};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

mod config;
mod constants;
mod dom;
mod events;
mod frame;
mod panels;
mod schedule;
mod surface;
mod visibility;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("backdrop-web loaded");
    Ok(())
}

/// Handle to one animated backdrop bound to a `<canvas>`.
#[wasm_bindgen]
pub struct Backdrop {
    canvas: SharedCanvas,
    callbacks: SharedCallbacks,
    frame_loop: Option<FrameLoop>,
    listeners: Vec<events::Listener>,
}

#[wasm_bindgen]
impl Backdrop {
    /// Bind to the canvas with `canvas_id` (default `backdrop-canvas`) and
    /// start animating. Fails if the element is missing or has no 2D context.
    pub fn create(canvas_id: Option<String>) -> Result<Backdrop, JsValue> {
        let id = canvas_id.unwrap_or_else(|| CANVAS_ELEMENT_ID.to_string());
        init(&id).map_err(|e| {
            log::error!("[backdrop] init error: {:#}", e);
            JsValue::from_str(&format!("{:#}", e))
        })
    }

    /// Request navigation to `id`. Resolves `true` when a transition started,
    /// `false` when already there or another transition is running.
    pub fn request_section_change(&self, id: &str) -> Result<bool, JsValue> {
        let mut canvas = self
            .canvas
            .try_borrow_mut()
            .map_err(|_| JsValue::from_str("backdrop is busy"))?;
        match canvas.request_section_change(id, instant::now()) {
            Ok(NavigationOutcome::Started { .. }) => Ok(true),
            Ok(_) => Ok(false),
            Err(e) => Err(JsValue::from_str(&e.to_string())),
        }
    }

    /// Register a callback invoked with the section id on every completed
    /// transition.
    pub fn on_section_change(&self, callback: js_sys::Function) {
        self.callbacks.borrow_mut().push(callback);
    }

    pub fn current_section(&self) -> String {
        self.canvas
            .try_borrow()
            .map(|c| c.current_section().id().to_string())
            .unwrap_or_default()
    }

    pub fn is_navigating(&self) -> bool {
        self.canvas
            .try_borrow()
            .map(|c| c.is_navigating())
            .unwrap_or(false)
    }

    pub fn is_running(&self) -> bool {
        self.frame_loop.as_ref().is_some_and(FrameLoop::is_running)
    }

    pub fn start(&self) {
        if let Some(l) = &self.frame_loop {
            l.start();
        }
    }

    pub fn stop(&self) {
        if let Some(l) = &self.frame_loop {
            l.stop();
        }
    }

    /// Stop the loop, drop any transition in flight and detach every
    /// listener. The handle is inert after.
    pub fn destroy(&mut self) {
        self.frame_loop.take();
        if let Ok(mut canvas) = self.canvas.try_borrow_mut() {
            if canvas.cancel_navigation() {
                log::info!("[backdrop] transition cancelled");
            }
        }
        self.listeners.clear();
        self.callbacks.borrow_mut().clear();
        log::info!("[backdrop] destroyed");
    }
}

fn init(canvas_id: &str) -> anyhow::Result<Backdrop> {
    let document = dom::window_document().ok_or_else(|| anyhow!("no window document"))?;
    let element: web::HtmlCanvasElement = document
        .get_element_by_id(canvas_id)
        .ok_or_else(|| anyhow!("missing #{}", canvas_id))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|_| anyhow!("#{} is not a <canvas>", canvas_id))?;

    let overrides = dom::read_overrides(&element);
    let mut config = BackdropConfig::default();
    config::apply_overrides(&mut config, &overrides);

    let surface = CanvasSurface::new(element.clone())?;
    let mut core = BackgroundCanvas::new(surface, config::graph_for(&overrides), config)
        .context("building backdrop")?;
    core.on_section_change(|section| {
        if let Some(doc) = dom::window_document() {
            panels::show_panel(&doc, section);
        }
    });
    panels::show_panel(&document, core.current_section());

    let canvas: SharedCanvas = Rc::new(RefCell::new(core));
    let callbacks: SharedCallbacks = Rc::new(RefCell::new(Vec::new()));

    let mut listeners = events::wire_canvas_pointer(&element, &canvas);
    listeners.extend(events::wire_resize(&canvas));
    listeners.extend(events::wire_section_buttons(&document, &canvas));
    log::info!("[backdrop] bound #{} with {} listeners", canvas_id, listeners.len());

    let frame_loop = FrameLoop::new(canvas.clone(), callbacks.clone());
    frame_loop.start();

    Ok(Backdrop {
        canvas,
        callbacks,
        frame_loop: Some(frame_loop),
        listeners,
    })
}
