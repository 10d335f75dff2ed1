use crate::schedule::FrameSlot;
use crate::surface::CanvasSurface;
use backdrop_core::{BackgroundCanvas, Section};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

pub type SharedCanvas = Rc<RefCell<BackgroundCanvas<CanvasSurface>>>;
pub type SharedCallbacks = Rc<RefCell<Vec<js_sys::Function>>>;

type Tick = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// requestAnimationFrame loop driving one backdrop. Dropping it stops the
/// loop and releases the callback.
pub struct FrameLoop {
    tick: Tick,
    slot: Rc<FrameSlot>,
}

impl FrameLoop {
    pub fn new(canvas: SharedCanvas, callbacks: SharedCallbacks) -> Self {
        let tick: Tick = Rc::new(RefCell::new(None));
        let slot = Rc::new(FrameSlot::default());

        let tick_next = Rc::downgrade(&tick);
        let slot_tick = slot.clone();
        *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            let fired = slot_tick.current();
            run_frame(&canvas, &callbacks);
            // a callback may have stopped, or stopped and restarted, the loop
            if !slot_tick.owns(fired) {
                return;
            }
            let next = tick_next.upgrade().and_then(|t| request_frame(&t));
            slot_tick.set(next);
        }) as Box<dyn FnMut()>));

        Self { tick, slot }
    }

    pub fn start(&self) {
        if self.slot.is_scheduled() {
            return;
        }
        self.slot.set(request_frame(&self.tick));
        log::debug!("[frame] loop started");
    }

    pub fn stop(&self) {
        if let Some(id) = self.slot.take() {
            if let Some(w) = web::window() {
                _ = w.cancel_animation_frame(id);
            }
            log::debug!("[frame] loop stopped");
        }
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.slot.is_scheduled()
    }
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        self.stop();
        self.tick.borrow_mut().take();
    }
}

fn request_frame(tick: &RefCell<Option<Closure<dyn FnMut()>>>) -> Option<i32> {
    let window = web::window()?;
    let tick = tick.borrow();
    let closure = tick.as_ref()?;
    match window.request_animation_frame(closure.as_ref().unchecked_ref()) {
        Ok(id) => Some(id),
        Err(e) => {
            log::error!("[frame] requestAnimationFrame failed: {:?}", e);
            None
        }
    }
}

fn run_frame(canvas: &SharedCanvas, callbacks: &SharedCallbacks) {
    // borrow released before any JavaScript runs
    let report = match canvas.try_borrow_mut() {
        Ok(mut c) => c.frame(instant::now()),
        Err(_) => {
            log::warn!("[frame] backdrop busy, frame skipped");
            return;
        }
    };
    if let Some(section) = report.completed {
        notify(callbacks, section);
    }
}

/// Call every registered JavaScript callback with the section id.
pub fn notify(callbacks: &SharedCallbacks, section: Section) {
    let snapshot: Vec<js_sys::Function> = callbacks.borrow().clone();
    let id = JsValue::from_str(section.id());
    for f in &snapshot {
        if let Err(e) = f.call1(&JsValue::NULL, &id) {
            log::error!("[nav] section change callback threw: {:?}", e);
        }
    }
}
