//! Default page-content renderer: one `#panel-<id>` element per section.

use crate::constants::HIDDEN_CLASS;
use crate::visibility::panel_states;
use backdrop_core::Section;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Show the panel for `section` and hide the rest. `Home` has no panel, so
/// arriving there hides them all.
pub fn show_panel(document: &web::Document, section: Section) {
    for (id, visible) in panel_states(section) {
        let Some(el) = document.get_element_by_id(&id) else {
            continue;
        };
        if visible {
            show(&el);
        } else {
            hide(&el);
        }
    }
}

// Only `display` is touched so the page's own inline styles survive.
#[inline]
fn show(el: &web::Element) {
    _ = el.class_list().remove_1(HIDDEN_CLASS);
    if let Some(el) = el.dyn_ref::<web::HtmlElement>() {
        _ = el.style().remove_property("display");
    }
}

#[inline]
fn hide(el: &web::Element) {
    _ = el.class_list().add_1(HIDDEN_CLASS);
    if let Some(el) = el.dyn_ref::<web::HtmlElement>() {
        _ = el.style().set_property("display", "none");
    }
}
