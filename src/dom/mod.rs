//! Thin web-sys helpers shared by the controller.
//!
//! SYSTEM CONTEXT
//! ==============
//! Everything that touches the browser goes through here or `storage`, so
//! behavior modules read as "measure, decide, write" without JsValue noise.
//! Writes are best effort: a failed class or style write is dropped, the
//! same way a missing element disables only its own behavior.

pub mod storage;

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, Window};

use crate::error::PageError;

pub fn window() -> Result<Window, PageError> {
    web_sys::window().ok_or_else(|| PageError::Dom("no window".into()))
}

pub fn document() -> Result<Document, PageError> {
    window()?.document().ok_or_else(|| PageError::Dom("no document".into()))
}

/// First element matching `selector`, if it is an `HtmlElement`.
pub fn query(doc: &Document, selector: &str) -> Option<HtmlElement> {
    doc.query_selector(selector)
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
}

/// First element matching `selector`, or `MissingElement`.
pub fn require(doc: &Document, selector: &str) -> Result<HtmlElement, PageError> {
    query(doc, selector).ok_or_else(|| PageError::missing(selector))
}

/// All `HtmlElement`s matching `selector`, in document order. An invalid
/// selector yields an empty set.
pub fn query_all(doc: &Document, selector: &str) -> Vec<HtmlElement> {
    let Ok(list) = doc.query_selector_all(selector) else {
        log::warn!("invalid selector {selector:?}");
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
        .collect()
}

pub fn add_class(el: &Element, class: &str) {
    let _ = el.class_list().add_1(class);
}

pub fn remove_class(el: &Element, class: &str) {
    let _ = el.class_list().remove_1(class);
}

pub fn set_class(el: &Element, class: &str, on: bool) {
    let _ = el.class_list().toggle_with_force(class, on);
}

pub fn has_class(el: &Element, class: &str) -> bool {
    el.class_list().contains(class)
}

/// Class names on `el`, in attribute order.
pub fn class_names(el: &Element) -> Vec<String> {
    let list = el.class_list();
    (0..list.length()).filter_map(|i| list.item(i)).collect()
}

pub fn set_style(el: &HtmlElement, property: &str, value: &str) {
    let _ = el.style().set_property(property, value);
}

pub fn viewport_height(window: &Window) -> f64 {
    window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0)
}

pub fn scroll_y(window: &Window) -> f64 {
    window.scroll_y().unwrap_or(0.0)
}

/// Top edge relative to the viewport.
pub fn rect_top(el: &Element) -> f64 {
    el.get_bounding_client_rect().top()
}
