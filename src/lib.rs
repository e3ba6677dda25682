//! # page-interactions
//!
//! WASM behaviors for a single portfolio page: persisted light/dark theme,
//! scroll reveal, gallery filter, mobile nav drawer, section opacity,
//! scroll-linked highlighting, skill bars and a scroll-to-top control.
//!
//! The page's markup and CSS are owned elsewhere. This crate binds to them
//! and writes classes and inline styles back.
//!
//! `state` is DOM-free and builds everywhere. `dom` and `controller` need a
//! browser and are compiled only with the `hydrate` feature.

pub mod config;
pub mod error;
pub mod state;

#[cfg(feature = "hydrate")]
pub mod controller;
#[cfg(feature = "hydrate")]
pub mod dom;

#[cfg(feature = "hydrate")]
use std::cell::RefCell;

#[cfg(feature = "hydrate")]
thread_local! {
    static CONTROLLER: RefCell<Option<controller::PageController>> = const { RefCell::new(None) };
}

#[cfg(feature = "hydrate")]
fn mount() {
    let raw = dom::document()
        .ok()
        .and_then(|doc| doc.get_element_by_id(config::CONFIG_ELEMENT_ID))
        .and_then(|el| el.text_content());
    let cfg = config::PageConfig::from_json_or_default(raw.as_deref());

    match controller::PageController::mount(&cfg) {
        Ok(page) => CONTROLLER.with(|slot| *slot.borrow_mut() = Some(page)),
        Err(e) => log::error!("page controller failed to mount: {e}"),
    }
}

/// WASM entry point. Binds immediately when the document is parsed,
/// otherwise on `DOMContentLoaded`.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let level = if cfg!(debug_assertions) { log::Level::Debug } else { log::Level::Info };
    let _ = console_log::init_with_level(level);

    let Ok(document) = dom::document() else {
        log::error!("no document; page interactions disabled");
        return;
    };
    if document.ready_state() == "loading" {
        gloo_events::EventListener::once(&document, "DOMContentLoaded", |_| mount()).forget();
    } else {
        mount();
    }
}
