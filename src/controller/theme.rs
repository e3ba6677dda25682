//! Theme toggle wiring.

use std::cell::Cell;
use std::rc::Rc;

use gloo_events::EventListener;
use gloo_timers::callback::Timeout;
use web_sys::{Document, HtmlElement};

use crate::config::PageConfig;
use crate::dom;
use crate::dom::storage;
use crate::error::PageError;
use crate::state::theme::Theme;

const CLICKED_CLASS: &str = "clicked";

fn apply(body: &HtmlElement, toggle: &HtmlElement, dark_class: &str, theme: Theme) {
    dom::set_class(body, dark_class, theme.is_dark());
    toggle.set_text_content(Some(theme.toggle_icon()));
}

pub(super) fn bind(doc: &Document, cfg: &PageConfig, listeners: &mut Vec<EventListener>) -> Result<(), PageError> {
    let toggle = dom::require(doc, &cfg.theme_toggle)?;
    let body = doc.body().ok_or_else(|| PageError::missing("body"))?;

    let initial = Theme::from_stored(storage::load(&cfg.theme_storage_key).as_deref());
    apply(&body, &toggle, &cfg.dark_class, initial);
    log::debug!("theme restored: {}", initial.storage_value());

    let current = Rc::new(Cell::new(initial));
    let key = cfg.theme_storage_key.clone();
    let dark_class = cfg.dark_class.clone();
    let feedback_ms = cfg.click_feedback_ms;
    let target = toggle.clone();
    listeners.push(EventListener::new(&target, "click", move |_| {
        let next = current.get().toggled();
        current.set(next);
        apply(&body, &toggle, &dark_class, next);
        storage::save(&key, next.storage_value());

        dom::add_class(&toggle, CLICKED_CLASS);
        let toggle = toggle.clone();
        Timeout::new(feedback_ms, move || dom::remove_class(&toggle, CLICKED_CLASS)).forget();
    }));
    Ok(())
}
