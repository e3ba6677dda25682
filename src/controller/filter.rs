//! Gallery filter wiring.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_events::EventListener;
use web_sys::{Document, HtmlElement};

use crate::config::PageConfig;
use crate::dom;
use crate::error::PageError;
use crate::state::filter::{FILTER_ALL, FilterState};

const ACTIVE_CLASS: &str = "active";

struct Gallery {
    controls: Vec<HtmlElement>,
    items: Vec<HtmlElement>,
    state: RefCell<FilterState>,
}

impl Gallery {
    fn sync_controls(&self) {
        let state = self.state.borrow();
        for (index, control) in self.controls.iter().enumerate() {
            dom::set_class(control, ACTIVE_CLASS, state.is_active(index));
        }
    }

    fn select(&self, index: usize) {
        if self.state.borrow_mut().select(index).is_none() {
            return;
        }
        self.sync_controls();

        let classes = self.items.iter().map(|item| dom::class_names(item)).collect::<Vec<_>>();
        let shown = self.state.borrow().presentations(classes);
        for (item, presentation) in self.items.iter().zip(shown) {
            dom::set_style(item, "display", presentation.display());
            dom::set_style(item, "opacity", presentation.opacity());
            dom::set_style(item, "transform", presentation.transform());
        }
    }
}

pub(super) fn bind(doc: &Document, cfg: &PageConfig, listeners: &mut Vec<EventListener>) -> Result<(), PageError> {
    let controls = dom::query_all(doc, &cfg.filter_button_selector);
    if controls.is_empty() {
        return Err(PageError::missing(&cfg.filter_button_selector));
    }
    let categories = controls
        .iter()
        .map(|c| c.get_attribute("data-filter").unwrap_or_else(|| FILTER_ALL.to_owned()))
        .collect::<Vec<_>>();
    let marked = controls.iter().position(|c| dom::has_class(c, ACTIVE_CLASS));

    let gallery = Rc::new(Gallery {
        items: dom::query_all(doc, &cfg.gallery_item_selector),
        state: RefCell::new(FilterState::new(categories, marked)),
        controls,
    });
    gallery.sync_controls();

    for (index, control) in gallery.controls.iter().enumerate() {
        let gallery = Rc::clone(&gallery);
        listeners.push(EventListener::new(control, "click", move |_| gallery.select(index)));
    }
    log::debug!("filter: {} controls, {} items", gallery.controls.len(), gallery.items.len());
    Ok(())
}
