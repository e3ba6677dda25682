//! Mobile navigation drawer wiring.

use std::cell::Cell;
use std::rc::Rc;

use gloo_events::EventListener;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement, Node};

use crate::config::PageConfig;
use crate::dom;
use crate::error::PageError;
use crate::state::nav_drawer::{ClickOrigin, NavDrawer};

const DRAWER_OPEN_CLASS: &str = "active";
const TOGGLE_OPEN_CLASS: &str = "open";

struct Drawer {
    toggle: HtmlElement,
    links: HtmlElement,
    anchors: Vec<HtmlElement>,
    state: Cell<NavDrawer>,
}

impl Drawer {
    fn render(&self) {
        let state = self.state.get();
        dom::set_class(&self.links, DRAWER_OPEN_CLASS, state.is_open());
        dom::set_class(&self.toggle, TOGGLE_OPEN_CLASS, state.is_open());
        let _ = self.toggle.set_attribute("aria-expanded", state.aria_expanded());
    }

    fn on_click(&self, origin: ClickOrigin) {
        let mut state = self.state.get();
        state.on_click(origin);
        self.state.set(state);
        self.render();
    }

    fn origin_of(&self, target: Option<&Node>) -> ClickOrigin {
        if self.anchors.iter().any(|anchor| anchor.contains(target)) {
            ClickOrigin::DrawerLink
        } else if self.links.contains(target) {
            ClickOrigin::InsideDrawer
        } else if self.toggle.contains(target) {
            ClickOrigin::Toggle
        } else {
            ClickOrigin::Outside
        }
    }
}

pub(super) fn bind(doc: &Document, cfg: &PageConfig, listeners: &mut Vec<EventListener>) -> Result<(), PageError> {
    let toggle = dom::require(doc, &cfg.nav_toggle)?;
    let links = dom::require(doc, &cfg.nav_links)?;
    let anchors = dom::query_all(doc, &format!("{} a", cfg.nav_links));

    let drawer = Rc::new(Drawer { toggle, links, anchors, state: Cell::new(NavDrawer::default()) });
    drawer.render();

    // One document-level listener classifies every click, so toggle, link
    // and outside clicks all go through `NavDrawer::on_click`.
    listeners.push(EventListener::new(doc, "click", move |event| {
        let target = event.target().and_then(|t| t.dyn_into::<Node>().ok());
        drawer.on_click(drawer.origin_of(target.as_ref()));
    }));
    Ok(())
}
