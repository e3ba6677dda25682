//! Scroll dispatcher and the scroll-driven behaviors.
//!
//! One passive `scroll` listener feeds every behavior below. Runs are
//! coalesced to one per animation frame through `FrameGuard`; a run reads
//! viewport height, scroll offset and element geometry once and hands the
//! numbers to reveal, section opacity, both nav highlighters, process steps,
//! skill bars and the scroll-to-top control.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use gloo_events::EventListener;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Document, HtmlElement, ScrollBehavior, ScrollToOptions, Window};

use crate::config::PageConfig;
use crate::dom;
use crate::error::PageError;
use crate::state::frame_guard::FrameGuard;
use crate::state::highlight::{LinkMark, SectionSpan, active_nav_item, current_section_id, fragment_of, mark_nav_links};
use crate::state::opacity::{SECTION_OPACITY_PROPERTY, format_opacity, section_opacity};
use crate::state::reveal::RevealState;
use crate::state::scroll_top;
use crate::state::skills::{SkillBars, bar_width};

const ACTIVE_CLASS: &str = "active";
const CURRENT_CLASS: &str = "current";

struct NavLink {
    link: HtmlElement,
    target: Option<HtmlElement>,
}

struct SkillsBlock {
    section: HtmlElement,
    bars: Vec<HtmlElement>,
    state: Cell<SkillBars>,
}

struct ScrollView {
    window: Window,
    guard: FrameGuard,
    section_bias: f64,
    scroll_top_threshold: f64,

    reveals: Vec<HtmlElement>,
    reveal: RefCell<RevealState>,
    sections: Vec<HtmlElement>,
    nav_links: Vec<NavLink>,
    nav_items: Vec<HtmlElement>,
    nav_item_hrefs: Vec<Option<String>>,
    process_steps: Vec<HtmlElement>,
    process: RefCell<RevealState>,
    skills: Option<SkillsBlock>,
    scroll_top: Option<HtmlElement>,
}

fn span_of(el: &HtmlElement) -> SectionSpan {
    let id = el.id();
    SectionSpan {
        id: (!id.is_empty()).then_some(id),
        offset_top: f64::from(el.offset_top()),
        offset_height: f64::from(el.offset_height()),
    }
}

impl ScrollView {
    fn run(&self) {
        let viewport_height = dom::viewport_height(&self.window);
        let scroll_y = dom::scroll_y(&self.window);
        let spans = self.sections.iter().map(span_of).collect::<Vec<_>>();

        self.reveal(viewport_height);
        self.section_opacity(viewport_height);
        self.highlight_nav_links(scroll_y);
        self.highlight_nav_items(&spans, scroll_y);
        self.process_steps(viewport_height);
        self.skill_bars(viewport_height);
        self.scroll_top_visibility(scroll_y);
    }

    fn reveal(&self, viewport_height: f64) {
        let tops = self.reveals.iter().map(|el| dom::rect_top(el)).collect::<Vec<_>>();
        for index in self.reveal.borrow_mut().update(&tops, viewport_height) {
            dom::add_class(&self.reveals[index], ACTIVE_CLASS);
        }
    }

    fn section_opacity(&self, viewport_height: f64) {
        for section in &self.sections {
            let opacity = section_opacity(dom::rect_top(section), viewport_height);
            dom::set_style(section, SECTION_OPACITY_PROPERTY, &format_opacity(opacity));
        }
    }

    fn highlight_nav_links(&self, scroll_y: f64) {
        let spans = self
            .nav_links
            .iter()
            .map(|nav| nav.target.as_ref().map(span_of))
            .collect::<Vec<_>>();
        let targets = spans.iter().map(Option::as_ref).collect::<Vec<_>>();
        for (nav, mark) in self.nav_links.iter().zip(mark_nav_links(&targets, scroll_y, self.section_bias)) {
            match mark {
                LinkMark::Current => dom::add_class(&nav.link, CURRENT_CLASS),
                LinkMark::Clear => dom::remove_class(&nav.link, CURRENT_CLASS),
                LinkMark::Skip => {}
            }
        }
    }

    fn highlight_nav_items(&self, spans: &[SectionSpan], scroll_y: f64) {
        let current = current_section_id(spans, scroll_y, self.section_bias);
        let active = active_nav_item(&self.nav_item_hrefs, current);
        for (index, item) in self.nav_items.iter().enumerate() {
            dom::set_class(item, ACTIVE_CLASS, active == Some(index));
        }
    }

    fn process_steps(&self, viewport_height: f64) {
        let tops = self.process_steps.iter().map(|el| dom::rect_top(el)).collect::<Vec<_>>();
        for index in self.process.borrow_mut().update(&tops, viewport_height) {
            dom::add_class(&self.process_steps[index], ACTIVE_CLASS);
        }
    }

    fn skill_bars(&self, viewport_height: f64) {
        let Some(skills) = &self.skills else {
            return;
        };
        let mut state = skills.state.get();
        let fire = state.update(dom::rect_top(&skills.section), viewport_height);
        skills.state.set(state);
        if !fire {
            return;
        }
        for bar in &skills.bars {
            match bar.get_attribute("data-value").as_deref().and_then(bar_width) {
                Some(width) => dom::set_style(bar, "width", &width),
                None => log::debug!("skill bar without usable data-value skipped"),
            }
        }
    }

    fn scroll_top_visibility(&self, scroll_y: f64) {
        if let Some(button) = &self.scroll_top {
            let visible = scroll_top::is_visible(scroll_y, self.scroll_top_threshold);
            dom::set_style(button, "display", scroll_top::display(visible));
        }
    }
}

/// Queue a run on the next animation frame unless one is already queued.
fn schedule(view: &Rc<ScrollView>) {
    if !view.guard.try_schedule() {
        return;
    }
    let for_frame = Rc::clone(view);
    let cb = Closure::once_into_js(move || {
        for_frame.run();
        for_frame.guard.finish();
    });
    if view.window.request_animation_frame(cb.unchecked_ref()).is_err() {
        view.run();
        view.guard.finish();
    }
}

fn resolve_nav_links(doc: &Document, selector: &str) -> Vec<NavLink> {
    dom::query_all(doc, selector)
        .into_iter()
        .map(|link| {
            let target = link
                .get_attribute("href")
                .as_deref()
                .and_then(fragment_of)
                .and_then(|id| doc.get_element_by_id(id))
                .and_then(|el| el.dyn_into::<HtmlElement>().ok());
            NavLink { link, target }
        })
        .collect()
}

fn resolve_skills(doc: &Document, cfg: &PageConfig) -> Option<SkillsBlock> {
    let Some(section) = dom::query(doc, &cfg.skills_section) else {
        log::debug!("skills section {} not found", cfg.skills_section);
        return None;
    };
    Some(SkillsBlock {
        section,
        bars: dom::query_all(doc, &cfg.skill_bar_selector),
        state: Cell::new(SkillBars::new(cfg.skills_trigger_divisor)),
    })
}

pub(super) fn bind(
    window: &Window,
    doc: &Document,
    cfg: &PageConfig,
    listeners: &mut Vec<EventListener>,
) -> Result<(), PageError> {
    let reveals = dom::query_all(doc, &cfg.reveal_selector);
    let process_steps = dom::query_all(doc, &cfg.process_step_selector);
    let nav_items = dom::query_all(doc, &cfg.nav_item_selector);
    let nav_item_hrefs = nav_items.iter().map(|item| item.get_attribute("href")).collect();

    let scroll_top = dom::query(doc, &cfg.scroll_top_button);
    if scroll_top.is_none() {
        log::debug!("scroll-to-top control {} not found", cfg.scroll_top_button);
    }

    let view = Rc::new(ScrollView {
        window: window.clone(),
        guard: FrameGuard::new(),
        section_bias: cfg.section_bias_px,
        scroll_top_threshold: cfg.scroll_top_threshold_px,
        reveal: RefCell::new(RevealState::new(reveals.len(), cfg.reveal_offset_px)),
        reveals,
        sections: dom::query_all(doc, &cfg.section_selector),
        nav_links: resolve_nav_links(doc, &cfg.nav_link_selector),
        nav_items,
        nav_item_hrefs,
        process: RefCell::new(RevealState::new(process_steps.len(), cfg.process_step_offset_px)),
        process_steps,
        skills: resolve_skills(doc, cfg),
        scroll_top,
    });

    // Above-the-fold content and mid-page reloads.
    view.run();

    let for_scroll = Rc::clone(&view);
    listeners.push(EventListener::new(window, "scroll", move |_| schedule(&for_scroll)));

    if let Some(button) = &view.scroll_top {
        let window = window.clone();
        listeners.push(EventListener::new(button, "click", move |_| {
            let options = ScrollToOptions::new();
            options.set_top(0.0);
            options.set_behavior(ScrollBehavior::Smooth);
            window.scroll_to_with_scroll_to_options(&options);
        }));
    }

    log::debug!(
        "scroll: {} reveals, {} sections, {} nav links, {} process steps",
        view.reveals.len(),
        view.sections.len(),
        view.nav_links.len(),
        view.process_steps.len()
    );
    Ok(())
}
