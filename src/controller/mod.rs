//! Page Interaction Controller.
//!
//! ARCHITECTURE
//! ============
//! Constructed once at startup. Each behavior resolves its elements up front
//! and registers its own listeners; a behavior whose elements are missing
//! logs and stays unbound while the rest keep working. Scroll-driven
//! behaviors share one listener (see `scroll`), which measures geometry once
//! per animation frame and fans the numbers out.
//!
//! The controller owns every `EventListener`. Dropping it detaches them, so
//! the caller keeps it alive for the page's lifetime.

mod filter;
mod nav;
mod scroll;
mod theme;

use gloo_events::EventListener;

use crate::config::PageConfig;
use crate::dom;
use crate::error::PageError;

pub struct PageController {
    // Held only so the listeners stay attached until drop.
    _listeners: Vec<EventListener>,
}

impl PageController {
    /// Resolve elements and bind every behavior the markup supports.
    pub fn mount(config: &PageConfig) -> Result<Self, PageError> {
        let window = dom::window()?;
        let document = dom::document()?;
        let mut listeners = Vec::new();

        let bound = [
            ("theme", theme::bind(&document, config, &mut listeners)),
            ("filter", filter::bind(&document, config, &mut listeners)),
            ("nav", nav::bind(&document, config, &mut listeners)),
            ("scroll", scroll::bind(&window, &document, config, &mut listeners)),
        ];
        for (name, result) in bound {
            match result {
                Ok(()) => log::debug!("{name} behavior bound"),
                Err(PageError::MissingElement { selector }) => {
                    log::debug!("{name} behavior skipped: {selector} not found");
                }
                Err(e) => log::warn!("{name} behavior disabled: {e}"),
            }
        }

        log::info!("page controller mounted with {} listeners", listeners.len());
        Ok(Self { _listeners: listeners })
    }
}
