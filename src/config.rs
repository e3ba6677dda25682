//! Selectors and thresholds the controller binds against.
//!
//! Defaults describe the stock page markup. A page may override any field
//! with an inline JSON document:
//!
//! ```html
//! <script id="page-interactions-config" type="application/json">
//!   { "scroll_top_threshold_px": 600 }
//! </script>
//! ```
//!
//! Missing fields keep their defaults. A document that fails to parse or
//! validate is ignored as a whole.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;

use crate::error::PageError;
use crate::state::highlight::DEFAULT_SECTION_BIAS_PX;
use crate::state::reveal::DEFAULT_REVEAL_OFFSET_PX;
use crate::state::scroll_top::DEFAULT_SCROLL_TOP_THRESHOLD_PX;
use crate::state::skills::DEFAULT_TRIGGER_DIVISOR;

/// Element id of the inline override document.
pub const CONFIG_ELEMENT_ID: &str = "page-interactions-config";

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    pub theme_toggle: String,
    pub theme_storage_key: String,
    pub dark_class: String,
    pub click_feedback_ms: u32,

    pub reveal_selector: String,
    pub reveal_offset_px: f64,

    pub filter_button_selector: String,
    pub gallery_item_selector: String,

    pub nav_toggle: String,
    pub nav_links: String,

    pub section_selector: String,
    pub nav_link_selector: String,
    pub nav_item_selector: String,
    pub section_bias_px: f64,

    pub scroll_top_button: String,
    pub scroll_top_threshold_px: f64,

    pub process_step_selector: String,
    pub process_step_offset_px: f64,

    pub skills_section: String,
    pub skill_bar_selector: String,
    pub skills_trigger_divisor: f64,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            theme_toggle: "#theme-toggle".into(),
            theme_storage_key: "theme".into(),
            dark_class: "dark".into(),
            click_feedback_ms: 150,
            reveal_selector: ".reveal".into(),
            reveal_offset_px: DEFAULT_REVEAL_OFFSET_PX,
            filter_button_selector: ".filter-btn".into(),
            gallery_item_selector: ".gallery-item".into(),
            nav_toggle: ".nav-toggle".into(),
            nav_links: ".nav-links".into(),
            section_selector: "section".into(),
            nav_link_selector: "nav a".into(),
            nav_item_selector: ".nav-item".into(),
            section_bias_px: DEFAULT_SECTION_BIAS_PX,
            scroll_top_button: "#scrollTop".into(),
            scroll_top_threshold_px: DEFAULT_SCROLL_TOP_THRESHOLD_PX,
            process_step_selector: ".process-step".into(),
            process_step_offset_px: 120.0,
            skills_section: "#skills-tools-section".into(),
            skill_bar_selector: ".skill-progress".into(),
            skills_trigger_divisor: DEFAULT_TRIGGER_DIVISOR,
        }
    }
}

impl PageConfig {
    /// Parse and validate an override document.
    pub fn from_json(raw: &str) -> Result<Self, PageError> {
        let cfg: Self = serde_json::from_str(raw).map_err(|e| PageError::Config(e.to_string()))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Parse `raw` when present, falling back to defaults on any failure.
    pub fn from_json_or_default(raw: Option<&str>) -> Self {
        let Some(raw) = raw.map(str::trim).filter(|r| !r.is_empty()) else {
            return Self::default();
        };
        match Self::from_json(raw) {
            Ok(cfg) => {
                log::info!("page config override applied");
                cfg
            }
            Err(e) => {
                log::warn!("{e}; using defaults");
                Self::default()
            }
        }
    }

    pub fn validate(&self) -> Result<(), PageError> {
        let offsets = [
            ("reveal_offset_px", self.reveal_offset_px),
            ("section_bias_px", self.section_bias_px),
            ("scroll_top_threshold_px", self.scroll_top_threshold_px),
            ("process_step_offset_px", self.process_step_offset_px),
        ];
        for (name, value) in offsets {
            if !value.is_finite() || value < 0.0 {
                return Err(PageError::Config(format!("{name} must be a non-negative number")));
            }
        }
        if !self.skills_trigger_divisor.is_finite() || self.skills_trigger_divisor <= 0.0 {
            return Err(PageError::Config("skills_trigger_divisor must be positive".into()));
        }
        if self.theme_storage_key.is_empty() {
            return Err(PageError::Config("theme_storage_key must not be empty".into()));
        }
        Ok(())
    }
}
