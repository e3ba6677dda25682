//! Skill progress bars.
//!
//! Bars fill to their configured percentage once the skills section's top
//! edge passes `viewport_height / divisor`. The trigger latches; bars are
//! never shrunk on scroll-up.

#[cfg(test)]
#[path = "skills_test.rs"]
mod skills_test;

pub const DEFAULT_TRIGGER_DIVISOR: f64 = 1.2;

pub fn section_in_trigger_zone(rect_top: f64, viewport_height: f64, divisor: f64) -> bool {
    rect_top < viewport_height / divisor
}

/// Parse a bar's `data-value` into a CSS width. Non-numeric values are
/// rejected.
pub fn bar_width(data_value: &str) -> Option<String> {
    let trimmed = data_value.trim().trim_end_matches('%');
    let value = trimmed.parse::<f64>().ok()?;
    if !value.is_finite() || value < 0.0 {
        return None;
    }
    Some(format!("{trimmed}%"))
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SkillBars {
    triggered: bool,
    divisor: f64,
}

impl Default for SkillBars {
    fn default() -> Self {
        Self::new(DEFAULT_TRIGGER_DIVISOR)
    }
}

impl SkillBars {
    pub fn new(divisor: f64) -> Self {
        Self { triggered: false, divisor }
    }

    pub fn is_triggered(self) -> bool {
        self.triggered
    }

    /// Feed one measurement. Returns `true` only on the pass that fires the
    /// trigger, which is when the bars need their widths written.
    pub fn update(&mut self, rect_top: f64, viewport_height: f64) -> bool {
        if self.triggered {
            return false;
        }
        self.triggered = section_in_trigger_zone(rect_top, viewport_height, self.divisor);
        self.triggered
    }
}
