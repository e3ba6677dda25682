//! Scroll-to-top control visibility.

#[cfg(test)]
#[path = "scroll_top_test.rs"]
mod scroll_top_test;

pub const DEFAULT_SCROLL_TOP_THRESHOLD_PX: f64 = 400.0;

pub fn is_visible(scroll_y: f64, threshold: f64) -> bool {
    scroll_y > threshold
}

pub fn display(visible: bool) -> &'static str {
    if visible { "block" } else { "none" }
}
