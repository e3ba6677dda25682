//! Per-section opacity derived from scroll position.

#[cfg(test)]
#[path = "opacity_test.rs"]
mod opacity_test;

pub const SECTION_OPACITY_MIN: f64 = 0.1;
pub const SECTION_OPACITY_MAX: f64 = 0.3;

/// CSS custom property the page styling reads.
pub const SECTION_OPACITY_PROPERTY: &str = "--section-opacity";

/// `1 - |top| / viewport_height`, clamped to `[0.1, 0.3]`.
pub fn section_opacity(rect_top: f64, viewport_height: f64) -> f64 {
    if viewport_height <= 0.0 {
        return SECTION_OPACITY_MIN;
    }
    let visible = 1.0 - rect_top.abs() / viewport_height;
    if visible.is_nan() {
        return SECTION_OPACITY_MIN;
    }
    visible.clamp(SECTION_OPACITY_MIN, SECTION_OPACITY_MAX)
}

/// Two decimals, ties rounded away from zero (`0.125` becomes `0.13`).
pub fn format_opacity(opacity: f64) -> String {
    format!("{:.2}", (opacity * 100.0).round() / 100.0)
}
