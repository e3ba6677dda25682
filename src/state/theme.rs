//! Light/dark theme preference.
//!
//! The preference is the only value the page persists. Anything other than
//! the stored string `dark` reads back as light.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

/// Icon shown on the toggle while dark is active (offers light mode).
pub const ICON_OFFER_LIGHT: &str = "☀";
/// Icon shown on the toggle while light is active (offers dark mode).
pub const ICON_OFFER_DARK: &str = "☾";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Decode a stored preference. Absent or unknown values are light.
    pub fn from_stored(raw: Option<&str>) -> Self {
        match raw {
            Some("dark") => Self::Dark,
            _ => Self::Light,
        }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }

    /// Value written to storage for this theme.
    pub fn storage_value(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Symbol the toggle control displays while this theme is applied.
    pub fn toggle_icon(self) -> &'static str {
        match self {
            Self::Light => ICON_OFFER_DARK,
            Self::Dark => ICON_OFFER_LIGHT,
        }
    }
}
