//! Gallery category filter.
//!
//! Exactly one filter control is active. Item visibility is derived from the
//! selected category on every change and never stored.

#[cfg(test)]
#[path = "filter_test.rs"]
mod filter_test;

/// Category sentinel that matches every gallery item.
pub const FILTER_ALL: &str = "all";

/// Whether an item tagged with `item_classes` is shown under `selected`.
pub fn item_matches<'a>(selected: &str, item_classes: impl IntoIterator<Item = &'a str>) -> bool {
    selected == FILTER_ALL || item_classes.into_iter().any(|class| class == selected)
}

/// Inline style targets for one gallery item.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ItemPresentation {
    pub visible: bool,
}

impl ItemPresentation {
    pub fn display(self) -> &'static str {
        if self.visible { "block" } else { "none" }
    }

    pub fn opacity(self) -> &'static str {
        if self.visible { "1" } else { "0" }
    }

    pub fn transform(self) -> &'static str {
        if self.visible { "scale(1)" } else { "scale(0.95)" }
    }
}

/// Which filter control is active, by document-order index.
#[derive(Clone, Debug)]
pub struct FilterState {
    categories: Vec<String>,
    active: Option<usize>,
}

impl FilterState {
    /// Build from the controls' categories in document order.
    ///
    /// `marked_active` is the first control the markup already flags as
    /// active; without one the `all` control wins, then the first control.
    pub fn new(categories: Vec<String>, marked_active: Option<usize>) -> Self {
        let active = marked_active
            .filter(|index| *index < categories.len())
            .or_else(|| categories.iter().position(|c| c == FILTER_ALL))
            .or(if categories.is_empty() { None } else { Some(0) });
        Self { categories, active }
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    pub fn active_index(&self) -> Option<usize> {
        self.active
    }

    pub fn is_active(&self, index: usize) -> bool {
        self.active == Some(index)
    }

    /// Currently selected category; `all` when there are no controls.
    pub fn selected(&self) -> &str {
        self.active
            .and_then(|index| self.categories.get(index))
            .map_or(FILTER_ALL, String::as_str)
    }

    /// Activate the control at `index`. Returns the new category, or `None`
    /// if the index names no control.
    pub fn select(&mut self, index: usize) -> Option<&str> {
        if index >= self.categories.len() {
            return None;
        }
        self.active = Some(index);
        Some(self.selected())
    }

    /// Recompute every item's presentation from scratch.
    pub fn presentations<I, C, S>(&self, items: I) -> Vec<ItemPresentation>
    where
        I: IntoIterator<Item = C>,
        C: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let selected = self.selected();
        items
            .into_iter()
            .map(|classes| {
                let classes = classes.into_iter().collect::<Vec<_>>();
                ItemPresentation { visible: item_matches(selected, classes.iter().map(|c| AsRef::<str>::as_ref(c))) }
            })
            .collect()
    }
}
