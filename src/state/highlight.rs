//! Scroll-linked "current section" highlighting.
//!
//! Two exclusive highlighters share this module: top-level nav links
//! (`current` on the link whose target section spans `scroll_y + bias`)
//! and secondary nav items (`active` on the item pointing at the last
//! section whose top, less the bias, has been scrolled past). In both, the
//! last qualifying element in document order wins.

#[cfg(test)]
#[path = "highlight_test.rs"]
mod highlight_test;

pub const DEFAULT_SECTION_BIAS_PX: f64 = 100.0;

/// Layout box of a page section in document coordinates.
#[derive(Clone, Debug, PartialEq)]
pub struct SectionSpan {
    pub id: Option<String>,
    pub offset_top: f64,
    pub offset_height: f64,
}

impl SectionSpan {
    pub fn contains(&self, y: f64) -> bool {
        self.offset_top <= y && self.offset_top + self.offset_height > y
    }
}

/// Fragment identifier of an anchor `href`, without the leading `#`.
///
/// Accepts both bare fragments (`#work`) and absolute URLs
/// (`https://host/page#work`). Empty fragments yield `None`.
pub fn fragment_of(href: &str) -> Option<&str> {
    let (_, fragment) = href.split_once('#')?;
    (!fragment.is_empty()).then_some(fragment)
}

/// Class decision for one nav link. `Skip` leaves the link untouched.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LinkMark {
    Current,
    Clear,
    Skip,
}

/// Decide the `current` class for each nav link.
///
/// `targets[i]` is the section link `i` points at, or `None` when the link
/// has no fragment or its section is missing.
pub fn mark_nav_links(targets: &[Option<&SectionSpan>], scroll_y: f64, bias: f64) -> Vec<LinkMark> {
    let from_top = scroll_y + bias;
    let winner = targets
        .iter()
        .rposition(|target| target.is_some_and(|section| section.contains(from_top)));
    targets
        .iter()
        .enumerate()
        .map(|(index, target)| match (target, winner) {
            (None, _) => LinkMark::Skip,
            (Some(_), Some(w)) if w == index => LinkMark::Current,
            (Some(_), _) => LinkMark::Clear,
        })
        .collect()
}

/// Id of the last section whose `offset_top - bias` is at or above
/// `scroll_y`. When that section has no id, nothing is current.
pub fn current_section_id(sections: &[SectionSpan], scroll_y: f64, bias: f64) -> Option<&str> {
    sections
        .iter()
        .rfind(|section| scroll_y >= section.offset_top - bias)
        .and_then(|section| section.id.as_deref())
}

/// Index of the secondary nav item to mark active, if any.
///
/// An item matches when its `href` attribute is exactly `#<current>`.
pub fn active_nav_item<S: AsRef<str>>(hrefs: &[Option<S>], current: Option<&str>) -> Option<usize> {
    let current = current?;
    hrefs.iter().rposition(|href| {
        Option::as_ref(href)
            .and_then(|h| AsRef::<str>::as_ref(h).strip_prefix('#'))
            .is_some_and(|id| id == current)
    })
}
