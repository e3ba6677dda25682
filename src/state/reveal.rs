//! Scroll-triggered reveal of `.reveal` elements.
//!
//! An element becomes active the first time its top edge is above
//! `viewport_height - offset`. Activation is permanent.

#[cfg(test)]
#[path = "reveal_test.rs"]
mod reveal_test;

pub const DEFAULT_REVEAL_OFFSET_PX: f64 = 80.0;

pub fn in_reveal_zone(rect_top: f64, viewport_height: f64, offset: f64) -> bool {
    rect_top < viewport_height - offset
}

/// Activation flags for a fixed set of revealable elements.
#[derive(Clone, Debug, Default)]
pub struct RevealState {
    revealed: Vec<bool>,
    offset: f64,
}

impl RevealState {
    pub fn new(len: usize, offset: f64) -> Self {
        Self { revealed: vec![false; len], offset }
    }

    pub fn len(&self) -> usize {
        self.revealed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.revealed.is_empty()
    }

    pub fn is_revealed(&self, index: usize) -> bool {
        self.revealed.get(index).copied().unwrap_or(false)
    }

    pub fn all_revealed(&self) -> bool {
        self.revealed.iter().all(|r| *r)
    }

    /// Apply one measurement pass and return the indices that became active
    /// in this pass. `tops` is indexed like the element set; extra entries
    /// are ignored.
    pub fn update(&mut self, tops: &[f64], viewport_height: f64) -> Vec<usize> {
        let mut newly = Vec::new();
        for (index, (flag, top)) in self.revealed.iter_mut().zip(tops).enumerate() {
            if !*flag && in_reveal_zone(*top, viewport_height, self.offset) {
                *flag = true;
                newly.push(index);
            }
        }
        newly
    }
}
