//! Animation-frame coalescing guard.
//!
//! At most one recomputation is scheduled per frame. Scroll events that
//! arrive while one is pending are dropped, not queued.

#[cfg(test)]
#[path = "frame_guard_test.rs"]
mod frame_guard_test;

use std::cell::Cell;

#[derive(Debug, Default)]
pub struct FrameGuard {
    pending: Cell<bool>,
}

impl FrameGuard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Claim the frame. Returns `false` when a run is already scheduled.
    pub fn try_schedule(&self) -> bool {
        !self.pending.replace(true)
    }

    /// Release the frame once the scheduled run has executed (or failed to
    /// schedule).
    pub fn finish(&self) {
        self.pending.set(false);
    }

    pub fn is_pending(&self) -> bool {
        self.pending.get()
    }
}
