//! DOM-free model of every page behavior.
//!
//! DESIGN
//! ======
//! Each module here turns measured geometry or a click into the classes and
//! styles the page should carry. The controller only reads the DOM, calls
//! into these types, and writes the result back, so all invariants are
//! testable without a browser.

pub mod filter;
pub mod frame_guard;
pub mod highlight;
pub mod nav_drawer;
pub mod opacity;
pub mod reveal;
pub mod scroll_top;
pub mod skills;
pub mod theme;
