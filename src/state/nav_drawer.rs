//! Mobile navigation drawer state.
//!
//! Two states, closed initially. The toggle flips it, a link inside the
//! drawer closes it, a click outside both drawer and toggle closes it.

#[cfg(test)]
#[path = "nav_drawer_test.rs"]
mod nav_drawer_test;

/// Where a document click landed relative to the drawer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClickOrigin {
    Toggle,
    DrawerLink,
    InsideDrawer,
    Outside,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NavDrawer {
    open: bool,
}

impl NavDrawer {
    pub fn is_open(self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    /// Document-level click. Clicks on the toggle or inside the drawer are
    /// ignored here so the same click that opened the drawer cannot close it.
    pub fn on_document_click(&mut self, origin: ClickOrigin) {
        if origin == ClickOrigin::Outside {
            self.close();
        }
    }

    /// Dispatch one click: the effect on the clicked control first, then
    /// the document-level outside-click rule.
    pub fn on_click(&mut self, origin: ClickOrigin) -> bool {
        match origin {
            ClickOrigin::Toggle => {
                self.toggle();
            }
            ClickOrigin::DrawerLink => self.close(),
            ClickOrigin::InsideDrawer | ClickOrigin::Outside => {}
        }
        self.on_document_click(origin);
        self.open
    }

    /// `aria-expanded` value for the toggle control.
    pub fn aria_expanded(self) -> &'static str {
        if self.open { "true" } else { "false" }
    }
}
