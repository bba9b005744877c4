//! Dropdown open/close state for the navigation menu.
//!
//! DESIGN
//! ======
//! At most one entry per menu root is open, so sibling triggers at the
//! same level are mutually exclusive (standard dropdown semantics). The
//! state lives only for the current render tree.

#[cfg(test)]
#[path = "menu_test.rs"]
mod menu_test;

/// Open/closed bookkeeping for one navigation-menu root.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MenuState {
    open: Option<usize>,
}

impl MenuState {
    /// Toggle the trigger at `index`: open it, closing any sibling, or
    /// close it if it was the open one.
    pub fn toggle(&mut self, index: usize) {
        self.open = if self.open == Some(index) { None } else { Some(index) };
    }

    /// Whether the content for `index` is currently shown.
    pub fn is_open(&self, index: usize) -> bool {
        self.open == Some(index)
    }

    /// Close whatever is open.
    pub fn close(&mut self) {
        self.open = None;
    }
}
