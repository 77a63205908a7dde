#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

/// Header navigation menu state. Collapsed by default; the hamburger
/// control toggles it, and activating any link inside the menu closes it
/// again so the expanded list never covers the section just scrolled to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NavMenu {
    open: bool,
}

impl NavMenu {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the menu list is expanded (drives its `show` class).
    #[must_use]
    pub fn is_open(self) -> bool {
        self.open
    }

    /// `aria-expanded` value for the hamburger control. Always agrees with
    /// [`Self::is_open`].
    #[must_use]
    pub fn aria_expanded(self) -> &'static str {
        if self.open { "true" } else { "false" }
    }

    /// Flip the menu open or closed.
    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    /// Close the menu after a link inside it is activated. No-op when
    /// already closed.
    pub fn close_for_navigation(&mut self) {
        self.open = false;
    }
}
