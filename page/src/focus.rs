#[cfg(test)]
#[path = "focus_test.rs"]
mod focus_test;

/// Latch revealing focus outlines once the visitor shows keyboard intent.
/// Pointer users never see outlines; the first Tab press turns them on
/// for the rest of the session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FocusOutlines {
    shown: bool,
}

impl FocusOutlines {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether outlines are revealed (drives the page root's
    /// `show-focus-outlines` class).
    #[must_use]
    pub fn is_shown(self) -> bool {
        self.shown
    }

    /// Feed a key press. Returns `true` only on the latching transition,
    /// so the caller can detach its listener after the first Tab.
    pub fn key_pressed(&mut self, key: &str) -> bool {
        if self.shown || key != "Tab" {
            return false;
        }
        self.shown = true;
        true
    }
}
