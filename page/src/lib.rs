//! Interaction engine for the Greenkite marketing site.
//!
//! Everything stateful about the page lives here as plain Rust with no
//! browser types: the persisted theme preference, the contact form's
//! validation and simulated-send lifecycle, the header menu, internal
//! anchor resolution, and the keyboard focus-outline latch. The `site`
//! crate renders these states with Leptos and performs the actual DOM and
//! storage side effects, so this crate compiles and tests natively.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`theme`] | Theme preference, its visual projection, and the [`theme::ThemeStore`] capability |
//! | [`form`] | Contact form draft, validation, and the token-gated send machine |
//! | [`nav`] | Header menu open/closed state |
//! | [`anchor`] | Fragment parsing for same-page links |
//! | [`focus`] | First-Tab latch for focus outlines |

pub mod anchor;
pub mod focus;
pub mod form;
pub mod nav;
pub mod theme;
