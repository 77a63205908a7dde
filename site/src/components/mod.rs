//! Page section and control components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the page's markup and bind interaction state from the
//! `page` crate to it; browser side effects go through [`crate::util`].

pub mod about;
pub mod contact;
pub mod footer;
pub mod hero;
pub mod nav;
pub mod services;
pub mod theme_toggle;
