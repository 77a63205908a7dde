//! Browser-effect helpers shared across components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns from component
//! logic. Each is gated on the `hydrate` feature and degrades to an inert
//! native form, so the default build needs no browser to compile or test.

pub mod focus;
pub mod scroll;
pub mod theme;
pub mod year;
