//! # site
//!
//! Leptos + WASM frontend for the Greenkite marketing site. Replaces the
//! hand-written JavaScript interactivity layer with a Rust-native UI.
//!
//! This crate contains the page components and the browser-effect helpers
//! in [`util`]. All interaction state and decisions live in the `page`
//! crate; everything here either renders that state or carries it across
//! the DOM boundary. Browser access is gated behind the `hydrate` feature,
//! so the default (native) build compiles without a browser and is what
//! `cargo test` exercises.

pub mod app;
pub mod components;
pub mod util;

#[cfg(feature = "hydrate")]
use wasm_bindgen::prelude::wasm_bindgen;

/// Wasm entry point: set up panics and logging, then mount the app.
#[cfg(feature = "hydrate")]
#[wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::logging::log!("mounting greenkite site");
    leptos::mount::mount_to_body(crate::app::App);
}
