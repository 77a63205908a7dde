//! Window-level keydown listener feeding the focus-outline latch.

#[cfg(test)]
#[path = "focus_test.rs"]
mod focus_test;

use leptos::prelude::*;

use page::focus::FocusOutlines;

/// Attach the first-Tab keydown listener to the window.
///
/// The latch turns every event after the first Tab into a no-op, so the
/// listener simply stays attached for the page's lifetime. Native builds
/// leave the latch untouched.
pub fn install(outlines: RwSignal<FocusOutlines>) {
    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::{JsCast, closure::Closure};

        let Some(window) = web_sys::window() else {
            return;
        };
        let handler = Closure::wrap(Box::new(move |ev: web_sys::KeyboardEvent| {
            outlines.update(|latch| {
                latch.key_pressed(&ev.key());
            });
        }) as Box<dyn FnMut(web_sys::KeyboardEvent)>);
        let _ = window.add_event_listener_with_callback("keydown", handler.as_ref().unchecked_ref());
        handler.forget();
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = outlines;
    }
}
