//! Light/dark theme toggle button.

use leptos::prelude::*;

use page::theme::{Appearance, ThemePreference};

use crate::util;

/// The theme toggle control.
///
/// Glyph and `aria-pressed` are projections of the shared preference
/// signal via [`Appearance`]; the document root class follows the same
/// signal from an effect in the app root. Clicking flips the preference
/// and persists it, with a persist failure logged but never blocking the
/// switch.
#[component]
pub fn ThemeToggle() -> impl IntoView {
    let theme = expect_context::<RwSignal<ThemePreference>>();

    let looks = move || Appearance::of(theme.get());

    let on_toggle = move |_| {
        let next = theme.get_untracked().toggled();
        theme.set(next);
        util::theme::persist_preference(next);
    };

    view! {
        <button
            id="theme-toggle"
            class="theme-toggle"
            type="button"
            title="Switch color theme"
            aria-pressed=move || looks().aria_pressed
            on:click=on_toggle
        >
            {move || looks().glyph}
        </button>
    }
}
