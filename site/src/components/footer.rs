//! Page footer with the copyright line.

use leptos::prelude::*;

use crate::util;

#[component]
pub fn SiteFooter() -> impl IntoView {
    // Rendered once; the year can only change across page loads.
    let year = util::year::current_year()
        .map(|y| y.to_string())
        .unwrap_or_default();

    view! {
        <footer class="site-footer">
            <p class="site-footer__copy">
                "© " <span id="year">{year}</span> " Greenkite. All rights reserved."
            </p>
            <p class="site-footer__note">
                "Built with reclaimed electrons."
            </p>
        </footer>
    }
}
