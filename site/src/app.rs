//! Root application component with theme context and page layout.

use leptos::prelude::*;
use leptos_meta::{Stylesheet, Title, provide_meta_context};

use page::focus::FocusOutlines;
use page::theme::ThemePreference;

use crate::components::about::About;
use crate::components::contact::ContactSection;
use crate::components::footer::SiteFooter;
use crate::components::hero::Hero;
use crate::components::nav::SiteNav;
use crate::components::services::Services;
use crate::util;

/// Root application component.
///
/// Owns the theme preference signal (provided as context for the toggle),
/// adopts the persisted preference on mount, keeps the document root's
/// styling class in sync, and installs the keyboard focus-outline latch.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let theme = RwSignal::new(ThemePreference::default());
    let outlines = RwSignal::new(FocusOutlines::default());
    provide_context(theme);

    // Adopt the persisted preference once the page is up.
    Effect::new(move || {
        theme.set(util::theme::load_preference());
    });

    // The document root class tracks the preference.
    Effect::new(move || {
        util::theme::apply(theme.get());
    });

    util::focus::install(outlines);

    view! {
        <Stylesheet id="leptos" href="/pkg/site.css"/>
        <Title text="Greenkite — sustainable design & build studio"/>

        <div class="site" class:show-focus-outlines=move || outlines.get().is_shown()>
            <SiteNav/>
            <main>
                <Hero/>
                <Services/>
                <About/>
                <ContactSection/>
            </main>
            <SiteFooter/>
        </div>
    }
}
