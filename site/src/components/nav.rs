//! Site header: brand, section links, hamburger menu, and theme toggle.

use leptos::prelude::*;

use page::nav::NavMenu;

use crate::components::theme_toggle::ThemeToggle;
use crate::util;

/// Header navigation bar.
///
/// The hamburger control and the link list share one [`NavMenu`]; its flag
/// drives both the control's `aria-expanded` and the list's `show` class,
/// so the two can never disagree. Activating a link scrolls to its section
/// and collapses the menu again.
#[component]
pub fn SiteNav() -> impl IntoView {
    let menu = RwSignal::new(NavMenu::new());

    let jump = move |ev: leptos::ev::MouseEvent, href: &'static str| {
        if util::scroll::scroll_to_fragment(href) {
            ev.prevent_default();
        }
        menu.update(|m| m.close_for_navigation());
    };

    let on_brand = move |ev: leptos::ev::MouseEvent| {
        if util::scroll::scroll_to_fragment("#home") {
            ev.prevent_default();
        }
    };

    view! {
        <header class="site-nav">
            <a href="#home" class="site-nav__brand" on:click=on_brand>
                "Greenkite"
            </a>

            <nav class="site-nav__links" aria-label="Main">
                <ul
                    id="primary-nav"
                    class="site-nav__list"
                    class:show=move || menu.get().is_open()
                >
                    <li>
                        <a href="#services" on:click=move |ev| jump(ev, "#services")>
                            "Services"
                        </a>
                    </li>
                    <li>
                        <a href="#about" on:click=move |ev| jump(ev, "#about")>
                            "About"
                        </a>
                    </li>
                    <li>
                        <a href="#contact" on:click=move |ev| jump(ev, "#contact")>
                            "Contact"
                        </a>
                    </li>
                </ul>
            </nav>

            <ThemeToggle/>

            <button
                class="nav-toggle"
                type="button"
                aria-controls="primary-nav"
                aria-expanded=move || menu.get().aria_expanded()
                on:click=move |_| menu.update(|m| m.toggle())
            >
                <span class="sr-only">"Open main menu"</span>
                <span class="nav-toggle__bar"></span>
                <span class="nav-toggle__bar"></span>
                <span class="nav-toggle__bar"></span>
            </button>
        </header>
    }
}
