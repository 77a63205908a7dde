//! Landing section with the primary calls to action.

use leptos::prelude::*;

use crate::util;

#[component]
pub fn Hero() -> impl IntoView {
    let jump = move |ev: leptos::ev::MouseEvent, href: &'static str| {
        if util::scroll::scroll_to_fragment(href) {
            ev.prevent_default();
        }
    };

    view! {
        <section id="home" class="hero">
            <div class="hero__inner">
                <h1 class="hero__title">"Design that treads lightly."</h1>
                <p class="hero__lead">
                    "Greenkite is a sustainable design and build studio. We plan, "
                    "design, and deliver low-impact spaces and brands for teams "
                    "that care where their footprint lands."
                </p>
                <div class="hero__actions">
                    <a
                        href="#contact"
                        class="btn btn--primary"
                        on:click=move |ev| jump(ev, "#contact")
                    >
                        "Get in touch"
                    </a>
                    <a
                        href="#services"
                        class="btn"
                        on:click=move |ev| jump(ev, "#services")
                    >
                        "See services"
                    </a>
                </div>
            </div>
        </section>
    }
}
