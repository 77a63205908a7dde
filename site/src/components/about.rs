//! About section: who the studio is.

use leptos::prelude::*;

#[component]
pub fn About() -> impl IntoView {
    view! {
        <section id="about" class="about">
            <div class="about__inner">
                <h2 class="about__title">"About Greenkite"</h2>
                <p class="about__copy">
                    "We are a small studio of designers, engineers, and builders "
                    "who think the least wasteful square meter is the one you "
                    "never have to renovate twice. Every project starts from "
                    "what already exists and earns each new material it adds."
                </p>
                <ul class="about__facts">
                    <li>
                        <strong>"120+"</strong>
                        " projects delivered"
                    </li>
                    <li>
                        <strong>"80%"</strong>
                        " average reclaimed-material share"
                    </li>
                    <li>
                        <strong>"3"</strong>
                        " cities, one workshop"
                    </li>
                </ul>
            </div>
        </section>
    }
}
