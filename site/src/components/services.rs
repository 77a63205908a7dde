//! Services section: the three things the studio sells.

use leptos::prelude::*;

#[derive(Clone, Copy)]
struct Service {
    title: &'static str,
    blurb: &'static str,
}

const SERVICES: &[Service] = &[
    Service {
        title: "Sustainable spaces",
        blurb: "Interior and workplace design built around reclaimed materials, \
                natural light, and honest energy budgets.",
    },
    Service {
        title: "Brand & identity",
        blurb: "Visual identities for environmentally minded companies, from \
                naming through print standards that waste less paper.",
    },
    Service {
        title: "Build advisory",
        blurb: "Contractor selection, material sourcing, and certification \
                support so the build matches the drawings.",
    },
];

#[component]
pub fn Services() -> impl IntoView {
    view! {
        <section id="services" class="services">
            <h2 class="services__title">"What we do"</h2>
            <div class="services__grid">
                {SERVICES
                    .iter()
                    .map(|service| {
                        view! {
                            <article class="services__card">
                                <h3 class="services__card-title">{service.title}</h3>
                                <p class="services__card-blurb">{service.blurb}</p>
                            </article>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
        </section>
    }
}
