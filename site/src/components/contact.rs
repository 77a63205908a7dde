//! Contact section: the form with its simulated-send flow.

use leptos::prelude::*;

use page::form::ContactFlow;

/// Contact form bound to a [`ContactFlow`] machine.
///
/// The machine decides validation, status text, and the button's state;
/// this component only feeds it input and, on an accepted submit, runs the
/// simulated delay before completing with the issued token. A stale token
/// (superseded by a quicker resubmit) completes into a no-op.
#[component]
pub fn ContactSection() -> impl IntoView {
    let flow = RwSignal::new(ContactFlow::new());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let started = flow.try_update(|f| f.submit()).flatten();
        if let Some(token) = started {
            #[cfg(feature = "hydrate")]
            leptos::task::spawn_local(async move {
                gloo_timers::future::sleep(std::time::Duration::from_millis(
                    page::form::SEND_DELAY_MS,
                ))
                .await;
                flow.update(|f| {
                    f.complete(token);
                });
            });
            #[cfg(not(feature = "hydrate"))]
            let _ = token;
        }
    };

    view! {
        <section id="contact" class="contact">
            <h2 class="contact__title">"Start a project"</h2>
            <p class="contact__lead">
                "Tell us what you are planning and we will get back within two "
                "working days."
            </p>

            <form id="contact-form" class="contact__form" novalidate=true on:submit=on_submit>
                <div class="contact__field">
                    <label for="contact-name">"Name"</label>
                    <input
                        id="contact-name"
                        name="name"
                        type="text"
                        autocomplete="name"
                        placeholder="Your name"
                        prop:value=move || flow.get().draft.name
                        on:input=move |ev| {
                            flow.update(|f| f.draft.name = event_target_value(&ev));
                        }
                    />
                </div>

                <div class="contact__field">
                    <label for="contact-email">"Email"</label>
                    <input
                        id="contact-email"
                        name="email"
                        type="email"
                        autocomplete="email"
                        placeholder="you@example.com"
                        prop:value=move || flow.get().draft.email
                        on:input=move |ev| {
                            flow.update(|f| f.draft.email = event_target_value(&ev));
                        }
                    />
                </div>

                <div class="contact__field">
                    <label for="contact-message">"Message"</label>
                    <textarea
                        id="contact-message"
                        name="message"
                        rows="6"
                        placeholder="What are you planning?"
                        prop:value=move || flow.get().draft.message
                        on:input=move |ev| {
                            flow.update(|f| f.draft.message = event_target_value(&ev));
                        }
                    ></textarea>
                </div>

                <button
                    class="btn btn--primary contact__send"
                    type="submit"
                    disabled=move || flow.get().button_disabled()
                >
                    {move || flow.get().button_label()}
                </button>

                <p id="form-status" class="contact__status" aria-live="polite">
                    {move || flow.get().status().to_owned()}
                </p>
            </form>
        </section>
    }
}
