//! Contact form.

use leptos::{ev::SubmitEvent, prelude::*, task};
use scoop::contact::{CONFIRMATION_DISPLAY, ContactForm, ContactOutcome, submit_contact};

use crate::{SharedController, dom};

fn confirmation_delay_ms() -> i32 {
    i32::try_from(CONFIRMATION_DISPLAY.as_millis()).unwrap_or(i32::MAX)
}

#[component]
pub(crate) fn ContactSection(controller: SharedController) -> impl IntoView {
    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let message = RwSignal::new(String::new());
    let confirmation = RwSignal::new((0_u64, None::<String>));

    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();

        let form = ContactForm::new()
            .with_field("name", name.get_untracked())
            .with_field("email", email.get_untracked())
            .with_field("message", message.get_untracked());

        let controller = controller.get_value();

        task::spawn_local(async move {
            match submit_contact(controller.api(), form).await {
                ContactOutcome::Sent { message: text } => {
                    name.set(String::new());
                    email.set(String::new());
                    message.set(String::new());

                    let shown = confirmation.with_untracked(|(id, _)| id.saturating_add(1));
                    confirmation.set((shown, Some(text)));

                    dom::wait_for_timeout(confirmation_delay_ms()).await;

                    // Only clear the banner this submission put up.
                    confirmation.update(|(id, banner)| {
                        if *id == shown {
                            *banner = None;
                        }
                    });
                }
                ContactOutcome::Failed { message: text } => dom::alert(&text),
            }
        });
    };

    view! {
        <section id="contact" class="contact-section">
            <h2 class="section-title">"Get in Touch"</h2>
            <form class="contact-form reveal" on:submit=on_submit>
                <label class="form-label" for="contact-name">"Name"</label>
                <input
                    id="contact-name"
                    class="form-control"
                    type="text"
                    name="name"
                    required
                    prop:value=move || name.get()
                    on:input=move |event| name.set(event_target_value(&event))
                />
                <label class="form-label" for="contact-email">"Email"</label>
                <input
                    id="contact-email"
                    class="form-control"
                    type="email"
                    name="email"
                    required
                    prop:value=move || email.get()
                    on:input=move |event| email.set(event_target_value(&event))
                />
                <label class="form-label" for="contact-message">"Message"</label>
                <textarea
                    id="contact-message"
                    class="form-control"
                    name="message"
                    rows="4"
                    required
                    prop:value=move || message.get()
                    on:input=move |event| message.set(event_target_value(&event))
                ></textarea>
                <button type="submit" class="btn btn-primary">"Send Message"</button>
                {move || {
                    confirmation
                        .get()
                        .1
                        .map(|text| {
                            view! {
                                <div class="alert alert-success mt-3" role="status">
                                    {text}
                                </div>
                            }
                        })
                }}
            </form>
        </section>
    }
}
