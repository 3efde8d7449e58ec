// web_app/components/contact.rs - Contact form and its thank-you state

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos::web_sys::SubmitEvent;

use super::common::{PrimaryButton, TextArea, TextInput};
use crate::web_app::api::HttpApi;
use crate::web_app::contact::{self, ContactStatus};
use crate::web_app::model::ContactMessage;

/// Contact form bound to the page's field signals
///
/// The fields live in the page, so a failed submit leaves them filled in.
#[component]
pub fn ContactForm(
    name: RwSignal<String>,
    email: RwSignal<String>,
    message: RwSignal<String>,
    status: RwSignal<ContactStatus>,
) -> impl IntoView {
    let api = use_context::<HttpApi>().unwrap_or_default();

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if status.get_untracked().is_sending() {
            return;
        }

        let form = ContactMessage {
            name: name.get_untracked(),
            email: email.get_untracked(),
            message: message.get_untracked(),
        };
        status.set(ContactStatus::Sending);

        let api = api.clone();
        spawn_local(async move {
            let next = contact::submit(&api, &form).await;
            status.try_set(next);
        });
    };

    view! {
        <form on:submit=on_submit class="mt-8 grid gap-4">
            <TextInput value=name placeholder="Your name" required=true />
            <TextInput value=email placeholder="Email" input_type="email" required=true />
            <TextArea value=message placeholder="Message" required=true />
            <PrimaryButton
                button_type="submit"
                class="justify-self-start"
                disabled=Signal::derive(move || status.get().is_sending())
            >
                "Send"
            </PrimaryButton>
            {move || status.get().error().map(|e| view! {
                <div class="text-sm text-red-600">{e.to_string()}</div>
            })}
        </form>
    }
}

/// Terminal state after a successful submit
#[component]
pub fn ContactThanks() -> impl IntoView {
    view! {
        <section class="max-w-3xl mx-auto px-4 py-16 text-center">
            <h2 class="font-heading text-3xl">"Thank you"</h2>
            <p class="mt-2 text-[#555]">"We received your message and will get back soon."</p>
            <a href="/" class="mt-6 inline-block underline underline-offset-4">"Back to Home"</a>
        </section>
    }
}
