// web_app/pages/contact.rs - Contact page
//
// Field signals are created here so they outlive a failed submit.

use leptos::prelude::*;

use crate::web_app::components::*;
use crate::web_app::contact::ContactStatus;

const MAP_EMBED: &str = "https://www.google.com/maps/embed?pb=!1m18!1m12!1m3!1d3151.835434509315!2d144.9537353159047!3d-37.81627974201185!2m3!1f0!2f0!3f0!3m2!1i1024!2i768!4f13.1!3m3!1m2!1s0x0%3A0x0!2zMzfCsDQ5JzAwLjYiUyAxNDTCsDU3JzI0LjQiRQ!5e0!3m2!1sen!2s!4v1614035325923!5m2!1sen!2s";
pub const CONTACT_EMAIL: &str = "hello@urbanwheel.com";
pub const INSTAGRAM_HANDLE: &str = "@urbanwheelpottery";

#[component]
pub fn ContactPage() -> impl IntoView {
    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let message = RwSignal::new(String::new());
    let status = RwSignal::new(ContactStatus::Editing);

    view! {
        <Show
            when=move || status.with(ContactStatus::is_sent)
            fallback=move || view! {
                <section class="max-w-4xl mx-auto px-4 py-16">
                    <h2 class="font-heading text-3xl">"Get in touch"</h2>
                    <p class="text-[#666] mt-2">"We'd love to hear from you."</p>
                    <ContactForm name=name email=email message=message status=status />
                    <div class="mt-12 grid md:grid-cols-2 gap-6 items-start">
                        <iframe
                            title="Map"
                            class="w-full h-72 rounded-2xl ring-1 ring-[var(--beige)]"
                            src=MAP_EMBED
                            referrerpolicy="no-referrer-when-downgrade"
                            {..::leptos::tachys::html::attribute::custom::custom_attribute("loading", "lazy")}
                        ></iframe>
                        <div>
                            <div class="font-medium">"Follow along"</div>
                            <a
                                class="mt-2 flex items-center gap-2 text-[#444] hover:text-[var(--terracotta)]"
                                href="https://instagram.com"
                                target="_blank"
                                rel="noreferrer"
                            >
                                {INSTAGRAM_HANDLE}
                            </a>
                            <a
                                class="mt-2 flex items-center gap-2 text-[#444] hover:text-[var(--terracotta)]"
                                href=format!("mailto:{}", CONTACT_EMAIL)
                            >
                                {CONTACT_EMAIL}
                            </a>
                        </div>
                    </div>
                </section>
            }
        >
            <ContactThanks />
        </Show>
    }
}
