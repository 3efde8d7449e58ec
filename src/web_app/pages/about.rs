// web_app/pages/about.rs - Studio story

use leptos::prelude::*;

const STUDIO_IMAGE: &str = "https://images.unsplash.com/photo-1519710164239-da123dc03ef4?q=80&w=1400&auto=format&fit=crop";
const HANDS_IMAGE: &str = "https://images.unsplash.com/photo-1526318472351-c75fcf070305?q=80&w=1400&auto=format&fit=crop";

#[component]
pub fn AboutPage() -> impl IntoView {
    view! {
        <section class="max-w-5xl mx-auto px-4 py-16">
            <h2 class="font-heading text-4xl">"Our Story"</h2>
            <p class="mt-6 text-[#555] leading-relaxed">
                "Urban Wheel Pottery began with a simple rhythm: clay, water, and the turning wheel. \
                 We craft in small batches using natural materials, focusing on calm forms and earthy \
                 textures. Our process embraces sustainability, from sourcing regional clays to mindful \
                 firing and plastic-free packaging."
            </p>
            <div class="mt-10 grid md:grid-cols-2 gap-6">
                <img class="rounded-2xl ring-1 ring-[var(--beige)]" src=STUDIO_IMAGE alt="Studio" />
                <img class="rounded-2xl ring-1 ring-[var(--beige)]" src=HANDS_IMAGE alt="Hands shaping clay" />
            </div>
        </section>
    }
}
