// web_app/pages/home.rs - Landing page

use leptos::prelude::*;

pub const HERO_IMAGE: &str = "https://images.unsplash.com/photo-1704481235083-b70ae2ffee2b?w=1600&auto=format&fit=crop&q=80";

/// Feature cards under the hero: (title, description)
pub const FEATURES: [(&str, &str); 3] = [
    ("Handcrafted", "Thrown, trimmed, and glazed by hand in small batches."),
    ("Sustainable", "Natural clays, mindful firing, and low-impact packaging."),
    ("Timeless", "Warm, minimal forms that outlast trends."),
];

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <section class="relative overflow-hidden">
            <div class="max-w-6xl mx-auto px-4 pt-16 pb-20 grid md:grid-cols-2 gap-10 items-center">
                <div>
                    <h1 class="font-heading text-5xl md:text-6xl leading-tight text-[#2b2b2b]">
                        "Where earth meets "
                        <span class="text-[var(--terracotta)]">"elegance"</span>
                    </h1>
                    <p class="mt-6 text-[#555] max-w-lg">
                        "Minimal, handcrafted ceramics designed for calm, modern spaces. \
                         Each piece is shaped by hand and fired with intention."
                    </p>
                    <div class="mt-8 flex items-center gap-4">
                        <a
                            href="/shop"
                            class="inline-flex items-center gap-2 bg-gradient-to-b from-[var(--terracotta)] to-[var(--clay)] \
                                   text-white px-6 py-3 rounded-full shadow-sm hover:shadow-md transition-all"
                        >
                            "Shop the Collection"
                        </a>
                        <a href="#story" class="text-sm underline underline-offset-4 text-[#6b6b6b] hover:text-[#2b2b2b]">
                            "Our story"
                        </a>
                    </div>
                </div>
                <div class="aspect-[4/5] rounded-3xl overflow-hidden shadow-xl ring-1 ring-[var(--beige)] bg-[var(--offwhite)]">
                    <img src=HERO_IMAGE alt="Ceramic vases" class="w-full h-full object-cover" />
                </div>
            </div>
            <div id="story" class="max-w-5xl mx-auto px-4 pb-20">
                <div class="grid md:grid-cols-3 gap-6">
                    {FEATURES.into_iter().map(|(title, desc)| view! {
                        <div class="rounded-2xl p-6 bg-white/60 ring-1 ring-[var(--beige)]">
                            <div class="font-heading text-lg text-[var(--clay)]">{title}</div>
                            <div class="text-sm text-[#565656] mt-2">{desc}</div>
                        </div>
                    }).collect_view()}
                </div>
            </div>
        </section>
    }
}
