// web_app/components/layout.rs - Page chrome
//
// Navbar (with the mobile menu), footer, and the wrapper that puts every
// routed page between them.

use chrono::Datelike;
use leptos::prelude::*;
use leptos_router::hooks::use_location;

pub const BRAND_NAME: &str = "Urban Wheel Pottery";
pub const TAGLINE: &str = "Where earth meets elegance.";

/// Links shown in the navbar, in order
pub const NAV_LINKS: [(&str, &str); 3] = [("/shop", "Shop"), ("/about", "About"), ("/contact", "Contact")];

/// Links shown in the footer, in order
pub const FOOTER_LINKS: [(&str, &str); 4] = [
    ("/", "Home"),
    ("/shop", "Shop"),
    ("/about", "About"),
    ("/contact", "Contact"),
];

/// Navbar, routed content, footer
#[component]
pub fn Layout(children: Children) -> impl IntoView {
    view! {
        <div class="min-h-screen flex flex-col bg-[var(--offwhite)] text-[#2b2b2b]">
            <Navbar />
            <main class="flex-1">{children()}</main>
            <Footer />
        </div>
    }
}

#[component]
pub fn Navbar() -> impl IntoView {
    let open = RwSignal::new(false);
    let close = Callback::new(move |()| open.set(false));

    view! {
        <header class="sticky top-0 z-40 backdrop-blur bg-[var(--offwhite)]/80 border-b border-[var(--beige)]">
            <div class="max-w-6xl mx-auto px-4 py-4 flex items-center justify-between">
                <a href="/" class="group">
                    <div class="text-2xl tracking-wide font-semibold">
                        <span class="font-heading">"Urban Wheel"</span>
                        <span class="font-heading text-[var(--terracotta)]">" Pottery"</span>
                    </div>
                    <div class="text-xs text-[#6b6b6b]">{TAGLINE}</div>
                </a>
                <nav class="hidden md:flex items-center gap-8">
                    {NAV_LINKS.into_iter().map(|(to, label)| view! {
                        <NavLink to=to label=label />
                    }).collect_view()}
                    <a
                        href="/shop"
                        class="inline-flex items-center gap-2 bg-gradient-to-b from-[var(--terracotta)] to-[var(--clay)] \
                               text-white px-4 py-2 rounded-full shadow-sm hover:shadow-md transition-shadow"
                    >
                        "Shop Now"
                    </a>
                </nav>
                <button
                    class="md:hidden p-2 rounded-lg border border-[var(--beige)]"
                    aria-label="Menu"
                    on:click=move |_| open.update(|o| *o = !*o)
                >
                    "☰"
                </button>
            </div>
            <Show when=move || open.get()>
                <div class="md:hidden border-t border-[var(--beige)]">
                    <div class="px-4 py-3 flex flex-col gap-3">
                        {NAV_LINKS.into_iter().map(|(to, label)| view! {
                            <NavLink to=to label=label on_follow=close />
                        }).collect_view()}
                    </div>
                </div>
            </Show>
        </header>
    }
}

/// Navbar link, highlighted when it matches the current path
#[component]
pub fn NavLink(
    to: &'static str,
    label: &'static str,
    /// Called when the link is followed (closes the mobile menu)
    #[prop(optional)]
    on_follow: Option<Callback<()>>,
) -> impl IntoView {
    let location = use_location();
    let is_active = move || location.pathname.get() == to;

    view! {
        <a
            href=to
            class=move || nav_link_class(is_active())
            on:click=move |_| {
                if let Some(handler) = on_follow {
                    handler.run(());
                }
            }
        >
            {label}
        </a>
    }
}

pub fn nav_link_class(active: bool) -> &'static str {
    if active {
        "text-sm tracking-wide hover:text-[var(--terracotta)] transition-colors text-[var(--terracotta)]"
    } else {
        "text-sm tracking-wide hover:text-[var(--terracotta)] transition-colors text-[#3a3a3a]"
    }
}

#[component]
pub fn Footer() -> impl IntoView {
    let year = chrono::Utc::now().year();
    let (left, right) = FOOTER_LINKS.split_at(2);

    let column = |links: &[(&'static str, &'static str)]| {
        let links = links.to_vec();
        view! {
            <div class="space-y-2">
                {links.into_iter().map(|(to, label)| view! {
                    <a href=to class="block hover:text-[var(--terracotta)] transition-colors">{label}</a>
                }).collect_view()}
            </div>
        }
    };

    view! {
        <footer class="border-t border-[var(--beige)] bg-white/70">
            <div class="max-w-6xl mx-auto px-4 py-10 grid md:grid-cols-3 gap-6 text-sm">
                <div>
                    <div class="font-heading font-semibold">{BRAND_NAME}</div>
                    <div class="text-[#666] mt-1">"Handmade in small batches."</div>
                </div>
                <div class="flex gap-6">
                    {column(left)}
                    {column(right)}
                </div>
                <div class="md:text-right text-[#888]">{copyright(year)}</div>
            </div>
        </footer>
    }
}

pub fn copyright(year: i32) -> String {
    format!("© {} {}", year, BRAND_NAME)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_active_link_is_terracotta() {
        assert!(nav_link_class(true).ends_with("text-[var(--terracotta)]"));
        assert!(nav_link_class(false).ends_with("text-[#3a3a3a]"));
    }

    #[test]
    fn test_copyright_line() {
        assert_eq!(copyright(2026), "© 2026 Urban Wheel Pottery");
    }

    #[test]
    fn test_footer_links_cover_every_page() {
        let paths: Vec<_> = FOOTER_LINKS.iter().map(|(to, _)| *to).collect();
        assert_eq!(paths, ["/", "/shop", "/about", "/contact"]);
    }
}
