// web_app/app.rs - Root application component
//
// Sets up the document head, the backend client context, and the router.

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::components::*;
use leptos_router::path;

use crate::web_app::api::HttpApi;
use crate::web_app::components::Layout;
use crate::web_app::pages::*;

pub const APP_TITLE: &str = "Urban Wheel Pottery";
pub const APP_DESCRIPTION: &str = "Minimal, handcrafted ceramics: mugs, bowls, plates and vases made in small batches.";

/// Root application component
///
/// Provides:
/// - Meta tags and the stylesheet link
/// - An `HttpApi` in context for pages that talk to the backend
/// - Router with the storefront routes
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_context(HttpApi::from_env());

    view! {
        <Title text=APP_TITLE />
        <Meta name="description" content=APP_DESCRIPTION />
        <Meta name="viewport" content="width=device-width, initial-scale=1" />

        <Stylesheet id="leptos" href="/pkg/urban_wheel.css" />

        <Router>
            <Layout>
                <Routes fallback=|| view! { <NotFound /> }>
                    <Route path=path!("/") view=HomePage />
                    <Route path=path!("/shop") view=ShopPage />
                    <Route path=path!("/product/:slug") view=ProductPage />
                    <Route path=path!("/about") view=AboutPage />
                    <Route path=path!("/contact") view=ContactPage />
                </Routes>
            </Layout>
        </Router>
    }
}

/// 404 Not Found page
#[component]
fn NotFound() -> impl IntoView {
    view! {
        <section class="max-w-3xl mx-auto px-4 py-24 text-center">
            <h1 class="font-heading text-6xl text-[var(--beige)] mb-4">"404"</h1>
            <p class="text-xl text-[#666] mb-8">"Page not found"</p>
            <a
                href="/"
                class="inline-flex items-center gap-2 bg-gradient-to-b from-[var(--terracotta)] to-[var(--clay)] \
                       text-white px-6 py-3 rounded-full shadow-sm hover:shadow-md transition-all"
            >
                "Back to Home"
            </a>
        </section>
    }
}
