// web_app/pages/product.rs - Product detail page
//
// Renders whatever product the listing handed over on this navigation.
// The `:slug` route param is never looked up; it only decides which
// handed-over product belongs to this URL.

use leptos::prelude::*;
use leptos_router::hooks::{use_location, use_params_map};
use leptos_router::location::State;

use crate::web_app::components::*;
use crate::web_app::handoff::DetailView;

#[component]
pub fn ProductPage() -> impl IntoView {
    let location = use_location();
    let params = use_params_map();
    let detail = Memo::new(move |_| {
        let route_slug = params.with(|p| p.get("slug")).unwrap_or_default();
        // Back/forward only moves the URL; re-read the entry's state then
        location.pathname.track();
        let states = location.state.with(handoff_states);
        DetailView::for_route(states.iter().map(String::as_str), &route_slug)
    });

    view! {
        <section class="max-w-5xl mx-auto px-4 py-12">
            <BackButton />
            {move || match detail.get() {
                DetailView::HasProduct(product) => view! { <ProductDetail product=product /> }.into_any(),
                DetailView::NoProduct => view! { <ProductUnavailable /> }.into_any(),
            }}
        </section>
    }
}

cfg_if::cfg_if! {
    if #[cfg(feature = "hydrate")] {
        use std::sync::atomic::{AtomicBool, Ordering};

        static HYDRATED: AtomicBool = AtomicBool::new(false);

        /// Called once the server-rendered page has been hydrated.
        ///
        /// Until then the browser's history entry is ignored: a reload keeps
        /// its old state, but must render the same fallback as the server.
        pub fn hydration_finished() {
            HYDRATED.store(true, Ordering::Relaxed);
        }

        /// Candidate handoff payloads, most specific first: the current
        /// history entry (right after back/forward), then the router's state
        /// from the last `navigate`.
        fn handoff_states(state: &State) -> Vec<String> {
            let mut states = Vec::with_capacity(2);
            if HYDRATED.load(Ordering::Relaxed) {
                let entry = window()
                    .history()
                    .and_then(|history| history.state())
                    .ok()
                    .and_then(|value| value.as_string());
                states.extend(entry);
            }
            states.extend(state.to_js_value().as_string());
            states
        }
    } else {
        /// The server render never has navigation state.
        fn handoff_states(_state: &State) -> Vec<String> {
            Vec::new()
        }
    }
}
