// web_app/pages/shop.rs - Shop page
//
// Owns the filter signals and the listing state. The canonical query is a
// memo over the filters, so it only changes when the encoded query does;
// each change begins exactly one fetch, and the listing state drops any
// response that no longer matches.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::web_app::api::HttpApi;
use crate::web_app::components::*;
use crate::web_app::listing::{count_label, ListingState};
use crate::web_app::model::{FilterState, Product, ProductType};

#[component]
pub fn ShopPage() -> impl IntoView {
    let api = use_context::<HttpApi>().unwrap_or_default();

    // Filter state, empty on mount
    let product_type = RwSignal::new(None::<ProductType>);
    let min_price = RwSignal::new(String::new());
    let max_price = RwSignal::new(String::new());

    let filters = Memo::new(move |_| FilterState {
        product_type: product_type.get(),
        min_price: min_price.get(),
        max_price: max_price.get(),
    });
    let query = Memo::new(move |_| filters.with(FilterState::query));

    let listing = RwSignal::new(ListingState::new());

    // Effects only run in the browser, so products are never fetched during SSR
    Effect::new(move || {
        let query = query.get();
        let Some(request) = listing.try_update(|state| state.begin_query(query)).flatten() else {
            return;
        };

        let api = api.clone();
        spawn_local(async move {
            let response = request.run(&api).await;
            listing.try_update(|state| state.settle(response));
        });
    });

    let is_loading = Signal::derive(move || listing.with(|l| l.status().is_loading()));
    let products = Signal::derive(move || listing.with(|l| l.status().products().to_vec()));

    let on_clear = Callback::new(move |()| {
        product_type.set(None);
        min_price.set(String::new());
        max_price.set(String::new());
    });

    view! {
        <section class="max-w-6xl mx-auto px-4 py-12">
            <div class="flex items-end justify-between gap-6 flex-wrap mb-8">
                <div>
                    <h2 class="font-heading text-3xl">"The Collection"</h2>
                    <p class="text-[#666]">"Minimal forms, earthy glazes."</p>
                </div>
                <FilterBar
                    product_type=product_type
                    min_price=min_price
                    max_price=max_price
                    on_clear=on_clear
                />
            </div>

            <Show
                when=move || !is_loading.get()
                fallback=|| view! { <Loading message="Loading products…" /> }
            >
                <p class="text-sm text-[#777] mb-4">
                    {move || products.with(|p: &Vec<Product>| count_label(p.len()))}
                </p>
                <ProductGrid products=products />
            </Show>
        </section>
    }
}
