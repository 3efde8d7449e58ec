// web_app/components/product.rs - Product display components
//
// - ProductCard: grid card that opens the detail page with the handoff
// - ProductGrid: grid layout with the empty state
// - ProductDetail: full detail view with the add-to-cart control
// - ProductUnavailable: fallback when no product was handed over

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos::wasm_bindgen::JsValue;
use leptos::web_sys::MouseEvent;
use leptos_router::hooks::use_navigate;
use leptos_router::location::State;
use leptos_router::NavigateOptions;

use super::common::{PriceDisplay, PrimaryButton};
use crate::web_app::api::HttpApi;
use crate::web_app::cart::{self, CartStatus, MAX_QUANTITY, MIN_QUANTITY};
use crate::web_app::handoff::{self, UNAVAILABLE_MESSAGE};
use crate::web_app::model::Product;

pub const EMPTY_LISTING_MESSAGE: &str = "No pieces match these filters.";

/// Product card for the shop grid
///
/// Following the link pushes `/product/{slug}` with the product attached
/// as history state.
#[component]
pub fn ProductCard(
    /// The product to display
    product: Product,
) -> impl IntoView {
    let navigate = use_navigate();
    let href = handoff::product_href(&product);
    let state = handoff::encode_state(&product).ok();
    let target = href.clone();

    let on_click = move |ev: MouseEvent| {
        // Without a payload the plain link still works; the detail page
        // then shows its fallback.
        let Some(state) = state.clone() else { return };
        if opens_elsewhere(ev.button(), ev.ctrl_key(), ev.meta_key(), ev.shift_key(), ev.alt_key()) {
            return;
        }
        ev.prevent_default();
        navigate(
            &target,
            NavigateOptions {
                state: State::new(Some(JsValue::from_str(&state))),
                ..Default::default()
            },
        );
    };

    view! {
        <a href=href on:click=on_click class="group block">
            <div class="aspect-[4/5] rounded-2xl overflow-hidden ring-1 ring-[var(--beige)] bg-[var(--offwhite)]">
                <img
                    src=product.image.clone()
                    alt=product.name.clone()
                    class="w-full h-full object-cover group-hover:scale-105 transition-transform duration-500"
                />
            </div>
            <div class="mt-3 flex items-center justify-between">
                <div>
                    <div class="font-medium">{product.name.clone()}</div>
                    <div class="text-xs text-[#777]">{product.product_type.to_string()}</div>
                </div>
                <PriceDisplay price=product.price_display() />
            </div>
        </a>
    }
}

/// Modified or non-primary clicks are left to the browser (new tab, new
/// window, download), the same as the router does for plain links.
fn opens_elsewhere(button: i16, ctrl: bool, meta: bool, shift: bool, alt: bool) -> bool {
    button != 0 || ctrl || meta || shift || alt
}

/// Grid of ProductCards with the shared empty/failed state
#[component]
pub fn ProductGrid(
    /// Products in backend order
    products: Signal<Vec<Product>>,
) -> impl IntoView {
    view! {
        <Show
            when=move || !products.with(Vec::is_empty)
            fallback=|| view! {
                <div class="text-center py-20 text-[#777]">{EMPTY_LISTING_MESSAGE}</div>
            }
        >
            <div class="grid sm:grid-cols-2 md:grid-cols-3 gap-6">
                <For
                    each=move || products.get()
                    key=|p| p.name.clone()
                    children=move |product| view! { <ProductCard product=product /> }
                />
            </div>
        </Show>
    }
}

/// Product detail view
#[component]
pub fn ProductDetail(
    /// The handed-over product
    product: Product,
) -> impl IntoView {
    view! {
        <div class="mt-6 grid md:grid-cols-2 gap-8 items-start">
            <div class="aspect-[4/5] rounded-3xl overflow-hidden ring-1 ring-[var(--beige)] bg-[var(--offwhite)]">
                <img src=product.image.clone() alt=product.name.clone() class="w-full h-full object-cover" />
            </div>
            <div>
                <h1 class="font-heading text-3xl">{product.name.clone()}</h1>
                <div class="mt-2 text-[#777]">{product.product_type.to_string()}</div>
                <PriceDisplay price=product.price_display() highlight=true />
                <p class="mt-6 text-[#555]">{product.description.clone()}</p>
                <AddToCart product=product />
            </div>
        </div>
    }
}

/// Fallback for a detail page opened without a handoff
#[component]
pub fn ProductUnavailable() -> impl IntoView {
    view! {
        <div class="py-20 text-center text-[#777]">
            <p>{UNAVAILABLE_MESSAGE}</p>
            <a href="/shop" class="mt-4 inline-block underline underline-offset-4">"Browse the collection"</a>
        </div>
    }
}

/// History-based back button; returns to the previous view without a refetch
#[component]
pub fn BackButton() -> impl IntoView {
    view! {
        <button class="text-sm text-[#666] hover:text-[#2b2b2b]" on:click=move |_| go_back()>
            "← Back"
        </button>
    }
}

fn go_back() {
    match window().history() {
        Ok(history) => {
            if let Err(e) = history.back() {
                tracing::warn!("history.back() failed: {:?}", e);
            }
        }
        Err(e) => tracing::warn!("no history object: {:?}", e),
    }
}

/// Quantity input plus "Add to Cart" button and its status line
#[component]
pub fn AddToCart(product: Product) -> impl IntoView {
    let api = use_context::<HttpApi>().unwrap_or_default();
    let quantity = RwSignal::new(MIN_QUANTITY);
    let status = RwSignal::new(CartStatus::Idle);

    let on_add = Callback::new(move |()| {
        let api = api.clone();
        let product = product.clone();
        let qty = quantity.get_untracked();
        status.set(CartStatus::Adding);

        spawn_local(async move {
            let next = cart::add_to_cart(&api, &product, qty).await;
            status.try_set(next);
        });
    });

    view! {
        <div class="mt-8 flex items-center gap-3">
            <input
                type="number"
                min=MIN_QUANTITY.to_string()
                max=MAX_QUANTITY.to_string()
                class="w-20 border rounded-lg px-3 py-2 bg-white"
                prop:value=move || quantity.get().to_string()
                on:input=move |ev| quantity.set(cart::parse_quantity(&event_target_value(&ev)))
            />
            <PrimaryButton
                on_click=on_add
                disabled=Signal::derive(move || status.get() == CartStatus::Adding)
            >
                "Add to Cart"
            </PrimaryButton>
            <span class="text-sm text-[#777]">{move || status.get().message()}</span>
        </div>
    }
}
