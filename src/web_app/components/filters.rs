// web_app/components/filters.rs - Shop filter controls
//
// Type dropdown and min/max price inputs. Every change lands in the
// page's signals immediately; the page derives the query from them.

use leptos::prelude::*;

use crate::web_app::model::ProductType;

/// Type select plus price range inputs
#[component]
pub fn FilterBar(
    /// Selected type, `None` for "All types"
    product_type: RwSignal<Option<ProductType>>,
    /// Raw minimum price text
    min_price: RwSignal<String>,
    /// Raw maximum price text
    max_price: RwSignal<String>,
    /// Reset all filters
    on_clear: Callback<()>,
) -> impl IntoView {
    let has_filters = move || {
        product_type.get().is_some() || !min_price.get().is_empty() || !max_price.get().is_empty()
    };

    view! {
        <div class="flex items-center gap-3 flex-wrap">
            <select
                class="border rounded-lg px-3 py-2 bg-white"
                on:change=move |ev| {
                    product_type.set(ProductType::from_select(&event_target_value(&ev)));
                }
            >
                <option value="" selected=move || product_type.get().is_none()>"All types"</option>
                {ProductType::ALL.into_iter().map(|t| view! {
                    <option value=t.as_str() selected=move || product_type.get() == Some(t)>
                        {t.plural_label()}
                    </option>
                }).collect_view()}
            </select>
            <PriceInput value=min_price placeholder="Min" />
            <PriceInput value=max_price placeholder="Max" />
            <Show when=has_filters>
                <button
                    class="text-sm text-[#666] underline underline-offset-4 hover:text-[#2b2b2b]"
                    on:click=move |_| on_clear.run(())
                >
                    "Clear"
                </button>
            </Show>
        </div>
    }
}

/// Number input holding the raw text the visitor typed
#[component]
fn PriceInput(value: RwSignal<String>, placeholder: &'static str) -> impl IntoView {
    view! {
        <input
            type="number"
            placeholder=placeholder
            class="w-24 border rounded-lg px-3 py-2 bg-white"
            prop:value=move || value.get()
            on:input=move |ev| value.set(event_target_value(&ev))
        />
    }
}
