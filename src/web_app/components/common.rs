// web_app/components/common.rs - Reusable UI components
//
// Small, stateless pieces that receive everything via props.

use leptos::prelude::*;

/// Loading indicator with a message
#[component]
pub fn Loading(
    /// Message shown next to the spinner
    #[prop(default = "Loading…")]
    message: &'static str,
) -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center py-20 text-[#777]">
            <div class="animate-spin rounded-full h-8 w-8 border-4 border-[var(--beige)] border-t-[var(--terracotta)]"></div>
            <span class="mt-4">{message}</span>
        </div>
    }
}

/// Terracotta pill button used for the main actions
#[component]
pub fn PrimaryButton(
    children: Children,
    /// Click handler
    #[prop(optional)]
    on_click: Option<Callback<()>>,
    /// Whether the button is disabled
    #[prop(into)]
    disabled: Signal<bool>,
    /// Button type (submit, button)
    #[prop(default = "button")]
    button_type: &'static str,
    /// Additional CSS classes
    #[prop(default = "")]
    class: &'static str,
) -> impl IntoView {
    let base_class = "inline-flex items-center gap-2 bg-gradient-to-b from-[var(--terracotta)] \
                      to-[var(--clay)] text-white px-6 py-3 rounded-full shadow-sm \
                      hover:shadow-md transition-all disabled:opacity-60 disabled:cursor-not-allowed";

    view! {
        <button
            type=button_type
            disabled=move || disabled.get()
            class=format!("{} {}", base_class, class)
            on:click=move |_| {
                if let Some(handler) = on_click {
                    handler.run(());
                }
            }
        >
            {children()}
        </button>
    }
}

/// Text input bound to a string signal
#[component]
pub fn TextInput(
    /// The current value
    value: RwSignal<String>,
    #[prop(default = "")]
    placeholder: &'static str,
    /// Input type (text, email, number)
    #[prop(default = "text")]
    input_type: &'static str,
    #[prop(default = false)]
    required: bool,
    /// Additional CSS classes
    #[prop(default = "")]
    class: &'static str,
) -> impl IntoView {
    let base_class = "border rounded-lg px-4 py-3 bg-white";

    view! {
        <input
            type=input_type
            placeholder=placeholder
            required=required
            class=format!("{} {}", base_class, class)
            prop:value=move || value.get()
            on:input=move |ev| {
                value.set(event_target_value(&ev));
            }
        />
    }
}

/// Multi-line text input bound to a string signal
#[component]
pub fn TextArea(
    value: RwSignal<String>,
    #[prop(default = "")]
    placeholder: &'static str,
    #[prop(default = 5)]
    rows: u32,
    #[prop(default = false)]
    required: bool,
) -> impl IntoView {
    view! {
        <textarea
            placeholder=placeholder
            rows=rows.to_string()
            required=required
            class="border rounded-lg px-4 py-3 bg-white"
            prop:value=move || value.get()
            on:input=move |ev| {
                value.set(event_target_value(&ev));
            }
        ></textarea>
    }
}

/// Price label, e.g. `$24.00`
#[component]
pub fn PriceDisplay(
    /// Already formatted price
    price: String,
    /// Larger, bolder variant for the detail page
    #[prop(default = false)]
    highlight: bool,
) -> impl IntoView {
    let class = if highlight {
        "mt-4 font-semibold text-2xl"
    } else {
        "font-semibold"
    };

    view! { <div class=class>{price}</div> }
}

