// lib.rs - Root module for the urban_wheel storefront
//
// The library is shared by the SSR host binary and the WASM bundle.
// The hydrate entry point below is what the generated JS calls on load.

/// The storefront web application (models, controllers, components, pages)
pub mod web_app;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    leptos::mount::hydrate_body(web_app::App);
    web_app::pages::product::hydration_finished();
}
