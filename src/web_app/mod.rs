// web_app/mod.rs - Root module for the Leptos storefront
//
// Architecture:
// - model/: Wire types shared with the backend (Product, FilterState, ...)
// - api/: HTTP client and the canonical filter query builder
// - listing, handoff, cart, contact: view controllers, free of any UI code
// - config, error: backend URL resolution and the error taxonomy
// - components/: Reusable UI components (both SSR and hydrate)
// - pages/: Page-level components (both SSR and hydrate)
// - app.rs: Root application component with routing (both SSR and hydrate)

pub mod model;
pub mod api;
pub mod config;
pub mod error;

pub mod listing;
pub mod handoff;
pub mod cart;
pub mod contact;

// Components, pages, and app are used by both server and client
#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub mod components;

#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub mod pages;

#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub mod app;

// Re-export main app component for convenience
#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub use app::App;
