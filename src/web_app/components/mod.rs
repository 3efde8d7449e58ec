// web_app/components/mod.rs - UI components module
//
// Structure:
// - common.rs: Reusable atomic components (buttons, inputs, loading)
// - layout.rs: Navbar, footer and the page wrapper
// - filters.rs: Shop filter controls
// - product.rs: Product card, grid, detail, add-to-cart
// - contact.rs: Contact form and thank-you view

pub mod common;
pub mod layout;
pub mod filters;
pub mod product;
pub mod contact;

// Re-export commonly used components for convenience
pub use common::*;
pub use layout::*;
pub use filters::*;
pub use product::*;
pub use contact::*;
