// web_app/pages/mod.rs - Page components module
//
// One component per client route:
// - HomePage: `/`
// - ShopPage: `/shop`
// - ProductPage: `/product/:slug`
// - AboutPage: `/about`
// - ContactPage: `/contact`

pub mod home;
pub mod shop;
pub mod product;
pub mod about;
pub mod contact;

// Re-export page components
pub use home::HomePage;
pub use shop::ShopPage;
pub use product::ProductPage;
pub use about::AboutPage;
pub use contact::ContactPage;
