// web_app/api/mod.rs - Backend access
//
// - query.rs: canonical query string for the product filters
// - client.rs: JSON HTTP client for /products, /cart/add and /contact

pub mod query;
pub mod client;

pub use client::{HttpApi, StorefrontApi};
pub use query::build_query;
