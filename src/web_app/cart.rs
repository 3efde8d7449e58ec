// web_app/cart.rs - Add-to-cart demo action
//
// Each add is an independent POST; nothing is accumulated client side.

use crate::web_app::api::StorefrontApi;
use crate::web_app::model::{CartRequest, Product};

pub const MIN_QUANTITY: u8 = 1;
pub const MAX_QUANTITY: u8 = 10;

/// Quantity from the number input.
///
/// Blank, non-numeric and out-of-range input all fall back to 1.
pub fn parse_quantity(raw: &str) -> u8 {
    raw.trim()
        .parse::<u8>()
        .ok()
        .filter(|q| (MIN_QUANTITY..=MAX_QUANTITY).contains(q))
        .unwrap_or(MIN_QUANTITY)
}

/// Status line next to the "Add to Cart" button
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CartStatus {
    #[default]
    Idle,
    Adding,
    Added,
    /// The request failed. Shown as a success-like message (demo behaviour).
    AddedLocally,
}

impl CartStatus {
    pub fn message(&self) -> &'static str {
        match self {
            CartStatus::Idle => "",
            CartStatus::Adding => "Adding…",
            CartStatus::Added => "Added to cart (demo).",
            CartStatus::AddedLocally => "Added locally (demo).",
        }
    }
}

/// Post one add-to-cart request and report the resulting status.
pub async fn add_to_cart<A: StorefrontApi>(api: &A, product: &Product, quantity: u8) -> CartStatus {
    let request = CartRequest {
        product_id: product.cart_id(),
        quantity,
    };

    match api.add_to_cart(&request).await {
        Ok(()) => {
            tracing::info!("added {} x {} to cart", quantity, product.name);
            CartStatus::Added
        }
        Err(e) => {
            tracing::warn!("cart add failed, masking as local add: {}", e);
            CartStatus::AddedLocally
        }
    }
}
