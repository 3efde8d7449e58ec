// web_app/handoff.rs - Listing -> detail navigation handoff
//
// The selected product travels as history state on the one navigation that
// opens its detail page. The slug in the URL is cosmetic. A refresh,
// bookmark or shared link arrives without state and gets the fallback view.

use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde::{Deserialize, Serialize};

use crate::web_app::error::StorefrontError;
use crate::web_app::model::Product;

pub const DETAIL_ROUTE_PREFIX: &str = "/product/";

pub const UNAVAILABLE_MESSAGE: &str = "Product details unavailable. Please go back to the shop.";

/// Characters `encodeURIComponent` leaves alone
const SLUG: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// URL-safe slug for a product name
pub fn slug(name: &str) -> String {
    utf8_percent_encode(name, SLUG).to_string()
}

/// Detail route for a product, e.g. `/product/Speckled%20Mug`
pub fn product_href(product: &Product) -> String {
    format!("{}{}", DETAIL_ROUTE_PREFIX, slug(&product.name))
}

/// Whether `product` is the one the detail route `route_slug` points at.
///
/// The router may hand over the param encoded or decoded; both match.
pub fn matches_route(product: &Product, route_slug: &str) -> bool {
    if slug(&product.name) == route_slug {
        return true;
    }
    percent_decode_str(route_slug)
        .decode_utf8()
        .map(|decoded| decoded == product.name)
        .unwrap_or(false)
}

/// History state payload; the wrapper key keeps unrelated state from
/// being mistaken for a product.
#[derive(Serialize, Deserialize)]
struct Handoff {
    product: Product,
}

/// Serialize `product` for attaching to the navigation.
pub fn encode_state(product: &Product) -> Result<String, serde_json::Error> {
    serde_json::to_string(&Handoff {
        product: product.clone(),
    })
}

/// Recover the handed-off product from raw history state.
pub fn decode_state(state: Option<&str>) -> Result<Product, StorefrontError> {
    let raw = state.ok_or(StorefrontError::MissingHandoff)?;
    serde_json::from_str::<Handoff>(raw)
        .map(|h| h.product)
        .map_err(|e| {
            tracing::debug!("ignoring unreadable navigation state: {}", e);
            StorefrontError::MissingHandoff
        })
}

/// The two shapes of the product detail page
#[derive(Clone, Debug, PartialEq)]
pub enum DetailView {
    HasProduct(Product),
    NoProduct,
}

impl DetailView {
    pub fn from_state(state: Option<&str>) -> Self {
        match decode_state(state) {
            Ok(product) => DetailView::HasProduct(product),
            Err(_) => DetailView::NoProduct,
        }
    }

    /// First handed-over product that belongs to `route_slug`.
    ///
    /// History state left over from another product's page never matches,
    /// so back/forward can't show one product under another's URL.
    pub fn for_route<'a>(states: impl IntoIterator<Item = &'a str>, route_slug: &str) -> Self {
        states
            .into_iter()
            .filter_map(|raw| decode_state(Some(raw)).ok())
            .find(|product| matches_route(product, route_slug))
            .map(DetailView::HasProduct)
            .unwrap_or(DetailView::NoProduct)
    }

    pub fn product(&self) -> Option<&Product> {
        match self {
            DetailView::HasProduct(product) => Some(product),
            DetailView::NoProduct => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slug_matches_encode_uri_component() {
        assert_eq!(slug("Speckled Mug"), "Speckled%20Mug");
        assert_eq!(slug("Tom's (big) bowl!"), "Tom's%20(big)%20bowl!");
        assert_eq!(slug("Café/Plate"), "Caf%C3%A9%2FPlate");
    }

    #[test]
    fn test_no_state_is_no_product() {
        assert_eq!(DetailView::from_state(None), DetailView::NoProduct);
    }

    #[test]
    fn test_foreign_state_is_no_product() {
        assert_eq!(DetailView::from_state(Some("{\"scroll\":120}")), DetailView::NoProduct);
        assert_eq!(DetailView::from_state(Some("not json")), DetailView::NoProduct);
    }

    fn state_for(name: &str) -> String {
        let product = Product {
            id: None,
            name: name.to_string(),
            product_type: crate::web_app::model::ProductType::Mug,
            price: rust_decimal::Decimal::new(2400, 2),
            image: "/mug.jpg".to_string(),
            description: String::new(),
        };
        encode_state(&product).unwrap()
    }

    #[test]
    fn test_state_for_other_slug_is_no_product() {
        let other = state_for("Speckled Mug");
        assert_eq!(DetailView::for_route([other.as_str()], "Ash%20Bowl"), DetailView::NoProduct);
    }

    #[test]
    fn test_route_slug_matches_encoded_or_decoded() {
        let state = state_for("Speckled Mug");
        for route in ["Speckled%20Mug", "Speckled Mug"] {
            let view = DetailView::for_route([state.as_str()], route);
            assert_eq!(view.product().map(|p| p.name.as_str()), Some("Speckled Mug"), "route {:?}", route);
        }
    }

    #[test]
    fn test_first_matching_state_wins() {
        let stale = state_for("Ash Bowl");
        let fresh = state_for("Speckled Mug");
        let view = DetailView::for_route([stale.as_str(), "junk", fresh.as_str()], "Speckled%20Mug");
        assert_eq!(view.product().map(|p| p.name.as_str()), Some("Speckled Mug"));
    }

    #[test]
    fn test_missing_state_error_kind() {
        assert!(matches!(decode_state(None), Err(StorefrontError::MissingHandoff)));
    }
}
