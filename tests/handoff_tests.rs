// tests/handoff_tests.rs - Listing to detail page handoff

mod common;

use common::{product, product_with_id};
use urban_wheel::web_app::handoff::{encode_state, product_href, DetailView};
use urban_wheel::web_app::model::ProductType;

#[test]
fn test_selected_product_arrives_on_detail_page() {
    let vase = product_with_id("Tall Vase", ProductType::Vase, 4500, 7);

    let state = encode_state(&vase).expect("encode");
    let view = DetailView::from_state(Some(&state));

    assert_eq!(view, DetailView::HasProduct(vase.clone()));
    assert_eq!(view.product().map(|p| p.price_display()), Some("$45.00".to_string()));
}

#[test]
fn test_direct_visit_has_no_product() {
    // Refresh, bookmark or shared link: no navigation state at all
    let view = DetailView::from_state(None);
    assert_eq!(view, DetailView::NoProduct);
    assert!(view.product().is_none());
}

#[test]
fn test_foreign_state_is_not_a_product() {
    for raw in ["", "null", "{}", r#"{"scroll":120}"#, r#"{"product":{"name":"x"}}"#] {
        assert_eq!(DetailView::from_state(Some(raw)), DetailView::NoProduct, "state {:?}", raw);
    }
}

#[test]
fn test_state_uses_backend_field_names() {
    let mug = product("Speckled Mug", ProductType::Mug, 2400);
    let state = encode_state(&mug).expect("encode");
    let value: serde_json::Value = serde_json::from_str(&state).expect("json");

    assert_eq!(value["product"]["name"], "Speckled Mug");
    assert_eq!(value["product"]["type"], "mug");
}

#[test]
fn test_href_slugs_the_name() {
    let mug = product("Speckled Mug", ProductType::Mug, 2400);
    assert_eq!(product_href(&mug), "/product/Speckled%20Mug");
}

#[test]
fn test_back_to_earlier_product_ignores_newer_state() {
    // Shop -> A -> Shop -> B, then Back twice: the URL is A's, the router still holds B
    let a = product("Speckled Mug", ProductType::Mug, 2400);
    let b = product("Alba Bowl", ProductType::Bowl, 3000);
    let state_b = encode_state(&b).expect("encode");

    let view = DetailView::for_route([state_b.as_str()], "Speckled%20Mug");
    assert_eq!(view, DetailView::NoProduct);

    // The history entry for A still carries A
    let state_a = encode_state(&a).expect("encode");
    let view = DetailView::for_route([state_a.as_str(), state_b.as_str()], "Speckled%20Mug");
    assert_eq!(view, DetailView::HasProduct(a));
}
