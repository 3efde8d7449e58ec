// common/mod.rs - Shared test helpers
//
// An in-memory stand-in for the storefront backend plus product builders.
// Tests drive the controllers through the same StorefrontApi trait the
// HTTP client implements.

#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::HashMap;

use rust_decimal::Decimal;
use urban_wheel::web_app::api::StorefrontApi;
use urban_wheel::web_app::error::ApiError;
use urban_wheel::web_app::model::{CartRequest, ContactMessage, Product, ProductId, ProductType};

/// Build a product priced in cents
pub fn product(name: &str, product_type: ProductType, cents: i64) -> Product {
    Product {
        id: None,
        name: name.to_string(),
        product_type,
        price: Decimal::new(cents, 2),
        image: format!("/img/{}.jpg", name.to_lowercase().replace(' ', "-")),
        description: format!("{} from the studio", name),
    }
}

pub fn product_with_id(name: &str, product_type: ProductType, cents: i64, id: i64) -> Product {
    Product {
        id: Some(ProductId::Number(id)),
        ..product(name, product_type, cents)
    }
}

/// Backend double that records every call
#[derive(Default)]
pub struct FakeBackend {
    /// Products returned per query; unknown queries get an empty list
    pub catalog: HashMap<String, Vec<Product>>,
    /// When set, every call fails with a 500
    pub failing: bool,
    pub product_queries: RefCell<Vec<String>>,
    pub cart_requests: RefCell<Vec<CartRequest>>,
    pub contact_messages: RefCell<Vec<ContactMessage>>,
}

impl FakeBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self {
            failing: true,
            ..Self::default()
        }
    }

    pub fn with_products(mut self, query: &str, products: Vec<Product>) -> Self {
        self.catalog.insert(query.to_string(), products);
        self
    }

    fn outcome(&self) -> Result<(), ApiError> {
        if self.failing {
            Err(ApiError::Status {
                status: 500,
                body: "backend unavailable".to_string(),
            })
        } else {
            Ok(())
        }
    }
}

impl StorefrontApi for FakeBackend {
    async fn fetch_products(&self, query: &str) -> Result<Vec<Product>, ApiError> {
        self.product_queries.borrow_mut().push(query.to_string());
        self.outcome()?;
        Ok(self.catalog.get(query).cloned().unwrap_or_default())
    }

    async fn add_to_cart(&self, request: &CartRequest) -> Result<(), ApiError> {
        self.cart_requests.borrow_mut().push(request.clone());
        self.outcome()
    }

    async fn send_contact(&self, message: &ContactMessage) -> Result<(), ApiError> {
        self.contact_messages.borrow_mut().push(message.clone());
        self.outcome()
    }
}
