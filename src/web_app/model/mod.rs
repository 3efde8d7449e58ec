// web_app/model/mod.rs - Wire types shared with the storefront backend
//
// The backend owns every Product; the front end only reads them.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::web_app::api::query;

/// Placeholder sent as `product_id` when a product has no backend id
pub const PLACEHOLDER_PRODUCT_ID: &str = "temp";

/// Kind of ceramic piece
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProductType {
    Mug,
    Bowl,
    Plate,
    Vase,
}

impl ProductType {
    pub const ALL: [ProductType; 4] = [
        ProductType::Mug,
        ProductType::Bowl,
        ProductType::Plate,
        ProductType::Vase,
    ];

    /// Value used on the wire and in the `type` query parameter
    pub fn as_str(&self) -> &'static str {
        match self {
            ProductType::Mug => "mug",
            ProductType::Bowl => "bowl",
            ProductType::Plate => "plate",
            ProductType::Vase => "vase",
        }
    }

    /// Plural label for the filter dropdown
    pub fn plural_label(&self) -> &'static str {
        match self {
            ProductType::Mug => "Mugs",
            ProductType::Bowl => "Bowls",
            ProductType::Plate => "Plates",
            ProductType::Vase => "Vases",
        }
    }

    /// Parses a dropdown value; the empty "All types" option yields `None`.
    pub fn from_select(value: &str) -> Option<Self> {
        value.parse().ok()
    }
}

impl std::fmt::Display for ProductType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProductType::Mug => write!(f, "Mug"),
            ProductType::Bowl => write!(f, "Bowl"),
            ProductType::Plate => write!(f, "Plate"),
            ProductType::Vase => write!(f, "Vase"),
        }
    }
}

impl std::str::FromStr for ProductType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ProductType::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| format!("unknown product type '{}'", s))
    }
}

/// Backend-assigned id; the backend may use numbers or strings
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ProductId {
    Number(i64),
    Text(String),
}

impl std::fmt::Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProductId::Number(n) => write!(f, "{}", n),
            ProductId::Text(s) => write!(f, "{}", s),
        }
    }
}

/// Product as returned by `GET /products`
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Product {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<ProductId>,
    /// Unique display name, also the source of the detail route slug
    pub name: String,
    #[serde(rename = "type")]
    pub product_type: ProductType,
    pub price: Decimal,
    pub image: String,
    #[serde(default)]
    pub description: String,
}

impl Product {
    pub fn price_display(&self) -> String {
        format!("${:.2}", self.price)
    }

    /// Id sent to `/cart/add`, falling back to the placeholder
    pub fn cart_id(&self) -> ProductId {
        self.id
            .clone()
            .unwrap_or_else(|| ProductId::Text(PLACEHOLDER_PRODUCT_ID.to_string()))
    }
}

/// Filter selections on the shop page
///
/// Price bounds keep the raw text from the inputs; an empty string means
/// the bound is not set.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FilterState {
    pub product_type: Option<ProductType>,
    pub min_price: String,
    pub max_price: String,
}

impl FilterState {
    /// Canonical query string for these filters (see `api::query`)
    pub fn query(&self) -> String {
        query::build_query(self)
    }

    pub fn is_empty(&self) -> bool {
        self.product_type.is_none() && self.min_price.is_empty() && self.max_price.is_empty()
    }
}

/// Body of `POST /cart/add`
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CartRequest {
    pub product_id: ProductId,
    pub quantity: u8,
}

/// Body of `POST /contact`
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub message: String,
}
