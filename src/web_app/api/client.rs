// web_app/api/client.rs - JSON client for the storefront backend
//
// Thin wrapper over reqwest. On the WASM target reqwest goes through the
// browser's fetch, so the same code serves the hydrated app and native tests.
//
// Callers only branch on success vs failure; error bodies are never parsed.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::web_app::config::StorefrontConfig;
use crate::web_app::error::ApiError;
use crate::web_app::model::{CartRequest, ContactMessage, Product};

pub const PRODUCTS_PATH: &str = "/products";
pub const CART_ADD_PATH: &str = "/cart/add";
pub const CONTACT_PATH: &str = "/contact";

/// Operations the storefront needs from its backend
///
/// Controllers are generic over this trait so they can run against a fake
/// backend in tests. Futures are not `Send`: everything runs on the
/// browser's single event loop.
#[allow(async_fn_in_trait)]
pub trait StorefrontApi {
    /// `GET /products{query}`; `query` is empty or starts with `?`
    async fn fetch_products(&self, query: &str) -> Result<Vec<Product>, ApiError>;

    /// `POST /cart/add`
    async fn add_to_cart(&self, request: &CartRequest) -> Result<(), ApiError>;

    /// `POST /contact`
    async fn send_contact(&self, message: &ContactMessage) -> Result<(), ApiError>;
}

/// HTTP implementation of [`StorefrontApi`]
#[derive(Clone, Debug)]
pub struct HttpApi {
    client: reqwest::Client,
    base_url: String,
}

impl HttpApi {
    pub fn new(config: &StorefrontConfig) -> Self {
        Self::with_base_url(config.base_url())
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Client configured from `BACKEND_URL` (or the hosting origin)
    pub fn from_env() -> Self {
        Self::new(&StorefrontConfig::from_env())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL for a backend path such as `/products?type=mug`
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let url = self.endpoint(path);
        tracing::debug!("GET {}", url);

        let response = self
            .client
            .get(&url)
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .send()
            .await?;
        let response = ensure_success(response).await?;

        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }

    async fn post_json<B: Serialize>(&self, path: &str, body: &B) -> Result<(), ApiError> {
        let url = self.endpoint(path);
        tracing::debug!("POST {}", url);

        let response = self.client.post(&url).json(body).send().await?;
        ensure_success(response).await?;
        Ok(())
    }
}

impl Default for HttpApi {
    fn default() -> Self {
        Self::from_env()
    }
}

impl StorefrontApi for HttpApi {
    async fn fetch_products(&self, query: &str) -> Result<Vec<Product>, ApiError> {
        self.get_json(&format!("{}{}", PRODUCTS_PATH, query)).await
    }

    async fn add_to_cart(&self, request: &CartRequest) -> Result<(), ApiError> {
        self.post_json(CART_ADD_PATH, request).await
    }

    async fn send_contact(&self, message: &ContactMessage) -> Result<(), ApiError> {
        self.post_json(CONTACT_PATH, message).await
    }
}

/// Turn a non-2xx response into [`ApiError::Status`] carrying its body text.
async fn ensure_success(response: reqwest::Response) -> Result<reqwest::Response, ApiError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    tracing::warn!("backend responded with {}", status);
    Err(ApiError::Status {
        status: status.as_u16(),
        body,
    })
}
