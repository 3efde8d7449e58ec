// web_app/listing.rs - Product listing controller
//
// State machine: Idle -> Loading -> {Populated | EmptyOrFailed}, re-entering
// Loading whenever the canonical query changes. Requests are keyed by the
// query that produced them; a response for any other query is dropped, so
// the last requested query always wins.

use crate::web_app::api::StorefrontApi;
use crate::web_app::error::ApiError;
use crate::web_app::model::{FilterState, Product};

/// What the shop grid should show
#[derive(Clone, Debug, Default, PartialEq)]
pub enum ListingStatus {
    /// Mounted, nothing requested yet
    #[default]
    Idle,
    Loading,
    Populated(Vec<Product>),
    /// No matches or the request failed; rendered the same way
    EmptyOrFailed,
}

impl ListingStatus {
    pub fn is_loading(&self) -> bool {
        matches!(self, ListingStatus::Idle | ListingStatus::Loading)
    }

    /// Products to render, in backend order
    pub fn products(&self) -> &[Product] {
        match self {
            ListingStatus::Populated(products) => products,
            _ => &[],
        }
    }
}

/// A fetch issued for one query
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ListingRequest {
    pub query: String,
}

impl ListingRequest {
    pub async fn run<A: StorefrontApi>(self, api: &A) -> ListingResponse {
        let result = api.fetch_products(&self.query).await;
        ListingResponse {
            query: self.query,
            result,
        }
    }
}

/// Outcome of a [`ListingRequest`], still tagged with its query
#[derive(Debug)]
pub struct ListingResponse {
    pub query: String,
    pub result: Result<Vec<Product>, ApiError>,
}

/// Listing state owned by the shop page
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ListingState {
    current_query: Option<String>,
    status: ListingStatus,
}

impl ListingState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status(&self) -> &ListingStatus {
        &self.status
    }

    pub fn current_query(&self) -> Option<&str> {
        self.current_query.as_deref()
    }

    /// Enter Loading for `filters` unless their query is already current.
    ///
    /// Returns the request to run, or `None` when no refetch is needed.
    pub fn begin(&mut self, filters: &FilterState) -> Option<ListingRequest> {
        self.begin_query(filters.query())
    }

    pub fn begin_query(&mut self, query: String) -> Option<ListingRequest> {
        if self.current_query.as_deref() == Some(query.as_str()) {
            return None;
        }

        tracing::debug!("listing: loading products{}", query);
        self.current_query = Some(query.clone());
        self.status = ListingStatus::Loading;
        Some(ListingRequest { query })
    }

    /// Apply a response if it still matches the current query.
    ///
    /// Returns `false` when the response was stale and ignored.
    pub fn settle(&mut self, response: ListingResponse) -> bool {
        if self.current_query.as_deref() != Some(response.query.as_str()) {
            tracing::debug!("listing: dropping stale response for '{}'", response.query);
            return false;
        }

        self.status = match response.result {
            Ok(products) if products.is_empty() => ListingStatus::EmptyOrFailed,
            Ok(products) => ListingStatus::Populated(products),
            Err(e) => {
                tracing::warn!("listing: fetch failed: {}", e);
                ListingStatus::EmptyOrFailed
            }
        };
        true
    }
}

/// Human-readable result count shown above the grid
pub fn count_label(count: usize) -> String {
    if count == 1 {
        "1 piece".to_string()
    } else {
        format!("{} pieces", count)
    }
}
