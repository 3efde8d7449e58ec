// web_app/api/query.rs - Canonical filter query
//
// The query string built here is both the request suffix for
// `GET /products` and the key the listing controller uses to tell fresh
// responses from stale ones, so it must be deterministic.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::web_app::model::FilterState;

/// Characters left unescaped in query values
const QUERY_VALUE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'*');

/// Build the `?`-prefixed query for `filters`.
///
/// Parameters are emitted in the fixed order `type`, `min_price`,
/// `max_price`; unset ones are omitted entirely. Price text is passed
/// through as typed. Returns an empty string when nothing is set.
pub fn build_query(filters: &FilterState) -> String {
    let mut pairs: Vec<(&str, &str)> = Vec::with_capacity(3);

    if let Some(product_type) = filters.product_type {
        pairs.push(("type", product_type.as_str()));
    }
    if !filters.min_price.is_empty() {
        pairs.push(("min_price", filters.min_price.as_str()));
    }
    if !filters.max_price.is_empty() {
        pairs.push(("max_price", filters.max_price.as_str()));
    }

    if pairs.is_empty() {
        return String::new();
    }

    let encoded = pairs
        .into_iter()
        .map(|(key, value)| format!("{}={}", key, utf8_percent_encode(value, QUERY_VALUE)))
        .collect::<Vec<_>>()
        .join("&");

    format!("?{}", encoded)
}
