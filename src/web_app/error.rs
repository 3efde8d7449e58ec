// web_app/error.rs - Error taxonomy
//
// Every variant ends in a benign UI state; none of them is fatal.

/// Failure talking to the storefront backend
#[derive(thiserror::Error, Debug)]
pub enum ApiError {
    /// Transport failure (DNS, connection refused, CORS, ...)
    #[error("HTTP request error: {0}")]
    Request(#[from] reqwest::Error),

    /// Non-2xx response; the body is kept as an opaque message
    #[error("backend returned {status}: {body}")]
    Status { status: u16, body: String },

    /// 2xx response whose body was not the expected JSON
    #[error("could not decode response: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Contact form field that failed validation
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    #[error("{0} is required")]
    Missing(&'static str),

    #[error("Please enter a valid email address")]
    InvalidEmail,
}

/// Storefront-wide error categories
#[derive(thiserror::Error, Debug)]
pub enum StorefrontError {
    #[error(transparent)]
    Network(#[from] ApiError),

    #[error(transparent)]
    Validation(#[from] FormError),

    /// Detail page reached without a product handed over by the listing
    #[error("product details unavailable")]
    MissingHandoff,
}
