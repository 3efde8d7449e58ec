// web_app/config.rs - Backend URL resolution
//
// `BACKEND_URL` is baked into the WASM bundle at build time. The SSR host
// also honours it at runtime (after loading `.env`). An empty or missing
// value means "same origin as the page".

/// Address the SSR host listens on by default (matches `site-addr`)
pub const DEFAULT_ORIGIN: &str = "http://127.0.0.1:3000";

/// Environment variable naming the backend base URL
pub const BACKEND_URL_VAR: &str = "BACKEND_URL";

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StorefrontConfig {
    /// Configured backend base URL, `None` to use the hosting origin
    pub backend_url: Option<String>,
}

impl StorefrontConfig {
    pub fn new(backend_url: Option<String>) -> Self {
        Self {
            backend_url: normalize(backend_url),
        }
    }

    /// Resolve configuration for the current target.
    pub fn from_env() -> Self {
        Self::new(runtime_value().or_else(|| option_env!("BACKEND_URL").map(str::to_string)))
    }

    /// Base URL requests are issued against, without a trailing slash.
    pub fn base_url(&self) -> String {
        match &self.backend_url {
            Some(url) => url.clone(),
            None => hosting_origin(),
        }
    }
}

fn normalize(url: Option<String>) -> Option<String> {
    url.map(|u| u.trim().trim_end_matches('/').to_string())
        .filter(|u| !u.is_empty())
}

cfg_if::cfg_if! {
    if #[cfg(feature = "ssr")] {
        fn runtime_value() -> Option<String> {
            dotenv::dotenv().ok();
            std::env::var(BACKEND_URL_VAR).ok()
        }
    } else {
        fn runtime_value() -> Option<String> {
            None
        }
    }
}

cfg_if::cfg_if! {
    if #[cfg(feature = "hydrate")] {
        fn hosting_origin() -> String {
            leptos::prelude::window()
                .location()
                .origin()
                .unwrap_or_else(|_| DEFAULT_ORIGIN.to_string())
        }
    } else {
        fn hosting_origin() -> String {
            DEFAULT_ORIGIN.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_slash_trimmed() {
        let config = StorefrontConfig::new(Some("https://api.example.com/".to_string()));
        assert_eq!(config.base_url(), "https://api.example.com");
    }

    #[test]
    fn test_blank_value_means_same_origin() {
        let config = StorefrontConfig::new(Some("   ".to_string()));
        assert_eq!(config.backend_url, None);
        assert_eq!(config.base_url(), DEFAULT_ORIGIN);
    }

    #[test]
    fn test_missing_value_means_same_origin() {
        assert_eq!(StorefrontConfig::new(None).base_url(), DEFAULT_ORIGIN);
    }
}
