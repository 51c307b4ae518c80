//! Configuration for the hosted catalog store

use std::time::Duration;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::CatalogError;

/// Environment variable holding the store's base URL.
pub const STORE_URL_ENV: &str = "BIODIVERSITY_STORE_URL";

/// Environment variable holding the store's anonymous API key.
pub const STORE_KEY_ENV: &str = "BIODIVERSITY_STORE_KEY";

/// Connection settings for the hosted catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Project base URL, e.g. `https://abc.supabase.co`
    pub url: String,

    /// Anonymous (public) API key sent with every request
    pub anon_key: String,

    /// Per-request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            url: String::new(),
            anon_key: String::new(),
            timeout_secs: 30,
        }
    }
}

impl StoreConfig {
    pub fn new(url: impl Into<String>, anon_key: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            anon_key: anon_key.into(),
            ..Default::default()
        }
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs.max(1))
    }

    /// Checks the settings are usable and returns the REST root (`<url>/rest/v1/`).
    pub fn validate(&self) -> Result<Url, CatalogError> {
        if self.url.trim().is_empty() {
            return Err(CatalogError::config(format!(
                "store URL is empty (set {} or --store-url)",
                STORE_URL_ENV
            )));
        }
        if self.anon_key.trim().is_empty() {
            return Err(CatalogError::config(format!(
                "store key is empty (set {} or --store-key)",
                STORE_KEY_ENV
            )));
        }

        let base = Url::parse(self.url.trim())?;
        if !matches!(base.scheme(), "http" | "https") {
            return Err(CatalogError::config(format!(
                "store URL must be http or https, got {}",
                base.scheme()
            )));
        }

        let mut root = base.as_str().trim_end_matches('/').to_string();
        root.push_str("/rest/v1/");
        Ok(Url::parse(&root)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rest_root() {
        let config = StoreConfig::new("https://abc.supabase.co/", "key");
        let root = config.validate().unwrap();
        assert_eq!(root.as_str(), "https://abc.supabase.co/rest/v1/");
    }

    #[test]
    fn test_rejects_empty_values() {
        assert!(matches!(
            StoreConfig::new("", "key").validate(),
            Err(CatalogError::Config(_))
        ));
        assert!(matches!(
            StoreConfig::new("https://abc.supabase.co", " ").validate(),
            Err(CatalogError::Config(_))
        ));
    }

    #[test]
    fn test_rejects_non_http_scheme() {
        let err = StoreConfig::new("ftp://abc", "key").validate().unwrap_err();
        assert!(err.to_string().contains("ftp"));
    }

    #[test]
    fn test_partial_toml_like_input_uses_defaults() {
        let config: StoreConfig = serde_json::from_str(r#"{"url": "https://x.io"}"#).unwrap();
        assert_eq!(config.timeout_secs, 30);
        assert!(config.anon_key.is_empty());
    }
}
