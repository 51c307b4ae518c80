//! Viewer configuration.
//!
//! Settings are layered, lowest precedence first: built-in defaults, an
//! optional TOML file, environment variables, then command line flags
//! (applied by the binary).

use std::path::{Path, PathBuf};

use biodiversity_catalog::{CatalogError, StoreConfig};
use biodiversity_catalog::config::{STORE_KEY_ENV, STORE_URL_ENV};
use biodiversity_map::MapLayer;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Environment variable holding the MapTiler API key.
pub const MAPTILER_KEY_ENV: &str = "BIODIVERSITY_MAPTILER_KEY";

/// Errors loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error(transparent)]
    Store(#[from] CatalogError),

    #[error("invalid configuration: {0}")]
    Invalid(String),
}

impl ConfigError {
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::Invalid(message.into())
    }
}

/// Initial window geometry.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowSettings {
    pub width: f64,
    pub height: f64,
    pub maximized: bool,
}

impl Default for WindowSettings {
    fn default() -> Self {
        Self {
            width: 1280.0,
            height: 820.0,
            maximized: false,
        }
    }
}

/// Complete viewer configuration.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerConfig {
    /// Hosted catalog connection
    pub store: StoreConfig,

    /// MapTiler API key for base layer tiles
    pub maptiler_key: String,

    /// Base layer selected at startup
    pub layer: MapLayer,

    /// Page to open at startup, e.g. `/map?campusId=1`; home when unset
    pub start: Option<String>,

    pub window: WindowSettings,
}

impl ViewerConfig {
    /// Parses a TOML document.
    pub fn from_toml(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    /// Defaults, overlaid with `path` when given.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let Some(path) = path else {
            return Ok(Self::default());
        };

        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), "Loaded config file");
        Self::from_toml(&text)
    }

    /// Overlays the environment variables that are set.
    pub fn with_env_overrides(self) -> Self {
        self.with_overrides_from(|name| std::env::var(name).ok())
    }

    /// Overlays values from `lookup`, keyed by environment variable name.
    pub fn with_overrides_from(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(url) = lookup(STORE_URL_ENV) {
            self.store.url = url;
        }
        if let Some(key) = lookup(STORE_KEY_ENV) {
            self.store.anon_key = key;
        }
        if let Some(key) = lookup(MAPTILER_KEY_ENV) {
            self.maptiler_key = key;
        }
        self
    }

    /// Checks the settings needed to talk to the hosted catalog.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.store.validate()?;
        if self.maptiler_key.trim().is_empty() {
            tracing::warn!("No MapTiler key configured, base layer tiles will fail to load");
        }
        if self.window.width <= 0.0 || self.window.height <= 0.0 {
            return Err(ConfigError::invalid("window size must be positive"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ViewerConfig::default();
        assert_eq!(config.layer, MapLayer::Satellite);
        assert_eq!(config.store.timeout_secs, 30);
        assert!(config.start.is_none());
    }

    #[test]
    fn test_partial_toml() {
        let config = ViewerConfig::from_toml(
            r#"
            maptiler_key = "tiles"
            layer = "topo"

            [store]
            url = "https://abc.supabase.co"
            anon_key = "anon"
            "#,
        )
        .unwrap();
        assert_eq!(config.layer, MapLayer::Topo);
        assert_eq!(config.store.anon_key, "anon");
        assert_eq!(config.store.timeout_secs, 30);
        assert_eq!(config.window, WindowSettings::default());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_unknown_layer_is_rejected() {
        assert!(matches!(
            ViewerConfig::from_toml(r#"layer = "mars""#),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_env_overrides_file_values() {
        let config = ViewerConfig::from_toml(
            r#"
            [store]
            url = "https://file.example"
            anon_key = "file-key"
            "#,
        )
        .unwrap()
        .with_overrides_from(|name| match name {
            STORE_URL_ENV => Some("https://env.example".to_string()),
            MAPTILER_KEY_ENV => Some("env-tiles".to_string()),
            _ => None,
        });

        assert_eq!(config.store.url, "https://env.example");
        assert_eq!(config.store.anon_key, "file-key");
        assert_eq!(config.maptiler_key, "env-tiles");
    }

    #[test]
    fn test_missing_store_is_invalid() {
        let err = ViewerConfig::default().validate().unwrap_err();
        assert!(matches!(err, ConfigError::Store(CatalogError::Config(_))));
        assert!(err.to_string().contains("store URL is empty"));
    }

    #[test]
    fn test_missing_file() {
        let err = ViewerConfig::load(Some(Path::new("/nonexistent/viewer.toml"))).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
