//! Catalog configuration.
//!
//! Values come from built-in defaults, optionally overlaid by a RON file and
//! finally by the `POKEDEX_API_URL` environment variable.

use crate::errors::{ConfigError, ConfigResult};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use url::Url;

pub const DEFAULT_BASE_URL: &str = "https://pokeapi.co/api/v2/";

/// Environment variable naming a RON config file.
pub const CONFIG_PATH_ENV: &str = "POKEDEX_CONFIG";
/// Environment variable overriding `base_url`.
pub const BASE_URL_ENV: &str = "POKEDEX_API_URL";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    pub base_url: String,
    pub request_timeout_secs: u64,
    pub user_agent: String,
    /// Cards per listing page.
    pub page_size: u32,
    /// Members hydrated into cards on a type page.
    pub type_member_limit: usize,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            request_timeout_secs: 10,
            user_agent: concat!("pokedex-catalog/", env!("CARGO_PKG_VERSION")).to_string(),
            page_size: 20,
            type_member_limit: 20,
        }
    }
}

impl CatalogConfig {
    /// Parse a config from RON text. Missing fields keep their defaults.
    pub fn from_ron_str(text: &str, origin: &str) -> ConfigResult<Self> {
        let config: CatalogConfig = ron::from_str(text).map_err(|e| ConfigError::Parse {
            path: origin.to_string(),
            reason: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Load a config from a RON file on disk.
    pub fn load(path: &Path) -> ConfigResult<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| ConfigError::Unreadable {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        Self::from_ron_str(&text, &path.display().to_string())
    }

    /// Resolve the effective config: explicit path, else `POKEDEX_CONFIG`, else
    /// defaults; then apply `POKEDEX_API_URL`.
    pub fn resolve(explicit_path: Option<&Path>) -> ConfigResult<Self> {
        let env_path = std::env::var(CONFIG_PATH_ENV).ok();
        let mut config = match explicit_path {
            Some(path) => Self::load(path)?,
            None => match env_path.as_deref() {
                Some(path) => Self::load(Path::new(path))?,
                None => Self::default(),
            },
        };

        if let Ok(base_url) = std::env::var(BASE_URL_ENV) {
            config.base_url = base_url;
        }
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> ConfigResult<()> {
        self.base_url()?;
        if self.page_size == 0 {
            return Err(ConfigError::InvalidValue {
                field: "page_size",
                reason: "must be greater than zero".to_string(),
            });
        }
        if self.type_member_limit == 0 {
            return Err(ConfigError::InvalidValue {
                field: "type_member_limit",
                reason: "must be greater than zero".to_string(),
            });
        }
        if self.request_timeout_secs == 0 {
            return Err(ConfigError::InvalidValue {
                field: "request_timeout_secs",
                reason: "must be greater than zero".to_string(),
            });
        }
        Ok(())
    }

    /// The API root as a URL with a trailing slash, so relative joins append
    /// rather than replace the last segment.
    pub fn base_url(&self) -> ConfigResult<Url> {
        let mut raw = self.base_url.trim().to_string();
        if !raw.ends_with('/') {
            raw.push('/');
        }
        Url::parse(&raw).map_err(|e| ConfigError::InvalidValue {
            field: "base_url",
            reason: e.to_string(),
        })
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}
