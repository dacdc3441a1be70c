//! Configuration management
//!
//! Hierarchical settings loading in the same shape as the rest of our
//! tooling: programmatic defaults, an optional YAML file, then environment
//! variables with the `MCP_REGISTRY_` prefix taking highest priority.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use figment::providers::{Env, Format, Serialized, Yaml};
use figment::Figment;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::infrastructure::registry::COMMUNITY_REGISTRY_BASE_URL;

/// Configuration error types
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Registry base URL cannot be empty")]
    EmptyBaseUrl,

    #[error("Invalid registry base URL: {0}. Must start with http:// or https://")]
    InvalidBaseUrl(String),

    #[error("Cache directory cannot be empty")]
    EmptyCacheDir,

    #[error("Invalid cache_ttl_hours: {0}. Must be at least 1")]
    InvalidCacheTtl(i64),

    #[error("Invalid timeout_secs: {0}. Must be between 1 and 600")]
    InvalidTimeout(u64),
}

/// Settings for the registry client and its listing cache.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Settings {
    /// Registry origin, e.g. `https://registry.modelcontextprotocol.io`
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Directory the listing cache file lives in
    #[serde(default = "default_cache_dir")]
    pub cache_dir: PathBuf,

    /// How long a cached listing stays fresh
    #[serde(default = "default_cache_ttl_hours")]
    pub cache_ttl_hours: i64,

    /// Per-request HTTP timeout
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_base_url() -> String {
    COMMUNITY_REGISTRY_BASE_URL.to_string()
}

fn default_cache_dir() -> PathBuf {
    // Conventional location shared with the rest of the MCP tooling. Falls
    // back to a relative path when no home directory can be determined.
    directories::BaseDirs::new().map_or_else(
        || PathBuf::from(".docker/mcp/cache"),
        |dirs| dirs.home_dir().join(".docker").join("mcp").join("cache"),
    )
}

const fn default_cache_ttl_hours() -> i64 {
    24
}

const fn default_timeout_secs() -> u64 {
    20
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            cache_dir: default_cache_dir(),
            cache_ttl_hours: default_cache_ttl_hours(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl Settings {
    /// Load settings with hierarchical merging.
    ///
    /// Precedence (lowest to highest):
    /// 1. Programmatic defaults (Serialized)
    /// 2. `mcp-registry.yaml` in the working directory (optional)
    /// 3. Environment variables (`MCP_REGISTRY_*` prefix, highest priority)
    pub fn load() -> Result<Self> {
        let settings: Self = Figment::new()
            .merge(Serialized::defaults(Self::default()))
            .merge(Yaml::file("mcp-registry.yaml"))
            .merge(Env::prefixed("MCP_REGISTRY_").split("__"))
            .extract()
            .context("Failed to extract settings from figment")?;

        settings.validate()?;
        Ok(settings)
    }

    /// Load settings from a specific YAML file.
    pub fn load_from_file(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let settings: Self = Figment::new()
            .merge(Serialized::defaults(Self::default()))
            .merge(Yaml::file(path.as_ref()))
            .extract()
            .context(format!(
                "Failed to load settings from {}",
                path.as_ref().display()
            ))?;

        settings.validate()?;
        Ok(settings)
    }

    /// Validate settings after loading.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.base_url.is_empty() {
            return Err(ConfigError::EmptyBaseUrl);
        }
        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(ConfigError::InvalidBaseUrl(self.base_url.clone()));
        }

        if self.cache_dir.as_os_str().is_empty() {
            return Err(ConfigError::EmptyCacheDir);
        }

        if self.cache_ttl_hours < 1 {
            return Err(ConfigError::InvalidCacheTtl(self.cache_ttl_hours));
        }

        if self.timeout_secs == 0 || self.timeout_secs > 600 {
            return Err(ConfigError::InvalidTimeout(self.timeout_secs));
        }

        Ok(())
    }

    /// Listing TTL as a chrono duration.
    pub fn cache_ttl(&self) -> chrono::Duration {
        chrono::Duration::hours(self.cache_ttl_hours)
    }

    /// Per-request timeout as a std duration.
    pub const fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}
