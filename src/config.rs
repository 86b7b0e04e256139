//! # Configuration
//!
//! [`AppConfig`] is read from an optional `config/food_catalog.toml` and from
//! environment variables prefixed `FOOD_CATALOG`, with `__` between nested keys:
//!
//! ```text
//! FOOD_CATALOG__CATALOG__BACKEND=memory
//! FOOD_CATALOG__CATALOG__BASE_URL=http://10.0.2.2:3333
//! FOOD_CATALOG__ACTOR_BUFFER_SIZE=64
//! ```
//!
//! Environment variables win over the file. An unreadable file is skipped with a warning.

use crate::catalog::{CatalogError, HttpCatalogService, InMemoryCatalog, SharedCatalog};
use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;
use tracing::warn;

const CONFIG_FILE: &str = "config/food_catalog.toml";
const ENV_PREFIX: &str = "FOOD_CATALOG";

/// Which Catalog Service implementation to run against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum CatalogBackend {
    #[default]
    Http,
    Memory,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CatalogConfig {
    #[serde(default)]
    pub backend: CatalogBackend,
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_request_timeout_ms")]
    pub request_timeout_ms: u64,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            backend: CatalogBackend::default(),
            base_url: default_base_url(),
            request_timeout_ms: default_request_timeout_ms(),
        }
    }
}

fn default_base_url() -> String {
    "http://localhost:3333".to_string()
}

fn default_request_timeout_ms() -> u64 {
    5000
}

fn default_actor_buffer_size() -> usize {
    32
}

impl CatalogConfig {
    /// Builds the configured Catalog Service.
    pub fn build(&self) -> Result<SharedCatalog, CatalogError> {
        Ok(match self.backend {
            CatalogBackend::Http => Arc::new(HttpCatalogService::new(
                self.base_url.clone(),
                Duration::from_millis(self.request_timeout_ms),
            )?),
            CatalogBackend::Memory => Arc::new(InMemoryCatalog::sample()),
        })
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub catalog: CatalogConfig,
    /// Channel capacity of each session actor.
    #[serde(default = "default_actor_buffer_size")]
    pub actor_buffer_size: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            catalog: CatalogConfig::default(),
            actor_buffer_size: default_actor_buffer_size(),
        }
    }
}

fn environment() -> Environment {
    Environment::with_prefix(ENV_PREFIX)
        .separator("__")
        .try_parsing(true)
}

impl AppConfig {
    /// Load from `config/food_catalog.toml` and the environment.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(CONFIG_FILE)
    }

    /// Load from `path` (optional) and the environment, falling back to the environment
    /// alone when the file cannot be read.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let builder = Config::builder()
            .add_source(File::from(path).required(false))
            .add_source(environment());

        let settings = match builder.build() {
            Ok(settings) => settings,
            Err(err) => {
                warn!(path = %path.display(), error = %err, "Config file unreadable, using environment only");
                Config::builder()
                    .add_source(environment())
                    .build()
                    .map_err(|env_err| {
                        ConfigError::Message(format!(
                            "Failed to load configuration from file and env: {}, then env-only error: {}",
                            err, env_err
                        ))
                    })?
            }
        };

        settings.try_deserialize()
    }
}
