//! Configuration module for Todo Core.
//!
//! Loads configuration from YAML files and environment variables.

use config::{Config as ConfigLoader, Environment, File};
use serde::Deserialize;

use crate::error::{TodoError, TodoResult};

/// Root configuration structure.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub cors: CorsConfig,
}

/// Server configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

/// Cross-origin configuration for browser clients.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CorsConfig {
    /// Origins allowed to call the API. Empty means any origin.
    #[serde(default)]
    pub allowed_origins: Vec<String>,
}

impl Config {
    /// Load configuration from files and environment.
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables (TODO__*)
    /// 2. config/local.yaml (if exists)
    /// 3. config/default.yaml (if exists)
    /// 4. Built-in defaults
    pub fn load() -> TodoResult<Self> {
        Self::load_from(ConfigLoader::builder())
    }

    fn load_from(
        builder: config::ConfigBuilder<config::builder::DefaultState>,
    ) -> TodoResult<Self> {
        let config = builder
            // Start with default config
            .add_source(File::with_name("config/default").required(false))
            // Layer on local overrides
            .add_source(File::with_name("config/local").required(false))
            // Layer on environment variables with TODO__ prefix
            .add_source(environment())
            .build()
            .map_err(|e| TodoError::Config(e.to_string()))?;

        config
            .try_deserialize()
            .map_err(|e| TodoError::Config(e.to_string()))
    }

    /// Socket address string to bind.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

/// Environment source for `TODO__SECTION__KEY` variables.
///
/// `TODO__CORS__ALLOWED_ORIGINS` takes a comma-separated list.
fn environment() -> Environment {
    Environment::with_prefix("TODO")
        .separator("__")
        .try_parsing(true)
        .list_separator(",")
        .with_list_parse_key("cors.allowed_origins")
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 5000,
        }
    }
}
