//! Server configuration

use anyhow::Context;
use grocery_repository::StoreConfig;
use serde::{Deserialize, Serialize};

/// Prefix for environment overrides, e.g. `GROCERY_PORT=9000` or
/// `GROCERY_STORE__PATH=/data/customers.json`
pub const ENV_PREFIX: &str = "GROCERY";

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Server host
    pub host: String,

    /// Server port (HTTP)
    pub port: u16,

    /// Customer document location
    #[serde(default)]
    pub store: StoreConfig,

    /// Log level
    pub log_level: String,

    /// Emit logs as JSON lines
    #[serde(default)]
    pub log_json: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
            store: StoreConfig::default(),
            log_level: "info".to_string(),
            log_json: false,
        }
    }
}

impl ServerConfig {
    /// Load configuration from defaults, config file and environment variables
    ///
    /// Later sources win: built-in defaults, then `config/server.*` if
    /// present, then `GROCERY_*` variables (`.env` is read first).
    pub fn load() -> anyhow::Result<Self> {
        // Load .env file if exists
        dotenvy::dotenv().ok();

        let defaults = Self::default();

        config::Config::builder()
            .set_default("host", defaults.host)?
            .set_default("port", i64::from(defaults.port))?
            .set_default("log_level", defaults.log_level)?
            .set_default("log_json", defaults.log_json)?
            .set_default("store.source", "filesystem")?
            .set_default("store.path", defaults.store.path)?
            .add_source(config::File::with_name("config/server").required(false))
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()
            .context("Failed to build config")?
            .try_deserialize()
            .context("Failed to deserialize config")
    }

    /// Socket address string to bind
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
