//! Configuration Loader
//!
//! Loads and validates configuration from TOML files matching config.toml
//! structure. Every section has defaults so the binary also runs with no
//! config file at all.

use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::adapters::mirror::Network;

/// Main configuration structure matching config.toml
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub mirror: MirrorSection,
    #[serde(default)]
    pub coingecko: CoinGeckoSection,
    #[serde(default)]
    pub query: QuerySection,
    #[serde(default)]
    pub logging: LoggingSection,
}

/// Mirror-node endpoint lists, one ordered list per network
#[derive(Debug, Clone, Deserialize)]
pub struct MirrorSection {
    /// Mainnet mirror nodes, tried in order with failover
    #[serde(default = "default_mainnet_nodes")]
    pub mainnet: Vec<String>,
    /// Testnet mirror nodes
    #[serde(default = "default_testnet_nodes")]
    pub testnet: Vec<String>,
}

impl Default for MirrorSection {
    fn default() -> Self {
        Self {
            mainnet: default_mainnet_nodes(),
            testnet: default_testnet_nodes(),
        }
    }
}

impl MirrorSection {
    /// Endpoint lists keyed by network, the shape the mirror client wants
    pub fn nodes(&self) -> HashMap<Network, Vec<String>> {
        let mut nodes = HashMap::new();
        nodes.insert(Network::Mainnet, self.mainnet.clone());
        nodes.insert(Network::Testnet, self.testnet.clone());
        nodes
    }
}

fn default_mainnet_nodes() -> Vec<String> {
    vec![
        "https://mainnet-public.mirrornode.hedera.com".to_string(),
        "https://mainnet.hashio.io".to_string(),
    ]
}

fn default_testnet_nodes() -> Vec<String> {
    vec![
        "https://testnet.mirrornode.hedera.com".to_string(),
        "https://testnet.hashio.io".to_string(),
    ]
}

/// CoinGecko API configuration section
#[derive(Debug, Clone, Deserialize)]
pub struct CoinGeckoSection {
    /// CoinGecko API base URL
    #[serde(default = "default_coingecko_url")]
    pub api_url: String,
    /// Optional demo API key for higher rate limits
    #[serde(default)]
    pub api_key: Option<String>,
}

impl Default for CoinGeckoSection {
    fn default() -> Self {
        Self {
            api_url: default_coingecko_url(),
            api_key: None,
        }
    }
}

impl CoinGeckoSection {
    /// Get API key with environment variable fallback
    /// Checks the config value first, then COINGECKO_API_KEY
    pub fn get_api_key(&self) -> Option<String> {
        if let Some(ref key) = self.api_key {
            if !key.is_empty() {
                return Some(key.clone());
            }
        }
        std::env::var("COINGECKO_API_KEY").ok()
    }
}

fn default_coingecko_url() -> String {
    "https://api.coingecko.com/api/v3".to_string()
}

/// Holder-query tunables
#[derive(Debug, Clone, Deserialize)]
pub struct QuerySection {
    /// Holders per page (mirror node documented maximum: 100)
    #[serde(default = "default_page_size")]
    pub page_size: usize,
    /// Safety cap on pages per query
    #[serde(default = "default_page_cap")]
    pub page_cap: usize,
    /// Entries in the final ranking
    #[serde(default = "default_top_n")]
    pub top_n: usize,
}

impl Default for QuerySection {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
            page_cap: default_page_cap(),
            top_n: default_top_n(),
        }
    }
}

fn default_page_size() -> usize {
    100
}

fn default_page_cap() -> usize {
    200
}

fn default_top_n() -> usize {
    50
}

/// Logging configuration section
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSection {
    /// Log level: "trace", "debug", "info", "warn", "error"
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingSection {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse TOML: {0}")]
    ParseError(#[from] toml::de::Error),
    #[error("Validation failed: {0}")]
    ValidationError(String),
}

/// Load configuration from a TOML file
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config, ConfigError> {
    let content = std::fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    config.validate()?;
    Ok(config)
}

impl Config {
    /// Validate all configuration parameters
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, nodes) in [
            ("mainnet", &self.mirror.mainnet),
            ("testnet", &self.mirror.testnet),
        ] {
            if nodes.is_empty() {
                return Err(ConfigError::ValidationError(format!(
                    "mirror.{} must list at least one node",
                    name
                )));
            }
            if nodes.iter().any(|url| url.is_empty()) {
                return Err(ConfigError::ValidationError(format!(
                    "mirror.{} contains an empty URL",
                    name
                )));
            }
        }

        if self.coingecko.api_url.is_empty() {
            return Err(ConfigError::ValidationError(
                "coingecko.api_url cannot be empty".to_string(),
            ));
        }

        if self.query.page_size == 0 || self.query.page_size > 100 {
            return Err(ConfigError::ValidationError(format!(
                "query.page_size must be 1-100, got {}",
                self.query.page_size
            )));
        }

        if self.query.page_cap == 0 {
            return Err(ConfigError::ValidationError(
                "query.page_cap must be > 0".to_string(),
            ));
        }

        if self.query.top_n == 0 {
            return Err(ConfigError::ValidationError(
                "query.top_n must be > 0".to_string(),
            ));
        }

        Ok(())
    }
}
