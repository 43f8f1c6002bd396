//! Configuration loading for corgi-gif-service
//!
//! Configuration is loaded from:
//! 1. An explicit path (the `--config` flag)
//! 2. Environment variable CORGI_GIF_CONFIG_PATH
//! 3. ~/.corgi-gif/config.toml
//! 4. Default values
//!
//! `GIPHY_API_KEY`, `GIPHY_API_URL` and `PORT` from the environment override
//! whatever the file says.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Placeholder used when no Giphy API key is configured
pub const PLACEHOLDER_API_KEY: &str = "YOUR_API_KEY_HERE";

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// HTTP listener configuration
    #[serde(default)]
    pub server: ServerConfig,
    /// Giphy upstream configuration
    #[serde(default)]
    pub giphy: GiphyConfig,
}

/// HTTP listener configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Address to bind
    #[serde(default = "default_host")]
    pub host: String,
    /// Port to listen on
    #[serde(default = "default_port")]
    pub port: u16,
}

/// Giphy search API configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GiphyConfig {
    /// Giphy API key
    #[serde(default = "default_api_key")]
    pub api_key: String,
    /// Search endpoint URL
    #[serde(default = "default_giphy_url")]
    pub url: String,
    /// Upstream request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u64,
    /// Number of candidates requested per search
    #[serde(default = "default_limit")]
    pub limit: u32,
    /// Content rating ceiling
    #[serde(default = "default_rating")]
    pub rating: String,
    /// Language hint
    #[serde(default = "default_lang")]
    pub lang: String,
}

// Default value functions
fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    5000
}

fn default_api_key() -> String {
    PLACEHOLDER_API_KEY.to_string()
}

fn default_giphy_url() -> String {
    "https://api.giphy.com/v1/gifs/search".to_string()
}

fn default_timeout() -> u64 {
    10
}

fn default_limit() -> u32 {
    25
}

fn default_rating() -> String {
    "g".to_string()
}

fn default_lang() -> String {
    "en".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl Default for GiphyConfig {
    fn default() -> Self {
        Self {
            api_key: default_api_key(),
            url: default_giphy_url(),
            timeout_seconds: default_timeout(),
            limit: default_limit(),
            rating: default_rating(),
            lang: default_lang(),
        }
    }
}

impl GiphyConfig {
    /// Whether the API key is still the placeholder
    pub fn uses_placeholder_key(&self) -> bool {
        self.api_key == PLACEHOLDER_API_KEY
    }
}

impl Config {
    /// Load configuration from file or use defaults, then apply env overrides
    ///
    /// An explicit `path` must exist. The implicit lookup falls back to
    /// defaults when its file is absent.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut config = match path {
            Some(path) => {
                if !path.exists() {
                    anyhow::bail!("config file not found: {}", path.display());
                }
                Self::from_file(path)?
            }
            None => match Self::find_config_path() {
                Some(path) if path.exists() => Self::from_file(&path)?,
                Some(path) => {
                    tracing::info!("No config at {}, using defaults", path.display());
                    Self::default()
                }
                None => {
                    tracing::info!("No config path specified, using defaults");
                    Self::default()
                }
            },
        };

        config.apply_env(|key| std::env::var(key).ok())?;

        if config.giphy.uses_placeholder_key() {
            tracing::warn!("GIPHY_API_KEY is not set - upstream requests will be rejected");
        }

        Ok(config)
    }

    /// Read and parse a TOML config file
    fn from_file(path: &Path) -> Result<Self> {
        tracing::info!("Loading config from: {}", path.display());
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        toml::from_str(&content).with_context(|| format!("failed to parse {}", path.display()))
    }

    /// Apply environment overrides using the given lookup
    fn apply_env(&mut self, get: impl Fn(&str) -> Option<String>) -> Result<()> {
        if let Some(key) = get("GIPHY_API_KEY") {
            self.giphy.api_key = key;
        }
        if let Some(url) = get("GIPHY_API_URL") {
            self.giphy.url = url;
        }
        if let Some(port) = get("PORT") {
            self.server.port = port
                .parse()
                .with_context(|| format!("invalid PORT value: {port}"))?;
        }
        Ok(())
    }

    /// Find the configuration file path
    fn find_config_path() -> Option<PathBuf> {
        if let Ok(path) = std::env::var("CORGI_GIF_CONFIG_PATH") {
            return Some(PathBuf::from(path));
        }

        if let Ok(home) = std::env::var("HOME") {
            return Some(PathBuf::from(home).join(".corgi-gif").join("config.toml"));
        }

        None
    }
}
