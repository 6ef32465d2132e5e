use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::error::ConfigurationError;
use crate::pagination::PaginationConfig;
use crate::render::{Labels, StyleHooks};

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub pagination: PaginationConfig,
    #[serde(default)]
    pub style: StyleHooks,
    #[serde(default)]
    pub labels: Labels,
    #[serde(default)]
    pub demo: DemoConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

/// Synthetic list served by the demo routes.
#[derive(Debug, Clone, Deserialize)]
pub struct DemoConfig {
    /// Length of the list when `[pagination] records` is not given.
    #[serde(default = "default_total_items")]
    pub total_items: u64,
    #[serde(default = "default_base_path")]
    pub base_path: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            log_level: default_log_level(),
        }
    }
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            total_items: default_total_items(),
            base_path: default_base_path(),
        }
    }
}

impl Config {
    /// Records shown by the demo list: `[pagination] records` wins over
    /// `[demo] total_items`.
    pub fn demo_records(&self) -> u64 {
        self.pagination.records.unwrap_or(self.demo.total_items)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadFile {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            source: e,
        })?;
        config.pagination.validate()?;
        Ok(config)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    ReadFile {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
    #[error("invalid pagination settings: {0}")]
    Invalid(#[from] ConfigurationError),
}

// Default value functions

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8081
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_total_items() -> u64 {
    1000
}

fn default_base_path() -> String {
    "/items".to_string()
}
