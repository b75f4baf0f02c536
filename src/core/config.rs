//! Configuration management for the docs server.
//!
//! This module handles loading configuration from TOML files and
//! environment variables, with sensible defaults for all settings.

use crate::core::error::{DocsError, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Application name used for the config directory
pub const APP_NAME: &str = "vitepress-mcp";

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub index: IndexConfig,
    #[serde(default)]
    pub docs: DocsConfig,
    #[serde(default)]
    pub search: SearchConfig,
}

/// Index location configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct IndexConfig {
    /// Explicit path to mcp-index.json (probed from cwd when unset)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
}

/// Document root configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct DocsConfig {
    /// Explicit docs root (directory of the index when unset)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub root: Option<PathBuf>,
}

/// Search configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SearchConfig {
    /// Maximum number of results returned by search_docs
    #[serde(default = "default_limit")]
    pub limit: usize,
}

fn default_limit() -> usize {
    20
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            limit: default_limit(),
        }
    }
}

/// Read an environment variable, treating empty values as unset
pub(crate) fn env_value(name: &str) -> Option<String> {
    env::var(name).ok().filter(|v| !v.is_empty())
}

impl Config {
    /// Load configuration from TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .map_err(|e| DocsError::ConfigError(format!("Failed to read config file: {e}")))?;

        let config: Config = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Load config with priority: env vars > TOML > defaults
    ///
    /// Config file lookup order:
    /// 1. VITEPRESS_MCP_CONFIG env var
    /// 2. `<config dir>/vitepress-mcp/config.toml`
    /// 3. `./vitepress-mcp.toml`
    pub fn load() -> Result<Self> {
        let mut config = match Self::config_file() {
            Some(path) => {
                tracing::debug!("Loading config from {}", path.display());
                Self::from_file(path)?
            }
            None => Self::default(),
        };

        config.merge_env();
        config.validate()?;

        Ok(config)
    }

    fn config_file() -> Option<PathBuf> {
        if let Some(path) = env_value("VITEPRESS_MCP_CONFIG") {
            return Some(PathBuf::from(path));
        }

        if let Some(dir) = dirs::config_dir() {
            let path = dir.join(APP_NAME).join("config.toml");
            if path.exists() {
                return Some(path);
            }
        }

        let local = PathBuf::from(format!("{APP_NAME}.toml"));
        local.exists().then_some(local)
    }

    /// Merge configuration with environment variables
    ///
    /// The `VITEPRESS_`-prefixed names win over the bare aliases.
    pub fn merge_env(&mut self) {
        if let Some(path) = env_value("VITEPRESS_INDEX_PATH").or_else(|| env_value("INDEX_PATH")) {
            self.index.path = Some(PathBuf::from(path));
        }

        if let Some(root) = env_value("VITEPRESS_DOCS_ROOT").or_else(|| env_value("DOCS_ROOT")) {
            self.docs.root = Some(PathBuf::from(root));
        }

        if let Some(limit) = env_value("VITEPRESS_SEARCH_LIMIT") {
            if let Ok(l) = limit.parse() {
                self.search.limit = l;
            }
        }
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.search.limit == 0 {
            return Err(DocsError::ConfigError(
                "Search limit must be non-zero".to_string(),
            ));
        }

        Ok(())
    }

    /// Log configuration
    pub fn log_config(&self) {
        tracing::info!("Configuration loaded:");
        match &self.index.path {
            Some(path) => tracing::info!("  Index path: {}", path.display()),
            None => tracing::info!("  Index path: <probe cwd>"),
        }
        match &self.docs.root {
            Some(root) => tracing::info!("  Docs root: {}", root.display()),
            None => tracing::info!("  Docs root: <index directory>"),
        }
        tracing::info!("  Search limit: {}", self.search.limit);
    }
}
