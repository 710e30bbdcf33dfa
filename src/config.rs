//! Configuration loading
//!
//! Configuration is layered:
//! 1. Environment variables NOTION_API_KEY / NOTION_DATABASE_ID / NOTION_BASE_URL
//! 2. TOML file at NOTION_TASK_CONFIG_PATH
//! 3. ~/.config/notion-task-mcp.toml
//!
//! The API key and database id are required; a missing credential is the one
//! failure that aborts the process, and it happens before serving starts.

use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub notion: NotionConfig,
}

/// Notion API connection settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotionConfig {
    /// Integration token (bearer auth)
    #[serde(default)]
    pub api_key: String,
    /// Database holding the task records
    #[serde(default)]
    pub database_id: String,
    /// API base URL, overridable for testing against a local stub
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

fn default_base_url() -> String {
    "https://api.notion.com/v1".to_string()
}

impl Default for NotionConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            database_id: String::new(),
            base_url: default_base_url(),
        }
    }
}

impl Config {
    /// Load configuration from file and environment, then validate it.
    pub fn load() -> Result<Self> {
        let mut config = if let Some(path) = Self::find_config_path() {
            if path.exists() {
                tracing::info!("Loading config from: {}", path.display());
                let content = std::fs::read_to_string(&path)?;
                toml::from_str(&content)?
            } else {
                Self::default()
            }
        } else {
            Self::default()
        };

        // Environment takes precedence over the file
        if let Ok(key) = std::env::var("NOTION_API_KEY") {
            config.notion.api_key = key;
        }
        if let Ok(id) = std::env::var("NOTION_DATABASE_ID") {
            config.notion.database_id = id;
        }
        if let Ok(url) = std::env::var("NOTION_BASE_URL") {
            config.notion.base_url = url;
        }

        if config.notion.api_key.is_empty() {
            bail!("NOTION_API_KEY is not set (env var or config file)");
        }
        if config.notion.database_id.is_empty() {
            bail!("NOTION_DATABASE_ID is not set (env var or config file)");
        }

        Ok(config)
    }

    fn find_config_path() -> Option<PathBuf> {
        if let Ok(path) = std::env::var("NOTION_TASK_CONFIG_PATH") {
            return Some(PathBuf::from(path));
        }

        if let Ok(home) = std::env::var("HOME") {
            let path = PathBuf::from(home)
                .join(".config")
                .join("notion-task-mcp.toml");
            return Some(path);
        }

        None
    }
}
