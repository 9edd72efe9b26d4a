//! App Configuration
//!
//! UI strings, log level and the seed list, read from the embedded
//! `app_config.json`. Missing fields fall back to the built-in defaults.

use log::LevelFilter;
use serde::Deserialize;
use thiserror::Error;
use todo_store::{seed_list, TodoList};

const EMBEDDED_CONFIG: &str = include_str!("../app_config.json");

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid app_config.json: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Page heading
    pub heading: String,
    /// Placeholder of the add input
    pub placeholder: String,
    /// `log` level filter name ("error" .. "trace", or "off")
    pub log_level: String,
    /// Todos present at session start
    pub seed: TodoList,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            heading: "Todo App".to_string(),
            placeholder: "Add todo".to_string(),
            log_level: "info".to_string(),
            seed: seed_list(),
        }
    }
}

impl AppConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Unknown level names fall back to `Info`
    pub fn level_filter(&self) -> LevelFilter {
        self.log_level.parse().unwrap_or(LevelFilter::Info)
    }
}

/// Load the configuration bundled with the app
pub fn load() -> Result<AppConfig, ConfigError> {
    AppConfig::from_json(EMBEDDED_CONFIG)
}
