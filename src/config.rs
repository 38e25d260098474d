use crate::error::ConfigError;
use serde::{Deserialize, Serialize};

/// Session settings. Every field has a default, so `{}` is a valid config.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    pub user: String,
    pub host: String,
    /// working path shown in the prompt and used by a bare `fs ls`
    pub cwd: String,
    /// seed scrollback with the welcome banner
    pub banner: bool,
    pub log_level: String,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            user: "jacob".to_string(),
            host: "portfolio-os".to_string(),
            cwd: "/".to_string(),
            banner: true,
            log_level: "info".to_string(),
        }
    }
}

impl CliConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: &std::path::Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    // unknown names fall back to info
    pub fn level_filter(&self) -> log::LevelFilter {
        self.log_level.parse().unwrap_or(log::LevelFilter::Info)
    }
}
