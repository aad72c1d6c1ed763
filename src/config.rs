use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::utils::paths::get_config_path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_theme")]
    pub theme: String,

    /// Milliseconds before Copied/Failed feedback reverts to idle.
    #[serde(default = "default_revert_delay_ms")]
    pub revert_delay_ms: u64,

    /// Copy command used when the native clipboard is absent. Defaults to
    /// the platform convention (wl-copy/xclip, pbcopy, clip).
    #[serde(default)]
    pub fallback_command: Option<String>,
}

fn default_theme() -> String {
    "default".to_string()
}

fn default_revert_delay_ms() -> u64 {
    2000
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: default_theme(),
            revert_delay_ms: default_revert_delay_ms(),
            fallback_command: None,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = get_config_path()?;

        if !config_path.exists() {
            return Ok(Config::default());
        }

        Self::load_from(&config_path)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;
        Ok(config)
    }
}
