use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::{AppError, Result};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_db_path")]
    pub db_path: String,

    /// Base URL of the MLB Stats API, used only for metadata enrichment.
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,

    /// When false, games missing game_type/series_description/official_date
    /// are loaded with those fields null instead of triggering a schedule
    /// lookup. Useful for offline replays of archived files.
    #[serde(default = "default_enrich_metadata")]
    pub enrich_metadata: bool,
}

fn default_db_path() -> String {
    let data_dir = dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("dugout-loader");
    std::fs::create_dir_all(&data_dir).ok();
    data_dir.join("mlb.db").to_string_lossy().to_string()
}

fn default_api_base_url() -> String {
    "https://statsapi.mlb.com/api/v1".to_string()
}

fn default_enrich_metadata() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            db_path: default_db_path(),
            api_base_url: default_api_base_url(),
            enrich_metadata: default_enrich_metadata(),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path();

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config: Config = toml::from_str(&content)?;
            Ok(config)
        } else {
            let config = Config::default();
            config.save()?;
            Ok(config)
        }
    }

    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path();
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self).map_err(|e| AppError::Config(e.to_string()))?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("dugout-loader")
            .join("config.toml")
    }
}
