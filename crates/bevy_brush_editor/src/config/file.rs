//! Config file save/load operations

use super::BrushConfig;
use directories::ProjectDirs;
use std::path::PathBuf;

const CONFIG_FILE: &str = "brush.json";

#[derive(Debug)]
pub enum ConfigError {
    IoError(String),
    ParseError(String),
    SerializeError(String),
    NoConfigDir,
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::IoError(e) => write!(f, "IO error: {}", e),
            ConfigError::ParseError(e) => write!(f, "Parse error: {}", e),
            ConfigError::SerializeError(e) => write!(f, "Serialize error: {}", e),
            ConfigError::NoConfigDir => write!(f, "Could not determine config directory"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl BrushConfig {
    pub fn config_dir() -> Option<PathBuf> {
        ProjectDirs::from("com", "bevy_brush_editor", "bevy_brush_editor")
            .map(|dirs| dirs.config_dir().to_path_buf())
    }

    pub fn config_path() -> Option<PathBuf> {
        Self::config_dir().map(|dir| dir.join(CONFIG_FILE))
    }

    /// Load the config, returning defaults if it is missing or unreadable
    pub fn load() -> Self {
        match Self::load_from_file() {
            Ok(config) => config,
            Err(e) => {
                bevy::log::warn!("Could not load brush config: {}. Using defaults.", e);
                Self::default()
            }
        }
    }

    fn load_from_file() -> Result<Self, ConfigError> {
        let path = Self::config_path().ok_or(ConfigError::NoConfigDir)?;

        if !path.exists() {
            return Ok(Self::default());
        }

        let content =
            std::fs::read_to_string(&path).map_err(|e| ConfigError::IoError(e.to_string()))?;

        Self::from_json(&content)
    }

    /// Parse a config; missing fields take their defaults
    pub fn from_json(content: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(content).map_err(|e| ConfigError::ParseError(e.to_string()))
    }

    pub fn save(&self) -> Result<(), ConfigError> {
        let dir = Self::config_dir().ok_or(ConfigError::NoConfigDir)?;
        let path = dir.join(CONFIG_FILE);

        std::fs::create_dir_all(&dir).map_err(|e| ConfigError::IoError(e.to_string()))?;

        let content = serde_json::to_string_pretty(self)
            .map_err(|e| ConfigError::SerializeError(e.to_string()))?;

        std::fs::write(&path, content).map_err(|e| ConfigError::IoError(e.to_string()))?;

        bevy::log::info!("Saved brush config to {:?}", path);
        Ok(())
    }
}
