//! Configuration management for quizforge

use std::path::PathBuf;

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::bank::Level;

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Level pre-selected when the form opens
    pub default_level: Level,

    /// Count pre-filled when the form opens
    pub default_count: usize,

    /// Vim-style movement keys in the TUI
    pub vim_mode: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self { default_level: Level::Recall, default_count: 5, vim_mode: true }
    }
}

impl Config {
    /// Load configuration from disk, or create default if not exists
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if config_path.exists() {
            let contents = std::fs::read_to_string(&config_path)
                .with_context(|| format!("Failed to read config from {:?}", config_path))?;
            serde_json::from_str(&contents).with_context(|| "Failed to parse config.json")
        } else {
            let config = Self::default();
            config.save()?;
            Ok(config)
        }
    }

    /// Save configuration to disk
    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path()?;

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory {:?}", parent))?;
        }

        let contents =
            serde_json::to_string_pretty(self).with_context(|| "Failed to serialize config")?;

        std::fs::write(&config_path, contents)
            .with_context(|| format!("Failed to write config to {:?}", config_path))?;

        Ok(())
    }

    /// Get the path to the config file
    pub fn config_path() -> Result<PathBuf> {
        let proj_dirs = ProjectDirs::from("", "", "quizforge")
            .context("Failed to determine config directory")?;
        Ok(proj_dirs.config_dir().join("config.json"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_starts_at_recall() {
        let config = Config::default();
        assert_eq!(config.default_level, Level::Recall);
        assert_eq!(config.default_count, 5);
    }

    #[test]
    fn default_config_has_vim_mode_enabled() {
        let config = Config::default();
        assert!(config.vim_mode);
    }

    #[test]
    fn config_serializes_to_json() {
        let config = Config::default();
        let json = serde_json::to_string(&config).unwrap();
        assert!(json.contains("Recall"));
    }

    #[test]
    fn config_deserializes_from_json() {
        let json = r#"{"default_level":"Troubleshooting","default_count":3,"vim_mode":false}"#;
        let config: Config = serde_json::from_str(json).unwrap();
        assert_eq!(config.default_level, Level::Troubleshooting);
        assert_eq!(config.default_count, 3);
        assert!(!config.vim_mode);
    }
}
