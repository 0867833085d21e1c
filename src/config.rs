use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::content::section::Section;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Read(#[from] std::io::Error),
    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_theme")]
    pub theme: String,
    #[serde(default = "default_start_section")]
    pub start_section: String,
}

fn default_theme() -> String {
    "terminal-default".to_string()
}
fn default_start_section() -> String {
    Section::Overview.as_key().to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: default_theme(),
            start_section: default_start_section(),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path())
    }

    pub fn save(&self) -> Result<(), ConfigError> {
        self.save_to(&Self::config_path())
    }

    fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            let content = fs::read_to_string(path)?;
            let mut config: Config = toml::from_str(&content)?;
            config.normalize_start_section();
            Ok(config)
        } else {
            Ok(Config::default())
        }
    }

    fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("shxhelp")
            .join("config.toml")
    }

    /// Reset `start_section` to the default when it names no known section.
    /// Call after deserialization so stale keys from old configs can't leak
    /// into the UI.
    pub fn normalize_start_section(&mut self) {
        if Section::from_key(&self.start_section).is_none() {
            self.start_section = default_start_section();
        }
    }

    pub fn start_section(&self) -> Section {
        Section::from_key(&self.start_section).unwrap_or(Section::Overview)
    }
}
