//! Application configuration.
//!
//! Stored as TOML in the platform data directory. A missing file yields the
//! defaults; the board document itself lives next to it.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::ui::theme::Theme;

/// Environment variable overriding the data directory.
pub const DATA_DIR_ENV: &str = "CLUBBOARD_DATA_DIR";

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Club identity shown in the header and footer
    pub club: ClubSettings,
    /// Theme preference
    pub theme: Theme,
    /// UI settings
    pub ui: UiSettings,
    /// Initial window geometry
    pub window: WindowSettings,
    /// Storage location settings
    pub storage: StorageSettings,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            club: ClubSettings::default(),
            theme: Theme::Dark,
            ui: UiSettings::default(),
            window: WindowSettings::default(),
            storage: StorageSettings::default(),
        }
    }
}

impl AppConfig {
    /// Directory holding the board document.
    ///
    /// `CLUBBOARD_DATA_DIR` wins over the configured override, which wins over
    /// the platform data directory.
    pub fn data_dir(&self) -> PathBuf {
        if let Some(dir) = std::env::var_os(DATA_DIR_ENV).filter(|v| !v.is_empty()) {
            return PathBuf::from(dir);
        }
        self.storage
            .data_dir
            .clone()
            .unwrap_or_else(get_data_dir)
    }
}

/// Club identity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClubSettings {
    /// Club name, shown as the window heading
    pub name: String,
    /// Short text under the name
    pub subtitle: String,
    /// Badge text; the name's initials when empty
    pub badge: String,
}

impl Default for ClubSettings {
    fn default() -> Self {
        Self {
            name: "NLA Idrettslag".to_string(),
            subtitle: "Trainings, members and news".to_string(),
            badge: "NLA".to_string(),
        }
    }
}

impl ClubSettings {
    /// Text for the header badge.
    pub fn badge_text(&self) -> String {
        let badge = self.badge.trim();
        if !badge.is_empty() {
            return badge.to_string();
        }

        self.name
            .split_whitespace()
            .filter_map(|word| word.chars().next())
            .flat_map(char::to_uppercase)
            .take(3)
            .collect()
    }

    /// Credit line for the footer.
    pub fn footer_credit(&self) -> String {
        format!("Made for {} ⚽🏐🏓", self.name)
    }
}

/// UI-related settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiSettings {
    /// Font scale multiplier
    pub font_scale: f32,
    /// Show entry timestamps in lists
    pub show_timestamps: bool,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            font_scale: 1.0,
            show_timestamps: true,
        }
    }
}

/// Initial window size in logical points.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowSettings {
    pub width: f32,
    pub height: f32,
}

impl Default for WindowSettings {
    fn default() -> Self {
        Self {
            width: 720.0,
            height: 640.0,
        }
    }
}

/// Storage location settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageSettings {
    /// Override for the document directory
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_dir: Option<PathBuf>,
}

/// Get the application data directory.
pub fn get_data_dir() -> PathBuf {
    directories::ProjectDirs::from("com", "clubboard", "ClubBoard")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Get the configuration file path.
pub fn get_config_path() -> PathBuf {
    get_data_dir().join("config.toml")
}

/// Load application configuration from the default location.
pub fn load_config() -> Result<AppConfig, ConfigError> {
    load_config_from(&get_config_path())
}

/// Load application configuration from `path`, defaulting when it is absent.
pub fn load_config_from(path: &Path) -> Result<AppConfig, ConfigError> {
    if !path.exists() {
        return Ok(AppConfig::default());
    }

    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::IoError(e.to_string()))?;

    toml::from_str(&content).map_err(|e| ConfigError::ParseError(e.to_string()))
}

/// Save application configuration to the default location.
pub fn save_config(config: &AppConfig) -> Result<(), ConfigError> {
    save_config_to(config, &get_config_path())
}

/// Save application configuration to `path`.
pub fn save_config_to(config: &AppConfig, path: &Path) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| ConfigError::IoError(e.to_string()))?;
    }

    let content =
        toml::to_string_pretty(config).map_err(|e| ConfigError::SerializeError(e.to_string()))?;

    std::fs::write(path, content).map_err(|e| ConfigError::IoError(e.to_string()))?;

    Ok(())
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    IoError(String),

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Serialize error: {0}")]
    SerializeError(String),
}
