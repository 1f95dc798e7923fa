//! Application configuration.
//!
//! Loaded from `config.toml` in the platform data directory. Only display and
//! badge preferences live here; tracker data is never written to disk.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::tracker::GoalBadgePolicy;
use crate::ui::screens::Screen;
use crate::ui::theme::Theme;

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Application version that last wrote the file
    pub version: String,
    /// UI settings
    pub ui: UiSettings,
    /// Badge settings
    pub badges: BadgeSettings,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            ui: UiSettings::default(),
            badges: BadgeSettings::default(),
        }
    }
}

impl AppConfig {
    /// Screen to open on startup. Unknown selectors fall back to Home.
    pub fn start_screen(&self) -> Screen {
        self.ui.start_screen.parse().unwrap_or_else(|e| {
            tracing::warn!("Ignoring start_screen setting: {}", e);
            Screen::default()
        })
    }
}

/// Accepted range for the UI zoom factor.
const FONT_SCALE_RANGE: (f32, f32) = (0.5, 3.0);

/// UI-related settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiSettings {
    /// Color theme
    pub theme: Theme,
    /// Font scale multiplier
    pub font_scale: f32,
    /// Selector of the screen shown on startup
    pub start_screen: String,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            theme: Theme::Dark,
            font_scale: 1.0,
            start_screen: Screen::Home.as_str().to_string(),
        }
    }
}

impl UiSettings {
    /// Zoom factor to hand to egui.
    ///
    /// Non-finite values fall back to 1.0 and the rest is clamped to a usable range.
    pub fn zoom_factor(&self) -> f32 {
        if !self.font_scale.is_finite() {
            tracing::warn!("Ignoring font_scale setting: {}", self.font_scale);
            return 1.0;
        }
        let (min, max) = FONT_SCALE_RANGE;
        self.font_scale.clamp(min, max)
    }
}

/// Badge-related settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BadgeSettings {
    /// Whether re-completing a goal awards another badge
    pub goal_policy: GoalBadgePolicy,
}

/// Get the application data directory.
pub fn get_data_dir() -> PathBuf {
    directories::ProjectDirs::from("com", "fittrack", "FitTrack")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Get the configuration file path.
pub fn get_config_path() -> PathBuf {
    get_data_dir().join("config.toml")
}

/// Load configuration from a specific file. A missing file yields defaults.
pub fn load_config_from(path: &Path) -> Result<AppConfig, ConfigError> {
    if !path.exists() {
        tracing::debug!("No config at {}, using defaults", path.display());
        return Ok(AppConfig::default());
    }

    let content =
        std::fs::read_to_string(path).map_err(|e| ConfigError::Io(e.to_string()))?;

    toml::from_str(&content).map_err(|e| ConfigError::Parse(e.to_string()))
}

/// Save configuration to a specific file.
pub fn save_config_to(path: &Path, config: &AppConfig) -> Result<(), ConfigError> {
    // Ensure parent directory exists
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| ConfigError::Io(e.to_string()))?;
    }

    let content =
        toml::to_string_pretty(config).map_err(|e| ConfigError::Serialize(e.to_string()))?;

    std::fs::write(path, content).map_err(|e| ConfigError::Io(e.to_string()))?;

    Ok(())
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(String),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Serialize error: {0}")]
    Serialize(String),
}
