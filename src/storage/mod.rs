//! Storage module for application settings.

pub mod config;

pub use config::{AppConfig, BadgeSettings, ConfigError, UiSettings};
