// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, read from a
//! `settings.toml` file.
//!
//! The file is only ever read: calendar content lives in memory for the
//! session and nothing the user edits is written back.
//!
//! # Configuration Sections
//!
//! - `[general]` - Language and theme mode
//! - `[calendar]` - Initial date range, spacing and card theme
//! - `[assets]` - Flag image source, background image, fonts
//! - `[export]` - PNG export defaults
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()` with an explicit path
//! 2. `--config-dir` CLI argument or `ECON_CALENDAR_CONFIG_DIR` environment variable
//! 3. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use econ_calendar::app::config;
//!
//! // Returns the defaults and a warning key if the file is broken
//! let (config, _warning) = config::load();
//! println!("{:?}", config.calendar.date_range);
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::domain::calendar::{self, CalendarSettings, TopMargin, VerticalPadding};
use crate::error::Result;
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Enums
// =============================================================================

/// Card theme as written in the configuration file.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum CardTheme {
    #[default]
    Thai,
    Lao,
}

impl From<CardTheme> for calendar::BackgroundTheme {
    fn from(theme: CardTheme) -> Self {
        match theme {
            CardTheme::Thai => calendar::BackgroundTheme::Thai,
            CardTheme::Lao => calendar::BackgroundTheme::Lao,
        }
    }
}

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "th").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Application theme mode (light, dark, or system).
    #[serde(
        default = "default_theme_mode",
        deserialize_with = "deserialize_theme_mode"
    )]
    pub theme_mode: ThemeMode,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            language: None,
            theme_mode: default_theme_mode(),
        }
    }
}

/// Initial calendar presentation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CalendarConfig {
    /// Text of the date badge.
    #[serde(default = "default_date_range", skip_serializing_if = "Option::is_none")]
    pub date_range: Option<String>,

    /// Row padding in rem, clamped to the slider range.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vertical_padding: Option<f32>,

    /// Top margin in pixels, clamped to the slider range.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub top_margin: Option<f32>,

    /// Card theme.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background: Option<CardTheme>,
}

impl Default for CalendarConfig {
    fn default() -> Self {
        Self {
            date_range: default_date_range(),
            vertical_padding: None,
            top_margin: None,
            background: None,
        }
    }
}

/// External assets used by the card renderer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AssetsConfig {
    /// Base URL of the flag images.
    #[serde(
        default = "default_flag_base_url",
        skip_serializing_if = "Option::is_none"
    )]
    pub flag_base_url: Option<String>,

    /// Background image path. Relative paths are looked up in the config
    /// directory first, then in the working directory.
    #[serde(
        default = "default_background_image",
        skip_serializing_if = "Option::is_none"
    )]
    pub background_image: Option<PathBuf>,

    /// Timeout of one flag request, in seconds.
    #[serde(
        default = "default_request_timeout_secs",
        skip_serializing_if = "Option::is_none"
    )]
    pub request_timeout_secs: Option<u64>,

    /// Extra directory scanned for fonts in addition to the system fonts.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_dir: Option<PathBuf>,
}

impl Default for AssetsConfig {
    fn default() -> Self {
        Self {
            flag_base_url: default_flag_base_url(),
            background_image: default_background_image(),
            request_timeout_secs: default_request_timeout_secs(),
            font_dir: None,
        }
    }
}

/// PNG export settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ExportConfig {
    /// File name proposed by the save dialog.
    #[serde(default = "default_file_name", skip_serializing_if = "Option::is_none")]
    pub file_name: Option<String>,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            file_name: default_file_name(),
        }
    }
}

/// Application configuration, one struct per `settings.toml` section.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub calendar: CalendarConfig,
    #[serde(default)]
    pub assets: AssetsConfig,
    #[serde(default)]
    pub export: ExportConfig,
}

impl Config {
    /// Calendar settings a new session starts with.
    #[must_use]
    pub fn initial_settings(&self) -> CalendarSettings {
        let mut settings = CalendarSettings::default();
        if let Some(range) = &self.calendar.date_range {
            settings.date_range.clone_from(range);
        }
        if let Some(rem) = self.calendar.vertical_padding {
            settings.vertical_padding = VerticalPadding::new(rem);
        }
        if let Some(px) = self.calendar.top_margin {
            settings.top_margin = TopMargin::from_f32(px);
        }
        if let Some(theme) = self.calendar.background {
            settings.background = theme.into();
        }
        settings
    }

    #[must_use]
    pub fn flag_base_url(&self) -> &str {
        self.assets
            .flag_base_url
            .as_deref()
            .filter(|url| !url.trim().is_empty())
            .unwrap_or(DEFAULT_FLAG_BASE_URL)
    }

    /// Request timeout, clamped to a sane range.
    #[must_use]
    pub fn request_timeout(&self) -> Duration {
        let secs = self
            .assets
            .request_timeout_secs
            .unwrap_or(DEFAULT_REQUEST_TIMEOUT_SECS)
            .clamp(MIN_REQUEST_TIMEOUT_SECS, MAX_REQUEST_TIMEOUT_SECS);
        Duration::from_secs(secs)
    }

    #[must_use]
    pub fn export_file_name(&self) -> &str {
        self.export
            .file_name
            .as_deref()
            .filter(|name| !name.trim().is_empty())
            .unwrap_or(DEFAULT_EXPORT_FILE_NAME)
    }
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_theme_mode() -> ThemeMode {
    ThemeMode::System
}

fn default_date_range() -> Option<String> {
    Some(DEFAULT_DATE_RANGE.to_string())
}

fn default_flag_base_url() -> Option<String> {
    Some(DEFAULT_FLAG_BASE_URL.to_string())
}

fn default_background_image() -> Option<PathBuf> {
    Some(PathBuf::from(DEFAULT_BACKGROUND_IMAGE))
}

fn default_request_timeout_secs() -> Option<u64> {
    Some(DEFAULT_REQUEST_TIMEOUT_SECS)
}

fn default_file_name() -> Option<String> {
    Some(DEFAULT_EXPORT_FILE_NAME.to_string())
}

fn deserialize_theme_mode<'de, D>(deserializer: D) -> std::result::Result<ThemeMode, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Error;

    let raw = String::deserialize(deserializer)?;
    match raw.to_lowercase().as_str() {
        "light" => Ok(ThemeMode::Light),
        "dark" => Ok(ThemeMode::Dark),
        "system" => Ok(ThemeMode::System),
        other => Err(D::Error::custom(format!("invalid theme_mode: {}", other))),
    }
}

// =============================================================================
// Load Functions
// =============================================================================

fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with the i18n key of a warning to show.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => {
                    tracing::debug!(path = %path.display(), "configuration loaded");
                    return (config, None);
                }
                Err(err) => {
                    tracing::warn!(path = %path.display(), %err, "invalid configuration, using defaults");
                    return (
                        Config::default(),
                        Some("notification-config-load-error".to_string()),
                    );
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

// =============================================================================
// Tests
// =============================================================================
