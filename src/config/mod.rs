// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, loaded from a
//! `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Language and theme mode
//! - `[playback]` - Story timing (duration, tick cadence, transition delays)
//! - `[source]` - Location of the story list
//!
//! Viewed state is never written back; [`save_to_path`] exists so a
//! default file can be generated and for tests.
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. Set `ICED_STORIES_CONFIG_DIR` environment variable
//! 3. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use iced_stories::config;
//!
//! let (config, _warning) = config::load_with_override(None);
//! let timing = config.playback.timing();
//! assert!(timing.story_duration.as_millis() > 0);
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::error::{Error, Result};
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "fr").
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

/// Story playback timing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlaybackConfig {
    /// How long each story is shown before auto-advancing (ms).
    #[serde(
        default = "default_story_duration_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub story_duration_ms: Option<u64>,

    /// Progress refresh cadence (ms).
    #[serde(
        default = "default_tick_interval_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub tick_interval_ms: Option<u64>,

    /// Pause between image ready and playback start (ms).
    #[serde(
        default = "default_settle_delay_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub settle_delay_ms: Option<u64>,

    /// Exit animation length before the viewer closes (ms).
    #[serde(
        default = "default_close_delay_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub close_delay_ms: Option<u64>,

    /// Time after which a pending image is treated as failed (seconds).
    #[serde(
        default = "default_image_load_timeout_secs",
        skip_serializing_if = "Option::is_none"
    )]
    pub image_load_timeout_secs: Option<u64>,
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            story_duration_ms: default_story_duration_ms(),
            tick_interval_ms: default_tick_interval_ms(),
            settle_delay_ms: default_settle_delay_ms(),
            close_delay_ms: default_close_delay_ms(),
            image_load_timeout_secs: default_image_load_timeout_secs(),
        }
    }
}

impl PlaybackConfig {
    /// Resolves the optional fields into clamped durations.
    #[must_use]
    pub fn timing(&self) -> PlaybackTiming {
        let story_ms = self
            .story_duration_ms
            .unwrap_or(DEFAULT_STORY_DURATION_MS)
            .clamp(MIN_STORY_DURATION_MS, MAX_STORY_DURATION_MS);
        let tick_ms = self
            .tick_interval_ms
            .unwrap_or(DEFAULT_TICK_INTERVAL_MS)
            .clamp(MIN_TICK_INTERVAL_MS, MAX_TICK_INTERVAL_MS);
        let settle_ms = self
            .settle_delay_ms
            .unwrap_or(DEFAULT_SETTLE_DELAY_MS)
            .min(MAX_SETTLE_DELAY_MS);
        let close_ms = self
            .close_delay_ms
            .unwrap_or(DEFAULT_CLOSE_DELAY_MS)
            .min(MAX_CLOSE_DELAY_MS);
        let timeout_secs = self
            .image_load_timeout_secs
            .unwrap_or(DEFAULT_IMAGE_LOAD_TIMEOUT_SECS)
            .clamp(MIN_IMAGE_LOAD_TIMEOUT_SECS, MAX_IMAGE_LOAD_TIMEOUT_SECS);

        PlaybackTiming {
            story_duration: Duration::from_millis(story_ms),
            tick_interval: Duration::from_millis(tick_ms),
            settle_delay: Duration::from_millis(settle_ms),
            close_delay: Duration::from_millis(close_ms),
            image_load_timeout: Duration::from_secs(timeout_secs),
        }
    }
}

/// Validated playback durations consumed by the story viewer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlaybackTiming {
    pub story_duration: Duration,
    pub tick_interval: Duration,
    pub settle_delay: Duration,
    pub close_delay: Duration,
    pub image_load_timeout: Duration,
}

impl Default for PlaybackTiming {
    fn default() -> Self {
        PlaybackConfig::default().timing()
    }
}

/// Where the story list comes from.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct SourceConfig {
    /// URL (`http://`, `https://`) or file path of the stories JSON.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stories: Option<String>,
}

// =============================================================================
// Main Config Struct
// =============================================================================

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    /// General application settings.
    #[serde(default)]
    pub general: GeneralConfig,

    /// Story playback timing.
    #[serde(default)]
    pub playback: PlaybackConfig,

    /// Story list location.
    #[serde(default)]
    pub source: SourceConfig,
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_theme_mode() -> ThemeMode {
    ThemeMode::System
}

fn default_story_duration_ms() -> Option<u64> {
    Some(DEFAULT_STORY_DURATION_MS)
}

fn default_tick_interval_ms() -> Option<u64> {
    Some(DEFAULT_TICK_INTERVAL_MS)
}

fn default_settle_delay_ms() -> Option<u64> {
    Some(DEFAULT_SETTLE_DELAY_MS)
}

fn default_close_delay_ms() -> Option<u64> {
    Some(DEFAULT_CLOSE_DELAY_MS)
}

fn default_image_load_timeout_secs() -> Option<u64> {
    Some(DEFAULT_IMAGE_LOAD_TIMEOUT_SECS)
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
// Load / Save
// =============================================================================

fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

/// Loads the configuration from `base_dir`, or from the default location
/// when `None`.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with an i18n key describing what went wrong.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(err) => {
                    log::warn!("Failed to load {}: {}", path.display(), err);
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

/// Saves configuration to a specific path, creating parent directories.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config).map_err(Error::from)?;
    fs::write(path, content)?;
    Ok(())
}

// =============================================================================
// Tests
// =============================================================================
