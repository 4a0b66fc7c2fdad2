// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, loaded from a
//! `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Language and theme mode
//! - `[catalog]` - Manifest and image locations
//! - `[gesture]` - Swipe recognition thresholds
//! - `[viewer]` - Which details the fabric slides show
//!
//! # Path Resolution
//!
//! The config file location can be customized for testing or portable deployments:
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. Pass `--config-dir` on the command line
//! 3. Set `SWATCHBOOK_CONFIG_DIR` environment variable
//! 4. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use swatchbook::config;
//!
//! let (config, warning) = config::load();
//! if let Some(key) = warning {
//!     eprintln!("settings.toml ignored: {key}");
//! }
//! println!("manifest: {}", config.catalog.manifest_location());
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::catalog::Location;
use crate::error::{Error, Result};
use crate::navigation::GestureConfig;
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "fr").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Application theme mode (light, dark, or system).
    #[serde(default, deserialize_with = "deserialize_theme_mode")]
    pub theme_mode: ThemeMode,
}

/// Where the manifest and images come from.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CatalogConfig {
    /// Manifest URL or path.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub manifest: Option<String>,

    /// Image base URL or directory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_base: Option<String>,

    /// Splash background, relative to the image base.
    #[serde(default = "default_splash_image")]
    pub splash_image: String,

    /// Intro diagram, relative to the image base.
    #[serde(default = "default_intro_image")]
    pub intro_image: String,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            manifest: None,
            image_base: None,
            splash_image: default_splash_image(),
            intro_image: default_intro_image(),
        }
    }
}

impl CatalogConfig {
    #[must_use]
    pub fn manifest_location(&self) -> Location {
        Location::parse(self.manifest.as_deref().unwrap_or(DEFAULT_MANIFEST))
    }

    #[must_use]
    pub fn image_base_location(&self) -> Location {
        Location::parse(self.image_base.as_deref().unwrap_or(DEFAULT_IMAGE_BASE))
    }
}

/// Swipe recognition thresholds.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GestureSettings {
    #[serde(
        default = "default_horizontal_threshold",
        skip_serializing_if = "Option::is_none"
    )]
    pub horizontal_threshold: Option<f32>,

    #[serde(
        default = "default_vertical_tolerance",
        skip_serializing_if = "Option::is_none"
    )]
    pub vertical_tolerance: Option<f32>,
}

impl Default for GestureSettings {
    fn default() -> Self {
        Self {
            horizontal_threshold: default_horizontal_threshold(),
            vertical_tolerance: default_vertical_tolerance(),
        }
    }
}

impl GestureSettings {
    /// Resolves the settings into a clamped [`GestureConfig`].
    #[must_use]
    pub fn resolve(&self) -> GestureConfig {
        GestureConfig::new(
            self.horizontal_threshold
                .unwrap_or(DEFAULT_HORIZONTAL_THRESHOLD),
            self.vertical_tolerance
                .unwrap_or(DEFAULT_VERTICAL_TOLERANCE),
        )
    }
}

/// Presentation options for the fabric slides.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ViewerConfig {
    /// Show the "N in stock" line.
    #[serde(default = "default_true")]
    pub show_quantity: bool,

    /// Show the "k / n" position badge.
    #[serde(default = "default_true")]
    pub show_position: bool,

    /// Decoded images kept in memory.
    #[serde(
        default = "default_image_cache_entries",
        skip_serializing_if = "Option::is_none"
    )]
    pub image_cache_entries: Option<usize>,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            show_quantity: true,
            show_position: true,
            image_cache_entries: default_image_cache_entries(),
        }
    }
}

impl ViewerConfig {
    #[must_use]
    pub fn image_cache_capacity(&self) -> usize {
        self.image_cache_entries
            .unwrap_or(DEFAULT_IMAGE_CACHE_ENTRIES)
            .clamp(MIN_IMAGE_CACHE_ENTRIES, MAX_IMAGE_CACHE_ENTRIES)
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub catalog: CatalogConfig,

    #[serde(default)]
    pub gesture: GestureSettings,

    #[serde(default)]
    pub viewer: ViewerConfig,
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_true() -> bool {
    true
}

fn default_splash_image() -> String {
    DEFAULT_SPLASH_IMAGE.to_string()
}

fn default_intro_image() -> String {
    DEFAULT_INTRO_IMAGE.to_string()
}

fn default_horizontal_threshold() -> Option<f32> {
    Some(DEFAULT_HORIZONTAL_THRESHOLD)
}

fn default_vertical_tolerance() -> Option<f32> {
    Some(DEFAULT_VERTICAL_TOLERANCE)
}

fn default_image_cache_entries() -> Option<usize> {
    Some(DEFAULT_IMAGE_CACHE_ENTRIES)
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
        other => Err(D::Error::custom(format!("invalid theme_mode: {other}"))),
    }
}

// =============================================================================
// Config Path Resolution
// =============================================================================

fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

// =============================================================================
// Load Functions
// =============================================================================

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with the i18n key of a warning explaining what went wrong.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(err) => {
                    tracing::warn!(path = %path.display(), error = %err, "ignoring unreadable settings file");
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
// Save Functions
// =============================================================================

/// Saves configuration to a specific path. The app itself never rewrites its
/// settings; this serves tooling and tests.
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
