//! Configuration management for the application.
//!
//! This module handles loading, validating, and saving navigation settings
//! in TOML format with platform-specific directory resolution.

use anyhow::{Context, Result};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::constants::{APP_CONFIG_DIR_NAME, CONFIG_DIR_ENV};
use crate::models::{ColorMode, RgbaColor};

/// Navigation menu appearance settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigationConfig {
    /// Color style used when none is given explicitly
    #[serde(default = "default_color_style")]
    pub color_style: ColorMode,
    /// Brand color the menu palette is derived from
    #[serde(default = "default_brand_color")]
    pub brand_color: RgbaColor,
}

/// Default color style (light chrome)
fn default_color_style() -> ColorMode {
    ColorMode::Light
}

/// Default brand color (#553DE9)
fn default_brand_color() -> RgbaColor {
    RgbaColor::new(0x55, 0x3D, 0xE9)
}

impl Default for NavigationConfig {
    fn default() -> Self {
        Self {
            color_style: default_color_style(),
            brand_color: default_brand_color(),
        }
    }
}

/// Route path settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoutesConfig {
    /// Application slug used in viewer URLs (`/app/{app_slug}/...`)
    #[serde(default = "default_app_slug")]
    pub app_slug: String,
}

/// Default application slug
fn default_app_slug() -> String {
    "application".to_string()
}

impl Default for RoutesConfig {
    fn default() -> Self {
        Self {
            app_slug: default_app_slug(),
        }
    }
}

/// Returns an error unless `slug` is a lowercase URL slug (`[a-z0-9-]+`).
pub fn validate_app_slug(slug: &str) -> Result<()> {
    let slug_regex = Regex::new(r"^[a-z0-9]+(?:-[a-z0-9]+)*$").context("Invalid slug pattern")?;
    if !slug_regex.is_match(slug) {
        anyhow::bail!(
            "Invalid app slug '{slug}'. Use lowercase letters, digits and single hyphens (e.g. 'my-app')"
        );
    }
    Ok(())
}

/// Application configuration.
///
/// # File Location
///
/// - `$NAVMENU_CONFIG_DIR/config.toml` when the variable is set
/// - Linux: `~/.config/Navmenu/config.toml`
/// - macOS: `~/Library/Application Support/Navmenu/config.toml`
/// - Windows: `%APPDATA%\Navmenu\config.toml`
///
/// # Validation
///
/// - `routes.app_slug` must be a lowercase URL slug
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Config {
    /// Navigation menu appearance
    #[serde(default)]
    pub navigation: NavigationConfig,
    /// Route path generation
    #[serde(default)]
    pub routes: RoutesConfig,
}

impl Config {
    /// Creates a new Config with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Checks if the config file exists on disk.
    #[must_use]
    pub fn exists() -> bool {
        Self::config_file_path()
            .map(|path| path.exists())
            .unwrap_or(false)
    }

    /// Gets the config directory path.
    ///
    /// Honors `NAVMENU_CONFIG_DIR`, otherwise uses the platform config directory.
    pub fn config_dir() -> Result<PathBuf> {
        if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV).filter(|dir| !dir.is_empty()) {
            return Ok(PathBuf::from(dir));
        }

        let config_dir = dirs::config_dir()
            .context("Failed to determine config directory")?
            .join(APP_CONFIG_DIR_NAME);

        Ok(config_dir)
    }

    /// Gets the full path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Loads configuration from the config file.
    ///
    /// If the file doesn't exist, returns default configuration.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_file_path()?)
    }

    /// Loads configuration from an explicit path.
    ///
    /// If the file doesn't exist, returns default configuration.
    pub fn load_from(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            return Ok(Self::new());
        }

        let content = fs::read_to_string(config_path).context(format!(
            "Failed to read config file: {}",
            config_path.display()
        ))?;

        let config: Self = toml::from_str(&content).context(format!(
            "Failed to parse config file: {}",
            config_path.display()
        ))?;

        config.validate()?;
        Ok(config)
    }

    /// Saves configuration to the config file using atomic write.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_file_path()?)
    }

    /// Saves configuration to an explicit path using atomic write.
    ///
    /// Uses temp file + rename pattern for atomic writes.
    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        self.validate()?;

        // Ensure config directory exists
        if let Some(config_dir) = config_path.parent() {
            fs::create_dir_all(config_dir).context(format!(
                "Failed to create config directory: {}",
                config_dir.display()
            ))?;
        }

        // Serialize to TOML
        let content = toml::to_string_pretty(self).context("Failed to serialize configuration")?;

        let temp_path = config_path.with_extension("toml.tmp");

        // Write to temp file
        fs::write(&temp_path, content).context(format!(
            "Failed to write temp config file: {}",
            temp_path.display()
        ))?;

        // Atomic rename
        fs::rename(&temp_path, config_path).context(format!(
            "Failed to rename temp config file to: {}",
            config_path.display()
        ))?;

        Ok(())
    }

    /// Validates configuration values.
    pub fn validate(&self) -> Result<()> {
        validate_app_slug(&self.routes.app_slug)
    }
}
