// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Language and theme mode
//!
//! # Path Resolution
//!
//! The config file location can be customized for testing or portable deployments:
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. Set `VORTEX_CONFIG_DIR` environment variable
//! 3. Falls back to platform-specific config directory
//!
//! Corrupt files and unrecognized stored values are never surfaced as user
//! errors: loading falls back to defaults and reports a warning key.

use crate::error::Result;
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Deserializer, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "VortexAgency";
const CONFIG_DIR_ENV: &str = "VORTEX_CONFIG_DIR";

/// Translation key reported when a config file exists but cannot be read.
pub const LOAD_WARNING_KEY: &str = "config-load-warning";

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct GeneralConfig {
    /// UI language code (e.g. "en", "ru").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Application theme mode (light or dark). Absent means "follow the
    /// system theme at startup".
    #[serde(
        default,
        deserialize_with = "deserialize_theme_mode",
        skip_serializing_if = "Option::is_none"
    )]
    pub theme_mode: Option<ThemeMode>,
}

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct Config {
    /// General application settings.
    #[serde(default)]
    pub general: GeneralConfig,
}

/// Tolerant theme-mode deserializer: any unrecognized stored value is
/// treated as absent rather than failing the whole config load.
fn deserialize_theme_mode<'de, D>(deserializer: D) -> std::result::Result<Option<ThemeMode>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    Ok(raw.as_deref().and_then(|value| match value {
        "light" => Some(ThemeMode::Light),
        "dark" => Some(ThemeMode::Dark),
        _ => None,
    }))
}

fn config_path() -> Option<PathBuf> {
    if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
        return Some(PathBuf::from(dir).join(CONFIG_FILE));
    }
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

/// Loads the configuration, falling back to defaults.
///
/// The second element is a warning key (for the diagnostics channel) when a
/// config file exists but could not be read; an absent file is not a warning.
pub fn load() -> (Config, Option<&'static str>) {
    match config_path() {
        Some(path) if path.exists() => load_from_path(&path),
        _ => (Config::default(), None),
    }
}

pub fn save(config: &Config) -> Result<()> {
    if let Some(path) = config_path() {
        return save_to_path(config, &path);
    }
    Ok(())
}

pub fn load_from_path(path: &Path) -> (Config, Option<&'static str>) {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(_) => return (Config::default(), Some(LOAD_WARNING_KEY)),
    };
    match toml::from_str(&content) {
        Ok(config) => (config, None),
        Err(_) => (Config::default(), Some(LOAD_WARNING_KEY)),
    }
}

pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_preferences() {
        let config = Config {
            general: GeneralConfig {
                language: Some("ru".to_string()),
                theme_mode: Some(ThemeMode::Dark),
            },
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let (loaded, warning) = load_from_path(&config_path);

        assert!(warning.is_none());
        assert_eq!(loaded, config);
    }

    #[test]
    fn load_from_path_returns_default_and_warning_on_invalid_toml() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        let (loaded, warning) = load_from_path(&config_path);
        assert_eq!(warning, Some(LOAD_WARNING_KEY));
        assert!(loaded.general.language.is_none());
    }

    #[test]
    fn unknown_theme_mode_string_is_treated_as_absent() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "[general]\ntheme_mode = \"purple\"\n")
            .expect("failed to write config");

        let (loaded, warning) = load_from_path(&config_path);
        assert!(warning.is_none());
        assert!(loaded.general.theme_mode.is_none());
    }

    #[test]
    fn theme_mode_round_trips_through_lowercase_strings() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "[general]\ntheme_mode = \"light\"\n")
            .expect("failed to write config");

        let (loaded, _) = load_from_path(&config_path);
        assert_eq!(loaded.general.theme_mode, Some(ThemeMode::Light));
    }

    #[test]
    fn save_to_path_creates_parent_directories() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let nested_dir = temp_dir.path().join("deep").join("path");
        let config_path = nested_dir.join("settings.toml");

        save_to_path(&Config::default(), &config_path).expect("save should create directories");
        assert!(config_path.exists());
    }

    #[test]
    fn default_config_has_no_persisted_preferences() {
        let config = Config::default();
        assert!(config.general.language.is_none());
        assert!(config.general.theme_mode.is_none());
    }
}
