// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and
//! saving user preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[server]` - Backend base address
//! - `[gallery]` - Grid layout (columns, tile size)
//! - `[brightness]` - Initial slider position
//!
//! # Path Resolution
//!
//! The config file location can be customized for testing or portable
//! deployments:
//! 1. Use `load_from_path()`/`save_to_path()` with an explicit path
//! 2. Set the `FRAME_REMOTE_CONFIG_DIR` environment variable
//! 3. Falls back to the platform-specific config directory

pub mod defaults;

pub use defaults::*;

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";
const APP_DIR: &str = "FrameRemote";
const CONFIG_DIR_ENV: &str = "FRAME_REMOTE_CONFIG_DIR";

/// Backend connection settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ServerConfig {
    /// Base address of the photo-frame backend, e.g. `http://192.168.1.20:5000`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            base_url: Some(DEFAULT_BASE_URL.to_string()),
        }
    }
}

/// Gallery grid layout settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GalleryConfig {
    /// Number of tile columns.
    #[serde(default = "default_columns", skip_serializing_if = "Option::is_none")]
    pub columns: Option<usize>,

    /// Edge length of a square tile, in logical pixels.
    #[serde(default = "default_tile_size", skip_serializing_if = "Option::is_none")]
    pub tile_size: Option<f32>,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            columns: Some(DEFAULT_GALLERY_COLUMNS),
            tile_size: Some(DEFAULT_TILE_SIZE),
        }
    }
}

/// Brightness slider settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BrightnessConfig {
    /// Initial slider position in percent (0-100).
    #[serde(default = "default_brightness", skip_serializing_if = "Option::is_none")]
    pub initial: Option<u8>,
}

impl Default for BrightnessConfig {
    fn default() -> Self {
        Self {
            initial: Some(DEFAULT_BRIGHTNESS),
        }
    }
}

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    /// Backend connection settings.
    #[serde(default)]
    pub server: ServerConfig,

    /// Gallery grid layout settings.
    #[serde(default)]
    pub gallery: GalleryConfig,

    /// Brightness slider settings.
    #[serde(default)]
    pub brightness: BrightnessConfig,
}

fn default_columns() -> Option<usize> {
    Some(DEFAULT_GALLERY_COLUMNS)
}

fn default_tile_size() -> Option<f32> {
    Some(DEFAULT_TILE_SIZE)
}

fn default_brightness() -> Option<u8> {
    Some(DEFAULT_BRIGHTNESS)
}

/// Returns the config file path with an optional directory override.
fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    let dir = base_dir
        .or_else(|| std::env::var(CONFIG_DIR_ENV).ok().map(PathBuf::from))
        .or_else(|| {
            dirs::config_dir().map(|mut path| {
                path.push(APP_DIR);
                path
            })
        });
    dir.map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional warning message). If loading fails,
/// returns the default config with a warning explaining what went wrong.
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
                    return (
                        Config::default(),
                        Some(format!("Could not read settings: {err}")),
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

/// Saves the configuration to the default path.
pub fn save(config: &Config) -> Result<()> {
    save_with_override(config, None)
}

/// Saves the configuration to a custom directory.
pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    if let Some(path) = get_config_path_with_override(base_dir) {
        return save_to_path(config, &path);
    }
    Ok(())
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_settings() {
        let config = Config {
            server: ServerConfig {
                base_url: Some("http://10.0.0.7:5000".to_string()),
            },
            gallery: GalleryConfig {
                columns: Some(5),
                tile_size: Some(128.0),
            },
            brightness: BrightnessConfig { initial: Some(75) },
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded.server.base_url, config.server.base_url);
        assert_eq!(loaded.gallery.columns, config.gallery.columns);
        assert_eq!(loaded.brightness.initial, config.brightness.initial);
    }

    #[test]
    fn load_from_path_invalid_toml_errors() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        match load_from_path(&config_path) {
            Err(Error::Config(message)) => assert!(message.contains("expected")),
            other => panic!("expected Config error, got {:?}", other),
        }
    }

    #[test]
    fn default_config_has_expected_values() {
        let config = Config::default();
        assert_eq!(config.server.base_url, Some(DEFAULT_BASE_URL.to_string()));
        assert_eq!(config.gallery.columns, Some(DEFAULT_GALLERY_COLUMNS));
        assert_eq!(config.gallery.tile_size, Some(DEFAULT_TILE_SIZE));
        assert_eq!(config.brightness.initial, Some(DEFAULT_BRIGHTNESS));
    }

    #[test]
    fn missing_sections_fall_back_to_defaults() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(
            &config_path,
            "[server]\nbase_url = \"http://frame.local:5000\"\n",
        )
        .expect("write partial config");

        let loaded = load_from_path(&config_path).expect("should load partial config");
        assert_eq!(
            loaded.server.base_url,
            Some("http://frame.local:5000".to_string())
        );
        assert_eq!(loaded.gallery.columns, Some(DEFAULT_GALLERY_COLUMNS));
        assert_eq!(loaded.brightness.initial, Some(DEFAULT_BRIGHTNESS));
    }

    #[test]
    fn save_with_override_and_load_with_override_round_trip() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let base_dir = temp_dir.path().to_path_buf();

        let config = Config {
            server: ServerConfig {
                base_url: Some("http://192.168.88.141:5000".to_string()),
            },
            ..Config::default()
        };

        save_with_override(&config, Some(base_dir.clone())).expect("save should succeed");
        assert!(base_dir.join("settings.toml").exists());

        let (loaded, warning) = load_with_override(Some(base_dir));
        assert!(warning.is_none(), "load should succeed without warning");
        assert_eq!(
            loaded.server.base_url,
            Some("http://192.168.88.141:5000".to_string())
        );
    }

    #[test]
    fn load_with_override_from_empty_directory_returns_default() {
        let temp_dir = tempdir().expect("failed to create temp dir");

        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert!(warning.is_none(), "should not warn for missing file");
        assert_eq!(config, Config::default());
    }

    #[test]
    fn load_with_override_from_corrupted_file_returns_default_with_warning() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let base_dir = temp_dir.path().to_path_buf();
        fs::write(base_dir.join("settings.toml"), "not = valid = toml").expect("write file");

        let (config, warning) = load_with_override(Some(base_dir));
        assert!(warning.is_some(), "should warn about parse error");
        assert_eq!(config, Config::default());
    }

    #[test]
    fn saved_config_uses_sectioned_format() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");

        save_to_path(&Config::default(), &config_path).expect("save config");
        let content = fs::read_to_string(&config_path).expect("read config");

        assert!(content.contains("[server]"), "should have [server] section");
        assert!(
            content.contains("[gallery]"),
            "should have [gallery] section"
        );
        assert!(
            content.contains("[brightness]"),
            "should have [brightness] section"
        );
    }
}
