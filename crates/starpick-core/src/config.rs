// SPDX-License-Identifier: Apache-2.0

//! Configuration management for starpick.
//!
//! Provides layered configuration from files and environment variables.
//! Uses XDG-compliant paths with environment variable support.
//!
//! # Configuration Sources (in priority order)
//!
//! 1. Environment variables (prefix: `STARPICK_`)
//! 2. Config file: `~/.config/starpick/config.toml`
//! 3. Built-in defaults
//!
//! # Examples
//!
//! ```bash
//! # Point at a snapshot elsewhere via environment variable
//! STARPICK_SNAPSHOT__PATH=~/data/starred_repos.json starpick
//! ```

use std::path::PathBuf;

use config::{Config, Environment, File};
use serde::Deserialize;

use crate::error::StarpickError;

/// Conventional name of the snapshot written by the fetch tool.
pub const DEFAULT_SNAPSHOT_FILE: &str = "starred_repos.json";

/// Application configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Snapshot location.
    pub snapshot: SnapshotConfig,
    /// Defaults for picking.
    pub pick: PickConfig,
    /// UI preferences.
    pub ui: UiConfig,
    /// Browser launcher settings.
    pub browser: BrowserConfig,
}

/// Snapshot settings.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct SnapshotConfig {
    /// Path to the starred repositories snapshot, relative to the working directory.
    pub path: PathBuf,
}

impl Default for SnapshotConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_SNAPSHOT_FILE),
        }
    }
}

/// Defaults applied when the matching CLI flag is absent.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct PickConfig {
    /// Number of repositories to pick.
    pub count: u32,
    /// Keep archived repositories eligible.
    pub include_archived: bool,
}

impl Default for PickConfig {
    fn default() -> Self {
        Self {
            count: 1,
            include_archived: false,
        }
    }
}

/// UI preferences.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Enable colored output.
    pub color: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self { color: true }
    }
}

/// Browser launcher settings.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct BrowserConfig {
    /// Program used to open URLs instead of the platform default.
    pub command: Option<String>,
}

/// Returns the starpick configuration directory.
///
/// Respects the `XDG_CONFIG_HOME` environment variable if set,
/// otherwise defaults to `~/.config/starpick`.
#[must_use]
pub fn config_dir() -> PathBuf {
    if let Ok(xdg_config) = std::env::var("XDG_CONFIG_HOME")
        && !xdg_config.is_empty()
    {
        return PathBuf::from(xdg_config).join("starpick");
    }
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config")
        .join("starpick")
}

/// Returns the path to the configuration file.
#[must_use]
pub fn config_file_path() -> PathBuf {
    config_dir().join("config.toml")
}

/// Load application configuration.
///
/// Loads from config file (if exists) and environment variables.
/// Environment variables use the prefix `STARPICK_` and double underscore
/// for nested keys (e.g., `STARPICK_PICK__COUNT`).
///
/// # Errors
///
/// Returns `StarpickError::Config` if the config file exists but is invalid.
pub fn load_config() -> Result<AppConfig, StarpickError> {
    let config_path = config_file_path();

    let config = Config::builder()
        // Load from config file (optional - may not exist)
        .add_source(File::with_name(config_path.to_string_lossy().as_ref()).required(false))
        // Override with environment variables
        .add_source(
            Environment::with_prefix("STARPICK")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    let app_config: AppConfig = config.try_deserialize()?;

    Ok(app_config)
}
