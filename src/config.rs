//! Application configuration.

use crate::consts::cli_consts::{loader::GATE_DURATION_MS, ui::DEFAULT_TICK_RATE_MS};
use crate::content::hero::BACKGROUND_VIDEO;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Config I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid config file: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Could not determine the home directory")]
    NoHome,
}

/// Whether the background video may start with sound.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default, strum::Display)]
pub enum AutoplayPolicy {
    #[default]
    Allow,
    /// Only muted playback is permitted.
    RequireMuted,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    pub with_background_color: bool,
    /// How long the loading gate holds the splash screen.
    pub splash_duration_ms: u64,
    pub tick_rate_ms: u64,
    pub background_media: PathBuf,
    pub background_muted: bool,
    pub autoplay: AutoplayPolicy,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            with_background_color: true,
            splash_duration_ms: GATE_DURATION_MS,
            tick_rate_ms: DEFAULT_TICK_RATE_MS,
            background_media: PathBuf::from(BACKGROUND_VIDEO),
            background_muted: true,
            autoplay: AutoplayPolicy::default(),
        }
    }
}

impl Config {
    /// Loads configuration from a JSON file at the given path. Missing fields
    /// take their default values.
    ///
    /// # Errors
    /// Returns a `ConfigError` if reading from file fails or JSON is invalid.
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let buf = fs::read(path)?;
        let config: Config = serde_json::from_slice(&buf)?;
        Ok(config)
    }

    /// Loads the file at `path` if it exists, defaults otherwise.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load_from_file(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Removes the config file. A missing file is not an error.
    pub fn clear(path: &Path) -> Result<(), ConfigError> {
        match fs::remove_file(path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

/// Path of the config file, `~/.surf/config.json`.
pub fn get_config_path() -> Result<PathBuf, ConfigError> {
    let home_path = home::home_dir().ok_or(ConfigError::NoHome)?;
    Ok(home_path.join(".surf").join("config.json"))
}
