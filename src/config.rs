//! # Configuration Management
//!
//! This module handles loading and parsing configuration from the sky-clock.toml file.
//! It provides the fixed location (timezone, latitude, longitude) the solar
//! calculator needs and the display preferences for the formatter.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{info, warn};

use crate::format::DisplayTimeMode;
use crate::solar::GeoConfig;

/// Default configuration file, relative to the working directory.
pub const DEFAULT_CONFIG_PATH: &str = "sky-clock.toml";

/// Errors from reading, writing or validating the configuration file.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// File could not be read or written
    #[error("config IO on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// File is not valid TOML or has the wrong shape
    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("could not serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("latitude {0} outside -90..=90")]
    InvalidLatitude(f64),

    #[error("longitude {0} outside -180..=180")]
    InvalidLongitude(f64),

    #[error("timezone offset {0} outside -12..=14 hours")]
    InvalidTimezone(f64),
}

/// Application configuration loaded from sky-clock.toml
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    /// Location used for sunrise/sunset and moon hemisphere
    pub location: GeoConfig,
    /// Display preferences
    #[serde(default)]
    pub display: DisplayConfig,
}

/// Display configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DisplayConfig {
    /// 12-hour or 24-hour clock, stands in for the host preference
    #[serde(default)]
    pub time_mode: DisplayTimeMode,
    /// Text between sunrise and sunset in the paired field
    #[serde(default = "default_separator")]
    pub range_separator: String,
}

fn default_separator() -> String {
    " - ".to_string()
}

impl Default for DisplayConfig {
    fn default() -> Self {
        DisplayConfig {
            time_mode: DisplayTimeMode::TwelveHour,
            range_separator: default_separator(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            location: GeoConfig {
                name: "Portland, ME".to_string(),
                timezone_offset: -5.0,
                latitude: 43.66,
                longitude: 70.25, // west
            },
            display: DisplayConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from sky-clock.toml
    /// Falls back to default configuration if file doesn't exist or is invalid
    pub fn load() -> Self {
        Self::load_from_path(DEFAULT_CONFIG_PATH)
    }

    /// Load configuration from specified path
    /// Falls back to default configuration if file doesn't exist or is invalid
    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Self {
        match Self::try_load_from_path(&path) {
            Ok(config) => {
                info!(location = %config.location.name, "loaded configuration");
                config
            }
            Err(ConfigError::Io { path, .. }) => {
                info!(path = %path.display(), "no config file found, using default location");
                Self::default()
            }
            Err(e) => {
                warn!(error = %e, "invalid config file, using default location");
                Self::default()
            }
        }
    }

    /// Load and validate configuration, reporting every failure.
    pub fn try_load_from_path<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Config = toml::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that the location is physically meaningful.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let loc = &self.location;
        if !(-90.0..=90.0).contains(&loc.latitude) {
            return Err(ConfigError::InvalidLatitude(loc.latitude));
        }
        if !(-180.0..=180.0).contains(&loc.longitude) {
            return Err(ConfigError::InvalidLongitude(loc.longitude));
        }
        if !(-12.0..=14.0).contains(&loc.timezone_offset) {
            return Err(ConfigError::InvalidTimezone(loc.timezone_offset));
        }
        Ok(())
    }

    /// Save current configuration as pretty TOML
    pub fn save_to_path<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let path = path.as_ref();
        let contents = toml::to_string_pretty(self)?;
        fs::write(path, contents).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        info!(path = %path.display(), "configuration saved");
        Ok(())
    }
}
