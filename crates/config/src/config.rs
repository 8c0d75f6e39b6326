//! Core configuration struct and loading logic.
//!
//! This module provides the main [`Config`] struct which aggregates all
//! configuration options for the dragboard application.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::drag::DragConfig;
use crate::error::Result;
use crate::log::LogConfig;
use crate::persistence::{find_config_file, read_config_file, write_config_file};
use crate::ui::UiConfig;

/// The main configuration struct for the dragboard application.
///
/// Every section is optional in the file and falls back to its defaults.
///
/// # Examples
///
/// ```
/// use dragboard_config::{Config, DragConfig};
///
/// let config = Config::default();
/// assert_eq!(config.drag, DragConfig::default());
///
/// let config = Config {
///     drag: DragConfig { activation_distance: 3, keyboard_enabled: false },
///     ..Config::default()
/// };
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Drag gesture tuning.
    #[serde(default)]
    pub drag: DragConfig,

    /// Terminal UI options.
    #[serde(default)]
    pub ui: UiConfig,

    /// Log file settings.
    #[serde(default)]
    pub log: LogConfig,
}

impl Config {
    /// Loads configuration from the default file locations.
    ///
    /// See [`crate::persistence`] for the search order. Returns the default
    /// configuration if no file exists.
    ///
    /// # Errors
    ///
    /// Returns an error if a file is found but cannot be read, parsed, or
    /// validated.
    pub fn load() -> Result<Self> {
        match find_config_file() {
            Some(path) => Self::load_from(path),
            None => Ok(Self::default()),
        }
    }

    /// Loads configuration from a specific file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed, or validated.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use dragboard_config::Config;
    ///
    /// # fn example() -> dragboard_config::Result<()> {
    /// let config = Config::load_from("custom-config.json5")?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let config: Config = read_config_file(path)?;
        config.validate()?;
        Ok(config)
    }

    /// Saves the configuration to a file as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub fn save_to(&self, path: impl AsRef<Path>) -> Result<()> {
        write_config_file(path, self)
    }

    /// Validates every section.
    ///
    /// # Errors
    ///
    /// Returns the first validation error found.
    ///
    /// # Examples
    ///
    /// ```
    /// use dragboard_config::{Config, UiConfig};
    ///
    /// let config = Config::default();
    /// assert!(config.validate().is_ok());
    ///
    /// let config = Config {
    ///     ui: UiConfig { poll_interval_ms: 1, ..UiConfig::default() },
    ///     ..Config::default()
    /// };
    /// assert!(config.validate().is_err());
    /// ```
    pub fn validate(&self) -> Result<()> {
        self.drag.validate()?;
        self.ui.validate()?;
        self.log.validate()?;
        Ok(())
    }
}
