//! Logging configuration.
//!
//! The terminal UI owns stdout and stderr, so logs only go to a file. With
//! no `file` set, logging is off.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Levels accepted in `level`.
pub const LOG_LEVELS: &[&str] = &["error", "warn", "info", "debug", "trace"];

/// Configuration for the log file.
///
/// # Examples
///
/// ```
/// use dragboard_config::LogConfig;
///
/// let config = LogConfig::default();
/// assert!(config.file.is_none());
/// assert_eq!(config.level, "info");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogConfig {
    /// File to append log lines to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,

    /// Minimum level written, or a full filter directive such as
    /// `"dragboard_protocol=debug,info"`.
    #[serde(default = "default_level")]
    pub level: String,
}

fn default_level() -> String {
    "info".to_string()
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            file: None,
            level: default_level(),
        }
    }
}

impl LogConfig {
    /// Validates the log configuration.
    ///
    /// Plain level names are checked against [`LOG_LEVELS`]; directives
    /// containing `=` or `,` are left to the subscriber to parse.
    ///
    /// # Errors
    ///
    /// Returns an error for an empty or unknown plain level.
    pub fn validate(&self) -> crate::Result<()> {
        let level = self.level.trim();
        if level.contains('=') || level.contains(',') {
            return Ok(());
        }
        if LOG_LEVELS.contains(&level.to_ascii_lowercase().as_str()) {
            Ok(())
        } else {
            Err(crate::ConfigError::InvalidLogLevel(self.level.clone()))
        }
    }
}
