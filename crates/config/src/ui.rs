//! Event loop and presentation options.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Default event poll timeout in milliseconds.
pub const DEFAULT_POLL_INTERVAL_MS: u64 = 100;

/// Minimum allowed poll timeout in milliseconds.
pub const MIN_POLL_INTERVAL_MS: u64 = 10;

/// Maximum allowed poll timeout in milliseconds.
pub const MAX_POLL_INTERVAL_MS: u64 = 1000;

/// Configuration for the terminal UI.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use dragboard_config::UiConfig;
///
/// let config = UiConfig::default();
/// assert_eq!(config.poll_interval(), Duration::from_millis(100));
/// assert!(!config.show_help_on_start);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UiConfig {
    /// How long the event loop waits for input before redrawing.
    #[serde(default = "default_poll_interval_ms")]
    pub poll_interval_ms: u64,

    /// Whether the help overlay is shown when the application starts.
    #[serde(default)]
    pub show_help_on_start: bool,
}

fn default_poll_interval_ms() -> u64 {
    DEFAULT_POLL_INTERVAL_MS
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            poll_interval_ms: DEFAULT_POLL_INTERVAL_MS,
            show_help_on_start: false,
        }
    }
}

impl UiConfig {
    /// Returns the poll timeout as a [`Duration`].
    #[must_use]
    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }

    /// Validates the UI configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the poll interval is outside the allowed range.
    pub fn validate(&self) -> crate::Result<()> {
        if self.poll_interval_ms < MIN_POLL_INTERVAL_MS {
            return Err(crate::ConfigError::InvalidPollInterval {
                reason: format!(
                    "interval {} is below minimum of {} ms",
                    self.poll_interval_ms, MIN_POLL_INTERVAL_MS
                ),
            });
        }

        if self.poll_interval_ms > MAX_POLL_INTERVAL_MS {
            return Err(crate::ConfigError::InvalidPollInterval {
                reason: format!(
                    "interval {} exceeds maximum of {} ms",
                    self.poll_interval_ms, MAX_POLL_INTERVAL_MS
                ),
            });
        }

        Ok(())
    }
}
