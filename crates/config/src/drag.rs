//! Drag gesture configuration.
//!
//! A terminal reports mouse motion in whole cells, so the activation distance
//! is counted in cells: a press followed by motion shorter than this stays a
//! click.

use serde::{Deserialize, Serialize};

/// Default distance (cells) the pointer must travel before a drag starts.
pub const DEFAULT_ACTIVATION_DISTANCE: u16 = 1;

/// Largest accepted activation distance.
pub const MAX_ACTIVATION_DISTANCE: u16 = 10;

/// Configuration for drag gestures.
///
/// # Examples
///
/// ```
/// use dragboard_config::DragConfig;
///
/// let config = DragConfig::default();
/// assert_eq!(config.activation_distance, 1);
/// assert!(config.keyboard_enabled);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DragConfig {
    /// Cells the pointer must move, with the button held, before the press
    /// turns into a drag. Zero starts the drag on the first motion event.
    #[serde(default = "default_activation_distance")]
    pub activation_distance: u16,

    /// Whether cards can be picked up and moved with the keyboard.
    #[serde(default = "default_keyboard_enabled")]
    pub keyboard_enabled: bool,
}

fn default_activation_distance() -> u16 {
    DEFAULT_ACTIVATION_DISTANCE
}

fn default_keyboard_enabled() -> bool {
    true
}

impl Default for DragConfig {
    fn default() -> Self {
        Self {
            activation_distance: DEFAULT_ACTIVATION_DISTANCE,
            keyboard_enabled: true,
        }
    }
}

impl DragConfig {
    /// Validates the drag configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the activation distance exceeds
    /// [`MAX_ACTIVATION_DISTANCE`].
    pub fn validate(&self) -> crate::Result<()> {
        if self.activation_distance > MAX_ACTIVATION_DISTANCE {
            return Err(crate::ConfigError::InvalidDrag {
                reason: format!(
                    "activation distance {} exceeds maximum of {} cells",
                    self.activation_distance, MAX_ACTIVATION_DISTANCE
                ),
            });
        }

        Ok(())
    }
}
