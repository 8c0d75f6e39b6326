//! Input messages consumed by the terminal app.

use serde::{Deserialize, Serialize};

/// A user action, decoded from a key press or a left-button mouse event.
///
/// Pointer variants carry terminal cell coordinates.
///
/// # Examples
///
/// ```
/// use dragboard_protocol::Message;
///
/// let msg = Message::NavigateRight;
/// assert!(msg.is_navigation());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Message {
    /// Move selection (or the held card) to the left column.
    NavigateLeft,
    /// Move selection (or the held card) to the right column.
    NavigateRight,
    /// Move selection (or the held card) up within the column.
    NavigateUp,
    /// Move selection (or the held card) down within the column.
    NavigateDown,
    /// Pick up the selected card, or drop the held one.
    Select,
    /// Cancel the current drag, dismiss help, or clear the selection.
    Escape,
    /// Quit the application.
    Quit,
    /// Restore the initial board.
    Reset,
    /// Toggle help overlay.
    ToggleHelp,
    /// Left mouse button pressed.
    PointerDown {
        /// Terminal column of the pointer.
        column: u16,
        /// Terminal row of the pointer.
        row: u16,
    },
    /// Pointer moved with the left button held.
    PointerMove {
        /// Terminal column of the pointer.
        column: u16,
        /// Terminal row of the pointer.
        row: u16,
    },
    /// Left mouse button released.
    PointerUp {
        /// Terminal column of the pointer.
        column: u16,
        /// Terminal row of the pointer.
        row: u16,
    },
}

impl Message {
    /// Returns `true` if this message is a navigation action.
    ///
    /// # Examples
    ///
    /// ```
    /// use dragboard_protocol::Message;
    ///
    /// assert!(Message::NavigateLeft.is_navigation());
    /// assert!(Message::NavigateUp.is_navigation());
    /// assert!(!Message::Select.is_navigation());
    /// ```
    #[must_use]
    pub const fn is_navigation(self) -> bool {
        matches!(
            self,
            Self::NavigateLeft | Self::NavigateRight | Self::NavigateUp | Self::NavigateDown
        )
    }
}
