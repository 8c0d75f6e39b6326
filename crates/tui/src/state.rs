//! Application state management.
//!
//! This module defines the state the TUI keeps between events: the board
//! store, which card is selected, the drag in progress and the status line.

use dragboard_protocol::{Board, BoardStore, Column, Item};

use crate::sensor::DragSession;

/// The application state.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Owner of the current board snapshot.
    pub store: BoardStore,
    /// Index of the focused column.
    pub selected_column: usize,
    /// Index of the selected item within the focused column, if any.
    pub selected_item: Option<usize>,
    /// Whether the help overlay is visible.
    pub help_visible: bool,
    /// The drag in progress, if any.
    pub drag: Option<DragSession>,
    /// Outcome of the last action, shown in the status bar.
    pub status: Option<String>,
}

impl AppState {
    /// Creates a new application state with the given board.
    ///
    /// Focuses the first column with nothing selected.
    ///
    /// # Examples
    ///
    /// ```
    /// use dragboard_protocol::seed::default_board;
    /// use dragboard_tui::AppState;
    ///
    /// let state = AppState::new(default_board());
    /// assert_eq!(state.selected_column, 0);
    /// assert!(state.selected_item.is_none());
    /// ```
    #[must_use]
    pub fn new(board: Board) -> Self {
        Self {
            store: BoardStore::new(board),
            selected_column: 0,
            selected_item: None,
            help_visible: false,
            drag: None,
            status: None,
        }
    }

    /// Borrows the current board.
    #[must_use]
    pub fn board(&self) -> &Board {
        self.store.board()
    }

    fn selected_column_ref(&self) -> Option<&Column> {
        self.board().column_at(self.selected_column)
    }

    /// Toggles the help overlay visibility.
    pub fn toggle_help(&mut self) {
        self.help_visible = !self.help_visible;
    }

    /// Hides the help overlay.
    pub fn dismiss_help(&mut self) {
        self.help_visible = false;
    }

    /// Moves focus to the previous column, wrapping around.
    pub fn navigate_left(&mut self) {
        let count = self.board().len();
        if count == 0 {
            return;
        }
        self.selected_column = (self.selected_column + count - 1) % count;
        self.clamp_selection();
    }

    /// Moves focus to the next column, wrapping around.
    pub fn navigate_right(&mut self) {
        let count = self.board().len();
        if count == 0 {
            return;
        }
        self.selected_column = (self.selected_column + 1) % count;
        self.clamp_selection();
    }

    /// Selects the previous item in the focused column, wrapping to the bottom.
    pub fn navigate_up(&mut self) {
        let len = self.selected_column_ref().map_or(0, Column::len);
        self.selected_item = match self.selected_item {
            _ if len == 0 => None,
            Some(idx) if idx > 0 => Some(idx - 1),
            Some(_) => Some(len - 1),
            None => Some(0),
        };
    }

    /// Selects the next item in the focused column, wrapping to the top.
    pub fn navigate_down(&mut self) {
        let len = self.selected_column_ref().map_or(0, Column::len);
        self.selected_item = match self.selected_item {
            _ if len == 0 => None,
            Some(idx) if idx + 1 < len => Some(idx + 1),
            Some(_) | None => Some(0),
        };
    }

    /// Returns the selected item, if any.
    ///
    /// # Examples
    ///
    /// ```
    /// use dragboard_protocol::seed::default_board;
    /// use dragboard_tui::AppState;
    ///
    /// let mut state = AppState::new(default_board());
    /// assert!(state.selected_item().is_none());
    ///
    /// state.navigate_down();
    /// assert_eq!(state.selected_item().unwrap().id, "item-1");
    /// ```
    #[must_use]
    pub fn selected_item(&self) -> Option<&Item> {
        let idx = self.selected_item?;
        self.selected_column_ref()?.items.get(idx)
    }

    /// Clears the current item selection.
    pub fn clear_selection(&mut self) {
        self.selected_item = None;
    }

    /// Moves the selection to the item with the given id, wherever it lives.
    ///
    /// Returns `false` and leaves the selection alone if the id is unknown.
    pub fn select_item(&mut self, id: &str) -> bool {
        let Some(column_idx) = self.board().find_column_index(Some(id)) else {
            return false;
        };
        let position = self
            .board()
            .column_at(column_idx)
            .and_then(|column| column.position(id));
        match position {
            Some(position) => {
                self.selected_column = column_idx;
                self.selected_item = Some(position);
                true
            }
            None => false,
        }
    }

    /// Replaces the board, dropping any drag and resetting the selection.
    pub fn reset(&mut self, board: Board) {
        self.store = BoardStore::new(board);
        self.drag = None;
        self.selected_column = 0;
        self.selected_item = None;
    }

    /// Sets the status line message.
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status = Some(message.into());
    }

    /// Ensures the selection is valid for the current board.
    fn clamp_selection(&mut self) {
        let count = self.board().len();
        if self.selected_column >= count {
            self.selected_column = count.saturating_sub(1);
        }
        let len = self.selected_column_ref().map_or(0, Column::len);
        if len == 0 {
            self.selected_item = None;
        } else if let Some(idx) = self.selected_item
            && idx >= len
        {
            self.selected_item = Some(len - 1);
        }
    }
}
