//! The board state cell.
//!
//! [`BoardStore`] owns the current board snapshot. Readers take cheap
//! [`Arc`] handles with [`BoardStore::snapshot`]; the drag handlers replace the
//! snapshot wholesale, so a handle taken earlier keeps seeing the board it was
//! taken from.

use std::sync::Arc;

use tracing::trace;

use crate::board::Board;
use crate::drag::{DragEndEvent, DragOverEvent, handle_drag_end, handle_drag_over};

/// Owns the current board and applies drag events to it.
///
/// # Examples
///
/// ```
/// use dragboard_protocol::{BoardStore, DragEndEvent};
/// use dragboard_protocol::seed::default_board;
///
/// let mut store = BoardStore::new(default_board());
/// let before = store.snapshot();
///
/// assert!(store.drag_end(&DragEndEvent::new("item-2", Some("item-1".into()))));
/// assert_eq!(store.revision(), 1);
///
/// // The earlier snapshot is untouched.
/// assert_eq!(before.column_at(0).unwrap().items[0].id, "item-1");
/// assert_eq!(store.board().column_at(0).unwrap().items[0].id, "item-2");
/// ```
#[derive(Debug, Clone)]
pub struct BoardStore {
    current: Arc<Board>,
    revision: u64,
}

impl BoardStore {
    /// Creates a store holding the given board.
    #[must_use]
    pub fn new(board: Board) -> Self {
        Self {
            current: Arc::new(board),
            revision: 0,
        }
    }

    /// Returns a handle to the current snapshot.
    #[must_use]
    pub fn snapshot(&self) -> Arc<Board> {
        Arc::clone(&self.current)
    }

    /// Borrows the current board.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.current
    }

    /// Number of snapshots committed since creation.
    #[must_use]
    pub const fn revision(&self) -> u64 {
        self.revision
    }

    /// Applies a drag-over event. Returns `true` if the board changed.
    pub fn drag_over(&mut self, event: &DragOverEvent) -> bool {
        let next = handle_drag_over(&self.current, event);
        self.commit(next)
    }

    /// Applies a drag-end event. Returns `true` if the board changed.
    pub fn drag_end(&mut self, event: &DragEndEvent) -> bool {
        let next = handle_drag_end(&self.current, event);
        self.commit(next)
    }

    fn commit(&mut self, next: Option<Board>) -> bool {
        match next {
            Some(board) => {
                self.current = Arc::new(board);
                self.revision += 1;
                trace!(revision = self.revision, "committed board snapshot");
                true
            }
            None => false,
        }
    }
}
