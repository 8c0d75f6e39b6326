//! Shared protocol types for the dragboard application.
//!
//! This crate defines the board model and the reconciliation logic that
//! keeps it consistent while cards are dragged around.
//!
//! # Overview
//!
//! The crate is organized into the following modules:
//!
//! - [`item`]: Identifiers and the `Item` struct
//! - [`board`]: Columns, the `Board` snapshot, and column lookup
//! - [`drag`]: Drag events and the two reconciliation handlers
//! - [`store`]: The board state cell
//! - [`seed`]: The initial board
//! - [`message`]: TUI event messages
//! - [`error`]: Error types for protocol operations
//!
//! # Examples
//!
//! Moving a card to another column, then reordering it there:
//!
//! ```
//! use dragboard_protocol::{BoardStore, Delta, DragEndEvent, DragOverEvent, Id};
//! use dragboard_protocol::seed::default_board;
//!
//! let mut store = BoardStore::new(default_board());
//!
//! // While dragging, item-1 crosses into column-2 above item-3.
//! store.drag_over(&DragOverEvent::new("item-1", Some(Id::from("item-3")), Delta::new(12, 0)));
//! // Released over item-4: settle its position within column-2.
//! store.drag_end(&DragEndEvent::new("item-1", Some(Id::from("item-4"))));
//!
//! let column = store.board().find_column(Some("item-1")).unwrap();
//! let ids: Vec<_> = column.items.iter().map(|i| i.id.as_str()).collect();
//! assert_eq!(ids, ["item-3", "item-4", "item-1"]);
//! ```

pub mod board;
pub mod drag;
pub mod error;
pub mod item;
pub mod message;
pub mod seed;
pub mod store;

// Re-export primary types at crate root for convenience
pub use board::{Board, Column};
pub use drag::{Delta, DragEndEvent, DragOverEvent, handle_drag_end, handle_drag_over};
pub use error::{ProtocolError, Result};
pub use item::{Id, Item};
pub use message::Message;
pub use store::BoardStore;
