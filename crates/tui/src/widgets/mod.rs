//! Widget components for the dragboard TUI.
//!
//! Each widget is a plain function rendering state into a ratatui
//! [`Buffer`](ratatui::buffer::Buffer), which keeps them easy to test and
//! compose.
//!
//! # Modules
//!
//! - [`board`]: Renders every column and the drag overlay
//! - [`column`]: Renders one column with collapsed shared borders
//! - [`item_card`]: Renders a single card in one of its [`CardStyle`]s
//! - [`drag_overlay`]: Renders the lifted card following the pointer
//! - [`status_bar`]: Renders the footer with hints and the last action
//! - [`help`]: Renders the keybinding overlay
//!
//! # Example
//!
//! ```
//! use ratatui::buffer::Buffer;
//! use ratatui::layout::Rect;
//! use dragboard_protocol::seed::default_board;
//! use dragboard_tui::layout::BoardGeometry;
//! use dragboard_tui::widgets::{self, BoardView};
//!
//! let board = default_board();
//! let area = Rect::new(0, 0, 80, 24);
//! let geometry = BoardGeometry::compute(&board, area);
//! let mut buf = Buffer::empty(area);
//!
//! widgets::render_board(&board, &geometry, &BoardView::default(), &mut buf);
//! ```

pub mod board;
pub mod column;
pub mod drag_overlay;
pub mod help;
pub mod item_card;
pub mod status_bar;

pub use board::{BoardView, render_board};
pub use column::{ColumnHighlight, render_column};
pub use drag_overlay::render_drag_overlay;
pub use help::render_help_overlay;
pub use item_card::{CardStyle, render_item_card};
pub use status_bar::render_status_bar;
