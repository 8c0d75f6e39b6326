//! Terminal UI for dragboard.
//!
//! This crate renders a Kanban board with ratatui and lets cards be dragged
//! between and within columns, with the mouse or from the keyboard.
//!
//! # Overview
//!
//! - [`app`]: Main application struct and run loop
//! - [`state`]: Selection, help and drag state around the board store
//! - [`layout`]: Board geometry shared by rendering and hit-testing
//! - [`collision`]: Closest-corners collision detection
//! - [`sensor`]: Pointer and keyboard drag sensors
//! - [`event`]: Terminal events to [`Message`](dragboard_protocol::Message)s
//! - [`terminal`]: Terminal setup, teardown and panic handling
//! - [`widgets`]: Rendering functions
//!
//! # Example
//!
//! ```no_run
//! use dragboard_protocol::seed::default_board;
//! use dragboard_tui::{App, terminal};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     terminal::install_panic_hook();
//!     let mut terminal = terminal::setup_terminal()?;
//!
//!     let mut app = App::new(default_board());
//!     let result = app.run(&mut terminal).await;
//!
//!     terminal::restore_terminal(&mut terminal)?;
//!     result
//! }
//! ```

pub mod app;
pub mod collision;
pub mod event;
pub mod layout;
pub mod sensor;
pub mod state;
pub mod terminal;
pub mod widgets;

#[cfg(test)]
pub(crate) mod test_utils;

pub use app::App;
pub use state::AppState;
