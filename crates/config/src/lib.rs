//! Configuration management for the dragboard application.
//!
//! This crate handles loading, validating, and persisting configuration
//! from JSON5 files, falling back to built-in defaults.
//!
//! # Overview
//!
//! The crate is organized into the following modules:
//!
//! - [`config`]: Core configuration struct and loading logic
//! - [`drag`]: Drag gesture tuning (activation distance, keyboard dragging)
//! - [`ui`]: Event loop and presentation options
//! - [`log`]: Log file and level
//! - [`persistence`]: Config file reading and writing
//! - [`error`]: Error types for configuration operations
//!
//! # Configuration Sources (Priority)
//!
//! The first file found wins:
//!
//! 1. Local config (`./dragboard.json5` or `./dragboard.json`)
//! 2. User config (`~/.config/dragboard/config.json5` or `~/.config/dragboard/config.json`)
//! 3. Built-in defaults
//!
//! # Example File
//!
//! ```json5
//! {
//!   drag: { activation_distance: 2 },
//!   ui: { poll_interval_ms: 50 },
//!   log: { file: "/tmp/dragboard.log", level: "debug" },
//! }
//! ```
//!
//! # Examples
//!
//! ```no_run
//! use dragboard_config::Config;
//!
//! # fn example() -> dragboard_config::Result<()> {
//! let config = Config::load()?;
//! println!("Drags start after {} cells", config.drag.activation_distance);
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod drag;
pub mod error;
pub mod log;
pub mod persistence;
pub mod ui;

// Re-export primary types at crate root for convenience
pub use config::Config;
pub use drag::DragConfig;
pub use error::{ConfigError, Result};
pub use log::LogConfig;
pub use ui::UiConfig;
