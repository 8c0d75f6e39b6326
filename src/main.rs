//! dragboard - a terminal Kanban board with drag-and-drop cards.
//!
//! This is the main binary that launches the TUI application.

use std::{fs::OpenOptions, sync::Mutex};

use anyhow::Context;
use dragboard_config::{Config, LogConfig};
use dragboard_protocol::seed::default_board;
use dragboard_tui::{App, terminal};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Sends logs to the configured file. Without one, nothing is installed
/// since the terminal belongs to the UI.
fn init_logging(config: &LogConfig) -> anyhow::Result<()> {
    let Some(path) = &config.file else {
        return Ok(());
    };

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("failed to open log file {}", path.display()))?;
    let filter = EnvFilter::try_new(&config.level)
        .with_context(|| format!("invalid log level {:?}", config.level))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::load().context("failed to load configuration")?;
    init_logging(&config.log)?;
    info!(version = env!("CARGO_PKG_VERSION"), "starting dragboard");

    // Before the terminal is touched.
    terminal::install_panic_hook();

    let mut terminal = terminal::TerminalGuard::new()?;
    let mut app = App::with_config(default_board(), config);

    let result = app.run(&mut terminal).await;

    // Always restore terminal, even if app.run() failed
    terminal.restore()?;
    info!("dragboard exited");

    result
}
