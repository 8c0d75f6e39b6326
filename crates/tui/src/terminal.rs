//! Terminal setup and teardown.
//!
//! The board needs raw mode, the alternate screen and mouse capture (for
//! pointer drags). Every path out of the application, including a panic,
//! has to undo all three.

use std::{
    io::{self, Stdout, Write},
    ops::{Deref, DerefMut},
};

use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use tracing::{debug, warn};

/// The terminal type used by the application.
pub type AppTerminal = Terminal<CrosstermBackend<Stdout>>;

/// Error type for terminal operations.
#[derive(Debug, thiserror::Error)]
pub enum TerminalError {
    /// Failed to initialize the terminal.
    #[error("failed to setup terminal: {0}")]
    Setup(#[source] io::Error),

    /// Failed to restore the terminal.
    #[error("failed to restore terminal: {0}")]
    Restore(#[source] io::Error),
}

/// Enters raw mode and the alternate screen with mouse capture enabled.
///
/// # Errors
///
/// Returns [`TerminalError::Setup`] if any terminal operation fails.
///
/// # Examples
///
/// ```no_run
/// use dragboard_tui::terminal;
///
/// let mut terminal = terminal::setup_terminal()?;
/// // Draw...
/// terminal::restore_terminal(&mut terminal)?;
/// # Ok::<(), dragboard_tui::terminal::TerminalError>(())
/// ```
pub fn setup_terminal() -> Result<AppTerminal, TerminalError> {
    enable_raw_mode().map_err(TerminalError::Setup)?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture).map_err(TerminalError::Setup)?;
    debug!("terminal entered raw mode with mouse capture");
    Terminal::new(CrosstermBackend::new(stdout)).map_err(TerminalError::Setup)
}

/// Leaves the alternate screen, releases the mouse and shows the cursor.
///
/// # Errors
///
/// Returns [`TerminalError::Restore`] if any terminal operation fails.
pub fn restore_terminal(terminal: &mut AppTerminal) -> Result<(), TerminalError> {
    reset(terminal.backend_mut()).map_err(TerminalError::Restore)?;
    terminal.show_cursor().map_err(TerminalError::Restore)?;
    debug!("terminal restored");
    Ok(())
}

fn reset(out: &mut impl Write) -> io::Result<()> {
    disable_raw_mode()?;
    execute!(out, DisableMouseCapture, LeaveAlternateScreen)
}

/// Installs a panic hook that restores the terminal, then chains to the
/// hook that was installed before it.
///
/// Call once at startup, before [`setup_terminal`].
pub fn install_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = reset(&mut io::stdout());
        original_hook(panic_info);
    }));
}

/// Owns the set-up terminal and restores it when dropped.
///
/// Prefer [`TerminalGuard::restore`] so errors can be reported; dropping
/// only logs them.
///
/// # Examples
///
/// ```no_run
/// use dragboard_protocol::seed::default_board;
/// use dragboard_tui::{App, terminal::TerminalGuard};
///
/// #[tokio::main]
/// async fn main() -> anyhow::Result<()> {
///     let mut terminal = TerminalGuard::new()?;
///     let result = App::new(default_board()).run(&mut terminal).await;
///     terminal.restore()?;
///     result
/// }
/// ```
#[derive(Debug)]
pub struct TerminalGuard {
    terminal: AppTerminal,
    restored: bool,
}

impl TerminalGuard {
    /// Sets up the terminal, see [`setup_terminal`].
    ///
    /// # Errors
    ///
    /// Returns [`TerminalError::Setup`] if any terminal operation fails.
    pub fn new() -> Result<Self, TerminalError> {
        Ok(Self {
            terminal: setup_terminal()?,
            restored: false,
        })
    }

    /// Restores the terminal now.
    ///
    /// # Errors
    ///
    /// Returns [`TerminalError::Restore`] if any terminal operation fails.
    pub fn restore(mut self) -> Result<(), TerminalError> {
        self.restored = true;
        restore_terminal(&mut self.terminal)
    }
}

impl Deref for TerminalGuard {
    type Target = AppTerminal;

    fn deref(&self) -> &Self::Target {
        &self.terminal
    }
}

impl DerefMut for TerminalGuard {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.terminal
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        if !self.restored
            && let Err(error) = restore_terminal(&mut self.terminal)
        {
            warn!(%error, "failed to restore terminal on drop");
        }
    }
}
