//! Terminal setup and teardown.
//!
//! The tag screen needs raw mode, the alternate screen and mouse capture
//! (press, drag and release reporting). [`setup_terminal`] turns all three
//! on, [`restore_terminal`] and the panic hook turn them off again.

use std::io::{self, Stdout, Write};

use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};

/// The terminal type used by the application.
pub type AppTerminal = Terminal<CrosstermBackend<Stdout>>;

/// Error type for terminal operations.
#[derive(Debug, thiserror::Error)]
pub enum TerminalError {
    /// Raw mode, the alternate screen or mouse capture could not be enabled.
    #[error("failed to setup terminal: {0}")]
    Setup(#[source] io::Error),

    /// The terminal could not be put back into its normal mode.
    #[error("failed to restore terminal: {0}")]
    Restore(#[source] io::Error),
}

fn enter_tag_screen(out: &mut impl Write) -> io::Result<()> {
    enable_raw_mode()?;
    execute!(out, EnterAlternateScreen, EnableMouseCapture)
}

fn leave_tag_screen(out: &mut impl Write) -> io::Result<()> {
    disable_raw_mode()?;
    execute!(out, DisableMouseCapture, LeaveAlternateScreen)
}

/// Prepares stdout for the tag screen and wraps it in a ratatui terminal.
///
/// # Errors
///
/// Returns [`TerminalError::Setup`] if any terminal operation fails.
///
/// # Examples
///
/// ```no_run
/// use dragtags_tui::terminal;
///
/// let mut terminal = terminal::setup_terminal().expect("failed to setup terminal");
/// terminal::restore_terminal(&mut terminal).expect("failed to restore terminal");
/// ```
pub fn setup_terminal() -> Result<AppTerminal, TerminalError> {
    let mut stdout = io::stdout();
    enter_tag_screen(&mut stdout).map_err(TerminalError::Setup)?;
    Terminal::new(CrosstermBackend::new(stdout)).map_err(TerminalError::Setup)
}

/// Undoes [`setup_terminal`] and shows the cursor, which the new tag modal
/// may have hidden or moved.
///
/// # Errors
///
/// Returns [`TerminalError::Restore`] if any terminal operation fails.
pub fn restore_terminal(terminal: &mut AppTerminal) -> Result<(), TerminalError> {
    leave_tag_screen(terminal.backend_mut()).map_err(TerminalError::Restore)?;
    terminal.show_cursor().map_err(TerminalError::Restore)
}

/// Installs a panic hook that leaves the tag screen before the previous
/// hook prints the panic.
///
/// Call this once at startup, before [`setup_terminal`].
pub fn install_panic_hook() {
    let previous = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        // Best effort, the panic message matters more
        let _ = leave_tag_screen(&mut io::stdout());
        previous(info);
    }));
}
