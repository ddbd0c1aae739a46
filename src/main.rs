//! dragtags - Arrange tags by drag and drop in your terminal.
//!
//! This is the main binary that loads the configuration and launches the
//! TUI application.

mod logging;

use dragtags_config::Config;
use dragtags_tui::{App, terminal};
use tracing::{info, warn};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Logging is best effort; the app runs without it
    if let Some(log_file) = logging::default_log_file() {
        if let Err(e) = logging::init_file_logging(&log_file) {
            eprintln!("dragtags: file logging disabled: {e:#}");
        }
    }

    let config = Config::load().await?;
    if config.tags.is_empty() {
        warn!("config has no tags, starting with an empty list");
    }
    info!(
        tags = config.tags.len(),
        animation_duration_ms = config.animation_duration_ms,
        "configuration loaded"
    );

    // Install panic hook to restore terminal on panic
    terminal::install_panic_hook();

    // Setup terminal
    let mut terminal = terminal::setup_terminal()?;

    let mut app = App::with_config(&config);

    // Run the main loop
    let result = app.run(&mut terminal).await;

    // Always restore terminal, even if app.run() failed
    terminal::restore_terminal(&mut terminal)?;

    result
}
