//! File logging setup.
//!
//! The TUI owns the terminal, so log output goes to a file under the local
//! data directory. The filter is read from `DRAGTAGS_LOG` using the usual
//! `EnvFilter` directive syntax and defaults to `info`.

use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::Context;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Environment variable holding the log filter.
pub const LOG_ENV_VAR: &str = "DRAGTAGS_LOG";

const DEFAULT_FILTER: &str = "info";

/// Returns the default log file, `<data_local_dir>/dragtags/dragtags.log`.
#[must_use]
pub fn default_log_file() -> Option<PathBuf> {
    dirs::data_local_dir().map(|dir| dir.join("dragtags").join("dragtags.log"))
}

/// Builds the log filter from [`LOG_ENV_VAR`], falling back to `info`.
#[must_use]
pub fn env_filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Installs the global subscriber, appending to `log_file`.
///
/// # Errors
///
/// Returns an error if the log file cannot be opened or a global subscriber
/// is already installed.
pub fn init_file_logging(log_file: &Path) -> anyhow::Result<()> {
    // Create log file directory if it doesn't exist
    if let Some(parent) = log_file.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_file)
        .with_context(|| format!("failed to open {}", log_file.display()))?;

    let file_layer = fmt::layer()
        .with_writer(Mutex::new(file))
        .with_ansi(false) // No color codes in file
        .with_target(true)
        .with_line_number(true);

    tracing_subscriber::registry()
        .with(env_filter())
        .with(file_layer)
        .try_init()
        .context("failed to install tracing subscriber")?;

    tracing::info!(path = %log_file.display(), "logging initialized");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn default_log_file_is_under_dragtags_dir() {
        if let Some(path) = default_log_file() {
            assert!(path.ends_with("dragtags/dragtags.log"));
        }
    }

    #[test]
    fn init_reports_unusable_directory() {
        let dir = TempDir::new().unwrap();
        let blocker = dir.path().join("not-a-dir");
        std::fs::write(&blocker, "").unwrap();

        let err = init_file_logging(&blocker.join("dragtags.log")).unwrap_err();
        assert!(format!("{err:#}").starts_with("failed to create"));
    }

    #[test]
    fn init_creates_log_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("dragtags.log");

        init_file_logging(&path).unwrap();
        tracing::info!("hello from the test");

        let contents = std::fs::read_to_string(&path).unwrap();
        assert!(contents.contains("logging initialized"));
        assert!(contents.contains("hello from the test"));

        // A second subscriber cannot be installed
        assert!(init_file_logging(&path).is_err());
    }
}
