//! Configuration file discovery and reading.
//!
//! The running tag list is never written back; configuration files are
//! only read to seed the initial tags.
//!
//! Both JSON5 (`.json5`) and plain JSON (`.json`) are accepted, and the first
//! existing file among these wins:
//!
//! 1. Local: `./dragtags.json5` or `./dragtags.json`
//! 2. User: `~/.config/dragtags/config.json5` or `~/.config/dragtags/config.json`

use std::path::{Path, PathBuf};

use crate::error::{ConfigError, Result};

const LOCAL_FILE_NAMES: &[&str] = &["dragtags.json5", "dragtags.json"];

const USER_CONFIG_DIR: &str = "dragtags";

const USER_FILE_NAMES: &[&str] = &["config.json5", "config.json"];

/// Lists the candidate config paths in priority order.
///
/// Local names are relative to the working directory. User names are only
/// included when `user_dir` is known.
#[must_use]
pub fn config_candidates(user_dir: Option<&Path>) -> Vec<PathBuf> {
    let local = LOCAL_FILE_NAMES.iter().map(PathBuf::from);
    let user = user_dir
        .into_iter()
        .flat_map(|dir| USER_FILE_NAMES.iter().map(move |name| dir.join(name)));
    local.chain(user).collect()
}

/// Finds the first existing configuration file.
///
/// # Examples
///
/// ```no_run
/// use dragtags_config::persistence::find_config_file;
///
/// if let Some(path) = find_config_file() {
///     println!("Found config at: {}", path.display());
/// }
/// ```
#[must_use]
pub fn find_config_file() -> Option<PathBuf> {
    let user_dir = user_config_dir().ok();
    config_candidates(user_dir.as_deref())
        .into_iter()
        .find(|path| path.exists())
}

/// Returns the user configuration directory, typically `~/.config/dragtags/`.
///
/// # Errors
///
/// Returns [`ConfigError::NoHomeDirectory`] if the platform config directory
/// is unknown.
pub fn user_config_dir() -> Result<PathBuf> {
    dirs::config_dir()
        .map(|d| d.join(USER_CONFIG_DIR))
        .ok_or(ConfigError::NoHomeDirectory)
}

/// Reads and deserializes a configuration file.
///
/// # Errors
///
/// Returns [`ConfigError::ReadFile`] if the file cannot be read and
/// [`ConfigError::ParseJson5`] if its content does not parse.
pub fn read_config_file<T: serde::de::DeserializeOwned>(path: impl AsRef<Path>) -> Result<T> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadFile {
        path: path.to_path_buf(),
        source: e,
    })?;

    // Plain JSON is valid JSON5
    serde_json5::from_str(&content).map_err(ConfigError::from)
}
