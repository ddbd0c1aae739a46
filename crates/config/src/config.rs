//! Core configuration struct and loading logic.
//!
//! This module provides the main [`Config`] struct which aggregates all
//! configuration options for the dragtags application.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{ConfigError, Result};
use crate::persistence::{find_config_file, read_config_file};

/// Default swap animation duration, in milliseconds.
pub const DEFAULT_ANIMATION_DURATION_MS: u64 = 250;

/// Largest accepted swap animation duration, in milliseconds.
pub const MAX_ANIMATION_DURATION_MS: u64 = 5_000;

/// The main configuration struct for the dragtags application.
///
/// # Examples
///
/// ```
/// use dragtags_config::Config;
///
/// // The default config ships sample tags and a 250ms animation
/// let config = Config::default();
/// assert!(!config.tags.is_empty());
/// assert_eq!(config.animation_duration_ms, 250);
///
/// // Create a custom config
/// let config = Config {
///     tags: vec!["#rust".to_string(), "#tui".to_string()],
///     animation_duration_ms: 400,
/// };
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Initial tag titles, in display order.
    ///
    /// Duplicates are allowed here; the tag list keeps the first occurrence.
    #[serde(default = "dragtags_protocol::sample::sample_tags")]
    pub tags: Vec<String>,

    /// How long, in milliseconds, swapping stays suppressed after a swap
    /// while chips slide into place.
    #[serde(default = "default_animation_duration_ms")]
    pub animation_duration_ms: u64,
}

const fn default_animation_duration_ms() -> u64 {
    DEFAULT_ANIMATION_DURATION_MS
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tags: dragtags_protocol::sample::sample_tags(),
            animation_duration_ms: DEFAULT_ANIMATION_DURATION_MS,
        }
    }
}

impl Config {
    /// Creates a configuration with default values.
    ///
    /// This is equivalent to `Config::default()`.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from the default file locations.
    ///
    /// Searches for configuration files in the following order:
    ///
    /// 1. Local: `./dragtags.json5` or `./dragtags.json`
    /// 2. User: `~/.config/dragtags/config.json5` or `~/.config/dragtags/config.json`
    ///
    /// If no configuration file is found, returns a default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if a configuration file is found but cannot be
    /// read, parsed or validated.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use dragtags_config::Config;
    ///
    /// # async fn example() -> dragtags_config::Result<()> {
    /// let config = Config::load().await?;
    /// println!("Starting with {} tags", config.tags.len());
    /// # Ok(())
    /// # }
    /// ```
    pub async fn load() -> Result<Self> {
        match find_config_file() {
            Some(path) => {
                debug!(?path, "loading config file");
                Self::load_from(path)
            }
            None => {
                debug!("no config file found, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Loads configuration from a specific file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed or validated.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use dragtags_config::Config;
    ///
    /// # fn example() -> dragtags_config::Result<()> {
    /// let config = Config::load_from("custom-config.json5")?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn load_from(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let config: Config = read_config_file(path)?;
        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidAnimationDuration`] if the animation
    /// duration exceeds [`MAX_ANIMATION_DURATION_MS`].
    ///
    /// # Examples
    ///
    /// ```
    /// use dragtags_config::Config;
    ///
    /// let mut config = Config::default();
    /// assert!(config.validate().is_ok());
    ///
    /// config.animation_duration_ms = 60_000;
    /// assert!(config.validate().is_err());
    /// ```
    pub fn validate(&self) -> Result<()> {
        if self.animation_duration_ms > MAX_ANIMATION_DURATION_MS {
            return Err(ConfigError::InvalidAnimationDuration {
                value_ms: self.animation_duration_ms,
                max_ms: MAX_ANIMATION_DURATION_MS,
            });
        }
        Ok(())
    }

    /// Returns the swap animation duration.
    #[must_use]
    pub fn animation_duration(&self) -> Duration {
        Duration::from_millis(self.animation_duration_ms)
    }
}
