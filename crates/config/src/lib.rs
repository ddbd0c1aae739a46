//! Configuration management for the dragtags application.
//!
//! This crate handles discovering, loading and validating the configuration
//! that seeds the tag screen.
//!
//! # Overview
//!
//! The crate is organized into the following modules:
//!
//! - [`config`]: Core configuration struct and loading logic
//! - [`persistence`]: Config file discovery and reading
//! - [`error`]: Error types for configuration operations
//!
//! # Configuration Sources (Priority)
//!
//! 1. Local config (`./dragtags.json5` or `./dragtags.json`)
//! 2. User config (`~/.config/dragtags/config.json5` or `~/.config/dragtags/config.json`)
//! 3. Built-in defaults
//!
//! # Format
//!
//! ```json5
//! {
//!   // Initial tags, in display order
//!   tags: ["#rust", "#terminal", "#dragndrop"],
//!   // Swap animation duration in milliseconds
//!   animation_duration_ms: 250,
//! }
//! ```
//!
//! # Examples
//!
//! ```no_run
//! use dragtags_config::Config;
//!
//! # async fn example() -> dragtags_config::Result<()> {
//! let config = Config::load().await?;
//! for tag in &config.tags {
//!     println!("Tag: {tag}");
//! }
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod persistence;

// Re-export primary types at crate root for convenience
pub use config::{Config, DEFAULT_ANIMATION_DURATION_MS, MAX_ANIMATION_DURATION_MS};
pub use error::{ConfigError, Result};
