//! Terminal UI for the dragtags application.
//!
//! This crate provides a Ratatui-based screen for arranging tags by drag and
//! drop: chips wrap across rows, a drag swaps the dragged chip with the one
//! under the pointer, a click removes a chip and a modal adds new ones.
//!
//! # Overview
//!
//! The crate is organized into the following modules:
//!
//! - [`app`]: Main application struct and run loop
//! - [`controller`]: Tag list ownership, hit-testing and the swap timer
//! - [`gesture`]: Pan gesture recognition from mouse events
//! - [`modal`]: New tag input field and alert state
//! - [`animation`]: Linear chip transitions after reorders
//! - [`terminal`]: Terminal setup, teardown, and panic handling
//! - [`event`]: Event handling and key mappings
//! - [`widgets`]: Rendering functions
//!
//! # Example
//!
//! ```no_run
//! use dragtags_config::Config;
//! use dragtags_tui::{App, terminal};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     terminal::install_panic_hook();
//!     let mut terminal = terminal::setup_terminal()?;
//!
//!     let mut app = App::with_config(&Config::default());
//!     let result = app.run(&mut terminal).await;
//!
//!     terminal::restore_terminal(&mut terminal)?;
//!     result
//! }
//! ```

pub mod animation;
pub mod app;
pub mod controller;
pub mod event;
pub mod gesture;
pub mod layout;
pub mod modal;
pub mod terminal;
pub mod widgets;

#[cfg(test)]
pub(crate) mod test_utils;

// Re-export primary types at crate root for convenience
pub use app::App;
pub use controller::{GestureSession, TagListController};
pub use gesture::{GestureOutcome, GestureRecognizer, PanResponder};
