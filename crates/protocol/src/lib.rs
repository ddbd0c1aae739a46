//! Shared protocol types for the dragtags application.
//!
//! This crate defines the core types used across all dragtags components:
//! tags and the ordered tag list, geometry helpers, gesture state, messages
//! and error types.
//!
//! # Overview
//!
//! The crate is organized into the following modules:
//!
//! - [`tag`]: The `Tag` struct and the title-keyed `TagList`
//! - [`geometry`]: Point-in-area test, element moves and `Bounds`
//! - [`gesture`]: Gesture state delivered to pan responders
//! - [`message`]: TUI event messages
//! - [`sample`]: Built-in sample tags
//! - [`error`]: Error types for protocol operations
//!
//! # Examples
//!
//! Building a list and reordering it:
//!
//! ```
//! use dragtags_protocol::{Bounds, TagList};
//!
//! let mut tags = TagList::from_titles(["#a", "#b", "#c"]);
//!
//! // Geometry arrives from the layout pass
//! if let Some(tag) = tags.get_mut("#c") {
//!     tag.bounds = Some(Bounds::from_measurement(20, 2, 8, 3));
//! }
//! assert_eq!(tags.find_at(24, 3, None).map(|t| t.title.as_str()), Some("#c"));
//!
//! let tags = tags.reordered(0, 2).unwrap();
//! assert_eq!(tags.titles(), ["#b", "#c", "#a"]);
//! ```

pub mod error;
pub mod geometry;
pub mod gesture;
pub mod message;
pub mod sample;
pub mod tag;

// Re-export primary types at crate root for convenience
pub use error::{ProtocolError, Result};
pub use geometry::{Bounds, is_point_within_area, move_array_element};
pub use gesture::GestureState;
pub use message::Message;
pub use tag::{Tag, TagList};
