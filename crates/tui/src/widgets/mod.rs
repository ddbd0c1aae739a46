//! Widget components for the dragtags TUI.
//!
//! This module provides the rendering functions for the tag screen,
//! organized into focused submodules for each visual component.
//!
//! # Overview
//!
//! Each widget is a plain function that renders state to a buffer. Widgets
//! whose geometry matters for input return the rectangles they drew into,
//! which the app keeps for hit-testing.
//!
//! # Modules
//!
//! - [`tag_chip`]: Renders a single removable tag chip
//! - [`tags_area`]: Lays out and renders the wrapping list of chips
//! - [`new_tag_modal`]: Renders the input modal and its alert
//! - [`help`]: Renders the help overlay
//!
//! # Example
//!
//! ```
//! use ratatui::buffer::Buffer;
//! use ratatui::layout::Rect;
//! use dragtags_protocol::TagList;
//! use dragtags_tui::widgets;
//!
//! let tags = TagList::from_titles(["#rust", "#tui"]);
//!
//! let area = Rect::new(0, 0, 80, 10);
//! let mut buf = Buffer::empty(area);
//!
//! let layout = widgets::layout_tags_area(&tags, area);
//! widgets::render_tags_area(&tags, &layout, None, area, &mut buf);
//! ```

pub mod help;
pub mod new_tag_modal;
pub mod tag_chip;
pub mod tags_area;

// Re-export primary rendering functions for convenience
pub use help::render_help_overlay;
pub use new_tag_modal::{ModalLayout, render_new_tag_modal};
pub use tag_chip::{chip_width, render_tag_chip};
pub use tags_area::{AreaTarget, TagsAreaLayout, layout_tags_area, render_tags_area};
