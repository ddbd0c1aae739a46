//! Centralized layout measurements for the TUI.
//!
//! This module defines shared constants for layout dimensions used across
//! multiple rendering components, plus the wrap-flow layout pass that
//! positions tag chips.

use ratatui::layout::Rect;

/// Height of the header in rows.
///
/// Holds a blank row, the title, a blank row and two rows of instructions.
pub const HEADER_HEIGHT: u16 = 5;

/// Height of a tag chip in rows (border, content, border).
pub const CHIP_HEIGHT: u16 = 3;

/// Blank columns between chips on the same row.
pub const CHIP_GAP_X: u16 = 1;

/// Blank rows between chip rows.
///
/// Keeps the inclusive bottom edge of one row's bounds from touching the
/// next row.
pub const CHIP_GAP_Y: u16 = 1;

/// Minimum terminal height for useful rendering.
///
/// Header, tags area borders and one row of chips.
pub const MIN_HEIGHT: u16 = HEADER_HEIGHT + CHIP_HEIGHT + 2;

/// Minimum terminal width for useful rendering.
pub const MIN_WIDTH: u16 = 30;

/// The result of a wrap-flow layout pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FlowLayout {
    /// One slot per input width, in order. `None` if the item did not fit.
    pub items: Vec<Option<Rect>>,
    /// The slot of the trailing item placed after all others.
    pub trailing: Option<Rect>,
}

/// Lays out items left to right, wrapping onto new rows.
///
/// Every item is [`CHIP_HEIGHT`] rows tall. Items wider than `area` are
/// clamped to its width. Once an item wraps below the bottom of `area`,
/// it and every following item (including the trailing one) get no slot.
///
/// # Examples
///
/// ```
/// use ratatui::layout::Rect;
/// use dragtags_tui::layout::flow_layout;
///
/// let layout = flow_layout(&[6, 6, 6], 7, Rect::new(0, 0, 14, 10));
/// assert_eq!(layout.items[0], Some(Rect::new(0, 0, 6, 3)));
/// assert_eq!(layout.items[1], Some(Rect::new(7, 0, 6, 3)));
/// // Third chip wraps onto the next row
/// assert_eq!(layout.items[2], Some(Rect::new(0, 4, 6, 3)));
/// assert_eq!(layout.trailing, Some(Rect::new(7, 4, 7, 3)));
/// ```
#[must_use]
pub fn flow_layout(widths: &[u16], trailing_width: u16, area: Rect) -> FlowLayout {
    let mut cursor = FlowCursor::new(area);
    let items = widths.iter().map(|&width| cursor.place(width)).collect();
    let trailing = cursor.place(trailing_width);
    FlowLayout { items, trailing }
}

/// Places items one after another inside an area.
#[derive(Debug)]
struct FlowCursor {
    area: Rect,
    x: u16,
    y: u16,
    overflowed: bool,
}

impl FlowCursor {
    fn new(area: Rect) -> Self {
        Self {
            area,
            x: area.x,
            y: area.y,
            overflowed: area.width == 0,
        }
    }

    fn place(&mut self, width: u16) -> Option<Rect> {
        if self.overflowed {
            return None;
        }

        let width = width.min(self.area.width);
        if self.x > self.area.x && self.x.saturating_add(width) > self.area.right() {
            self.x = self.area.x;
            self.y = self.y.saturating_add(CHIP_HEIGHT + CHIP_GAP_Y);
        }

        if self.y.saturating_add(CHIP_HEIGHT) > self.area.bottom() {
            self.overflowed = true;
            return None;
        }

        let slot = Rect::new(self.x, self.y, width, CHIP_HEIGHT);
        self.x = self.x.saturating_add(width).saturating_add(CHIP_GAP_X);
        Some(slot)
    }
}

/// Creates a centered rectangle within a given area.
///
/// If the requested dimensions exceed the available area, the rectangle
/// will be clamped to fit.
#[must_use]
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    // Clamp dimensions to available area
    let popup_width = width.min(area.width);
    let popup_height = height.min(area.height);

    // Calculate centered position
    let x = area.x + (area.width.saturating_sub(popup_width)) / 2;
    let y = area.y + (area.height.saturating_sub(popup_height)) / 2;

    Rect::new(x, y, popup_width, popup_height)
}
