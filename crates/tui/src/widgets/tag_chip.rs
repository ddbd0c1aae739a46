//! Tag chip rendering widget.
//!
//! A chip is a bordered, single-line box holding a remove marker and the
//! tag title. The chip being dragged is drawn with a dashed, dimmed border.

use dragtags_protocol::Tag;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    symbols::border,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Widget},
};

/// Columns a chip adds around its title: two borders, padding and the
/// remove marker.
pub const CHIP_CHROME_WIDTH: u16 = 6;

/// Marker shown before the title. Clicking a chip removes it.
pub const REMOVE_MARKER: &str = "✕";

/// Border set for the chip being dragged.
const BORDER_SET_DRAGGED: border::Set = border::Set {
    top_left: "╭",
    top_right: "╮",
    bottom_left: "╰",
    bottom_right: "╯",
    vertical_left: "╎",
    vertical_right: "╎",
    horizontal_top: "╌",
    horizontal_bottom: "╌",
};

/// Returns the width of the chip for a title.
///
/// # Examples
///
/// ```
/// use dragtags_tui::widgets::chip_width;
///
/// assert_eq!(chip_width("#love"), 11);
/// ```
#[must_use]
pub fn chip_width(title: &str) -> u16 {
    u16::try_from(Line::from(title).width())
        .unwrap_or(u16::MAX)
        .saturating_add(CHIP_CHROME_WIDTH)
}

/// Renders a tag chip to the buffer.
///
/// Titles that do not fit are clipped at the right border.
///
/// # Layout
///
/// ```text
/// ╭─────────╮    ╭╌╌╌╌╌╌╌╌╌╮
/// │ ✕ #love │    ╎ ✕ #love ╎   (being dragged)
/// ╰─────────╯    ╰╌╌╌╌╌╌╌╌╌╯
/// ```
///
/// # Examples
///
/// ```
/// use ratatui::buffer::Buffer;
/// use ratatui::layout::Rect;
/// use dragtags_protocol::Tag;
/// use dragtags_tui::widgets::render_tag_chip;
///
/// let area = Rect::new(0, 0, 11, 3);
/// let mut buf = Buffer::empty(area);
///
/// render_tag_chip(&Tag::new("#love"), area, &mut buf);
/// ```
pub fn render_tag_chip(tag: &Tag, area: Rect, buf: &mut Buffer) {
    // Skip rendering if area is too small
    if area.width < 4 || area.height < 3 {
        return;
    }

    let (block, text_style) = if tag.is_being_dragged {
        (
            Block::default()
                .borders(Borders::ALL)
                .border_set(BORDER_SET_DRAGGED)
                .border_style(
                    Style::default()
                        .fg(Color::DarkGray)
                        .add_modifier(Modifier::DIM),
                ),
            Style::default()
                .fg(Color::Gray)
                .add_modifier(Modifier::DIM),
        )
    } else {
        (
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(Color::LightBlue)),
            Style::default().fg(Color::White),
        )
    };

    let line = Line::from(vec![
        Span::raw(" "),
        Span::styled(REMOVE_MARKER, Style::default().fg(Color::LightRed)),
        Span::raw(" "),
        Span::styled(tag.title.clone(), text_style),
    ]);

    Paragraph::new(line).block(block).render(area, buf);
}
