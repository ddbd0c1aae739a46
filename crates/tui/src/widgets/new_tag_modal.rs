//! New tag modal widget.
//!
//! The modal dims everything behind it and docks an input row with an
//! "Add" button to the bottom of the screen. Submitting a blank value shows
//! a blocking alert on top.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Position, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Widget},
};

use crate::layout::centered_rect;
use crate::modal::{InputError, NewTagModal};

/// Text shown in the empty input field.
pub const PLACEHOLDER: &str = "Add a tag...";

/// Label of the submit button.
pub const ADD_BUTTON_LABEL: &str = "[ Add ]";

/// Height of the input panel, borders included.
const PANEL_HEIGHT: u16 = 3;

const ALERT_WIDTH: u16 = 36;
const ALERT_HEIGHT: u16 = 6;

/// Where the interactive parts of the modal were drawn.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ModalLayout {
    /// The docked input panel, borders included.
    pub panel: Rect,
    /// The text area of the input field.
    pub input: Rect,
    /// The submit button.
    pub add_button: Rect,
    /// The text cursor, hidden while the alert is showing.
    pub cursor: Option<Position>,
    /// The alert box, if showing.
    pub alert: Option<Rect>,
}

/// Renders the new tag modal over the existing content.
///
/// # Layout
///
/// ```text
///  (dimmed screen)
/// ╭ New tag ───────────────────────────────╮
/// │ Add a tag...                   [ Add ] │
/// ╰────────────────────────────────────────╯
/// ```
///
/// # Examples
///
/// ```
/// use ratatui::buffer::Buffer;
/// use ratatui::layout::Rect;
/// use dragtags_tui::modal::NewTagModal;
/// use dragtags_tui::widgets::render_new_tag_modal;
///
/// let area = Rect::new(0, 0, 60, 20);
/// let mut buf = Buffer::empty(area);
///
/// let layout = render_new_tag_modal(&NewTagModal::new(), area, &mut buf);
/// assert_eq!(layout.panel, Rect::new(0, 17, 60, 3));
/// ```
pub fn render_new_tag_modal(modal: &NewTagModal, area: Rect, buf: &mut Buffer) -> ModalLayout {
    // Dim everything behind the modal
    buf.set_style(area, Style::default().add_modifier(Modifier::DIM));

    let panel_height = PANEL_HEIGHT.min(area.height);
    let panel = Rect::new(
        area.x,
        area.bottom().saturating_sub(panel_height),
        area.width,
        panel_height,
    );
    Clear.render(panel, buf);

    let block = Block::default()
        .title(Span::styled(
            " New tag ",
            Style::default()
                .fg(Color::LightCyan)
                .add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::LightCyan));
    let inner = block.inner(panel);
    block.render(panel, buf);

    let button_width = u16::try_from(ADD_BUTTON_LABEL.len()).unwrap_or(u16::MAX);
    let [input, _, add_button] = Layout::horizontal([
        Constraint::Min(1),
        Constraint::Length(1),
        Constraint::Length(button_width),
    ])
    .areas(inner);

    let cursor = render_input(modal, input, buf);
    render_add_button(!modal.input().is_empty(), add_button, buf);

    let alert = modal.alert().map(|err| render_alert(err, area, buf));

    ModalLayout {
        panel,
        input,
        add_button,
        cursor: if alert.is_some() { None } else { cursor },
        alert,
    }
}

/// Renders the field text and returns the cursor position.
fn render_input(modal: &NewTagModal, area: Rect, buf: &mut Buffer) -> Option<Position> {
    if area.width == 0 || area.height == 0 {
        return None;
    }

    let field = modal.input();
    if field.value().is_empty() {
        Paragraph::new(Span::styled(
            PLACEHOLDER,
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),
        ))
        .render(area, buf);
        return Some(Position::new(area.x, area.y));
    }

    // Scroll horizontally to keep the cursor in view
    let cursor_col =
        u16::try_from(Line::from(&field.value()[..field.cursor()]).width()).unwrap_or(u16::MAX);
    let offset = cursor_col.saturating_sub(area.width - 1);

    Paragraph::new(Span::styled(
        field.value(),
        Style::default().fg(Color::White),
    ))
    .scroll((0, offset))
    .render(area, buf);

    Some(Position::new(area.x + (cursor_col - offset), area.y))
}

fn render_add_button(enabled: bool, area: Rect, buf: &mut Buffer) {
    let style = if enabled {
        Style::default()
            .fg(Color::LightCyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    Paragraph::new(Span::styled(ADD_BUTTON_LABEL, style)).render(area, buf);
}

fn render_alert(err: InputError, area: Rect, buf: &mut Buffer) -> Rect {
    let popup_area = centered_rect(ALERT_WIDTH, ALERT_HEIGHT, area);
    Clear.render(popup_area, buf);

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            err.to_string(),
            Style::default().fg(Color::White),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Press any key to dismiss",
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),
        )),
    ];

    let block = Block::default()
        .title(Span::styled(
            " Alert ",
            Style::default()
                .fg(Color::LightRed)
                .add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::LightRed));

    Paragraph::new(lines)
        .block(block)
        .alignment(Alignment::Center)
        .render(popup_area, buf);

    popup_area
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::buffer_to_string;

    fn modal_with(text: &str) -> NewTagModal {
        let mut modal = NewTagModal::new();
        for ch in text.chars() {
            modal.input_mut().insert_char(ch);
        }
        modal
    }

    #[test]
    fn empty_modal_shows_placeholder() {
        let area = Rect::new(0, 0, 40, 10);
        let mut buf = Buffer::empty(area);

        let layout = render_new_tag_modal(&NewTagModal::new(), area, &mut buf);

        let content = buffer_to_string(&buf);
        assert!(content.contains("New tag"));
        assert!(content.contains(PLACEHOLDER));
        assert!(content.contains(ADD_BUTTON_LABEL));
        assert_eq!(layout.input, Rect::new(1, 8, 30, 1));
        assert_eq!(layout.add_button, Rect::new(32, 8, 7, 1));
        assert_eq!(layout.cursor, Some(Position::new(1, 8)));
        assert_eq!(layout.alert, None);
    }

    #[test]
    fn add_button_is_grey_when_empty() {
        let area = Rect::new(0, 0, 40, 10);

        let mut buf = Buffer::empty(area);
        let layout = render_new_tag_modal(&modal_with(""), area, &mut buf);
        let cell = buf.cell((layout.add_button.x, layout.add_button.y)).unwrap();
        assert_eq!(cell.fg, Color::DarkGray);

        // Spaces are text like any other
        for text in ["  ", "#x"] {
            let mut buf = Buffer::empty(area);
            let layout = render_new_tag_modal(&modal_with(text), area, &mut buf);
            let cell = buf.cell((layout.add_button.x, layout.add_button.y)).unwrap();
            assert_eq!(cell.fg, Color::LightCyan);
        }
    }

    #[test]
    fn typed_text_and_cursor() {
        let area = Rect::new(0, 0, 40, 10);
        let mut buf = Buffer::empty(area);

        let layout = render_new_tag_modal(&modal_with("#rust"), area, &mut buf);

        assert!(buffer_to_string(&buf).contains("│#rust"));
        assert_eq!(layout.cursor, Some(Position::new(6, 8)));
    }

    #[test]
    fn long_text_scrolls_to_cursor() {
        let area = Rect::new(0, 0, 20, 10);
        let mut buf = Buffer::empty(area);

        let layout = render_new_tag_modal(&modal_with("#abcdefghijklmnop"), area, &mut buf);

        // Input is 10 columns wide; the cursor stays on its last column
        assert_eq!(layout.input.width, 10);
        assert_eq!(layout.cursor, Some(Position::new(10, 8)));
        assert!(buffer_to_string(&buf).contains("│hijklmnop"));
    }

    #[test]
    fn background_is_dimmed() {
        let area = Rect::new(0, 0, 40, 10);
        let mut buf = Buffer::empty(area);

        render_new_tag_modal(&NewTagModal::new(), area, &mut buf);

        let cell = buf.cell((0, 0)).unwrap();
        assert!(cell.modifier.contains(Modifier::DIM));
    }

    #[test]
    fn alert_blocks_input() {
        let area = Rect::new(0, 0, 60, 20);
        let mut buf = Buffer::empty(area);
        let mut modal = NewTagModal::new();
        assert!(modal.submit().is_none());

        let layout = render_new_tag_modal(&modal, area, &mut buf);

        let content = buffer_to_string(&buf);
        assert!(content.contains("Alert"));
        assert!(content.contains("Please enter new tag first"));
        assert_eq!(layout.cursor, None);
        assert_eq!(layout.alert, Some(Rect::new(12, 7, 36, 6)));
    }

    #[test]
    fn handles_tiny_area() {
        let area = Rect::new(0, 0, 5, 2);
        let mut buf = Buffer::empty(area);

        // Should not panic with small area
        render_new_tag_modal(&modal_with("#x"), area, &mut buf);
    }
}
