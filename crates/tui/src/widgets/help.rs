//! Help overlay widget.
//!
//! This module provides the help overlay that displays the mouse gestures
//! and keybindings when the user presses `?`.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Clear, Paragraph, Widget},
};

use crate::layout::centered_rect;

/// The width of the help overlay panel.
const HELP_WIDTH: u16 = 40;

/// The height of the help overlay panel.
const HELP_HEIGHT: u16 = 16;

/// Draws the gesture and key reference in a centered panel over `area`.
///
/// # Layout
///
/// ```text
/// ╭ Help ────────────────────────────────╮
/// │                                      │
/// │  Mouse                               │
/// │  Drag tag      Swap with other tags  │
/// │  Click tag     Remove tag            │
/// │  Click Add new Add a tag             │
/// │                                      │
/// │  Keys                                │
/// │  a             Add a tag             │
/// │  Enter         Submit new tag        │
/// │  Esc           Cancel drag / close   │
/// │  Ctrl+C        Quit                  │
/// │  ?             Toggle help           │
/// │                                      │
/// │  Press any key to close              │
/// ╰──────────────────────────────────────╯
/// ```
///
/// # Examples
///
/// ```
/// use ratatui::buffer::Buffer;
/// use ratatui::layout::Rect;
/// use dragtags_tui::widgets::render_help_overlay;
///
/// let area = Rect::new(0, 0, 80, 24);
/// let mut buf = Buffer::empty(area);
///
/// render_help_overlay(area, &mut buf);
/// ```
pub fn render_help_overlay(area: Rect, buf: &mut Buffer) {
    let popup = centered_rect(HELP_WIDTH, HELP_HEIGHT, area);
    let accent = Style::default().fg(Color::LightYellow);

    Clear.render(popup, buf);
    Paragraph::new(build_help_lines())
        .style(Style::default().fg(Color::White))
        .block(
            Block::bordered()
                .border_type(BorderType::Rounded)
                .border_style(accent)
                .title(Span::styled(" Help ", accent.add_modifier(Modifier::BOLD))),
        )
        .render(popup, buf);
}

/// Gesture and key sections shown in the overlay.
const SECTIONS: &[(&str, &[(&str, &str)])] = &[
    (
        "Mouse",
        &[
            ("Drag tag", "Swap with other tags"),
            ("Click tag", "Remove tag"),
            ("Click Add new", "Add a tag"),
        ],
    ),
    (
        "Keys",
        &[
            ("a", "Add a tag"),
            ("Enter", "Submit new tag"),
            ("Esc", "Cancel drag / close"),
            ("Ctrl+C", "Quit"),
            ("?", "Toggle help"),
        ],
    ),
];

fn build_help_lines() -> Vec<Line<'static>> {
    let header_style = Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD);
    let key_style = Style::default().fg(Color::Green);
    let hint_style = Style::default()
        .fg(Color::DarkGray)
        .add_modifier(Modifier::ITALIC);

    let mut lines = vec![Line::default()];
    for (title, bindings) in SECTIONS {
        lines.push(Line::styled(format!("  {title}"), header_style));
        lines.extend(bindings.iter().map(|(input, action)| {
            Line::from(vec![
                Span::styled(format!("  {input:<14}"), key_style),
                Span::raw(*action),
            ])
        }));
        lines.push(Line::default());
    }
    lines.push(Line::styled("  Press any key to close", hint_style));
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::buffer_to_string;

    #[test]
    fn overlay_lists_every_section() {
        let area = Rect::new(0, 0, 80, 24);
        let mut buf = Buffer::empty(area);

        render_help_overlay(area, &mut buf);

        let content = buffer_to_string(&buf);
        assert!(content.contains("Help"));
        for (title, bindings) in SECTIONS {
            assert!(content.contains(title));
            for (input, action) in *bindings {
                assert!(content.contains(input), "missing {input}");
                assert!(content.contains(action), "missing {action}");
            }
        }
    }

    #[test]
    fn overlay_survives_tiny_area() {
        let area = Rect::new(0, 0, 20, 10);
        let mut buf = Buffer::empty(area);

        render_help_overlay(area, &mut buf);
        assert!(buffer_to_string(&buf).contains("Help"));
    }

    #[test]
    fn help_fits_its_panel() {
        let lines = build_help_lines();
        // Two border rows
        assert_eq!(lines.len() + 2, usize::from(HELP_HEIGHT));
        // Two border columns
        assert!(lines.iter().all(|line| line.width() + 2 <= usize::from(HELP_WIDTH)));
    }
}
