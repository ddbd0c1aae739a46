//! Event handling and key mappings.
//!
//! This module provides event polling and conversion from terminal events
//! to application messages.

use std::time::Duration;

use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use dragtags_protocol::Message;

/// Upper bound on how long one poll waits for input.
pub const MAX_POLL_TIMEOUT: Duration = Duration::from_millis(100);

/// Polls for a terminal event, waiting at most `timeout`.
///
/// Returns `Some(Event)` if an event is available within the timeout,
/// or `None` if the timeout expires without an event.
///
/// # Errors
///
/// Returns an error if polling the terminal fails.
pub fn poll_event(timeout: Duration) -> std::io::Result<Option<Event>> {
    if event::poll(timeout)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

/// Converts a terminal event to an application message.
///
/// Key events are routed through [`key_to_modal_message`] while the new tag
/// modal is open and through [`key_to_message`] otherwise.
///
/// Returns `Some(Message)` if the event maps to an action,
/// or `None` if the event is not handled.
#[must_use]
pub fn event_to_message(event: &Event, modal_open: bool) -> Option<Message> {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Release => None,
        Event::Key(key) if modal_open => key_to_modal_message(*key),
        Event::Key(key) => key_to_message(*key),
        Event::Mouse(mouse) => mouse_to_message(mouse),
        Event::Resize(_, _) => Some(Message::Resized),
        _ => None,
    }
}

/// Converts a mouse event to an application message.
///
/// The left button drives the pan gesture. Other buttons pressed during a
/// gesture count as additional touches.
#[must_use]
pub fn mouse_to_message(mouse: &MouseEvent) -> Option<Message> {
    let (column, row) = (mouse.column, mouse.row);
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => Some(Message::PointerDown { column, row }),
        MouseEventKind::Drag(MouseButton::Left) => Some(Message::PointerDrag { column, row }),
        MouseEventKind::Up(MouseButton::Left) => Some(Message::PointerUp { column, row }),
        MouseEventKind::Down(_) => Some(Message::ExtraTouchDown),
        MouseEventKind::Up(_) => Some(Message::ExtraTouchUp),
        _ => None,
    }
}

/// Converts a terminal key event to an application message.
///
/// # Key Bindings
///
/// | Key | Action |
/// |-----|--------|
/// | `Ctrl+C` | Quit |
/// | `Esc` | Escape (cancel drag or close help) |
/// | `a` or `+` | Open the new tag modal |
/// | `?` | Toggle help |
#[must_use]
pub fn key_to_message(key: KeyEvent) -> Option<Message> {
    // Check for Ctrl+C first
    if is_quit(key) {
        return Some(Message::Quit);
    }

    match key.code {
        KeyCode::Esc => Some(Message::Escape),
        KeyCode::Char('a' | '+') => Some(Message::OpenNewTag),
        KeyCode::Char('?') => Some(Message::ToggleHelp),
        _ => None,
    }
}

/// Converts a key event to a modal-specific message.
///
/// This function is used while the new tag modal is open, so that printable
/// keys go to the input field.
///
/// # Key Bindings (Modal)
///
/// | Key | Action |
/// |-----|--------|
/// | `Ctrl+C` | Quit |
/// | `Enter` | Submit |
/// | `Esc` | Close the modal |
/// | `Backspace` | Delete before cursor |
/// | `Left` / `Right` | Move cursor |
/// | `Ctrl+U` | Clear the field |
/// | Any char | Input |
#[must_use]
pub fn key_to_modal_message(key: KeyEvent) -> Option<Message> {
    // Check for Ctrl+C first (always works)
    if is_quit(key) {
        return Some(Message::Quit);
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('u') => Some(Message::ModalClear),
            _ => None,
        };
    }

    match key.code {
        KeyCode::Enter => Some(Message::ModalSubmit),
        KeyCode::Esc => Some(Message::ModalClose),
        KeyCode::Backspace => Some(Message::ModalBackspace),
        KeyCode::Left => Some(Message::ModalCursorLeft),
        KeyCode::Right => Some(Message::ModalCursorRight),
        KeyCode::Char(ch) => Some(Message::ModalInput { ch }),
        _ => None,
    }
}

fn is_quit(key: KeyEvent) -> bool {
    key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c')
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn make_key_with_modifiers(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent {
            code,
            modifiers,
            kind: KeyEventKind::Press,
            state: event::KeyEventState::NONE,
        }
    }

    fn make_mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn quit_keys() {
        let ctrl_c = make_key_with_modifiers(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(key_to_message(ctrl_c), Some(Message::Quit));
        assert_eq!(key_to_modal_message(ctrl_c), Some(Message::Quit));
        // 'q' is not a quit key
        assert_eq!(key_to_message(make_key(KeyCode::Char('q'))), None);
    }

    #[test]
    fn escape_key() {
        assert_eq!(
            key_to_message(make_key(KeyCode::Esc)),
            Some(Message::Escape)
        );
    }

    #[test]
    fn action_keys() {
        assert_eq!(
            key_to_message(make_key(KeyCode::Char('a'))),
            Some(Message::OpenNewTag)
        );
        assert_eq!(
            key_to_message(make_key(KeyCode::Char('+'))),
            Some(Message::OpenNewTag)
        );
        assert_eq!(
            key_to_message(make_key(KeyCode::Char('?'))),
            Some(Message::ToggleHelp)
        );
    }

    #[test]
    fn unmapped_keys() {
        assert_eq!(key_to_message(make_key(KeyCode::Enter)), None);
        assert_eq!(key_to_message(make_key(KeyCode::Left)), None);
        assert_eq!(key_to_message(make_key(KeyCode::Char('x'))), None);
    }

    #[test]
    fn modal_text_input() {
        assert_eq!(
            key_to_modal_message(make_key(KeyCode::Char('a'))),
            Some(Message::ModalInput { ch: 'a' })
        );
        assert_eq!(
            key_to_modal_message(make_key(KeyCode::Char('?'))),
            Some(Message::ModalInput { ch: '?' })
        );
        // Shifted characters arrive already uppercased
        assert_eq!(
            key_to_modal_message(make_key_with_modifiers(
                KeyCode::Char('R'),
                KeyModifiers::SHIFT
            )),
            Some(Message::ModalInput { ch: 'R' })
        );
    }

    #[test]
    fn modal_editing_keys() {
        assert_eq!(
            key_to_modal_message(make_key(KeyCode::Enter)),
            Some(Message::ModalSubmit)
        );
        assert_eq!(
            key_to_modal_message(make_key(KeyCode::Esc)),
            Some(Message::ModalClose)
        );
        assert_eq!(
            key_to_modal_message(make_key(KeyCode::Backspace)),
            Some(Message::ModalBackspace)
        );
        assert_eq!(
            key_to_modal_message(make_key(KeyCode::Left)),
            Some(Message::ModalCursorLeft)
        );
        assert_eq!(
            key_to_modal_message(make_key(KeyCode::Right)),
            Some(Message::ModalCursorRight)
        );
        assert_eq!(
            key_to_modal_message(make_key_with_modifiers(
                KeyCode::Char('u'),
                KeyModifiers::CONTROL
            )),
            Some(Message::ModalClear)
        );
    }

    #[test]
    fn left_button_drives_pointer() {
        let down = make_mouse(MouseEventKind::Down(MouseButton::Left), 10, 5);
        let drag = make_mouse(MouseEventKind::Drag(MouseButton::Left), 11, 5);
        let up = make_mouse(MouseEventKind::Up(MouseButton::Left), 12, 6);

        assert_eq!(
            mouse_to_message(&down),
            Some(Message::PointerDown { column: 10, row: 5 })
        );
        assert_eq!(
            mouse_to_message(&drag),
            Some(Message::PointerDrag { column: 11, row: 5 })
        );
        assert_eq!(
            mouse_to_message(&up),
            Some(Message::PointerUp { column: 12, row: 6 })
        );
    }

    #[test]
    fn other_buttons_are_extra_touches() {
        let down = make_mouse(MouseEventKind::Down(MouseButton::Right), 0, 0);
        let up = make_mouse(MouseEventKind::Up(MouseButton::Middle), 0, 0);

        assert_eq!(mouse_to_message(&down), Some(Message::ExtraTouchDown));
        assert_eq!(mouse_to_message(&up), Some(Message::ExtraTouchUp));
    }

    #[test]
    fn mouse_move_and_scroll_ignored() {
        let moved = make_mouse(MouseEventKind::Moved, 3, 3);
        let scroll = make_mouse(MouseEventKind::ScrollDown, 3, 3);

        assert_eq!(mouse_to_message(&moved), None);
        assert_eq!(mouse_to_message(&scroll), None);
    }

    #[test]
    fn event_routing() {
        let key = Event::Key(make_key(KeyCode::Char('a')));
        assert_eq!(event_to_message(&key, false), Some(Message::OpenNewTag));
        assert_eq!(
            event_to_message(&key, true),
            Some(Message::ModalInput { ch: 'a' })
        );

        let click = Event::Mouse(make_mouse(MouseEventKind::Down(MouseButton::Left), 1, 2));
        assert_eq!(
            event_to_message(&click, true),
            Some(Message::PointerDown { column: 1, row: 2 })
        );

        assert_eq!(
            event_to_message(&Event::Resize(80, 24), false),
            Some(Message::Resized)
        );
        assert_eq!(event_to_message(&Event::FocusGained, false), None);
    }

    #[test]
    fn key_release_ignored() {
        let release = KeyEvent {
            kind: KeyEventKind::Release,
            ..make_key(KeyCode::Char('a'))
        };
        assert_eq!(event_to_message(&Event::Key(release), false), None);
    }
}
