//! Terminal input, translated into [`Message`]s.
//!
//! Keys map to navigation and drag commands; the left mouse button maps to
//! pointer messages carrying the cell under the cursor.

use std::time::Duration;

use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use dragboard_protocol::Message;

/// Waits at most `timeout` for the next terminal event.
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

/// Maps a keyboard or mouse event to a message, if it is bound.
#[must_use]
pub fn event_to_message(event: &Event) -> Option<Message> {
    match event {
        Event::Key(key) => key_to_message(*key),
        Event::Mouse(mouse) => mouse_to_message(mouse),
        _ => None,
    }
}

/// Only the left button drives drags.
fn mouse_to_message(mouse: &MouseEvent) -> Option<Message> {
    let (column, row) = (mouse.column, mouse.row);
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => Some(Message::PointerDown { column, row }),
        MouseEventKind::Drag(MouseButton::Left) => Some(Message::PointerMove { column, row }),
        MouseEventKind::Up(MouseButton::Left) => Some(Message::PointerUp { column, row }),
        _ => None,
    }
}

/// Maps a key press to a message. Releases and repeats are ignored.
///
/// # Key Bindings
///
/// | Key | Action |
/// |-----|--------|
/// | `Ctrl+C` | Quit |
/// | `Esc` | Escape (cancel drag, close help, clear selection) |
/// | `Left` / `Right` | Previous / next column |
/// | `Up` / `Down` | Previous / next card |
/// | `Enter` or `Space` | Pick up or drop the selected card |
/// | `r` | Reset the board |
/// | `?` | Toggle help |
#[must_use]
pub fn key_to_message(key: KeyEvent) -> Option<Message> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Message::Quit);
    }

    match key.code {
        KeyCode::Esc => Some(Message::Escape),

        KeyCode::Left => Some(Message::NavigateLeft),
        KeyCode::Right => Some(Message::NavigateRight),
        KeyCode::Up => Some(Message::NavigateUp),
        KeyCode::Down => Some(Message::NavigateDown),

        KeyCode::Enter | KeyCode::Char(' ') => Some(Message::Select),

        KeyCode::Char('r') => Some(Message::Reset),
        KeyCode::Char('?') => Some(Message::ToggleHelp),

        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> Event {
        Event::Mouse(MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        })
    }

    #[test]
    fn key_bindings() {
        let cases = [
            (KeyCode::Char('c'), KeyModifiers::CONTROL, Some(Message::Quit)),
            (KeyCode::Char('c'), KeyModifiers::NONE, None),
            (KeyCode::Char('q'), KeyModifiers::NONE, None),
            (KeyCode::Esc, KeyModifiers::NONE, Some(Message::Escape)),
            (KeyCode::Left, KeyModifiers::NONE, Some(Message::NavigateLeft)),
            (KeyCode::Right, KeyModifiers::NONE, Some(Message::NavigateRight)),
            (KeyCode::Up, KeyModifiers::NONE, Some(Message::NavigateUp)),
            (KeyCode::Down, KeyModifiers::NONE, Some(Message::NavigateDown)),
            (KeyCode::Enter, KeyModifiers::NONE, Some(Message::Select)),
            (KeyCode::Char(' '), KeyModifiers::NONE, Some(Message::Select)),
            (KeyCode::Char('r'), KeyModifiers::NONE, Some(Message::Reset)),
            (KeyCode::Char('?'), KeyModifiers::SHIFT, Some(Message::ToggleHelp)),
            (KeyCode::F(1), KeyModifiers::NONE, None),
        ];
        for (code, modifiers, expected) in cases {
            assert_eq!(
                key_to_message(press(code, modifiers)),
                expected,
                "{code:?} with {modifiers:?}"
            );
        }
    }

    #[test]
    fn key_release_ignored() {
        let mut key = press(KeyCode::Enter, KeyModifiers::NONE);
        key.kind = KeyEventKind::Release;
        assert_eq!(key_to_message(key), None);
    }

    #[test]
    fn left_button_lifecycle() {
        assert_eq!(
            event_to_message(&mouse(MouseEventKind::Down(MouseButton::Left), 10, 5)),
            Some(Message::PointerDown { column: 10, row: 5 })
        );
        assert_eq!(
            event_to_message(&mouse(MouseEventKind::Drag(MouseButton::Left), 12, 6)),
            Some(Message::PointerMove { column: 12, row: 6 })
        );
        assert_eq!(
            event_to_message(&mouse(MouseEventKind::Up(MouseButton::Left), 12, 7)),
            Some(Message::PointerUp { column: 12, row: 7 })
        );
    }

    #[test]
    fn other_events_ignored() {
        for kind in [
            MouseEventKind::Down(MouseButton::Right),
            MouseEventKind::Drag(MouseButton::Middle),
            MouseEventKind::Moved,
            MouseEventKind::ScrollDown,
        ] {
            assert_eq!(event_to_message(&mouse(kind, 1, 1)), None);
        }
        assert_eq!(event_to_message(&Event::Resize(80, 24)), None);
        assert_eq!(event_to_message(&Event::FocusLost), None);
    }
}
