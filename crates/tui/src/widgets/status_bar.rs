//! Status bar rendering widget.
//!
//! This module provides functions for rendering the footer status bar
//! with keybinding hints and the outcome of the last action.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Widget},
};

/// Renders the status bar.
///
/// While a drag is in progress the hints switch to the drop and cancel keys.
/// When `message` is set it is shown before the hints.
///
/// # Layout
///
/// ```text
/// ╭────────────────────────────────────────────────────╮
/// │ Moved Item 1 to Done  |  ←→↑↓ Navigate  Enter Pick  │
/// ╰────────────────────────────────────────────────────╯
/// ```
///
/// # Examples
///
/// ```
/// use ratatui::buffer::Buffer;
/// use ratatui::layout::Rect;
/// use dragboard_tui::widgets::render_status_bar;
///
/// let area = Rect::new(0, 0, 80, 3);
/// let mut buf = Buffer::empty(area);
///
/// render_status_bar(Some("Moved Item 1 to Done"), false, area, &mut buf);
/// ```
pub fn render_status_bar(message: Option<&str>, dragging: bool, area: Rect, buf: &mut Buffer) {
    let key_style = Style::default().fg(Color::Yellow);
    let text_style = Style::default().fg(Color::White);
    let message_style = Style::default().fg(Color::Cyan);

    let hints: &[(&str, &str)] = if dragging {
        &[("←→↑↓", " Move  "), ("Enter", " Drop  "), ("Esc", " Cancel")]
    } else {
        &[
            ("←→↑↓", " Navigate  "),
            ("Enter", " Pick up  "),
            ("r", " Reset  "),
            ("?", " Help  "),
            ("Ctrl+C", " Quit"),
        ]
    };

    let mut spans = Vec::with_capacity(hints.len() * 2 + 2);
    if let Some(message) = message {
        spans.push(Span::styled(format!(" {message}"), message_style));
        spans.push(Span::styled("  |  ", text_style));
    } else {
        spans.push(Span::raw(" "));
    }
    for (key, label) in hints {
        spans.push(Span::styled(*key, key_style));
        spans.push(Span::styled(*label, text_style));
    }

    let status_bar = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::DarkGray)),
    );

    status_bar.render(area, buf);
}
