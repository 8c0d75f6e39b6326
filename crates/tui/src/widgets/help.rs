//! Help overlay widget, toggled with `?`.

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Flex, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Widget},
};

/// Bindings grouped under a heading.
type Section = (&'static str, &'static [(&'static str, &'static str)]);

const SECTIONS: &[Section] = &[
    (
        "Navigation",
        &[
            ("← →", "Previous / next column"),
            ("↑ ↓", "Previous / next card"),
            ("Esc", "Clear selection"),
        ],
    ),
    (
        "Dragging",
        &[
            ("Enter", "Pick up / drop card"),
            ("← → ↑ ↓", "Move the held card"),
            ("Esc", "Cancel the drag"),
            ("Mouse", "Drag a card to move it"),
        ],
    ),
    (
        "Other",
        &[
            ("r", "Reset the board"),
            ("?", "Toggle help"),
            ("Ctrl+C", "Quit"),
        ],
    ),
];

const POPUP_WIDTH: u16 = 40;
const KEY_COLUMN: usize = 11;

/// Renders the help popup centered in `area`, clearing what is beneath.
///
/// # Examples
///
/// ```
/// use ratatui::buffer::Buffer;
/// use ratatui::layout::Rect;
/// use dragboard_tui::widgets::render_help_overlay;
///
/// let area = Rect::new(0, 0, 80, 24);
/// let mut buf = Buffer::empty(area);
///
/// render_help_overlay(area, &mut buf);
/// ```
pub fn render_help_overlay(area: Rect, buf: &mut Buffer) {
    let lines = help_lines();
    let height = u16::try_from(lines.len() + 2).unwrap_or(u16::MAX);
    let popup = popup_area(area, POPUP_WIDTH, height);

    Clear.render(popup, buf);

    let accent = Style::default().fg(Color::LightYellow);
    let block = Block::default()
        .title(Span::styled(" Help ", accent.add_modifier(Modifier::BOLD)))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(accent);

    Paragraph::new(lines).block(block).render(popup, buf);
}

fn help_lines() -> Vec<Line<'static>> {
    let heading = Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD);
    let key = Style::default().fg(Color::Green);
    let description = Style::default().fg(Color::White);

    let mut lines = vec![Line::default()];
    for (title, bindings) in SECTIONS {
        lines.push(Line::styled(format!("  {title}"), heading));
        lines.extend(bindings.iter().map(|(keys, text)| {
            Line::from(vec![
                Span::styled(format!("  {keys:<KEY_COLUMN$}"), key),
                Span::styled(*text, description),
            ])
        }));
        lines.push(Line::default());
    }
    lines.push(Line::styled(
        "  Press any key to close",
        Style::default()
            .fg(Color::DarkGray)
            .add_modifier(Modifier::ITALIC),
    ));
    lines
}

/// Centers a `width` × `height` box in `area`, shrinking it to fit.
fn popup_area(area: Rect, width: u16, height: u16) -> Rect {
    let [row] = Layout::vertical([Constraint::Length(height)])
        .flex(Flex::Center)
        .areas(area);
    let [popup] = Layout::horizontal([Constraint::Length(width)])
        .flex(Flex::Center)
        .areas(row);
    popup
}
