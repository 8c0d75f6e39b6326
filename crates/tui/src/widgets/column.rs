//! Column rendering widget.
//!
//! Draws one column: a titled frame sharing its left edge with the previous
//! column, then the cards laid out by [`ColumnGeometry`].

use dragboard_protocol::Column;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    symbols::border,
    text::{Line, Span},
    widgets::{Block, Paragraph, Widget},
};

use super::item_card::{CardStyle, render_item_card};
use crate::layout::{CARD_HEIGHT, ColumnGeometry, ColumnPosition};

/// Border set for the first column: rounded on the left, no right edge.
const BORDER_SET_FIRST: border::Set = border::Set {
    top_left: "╭",
    top_right: "─",
    bottom_left: "╰",
    bottom_right: "─",
    vertical_left: "│",
    vertical_right: " ",
    horizontal_top: "─",
    horizontal_bottom: "─",
};

/// Border set for middle columns: joins the previous column, no right edge.
const BORDER_SET_MIDDLE: border::Set = border::Set {
    top_left: "┬",
    top_right: "─",
    bottom_left: "┴",
    bottom_right: "─",
    vertical_left: "│",
    vertical_right: " ",
    horizontal_top: "─",
    horizontal_bottom: "─",
};

/// Border set for the last column: joins the previous column, rounded on the right.
const BORDER_SET_LAST: border::Set = border::Set {
    top_left: "┬",
    top_right: "╮",
    bottom_left: "┴",
    bottom_right: "╯",
    vertical_left: "│",
    vertical_right: "│",
    horizontal_top: "─",
    horizontal_bottom: "─",
};

/// Single-column boards get a plain rounded frame.
const BORDER_SET_ONLY: border::Set = border::ROUNDED;

/// Color of the column the dragged card would land in.
pub const DROP_TARGET_COLOR: Color = Color::Green;

/// Highlighting applied to a column.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ColumnHighlight<'a> {
    /// The column has keyboard focus.
    pub focused: bool,
    /// The column to the left has focus, so the shared edge is lit.
    pub prev_focused: bool,
    /// The dragged card is over this column.
    pub drop_target: bool,
    /// Selected item index; only honored when focused.
    pub selected_item: Option<usize>,
    /// Id of the item being dragged, drawn as a placeholder.
    pub dragging: Option<&'a str>,
}

impl ColumnHighlight<'_> {
    fn border_color(&self) -> Color {
        if self.drop_target {
            DROP_TARGET_COLOR
        } else if self.focused {
            Color::Cyan
        } else {
            Color::DarkGray
        }
    }
}

/// Renders a single column to the buffer.
///
/// # Layout
///
/// ```text
/// ╭ To do (2) ───────────┬
/// │ ╭──────────────────╮ │
/// │ │ Item 1           │ │
/// │ ╰──────────────────╯ │
/// │ ╭──────────────────╮ │
/// │ │ Item 2           │ │
/// │ ╰──────────────────╯ │
/// ╰──────────────────────┴
/// ```
///
/// # Examples
///
/// ```
/// use ratatui::buffer::Buffer;
/// use ratatui::layout::Rect;
/// use dragboard_protocol::seed::default_board;
/// use dragboard_tui::layout::BoardGeometry;
/// use dragboard_tui::widgets::{ColumnHighlight, render_column};
///
/// let board = default_board();
/// let area = Rect::new(0, 0, 90, 20);
/// let geometry = BoardGeometry::compute(&board, area);
/// let mut buf = Buffer::empty(area);
///
/// render_column(
///     &board.columns()[0],
///     &geometry.columns[0],
///     &ColumnHighlight { focused: true, ..ColumnHighlight::default() },
///     &mut buf,
/// );
/// ```
pub fn render_column(
    column: &Column,
    geometry: &ColumnGeometry,
    highlight: &ColumnHighlight<'_>,
    buf: &mut Buffer,
) {
    let area = geometry.area;
    if area.is_empty() {
        return;
    }

    let border_color = highlight.border_color();
    let title_style = if highlight.drop_target {
        Style::default()
            .fg(DROP_TARGET_COLOR)
            .add_modifier(Modifier::BOLD)
    } else if highlight.focused {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::White)
    };

    let border_set = match geometry.position {
        ColumnPosition::First => BORDER_SET_FIRST,
        ColumnPosition::Middle => BORDER_SET_MIDDLE,
        ColumnPosition::Last => BORDER_SET_LAST,
        ColumnPosition::Only => BORDER_SET_ONLY,
    };

    let block = Block::default()
        .title(Span::styled(
            format!(" {} ({}) ", column.title, column.len()),
            title_style,
        ))
        .borders(geometry.position.borders())
        .border_set(border_set)
        .border_style(Style::default().fg(border_color));
    block.render(area, buf);

    // The shared left edge takes the color of whichever neighbor is lit.
    if highlight.prev_focused && !highlight.focused && !highlight.drop_target {
        let edge = Style::default().fg(Color::Cyan);
        for y in area.top()..area.bottom() {
            if let Some(cell) = buf.cell_mut((area.x, y)) {
                cell.set_style(edge);
            }
        }
    }

    let body = geometry.body;
    if column.is_empty() {
        if !highlight.drop_target {
            render_hint("No items", Style::default().fg(Color::DarkGray), body, buf);
        }
    } else {
        for (index, (item, card)) in column.items.iter().zip(&geometry.cards).enumerate() {
            let style = if highlight.dragging == Some(item.id.as_str()) {
                CardStyle::Placeholder
            } else if highlight.focused && highlight.selected_item == Some(index) {
                CardStyle::Selected
            } else {
                CardStyle::Normal
            };
            render_item_card(item, style, card.area, buf);
        }
    }

    let used = u16::try_from(geometry.cards.len())
        .unwrap_or(u16::MAX)
        .saturating_mul(CARD_HEIGHT);
    let free = Rect {
        y: body.y.saturating_add(used),
        height: body.height.saturating_sub(used),
        ..body
    };
    if geometry.hidden > 0 {
        render_hint(
            &format!("+{} more", geometry.hidden),
            Style::default().fg(Color::Gray),
            free,
            buf,
        );
    } else if highlight.drop_target && highlight.dragging.is_some() {
        render_hint(
            "+ drop here",
            Style::default().fg(DROP_TARGET_COLOR),
            free,
            buf,
        );
    }
}

/// Renders a one-line italic hint at the top of `area`, if it has room.
fn render_hint(text: &str, style: Style, area: Rect, buf: &mut Buffer) {
    if area.is_empty() {
        return;
    }
    let line = Rect { height: 1, ..area };
    Paragraph::new(Line::from(Span::styled(
        format!(" {text}"),
        style.add_modifier(Modifier::ITALIC),
    )))
    .render(line, buf);
}
