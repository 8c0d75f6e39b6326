//! Item card rendering widget.
//!
//! A card is a bordered box holding the item title. Its look depends on
//! where it is in a drag: resting, selected, the dimmed slot a dragged card
//! left behind, or the lifted copy following the pointer.

use dragboard_protocol::Item;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Widget},
};

/// How a card is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CardStyle {
    /// Resting card.
    #[default]
    Normal,
    /// The selected card in the focused column.
    Selected,
    /// Where the dragged card currently sits on the board.
    Placeholder,
    /// The dragged card itself, drawn at the pointer.
    Lifted,
}

impl CardStyle {
    /// Border color for this style.
    ///
    /// # Examples
    ///
    /// ```
    /// use ratatui::style::Color;
    /// use dragboard_tui::widgets::CardStyle;
    ///
    /// assert_eq!(CardStyle::Normal.border_color(), Color::Gray);
    /// assert_eq!(CardStyle::Lifted.border_color(), Color::Yellow);
    /// ```
    #[must_use]
    pub const fn border_color(self) -> Color {
        match self {
            Self::Normal => Color::Gray,
            Self::Selected => Color::Cyan,
            Self::Placeholder => Color::DarkGray,
            Self::Lifted => Color::Yellow,
        }
    }

    fn title_style(self) -> Style {
        match self {
            Self::Normal => Style::new().fg(Color::White),
            Self::Selected => Style::new().fg(Color::LightCyan).add_modifier(Modifier::BOLD),
            Self::Placeholder => Style::new().fg(Color::DarkGray).add_modifier(Modifier::DIM),
            Self::Lifted => Style::new().fg(Color::LightYellow).add_modifier(Modifier::BOLD),
        }
    }

    const fn border_type(self) -> BorderType {
        match self {
            Self::Lifted => BorderType::Thick,
            Self::Placeholder => BorderType::Plain,
            Self::Normal | Self::Selected => BorderType::Rounded,
        }
    }
}

/// Renders an item card to the buffer.
///
/// Areas smaller than a bordered single line are skipped, except that a
/// clipped lifted card (partly off the board) still draws what fits.
///
/// # Layout
///
/// ```text
/// ╭──────────────╮
/// │ Item 1       │
/// ╰──────────────╯
/// ```
///
/// # Examples
///
/// ```
/// use ratatui::buffer::Buffer;
/// use ratatui::layout::Rect;
/// use dragboard_protocol::Item;
/// use dragboard_tui::widgets::{CardStyle, render_item_card};
///
/// let item = Item::new("item-1", "Item 1");
/// let area = Rect::new(0, 0, 20, 3);
/// let mut buf = Buffer::empty(area);
///
/// render_item_card(&item, CardStyle::Selected, area, &mut buf);
/// ```
pub fn render_item_card(item: &Item, style: CardStyle, area: Rect, buf: &mut Buffer) {
    if area.is_empty() || (style != CardStyle::Lifted && (area.width < 4 || area.height < 3)) {
        return;
    }

    let inner_width = usize::from(area.width.saturating_sub(4));
    let title = truncate_string(&item.title, inner_width);

    let card = Paragraph::new(Line::from(vec![
        Span::raw(" "),
        Span::styled(title, style.title_style()),
    ]))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(style.border_type())
            .border_style(Style::default().fg(style.border_color())),
    );

    card.render(area, buf);
}

/// Truncates a string to `max_width` characters, adding an ellipsis if cut.
fn truncate_string(s: &str, max_width: usize) -> String {
    if s.chars().count() <= max_width {
        s.to_string()
    } else if max_width > 1 {
        let truncated: String = s.chars().take(max_width - 1).collect();
        format!("{truncated}…")
    } else {
        s.chars().take(max_width).collect()
    }
}
