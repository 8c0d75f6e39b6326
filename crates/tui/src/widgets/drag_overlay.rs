//! The card that follows the pointer during a drag.

use dragboard_protocol::Item;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    widgets::{Clear, Widget},
};

use super::item_card::{CardStyle, render_item_card};
use crate::collision::DragRect;

/// Draws `item` as a lifted card at `rect`, clipped to `bounds`.
///
/// Nothing is drawn when the card lies entirely outside `bounds`.
///
/// # Examples
///
/// ```
/// use ratatui::buffer::Buffer;
/// use ratatui::layout::Rect;
/// use dragboard_protocol::Item;
/// use dragboard_tui::collision::DragRect;
/// use dragboard_tui::widgets::render_drag_overlay;
///
/// let area = Rect::new(0, 0, 40, 10);
/// let mut buf = Buffer::empty(area);
/// let item = Item::new("item-1", "Item 1");
/// render_drag_overlay(&item, DragRect::new(-3, 2, 20, 3), area, &mut buf);
/// ```
pub fn render_drag_overlay(item: &Item, rect: DragRect, bounds: Rect, buf: &mut Buffer) {
    let Some(area) = rect.clip(bounds) else {
        return;
    };
    Clear.render(area, buf);
    render_item_card(item, CardStyle::Lifted, area, buf);
}
