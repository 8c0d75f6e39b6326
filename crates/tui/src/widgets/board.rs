//! Kanban board rendering widget.
//!
//! This module renders the complete board: every column side by side and,
//! during a drag, the lifted card on top.

use dragboard_protocol::{Board, Id};
use ratatui::buffer::Buffer;

use super::{
    column::{ColumnHighlight, render_column},
    drag_overlay::render_drag_overlay,
};
use crate::{layout::BoardGeometry, sensor::DragSession};

/// What to highlight when drawing the board.
#[derive(Debug, Clone, Copy, Default)]
pub struct BoardView<'a> {
    /// Index of the focused column.
    pub focused_column: usize,
    /// Selected item within the focused column.
    pub selected_item: Option<usize>,
    /// The drag in progress, if any.
    pub drag: Option<&'a DragSession>,
}

/// Renders the complete board to the buffer.
///
/// `geometry` must have been computed from `board`. During a drag the
/// column owning the current collision target is lit, the dragged item's
/// slot is dimmed and the card itself is drawn at its translated position.
///
/// # Examples
///
/// ```
/// use ratatui::buffer::Buffer;
/// use ratatui::layout::Rect;
/// use dragboard_protocol::seed::default_board;
/// use dragboard_tui::layout::BoardGeometry;
/// use dragboard_tui::widgets::{BoardView, render_board};
///
/// let board = default_board();
/// let area = Rect::new(0, 0, 80, 20);
/// let geometry = BoardGeometry::compute(&board, area);
/// let mut buf = Buffer::empty(area);
///
/// render_board(&board, &geometry, &BoardView::default(), &mut buf);
/// ```
pub fn render_board(
    board: &Board,
    geometry: &BoardGeometry,
    view: &BoardView<'_>,
    buf: &mut Buffer,
) {
    let dragging = view.drag.map(|drag| drag.active.as_str());
    let drop_column = view
        .drag
        .and_then(|drag| board.find_column_index(drag.over.as_ref().map(Id::as_str)));

    let columns = board.columns().iter().zip(&geometry.columns);
    for (index, (column, column_geometry)) in columns.enumerate() {
        let focused = view.focused_column == index;
        let highlight = ColumnHighlight {
            focused,
            prev_focused: index > 0 && view.focused_column == index - 1,
            drop_target: drop_column == Some(index),
            selected_item: if focused { view.selected_item } else { None },
            dragging,
        };
        render_column(column, column_geometry, &highlight, buf);
    }

    if let Some(drag) = view.drag
        && let Some(item) = board.item(drag.active.as_str())
    {
        render_drag_overlay(item, drag.rect(), geometry.area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        sensor::SensorKind, test_utils::buffer_to_string, widgets::column::DROP_TARGET_COLOR,
    };
    use dragboard_protocol::{Delta, seed::default_board};
    use ratatui::layout::Rect;

    #[test]
    fn render_seed_board() {
        let board = default_board();
        let area = Rect::new(0, 0, 90, 12);
        let geometry = BoardGeometry::compute(&board, area);
        let mut buf = Buffer::empty(area);

        render_board(&board, &geometry, &BoardView::default(), &mut buf);

        let content = buffer_to_string(&buf);
        assert!(content.contains("To do (2)"));
        assert!(content.contains("In progress (2)"));
        assert!(content.contains("Done (2)"));
        for n in 1..=6 {
            assert!(content.contains(&format!("Item {n}")));
        }
    }

    #[test]
    fn render_board_narrow_terminal() {
        let board = default_board();
        let area = Rect::new(0, 0, 36, 8);
        let geometry = BoardGeometry::compute(&board, area);
        let mut buf = Buffer::empty(area);

        // Should not panic.
        render_board(&board, &geometry, &BoardView::default(), &mut buf);
    }

    #[test]
    fn drag_lights_target_column_and_draws_overlay() {
        let board = default_board();
        let area = Rect::new(0, 0, 90, 12);
        let geometry = BoardGeometry::compute(&board, area);
        let mut session = DragSession::new(
            "item-1".into(),
            SensorKind::Pointer,
            geometry.card("item-1").unwrap().area,
        );
        session.delta = Delta::new(60, 4);
        session.over = Some("item-6".into());

        let mut buf = Buffer::empty(area);
        let view = BoardView {
            drag: Some(&session),
            ..BoardView::default()
        };
        render_board(&board, &geometry, &view, &mut buf);

        // Done column frame is lit.
        assert_eq!(buf[(60, 0)].fg, DROP_TARGET_COLOR);
        // Lifted card drawn at the translated rect (2 + 60, 1 + 4).
        assert_eq!(buf[(62, 5)].symbol(), "┏");
    }

    #[test]
    fn drag_over_nothing_lights_no_column() {
        let board = default_board();
        let area = Rect::new(0, 0, 90, 12);
        let geometry = BoardGeometry::compute(&board, area);
        let mut session = DragSession::new(
            "item-1".into(),
            SensorKind::Pointer,
            geometry.card("item-1").unwrap().area,
        );
        session.over = None;

        let mut buf = Buffer::empty(area);
        let view = BoardView {
            focused_column: 1,
            drag: Some(&session),
            ..BoardView::default()
        };
        render_board(&board, &geometry, &view, &mut buf);

        for x in [0, 30, 60] {
            assert_ne!(buf[(x, 0)].fg, DROP_TARGET_COLOR);
        }
    }
}
