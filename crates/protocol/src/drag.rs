//! Drag events and board reconciliation.
//!
//! A drag gesture produces a stream of [`DragOverEvent`]s while the pointer
//! moves and a single [`DragEndEvent`] on release. Each handler is a pure
//! function of the current board and the event: it returns the next board, or
//! `None` when the event does not change anything.
//!
//! The two handlers split the work between them:
//!
//! - [`handle_drag_over`] moves an item *across* columns, live, as the pointer
//!   crosses into another column.
//! - [`handle_drag_end`] reorders an item *within* its column when the
//!   gesture is released.
//!
//! Each ignores the other's case, so a gesture that starts in one column and
//! ends in another is committed column-by-column while dragging and only
//! settles its final position on release.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::board::Board;
use crate::item::{Id, Item};

/// Cumulative pointer displacement since the drag started, in cells.
///
/// Positive `y` means the pointer moved down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Delta {
    /// Horizontal displacement.
    pub x: i32,
    /// Vertical displacement.
    pub y: i32,
}

impl Delta {
    /// Creates a new displacement.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Returns `true` if the pointer has moved down since the drag started.
    #[must_use]
    pub const fn is_downward(self) -> bool {
        self.y > 0
    }
}

/// Fired continuously while a drag is in progress.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DragOverEvent {
    /// The dragged item.
    pub active: Id,
    /// The droppable currently under the dragged card, if any.
    pub over: Option<Id>,
    /// Displacement since the drag started.
    pub delta: Delta,
}

impl DragOverEvent {
    /// Creates a new drag-over event.
    #[must_use]
    pub fn new(active: impl Into<Id>, over: Option<Id>, delta: Delta) -> Self {
        Self {
            active: active.into(),
            over,
            delta,
        }
    }
}

/// Fired once when the drag gesture is released.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DragEndEvent {
    /// The dragged item.
    pub active: Id,
    /// The droppable under the dragged card at release time, if any.
    pub over: Option<Id>,
}

impl DragEndEvent {
    /// Creates a new drag-end event.
    #[must_use]
    pub fn new(active: impl Into<Id>, over: Option<Id>) -> Self {
        Self {
            active: active.into(),
            over,
        }
    }
}

/// Reorders the dragged item within its own column.
///
/// Returns `None` when either id does not resolve to a column, when the two
/// resolve to different columns (cross-column moves are settled by
/// [`handle_drag_over`]), or when the item is already in place.
///
/// Dropping onto the column's own surface (rather than a card) moves the item
/// to the end of the column.
///
/// # Examples
///
/// ```
/// use dragboard_protocol::drag::{handle_drag_end, DragEndEvent};
/// use dragboard_protocol::seed::default_board;
///
/// let board = default_board();
/// let event = DragEndEvent::new("item-2", Some("item-1".into()));
/// let next = handle_drag_end(&board, &event).expect("board changes");
///
/// let ids: Vec<_> = next.column_at(0).unwrap().items.iter().map(|i| i.id.as_str()).collect();
/// assert_eq!(ids, ["item-2", "item-1"]);
/// ```
#[must_use]
pub fn handle_drag_end(board: &Board, event: &DragEndEvent) -> Option<Board> {
    let active_id = event.active.as_str();
    let over_id = event.over.as_ref().map(Id::as_str);

    let active_column = board.find_column_index(Some(active_id))?;
    let over_column = board.find_column_index(over_id)?;
    if active_column != over_column {
        debug!(active = active_id, over = ?over_id, "drag end across columns ignored");
        return None;
    }

    let column = board.column_at(active_column)?;
    let active_index = column.position(active_id)?;
    let over_index = over_id
        .and_then(|id| column.position(id))
        .unwrap_or_else(|| column.len().saturating_sub(1));

    if active_index == over_index {
        return None;
    }

    let items = array_move(&column.items, active_index, over_index);
    debug!(
        column = %column.id,
        item = active_id,
        from = active_index,
        to = over_index,
        "reordered item within column"
    );
    Some(board.with_items_replaced(vec![(active_column, items)]))
}

/// Moves the dragged item into the column under the pointer.
///
/// Returns `None` when either id does not resolve to a column or when both
/// resolve to the same column (same-column reordering is settled by
/// [`handle_drag_end`]).
///
/// The insertion index is the hovered card's position, or one past it when
/// the hovered card is the destination's last and the pointer has moved down.
/// Hovering the column itself appends.
///
/// # Examples
///
/// ```
/// use dragboard_protocol::drag::{handle_drag_over, Delta, DragOverEvent};
/// use dragboard_protocol::seed::default_board;
///
/// let board = default_board();
/// let event = DragOverEvent::new("item-3", Some("item-5".into()), Delta::new(0, -2));
/// let next = handle_drag_over(&board, &event).expect("board changes");
///
/// let ids: Vec<_> = next.column_at(2).unwrap().items.iter().map(|i| i.id.as_str()).collect();
/// assert_eq!(ids, ["item-3", "item-5", "item-6"]);
/// ```
#[must_use]
pub fn handle_drag_over(board: &Board, event: &DragOverEvent) -> Option<Board> {
    let active_id = event.active.as_str();
    let over_id = event.over.as_ref().map(Id::as_str);

    let active_column = board.find_column_index(Some(active_id))?;
    let over_column = board.find_column_index(over_id)?;
    if active_column == over_column {
        return None;
    }

    // Both sides are computed from this one snapshot.
    let active_items = &board.column_at(active_column)?.items;
    let over_items = &board.column_at(over_column)?.items;

    let active_index = active_items.iter().position(|item| item.id == active_id)?;
    let over_index = over_id.and_then(|id| over_items.iter().position(|item| item.id == id));

    let new_index = insertion_index(over_index, over_items.len(), event.delta);

    let source: Vec<Item> = active_items
        .iter()
        .filter(|item| item.id != active_id)
        .cloned()
        .collect();
    let destination = splice(over_items, new_index, active_items[active_index].clone());

    debug!(
        item = active_id,
        over = ?over_id,
        index = new_index,
        delta_y = event.delta.y,
        "moved item across columns"
    );
    Some(board.with_items_replaced(vec![
        (active_column, source),
        (over_column, destination),
    ]))
}

/// Computes where the dragged item lands in the destination column.
///
/// `over_index` is the hovered card's position in the destination, or `None`
/// when the column itself is hovered. The result may exceed `len`; the splice
/// clamps it.
///
/// # Examples
///
/// ```
/// use dragboard_protocol::drag::{insertion_index, Delta};
///
/// // Hovering the first of two cards: insert before it.
/// assert_eq!(insertion_index(Some(0), 2, Delta::new(0, 5)), 0);
/// // Hovering the last card while moving down: insert after it.
/// assert_eq!(insertion_index(Some(1), 2, Delta::new(0, 5)), 2);
/// // Hovering the column surface: past the end.
/// assert_eq!(insertion_index(None, 2, Delta::default()), 3);
/// ```
#[must_use]
pub fn insertion_index(over_index: Option<usize>, len: usize, delta: Delta) -> usize {
    match over_index {
        Some(index) => {
            let put_on_below_last_item = index + 1 == len && delta.is_downward();
            if put_on_below_last_item { index + 1 } else { index }
        }
        None => len + 1,
    }
}

/// Returns `items[..index] ++ [item] ++ items[index..]` with `index` clamped.
fn splice(items: &[Item], index: usize, item: Item) -> Vec<Item> {
    let (prefix, suffix) = items.split_at(index.min(items.len()));
    let mut spliced = Vec::with_capacity(items.len() + 1);
    spliced.extend_from_slice(prefix);
    spliced.push(item);
    spliced.extend_from_slice(suffix);
    spliced
}

/// Removes the element at `from` and reinserts it at `to`.
fn array_move(items: &[Item], from: usize, to: usize) -> Vec<Item> {
    let mut moved = items.to_vec();
    let item = moved.remove(from);
    moved.insert(to.min(moved.len()), item);
    moved
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::seed::default_board;

    fn ids(board: &Board, column: usize) -> Vec<&str> {
        board
            .column_at(column)
            .expect("column exists")
            .items
            .iter()
            .map(|item| item.id.as_str())
            .collect()
    }

    fn over(id: &str) -> Option<Id> {
        Some(Id::from(id))
    }

    #[test]
    fn drag_end_reorders_within_column() {
        let board = default_board();
        let next = handle_drag_end(&board, &DragEndEvent::new("item-2", over("item-1")))
            .expect("board changes");

        assert_eq!(ids(&next, 0), ["item-2", "item-1"]);
        assert!(Arc::ptr_eq(&board.columns()[1], &next.columns()[1]));
        assert!(Arc::ptr_eq(&board.columns()[2], &next.columns()[2]));
    }

    #[test]
    fn drag_end_onto_self_is_noop() {
        let board = default_board();
        assert!(handle_drag_end(&board, &DragEndEvent::new("item-1", over("item-1"))).is_none());
    }

    #[test]
    fn drag_end_across_columns_is_noop() {
        let board = default_board();
        assert!(handle_drag_end(&board, &DragEndEvent::new("item-1", over("item-3"))).is_none());
        assert!(handle_drag_end(&board, &DragEndEvent::new("item-1", over("column-2"))).is_none());
    }

    #[test]
    fn drag_end_without_target_is_noop() {
        let board = default_board();
        assert!(handle_drag_end(&board, &DragEndEvent::new("item-1", None)).is_none());
        assert!(handle_drag_end(&board, &DragEndEvent::new("item-1", over("nope"))).is_none());
        assert!(handle_drag_end(&board, &DragEndEvent::new("nope", over("item-1"))).is_none());
    }

    #[test]
    fn drag_end_onto_own_column_moves_to_end() {
        let board = default_board();
        let next = handle_drag_end(&board, &DragEndEvent::new("item-1", over("column-1")))
            .expect("board changes");
        assert_eq!(ids(&next, 0), ["item-2", "item-1"]);

        // Already last: nothing to do.
        assert!(handle_drag_end(&board, &DragEndEvent::new("item-2", over("column-1"))).is_none());
    }

    #[test]
    fn drag_end_with_column_as_active_is_noop() {
        let board = default_board();
        assert!(handle_drag_end(&board, &DragEndEvent::new("column-1", over("item-1"))).is_none());
    }

    #[test]
    fn drag_end_moves_rather_than_swaps() {
        let board = Board::try_from_columns(vec![crate::Column::new("c", "C").with_items([
            Item::new("a", "A"),
            Item::new("b", "B"),
            Item::new("c1", "C"),
            Item::new("d", "D"),
        ])])
        .expect("valid board");

        let next = handle_drag_end(&board, &DragEndEvent::new("a", over("c1"))).expect("changes");
        assert_eq!(ids(&next, 0), ["b", "c1", "a", "d"]);

        let next = handle_drag_end(&board, &DragEndEvent::new("d", over("b"))).expect("changes");
        assert_eq!(ids(&next, 0), ["a", "d", "b", "c1"]);
    }

    #[test]
    fn drag_over_moves_before_hovered_item_when_moving_up() {
        let board = default_board();
        let event = DragOverEvent::new("item-3", over("item-5"), Delta::new(4, -1));
        let next = handle_drag_over(&board, &event).expect("board changes");

        assert_eq!(ids(&next, 1), ["item-4"]);
        assert_eq!(ids(&next, 2), ["item-3", "item-5", "item-6"]);
        assert!(Arc::ptr_eq(&board.columns()[0], &next.columns()[0]));
    }

    #[test]
    fn drag_over_below_last_item_when_moving_down() {
        let board = default_board();
        let event = DragOverEvent::new("item-1", over("item-4"), Delta::new(10, 3));
        let next = handle_drag_over(&board, &event).expect("board changes");

        assert_eq!(ids(&next, 0), ["item-2"]);
        assert_eq!(ids(&next, 1), ["item-3", "item-4", "item-1"]);
    }

    #[test]
    fn drag_over_last_item_when_moving_up_inserts_before() {
        let board = default_board();
        let event = DragOverEvent::new("item-1", over("item-4"), Delta::new(10, -3));
        let next = handle_drag_over(&board, &event).expect("board changes");

        assert_eq!(ids(&next, 1), ["item-3", "item-1", "item-4"]);
    }

    #[test]
    fn drag_over_non_last_item_ignores_downward_motion() {
        let board = default_board();
        let event = DragOverEvent::new("item-1", over("item-3"), Delta::new(10, 3));
        let next = handle_drag_over(&board, &event).expect("board changes");

        assert_eq!(ids(&next, 1), ["item-1", "item-3", "item-4"]);
    }

    #[test]
    fn drag_over_column_surface_appends() {
        let board = default_board();
        let event = DragOverEvent::new("item-2", over("column-3"), Delta::default());
        let next = handle_drag_over(&board, &event).expect("board changes");

        assert_eq!(ids(&next, 0), ["item-1"]);
        assert_eq!(ids(&next, 2), ["item-5", "item-6", "item-2"]);
    }

    #[test]
    fn drag_over_into_empty_column() {
        let board = Board::try_from_columns(vec![
            crate::Column::new("left", "Left").with_items([Item::new("a", "A")]),
            crate::Column::new("right", "Right"),
        ])
        .expect("valid board");

        let event = DragOverEvent::new("a", over("right"), Delta::new(20, 0));
        let next = handle_drag_over(&board, &event).expect("board changes");

        assert!(next.column_at(0).expect("left").is_empty());
        assert_eq!(ids(&next, 1), ["a"]);
    }

    #[test]
    fn drag_over_same_column_is_noop() {
        let board = default_board();
        let event = DragOverEvent::new("item-4", over("item-4"), Delta::new(0, 2));
        assert!(handle_drag_over(&board, &event).is_none());

        let event = DragOverEvent::new("item-3", over("column-2"), Delta::new(0, 2));
        assert!(handle_drag_over(&board, &event).is_none());
    }

    #[test]
    fn drag_over_unresolved_ids_are_noop() {
        let board = default_board();
        let delta = Delta::new(1, 1);
        for (active, target) in [("item-1", None), ("item-1", over("x")), ("x", over("item-5"))] {
            let event = DragOverEvent::new(active, target, delta);
            assert!(handle_drag_over(&board, &event).is_none());
        }
    }

    #[test]
    fn drag_over_with_column_as_active_is_noop() {
        let board = default_board();
        let event = DragOverEvent::new("column-1", over("item-5"), Delta::default());
        assert!(handle_drag_over(&board, &event).is_none());
    }

    #[test]
    fn insertion_index_rules() {
        assert_eq!(insertion_index(Some(0), 3, Delta::new(0, 1)), 0);
        assert_eq!(insertion_index(Some(2), 3, Delta::new(0, 1)), 3);
        assert_eq!(insertion_index(Some(2), 3, Delta::new(0, 0)), 2);
        assert_eq!(insertion_index(Some(2), 3, Delta::new(0, -1)), 2);
        assert_eq!(insertion_index(None, 0, Delta::default()), 1);
        assert_eq!(insertion_index(None, 3, Delta::new(0, 9)), 4);
    }

    #[test]
    fn splice_clamps_out_of_range_index() {
        let items = vec![Item::new("a", "A"), Item::new("b", "B")];
        let spliced = splice(&items, 10, Item::new("z", "Z"));
        let ids: Vec<_> = spliced.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, ["a", "b", "z"]);
    }
}
