//! Layout measurements and board geometry.
//!
//! [`BoardGeometry`] is computed from the board and the area it is drawn in.
//! Rendering, pointer hit-testing and collision detection all read the same
//! geometry, so what the user sees is what the drag logic measures.

use dragboard_protocol::{Board, Id};
use ratatui::{
    layout::{Constraint, Layout, Rect},
    widgets::{Block, Borders},
};

use crate::collision::{DragRect, Droppable};

/// Height of the header bar in rows.
pub const HEADER_HEIGHT: u16 = 3;

/// Height of the status bar in rows.
pub const STATUS_BAR_HEIGHT: u16 = 3;

/// Height of each item card in rows (border, title, border).
pub const CARD_HEIGHT: u16 = 3;

/// Minimum terminal height for useful rendering.
///
/// Fits the status bar, column borders and two cards.
pub const MIN_HEIGHT: u16 = STATUS_BAR_HEIGHT + 2 + 2 * CARD_HEIGHT;

/// Minimum terminal height for rendering with header.
///
/// Between `MIN_HEIGHT` and this, the header is hidden to reclaim its rows.
pub const MIN_HEIGHT_WITH_HEADER: u16 = MIN_HEIGHT + HEADER_HEIGHT;

/// Minimum terminal width for useful rendering.
pub const MIN_WIDTH: u16 = 36;

/// Position of a column in the horizontal layout.
///
/// Adjacent columns share a border: every column draws its left edge and
/// only the last one draws a right edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnPosition {
    /// Leftmost column.
    First,
    /// Any column between the first and the last.
    Middle,
    /// Rightmost column.
    Last,
    /// The board has a single column.
    Only,
}

impl ColumnPosition {
    /// Returns the position of column `index` among `count` columns.
    #[must_use]
    pub const fn of(index: usize, count: usize) -> Self {
        if count <= 1 {
            Self::Only
        } else if index + 1 >= count {
            Self::Last
        } else if index == 0 {
            Self::First
        } else {
            Self::Middle
        }
    }

    /// Borders drawn by a column at this position.
    #[must_use]
    pub fn borders(self) -> Borders {
        match self {
            Self::First | Self::Middle => Borders::TOP | Borders::BOTTOM | Borders::LEFT,
            Self::Last | Self::Only => Borders::ALL,
        }
    }
}

/// Where one card sits on screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardGeometry {
    /// The item shown on the card.
    pub id: Id,
    /// The card's bordered area.
    pub area: Rect,
}

/// Where one column and its visible cards sit on screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnGeometry {
    /// The column's id.
    pub id: Id,
    /// The whole column, borders included.
    pub area: Rect,
    /// The inside of the borders; the column's own drop surface.
    pub body: Rect,
    /// Border layout of this column.
    pub position: ColumnPosition,
    /// Cards that fit in the body, top to bottom.
    pub cards: Vec<CardGeometry>,
    /// Items that did not fit.
    pub hidden: usize,
}

/// Screen geometry of the whole board.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BoardGeometry {
    /// The area the board was laid out in.
    pub area: Rect,
    /// One entry per column, in display order.
    pub columns: Vec<ColumnGeometry>,
}

impl BoardGeometry {
    /// Lays the board out in `area`.
    ///
    /// Columns get equal widths. Cards are stacked from the top of each
    /// column's body with a one-cell margin on both sides; cards that would
    /// overflow the body are counted in [`ColumnGeometry::hidden`].
    ///
    /// # Examples
    ///
    /// ```
    /// use ratatui::layout::Rect;
    /// use dragboard_protocol::seed::default_board;
    /// use dragboard_tui::layout::BoardGeometry;
    ///
    /// let geometry = BoardGeometry::compute(&default_board(), Rect::new(0, 0, 90, 20));
    /// assert_eq!(geometry.columns.len(), 3);
    /// assert_eq!(geometry.columns[0].cards.len(), 2);
    /// ```
    #[must_use]
    pub fn compute(board: &Board, area: Rect) -> Self {
        let count = board.len();
        if count == 0 || area.is_empty() {
            return Self {
                area,
                columns: Vec::new(),
            };
        }

        let ratio = u32::try_from(count).unwrap_or(u32::MAX);
        let areas = Layout::horizontal((0..count).map(|_| Constraint::Ratio(1, ratio))).split(area);

        let columns = board
            .columns()
            .iter()
            .zip(areas.iter())
            .enumerate()
            .map(|(index, (column, &column_area))| {
                let position = ColumnPosition::of(index, count);
                let body = Block::default().borders(position.borders()).inner(column_area);

                let capacity = usize::from(body.height / CARD_HEIGHT);
                let card_x = body.x.saturating_add(1);
                let card_width = body.width.saturating_sub(2);
                let cards: Vec<CardGeometry> = column
                    .items
                    .iter()
                    .take(capacity)
                    .zip((0u16..).map(|i| body.y + i * CARD_HEIGHT))
                    .map(|(item, y)| CardGeometry {
                        id: item.id.clone(),
                        area: Rect::new(card_x, y, card_width, CARD_HEIGHT),
                    })
                    .collect();

                ColumnGeometry {
                    id: column.id.clone(),
                    area: column_area,
                    body,
                    position,
                    hidden: column.len().saturating_sub(cards.len()),
                    cards,
                }
            })
            .collect();

        Self { area, columns }
    }

    /// Returns the index of the column containing the point.
    #[must_use]
    pub fn column_at(&self, x: u16, y: u16) -> Option<usize> {
        self.columns
            .iter()
            .position(|column| column.area.contains((x, y).into()))
    }

    /// Returns `(column, card)` indices of the card containing the point.
    #[must_use]
    pub fn card_at(&self, x: u16, y: u16) -> Option<(usize, usize)> {
        let column = self.column_at(x, y)?;
        let card = self.columns[column]
            .cards
            .iter()
            .position(|card| card.area.contains((x, y).into()))?;
        Some((column, card))
    }

    /// Returns the geometry of the card showing the given item.
    #[must_use]
    pub fn card(&self, id: &str) -> Option<&CardGeometry> {
        self.columns
            .iter()
            .flat_map(|column| column.cards.iter())
            .find(|card| card.id == id)
    }

    /// Width of one column, used as the keyboard sensor's horizontal step.
    #[must_use]
    pub fn column_width(&self) -> u16 {
        self.columns.first().map_or(0, |column| column.area.width)
    }

    /// Returns every drop target: each column's body followed by its cards.
    ///
    /// Order matters: collision ties go to the earliest droppable.
    #[must_use]
    pub fn droppables(&self) -> Vec<Droppable> {
        self.columns
            .iter()
            .flat_map(|column| {
                std::iter::once(Droppable::new(column.id.clone(), DragRect::from(column.body)))
                    .chain(
                        column
                            .cards
                            .iter()
                            .map(|card| Droppable::new(card.id.clone(), DragRect::from(card.area))),
                    )
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dragboard_protocol::{Column, Item, seed::default_board};

    #[test]
    fn column_positions() {
        assert_eq!(ColumnPosition::of(0, 3), ColumnPosition::First);
        assert_eq!(ColumnPosition::of(1, 3), ColumnPosition::Middle);
        assert_eq!(ColumnPosition::of(2, 3), ColumnPosition::Last);
        assert_eq!(ColumnPosition::of(0, 1), ColumnPosition::Only);
    }

    #[test]
    fn columns_split_evenly_with_shared_borders() {
        let geometry = BoardGeometry::compute(&default_board(), Rect::new(0, 0, 90, 20));

        let areas: Vec<Rect> = geometry.columns.iter().map(|c| c.area).collect();
        assert_eq!(
            areas,
            vec![
                Rect::new(0, 0, 30, 20),
                Rect::new(30, 0, 30, 20),
                Rect::new(60, 0, 30, 20),
            ]
        );

        // Left border only for the first two, both for the last.
        assert_eq!(geometry.columns[0].body, Rect::new(1, 1, 29, 18));
        assert_eq!(geometry.columns[2].body, Rect::new(61, 1, 28, 18));
    }

    #[test]
    fn cards_stack_from_top_of_body() {
        let geometry = BoardGeometry::compute(&default_board(), Rect::new(0, 0, 90, 20));
        let cards = &geometry.columns[1].cards;

        assert_eq!(cards[0].id, "item-3");
        assert_eq!(cards[0].area, Rect::new(32, 1, 27, CARD_HEIGHT));
        assert_eq!(cards[1].id, "item-4");
        assert_eq!(cards[1].area, Rect::new(32, 4, 27, CARD_HEIGHT));
    }

    #[test]
    fn overflowing_cards_are_hidden() {
        let items = (0..10).map(|i| Item::new(format!("i{i}"), format!("I{i}")));
        let column = Column::new("c", "C").with_items(items.collect::<Vec<_>>());
        let board = Board::try_from_columns(vec![column]).expect("valid board");

        // Body height 8 fits two cards.
        let geometry = BoardGeometry::compute(&board, Rect::new(0, 0, 20, 10));
        assert_eq!(geometry.columns[0].cards.len(), 2);
        assert_eq!(geometry.columns[0].hidden, 8);
    }

    #[test]
    fn hit_testing() {
        let geometry = BoardGeometry::compute(&default_board(), Rect::new(0, 0, 90, 20));

        assert_eq!(geometry.column_at(45, 10), Some(1));
        assert_eq!(geometry.card_at(40, 2), Some((1, 0)));
        assert_eq!(geometry.card_at(40, 5), Some((1, 1)));
        // Below the last card: column but no card.
        assert_eq!(geometry.card_at(40, 15), None);
        assert_eq!(geometry.column_at(95, 10), None);
    }

    #[test]
    fn droppables_list_columns_before_their_cards() {
        let geometry = BoardGeometry::compute(&default_board(), Rect::new(0, 0, 90, 20));
        let ids: Vec<String> = geometry
            .droppables()
            .iter()
            .map(|d| d.id.to_string())
            .collect();
        assert_eq!(
            ids,
            [
                "column-1", "item-1", "item-2", "column-2", "item-3", "item-4", "column-3",
                "item-5", "item-6"
            ]
        );
    }

    #[test]
    fn empty_area_has_no_columns() {
        let geometry = BoardGeometry::compute(&default_board(), Rect::default());
        assert!(geometry.columns.is_empty());
        assert!(geometry.droppables().is_empty());
    }
}
