//! The fixed board the application starts with.
//!
//! # Examples
//!
//! ```
//! use dragboard_protocol::seed::default_board;
//!
//! let board = default_board();
//! assert_eq!(board.len(), 3);
//! assert_eq!(board.total_items(), 6);
//! ```

use crate::board::{Board, Column};
use crate::item::Item;

/// Column ids, titles, and item numbers of the seed board.
const SEED: [(&str, &str, [u32; 2]); 3] = [
    ("column-1", "To do", [1, 2]),
    ("column-2", "In progress", [3, 4]),
    ("column-3", "Done", [5, 6]),
];

/// Builds the initial board: three columns with two items each.
///
/// - `column-1` "To do": `item-1`, `item-2`
/// - `column-2` "In progress": `item-3`, `item-4`
/// - `column-3` "Done": `item-5`, `item-6`
#[must_use]
pub fn default_board() -> Board {
    let columns = SEED
        .iter()
        .map(|(id, title, items)| {
            Column::new(*id, *title).with_items(
                items
                    .iter()
                    .map(|n| Item::new(format!("item-{n}"), format!("Item {n}"))),
            )
        })
        .collect();

    Board::try_from_columns(columns).expect("seed ids are unique")
}
