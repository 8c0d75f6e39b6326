//! Kanban board types and structures.
//!
//! This module defines the columns and the overall board that organizes
//! items. A [`Board`] is an immutable snapshot: reconciliation produces a new
//! board that shares every untouched column with its predecessor.

use std::{collections::HashMap, collections::HashSet, fmt, sync::Arc};

use serde::{Deserialize, Serialize};

use crate::error::{ProtocolError, Result};
use crate::item::{Id, Item};

/// A single column on the board.
///
/// Holds an ordered bucket of items; the order is the on-screen top-to-bottom
/// order.
///
/// # Examples
///
/// ```
/// use dragboard_protocol::{Column, Item};
///
/// let column = Column::new("column-1", "To do")
///     .with_items([Item::new("item-1", "Item 1")]);
/// assert_eq!(column.len(), 1);
/// assert_eq!(column.position("item-1"), Some(0));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    /// Unique identifier, never shared with any item.
    pub id: Id,
    /// Header text.
    pub title: String,
    /// Items in display order.
    pub items: Vec<Item>,
}

impl Column {
    /// Creates a new empty column.
    #[must_use]
    pub fn new(id: impl Into<Id>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            items: Vec::new(),
        }
    }

    /// Replaces the column's items, returning the column.
    #[must_use]
    pub fn with_items(mut self, items: impl IntoIterator<Item = Item>) -> Self {
        self.items = items.into_iter().collect();
        self
    }

    /// Returns the number of items in this column.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if the column holds no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the position of the item with the given id, if present.
    #[must_use]
    pub fn position(&self, id: &str) -> Option<usize> {
        self.items.iter().position(|item| item.id == id)
    }

    /// Returns a reference to an item by id, if present.
    #[must_use]
    pub fn item(&self, id: &str) -> Option<&Item> {
        self.items.iter().find(|item| item.id == id)
    }
}

/// The full ordered collection of columns.
///
/// Column order is display order. Item ids are unique across the whole board
/// and never collide with column ids; [`Board::try_from_columns`] enforces
/// both.
///
/// # Examples
///
/// ```
/// use dragboard_protocol::{Board, Column, Item};
///
/// let board = Board::try_from_columns(vec![
///     Column::new("column-1", "To do").with_items([Item::new("item-1", "Item 1")]),
///     Column::new("column-2", "Done"),
/// ])
/// .expect("ids are unique");
///
/// assert_eq!(board.len(), 2);
/// assert_eq!(board.total_items(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "Vec<Column>", into = "Vec<Column>")]
pub struct Board {
    columns: Vec<Arc<Column>>,
}

impl Board {
    /// Creates a board from columns, validating id uniqueness.
    ///
    /// # Errors
    ///
    /// Returns [`ProtocolError::DuplicateId`] if any id is used twice,
    /// whether by two items, two columns, or an item and a column.
    pub fn try_from_columns(columns: Vec<Column>) -> Result<Self> {
        let mut seen = HashSet::new();
        let ids = columns.iter().flat_map(|column| {
            std::iter::once(&column.id).chain(column.items.iter().map(|item| &item.id))
        });
        for id in ids {
            if !seen.insert(id.as_str()) {
                return Err(ProtocolError::DuplicateId(id.clone()));
            }
        }

        Ok(Self {
            columns: columns.into_iter().map(Arc::new).collect(),
        })
    }

    /// Returns the columns in display order.
    #[must_use]
    pub fn columns(&self) -> &[Arc<Column>] {
        &self.columns
    }

    /// Returns the number of columns.
    #[must_use]
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// Returns `true` if the board has no columns.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Returns the column at the given display index.
    #[must_use]
    pub fn column_at(&self, index: usize) -> Option<&Column> {
        self.columns.get(index).map(Arc::as_ref)
    }

    /// Returns the column whose own id matches, ignoring item ids.
    #[must_use]
    pub fn column(&self, id: &str) -> Option<&Column> {
        self.columns
            .iter()
            .find(|column| column.id == id)
            .map(Arc::as_ref)
    }

    /// Returns the item with the given id, wherever it lives.
    #[must_use]
    pub fn item(&self, id: &str) -> Option<&Item> {
        self.columns.iter().find_map(|column| column.item(id))
    }

    /// Returns the total number of items across all columns.
    #[must_use]
    pub fn total_items(&self) -> usize {
        self.columns.iter().map(|column| column.len()).sum()
    }

    /// Resolves an identifier to the column that owns it.
    ///
    /// A column id resolves to that column (a drag can hover a column's empty
    /// drop surface); an item id resolves to the column holding the item.
    /// Absent or unknown identifiers resolve to `None`.
    ///
    /// # Examples
    ///
    /// ```
    /// use dragboard_protocol::seed::default_board;
    ///
    /// let board = default_board();
    /// assert!(board.find_column(None).is_none());
    /// assert_eq!(board.find_column(Some("column-2")).map(|c| c.id.as_str()), Some("column-2"));
    /// assert_eq!(board.find_column(Some("item-5")).map(|c| c.id.as_str()), Some("column-3"));
    /// assert!(board.find_column(Some("item-999")).is_none());
    /// ```
    #[must_use]
    pub fn find_column(&self, id: Option<&str>) -> Option<&Column> {
        self.find_column_index(id)
            .and_then(|index| self.column_at(index))
    }

    /// Like [`Board::find_column`] but returns the column's display index.
    #[must_use]
    pub fn find_column_index(&self, id: Option<&str>) -> Option<usize> {
        let id = id.filter(|id| !id.is_empty())?;

        if let Some(index) = self.columns.iter().position(|column| column.id == id) {
            return Some(index);
        }

        let owners: HashMap<&str, &str> = self
            .columns
            .iter()
            .flat_map(|column| {
                column
                    .items
                    .iter()
                    .map(move |item| (item.id.as_str(), column.id.as_str()))
            })
            .collect();
        let column_id = owners.get(id)?;
        self.columns.iter().position(|column| column.id == *column_id)
    }

    /// Returns a new board with the given columns' items replaced.
    ///
    /// Columns not listed are shared with `self`.
    pub(crate) fn with_items_replaced(&self, replacements: Vec<(usize, Vec<Item>)>) -> Self {
        let mut columns = self.columns.clone();
        for (index, items) in replacements {
            if let Some(slot) = columns.get_mut(index) {
                let column = Column {
                    id: slot.id.clone(),
                    title: slot.title.clone(),
                    items,
                };
                *slot = Arc::new(column);
            }
        }
        Self { columns }
    }
}

impl TryFrom<Vec<Column>> for Board {
    type Error = ProtocolError;

    fn try_from(columns: Vec<Column>) -> Result<Self> {
        Self::try_from_columns(columns)
    }
}

impl From<Board> for Vec<Column> {
    fn from(board: Board) -> Self {
        board.columns.into_iter().map(Arc::unwrap_or_clone).collect()
    }
}

/// Renders a one-line-per-column outline, e.g. `To do [column-1]: item-1, item-2`.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for column in &self.columns {
            write!(f, "{} [{}]:", column.title, column.id)?;
            if column.is_empty() {
                f.write_str(" (empty)")?;
            } else {
                let ids: Vec<&str> = column.items.iter().map(|item| item.id.as_str()).collect();
                write!(f, " {}", ids.join(", "))?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
