//! Identifiers and board items.
//!
//! Column ids and item ids live in a single namespace: a drag target may be
//! either a card or a column's empty drop surface, and [`Id`] is used for both.

use std::{borrow::Borrow, fmt};

use serde::{Deserialize, Serialize};

/// A string identifier for a column or an item.
///
/// # Examples
///
/// ```
/// use dragboard_protocol::Id;
///
/// let id = Id::from("item-1");
/// assert_eq!(id.as_str(), "item-1");
/// assert_eq!(id, "item-1");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Id(String);

impl Id {
    /// Creates an identifier from anything string-like.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Id {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

impl From<String> for Id {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl AsRef<str> for Id {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for Id {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for Id {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for Id {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// A single draggable card.
///
/// Items are immutable once created; drag gestures only change which column
/// holds them and in what order.
///
/// # Examples
///
/// ```
/// use dragboard_protocol::Item;
///
/// let item = Item::new("item-1", "Item 1");
/// assert_eq!(item.id, "item-1");
/// assert_eq!(item.title, "Item 1");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Unique identifier, unique across the whole board.
    pub id: Id,
    /// Text shown on the card.
    pub title: String,
}

impl Item {
    /// Creates a new item.
    #[must_use]
    pub fn new(id: impl Into<Id>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
        }
    }
}
