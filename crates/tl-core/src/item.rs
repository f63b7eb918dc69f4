//! Timeline items and item collections.

use std::collections::HashSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::types::{ItemId, ValidationError, parse_calendar_date};

/// Anything that occupies an inclusive range of calendar days.
///
/// This trait lets lane assignment and geometry work with different item
/// representations (e.g., [`Item`], or test fixtures).
pub trait Scheduled {
    /// Returns the item's identifier.
    fn id(&self) -> ItemId;

    /// Returns the first day the item occupies.
    fn start(&self) -> NaiveDate;

    /// Returns the last day the item occupies (inclusive).
    fn end(&self) -> NaiveDate;
}

impl<T: Scheduled + ?Sized> Scheduled for &T {
    fn id(&self) -> ItemId {
        (**self).id()
    }

    fn start(&self) -> NaiveDate {
        (**self).start()
    }

    fn end(&self) -> NaiveDate {
        (**self).end()
    }
}

/// A named event spanning an inclusive range of calendar days.
///
/// Items are immutable; renaming produces a new item (see
/// [`update_item_name`]).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawItem")]
pub struct Item {
    id: ItemId,
    start: NaiveDate,
    end: NaiveDate,
    name: String,
}

/// Unvalidated wire form of an item.
#[derive(Deserialize)]
struct RawItem {
    id: ItemId,
    start: String,
    end: String,
    name: String,
}

impl TryFrom<RawItem> for Item {
    type Error = ValidationError;

    fn try_from(raw: RawItem) -> Result<Self, Self::Error> {
        let start = parse_calendar_date("start", &raw.start)?;
        let end = parse_calendar_date("end", &raw.end)?;
        Self::new(raw.id, start, end, raw.name)
    }
}

impl Item {
    /// Creates a new item, rejecting ranges that end before they start.
    pub fn new(
        id: ItemId,
        start: NaiveDate,
        end: NaiveDate,
        name: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        if start > end {
            return Err(ValidationError::StartAfterEnd { id, start, end });
        }
        Ok(Self {
            id,
            start,
            end,
            name: name.into(),
        })
    }

    pub const fn id(&self) -> ItemId {
        self.id
    }

    pub const fn start(&self) -> NaiveDate {
        self.start
    }

    pub const fn end(&self) -> NaiveDate {
        self.end
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns a copy of this item with a different name.
    #[must_use]
    pub fn with_name(&self, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..self.clone()
        }
    }
}

impl Scheduled for Item {
    fn id(&self) -> ItemId {
        self.id
    }

    fn start(&self) -> NaiveDate {
        self.start
    }

    fn end(&self) -> NaiveDate {
        self.end
    }
}

/// Errors from loading an item collection.
#[derive(Debug, Error)]
pub enum ItemsError {
    /// The input was not a JSON array of well-formed items.
    #[error("invalid item JSON: {0}")]
    Json(#[from] serde_json::Error),
    /// The items parsed but the collection is invalid.
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

/// Parses a JSON array of items and checks that IDs are unique.
pub fn parse_items(json: &str) -> Result<Vec<Item>, ItemsError> {
    let items: Vec<Item> = serde_json::from_str(json)?;
    check_unique_ids(&items)?;
    tracing::debug!(count = items.len(), "parsed items");
    Ok(items)
}

/// Rejects collections in which two items share an ID.
pub fn check_unique_ids(items: &[Item]) -> Result<(), ValidationError> {
    let mut seen = HashSet::with_capacity(items.len());
    for item in items {
        if !seen.insert(item.id) {
            return Err(ValidationError::DuplicateId { id: item.id });
        }
    }
    Ok(())
}

/// Renames one item, returning a new collection.
///
/// The input collection is left untouched. Surrounding whitespace is trimmed
/// from `new_name`; a blank name is rejected.
pub fn update_item_name(
    items: &[Item],
    id: ItemId,
    new_name: &str,
) -> Result<Vec<Item>, ValidationError> {
    let new_name = new_name.trim();
    if new_name.is_empty() {
        return Err(ValidationError::Empty { field: "name" });
    }
    if !items.iter().any(|item| item.id == id) {
        return Err(ValidationError::UnknownItem { id });
    }

    Ok(items
        .iter()
        .map(|item| {
            if item.id == id && item.name != new_name {
                tracing::debug!(%id, old = %item.name, new = new_name, "renamed item");
                item.with_name(new_name)
            } else {
                item.clone()
            }
        })
        .collect())
}
