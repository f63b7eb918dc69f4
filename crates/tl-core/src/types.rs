//! Core type definitions with validation.

use std::fmt;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Validation errors for core types.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The provided value was empty.
    #[error("{field} cannot be empty")]
    Empty { field: &'static str },

    /// A date string could not be parsed as a calendar date.
    #[error("invalid {field} date: {value:?} (expected YYYY-MM-DD or RFC 3339)")]
    InvalidDate { field: &'static str, value: String },

    /// An item ends before it starts.
    #[error("item {id} starts on {start} but ends on {end}")]
    StartAfterEnd {
        id: ItemId,
        start: NaiveDate,
        end: NaiveDate,
    },

    /// Two items in one collection share an ID.
    #[error("duplicate item ID: {id}")]
    DuplicateId { id: ItemId },

    /// No item with the given ID exists in the collection.
    #[error("no item with ID {id}")]
    UnknownItem { id: ItemId },
}

/// A timeline item identifier.
///
/// IDs are unique within a collection and stable across renders. Uniqueness
/// is checked when a collection is parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(i64);

impl ItemId {
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    pub const fn value(self) -> i64 {
        self.0
    }
}

impl From<i64> for ItemId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Parses a calendar date.
///
/// Accepts a plain `YYYY-MM-DD` date or an RFC 3339 timestamp. Timestamps are
/// converted to UTC and truncated to the UTC calendar day, so the result never
/// depends on the local timezone.
pub fn parse_calendar_date(field: &'static str, value: &str) -> Result<NaiveDate, ValidationError> {
    let trimmed = value.trim();
    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return Ok(date);
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(dt.with_timezone(&Utc).date_naive());
    }
    Err(ValidationError::InvalidDate {
        field,
        value: value.to_string(),
    })
}

/// Signed number of whole calendar days from `from` to `to`.
///
/// Both arguments are naive calendar dates, so there is no time-of-day or
/// daylight-saving drift.
pub fn day_difference(from: NaiveDate, to: NaiveDate) -> i64 {
    (to - from).num_days()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn parses_plain_date() {
        assert_eq!(
            parse_calendar_date("start", "2021-01-14").unwrap(),
            date(2021, 1, 14)
        );
    }

    #[test]
    fn parses_rfc3339_as_utc_day() {
        // 23:00 at UTC-05:00 is already the next day in UTC
        assert_eq!(
            parse_calendar_date("start", "2021-03-13T23:00:00-05:00").unwrap(),
            date(2021, 3, 14)
        );
        assert_eq!(
            parse_calendar_date("end", "2021-03-14T00:30:00Z").unwrap(),
            date(2021, 3, 14)
        );
    }

    #[test]
    fn rejects_garbage_dates() {
        let err = parse_calendar_date("end", "not-a-date").unwrap_err();
        assert_eq!(
            err,
            ValidationError::InvalidDate {
                field: "end",
                value: "not-a-date".to_string(),
            }
        );
        assert!(parse_calendar_date("start", "2021-02-30").is_err());
        assert!(parse_calendar_date("start", "").is_err());
    }

    #[test]
    fn day_difference_counts_whole_days() {
        assert_eq!(day_difference(date(2021, 1, 1), date(2021, 1, 1)), 0);
        assert_eq!(day_difference(date(2021, 1, 1), date(2021, 1, 5)), 4);
        assert_eq!(day_difference(date(2021, 1, 5), date(2021, 1, 1)), -4);
        assert_eq!(day_difference(date(2020, 2, 28), date(2020, 3, 1)), 2);
    }

    #[test]
    fn day_difference_ignores_dst_transitions() {
        // US spring-forward (2021-03-14) and fall-back (2021-11-07)
        assert_eq!(day_difference(date(2021, 3, 13), date(2021, 3, 15)), 2);
        assert_eq!(day_difference(date(2021, 11, 6), date(2021, 11, 8)), 2);
        // EU spring-forward (2021-03-28)
        assert_eq!(day_difference(date(2021, 3, 27), date(2021, 3, 29)), 2);
    }

    #[test]
    fn item_id_serializes_as_number() {
        let id = ItemId::new(16);
        assert_eq!(serde_json::to_string(&id).unwrap(), "16");
        let parsed: ItemId = serde_json::from_str("16").unwrap();
        assert_eq!(parsed, id);
    }

    #[test]
    fn error_messages_name_the_problem() {
        let err = ValidationError::StartAfterEnd {
            id: ItemId::new(3),
            start: date(2021, 2, 1),
            end: date(2021, 1, 1),
        };
        assert_eq!(
            err.to_string(),
            "item 3 starts on 2021-02-01 but ends on 2021-01-01"
        );
        assert_eq!(
            ValidationError::Empty { field: "name" }.to_string(),
            "name cannot be empty"
        );
    }
}
