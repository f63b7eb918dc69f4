//! Calendar geometry for the timeline.
//!
//! Projects calendar dates onto a fixed-width timeline expressed in percent
//! of the total width. The builder derives the overall date range, groups the
//! range into month segments for the header strip and computes the offset and
//! width of every item.

use chrono::{Datelike, Months, NaiveDate};
use serde::Serialize;

use crate::item::Scheduled;
use crate::types::{ItemId, day_difference};

/// Ranges of at most this many days also get a per-day header row.
pub const DAY_VIEW_THRESHOLD: i64 = 90;

/// A run of consecutive range days falling in one calendar month.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthSegment {
    pub year: i32,
    /// Calendar month, 1-based.
    pub month: u32,
    /// Header label, e.g. "January 2021".
    pub label: String,
    /// Day of month of the first range day in this segment.
    pub first_day: u32,
    /// Number of range days in this month.
    pub day_count: i64,
    /// Share of the timeline width.
    pub width_percent: f64,
}

impl MonthSegment {
    /// Day-of-month numbers for the columns of the day view.
    pub fn days(&self) -> Vec<u32> {
        let count = u32::try_from(self.day_count).unwrap_or(0);
        (self.first_day..self.first_day + count).collect()
    }
}

/// Placement of one item on the timeline.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ItemGeometry {
    pub id: ItemId,
    /// Whole days between the range start and the item start.
    pub offset_days: i64,
    /// Days the item covers, counting both ends.
    pub duration_days: i64,
    pub left_percent: f64,
    pub width_percent: f64,
}

/// The projected calendar for one snapshot of items.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimelineGeometry {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    /// Days in the range, counting both ends. Zero only for empty input.
    pub total_days: i64,
    /// Month segments in chronological order.
    pub months: Vec<MonthSegment>,
    /// Per-item placement, in input order.
    pub items: Vec<ItemGeometry>,
}

impl TimelineGeometry {
    /// The "nothing to render" result for an empty item set.
    ///
    /// The dates are a fixed placeholder and must not be read as a range.
    pub fn empty() -> Self {
        let placeholder = NaiveDate::default();
        Self {
            start_date: placeholder,
            end_date: placeholder,
            total_days: 0,
            months: Vec::new(),
            items: Vec::new(),
        }
    }

    pub const fn is_empty(&self) -> bool {
        self.total_days == 0
    }

    /// Places an item against this range.
    pub fn place<S: Scheduled>(&self, item: &S) -> ItemGeometry {
        let offset_days = day_difference(self.start_date, item.start());
        let duration_days = day_difference(item.start(), item.end()) + 1;
        ItemGeometry {
            id: item.id(),
            offset_days,
            duration_days,
            left_percent: percent_of(offset_days, self.total_days),
            width_percent: percent_of(duration_days, self.total_days),
        }
    }

    /// Left positions of the month boundaries, in percent.
    ///
    /// One entry after every segment except the last.
    pub fn grid_lines(&self) -> Vec<f64> {
        let mut elapsed_days = 0;
        self.months
            .iter()
            .take(self.months.len().saturating_sub(1))
            .map(|month| {
                elapsed_days += month.day_count;
                percent_of(elapsed_days, self.total_days)
            })
            .collect()
    }

    /// Whether the range is short enough for a per-day header row.
    pub const fn shows_day_view(&self, threshold: i64) -> bool {
        self.total_days > 0 && self.total_days <= threshold
    }
}

/// Builds the timeline geometry for a set of items.
///
/// Returns [`TimelineGeometry::empty`] when `items` is empty.
pub fn build_geometry<S: Scheduled>(items: &[S]) -> TimelineGeometry {
    let Some(first) = items.first() else {
        return TimelineGeometry::empty();
    };

    let (start_date, end_date) = items
        .iter()
        .fold((first.start(), first.end()), |(min, max), item| {
            (min.min(item.start()), max.max(item.end()))
        });

    let total_days = day_difference(start_date, end_date) + 1;
    let months = month_segments(start_date, end_date, total_days);

    let mut geometry = TimelineGeometry {
        start_date,
        end_date,
        total_days,
        months,
        items: Vec::with_capacity(items.len()),
    };
    geometry.items = items.iter().map(|item| geometry.place(item)).collect();

    tracing::debug!(
        %start_date,
        %end_date,
        total_days,
        months = geometry.months.len(),
        "built timeline geometry"
    );
    geometry
}

/// Splits the inclusive range `start..=end` at calendar month boundaries.
fn month_segments(start: NaiveDate, end: NaiveDate, total_days: i64) -> Vec<MonthSegment> {
    let mut segments = Vec::new();
    let mut first = start;
    loop {
        let last = last_day_of_month(first).map_or(end, |last| last.min(end));
        let day_count = day_difference(first, last) + 1;
        segments.push(MonthSegment {
            year: first.year(),
            month: first.month(),
            label: first.format("%B %Y").to_string(),
            first_day: first.day(),
            day_count,
            width_percent: percent_of(day_count, total_days),
        });
        match last.succ_opt() {
            Some(next) if next <= end => first = next,
            _ => break,
        }
    }
    segments
}

/// `None` in the last representable month.
fn last_day_of_month(date: NaiveDate) -> Option<NaiveDate> {
    date.with_day(1)?.checked_add_months(Months::new(1))?.pred_opt()
}

#[expect(
    clippy::cast_precision_loss,
    reason = "day counts stay far below 2^52"
)]
fn percent_of(part: i64, total: i64) -> f64 {
    if total == 0 {
        return 0.0;
    }
    part as f64 / total as f64 * 100.0
}
