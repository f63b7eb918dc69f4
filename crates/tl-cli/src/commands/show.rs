//! Show command for drawing the timeline as a text chart.
//!
//! Columns are allotted proportionally to days, the same way the percent
//! geometry is, so a chart of width `w` puts a day at column
//! `offset * w / total_days`.

use std::io::Write;

use anyhow::Result;
use tl_core::{Item, Layout, TimelineGeometry};

use super::util::format_item_line;

/// Fill characters, alternated so neighbouring items in a lane stay distinct.
const BAR_CHARS: [char; 2] = ['█', '▓'];

/// Narrowest per-day column that still fits a two-digit day number.
const MIN_DAY_COLUMN: usize = 3;

/// Maps a day offset to a chart column.
fn column(days: i64, total_days: i64, width: usize) -> usize {
    let days = usize::try_from(days).unwrap_or(0);
    let total = usize::try_from(total_days).unwrap_or(1).max(1);
    (days * width / total).min(width)
}

/// Writes `text` into `row` starting at `col`, clipped to `max_len` chars.
fn put(row: &mut [char], col: usize, text: &str, max_len: usize) {
    for (slot, ch) in row.iter_mut().skip(col).zip(text.chars().take(max_len)) {
        *slot = ch;
    }
}

fn finish(row: &[char]) -> String {
    row.iter().collect::<String>().trim_end().to_string()
}

/// Month labels, each starting at the first column of its segment.
fn month_row(geometry: &TimelineGeometry, width: usize) -> String {
    let mut row = vec![' '; width];
    let mut elapsed = 0;
    for month in &geometry.months {
        let start = column(elapsed, geometry.total_days, width);
        elapsed += month.day_count;
        let end = column(elapsed, geometry.total_days, width);
        // Keep one blank column before the next label
        put(&mut row, start, &month.label, (end - start).saturating_sub(1));
    }
    finish(&row)
}

/// Day-of-month numbers, or `None` when the columns are too narrow.
fn day_row(geometry: &TimelineGeometry, width: usize) -> Option<String> {
    let total = usize::try_from(geometry.total_days).ok()?;
    if width < total * MIN_DAY_COLUMN {
        return None;
    }

    let mut row = vec![' '; width];
    let mut offset = 0;
    for month in &geometry.months {
        for day in month.days() {
            let col = column(offset, geometry.total_days, width);
            put(&mut row, col, &day.to_string(), MIN_DAY_COLUMN - 1);
            offset += 1;
        }
    }
    Some(finish(&row))
}

/// One row of bars for a lane.
fn lane_row(lane: &[Item], geometry: &TimelineGeometry, width: usize) -> String {
    let mut row = vec![' '; width];
    for (index, item) in lane.iter().enumerate() {
        let placed = geometry.place(item);
        let start = column(placed.offset_days, geometry.total_days, width);
        let end = column(
            placed.offset_days + placed.duration_days,
            geometry.total_days,
            width,
        )
        .max(start + 1)
        .min(width);
        let fill = BAR_CHARS[index % BAR_CHARS.len()];
        for slot in &mut row[start..end] {
            *slot = fill;
        }
    }
    finish(&row)
}

/// Writes the chart for `layout`.
pub fn write_chart<W: Write>(
    writer: &mut W,
    layout: &Layout,
    width: usize,
    day_view_threshold: i64,
) -> Result<()> {
    let geometry = &layout.geometry;
    if geometry.is_empty() {
        writeln!(writer, "No items to display.")?;
        return Ok(());
    }

    let item_count: usize = layout.lanes.iter().map(Vec::len).sum();
    writeln!(
        writer,
        "TIMELINE: {} → {} ({} days, {item_count} items, {} lanes)",
        geometry.start_date,
        geometry.end_date,
        geometry.total_days,
        layout.lane_count()
    )?;
    writeln!(writer)?;

    writeln!(writer, "{}", month_row(geometry, width))?;
    let days = geometry
        .shows_day_view(day_view_threshold)
        .then(|| day_row(geometry, width))
        .flatten();
    if let Some(days) = days {
        writeln!(writer, "{days}")?;
    }
    for lane in &layout.lanes {
        writeln!(writer, "{}", lane_row(lane, geometry, width))?;
    }

    writeln!(writer)?;
    writeln!(writer, "LANES")?;
    writeln!(writer, "─────")?;
    for (index, lane) in layout.lanes.iter().enumerate() {
        for item in lane {
            writeln!(writer, "{:<3}{}", index + 1, format_item_line(item))?;
        }
    }

    Ok(())
}

/// Runs the show command.
pub fn run<W: Write>(
    writer: &mut W,
    items: &[Item],
    width: usize,
    day_view_threshold: i64,
) -> Result<()> {
    let layout = Layout::compute(items);
    write_chart(writer, &layout, width, day_view_threshold)
}
