//! Lanes command for listing lane assignments.

use std::io::Write;

use anyhow::Result;
use serde::Serialize;
use tl_core::{Item, Lane, Layout};

use super::util::format_item_line;

/// JSON output structure.
#[derive(Debug, Serialize)]
pub struct JsonLanes<'a> {
    pub lane_count: usize,
    pub lanes: &'a [Lane<Item>],
}

/// Writes the lanes of `layout` as a human-readable listing.
pub fn write_lanes<W: Write>(writer: &mut W, layout: &Layout) -> Result<()> {
    if layout.lanes.is_empty() {
        writeln!(writer, "No items to display.")?;
        return Ok(());
    }

    let item_count: usize = layout.lanes.iter().map(Vec::len).sum();
    writeln!(
        writer,
        "{item_count} items in {} lanes",
        layout.lane_count()
    )?;

    for (index, lane) in layout.lanes.iter().enumerate() {
        writeln!(writer)?;
        writeln!(writer, "Lane {}", index + 1)?;
        for item in lane {
            writeln!(writer, "  {}", format_item_line(item))?;
        }
    }

    Ok(())
}

/// Formats the lanes of `layout` as pretty JSON.
pub fn format_lanes_json(layout: &Layout) -> Result<String> {
    let report = JsonLanes {
        lane_count: layout.lane_count(),
        lanes: &layout.lanes,
    };
    Ok(serde_json::to_string_pretty(&report)?)
}

/// Runs the lanes command.
pub fn run<W: Write>(writer: &mut W, items: &[Item], json: bool) -> Result<()> {
    let layout = Layout::compute(items);

    if json {
        writeln!(writer, "{}", format_lanes_json(&layout)?)?;
    } else {
        write_lanes(writer, &layout)?;
    }

    Ok(())
}
