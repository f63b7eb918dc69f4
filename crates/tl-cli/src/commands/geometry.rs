//! Geometry command for inspecting the calendar projection.
//!
//! Prints the overall date range, the month segments of the header strip
//! (with day columns when the range is short enough for the day view), the
//! month grid lines and the placement of every item.

use std::io::Write;

use anyhow::Result;
use serde::Serialize;
use tl_core::{Item, ItemGeometry, MonthSegment, TimelineGeometry, build_geometry};

/// JSON month entry.
#[derive(Debug, Serialize)]
pub struct JsonMonth<'a> {
    #[serde(flatten)]
    pub segment: &'a MonthSegment,
    /// Day-of-month columns, present only in the day view.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub days: Option<Vec<u32>>,
}

/// JSON output structure.
#[derive(Debug, Serialize)]
pub struct JsonGeometry<'a> {
    /// `None` for an empty item set.
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub total_days: i64,
    pub day_view: bool,
    pub months: Vec<JsonMonth<'a>>,
    pub grid_lines: Vec<f64>,
    pub items: &'a [ItemGeometry],
}

/// Formats geometry as pretty JSON.
pub fn format_geometry_json(geometry: &TimelineGeometry, day_view_threshold: i64) -> Result<String> {
    let day_view = geometry.shows_day_view(day_view_threshold);
    let (start_date, end_date) = if geometry.is_empty() {
        (None, None)
    } else {
        (
            Some(geometry.start_date.to_string()),
            Some(geometry.end_date.to_string()),
        )
    };

    let report = JsonGeometry {
        start_date,
        end_date,
        total_days: geometry.total_days,
        day_view,
        months: geometry
            .months
            .iter()
            .map(|segment| JsonMonth {
                segment,
                days: day_view.then(|| segment.days()),
            })
            .collect(),
        grid_lines: geometry.grid_lines(),
        items: &geometry.items,
    };

    Ok(serde_json::to_string_pretty(&report)?)
}

/// Writes geometry as a human-readable report.
pub fn write_geometry<W: Write>(
    writer: &mut W,
    geometry: &TimelineGeometry,
    day_view_threshold: i64,
) -> Result<()> {
    if geometry.is_empty() {
        writeln!(writer, "No items to display.")?;
        return Ok(());
    }

    writeln!(
        writer,
        "Range: {} → {} ({} days)",
        geometry.start_date, geometry.end_date, geometry.total_days
    )?;

    let day_view = geometry.shows_day_view(day_view_threshold);

    writeln!(writer)?;
    writeln!(writer, "MONTHS")?;
    writeln!(writer, "──────")?;
    for month in &geometry.months {
        writeln!(
            writer,
            "{:<16} {:>4} days  {:>6.2}%",
            month.label, month.day_count, month.width_percent
        )?;
        if day_view {
            let days: Vec<String> = month.days().iter().map(u32::to_string).collect();
            writeln!(writer, "  days: {}", days.join(" "))?;
        }
    }

    let grid_lines = geometry.grid_lines();
    if !grid_lines.is_empty() {
        let positions: Vec<String> = grid_lines.iter().map(|p| format!("{p:.2}%")).collect();
        writeln!(writer)?;
        writeln!(writer, "Grid lines: {}", positions.join(", "))?;
    }

    writeln!(writer)?;
    writeln!(writer, "ITEMS")?;
    writeln!(writer, "─────")?;
    for item in &geometry.items {
        let tag = format!("#{}", item.id);
        writeln!(
            writer,
            "{tag:<4} offset {:>3}  duration {:>3}  left {:>6.2}%  width {:>6.2}%",
            item.offset_days, item.duration_days, item.left_percent, item.width_percent
        )?;
    }

    Ok(())
}

/// Runs the geometry command.
pub fn run<W: Write>(
    writer: &mut W,
    items: &[Item],
    json: bool,
    day_view_threshold: i64,
) -> Result<()> {
    let geometry = build_geometry(items);

    if json {
        writeln!(writer, "{}", format_geometry_json(&geometry, day_view_threshold)?)?;
    } else {
        write_geometry(writer, &geometry, day_view_threshold)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use insta::assert_snapshot;
    use tl_core::{DAY_VIEW_THRESHOLD, parse_items};

    fn fixture() -> Vec<Item> {
        parse_items(
            r#"[
                {"id": 1, "start": "2021-01-29", "end": "2021-02-01", "name": "Alpha"},
                {"id": 2, "start": "2021-01-30", "end": "2021-02-05", "name": "Beta"},
                {"id": 3, "start": "2021-02-03", "end": "2021-02-05", "name": "Gamma"}
            ]"#,
        )
        .unwrap()
    }

    fn render(items: &[Item], json: bool, threshold: i64) -> String {
        let mut output = Vec::new();
        run(&mut output, items, json, threshold).unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn test_geometry_report_with_day_view() {
        assert_snapshot!(render(&fixture(), false, DAY_VIEW_THRESHOLD), @r"
        Range: 2021-01-29 → 2021-02-05 (8 days)

        MONTHS
        ──────
        January 2021        3 days   37.50%
          days: 29 30 31
        February 2021       5 days   62.50%
          days: 1 2 3 4 5

        Grid lines: 37.50%

        ITEMS
        ─────
        #1   offset   0  duration   4  left   0.00%  width  50.00%
        #2   offset   1  duration   7  left  12.50%  width  87.50%
        #3   offset   5  duration   3  left  62.50%  width  37.50%
        ");
    }

    #[test]
    fn test_geometry_report_without_day_view() {
        let output = render(&fixture(), false, 7);
        assert!(!output.contains("days:"));
        assert!(output.contains("January 2021"));
    }

    #[test]
    fn test_geometry_empty() {
        assert_eq!(render(&[], false, DAY_VIEW_THRESHOLD), "No items to display.\n");
    }

    #[test]
    fn test_geometry_json() {
        assert_snapshot!(render(&fixture(), true, DAY_VIEW_THRESHOLD), @r#"
        {
          "start_date": "2021-01-29",
          "end_date": "2021-02-05",
          "total_days": 8,
          "day_view": true,
          "months": [
            {
              "year": 2021,
              "month": 1,
              "label": "January 2021",
              "first_day": 29,
              "day_count": 3,
              "width_percent": 37.5,
              "days": [
                29,
                30,
                31
              ]
            },
            {
              "year": 2021,
              "month": 2,
              "label": "February 2021",
              "first_day": 1,
              "day_count": 5,
              "width_percent": 62.5,
              "days": [
                1,
                2,
                3,
                4,
                5
              ]
            }
          ],
          "grid_lines": [
            37.5
          ],
          "items": [
            {
              "id": 1,
              "offset_days": 0,
              "duration_days": 4,
              "left_percent": 0.0,
              "width_percent": 50.0
            },
            {
              "id": 2,
              "offset_days": 1,
              "duration_days": 7,
              "left_percent": 12.5,
              "width_percent": 87.5
            },
            {
              "id": 3,
              "offset_days": 5,
              "duration_days": 3,
              "left_percent": 62.5,
              "width_percent": 37.5
            }
          ]
        }
        "#);
    }

    #[test]
    fn test_geometry_json_empty() {
        assert_snapshot!(render(&[], true, DAY_VIEW_THRESHOLD), @r#"
        {
          "start_date": null,
          "end_date": null,
          "total_days": 0,
          "day_view": false,
          "months": [],
          "grid_lines": [],
          "items": []
        }
        "#);
    }
}
