//! Rename command for committing a new item name.
//!
//! The updated collection is printed as JSON; no file is rewritten.

use std::io::Write;

use anyhow::{Context, Result};
use tl_core::{Item, ItemId, update_item_name};

/// Runs the rename command.
pub fn run<W: Write>(writer: &mut W, items: &[Item], id: i64, name: &str) -> Result<()> {
    let updated = update_item_name(items, ItemId::new(id), name)
        .with_context(|| format!("failed to rename item {id}"))?;

    writeln!(writer, "{}", serde_json::to_string_pretty(&updated)?)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use insta::assert_snapshot;
    use tl_core::parse_items;

    fn fixture() -> Vec<Item> {
        parse_items(
            r#"[
                {"id": 1, "start": "2021-01-14", "end": "2021-01-22", "name": "Recruit translators"},
                {"id": 16, "start": "2021-05-01", "end": "2021-05-01", "name": "Launch day"}
            ]"#,
        )
        .unwrap()
    }

    #[test]
    fn test_rename_prints_updated_collection() {
        let mut output = Vec::new();
        run(&mut output, &fixture(), 16, " Go live ").unwrap();

        assert_snapshot!(String::from_utf8(output).unwrap(), @r#"
        [
          {
            "id": 1,
            "start": "2021-01-14",
            "end": "2021-01-22",
            "name": "Recruit translators"
          },
          {
            "id": 16,
            "start": "2021-05-01",
            "end": "2021-05-01",
            "name": "Go live"
          }
        ]
        "#);
    }

    #[test]
    fn test_rename_unknown_id_fails() {
        let mut output = Vec::new();
        let err = run(&mut output, &fixture(), 42, "x").unwrap_err();
        assert_eq!(format!("{err:#}"), "failed to rename item 42: no item with ID 42");
        assert!(output.is_empty());
    }

    #[test]
    fn test_rename_blank_name_fails() {
        let mut output = Vec::new();
        let err = run(&mut output, &fixture(), 1, "   ").unwrap_err();
        assert!(format!("{err:#}").ends_with("name cannot be empty"));
    }
}
