//! Shared utilities for CLI commands.

use std::path::Path;

use anyhow::{Context, Result};
use tl_core::{Item, parse_items};

/// Item collection used when no input file is given.
const SAMPLE_ITEMS: &str = include_str!("../../data/sample_items.json");

/// Loads items from a JSON file, or the bundled sample when `path` is `None`.
pub fn load_items(path: Option<&Path>) -> Result<Vec<Item>> {
    let Some(path) = path else {
        tracing::debug!("no input file, using bundled sample items");
        return parse_items(SAMPLE_ITEMS).context("bundled sample items are invalid");
    };

    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let items =
        parse_items(&content).with_context(|| format!("failed to load items from {}", path.display()))?;
    tracing::debug!(path = %path.display(), count = items.len(), "loaded items");
    Ok(items)
}

/// Formats one item as a single listing line.
pub fn format_item_line(item: &Item) -> String {
    let tag = format!("#{}", item.id());
    format!(
        "{tag:<4} {} → {}  {}",
        item.start(),
        item.end(),
        item.name()
    )
}
