//! Combined lane and geometry derivation, with memoization.

use std::sync::Arc;

use crate::geometry::{TimelineGeometry, build_geometry};
use crate::item::Item;
use crate::lanes::{Lane, assign_lanes};

/// Everything a renderer needs for one snapshot of the item collection.
#[derive(Debug, Clone, PartialEq)]
pub struct Layout {
    pub lanes: Vec<Lane<Item>>,
    pub geometry: TimelineGeometry,
}

impl Layout {
    /// Runs lane assignment and geometry over `items`.
    pub fn compute(items: &[Item]) -> Self {
        let lanes = assign_lanes(items)
            .into_iter()
            .map(|lane| lane.into_iter().cloned().collect())
            .collect();
        Self {
            lanes,
            geometry: build_geometry(items),
        }
    }

    /// Number of lanes, which is also the number of rows to draw.
    pub fn lane_count(&self) -> usize {
        self.lanes.len()
    }
}

/// Memoizes [`Layout::compute`] on the content of the last snapshot.
///
/// Recomputing is only needed when the collection changes. The cache keeps a
/// copy of the last input and hands back the shared layout while the next
/// snapshot compares equal.
#[derive(Debug, Default)]
pub struct LayoutCache {
    last: Option<(Vec<Item>, Arc<Layout>)>,
    hits: u64,
    misses: u64,
}

impl LayoutCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the layout for `items`, recomputing only if they changed.
    pub fn get(&mut self, items: &[Item]) -> Arc<Layout> {
        if let Some((cached_items, layout)) = &self.last {
            if cached_items.as_slice() == items {
                self.hits += 1;
                tracing::trace!(hits = self.hits, "layout cache hit");
                return Arc::clone(layout);
            }
        }

        self.misses += 1;
        tracing::debug!(
            items = items.len(),
            misses = self.misses,
            "layout cache miss, recomputing"
        );
        let layout = Arc::new(Layout::compute(items));
        self.last = Some((items.to_vec(), Arc::clone(&layout)));
        layout
    }

    /// Drops the cached snapshot.
    pub fn clear(&mut self) {
        self.last = None;
    }

    pub const fn hits(&self) -> u64 {
        self.hits
    }

    pub const fn misses(&self) -> u64 {
        self.misses
    }
}
