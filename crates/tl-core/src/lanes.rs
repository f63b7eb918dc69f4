//! Lane assignment.
//!
//! Packs items into horizontal lanes so that no two items sharing a lane
//! overlap in time.
//!
//! # Algorithm Summary
//!
//! 1. Stable-sort the items by start date (ties keep input order)
//! 2. Walk the sorted items, placing each one in the first lane whose last
//!    item ends strictly before the new item starts
//! 3. Open a new lane when no existing lane fits
//!
//! Processing in start order makes first-fit use the minimum number of lanes
//! for interval data. That guarantee does not hold for other processing
//! orders.

use crate::item::Scheduled;

/// Items sharing one horizontal track, ordered by start date.
pub type Lane<T> = Vec<T>;

/// Assigns every item to a lane.
///
/// Lanes are returned in the order they were opened. Within a lane, each
/// item starts strictly after the previous one ends, measured in whole days:
/// an item ending on the 5th and one starting on the 6th share a lane, two
/// items touching on the same day do not.
pub fn assign_lanes<S: Scheduled>(items: &[S]) -> Vec<Lane<&S>> {
    let mut sorted: Vec<&S> = items.iter().collect();
    // `sort_by_key` is stable, so equal starts keep their input order
    sorted.sort_by_key(|item| item.start());

    let mut lanes: Vec<Lane<&S>> = Vec::new();

    for item in sorted {
        let free_lane = lanes.iter_mut().find(|lane| {
            lane.last()
                .is_some_and(|last| last.end() < item.start())
        });

        match free_lane {
            Some(lane) => lane.push(item),
            None => lanes.push(vec![item]),
        }
    }

    tracing::debug!(items = items.len(), lanes = lanes.len(), "assigned lanes");
    lanes
}
