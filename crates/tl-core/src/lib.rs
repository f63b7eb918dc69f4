//! Core domain logic for timeline views.
//!
//! This crate contains the fundamental types and logic for:
//! - Lane assignment: packing overlapping items into non-overlapping tracks
//! - Geometry: projecting calendar dates onto a percent-based timeline and
//!   grouping the range into month segments
//! - Items: validated item collections and renaming

pub mod geometry;
mod item;
mod lanes;
mod layout;
pub mod types;

pub use geometry::{
    DAY_VIEW_THRESHOLD, ItemGeometry, MonthSegment, TimelineGeometry, build_geometry,
};
pub use item::{Item, ItemsError, Scheduled, check_unique_ids, parse_items, update_item_name};
pub use lanes::{Lane, assign_lanes};
pub use layout::{Layout, LayoutCache};
pub use types::{ItemId, ValidationError, day_difference, parse_calendar_date};
