//! CLI subcommand implementations.

pub mod geometry;
pub mod lanes;
pub mod rename;
pub mod show;
pub mod util;
