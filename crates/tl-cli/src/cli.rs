//! Command-line argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Timeline lane viewer.
///
/// Packs time-bounded items into non-overlapping lanes and projects them onto
/// a calendar timeline.
#[derive(Debug, Parser)]
#[command(name = "tl", version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to config file.
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List the lanes and the items assigned to each.
    Lanes {
        /// JSON file with an array of items (defaults to the bundled sample).
        file: Option<PathBuf>,

        /// Output as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Show the date range, month segments and per-item placement.
    Geometry {
        /// JSON file with an array of items (defaults to the bundled sample).
        file: Option<PathBuf>,

        /// Output as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Draw the timeline as a text chart.
    Show {
        /// JSON file with an array of items (defaults to the bundled sample).
        file: Option<PathBuf>,

        /// Chart width in columns (overrides `chart_width` from config).
        #[arg(long)]
        width: Option<usize>,
    },

    /// Rename an item and print the updated collection as JSON.
    Rename {
        /// JSON file with an array of items (defaults to the bundled sample).
        file: Option<PathBuf>,

        /// ID of the item to rename.
        #[arg(long)]
        id: i64,

        /// New display name.
        #[arg(long)]
        name: String,
    },
}
