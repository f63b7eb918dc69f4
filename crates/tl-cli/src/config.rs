//! Configuration loading and management.

use std::path::{Path, PathBuf};

use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use serde::{Deserialize, Serialize};
use tl_core::DAY_VIEW_THRESHOLD;

/// Narrowest chart `tl show` will draw.
pub const MIN_CHART_WIDTH: usize = 10;

/// Widest chart `tl show` will draw.
pub const MAX_CHART_WIDTH: usize = 1000;

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Ranges of at most this many days get a per-day header row.
    pub day_view_threshold: i64,

    /// Number of columns used by `tl show`.
    pub chart_width: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            day_view_threshold: DAY_VIEW_THRESHOLD,
            chart_width: 60,
        }
    }
}

impl Config {
    /// Loads configuration, optionally from a specific file.
    #[expect(
        clippy::result_large_err,
        reason = "figment::Error is large but only returned at startup"
    )]
    pub fn load_from(config_path: Option<&Path>) -> Result<Self, figment::Error> {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Load from default config location
        if let Some(config_dir) = dirs_config_path() {
            figment = figment.merge(Toml::file(config_dir.join("config.toml")));
        }

        // Load from specified config file
        if let Some(path) = config_path {
            figment = figment.merge(Toml::file(path));
        }

        // Load from environment variables (TL_*)
        figment = figment.merge(Env::prefixed("TL_"));

        figment.extract()
    }

    /// Chart width clamped to `MIN_CHART_WIDTH..=MAX_CHART_WIDTH`.
    pub fn effective_chart_width(&self, requested: Option<usize>) -> usize {
        requested
            .unwrap_or(self.chart_width)
            .clamp(MIN_CHART_WIDTH, MAX_CHART_WIDTH)
    }
}

/// Returns the platform-specific config directory for tl.
///
/// On Linux: `~/.config/tl`
pub fn dirs_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("tl"))
}
