// config.rs

use ::config::{Config, ConfigError, Environment, File};
use log::debug;
use serde::Deserialize;
use std::path::PathBuf;

/// Gap between taps that starts a new tap run instead of continuing the
/// current one, in milliseconds.
pub const DEFAULT_RESET_GAP_MS: u64 = 2_000;

/// Number of taps retained for the rolling average.
pub const DEFAULT_MAX_TAPS: usize = 24;

/// Intervals shorter than this are treated as key bounce and excluded
/// from the average, in milliseconds.
pub const DEFAULT_MIN_INTERVAL_MS: u64 = 200;

/// Engine tuning knobs, layered from defaults, an optional config file and
/// `TAPTEMPO_*` environment variables. Command-line flags override on top.
#[derive(Debug, Clone, Deserialize)]
pub struct EngineConfig {
    pub reset_gap_ms: u64,
    pub max_taps: usize,
    pub min_interval_ms: u64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            reset_gap_ms: DEFAULT_RESET_GAP_MS,
            max_taps: DEFAULT_MAX_TAPS,
            min_interval_ms: DEFAULT_MIN_INTERVAL_MS,
        }
    }
}

impl EngineConfig {
    pub fn load(file: Option<PathBuf>) -> Result<Self, ConfigError> {
        let mut builder = Config::builder()
            .set_default("reset_gap_ms", DEFAULT_RESET_GAP_MS)?
            .set_default("max_taps", DEFAULT_MAX_TAPS as u64)?
            .set_default("min_interval_ms", DEFAULT_MIN_INTERVAL_MS)?;

        if let Some(path) = file {
            debug!("Layering engine config from {}", path.display());
            builder = builder.add_source(File::from(path).required(false));
        }

        builder
            .add_source(Environment::with_prefix("TAPTEMPO"))
            .build()?
            .try_deserialize()
    }

    /// Default config file location, `$HOME/.config/taptempors/config.toml`.
    /// `None` when HOME is not set.
    pub fn default_file() -> Option<PathBuf> {
        std::env::var("HOME").ok().map(|home| {
            PathBuf::from(home)
                .join(".config")
                .join("taptempors")
                .join("config.toml")
        })
    }
}
