//! Preference persistence
//!
//! Load/store of the presentation settings as a small YAML file. The
//! engine itself never touches the filesystem; callers restore settings at
//! startup and persist them on shutdown. Any unreadable file falls back to
//! the defaults.

use crate::state::{DivisionMode, Settings};
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// On-disk form. The division mode is stored as its ordinal so an
/// out-of-range value from an older or hand-edited file degrades to the
/// default mode instead of failing deserialization.
#[derive(Debug, Serialize, Deserialize)]
struct PrefsFile {
    round_outputs: bool,
    division_mode: u8,
}

/// Default preferences location, `$HOME/.config/taptempors/prefs.yml`.
/// `None` when HOME is not set.
pub fn default_path() -> Option<PathBuf> {
    std::env::var("HOME").ok().map(|home| {
        PathBuf::from(home)
            .join(".config")
            .join("taptempors")
            .join("prefs.yml")
    })
}

pub fn load(path: &Path) -> Settings {
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            debug!("No preferences at {}, using defaults", path.display());
            return Settings::default();
        }
        Err(err) => {
            warn!("Failed to read preferences {}: {}", path.display(), err);
            return Settings::default();
        }
    };

    match serde_yaml::from_str::<PrefsFile>(&raw) {
        Ok(file) => Settings {
            round_outputs: file.round_outputs,
            division_mode: DivisionMode::from_ordinal(file.division_mode),
        },
        Err(err) => {
            warn!("Ignoring malformed preferences {}: {}", path.display(), err);
            Settings::default()
        }
    }
}

pub fn store(path: &Path, settings: &Settings) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let file = PrefsFile {
        round_outputs: settings.round_outputs,
        division_mode: settings.division_mode.ordinal(),
    };
    let raw = serde_yaml::to_string(&file)
        .map_err(|err| io::Error::new(io::ErrorKind::InvalidData, err))?;
    fs::write(path, raw)
}
