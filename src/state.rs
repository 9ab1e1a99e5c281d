use crate::config::EngineConfig;
use crate::tap::TapTracker;
use crate::timing::TimingTable;
use crate::update::UpdateInfo;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

/// Display-scale transform applied uniformly to every timing value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DivisionMode {
    None,
    DivideBy100,
    DivideBy1000,
}

impl DivisionMode {
    /// Advance through the fixed cycle None -> /100 -> /1000 -> None.
    pub fn next(self) -> Self {
        match self {
            DivisionMode::None => DivisionMode::DivideBy100,
            DivisionMode::DivideBy100 => DivisionMode::DivideBy1000,
            DivisionMode::DivideBy1000 => DivisionMode::None,
        }
    }

    pub fn ordinal(self) -> u8 {
        match self {
            DivisionMode::None => 0,
            DivisionMode::DivideBy100 => 1,
            DivisionMode::DivideBy1000 => 2,
        }
    }

    /// Out-of-range ordinals fail closed to `None` so a stale or corrupt
    /// preferences file cannot crash the engine.
    pub fn from_ordinal(ordinal: u8) -> Self {
        match ordinal {
            1 => DivisionMode::DivideBy100,
            2 => DivisionMode::DivideBy1000,
            _ => DivisionMode::None,
        }
    }

    pub fn divisor(self) -> f64 {
        match self {
            DivisionMode::None => 1.0,
            DivisionMode::DivideBy100 => 100.0,
            DivisionMode::DivideBy1000 => 1000.0,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            DivisionMode::None => "ms",
            DivisionMode::DivideBy100 => "ms / 100",
            DivisionMode::DivideBy1000 => "ms / 1000",
        }
    }
}

/// Presentation settings, mutated only by the toggle and cycle operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settings {
    pub round_outputs: bool,
    pub division_mode: DivisionMode,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            round_outputs: false,
            division_mode: DivisionMode::None,
        }
    }
}

/// The engine context: tap tracking plus presentation settings.
///
/// Owned by the caller and shared behind [`SharedState`]; there is no
/// process-wide instance. All mutating operations go through `&mut self`,
/// so serializing callers under the one mutex is enough to keep the tap
/// history consistent.
pub struct EngineState {
    tracker: TapTracker,
    settings: Settings,
    update: Option<UpdateInfo>,
}

impl EngineState {
    pub fn new(config: &EngineConfig, settings: Settings) -> Self {
        Self {
            tracker: TapTracker::new(
                Duration::from_millis(config.reset_gap_ms),
                config.max_taps,
                Duration::from_millis(config.min_interval_ms),
            ),
            settings,
            update: None,
        }
    }

    /// Register a tap and return the display-rounded tempo estimate.
    pub fn register_tap(&mut self, at: Instant) -> f64 {
        self.tracker.tap(at)
    }

    pub fn reset(&mut self) {
        self.tracker.reset();
    }

    /// Full-precision estimate, 0 when no tempo has been established.
    pub fn bpm(&self) -> f64 {
        self.tracker.bpm()
    }

    /// Two-decimal display form of the estimate.
    pub fn display_bpm(&self) -> f64 {
        self.tracker.display_bpm()
    }

    /// Derive the timing table from the current estimate and settings.
    /// Pure given those inputs; every entry is empty until a tempo exists.
    pub fn timings(&self) -> TimingTable {
        TimingTable::derive(self.tracker.bpm(), &self.settings)
    }

    pub fn toggle_rounding(&mut self) {
        self.settings.round_outputs = !self.settings.round_outputs;
    }

    pub fn round_state(&self) -> bool {
        self.settings.round_outputs
    }

    pub fn cycle_division_mode(&mut self) {
        self.settings.division_mode = self.settings.division_mode.next();
    }

    pub fn division_mode(&self) -> DivisionMode {
        self.settings.division_mode
    }

    pub fn settings(&self) -> Settings {
        self.settings
    }

    pub fn set_update_notice(&mut self, info: UpdateInfo) {
        self.update = Some(info);
    }

    pub fn update_notice(&self) -> Option<&UpdateInfo> {
        self.update.as_ref()
    }
}

pub type SharedState = Arc<Mutex<EngineState>>;

pub fn create_shared_state(config: &EngineConfig, settings: Settings) -> SharedState {
    Arc::new(Mutex::new(EngineState::new(config, settings)))
}
