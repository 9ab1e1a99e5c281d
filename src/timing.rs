//! Note timing derivation
//!
//! Converts a tempo into millisecond durations for the eight note
//! subdivisions from a whole note down to 1/128, with the presentation
//! transforms (division mode, rounding) applied in that order.

use crate::state::Settings;

/// Formatted durations for each note subdivision at one tempo.
///
/// Values are strings because precision is a presentation concern: two
/// decimals normally, whole numbers when rounding is on, and empty when no
/// tempo has been established (distinct from a real zero duration).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TimingTable {
    pub full: String,
    pub half: String,
    pub quarter: String,
    pub eighth: String,
    pub sixteenth: String,
    pub thirty_second: String,
    pub sixty_fourth: String,
    pub one_twenty_eighth: String,
}

impl TimingTable {
    /// Derive the table for `bpm` under `settings`.
    ///
    /// Non-positive or non-finite tempos yield the all-empty table; the
    /// derivation itself never divides by zero or produces inf/NaN.
    pub fn derive(bpm: f64, settings: &Settings) -> Self {
        if !bpm.is_finite() || bpm <= 0.0 {
            return Self::default();
        }

        let quarter_ms = 60_000.0 / bpm;
        let entry = |ratio: f64| format_duration(quarter_ms * ratio, settings);

        Self {
            full: entry(4.0),
            half: entry(2.0),
            quarter: entry(1.0),
            eighth: entry(0.5),
            sixteenth: entry(0.25),
            thirty_second: entry(0.125),
            sixty_fourth: entry(0.0625),
            one_twenty_eighth: entry(0.03125),
        }
    }

    /// Rows in table order, paired with the conventional note names.
    pub fn rows(&self) -> [(&'static str, &str); 8] {
        [
            ("1", self.full.as_str()),
            ("1/2", self.half.as_str()),
            ("1/4", self.quarter.as_str()),
            ("1/8", self.eighth.as_str()),
            ("1/16", self.sixteenth.as_str()),
            ("1/32", self.thirty_second.as_str()),
            ("1/64", self.sixty_fourth.as_str()),
            ("1/128", self.one_twenty_eighth.as_str()),
        ]
    }

    pub fn is_empty(&self) -> bool {
        self.quarter.is_empty()
    }
}

/// Scale first, then round: the division mode picks the display unit, and
/// rounding applies to the value actually shown. Ties round away from zero.
fn format_duration(value_ms: f64, settings: &Settings) -> String {
    let scaled = value_ms / settings.division_mode.divisor();
    if settings.round_outputs {
        format!("{:.0}", scaled.round())
    } else {
        format!("{:.2}", scaled)
    }
}
