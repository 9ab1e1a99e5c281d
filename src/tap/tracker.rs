use log::debug;
use std::time::{Duration, Instant};

/// Estimates tempo from the intervals between taps.
///
/// The tracker keeps a bounded history of tap timestamps. A gap of
/// `reset_gap` or more between consecutive taps means the user stopped and
/// started again, so the old run is discarded rather than polluting the
/// average with one long unrelated interval. Intervals shorter than
/// `min_interval` are treated as key bounce and excluded.
#[derive(Debug, Clone)]
pub struct TapTracker {
    taps: Vec<Instant>,
    bpm: f64,
    reset_gap: Duration,
    max_taps: usize,
    min_interval: Duration,
}

impl TapTracker {
    pub fn new(reset_gap: Duration, max_taps: usize, min_interval: Duration) -> Self {
        assert!(max_taps >= 2, "at least two taps must be retained");

        Self {
            taps: Vec::with_capacity(max_taps),
            bpm: 0.0,
            reset_gap,
            max_taps,
            min_interval,
        }
    }

    /// Register a tap at `at` and return the tempo estimate in its
    /// two-decimal display form. Full precision is kept internally for
    /// timing derivation; see [`TapTracker::bpm`].
    ///
    /// Returns 0 until two taps of the current run have been seen.
    pub fn tap(&mut self, at: Instant) -> f64 {
        if let Some(&last) = self.taps.last() {
            if at.duration_since(last) >= self.reset_gap {
                debug!("Tap gap exceeded {:?}, starting a new run", self.reset_gap);
                self.taps.clear();
            }
        }

        self.taps.push(at);

        // Keep only the most recent taps within the window
        if self.taps.len() > self.max_taps {
            let excess = self.taps.len() - self.max_taps;
            self.taps.drain(..excess);
        }

        self.bpm = self.recompute();
        self.display_bpm()
    }

    /// Clear the tap history. Resetting an empty tracker is a no-op.
    pub fn reset(&mut self) {
        self.taps.clear();
        self.bpm = 0.0;
    }

    /// Current estimate at full floating-point precision, 0 when no tempo
    /// has been established.
    pub fn bpm(&self) -> f64 {
        self.bpm
    }

    /// Current estimate rounded to two decimal places for display.
    pub fn display_bpm(&self) -> f64 {
        (self.bpm * 100.0).round() / 100.0
    }

    fn recompute(&self) -> f64 {
        if self.taps.len() < 2 {
            return 0.0;
        }

        let mut total_ms = 0.0;
        let mut count = 0u32;
        for pair in self.taps.windows(2) {
            let interval = pair[1].duration_since(pair[0]);
            if interval >= self.min_interval {
                total_ms += interval.as_secs_f64() * 1000.0;
                count += 1;
            }
        }

        if count == 0 {
            return 0.0;
        }

        let average_ms = total_ms / f64::from(count);
        if average_ms <= 0.0 {
            return 0.0;
        }

        60_000.0 / average_ms
    }
}
