//! Tap-tempo estimation
//!
//! This module turns discrete tap events into a tempo estimate:
//! - [`TapTracker`] keeps the rolling tap history and decides when a run
//!   of taps has gone stale
//! - the estimate is the average of the retained inter-tap intervals,
//!   converted to beats per minute
//!
//! Timestamps are supplied by the caller, so tests can drive the tracker
//! with deterministic instants instead of the wall clock.

mod tracker;

pub use tracker::TapTracker;
