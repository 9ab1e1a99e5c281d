use std::thread;
use std::time::{Duration, Instant};
use taptempors::config::EngineConfig;
use taptempors::state::{create_shared_state, DivisionMode, EngineState, Settings};

fn engine() -> EngineState {
    EngineState::new(&EngineConfig::default(), Settings::default())
}

fn at(origin: Instant, ms: u64) -> Instant {
    origin + Duration::from_millis(ms)
}

#[test]
fn test_default_initialization() {
    let state = engine();

    assert_eq!(state.bpm(), 0.0);
    assert!(!state.round_state());
    assert_eq!(state.division_mode(), DivisionMode::None);
    assert!(state.timings().is_empty());
    assert!(state.update_notice().is_none());
}

#[test]
fn test_taps_then_timings_end_to_end() {
    let mut state = engine();
    let origin = Instant::now();

    assert_eq!(state.register_tap(at(origin, 0)), 0.0);
    let bpm = state.register_tap(at(origin, 500));
    assert!((bpm - 120.0).abs() < 1e-9);
    assert_eq!(format!("{:.2}", state.display_bpm()), "120.00");

    let table = state.timings();
    assert_eq!(table.full, "2000.00");
    assert_eq!(table.quarter, "500.00");
    assert_eq!(table.eighth, "250.00");
}

#[test]
fn test_toggle_rounding_changes_rendering() {
    let mut state = engine();
    let origin = Instant::now();

    state.register_tap(at(origin, 0));
    state.register_tap(at(origin, 500));

    state.toggle_rounding();
    assert!(state.round_state());
    assert_eq!(state.timings().quarter, "500");

    state.toggle_rounding();
    assert!(!state.round_state());
    assert_eq!(state.timings().quarter, "500.00");
}

#[test]
fn test_division_mode_cycles_back_to_start() {
    let mut state = engine();
    assert_eq!(state.division_mode(), DivisionMode::None);

    state.cycle_division_mode();
    assert_eq!(state.division_mode(), DivisionMode::DivideBy100);
    state.cycle_division_mode();
    assert_eq!(state.division_mode(), DivisionMode::DivideBy1000);
    state.cycle_division_mode();
    assert_eq!(state.division_mode(), DivisionMode::None);
}

#[test]
fn test_settings_do_not_touch_tap_history() {
    let mut state = engine();
    let origin = Instant::now();

    state.register_tap(at(origin, 0));
    state.register_tap(at(origin, 500));
    let before = state.bpm();

    state.toggle_rounding();
    state.cycle_division_mode();
    assert_eq!(state.bpm(), before);
}

#[test]
fn test_reset_empties_timing_table() {
    let mut state = engine();
    let origin = Instant::now();

    state.register_tap(at(origin, 0));
    state.register_tap(at(origin, 500));
    assert!(!state.timings().is_empty());

    state.reset();
    assert_eq!(state.bpm(), 0.0);
    assert!(state.timings().is_empty());
}

#[test]
fn test_timings_query_is_idempotent() {
    let mut state = engine();
    let origin = Instant::now();

    state.register_tap(at(origin, 0));
    state.register_tap(at(origin, 333));

    assert_eq!(state.timings(), state.timings());
}

#[test]
fn test_concurrent_mutations_are_serialized() {
    let shared_state = create_shared_state(&EngineConfig::default(), Settings::default());

    let mut handles = vec![];
    for _ in 0..10 {
        let state = shared_state.clone();
        handles.push(thread::spawn(move || {
            for _ in 0..10 {
                state.lock().unwrap().toggle_rounding();
            }
        }));
    }
    for handle in handles {
        handle.join().unwrap();
    }

    // An even number of toggles lands back on the initial value
    assert!(!shared_state.lock().unwrap().round_state());
}

#[test]
fn test_concurrent_taps_keep_state_consistent() {
    let shared_state = create_shared_state(&EngineConfig::default(), Settings::default());

    let mut handles = vec![];
    for _ in 0..4 {
        let state = shared_state.clone();
        handles.push(thread::spawn(move || {
            for _ in 0..25 {
                state.lock().unwrap().register_tap(Instant::now());
            }
        }));
    }
    for handle in handles {
        handle.join().unwrap();
    }

    let state = shared_state.lock().unwrap();
    assert!(state.bpm().is_finite());
    assert!(state.bpm() >= 0.0);
}
