use std::fs;
use std::sync::Mutex;
use taptempors::config::{
    EngineConfig, DEFAULT_MAX_TAPS, DEFAULT_MIN_INTERVAL_MS, DEFAULT_RESET_GAP_MS,
};

// Environment sources read process-wide state, so the tests in this file
// must not run interleaved
static ENV_LOCK: Mutex<()> = Mutex::new(());

#[test]
fn test_defaults_without_file_or_environment() {
    let _guard = ENV_LOCK.lock().unwrap();

    let config = EngineConfig::load(None).unwrap();
    assert_eq!(config.reset_gap_ms, DEFAULT_RESET_GAP_MS);
    assert_eq!(config.max_taps, DEFAULT_MAX_TAPS);
    assert_eq!(config.min_interval_ms, DEFAULT_MIN_INTERVAL_MS);
}

#[test]
fn test_environment_overrides_defaults() {
    let _guard = ENV_LOCK.lock().unwrap();

    std::env::set_var("TAPTEMPO_RESET_GAP_MS", "3000");
    let config = EngineConfig::load(None).unwrap();
    std::env::remove_var("TAPTEMPO_RESET_GAP_MS");

    assert_eq!(config.reset_gap_ms, 3000);
    assert_eq!(config.max_taps, DEFAULT_MAX_TAPS);
}

#[test]
fn test_config_file_overrides_defaults() {
    let _guard = ENV_LOCK.lock().unwrap();

    let path = std::env::temp_dir().join(format!("taptempors-config-{}.toml", std::process::id()));
    fs::write(&path, "reset_gap_ms = 1500\nmax_taps = 8\n").unwrap();

    let config = EngineConfig::load(Some(path.clone())).unwrap();
    assert_eq!(config.reset_gap_ms, 1500);
    assert_eq!(config.max_taps, 8);
    assert_eq!(config.min_interval_ms, DEFAULT_MIN_INTERVAL_MS);

    let _ = fs::remove_file(&path);
}

#[test]
fn test_missing_config_file_is_not_an_error() {
    let _guard = ENV_LOCK.lock().unwrap();

    let path = std::env::temp_dir().join("taptempors-does-not-exist.toml");
    let config = EngineConfig::load(Some(path)).unwrap();
    assert_eq!(config.reset_gap_ms, DEFAULT_RESET_GAP_MS);
}
