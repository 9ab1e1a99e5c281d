use std::fs;
use std::path::PathBuf;
use taptempors::prefs;
use taptempors::state::{DivisionMode, Settings};

fn temp_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("taptempors-{}-{}.yml", name, std::process::id()))
}

#[test]
fn test_settings_roundtrip() {
    let path = temp_path("roundtrip");
    let settings = Settings {
        round_outputs: true,
        division_mode: DivisionMode::DivideBy1000,
    };

    prefs::store(&path, &settings).unwrap();
    assert_eq!(prefs::load(&path), settings);

    let _ = fs::remove_file(&path);
}

#[test]
fn test_missing_file_yields_defaults() {
    let path = temp_path("missing");
    let _ = fs::remove_file(&path);

    assert_eq!(prefs::load(&path), Settings::default());
}

#[test]
fn test_out_of_range_ordinal_falls_back_to_none() {
    let path = temp_path("bad-ordinal");
    fs::write(&path, "round_outputs: true\ndivision_mode: 9\n").unwrap();

    let settings = prefs::load(&path);
    assert!(settings.round_outputs);
    assert_eq!(settings.division_mode, DivisionMode::None);

    let _ = fs::remove_file(&path);
}

#[test]
fn test_malformed_file_yields_defaults() {
    let path = temp_path("malformed");
    fs::write(&path, "round_outputs: [not a bool\n").unwrap();

    assert_eq!(prefs::load(&path), Settings::default());

    let _ = fs::remove_file(&path);
}

#[test]
fn test_store_creates_parent_directories() {
    let dir = std::env::temp_dir().join(format!("taptempors-nested-{}", std::process::id()));
    let _ = fs::remove_dir_all(&dir);
    let path = dir.join("prefs.yml");

    prefs::store(&path, &Settings::default()).unwrap();
    assert_eq!(prefs::load(&path), Settings::default());

    let _ = fs::remove_dir_all(&dir);
}
