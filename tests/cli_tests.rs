use clap::Parser;
use taptempors::cli::Args;

#[test]
fn test_args_defaults() {
    let args = Args::parse_from(["taptempors"]);

    assert_eq!(args.reset_gap_ms, None);
    assert_eq!(args.max_taps, None);
    assert!(!args.no_restore);
    assert!(!args.check_update);
}

#[test]
fn test_args_with_engine_overrides() {
    let args = Args::parse_from([
        "taptempors",
        "--reset-gap-ms",
        "1500",
        "--max-taps",
        "8",
        "--no-restore",
    ]);

    assert_eq!(args.reset_gap_ms, Some(1500));
    assert_eq!(args.max_taps, Some(8));
    assert!(args.no_restore);
    assert!(!args.check_update);
}

#[test]
fn test_args_with_update_check() {
    let args = Args::parse_from(["taptempors", "--check-update"]);
    assert!(args.check_update);
}
