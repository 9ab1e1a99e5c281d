use clap::Parser;
use crossbeam::channel;
use std::thread;
use taptempors::{
    cli::Args,
    config::EngineConfig,
    create_shared_state,
    event_loop::{EngineMessage, EventLoop},
    logging, prefs, tui, update, Settings, SharedState,
};

fn main() {
    initialize_logging();
    let args = Args::parse();

    if args.check_update {
        run_update_check();
        return;
    }

    let config = load_engine_config(&args);
    let settings = restore_settings(&args);
    let shared_state = create_shared_state(&config, settings);

    let (message_tx, message_rx) = channel::unbounded();

    let engine_state = shared_state.clone();
    let engine = thread::spawn(move || EventLoop::new(engine_state, message_rx).run());

    if let Err(err) = tui::run_tui_event_loop(shared_state.clone(), message_tx.clone()) {
        log::error!("Terminal UI error: {}", err);
        eprintln!("Terminal UI error: {}", err);
    }

    // The TUI sends Quit on a clean exit; resend in case it bailed early.
    let _ = message_tx.send(EngineMessage::Quit);
    let _ = engine.join();

    persist_settings(&shared_state);
    log::info!("Shutdown complete");
}

fn initialize_logging() {
    logging::init_logger().expect("Logger initialization failed");
    log::info!("Application starting, version {}", env!("CARGO_PKG_VERSION"));
}

fn run_update_check() {
    match update::check_for_update(update::RELEASE_API_URL, env!("CARGO_PKG_VERSION")) {
        Ok(info) => {
            println!("{}", info.message);
            if let Some(url) = info.url {
                println!("Download: {}", url);
            }
        }
        Err(err) => {
            log::error!("Update check failed: {}", err);
            eprintln!("Update check failed: {}", err);
        }
    }
}

fn load_engine_config(args: &Args) -> EngineConfig {
    let mut config = match EngineConfig::load(EngineConfig::default_file()) {
        Ok(config) => config,
        Err(err) => {
            log::warn!("Falling back to default engine config: {}", err);
            EngineConfig::default()
        }
    };

    if let Some(reset_gap_ms) = args.reset_gap_ms {
        config.reset_gap_ms = reset_gap_ms;
    }
    if let Some(max_taps) = args.max_taps {
        config.max_taps = max_taps;
    }

    log::debug!("Engine config: {:?}", config);
    config
}

fn restore_settings(args: &Args) -> Settings {
    if args.no_restore {
        return Settings::default();
    }

    match prefs::default_path() {
        Some(path) => prefs::load(&path),
        None => Settings::default(),
    }
}

fn persist_settings(shared_state: &SharedState) {
    let settings = match shared_state.lock() {
        Ok(state) => state.settings(),
        Err(_) => return,
    };

    if let Some(path) = prefs::default_path() {
        if let Err(err) = prefs::store(&path, &settings) {
            log::warn!("Failed to persist preferences to {}: {}", path.display(), err);
        }
    }
}
