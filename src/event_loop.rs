// event_loop.rs

use crate::state::SharedState;
use crate::update::{self, UpdateInfo};
use crossbeam::channel::Receiver;
use log::{debug, error, info, warn};
use std::thread;
use std::time::Instant;

/// Commands accepted by the engine thread. Every mutation of the shared
/// state flows through here, so tap registration and resets are serialized
/// under one mutual-exclusion domain.
#[derive(Debug, Clone, PartialEq)]
pub enum EngineMessage {
    /// A tap, stamped where the input event was observed
    Tap(Instant),
    Reset,
    ToggleRounding,
    CycleDivisionMode,
    CheckForUpdate,
    OpenReleasePage,
    Quit,
}

pub struct EventLoop {
    shared_state: SharedState,
    message_rx: Receiver<EngineMessage>,
}

impl EventLoop {
    pub fn new(shared_state: SharedState, message_rx: Receiver<EngineMessage>) -> Self {
        EventLoop {
            shared_state,
            message_rx,
        }
    }

    pub fn run(&self) {
        loop {
            match self.message_rx.recv() {
                Ok(EngineMessage::Quit) => {
                    info!("Quit received, stopping engine loop");
                    break;
                }
                Ok(message) => self.dispatch(message),
                Err(err) => {
                    error!("Engine channel closed: {}", err);
                    break;
                }
            }
        }
    }

    fn dispatch(&self, message: EngineMessage) {
        match message {
            EngineMessage::Tap(at) => {
                if let Ok(mut state) = self.shared_state.lock() {
                    let bpm = state.register_tap(at);
                    debug!("Tap registered, BPM {:.2}", bpm);
                }
            }
            EngineMessage::Reset => {
                if let Ok(mut state) = self.shared_state.lock() {
                    state.reset();
                    info!("Tap history reset");
                }
            }
            EngineMessage::ToggleRounding => {
                if let Ok(mut state) = self.shared_state.lock() {
                    state.toggle_rounding();
                    debug!("Rounding now {}", state.round_state());
                }
            }
            EngineMessage::CycleDivisionMode => {
                if let Ok(mut state) = self.shared_state.lock() {
                    state.cycle_division_mode();
                    debug!("Division mode now {:?}", state.division_mode());
                }
            }
            EngineMessage::CheckForUpdate => self.spawn_update_check(),
            EngineMessage::OpenReleasePage => self.open_release_page(),
            EngineMessage::Quit => {}
        }
    }

    // Fire-and-forget: the check must never block tap registration, so it
    // runs on its own thread and reports back through the shared state.
    fn spawn_update_check(&self) {
        let shared_state = self.shared_state.clone();
        thread::spawn(move || {
            let info = match update::check_for_update(
                update::RELEASE_API_URL,
                env!("CARGO_PKG_VERSION"),
            ) {
                Ok(info) => info,
                Err(err) => {
                    warn!("Update check failed: {}", err);
                    UpdateInfo {
                        available: false,
                        message: format!("Update check failed: {}", err),
                        url: None,
                    }
                }
            };
            if let Ok(mut state) = shared_state.lock() {
                state.set_update_notice(info);
            }
        });
    }

    fn open_release_page(&self) {
        let url = self
            .shared_state
            .lock()
            .ok()
            .and_then(|state| state.update_notice().and_then(|info| info.url.clone()));

        match url {
            Some(url) => update::open_release_page(&url),
            None => debug!("No release page to open"),
        }
    }
}
