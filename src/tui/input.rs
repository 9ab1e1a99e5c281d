use crate::event_loop::EngineMessage;
use crossterm::event::{KeyCode, KeyEvent};
use std::time::Instant;

pub fn is_quit_key(key: &KeyEvent) -> bool {
    matches!(key.code, KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q'))
}

pub fn map_key_event(key: KeyEvent) -> Option<EngineMessage> {
    match key.code {
        KeyCode::Char(' ') | KeyCode::Enter => Some(EngineMessage::Tap(Instant::now())),
        KeyCode::Char('r') | KeyCode::Char('R') => Some(EngineMessage::Reset),
        KeyCode::Char('f') | KeyCode::Char('F') => Some(EngineMessage::ToggleRounding),
        KeyCode::Char('d') | KeyCode::Char('D') => Some(EngineMessage::CycleDivisionMode),
        KeyCode::Char('u') | KeyCode::Char('U') => Some(EngineMessage::CheckForUpdate),
        KeyCode::Char('o') | KeyCode::Char('O') => Some(EngineMessage::OpenReleasePage),
        _ => None,
    }
}
