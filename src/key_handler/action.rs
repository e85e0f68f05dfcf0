use crate::{key_handler::*, ui_state::UiState};
use crossbeam_channel::{Receiver, unbounded};
use ratatui::crossterm::event::{self, Event, KeyCode, KeyEvent};
use std::thread;
use tracing::error;

use KeyCode::*;

pub fn handle_key_event(key_event: KeyEvent, state: &UiState) -> Option<Action> {
    if let Some(action) = global_commands(&key_event) {
        return Some(action);
    }

    match state.get_input_context() {
        InputContext::Popup => Some(Action::ClosePopup),
        InputContext::Picker => handle_picker(&key_event),
        InputContext::Console => handle_console(&key_event, state.add_time_secs()),
    }
}

fn global_commands(key: &KeyEvent) -> Option<Action> {
    match (key.modifiers, key.code) {
        (C, Char('c')) => Some(Action::QUIT),
        _ => None,
    }
}

fn handle_picker(key: &KeyEvent) -> Option<Action> {
    match (key.modifiers, key.code) {
        (X, Enter) | (X, Right) | (X, Char('l')) => Some(Action::LoadRoutine),

        (X, Char('j')) | (X, Down) => Some(Action::Scroll(Director::Down(1))),
        (X, Char('k')) | (X, Up) => Some(Action::Scroll(Director::Up(1))),
        (X, Char('d')) => Some(Action::Scroll(Director::Down(SCROLL_MID))),
        (X, Char('u')) => Some(Action::Scroll(Director::Up(SCROLL_MID))),
        (X, Char('g')) => Some(Action::Scroll(Director::Top)),
        (_, Char('G')) => Some(Action::Scroll(Director::Bottom)),

        (X, Char('r')) | (X, F(5)) => Some(Action::ReloadRoutines),
        (X, Char('x')) | (X, Delete) => Some(Action::DeleteRoutine),
        (X, Char('q')) => Some(Action::QUIT),
        _ => None,
    }
}

fn handle_console(key: &KeyEvent, add_time: u32) -> Option<Action> {
    match (key.modifiers, key.code) {
        (X, Char(' ')) => Some(Action::TogglePlay),
        (X, Right) | (X, Char('l')) | (X, Char('n')) => Some(Action::Next),
        (X, Left) | (X, Char('h')) | (X, Char('p')) => Some(Action::Previous),
        (X, Esc) => Some(Action::ExitFullscreen),
        (X, Char('f')) => Some(Action::ToggleFullscreen),
        // Shift state for '+' depends on the keyboard layout
        (_, Char('+')) | (X, Char('=')) => Some(Action::AddTime(add_time)),
        (X, Char('s')) => Some(Action::Stop),
        (X, Char('q')) => Some(Action::LeaveSession),
        _ => None,
    }
}

/// Forwards terminal events from a dedicated thread so the main loop can
/// `select!` over them alongside the countdown.
pub fn spawn_input_reader() -> Receiver<Event> {
    let (tx, rx) = unbounded();

    thread::spawn(move || {
        loop {
            match event::read() {
                Ok(ev) => {
                    if tx.send(ev).is_err() {
                        break;
                    }
                }
                Err(e) => {
                    error!(error = %e, "terminal input failed");
                    break;
                }
            }
        }
    });

    rx
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn console_shortcuts() {
        assert_eq!(handle_console(&key(Char(' ')), 30), Some(Action::TogglePlay));
        assert_eq!(handle_console(&key(Right), 30), Some(Action::Next));
        assert_eq!(handle_console(&key(Left), 30), Some(Action::Previous));
        assert_eq!(handle_console(&key(Esc), 30), Some(Action::ExitFullscreen));
        assert_eq!(handle_console(&key(Char('f')), 30), Some(Action::ToggleFullscreen));
        assert_eq!(handle_console(&key(Char('s')), 30), Some(Action::Stop));
        assert_eq!(handle_console(&key(Char('q')), 30), Some(Action::LeaveSession));
    }

    #[test]
    fn plus_uses_configured_step_with_any_shift_state() {
        assert_eq!(handle_console(&key(Char('=')), 15), Some(Action::AddTime(15)));
        let shifted = KeyEvent::new(Char('+'), KeyModifiers::SHIFT);
        assert_eq!(handle_console(&shifted, 30), Some(Action::AddTime(30)));
    }

    #[test]
    fn picker_navigation() {
        assert_eq!(handle_picker(&key(Enter)), Some(Action::LoadRoutine));
        assert_eq!(
            handle_picker(&key(Down)),
            Some(Action::Scroll(Director::Down(1)))
        );
        assert_eq!(handle_picker(&key(Char('x'))), Some(Action::DeleteRoutine));
        assert_eq!(handle_picker(&key(Delete)), Some(Action::DeleteRoutine));
        assert_eq!(handle_picker(&key(Char(' '))), None);
    }

    #[test]
    fn ctrl_c_quits_everywhere() {
        let ev = KeyEvent::new(Char('c'), KeyModifiers::CONTROL);
        assert_eq!(global_commands(&ev), Some(Action::QUIT));
        assert_eq!(global_commands(&key(Char('c'))), None);
    }
}
