mod action;

pub use action::{handle_key_event, spawn_input_reader};

use ratatui::crossterm::event::KeyModifiers;

const X: KeyModifiers = KeyModifiers::NONE;
const C: KeyModifiers = KeyModifiers::CONTROL;

const SCROLL_MID: usize = 5;

#[derive(Debug, PartialEq, Eq)]
pub enum Action {
    // Playback
    TogglePlay,
    Next,
    Previous,
    AddTime(u32),
    Stop,
    ToggleFullscreen,
    ExitFullscreen,
    LeaveSession,

    // Routine picker
    Scroll(Director),
    LoadRoutine,
    ReloadRoutines,
    DeleteRoutine,

    ClosePopup,
    QUIT,
}

pub enum InputContext {
    Picker,
    Console,
    Popup,
}

#[derive(Debug, PartialEq, Eq)]
pub enum Director {
    Up(usize),
    Down(usize),
    Top,
    Bottom,
}
