mod mode;
mod picker;
mod popup;
mod session;
mod toasts;

pub use mode::Mode;
pub use picker::RoutinePicker;
pub use popup::ErrorPopup;
pub use toasts::{Toast, ToastQueue};

use crate::{
    WorkoutPlaybackController,
    domain::{Routine, SessionRecord},
    key_handler::InputContext,
};
use anyhow::Error;
use tracing::error;

pub struct UiState {
    pub(crate) playback: WorkoutPlaybackController,
    pub(crate) picker: RoutinePicker,
    pub(crate) active_routine: Option<Routine>,
    pub(crate) recent_sessions: Vec<SessionRecord>,

    pub(crate) popup: ErrorPopup,
    pub(crate) toasts: ToastQueue,

    mode: Mode,
    add_time_secs: u32,
    session_logged: bool,
}

impl UiState {
    pub fn new(playback: WorkoutPlaybackController, add_time_secs: u32) -> Self {
        UiState {
            playback,
            picker: RoutinePicker::new(),
            active_routine: None,
            recent_sessions: Vec::new(),
            popup: ErrorPopup::default(),
            toasts: ToastQueue::new(),
            mode: Mode::Picker,
            add_time_secs,
            session_logged: false,
        }
    }
}

impl UiState {
    pub fn get_mode(&self) -> Mode {
        self.mode
    }

    pub fn set_mode(&mut self, mode: Mode) {
        self.mode = mode
    }

    pub fn add_time_secs(&self) -> u32 {
        self.add_time_secs
    }

    pub fn set_error(&mut self, e: Error) {
        error!("{e:#}");
        self.popup.raise(format!("{e:#}"));
    }

    pub fn get_error(&self) -> Option<&str> {
        self.popup.message()
    }

    pub fn close_popup(&mut self) {
        self.popup.dismiss();
    }

    pub fn get_input_context(&self) -> InputContext {
        if self.popup.is_open() {
            return InputContext::Popup;
        }

        match self.mode {
            Mode::Picker | Mode::QUIT => InputContext::Picker,
            Mode::Console => InputContext::Console,
        }
    }
}
