mod countdown;
mod error;
mod exercise_card;
mod progress;
mod routine_detail;
mod routine_list;
mod status_line;
mod toasts;

pub use countdown::Countdown;
pub use error::ErrorMsg;
pub use exercise_card::ExerciseCard;
pub use progress::SessionProgress;
pub use routine_detail::RoutineDetail;
pub use routine_list::RoutineList;
pub use status_line::StatusLine;
pub use toasts::ToastStack;

const PAUSE_ICON: &str = "⏸";
const PLAY_ICON: &str = "▶";

static PANEL_PADDING: ratatui::widgets::Padding = ratatui::widgets::Padding {
    left: 2,
    right: 2,
    top: 1,
    bottom: 0,
};
