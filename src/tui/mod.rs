mod layout;
mod renderer;
mod theme;
mod widgets;

pub use layout::{ConsoleLayout, PickerLayout};
pub use renderer::render;
pub use widgets::{
    Countdown, ErrorMsg, ExerciseCard, RoutineDetail, RoutineList, SessionProgress, StatusLine,
    ToastStack,
};
