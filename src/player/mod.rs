mod controller;
mod fullscreen;
mod notify;
mod state;
mod timer;

pub use controller::WorkoutPlaybackController;
pub use fullscreen::{FullscreenPort, FullscreenState};
pub use notify::{Notification, Notifier};
pub use state::PlaybackState;
pub use timer::{IntervalTicks, TickSource};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlaybackStatus {
    NotStarted,
    Running,
    Paused,
    Completed,
}

/// What a single countdown step did to the session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    /// Timer not running, nothing changed
    Idle,
    Counted,
    /// Countdown hit zero and moved on to the next exercise
    Advanced,
    /// Countdown hit zero on the last exercise
    Finished,
}
