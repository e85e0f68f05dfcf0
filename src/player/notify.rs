use std::fmt;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Notification {
    ExerciseComplete { finished: String, next: String },
    SessionComplete { routine: String },
    Info(String),
}

impl fmt::Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Notification::ExerciseComplete { finished, next } => {
                write!(f, "Exercise complete! {finished} → {next}")
            }
            Notification::SessionComplete { routine } => write!(f, "Session complete: {routine}"),
            Notification::Info(msg) => write!(f, "{msg}"),
        }
    }
}

/// Fire-and-forget sink for transient user-facing messages.
pub trait Notifier {
    fn notify(&self, notification: Notification);
}

impl Notifier for crossbeam_channel::Sender<Notification> {
    fn notify(&self, notification: Notification) {
        // Nobody listening means nobody to tell
        let _ = self.send(notification);
    }
}
