mod exercise_step;
mod routine;
mod session_record;

pub use exercise_step::{DEFAULT_STEP_SECS, ExerciseStep};
pub use routine::Routine;
pub use session_record::SessionRecord;
