use std::time::{SystemTime, UNIX_EPOCH};

/// A finished session as written to the session log. `steps_completed`
/// counts the steps whose countdown ran out, so skipped steps are left out.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionRecord {
    pub routine_id: i64,
    pub routine_name: String,
    pub steps_completed: u32,
    pub seconds_worked: u64,
    pub finished_at: i64,
}

impl SessionRecord {
    pub fn now(
        routine_id: i64,
        routine_name: &str,
        steps_completed: u32,
        seconds_worked: u64,
    ) -> Self {
        let finished_at = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs() as i64)
            .unwrap_or_default();

        SessionRecord {
            routine_id,
            routine_name: routine_name.to_string(),
            steps_completed,
            seconds_worked,
            finished_at,
        }
    }
}
