use super::{Mode, UiState};
use crate::{
    domain::{Routine, SessionRecord},
    player::PlaybackStatus,
};
use anyhow::{Result, anyhow};
use tracing::info;

// =============
//    SESSION
// =============
impl UiState {
    pub fn start_selected_routine(&mut self) -> Result<()> {
        let routine = self
            .picker
            .selected()
            .cloned()
            .ok_or_else(|| anyhow!("No routine selected"))?;

        if routine.get_steps().is_empty() {
            return Err(anyhow!("\"{}\" has no exercises", routine.get_name()));
        }

        self.start_routine(routine);
        Ok(())
    }

    pub fn start_routine(&mut self, routine: Routine) {
        info!(routine = routine.get_name(), "session loaded");
        self.playback.load_sequence(routine.get_steps().to_vec());
        self.active_routine = Some(routine);
        self.session_logged = false;
        self.set_mode(Mode::Console);
    }

    /// Drops the sequence and goes back to the picker.
    pub fn leave_session(&mut self) {
        self.playback.exit_fullscreen();
        self.playback.clear();
        self.active_routine = None;
        self.session_logged = false;
        self.set_mode(Mode::Picker);
    }

    /// Rewinds the routine. Finishing it again counts as a new session.
    pub fn stop_session(&mut self) {
        self.playback.stop();
        self.session_logged = false;
    }

    pub fn active_routine_name(&self) -> &str {
        self.active_routine
            .as_ref()
            .map(|r| r.get_name())
            .unwrap_or_default()
    }

    /// Log entry for the session that just finished. Yields at most once
    /// per session, so extra time run out on the last step is not logged
    /// again.
    pub fn take_completed_session(&mut self) -> Option<SessionRecord> {
        if self.session_logged || self.playback.status() != PlaybackStatus::Completed {
            return None;
        }
        let routine = self.active_routine.as_ref()?;

        let record = SessionRecord::now(
            routine.get_id(),
            routine.get_name(),
            self.playback.steps_finished() as u32,
            self.playback.seconds_worked(),
        );
        self.session_logged = true;
        Some(record)
    }

    pub fn is_presenting(&self) -> bool {
        self.playback.is_fullscreen()
    }
}
