use super::PlaybackStatus;
use crate::domain::ExerciseStep;
use std::collections::HashSet;

#[derive(Default)]
pub struct PlaybackState {
    pub(crate) sequence: Vec<ExerciseStep>,
    pub(crate) current_index: usize,
    pub(crate) time_remaining: u32,
    pub(crate) is_running: bool,
    pub(crate) has_started: bool,
    pub(crate) seconds_worked: u64,
    /// Steps whose countdown ran out, skipped ones excluded
    pub(crate) finished_steps: HashSet<usize>,
}

impl PlaybackState {
    pub fn with_sequence(sequence: Vec<ExerciseStep>) -> Self {
        let mut state = PlaybackState {
            sequence,
            ..Default::default()
        };
        state.rewind();
        state
    }

    /// Back to the first step with its full duration, never started.
    pub(crate) fn rewind(&mut self) {
        self.current_index = 0;
        self.time_remaining = self.duration_at(0);
        self.is_running = false;
        self.has_started = false;
        self.seconds_worked = 0;
        self.finished_steps.clear();
    }

    pub(crate) fn duration_at(&self, idx: usize) -> u32 {
        self.sequence
            .get(idx)
            .map(ExerciseStep::duration_secs)
            .unwrap_or(0)
    }

    /// Jumps to `idx` and refills the countdown. Caller guarantees bounds.
    pub(crate) fn seek_to(&mut self, idx: usize) {
        self.current_index = idx;
        self.time_remaining = self.duration_at(idx);
    }

    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }

    pub fn len(&self) -> usize {
        self.sequence.len()
    }

    pub fn is_last(&self) -> bool {
        self.current_index + 1 >= self.sequence.len()
    }

    /// A tick source should only be attached while this holds.
    pub fn is_counting(&self) -> bool {
        !self.is_empty() && self.is_running && self.time_remaining > 0
    }

    pub fn current_step(&self) -> Option<&ExerciseStep> {
        self.sequence.get(self.current_index)
    }

    pub fn upcoming_step(&self) -> Option<&ExerciseStep> {
        self.sequence.get(self.current_index + 1)
    }

    pub fn status(&self) -> PlaybackStatus {
        match (self.has_started, self.is_running) {
            (false, _) => PlaybackStatus::NotStarted,
            _ if self.is_last() && self.time_remaining == 0 => PlaybackStatus::Completed,
            (true, true) => PlaybackStatus::Running,
            (true, false) => PlaybackStatus::Paused,
        }
    }

    pub fn progress_percent(&self) -> u8 {
        if self.is_empty() {
            return 0;
        }
        let ratio = (self.current_index + 1) as f64 / self.sequence.len() as f64;
        (ratio * 100.0).round() as u8
    }
}
