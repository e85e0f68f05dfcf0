use crate::{DurationStyle, get_readable_duration};
use serde::Deserialize;
use std::time::Duration;

/// Fallback used when a step carries no usable duration.
pub const DEFAULT_STEP_SECS: u32 = 60;

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct ExerciseStep {
    #[serde(default)]
    pub(crate) id: i64,
    pub(crate) name: String,
    #[serde(default)]
    pub(crate) description: String,
    #[serde(default, rename = "duration")]
    pub(crate) duration_seconds: Option<i64>,
    #[serde(default)]
    pub(crate) repetitions: Option<u32>,
    #[serde(default)]
    pub(crate) sets: Option<u32>,
}

impl ExerciseStep {
    pub fn new(name: impl Into<String>, duration_seconds: Option<i64>) -> Self {
        ExerciseStep {
            name: name.into(),
            duration_seconds,
            ..Default::default()
        }
    }

    pub fn with_id(mut self, id: i64) -> Self {
        self.id = id;
        self
    }

    pub fn with_volume(mut self, sets: Option<u32>, repetitions: Option<u32>) -> Self {
        self.sets = sets;
        self.repetitions = repetitions;
        self
    }

    pub fn get_id(&self) -> i64 {
        self.id
    }

    pub fn get_name(&self) -> &str {
        &self.name
    }

    pub fn get_description(&self) -> &str {
        &self.description
    }

    pub fn get_repetitions(&self) -> Option<u32> {
        self.repetitions
    }

    pub fn get_sets(&self) -> Option<u32> {
        self.sets
    }

    /// Effective countdown length in seconds. Missing, zero, negative or
    /// oversized values all fall back to [`DEFAULT_STEP_SECS`].
    pub fn duration_secs(&self) -> u32 {
        match self.duration_seconds {
            Some(secs) if secs > 0 => u32::try_from(secs).unwrap_or(DEFAULT_STEP_SECS),
            _ => DEFAULT_STEP_SECS,
        }
    }

    pub fn get_duration(&self) -> Duration {
        Duration::from_secs(self.duration_secs() as u64)
    }

    pub fn get_duration_str(&self) -> String {
        get_readable_duration(self.get_duration(), DurationStyle::Compact)
    }

    /// "3 x 12" style summary, empty when neither counter is set.
    pub fn volume_display(&self) -> String {
        match (self.sets, self.repetitions) {
            (Some(s), Some(r)) => format!("{s} x {r}"),
            (Some(s), None) => format!("{s} sets"),
            (None, Some(r)) => format!("{r} reps"),
            (None, None) => String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_positive_or_missing_duration_falls_back() {
        assert_eq!(ExerciseStep::new("plank", None).duration_secs(), 60);
        assert_eq!(ExerciseStep::new("plank", Some(0)).duration_secs(), 60);
        assert_eq!(ExerciseStep::new("plank", Some(-15)).duration_secs(), 60);
        assert_eq!(ExerciseStep::new("plank", Some(45)).duration_secs(), 45);
    }

    #[test]
    fn oversized_duration_falls_back() {
        let step = ExerciseStep::new("marathon", Some(i64::MAX));
        assert_eq!(step.duration_secs(), DEFAULT_STEP_SECS);
    }

    #[test]
    fn volume_display_formats_counters() {
        let step = ExerciseStep::new("squat", Some(40)).with_volume(Some(3), Some(12));
        assert_eq!(step.volume_display(), "3 x 12");

        let step = ExerciseStep::new("squat", Some(40)).with_volume(None, Some(20));
        assert_eq!(step.volume_display(), "20 reps");

        assert!(ExerciseStep::new("rest", None).volume_display().is_empty());
    }
}
