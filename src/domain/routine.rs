use super::ExerciseStep;
use std::time::Duration;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Routine {
    pub(crate) id: i64,
    pub(crate) name: String,
    pub(crate) description: String,
    pub(crate) steps: Vec<ExerciseStep>,
}

impl Routine {
    pub fn get_id(&self) -> i64 {
        self.id
    }

    pub fn get_name(&self) -> &str {
        &self.name
    }

    pub fn get_description(&self) -> &str {
        &self.description
    }

    pub fn get_steps(&self) -> &[ExerciseStep] {
        &self.steps
    }

    pub fn total_duration(&self) -> Duration {
        self.steps.iter().map(|s| s.get_duration()).sum()
    }
}
