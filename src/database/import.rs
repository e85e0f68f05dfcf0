use crate::domain::ExerciseStep;
use anyhow::{Context, Result, bail};
use serde::Deserialize;
use std::path::Path;

/// Routine file layout:
///
/// ```toml
/// [[routine]]
/// name = "Morning HIIT"
///
/// [[routine.step]]
/// name = "Burpees"
/// duration = 45
/// sets = 3
/// repetitions = 12
/// ```
#[derive(Debug, Default, Deserialize)]
pub struct RoutineImport {
    #[serde(default, rename = "routine")]
    pub routines: Vec<RoutineEntry>,
}

#[derive(Debug, Deserialize)]
pub struct RoutineEntry {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, rename = "step")]
    pub steps: Vec<ExerciseStep>,
}

impl RoutineImport {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file_str = std::fs::read_to_string(path)
            .with_context(|| format!("Could not read routines from {}", path.display()))?;
        Self::parse(&file_str).with_context(|| format!("Invalid routine file {}", path.display()))
    }

    pub fn parse(s: &str) -> Result<Self> {
        let import = toml::from_str::<RoutineImport>(s)?;

        for routine in &import.routines {
            if routine.name.trim().is_empty() {
                bail!("Routine without a name");
            }
            if let Some(step) = routine.steps.iter().find(|s| s.name.trim().is_empty()) {
                bail!(
                    "Unnamed exercise in routine \"{}\" (description: {:?})",
                    routine.name,
                    step.description
                );
            }
        }
        Ok(import)
    }
}
