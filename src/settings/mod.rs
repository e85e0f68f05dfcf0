use crate::{CONFIG_DIRECTORY, SETTINGS_FILENAME, expand_tilde};
use anyhow::{Context, Result};
use serde::Deserialize;
use std::{
    path::{Path, PathBuf},
    time::Duration,
};

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Seconds added by the "+" key
    pub add_time_secs: u32,
    pub tick_interval_ms: u64,
    /// Routines in this file are imported into the library on startup
    pub routines_file: Option<PathBuf>,
    pub presentation: PresentationSettings,
    pub logging: LoggingSettings,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PresentationSettings {
    pub min_width: u16,
    pub min_height: u16,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    pub level: String,
    pub directory: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            add_time_secs: 30,
            tick_interval_ms: 1000,
            routines_file: None,
            presentation: PresentationSettings::default(),
            logging: LoggingSettings::default(),
        }
    }
}

impl Default for PresentationSettings {
    fn default() -> Self {
        PresentationSettings {
            min_width: 40,
            min_height: 12,
        }
    }
}

impl Default for LoggingSettings {
    fn default() -> Self {
        LoggingSettings {
            level: String::from("info"),
            directory: None,
        }
    }
}

impl Settings {
    pub fn config_dir() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(CONFIG_DIRECTORY))
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file_str = std::fs::read_to_string(path)
            .with_context(|| format!("Could not read {}", path.display()))?;
        let mut settings = toml::from_str::<Settings>(&file_str)
            .with_context(|| format!("Formatting error in {}", path.display()))?;

        if let Some(routines) = settings.routines_file.take() {
            settings.routines_file = Some(expand_tilde(routines)?);
        }
        Ok(settings)
    }

    /// Reads the user's settings file. A missing file means defaults.
    pub fn load() -> Result<Self> {
        match Self::config_dir().map(|dir| dir.join(SETTINGS_FILENAME)) {
            Some(path) if path.exists() => Self::load_from_file(&path),
            _ => Ok(Settings::default()),
        }
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms.max(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn partial_file_keeps_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "add_time_secs = 15\n[presentation]\nmin_width = 80").unwrap();

        let settings = Settings::load_from_file(file.path()).unwrap();
        assert_eq!(settings.add_time_secs, 15);
        assert_eq!(settings.tick_interval_ms, 1000);
        assert_eq!(settings.presentation.min_width, 80);
        assert_eq!(settings.presentation.min_height, 12);
        assert_eq!(settings.logging.level, "info");
    }

    #[test]
    fn malformed_file_is_an_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "add_time_secs = \"lots\"").unwrap();
        assert!(Settings::load_from_file(file.path()).is_err());
    }

    #[test]
    fn zero_tick_interval_is_clamped() {
        let settings = Settings {
            tick_interval_ms: 0,
            ..Default::default()
        };
        assert_eq!(settings.tick_interval(), Duration::from_millis(1));
    }
}
