use anyhow::{Result, anyhow};
use ratatui::crossterm::{
    ExecutableCommand,
    cursor::MoveToColumn,
    style::Print,
    terminal::{Clear, ClearType},
};
use std::{
    io::Write,
    path::{Path, PathBuf},
    time::Duration,
};

pub mod app_core;
pub mod database;
pub mod domain;
pub mod key_handler;
pub mod player;
pub mod settings;
pub mod telemetry;
pub mod tui;
pub mod ui_state;

pub use database::Database;
pub use player::WorkoutPlaybackController;
pub use settings::Settings;

// ~30fps
pub const REFRESH_RATE: Duration = Duration::from_millis(33);

pub const CONFIG_DIRECTORY: &str = "coachdeck";
pub const DATABASE_FILENAME: &str = "coachdeck.db";
pub const SETTINGS_FILENAME: &str = "settings.toml";

pub enum DurationStyle {
    Clean,
    Compact,
}

pub fn get_readable_duration(duration: Duration, style: DurationStyle) -> String {
    let mut secs = duration.as_secs();
    let mins = secs / 60;
    secs %= 60;

    match style {
        DurationStyle::Clean => match mins {
            0 => format!("{secs:02}s"),
            _ => format!("{mins}m {secs:02}s"),
        },
        DurationStyle::Compact => format!("{mins}:{secs:02}"),
    }
}

/// Countdown readout, e.g. `01:05`.
pub fn format_countdown(secs: u32) -> String {
    format!("{:02}:{:02}", secs / 60, secs % 60)
}

fn truncate_at_last_space(s: &str, limit: usize) -> String {
    if s.chars().count() <= limit {
        return s.to_string();
    }

    let byte_limit = s
        .char_indices()
        .map(|(i, _)| i)
        .nth(limit)
        .unwrap_or(s.len());

    let cut = s[..byte_limit].rfind(' ').unwrap_or(byte_limit);
    let mut truncated = s[..cut].trim_end().to_string();
    truncated.push('…');
    truncated
}

pub fn overwrite_line(message: &str) -> Result<()> {
    let mut stdout = std::io::stdout();
    stdout
        .execute(MoveToColumn(0))?
        .execute(Clear(ClearType::CurrentLine))?
        .execute(Print(message))?;
    stdout.flush()?;
    Ok(())
}

pub fn expand_tilde<P: AsRef<Path>>(path: P) -> Result<PathBuf> {
    let path = path.as_ref();
    let path_str = path.to_string_lossy();

    match path_str.strip_prefix("~/").or(path_str.strip_prefix("~\\")) {
        Some(rest) => {
            let home =
                dirs::home_dir().ok_or_else(|| anyhow!("Could not determine home directory!"))?;
            Ok(home.join(rest))
        }
        None if path_str.starts_with('~') => Err(anyhow!("Error reading path with tilde (~)")),
        None => Ok(path.to_path_buf()),
    }
}
