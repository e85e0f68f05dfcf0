use crate::{CONFIG_DIRECTORY, settings::LoggingSettings};
use anyhow::{Context, Result, anyhow};
use std::path::PathBuf;
use tracing_appender::{
    non_blocking::WorkerGuard,
    rolling::{RollingFileAppender, Rotation},
};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

pub const LOG_ENV: &str = "COACHDECK_LOG";
const LOG_PREFIX: &str = "coachdeck";
const MAX_LOG_FILES: usize = 14;

/// Where log files go when the settings don't say.
pub fn default_log_dir() -> Option<PathBuf> {
    dirs::data_local_dir().map(|dir| dir.join(CONFIG_DIRECTORY).join("logs"))
}

/// Installs the global subscriber. The terminal belongs to the console, so
/// output only ever goes to daily rolling files.
///
/// The returned guard flushes buffered lines on drop and must outlive the
/// event loop.
pub fn init_logging(opts: &LoggingSettings) -> Result<WorkerGuard> {
    let dir = opts
        .directory
        .clone()
        .or_else(default_log_dir)
        .ok_or_else(|| anyhow!("Could not determine a log directory"))?;

    std::fs::create_dir_all(&dir)
        .with_context(|| format!("Could not create log directory {}", dir.display()))?;

    let appender = RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix(LOG_PREFIX)
        .filename_suffix("log")
        .max_log_files(MAX_LOG_FILES)
        .build(&dir)
        .with_context(|| format!("initializing rolling file appender at {}", dir.display()))?;
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let filter = EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_new(&opts.level))
        .context("error parsing log level string")?;

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(writer)
                .with_ansi(false),
        )
        .try_init()
        .context("global logger already installed")?;

    Ok(guard)
}
