//! Logging
//!
//! Diagnostics go to a log file, never to the console, so they cannot mix
//! with command output. Logging is off unless `--log-level` asks for it.

use crate::cli::LogLevel;
use anyhow::{Context, Result};
use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use tracing::level_filters::LevelFilter;
use tracing_appender::non_blocking::WorkerGuard;

const LOG_FILE: &str = "prodcli.log";

/// Where the log file lives: the user config dir, then `~/.prodcli`, then
/// the working directory
pub fn log_path() -> PathBuf {
    log_path_in(dirs::config_dir().as_deref(), dirs::home_dir().as_deref())
}

fn log_path_in(config_dir: Option<&Path>, home_dir: Option<&Path>) -> PathBuf {
    match (config_dir, home_dir) {
        (Some(dir), _) => dir.join("prodcli").join(LOG_FILE),
        (None, Some(home)) => home.join(".prodcli").join(LOG_FILE),
        (None, None) => PathBuf::from(LOG_FILE),
    }
}

/// Install the global subscriber. The returned guard flushes pending lines
/// when dropped and must outlive every log call.
pub fn init(level: LogLevel) -> Result<Option<WorkerGuard>> {
    let filter = LevelFilter::from(level);
    if filter == LevelFilter::OFF {
        return Ok(None);
    }

    let path = log_path();
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create log directory {:?}", parent))?;
    }

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("Failed to open log file {:?}", path))?;

    let (writer, guard) = tracing_appender::non_blocking(file);

    tracing_subscriber::fmt()
        .with_max_level(filter)
        .with_writer(writer)
        .with_ansi(false)
        .with_file(true)
        .with_line_number(true)
        .try_init()
        .map_err(|err| anyhow::anyhow!("Failed to install log subscriber: {}", err))?;

    tracing::info!(?level, log_file = ?path, "prodcli logging enabled");

    Ok(Some(guard))
}
