//! File logging for the interactive trainer.
//!
//! The trainer owns the terminal while it runs, so log records go to a JSON
//! lines file instead of stderr.

use std::path::Path;

use anyhow::anyhow;
use anyhow::Result;
use tracing::Level;
use tracing_appender::non_blocking::WorkerGuard;

pub fn parse_level(level: &str) -> Level {
    return level.parse::<Level>().unwrap_or(Level::INFO);
}

/// Installs the global subscriber. Records are flushed until the returned
/// guard is dropped.
pub fn init(log_file: &str, level: &str) -> Result<WorkerGuard> {
    let path = Path::new(log_file);
    let file_name = path
        .file_name()
        .ok_or_else(|| anyhow!("log file '{log_file}' has no file name"))?;
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    std::fs::create_dir_all(dir)?;

    let appender = tracing_appender::rolling::never(dir, file_name);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    tracing_subscriber::fmt()
        .json()
        .with_max_level(parse_level(level))
        .with_writer(writer)
        .try_init()
        .map_err(|err| anyhow!("failed to initialise logging: {err}"))?;

    return Ok(guard);
}
