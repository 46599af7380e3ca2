//! Logging setup.
//!
//! The game owns the terminal, so log lines go to a file only. `RUST_LOG`
//! overrides the configured level.

use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::config::LoggingConfig;
use crate::error::{GameError, Result};

/// Install the global subscriber. Keep the returned guard alive for the
/// whole program or buffered lines are lost on exit.
pub fn init_logger(config: &LoggingConfig) -> Result<Option<WorkerGuard>> {
    if !config.enabled {
        return Ok(None);
    }

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.level.as_filter()));

    let directory = config
        .file
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or(Path::new("."));
    let filename = config
        .file
        .file_name()
        .ok_or_else(|| GameError::Logger(format!("{} is not a file path", config.file.display())))?;

    let appender = RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(filename.to_string_lossy().into_owned())
        .build(directory)
        .map_err(|e| GameError::Logger(format!("{}: {e}", config.file.display())))?;
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let file_layer = fmt::layer()
        .with_target(true)
        .with_thread_ids(false)
        .with_ansi(false)
        .with_writer(writer);

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .try_init()
        .map_err(|e| GameError::Logger(e.to_string()))?;

    Ok(Some(guard))
}
