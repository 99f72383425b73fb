//! Tracing subscriber setup for the command line tool

use anyhow::Context;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::{self, LOG_FILE_NAME, LogConfig};

/// Install the global subscriber.
///
/// `RUST_LOG` takes precedence over `level_override`, which takes precedence
/// over the configured level. Human-readable logs go to stderr so stdout stays
/// reserved for command output. With file logging enabled, JSON lines are
/// appended to the log file in the data directory; keep the returned guard
/// alive until exit so buffered lines are flushed.
pub fn init(log: &LogConfig, level_override: Option<&str>) -> anyhow::Result<Option<WorkerGuard>> {
    let level = level_override.unwrap_or(&log.level);
    let env_filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(level)
            .with_context(|| format!("invalid log level '{}'", level))?,
    };

    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true);

    let (file_layer, guard) = if log.file {
        let dir = config::data_dir();
        std::fs::create_dir_all(&dir)
            .with_context(|| format!("failed to create log directory {}", dir.display()))?;

        let appender = tracing_appender::rolling::never(&dir, LOG_FILE_NAME);
        let (writer, guard) = tracing_appender::non_blocking(appender);
        let layer = fmt::layer()
            .json()
            .with_writer(writer)
            .with_target(true)
            .with_ansi(false);
        (Some(layer), Some(guard))
    } else {
        (None, None)
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(stderr_layer)
        .with(file_layer)
        .try_init()
        .context("failed to install tracing subscriber")?;

    Ok(guard)
}
