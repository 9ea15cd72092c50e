//! File-based logging setup.
//!
//! The TUI owns stdout, so logs go to a daily-rotated file under the
//! cpupedia logs directory instead. Logging is off unless `CPUPEDIA_LOG`
//! (or `RUST_LOG`) sets a filter, so plain CLI runs touch no files.

use anyhow::{Context, Result};
use cpupedia_core::config::paths;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

/// Initializes logging if a filter is configured.
///
/// The returned guard flushes buffered log lines on drop; keep it alive for
/// the life of the process.
pub fn init() -> Result<Option<WorkerGuard>> {
    let filter = std::env::var("CPUPEDIA_LOG")
        .or_else(|_| std::env::var("RUST_LOG"))
        .ok();
    let Some(filter) = filter else {
        return Ok(None);
    };

    let logs_dir = paths::logs_dir();
    std::fs::create_dir_all(&logs_dir)
        .with_context(|| format!("Failed to create log directory {}", logs_dir.display()))?;

    let appender = tracing_appender::rolling::daily(&logs_dir, "cpupedia.log");
    let (writer, guard) = tracing_appender::non_blocking(appender);

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_writer(writer)
        .with_ansi(false)
        .init();

    Ok(Some(guard))
}
