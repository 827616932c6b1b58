//! Tracing setup shared by both binaries
//!
//! Logs go to a timestamped file under `Log/` beside the executable,
//! keeping stdout free for the interactive prompts.

use crate::error::Result;
use chrono::Local;
use std::path::{Path, PathBuf};
use tracing::Level;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Compute `<exe dir>/Log/<tool>_<timestamp>.log`
pub fn default_log_path(tool: &str) -> PathBuf {
    let exe_dir = std::env::current_exe()
        .ok()
        .and_then(|p| p.parent().map(|p| p.to_path_buf()))
        .unwrap_or_else(|| PathBuf::from("."));

    let timestamp = Local::now().format("%Y%m%d_%H%M%S");
    exe_dir.join("Log").join(format!("{tool}_{timestamp}.log"))
}

/// Initialize file-only logging.
///
/// The returned guard flushes the non-blocking writer on drop and must
/// stay alive for the whole run.
pub fn init(log_path: &Path, verbose: bool) -> Result<WorkerGuard> {
    let level = if verbose { Level::DEBUG } else { Level::INFO };

    let env_filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    if let Some(parent) = log_path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let file = std::fs::OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(log_path)?;

    let (non_blocking, guard) = tracing_appender::non_blocking(file);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_ansi(false).with_writer(non_blocking))
        .init();

    Ok(guard)
}
