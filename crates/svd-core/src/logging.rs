//! Logging init: daily-rotated file under the XDG state dir, or stderr.
//!
//! The file writer is non-blocking, so log calls made on tokio workers never
//! wait on disk. Hold the returned [`LogGuard`] until exit or buffered lines
//! are lost.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

/// Used when `RUST_LOG` is unset or unparsable.
pub const DEFAULT_FILTER: &str = "info,svd=debug,svd_core=debug";

const LOG_FILE_PREFIX: &str = "svd";
const LOG_FILE_SUFFIX: &str = "log";
const MAX_LOG_FILES: usize = 7;

/// Flushes the background log writer when dropped.
#[must_use = "dropping the guard stops file logging"]
pub struct LogGuard {
    _worker: WorkerGuard,
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// `~/.local/state/svd`, created if missing.
pub fn log_dir() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("svd")?;
    let dir = xdg_dirs.get_state_home();
    std::fs::create_dir_all(&dir)
        .with_context(|| format!("creating log dir {}", dir.display()))?;
    Ok(dir)
}

/// Appender writing `svd.YYYY-MM-DD.log` into `dir`, keeping the last week.
fn file_appender(dir: &Path) -> Result<RollingFileAppender> {
    RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix(LOG_FILE_PREFIX)
        .filename_suffix(LOG_FILE_SUFFIX)
        .max_log_files(MAX_LOG_FILES)
        .build(dir)
        .with_context(|| format!("opening log file in {}", dir.display()))
}

/// Initialize structured logging to `~/.local/state/svd/svd.<date>.log`.
///
/// Returns Err when the state dir is unusable or a subscriber is already set,
/// so the caller can fall back to [`init_logging_stderr`].
pub fn init_logging() -> Result<LogGuard> {
    let dir = log_dir()?;
    let (writer, worker) = tracing_appender::non_blocking(file_appender(&dir)?);

    tracing_subscriber::registry()
        .with(env_filter())
        .with(fmt::layer().with_writer(writer).with_ansi(false))
        .try_init()
        .context("tracing subscriber already set")?;

    tracing::info!("svd logging initialized in {}", dir.display());
    Ok(LogGuard { _worker: worker })
}

/// Log to stderr only. Never fails; a second call is a no-op.
pub fn init_logging_stderr() {
    let _ = tracing_subscriber::registry()
        .with(env_filter())
        .with(fmt::layer().with_writer(std::io::stderr).with_ansi(false))
        .try_init();
}
