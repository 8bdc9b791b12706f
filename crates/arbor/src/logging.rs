//! File-backed `tracing` subscriber.
//!
//! The TUI owns the terminal, so log records only ever go to
//! `<home>/arbor.log`.

use std::fs::{File, OpenOptions};
use std::path::Path;
use std::sync::Arc;

use tracing::Level;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, fmt};

/// Log file name under the arbor home directory.
pub const LOG_FILE: &str = "arbor.log";

/// Environment variable that overrides the filter, in `EnvFilter` syntax.
pub const LOG_ENV_VAR: &str = "ARBOR_LOG";

/// Opens the log file in append mode, creating it if needed.
///
/// # Errors
/// Returns an error if the file cannot be opened.
pub fn open_log_file(home: &Path) -> std::io::Result<File> {
    std::fs::create_dir_all(home)?;

    OpenOptions::new()
        .create(true)
        .append(true)
        .open(home.join(LOG_FILE))
}

/// Builds a subscriber writing plain-text records at `level` or above to
/// `log_file`.
pub fn build_subscriber(log_file: File, level: Level) -> impl tracing::Subscriber + Send + Sync {
    let env_filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::from_level(level).into())
        .with_env_var(LOG_ENV_VAR)
        .from_env_lossy();
    let fmt_layer = fmt::layer()
        .with_ansi(false)
        .with_writer(Arc::new(log_file));

    tracing_subscriber::registry().with(fmt_layer).with(env_filter)
}
