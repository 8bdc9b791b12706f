//! Process startup: home directory, logging, storage, and the TUI loop.

use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use thiserror::Error;
use tracing::{error, info};
use tracing_subscriber::util::{SubscriberInitExt, TryInitError};

use crate::app::App;
use crate::cli::Cli;
use crate::infra::db::{DB_DIR, DB_FILE, Database, StoreError};
use crate::infra::fs::{FsError, NativeFileSystem};
use crate::{logging, runtime};

/// Failure that stops arbor before or while running the TUI.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("failed to open log file: {0}")]
    LogFile(#[source] io::Error),
    #[error("failed to install log subscriber: {0}")]
    Logging(#[from] TryInitError),
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error("cannot open start directory: {0}")]
    StartDirectory(#[from] FsError),
    #[error("terminal error: {0}")]
    Terminal(#[from] io::Error),
}

/// Runs arbor with the parsed command-line options until the user quits.
///
/// # Errors
/// Returns an error if logging, the database, the start directory, or the
/// terminal cannot be set up.
pub async fn run(cli: Cli) -> Result<(), AppError> {
    let home = cli.home_dir();
    let log_file = logging::open_log_file(&home).map_err(AppError::LogFile)?;
    logging::build_subscriber(log_file, cli.log_level).try_init()?;
    info!(home = %home.display(), "starting arbor");

    let result = run_app(&home, cli.path).await;
    if let Err(error) = &result {
        error!(%error, "arbor stopped with an error");
    }

    result
}

async fn run_app(home: &Path, start_path: Option<PathBuf>) -> Result<(), AppError> {
    let database = Database::open(&home.join(DB_DIR).join(DB_FILE)).await?;
    let launch_dir = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("/"));
    let mut app = App::new(
        Arc::new(NativeFileSystem::new()),
        Arc::new(database),
        launch_dir,
    )
    .await;

    if let Some(start_path) = start_path {
        app.open_path(&start_path).await?;
    }

    runtime::run(&mut app).await?;
    info!("arbor exited");

    Ok(())
}
