//
// logging.rs
// dicom-edge
//
// Run-scoped log file setup: one timestamped file per run, wired to tracing
// through an explicit dispatch handle instead of a global subscriber.
//

use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::{Context, Result};
use chrono::Local;
use tracing::{dispatcher, Dispatch, Level};

/// Diagnostic sink for one batch run. Holds the dispatch for a
/// tracing-subscriber writing plain text into `logs_folder/<timestamp>.log`.
/// Passing this handle around (rather than installing a global subscriber)
/// lets tests exercise the pipeline without touching the filesystem logger.
pub struct RunLog {
    dispatch: Dispatch,
    path: PathBuf,
}

impl RunLog {
    /// Create the log file for this run, named after the current local time
    /// in `YYYYMMDD_HHMMSS` format. Exactly one file per run; old logs are
    /// never rotated or deleted.
    pub fn create(logs_folder: &Path) -> Result<Self> {
        let filename = format!("{}.log", Local::now().format("%Y%m%d_%H%M%S"));
        let path = logs_folder.join(filename);
        let file = File::create(&path)
            .with_context(|| format!("Failed to create log file {:?}", path))?;

        let subscriber = tracing_subscriber::fmt()
            .with_max_level(Level::DEBUG)
            .with_ansi(false)
            .with_target(false)
            .with_writer(Mutex::new(file))
            .finish();

        Ok(RunLog {
            dispatch: Dispatch::new(subscriber),
            path,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Run a closure with this log installed as the default tracing
    /// dispatcher, so every event emitted inside lands in the run log.
    pub fn scope<T>(&self, f: impl FnOnce() -> T) -> T {
        dispatcher::with_default(&self.dispatch, f)
    }
}
