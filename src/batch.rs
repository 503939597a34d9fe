//
// batch.rs
// dicom-edge
//
// Enumerates the input directory and runs the per-file pipeline sequentially,
// isolating failures so a bad file never stops the run.
//

use std::path::{Path, PathBuf};

use anyhow::Result;
use tracing::{debug, error, info, warn};
use walkdir::WalkDir;

use crate::config::RunConfiguration;
use crate::models::{FileOutcome, RunSummary};
use crate::pipeline;

/// List the files directly inside `dir`, in whatever order the platform
/// returns them. No extension filter: every file is attempted.
fn list_files(dir: &Path) -> Vec<PathBuf> {
    WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .into_iter()
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(e) => {
                warn!("Skipping unreadable directory entry: {}", e);
                None
            }
        })
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| entry.into_path())
        .collect()
}

/// Process every file in `input_dir`, writing results into `output_dir`.
/// Each file is attempted exactly once; failures are logged and recorded in
/// the summary without aborting the batch.
pub fn process_directory(
    input_dir: &Path,
    output_dir: &Path,
    config: &RunConfiguration,
) -> Result<RunSummary> {
    let files = list_files(input_dir);
    debug!(
        "List files: {:?}",
        files
            .iter()
            .filter_map(|p| p.file_name())
            .collect::<Vec<_>>()
    );

    let mut summary = RunSummary::default();
    for path in files {
        let filename = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        debug!("Processing {:?}", path);

        let result = pipeline::process_file(&path, output_dir, config);
        match &result {
            Ok(done) => {
                info!(
                    "Wrote {:?} ({} x {}, {} frame(s))",
                    done.output_path, done.rows, done.columns, done.frames
                );
            }
            Err(e) => {
                error!(
                    "Error processing {:?}: {} ({})",
                    path,
                    e,
                    source_chain(e)
                );
            }
        }
        summary.outcomes.push(FileOutcome { filename, result });
    }

    info!(
        "Run finished: {} succeeded, {} failed",
        summary.succeeded(),
        summary.failed()
    );
    Ok(summary)
}

/// Render the source chain of an error for post-mortem log entries.
fn source_chain(error: &dyn std::error::Error) -> String {
    let mut parts = Vec::new();
    let mut current = error.source();
    while let Some(source) = current {
        parts.push(source.to_string());
        current = source.source();
    }
    if parts.is_empty() {
        "no further context".to_string()
    } else {
        parts.join(": ")
    }
}
