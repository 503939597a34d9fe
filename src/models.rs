//
// models.rs
// dicom-edge
//
// Shared data structures for per-file descriptors and run summaries.
//

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::errors::ProcessError;

/// Identifying tags logged for each file before processing. Missing tags are
/// substituted with the `"N/A"` sentinel.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImageDescriptor {
    pub series_description: String,
    pub study_date: String,
}

/// Result of processing a single file successfully.
#[derive(Debug, Clone)]
pub struct ProcessedFile {
    pub output_path: PathBuf,
    pub rows: u16,
    pub columns: u16,
    pub frames: usize,
}

/// Tagged outcome for one file: either the processed output or the exact
/// failure kind, so callers and tests can assert on the stage that failed.
#[derive(Debug)]
pub struct FileOutcome {
    pub filename: String,
    pub result: Result<ProcessedFile, ProcessError>,
}

/// Outcomes for every file attempted in one run, in listing order.
#[derive(Debug, Default)]
pub struct RunSummary {
    pub outcomes: Vec<FileOutcome>,
}

impl RunSummary {
    pub fn succeeded(&self) -> usize {
        self.outcomes.iter().filter(|o| o.result.is_ok()).count()
    }

    pub fn failed(&self) -> usize {
        self.outcomes.len() - self.succeeded()
    }
}
