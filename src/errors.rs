//
// errors.rs
// dicom-edge
//
// Closed error taxonomy for the run and for individual files, so outcomes stay assertable.
//

use std::error::Error as StdError;
use std::path::PathBuf;

use thiserror::Error;

type Source = Box<dyn StdError + Send + Sync + 'static>;

/// Errors raised before the batch loop starts. These abort the whole run.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed config file {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Per-file failures. Each variant maps to one pipeline stage; the batch
/// loop logs these and moves on to the next file.
#[derive(Debug, Error)]
pub enum ProcessError {
    #[error("not a readable DICOM file")]
    Decode(#[source] Source),
    #[error("no decodable pixel data")]
    PixelData(#[source] Source),
    #[error("unsupported edge volume rank: {ndim} axes")]
    UnsupportedDimensionality { ndim: usize },
    #[error("failed to write output dataset")]
    Encode(#[source] Source),
}
