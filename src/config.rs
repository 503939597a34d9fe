//
// config.rs
// dicom-edge
//
// Loads the per-run threshold configuration from config.json, falling back to defaults.
//

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;

pub const CONFIG_FILE_NAME: &str = "config.json";

/// Thresholds for the Canny detector, loaded once and applied to every file
/// in the run. `threshold1` is the lower bound, `threshold2` the upper.
/// Neither bound is validated here; an inverted pair is the caller's problem.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RunConfiguration {
    pub threshold1: f32,
    pub threshold2: f32,
}

impl Default for RunConfiguration {
    fn default() -> Self {
        RunConfiguration {
            threshold1: 100.0,
            threshold2: 200.0,
        }
    }
}

/// Look for `config.json` inside the given folder. A missing file yields the
/// defaults; a present but unreadable or malformed file is fatal to the run.
pub fn load(config_folder: &Path) -> Result<RunConfiguration, ConfigError> {
    let path = config_folder.join(CONFIG_FILE_NAME);
    if !path.exists() {
        return Ok(RunConfiguration::default());
    }

    let contents = fs::read_to_string(&path).map_err(|source| ConfigError::Io {
        path: path.clone(),
        source,
    })?;
    serde_json::from_str(&contents).map_err(|source| ConfigError::Parse { path, source })
}
