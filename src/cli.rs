//
// cli.rs
// dicom-edge
//
// Defines the CLI surface with Clap and drives one batch run: config load,
// log file creation, then the per-file loop.
//

use std::path::PathBuf;

use clap::error::ErrorKind;
use clap::Parser;
use tracing::debug;

use crate::{batch, config, logging};

const USAGE: &str =
    "Usage: dicom-edge <input_folder> <output_folder> <logs_folder> <config_folder>";

/// Batch Canny edge detection over a directory of DICOM files.
#[derive(Parser)]
#[command(name = "dicom-edge")]
#[command(about = "Batch Canny edge detection over DICOM files", long_about = None)]
pub struct Cli {
    pub input_folder: PathBuf,
    pub output_folder: PathBuf,
    pub logs_folder: PathBuf,
    pub config_folder: PathBuf,
}

pub fn run() -> anyhow::Result<()> {
    // A wrong argument count prints the usage string and exits 1 before any
    // side effect; in particular, no log file is created.
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            e.exit()
        }
        Err(_) => {
            eprintln!("{}", USAGE);
            std::process::exit(1);
        }
    };

    // A malformed config file is fatal to the whole run; there is nothing
    // sensible to process without known thresholds.
    let config = config::load(&cli.config_folder)?;

    let run_log = logging::RunLog::create(&cli.logs_folder)?;
    run_log.scope(|| {
        debug!("Input folder: {:?}", cli.input_folder);
        debug!("Output folder: {:?}", cli.output_folder);
        debug!("Logs folder: {:?}", cli.logs_folder);
        debug!("Config folder: {:?}", cli.config_folder);
        debug!(
            "Thresholds: lower {}, upper {}",
            config.threshold1, config.threshold2
        );

        batch::process_directory(&cli.input_folder, &cli.output_folder, &config)
    })?;

    // Individual file failures are visible in the log only; the run itself
    // still exits successfully.
    Ok(())
}
