//
// main.rs
// dicom-edge
//
// Entry point that hands off execution to the CLI layer.
//

use dicom_edge::cli;

fn main() -> anyhow::Result<()> {
    // Delegate argument handling and the batch run to the CLI module.
    cli::run()
}
