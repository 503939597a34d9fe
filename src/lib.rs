//
// lib.rs
// dicom-edge
//
// Exposes the crate's modules and re-exports the CLI entry point for both binary and library consumers.
//

// Public surface of the library: each module mirrors one stage of the batch run.
pub mod batch;
pub mod cli;
pub mod config;
pub mod dicom_access;
pub mod edges;
pub mod errors;
pub mod logging;
pub mod metadata;
pub mod models;
pub mod pipeline;

pub use cli::{run as run_cli, Cli};
