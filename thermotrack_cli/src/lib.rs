// thermotrack_cli/src/lib.rs

// This module contains the command-line front end around `thermotrack_core`.
pub mod app;
pub mod cli;
pub mod config;
pub mod error;
pub mod input;
pub mod report;

pub use app::{run, run_with_output};
pub use cli::Cli;
pub use error::CliError;
