// thermotrack_cli/src/error.rs

use std::io;
use std::path::PathBuf;
use thermotrack_core::prelude::ThermotrackError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("the path provided for {flag} is not valid or the file does not exist: {}", path.display())]
    MissingLog { flag: &'static str, path: PathBuf },

    #[error("the file for {flag} could not be read: {}", path.display())]
    UnreadableLog {
        flag: &'static str,
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("configuration file not found: {}", .0.display())]
    MissingConfig(PathBuf),

    #[error("invalid configuration: {0}")]
    Config(#[source] Box<figment::Error>),

    #[error("could not serialize configuration: {0}")]
    ConfigOutput(#[from] toml::ser::Error),

    #[error("failed to write report: {0}")]
    Output(#[from] io::Error),

    #[error(transparent)]
    Core(#[from] ThermotrackError),
}
