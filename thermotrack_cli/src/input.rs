// thermotrack_cli/src/input.rs

use crate::error::CliError;
use std::fs::File;
use std::io::ErrorKind;
use std::path::Path;

/// Checks that `path` names a readable file before any parsing starts.
pub fn validate_log_path(path: &Path, flag: &'static str) -> Result<(), CliError> {
    if !path.is_file() {
        return Err(CliError::MissingLog {
            flag,
            path: path.to_path_buf(),
        });
    }
    match File::open(path) {
        Ok(_) => Ok(()),
        Err(e) if e.kind() == ErrorKind::NotFound => Err(CliError::MissingLog {
            flag,
            path: path.to_path_buf(),
        }),
        Err(source) => Err(CliError::UnreadableLog {
            flag,
            path: path.to_path_buf(),
            source,
        }),
    }
}

/// Display name of a log: its file name without extension.
pub fn log_name(path: &Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
