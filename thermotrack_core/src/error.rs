// thermotrack_core/src/error.rs

use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced to callers of the library.
///
/// Malformed log content never shows up here: the parsers recover from it
/// locally and only report it through their [`crate::parsing::ParseSummary`].
#[derive(Debug, Error)]
pub enum ThermotrackError {
    /// The log source could not be opened or read at all.
    #[error("log file {path:?} could not be read: {source}")]
    StreamUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Orientation glyphs are drawn every `stride` poses, so zero is meaningless.
    #[error("sampling stride must be at least 1")]
    InvalidStride,

    /// A configuration value outside its accepted range.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// A spline could not be built from the given knots.
    #[error("invalid spline: {0}")]
    Spline(String),
}

impl ThermotrackError {
    pub fn stream_unavailable(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::StreamUnavailable {
            path: path.into(),
            source,
        }
    }

    pub fn spline(reason: impl Into<String>) -> Self {
        Self::Spline(reason.into())
    }
}

/// Result type for thermotrack operations.
pub type Result<T> = std::result::Result<T, ThermotrackError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_stream_unavailable_mentions_path() {
        let err = ThermotrackError::stream_unavailable(
            "logs/missing.txt",
            io::Error::new(io::ErrorKind::NotFound, "no such file"),
        );
        let text = err.to_string();
        assert!(text.contains("missing.txt"));
        assert!(text.contains("no such file"));
    }

    #[test]
    fn test_spline_error_message() {
        let err = ThermotrackError::spline("need at least 2 knots");
        assert_eq!(err.to_string(), "invalid spline: need at least 2 knots");
    }
}
