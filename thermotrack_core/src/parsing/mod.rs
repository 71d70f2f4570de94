// thermotrack_core/src/parsing/mod.rs

//! Recovering parsers for the pose and temperature logs.
//!
//! Both logs are sequences of indentation-insensitive `key: value` lines grouped
//! under section markers. The parsers walk them once, keep one accumulator per
//! section and emit a record the moment every accumulator of the current record
//! is complete. Malformed lines never abort a parse; they only cost the record
//! they belong to, which shows up as a gap between
//! [`ParseSummary::attempted`] and [`ParseSummary::valid`].

pub mod builders;
pub mod line;
pub mod pose_log;
pub mod temperature_log;

use crate::error::{Result, ThermotrackError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

pub use pose_log::{PoseLogParser, PoseSection};
pub use temperature_log::{TemperatureLogParser, TemperatureSection};

/// Record counts for one parsed log.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParseSummary {
    /// Number of `header:` markers seen.
    pub attempted: usize,
    /// Number of records that were fully assembled.
    pub valid: usize,
}

impl ParseSummary {
    pub fn discarded(&self) -> usize {
        self.attempted.saturating_sub(self.valid)
    }
}

impl fmt::Display for ParseSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} valid points of {}", self.valid, self.attempted)
    }
}

/// Records in file order plus the counts that produced them.
#[derive(Debug, Clone, PartialEq)]
pub struct ParseOutcome<T> {
    pub records: Vec<T>,
    pub summary: ParseSummary,
}

impl<T> Default for ParseOutcome<T> {
    fn default() -> Self {
        Self {
            records: Vec::new(),
            summary: ParseSummary::default(),
        }
    }
}

/// What to do with pose records whose quaternion is not unit length.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuaternionCheck {
    /// Accept every quaternion as written.
    #[default]
    Off,
    /// Discard the record when `| |q| - 1 | > tolerance`.
    Reject { tolerance: f64 },
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ParserOptions {
    #[serde(default)]
    pub quaternion_check: QuaternionCheck,
}

/// Reads a whole log into memory, one entry per line.
///
/// Invalid UTF-8 is replaced line by line, so a garbled line only fails the
/// coercion of its own field.
pub fn read_log_lines(path: impl AsRef<Path>) -> Result<Vec<String>> {
    let path = path.as_ref();
    let bytes = std::fs::read(path).map_err(|e| ThermotrackError::stream_unavailable(path, e))?;
    Ok(split_lines(&bytes))
}

fn split_lines(bytes: &[u8]) -> Vec<String> {
    if bytes.is_empty() {
        return Vec::new();
    }
    let body = bytes.strip_suffix(b"\n").unwrap_or(bytes);
    body.split(|&b| b == b'\n')
        .map(|line| {
            let line = line.strip_suffix(b"\r").unwrap_or(line);
            String::from_utf8_lossy(line).into_owned()
        })
        .collect()
}

/// Parses a pose log with default options.
pub fn parse_pose_log<I, S>(lines: I) -> ParseOutcome<crate::messages::PoseWithHeader>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    PoseLogParser::default().parse(lines)
}

/// Parses a temperature log with default options.
pub fn parse_temperature_log<I, S>(lines: I) -> ParseOutcome<crate::messages::TemperatureWithHeader>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    TemperatureLogParser::default().parse(lines)
}
