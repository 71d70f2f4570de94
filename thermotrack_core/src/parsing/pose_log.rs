// thermotrack_core/src/parsing/pose_log.rs

use super::builders::{AssemblyError, HeaderBuilder, OrientationBuilder, PointBuilder};
use super::line::{HEADER_MARKER, ORIENTATION_MARKER, POSITION_MARKER};
use super::{read_log_lines, ParseOutcome, ParseSummary, ParserOptions, QuaternionCheck};
use crate::error::Result;
use crate::messages::{Pose, PoseWithHeader};
use log::debug;
use std::path::Path;

/// The section of a pose block whose keys are currently being accepted.
///
/// Only one section is open at a time. Closing a section (by opening another,
/// or by a coercion failure) does not clear what it already collected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PoseSection {
    #[default]
    Idle,
    Header,
    Position,
    Orientation,
}

/// Parser for pose logs (`header:` / `position:` / `orientation:` blocks).
#[derive(Debug, Clone, Default)]
pub struct PoseLogParser {
    options: ParserOptions,
}

impl PoseLogParser {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: ParserOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &ParserOptions {
        &self.options
    }

    /// Parses `lines` in a single pass. Never fails: malformed input only
    /// lowers [`ParseSummary::valid`].
    pub fn parse<I, S>(&self, lines: I) -> ParseOutcome<PoseWithHeader>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut state = PoseLogState::new(self.options);
        for (index, line) in lines.into_iter().enumerate() {
            state.process_line(index + 1, line.as_ref());
        }
        state.finish()
    }

    /// Reads and parses the log at `path`.
    pub fn parse_file(&self, path: impl AsRef<Path>) -> Result<ParseOutcome<PoseWithHeader>> {
        let lines = read_log_lines(path)?;
        Ok(self.parse(&lines))
    }
}

/// Accumulator state for one parse call.
#[derive(Debug, Default)]
pub(crate) struct PoseLogState {
    options: ParserOptions,
    section: PoseSection,
    header: HeaderBuilder,
    position: PointBuilder,
    orientation: OrientationBuilder,
    records: Vec<PoseWithHeader>,
    summary: ParseSummary,
}

impl PoseLogState {
    pub(crate) fn new(options: ParserOptions) -> Self {
        Self {
            options,
            ..Default::default()
        }
    }

    #[cfg(test)]
    pub(crate) fn section(&self) -> PoseSection {
        self.section
    }

    pub(crate) fn process_line(&mut self, line_no: usize, raw: &str) {
        let line = raw.trim();
        if line.is_empty() {
            return;
        }

        // --- Section markers ---
        if line.starts_with(HEADER_MARKER) {
            self.summary.attempted += 1;
            self.section = PoseSection::Header;
            self.header = HeaderBuilder::default();
        } else if line.starts_with(POSITION_MARKER) {
            self.section = PoseSection::Position;
            self.position = PointBuilder::default();
        } else if line.starts_with(ORIENTATION_MARKER) {
            self.section = PoseSection::Orientation;
            self.orientation = OrientationBuilder::default();
        }

        // --- Fields of the open section ---
        let applied = match self.section {
            PoseSection::Idle => Ok(()),
            PoseSection::Header => self.header.apply(line),
            PoseSection::Position => self.position.apply(line),
            PoseSection::Orientation => self.orientation.apply(line),
        };
        if let Err(e) = applied {
            debug!("pose log line {}: {}; closing {:?} section", line_no, e, self.section);
            self.section = PoseSection::Idle;
            return;
        }

        self.try_finalize(line_no);
    }

    fn try_finalize(&mut self, line_no: usize) {
        if !(self.header.is_complete() && self.position.is_complete() && self.orientation.is_complete()) {
            return;
        }

        match self.assemble() {
            Ok(record) => {
                self.records.push(record);
                self.summary.valid += 1;
            }
            Err(e) => {
                debug!("pose log line {}: discarding record: {}", line_no, e);
            }
        }
        self.reset();
    }

    fn assemble(&mut self) -> std::result::Result<PoseWithHeader, AssemblyError> {
        let header = std::mem::take(&mut self.header).build()?;
        let position = std::mem::take(&mut self.position).build()?;
        let orientation = std::mem::take(&mut self.orientation).build()?;

        if let QuaternionCheck::Reject { tolerance } = self.options.quaternion_check {
            if !orientation.is_unit(tolerance) {
                return Err(AssemblyError::NonUnitQuaternion {
                    norm: orientation.norm(),
                    tolerance,
                });
            }
        }

        Ok(PoseWithHeader::new(header, Pose::new(position, orientation)))
    }

    /// Drops every accumulator and returns to `Idle`.
    fn reset(&mut self) {
        self.section = PoseSection::Idle;
        self.header = HeaderBuilder::default();
        self.position = PointBuilder::default();
        self.orientation = OrientationBuilder::default();
    }

    pub(crate) fn finish(self) -> ParseOutcome<PoseWithHeader> {
        if self.header != HeaderBuilder::default() || self.section != PoseSection::Idle {
            debug!("pose log ended with an incomplete record; dropped");
        }
        ParseOutcome {
            records: self.records,
            summary: self.summary,
        }
    }
}
