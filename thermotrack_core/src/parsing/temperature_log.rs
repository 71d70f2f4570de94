// thermotrack_core/src/parsing/temperature_log.rs

use super::builders::{AssemblyError, HeaderBuilder, ReadingBuilder};
use super::line::HEADER_MARKER;
use super::{read_log_lines, ParseOutcome, ParseSummary};
use crate::error::Result;
use crate::messages::TemperatureWithHeader;
use log::debug;
use std::path::Path;

/// Temperature blocks only have one marker: the reading lines
/// (`temperature:`, `variance:`) follow the header fields inside the same
/// open section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TemperatureSection {
    #[default]
    Idle,
    Header,
}

/// Parser for temperature logs (`header:` block followed by the reading).
///
/// Temperature records carry no quaternion, so there is nothing to configure.
#[derive(Debug, Clone, Copy, Default)]
pub struct TemperatureLogParser;

impl TemperatureLogParser {
    pub fn new() -> Self {
        Self
    }

    pub fn parse<I, S>(&self, lines: I) -> ParseOutcome<TemperatureWithHeader>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut state = TemperatureLogState::default();
        for (index, line) in lines.into_iter().enumerate() {
            state.process_line(index + 1, line.as_ref());
        }
        state.finish()
    }

    pub fn parse_file(&self, path: impl AsRef<Path>) -> Result<ParseOutcome<TemperatureWithHeader>> {
        let lines = read_log_lines(path)?;
        Ok(self.parse(&lines))
    }
}

#[derive(Debug, Default)]
pub(crate) struct TemperatureLogState {
    section: TemperatureSection,
    header: HeaderBuilder,
    reading: ReadingBuilder,
    records: Vec<TemperatureWithHeader>,
    summary: ParseSummary,
}

impl TemperatureLogState {
    #[cfg(test)]
    pub(crate) fn section(&self) -> TemperatureSection {
        self.section
    }

    pub(crate) fn process_line(&mut self, line_no: usize, raw: &str) {
        let line = raw.trim();
        if line.is_empty() {
            return;
        }

        if line.starts_with(HEADER_MARKER) {
            self.summary.attempted += 1;
            self.section = TemperatureSection::Header;
            self.header = HeaderBuilder::default();
            self.reading = ReadingBuilder::default();
        }

        if self.section == TemperatureSection::Header {
            // A bad header field closes the section.
            if let Err(e) = self.header.apply(line) {
                debug!("temperature log line {}: {}; closing header section", line_no, e);
                self.section = TemperatureSection::Idle;
                return;
            }
            // A bad reading only loses that value.
            if let Err(e) = self.reading.apply(line) {
                debug!("temperature log line {}: {}; value ignored", line_no, e);
                return;
            }
        }

        self.try_finalize(line_no);
    }

    fn try_finalize(&mut self, line_no: usize) {
        if !(self.header.is_complete() && self.reading.is_complete()) {
            return;
        }

        match self.assemble() {
            Ok(record) => {
                self.records.push(record);
                self.summary.valid += 1;
            }
            Err(e) => debug!("temperature log line {}: discarding record: {}", line_no, e),
        }
        self.section = TemperatureSection::Idle;
        self.header = HeaderBuilder::default();
        self.reading = ReadingBuilder::default();
    }

    fn assemble(&mut self) -> std::result::Result<TemperatureWithHeader, AssemblyError> {
        let header = std::mem::take(&mut self.header).build()?;
        let (temperature, variance) = std::mem::take(&mut self.reading).build()?;
        Ok(TemperatureWithHeader::new(header, temperature, variance))
    }

    pub(crate) fn finish(self) -> ParseOutcome<TemperatureWithHeader> {
        ParseOutcome {
            records: self.records,
            summary: self.summary,
        }
    }
}
