// thermotrack_core/src/alignment/matching.rs

//! Nearest-in-time association between poses and temperature readings.

use super::TimeBase;
use crate::messages::TemperatureWithHeader;
use crate::types::Tempo;

/// Absolute time difference between two stamps, in nanoseconds.
pub fn time_gap(a: &Tempo, b: &Tempo, base: TimeBase) -> f64 {
    match base {
        TimeBase::Float => (a.as_nanos_f64() - b.as_nanos_f64()).abs(),
        TimeBase::Integer => (a.as_nanos_i128() - b.as_nanos_i128()).unsigned_abs() as f64,
    }
}

/// Index and gap of the reading closest in time to `stamp`.
///
/// Ties go to the earliest reading. `None` only when `readings` is empty; the
/// caller applies the tolerance.
pub fn nearest_reading(
    stamp: &Tempo,
    readings: &[TemperatureWithHeader],
    base: TimeBase,
) -> Option<(usize, f64)> {
    let mut best: Option<(usize, f64)> = None;
    for (i, reading) in readings.iter().enumerate() {
        let gap = time_gap(stamp, &reading.header.stamp, base);
        match best {
            Some((_, best_gap)) if gap >= best_gap => {}
            _ => best = Some((i, gap)),
        }
    }
    best
}
