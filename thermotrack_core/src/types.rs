// thermotrack_core/src/types.rs

use nalgebra::Point3;
use serde::{Deserialize, Serialize};
use std::fmt;

// --- Core Type Aliases ---
/// A position in the log's reference frame, in metres.
pub type Point3D = Point3<f64>;

/// A timestamp as written in the log header: whole seconds plus nanoseconds.
///
/// The pair is stored exactly as parsed. It is only ever collapsed into a single
/// nanosecond count for ordering and nearest-match comparisons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Tempo {
    pub secs: i64,
    pub nsecs: i64,
}

impl Tempo {
    pub fn new(secs: i64, nsecs: i64) -> Self {
        Self { secs, nsecs }
    }

    /// `secs * 1e9 + nsecs` in floating point.
    ///
    /// Large second counts lose precision here; alignment relies on this being
    /// the default representation so tolerance and tie-break outcomes stay
    /// comparable with existing recordings.
    pub fn as_nanos_f64(&self) -> f64 {
        self.secs as f64 * 1e9 + self.nsecs as f64
    }

    /// Exact nanosecond count.
    pub fn as_nanos_i128(&self) -> i128 {
        self.secs as i128 * 1_000_000_000 + self.nsecs as i128
    }
}

impl fmt::Display for Tempo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "sec: {}, nsec: {}", self.secs, self.nsecs)
    }
}
