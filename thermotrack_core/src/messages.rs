// thermotrack_core/src/messages.rs

use crate::orientation::Orientation;
use crate::types::{Point3D, Tempo};
use serde::{Deserialize, Serialize};
use std::fmt;

// =========================================================================
// == Record Header ==
// =========================================================================

/// Sequence number, timestamp and reference frame attached to every record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Header {
    pub seq: i64,
    pub stamp: Tempo,
    pub frame_id: String,
}

impl Header {
    pub fn new(seq: i64, stamp: Tempo, frame_id: impl Into<String>) -> Self {
        Self {
            seq,
            stamp,
            frame_id: frame_id.into(),
        }
    }
}

impl fmt::Display for Header {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Header(seq={}, stamp={}, frame_id={})",
            self.seq, self.stamp, self.frame_id
        )
    }
}

// =========================================================================
// == Pose Records ==
// =========================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pose {
    pub position: Point3D,
    pub orientation: Orientation,
}

impl Pose {
    pub fn new(position: Point3D, orientation: Orientation) -> Self {
        Self {
            position,
            orientation,
        }
    }
}

impl fmt::Display for Pose {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Pose(position=({}, {}, {}), orientation={})",
            self.position.x, self.position.y, self.position.z, self.orientation
        )
    }
}

/// One fully assembled entry of a pose log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PoseWithHeader {
    pub header: Header,
    pub pose: Pose,
}

impl PoseWithHeader {
    pub fn new(header: Header, pose: Pose) -> Self {
        Self { header, pose }
    }
}

impl fmt::Display for PoseWithHeader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}", self.header, self.pose)
    }
}

// =========================================================================
// == Temperature Records ==
// =========================================================================

/// One fully assembled entry of a temperature log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TemperatureWithHeader {
    pub header: Header,
    /// Degrees Celsius.
    pub temperature: f64,
    /// Variance reported by the sensor for this reading.
    pub variance: f64,
}

impl TemperatureWithHeader {
    pub fn new(header: Header, temperature: f64, variance: f64) -> Self {
        Self {
            header,
            temperature,
            variance,
        }
    }
}

impl fmt::Display for TemperatureWithHeader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Header: {}, Temperature: {}, Variance: {}",
            self.header, self.temperature, self.variance
        )
    }
}
