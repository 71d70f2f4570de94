// thermotrack_core/src/trajectory.rs

use crate::error::{Result, ThermotrackError};
use crate::messages::{PoseWithHeader, TemperatureWithHeader};
use crate::types::Point3D;
use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

/// Default length of the drawn orientation axes, in metres.
pub const DEFAULT_AXIS_SCALE: f64 = 0.1;

/// The local X, Y and Z axes of one pose, ready to be drawn at its position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrientationGlyph {
    /// Index of the pose in its trajectory.
    pub index: usize,
    pub origin: Point3D,
    /// Columns of the pose's rotation matrix, each multiplied by the scale.
    pub axes: [Vector3<f64>; 3],
}

/// An ordered list of poses read from one log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "TrajectoryFields")]
pub struct Trajectory {
    pub name: String,
    poses: Vec<PoseWithHeader>,
    /// Draw orientation glyphs on every `stride`-th pose.
    stride: usize,
}

/// Deserialized form of [`Trajectory`], checked by `from_poses` before use.
#[derive(Deserialize)]
struct TrajectoryFields {
    name: String,
    poses: Vec<PoseWithHeader>,
    stride: usize,
}

impl TryFrom<TrajectoryFields> for Trajectory {
    type Error = ThermotrackError;

    fn try_from(fields: TrajectoryFields) -> Result<Self> {
        Self::from_poses(fields.name, fields.poses, fields.stride)
    }
}

impl Trajectory {
    pub fn new(name: impl Into<String>, stride: usize) -> Result<Self> {
        Self::from_poses(name, Vec::new(), stride)
    }

    pub fn from_poses(name: impl Into<String>, poses: Vec<PoseWithHeader>, stride: usize) -> Result<Self> {
        if stride == 0 {
            return Err(ThermotrackError::InvalidStride);
        }
        Ok(Self {
            name: name.into(),
            poses,
            stride,
        })
    }

    pub fn poses(&self) -> &[PoseWithHeader] {
        &self.poses
    }

    pub fn stride(&self) -> usize {
        self.stride
    }

    pub fn len(&self) -> usize {
        self.poses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.poses.is_empty()
    }

    /// Appends in arrival order. Stored poses are never modified afterwards.
    pub fn push(&mut self, pose: PoseWithHeader) {
        self.poses.push(pose);
    }

    pub fn positions(&self) -> Vec<Point3D> {
        self.poses.iter().map(|p| p.pose.position).collect()
    }

    /// Glyphs for poses `0, stride, 2*stride, ...`.
    pub fn orientation_glyphs(&self, scale: f64) -> Vec<OrientationGlyph> {
        self.poses
            .iter()
            .enumerate()
            .step_by(self.stride)
            .map(|(index, p)| {
                let r = p.pose.orientation.rotation_matrix();
                OrientationGlyph {
                    index,
                    origin: p.pose.position,
                    axes: [
                        r.column(0) * scale,
                        r.column(1) * scale,
                        r.column(2) * scale,
                    ],
                }
            })
            .collect()
    }
}

/// An ordered list of temperature readings read from one log.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TemperatureSeries {
    pub name: String,
    pub readings: Vec<TemperatureWithHeader>,
}

impl TemperatureSeries {
    pub fn new(name: impl Into<String>, readings: Vec<TemperatureWithHeader>) -> Self {
        Self {
            name: name.into(),
            readings,
        }
    }

    /// `(min, max)` temperature, `None` when empty.
    pub fn temperature_range(&self) -> Option<(f64, f64)> {
        self.readings.iter().map(|r| r.temperature).fold(None, |acc, t| match acc {
            None => Some((t, t)),
            Some((lo, hi)) => Some((lo.min(t), hi.max(t))),
        })
    }
}
