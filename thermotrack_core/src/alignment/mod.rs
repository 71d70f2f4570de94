// thermotrack_core/src/alignment/mod.rs

//! Pose / temperature fusion.
//!
//! Every pose is paired with the temperature reading nearest in time (if it is
//! within tolerance). Consecutive matched poses are then joined by straight
//! segments along which temperature follows a cubic spline parameterised by
//! travelled distance.

pub mod matching;
pub mod spline;

use crate::error::{Result, ThermotrackError};
use crate::messages::{PoseWithHeader, TemperatureWithHeader};
use crate::types::Point3D;
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use spline::{linspace, CubicSpline};

/// Default maximum pose/reading time gap, in nanoseconds.
pub const DEFAULT_TOLERANCE_NS: f64 = 5000.0;
/// Default number of samples drawn on each segment between matched poses.
pub const DEFAULT_SAMPLES_PER_SEGMENT: usize = 10;
/// Upper bound accepted by [`AlignmentParams::validate`].
pub const MAX_SAMPLES_PER_SEGMENT: usize = 100_000;
/// Cap on the up-front reservation for interpolated samples.
const MAX_PREALLOCATED_SAMPLES: usize = 1 << 16;

/// How `secs`/`nsecs` are combined before comparing stamps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimeBase {
    /// `secs * 1e9 + nsecs` as `f64`. Loses single nanoseconds for large epochs.
    #[default]
    Float,
    /// Exact integer nanoseconds.
    Integer,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AlignmentParams {
    /// Poses without a reading at most this far away (ns) are left unmatched.
    #[serde(default = "default_tolerance_ns")]
    pub tolerance_ns: f64,
    /// Samples per segment, both ends included.
    #[serde(default = "default_samples_per_segment")]
    pub samples_per_segment: usize,
    #[serde(default)]
    pub time_base: TimeBase,
}

fn default_tolerance_ns() -> f64 {
    DEFAULT_TOLERANCE_NS
}

fn default_samples_per_segment() -> usize {
    DEFAULT_SAMPLES_PER_SEGMENT
}

impl Default for AlignmentParams {
    fn default() -> Self {
        Self {
            tolerance_ns: DEFAULT_TOLERANCE_NS,
            samples_per_segment: DEFAULT_SAMPLES_PER_SEGMENT,
            time_base: TimeBase::Float,
        }
    }
}

impl AlignmentParams {
    /// Rejects a negative or NaN tolerance and out-of-range sample counts.
    pub fn validate(&self) -> Result<()> {
        if self.tolerance_ns.is_nan() || self.tolerance_ns < 0.0 {
            return Err(ThermotrackError::InvalidParameter(format!(
                "tolerance_ns must be non-negative, got {}",
                self.tolerance_ns
            )));
        }
        if self.samples_per_segment > MAX_SAMPLES_PER_SEGMENT {
            return Err(ThermotrackError::InvalidParameter(format!(
                "samples_per_segment must be at most {}, got {}",
                MAX_SAMPLES_PER_SEGMENT, self.samples_per_segment
            )));
        }
        Ok(())
    }
}

/// A position with the temperature attributed to it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ThermalPoint {
    pub position: Point3D,
    pub temperature: f64,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Alignment {
    /// One entry per pose that found a reading within tolerance, in pose order.
    pub matched: Vec<ThermalPoint>,
    /// Densified samples between consecutive matched points.
    pub interpolated: Vec<ThermalPoint>,
}

/// Matches poses to readings, then densifies the matched sequence.
pub fn align_and_interpolate(
    poses: &[PoseWithHeader],
    readings: &[TemperatureWithHeader],
    params: &AlignmentParams,
) -> Alignment {
    let matched = match_poses(poses, readings, params);
    let interpolated = interpolate_matched(&matched, params.samples_per_segment);
    debug!(
        "aligned {} of {} poses against {} readings; {} interpolated samples",
        matched.len(),
        poses.len(),
        readings.len(),
        interpolated.len()
    );
    Alignment {
        matched,
        interpolated,
    }
}

/// Nearest-in-time matching with tolerance; unmatched poses are dropped.
pub fn match_poses(
    poses: &[PoseWithHeader],
    readings: &[TemperatureWithHeader],
    params: &AlignmentParams,
) -> Vec<ThermalPoint> {
    poses
        .iter()
        .filter_map(|pose| {
            let (idx, gap) = matching::nearest_reading(&pose.header.stamp, readings, params.time_base)?;
            (gap <= params.tolerance_ns).then(|| ThermalPoint {
                position: pose.pose.position,
                temperature: readings[idx].temperature,
            })
        })
        .collect()
}

/// Samples every consecutive pair of `matched`. Fewer than two points give nothing.
pub fn interpolate_matched(matched: &[ThermalPoint], samples_per_segment: usize) -> Vec<ThermalPoint> {
    let mut out = Vec::with_capacity(preallocation(matched.len(), samples_per_segment));
    for pair in matched.windows(2) {
        interpolate_segment(&pair[0], &pair[1], samples_per_segment, &mut out);
    }
    out
}

fn preallocation(matched: usize, samples_per_segment: usize) -> usize {
    matched
        .saturating_sub(1)
        .saturating_mul(samples_per_segment)
        .min(MAX_PREALLOCATED_SAMPLES)
}

fn interpolate_segment(
    start: &ThermalPoint,
    end: &ThermalPoint,
    samples: usize,
    out: &mut Vec<ThermalPoint>,
) {
    let delta = end.position - start.position;
    let distance = delta.norm();

    // Coincident points: hold the first temperature for the whole segment.
    if distance == 0.0 {
        out.extend(std::iter::repeat(*start).take(samples));
        return;
    }

    let spline = match CubicSpline::new(&[0.0, distance], &[start.temperature, end.temperature]) {
        Ok(s) => s,
        Err(e) => {
            warn!("skipping segment {:?} -> {:?}: {}", start.position, end.position, e);
            return;
        }
    };

    for dist in linspace(0.0, distance, samples) {
        out.push(ThermalPoint {
            position: start.position + delta * (dist / distance),
            temperature: spline.evaluate(dist),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::messages::{Header, Pose};
    use crate::orientation::Orientation;
    use crate::types::Tempo;
    use approx::assert_abs_diff_eq;

    fn pose(secs: i64, nsecs: i64, x: f64, y: f64, z: f64) -> PoseWithHeader {
        PoseWithHeader::new(
            Header::new(0, Tempo::new(secs, nsecs), "map"),
            Pose::new(Point3D::new(x, y, z), Orientation::identity()),
        )
    }

    fn reading(secs: i64, nsecs: i64, temperature: f64) -> TemperatureWithHeader {
        TemperatureWithHeader::new(Header::new(0, Tempo::new(secs, nsecs), "thermo"), temperature, 0.1)
    }

    fn point(x: f64, temperature: f64) -> ThermalPoint {
        ThermalPoint {
            position: Point3D::new(x, 0.0, 0.0),
            temperature,
        }
    }

    #[test]
    fn test_match_within_tolerance_selects_closer_reading() {
        // Pose at T; readings at T-10000 and T+4000.
        let poses = [pose(100, 20_000, 0.0, 0.0, 0.0)];
        let readings = [reading(100, 10_000, 15.0), reading(100, 24_000, 17.0)];
        let matched = match_poses(&poses, &readings, &AlignmentParams::default());
        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].temperature, 17.0);
    }

    #[test]
    fn test_reading_outside_tolerance_is_not_matched() {
        let poses = [pose(100, 20_000, 0.0, 0.0, 0.0)];
        let readings = [reading(100, 10_000, 15.0)];
        assert!(match_poses(&poses, &readings, &AlignmentParams::default()).is_empty());
    }

    #[test]
    fn test_gap_equal_to_tolerance_matches() {
        let poses = [pose(1, 5000, 0.0, 0.0, 0.0)];
        let readings = [reading(1, 0, 9.0)];
        assert_eq!(match_poses(&poses, &readings, &AlignmentParams::default()).len(), 1);
    }

    #[test]
    fn test_interpolation_endpoints_and_monotonicity() {
        let samples = interpolate_matched(&[point(0.0, 10.0), point(2.0, 20.0)], 10);
        assert_eq!(samples.len(), 10);
        assert_abs_diff_eq!(samples[0].temperature, 10.0, epsilon = 1e-9);
        assert_abs_diff_eq!(samples[9].temperature, 20.0, epsilon = 1e-9);
        assert_abs_diff_eq!(samples[9].position.x, 2.0, epsilon = 1e-12);
        for w in samples.windows(2) {
            assert!(w[1].temperature >= w[0].temperature);
            assert!(w[1].position.x > w[0].position.x);
        }
    }

    #[test]
    fn test_zero_distance_segment_is_constant() {
        let samples = interpolate_matched(&[point(1.0, 10.0), point(1.0, 30.0)], 10);
        assert_eq!(samples.len(), 10);
        assert!(samples.iter().all(|s| s.temperature == 10.0 && s.position.x == 1.0));
    }

    #[test]
    fn test_fewer_than_two_matches_yield_no_interpolation() {
        assert!(interpolate_matched(&[], 10).is_empty());
        assert!(interpolate_matched(&[point(0.0, 1.0)], 10).is_empty());
    }

    #[test]
    fn test_preallocation_saturates() {
        assert_eq!(preallocation(0, 10), 0);
        assert_eq!(preallocation(3, 10), 20);
        assert_eq!(preallocation(3, usize::MAX), MAX_PREALLOCATED_SAMPLES);
        assert!(interpolate_matched(&[point(0.0, 1.0)], usize::MAX).is_empty());
    }

    #[test]
    fn test_params_validation() {
        assert!(AlignmentParams::default().validate().is_ok());
        let too_many = AlignmentParams {
            samples_per_segment: usize::MAX,
            ..Default::default()
        };
        assert!(matches!(too_many.validate(), Err(ThermotrackError::InvalidParameter(_))));
        let negative = AlignmentParams {
            tolerance_ns: -1.0,
            ..Default::default()
        };
        assert!(negative.validate().is_err());
        let nan = AlignmentParams {
            tolerance_ns: f64::NAN,
            ..Default::default()
        };
        assert!(nan.validate().is_err());
    }

    #[test]
    fn test_segments_follow_matched_order() {
        // The middle pose has no reading nearby, so the segment jumps from
        // the first pose straight to the third.
        let poses = [
            pose(0, 0, 0.0, 0.0, 0.0),
            pose(5, 0, 50.0, 0.0, 0.0),
            pose(10, 0, 3.0, 4.0, 0.0),
        ];
        let readings = [reading(0, 1000, 10.0), reading(10, 0, 20.0)];
        let params = AlignmentParams {
            samples_per_segment: 3,
            ..Default::default()
        };
        let result = align_and_interpolate(&poses, &readings, &params);
        assert_eq!(result.matched.len(), 2);
        assert_eq!(result.interpolated.len(), 3);
        let mid = result.interpolated[1];
        assert_abs_diff_eq!(mid.position.x, 1.5, epsilon = 1e-12);
        assert_abs_diff_eq!(mid.position.y, 2.0, epsilon = 1e-12);
        assert_abs_diff_eq!(mid.temperature, 15.0, epsilon = 1e-9);
    }

    #[test]
    fn test_no_readings_means_no_matches() {
        let poses = [pose(0, 0, 0.0, 0.0, 0.0), pose(1, 0, 1.0, 0.0, 0.0)];
        let result = align_and_interpolate(&poses, &[], &AlignmentParams::default());
        assert_eq!(result, Alignment::default());
    }
}
