// thermotrack_core/src/parsing/builders.rs

//! Per-section accumulators.
//!
//! Every field is an `Option`: `None` means "not seen since the section was
//! (re)opened". A builder only knows about its own keys; lines carrying other
//! keys are ignored by [`apply`](HeaderBuilder::apply).

use super::line::{coerce_float, coerce_int, field_value, FieldError};
use crate::messages::Header;
use crate::orientation::Orientation;
use crate::types::{Point3D, Tempo};
use thiserror::Error;

/// A record that passed the completeness check but could not be assembled.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AssemblyError {
    #[error("{section} section is missing `{field}`")]
    MissingField {
        section: &'static str,
        field: &'static str,
    },

    #[error("orientation norm {norm} is outside the unit tolerance {tolerance}")]
    NonUnitQuaternion { norm: f64, tolerance: f64 },
}

fn require<T>(value: Option<T>, section: &'static str, field: &'static str) -> Result<T, AssemblyError> {
    value.ok_or(AssemblyError::MissingField { section, field })
}

// =========================================================================
// == Header ==
// =========================================================================

#[derive(Debug, Clone, Default, PartialEq)]
pub struct HeaderBuilder {
    pub seq: Option<i64>,
    pub frame_id: Option<String>,
    pub secs: Option<i64>,
    pub nsecs: Option<i64>,
}

impl HeaderBuilder {
    pub fn apply(&mut self, line: &str) -> Result<(), FieldError> {
        if let Some(raw) = field_value(line, "seq:") {
            self.seq = Some(coerce_int("seq", raw)?);
        } else if let Some(raw) = field_value(line, "frame_id:") {
            self.frame_id = Some(raw.to_string());
        } else if let Some(raw) = field_value(line, "secs:") {
            self.secs = Some(coerce_int("secs", raw)?);
        } else if let Some(raw) = field_value(line, "nsecs:") {
            self.nsecs = Some(coerce_int("nsecs", raw)?);
        }
        Ok(())
    }

    pub fn is_complete(&self) -> bool {
        self.seq.is_some() && self.frame_id.is_some() && self.secs.is_some() && self.nsecs.is_some()
    }

    pub fn build(self) -> Result<Header, AssemblyError> {
        let seq = require(self.seq, "header", "seq")?;
        let frame_id = require(self.frame_id, "header", "frame_id")?;
        let secs = require(self.secs, "header", "secs")?;
        let nsecs = require(self.nsecs, "header", "nsecs")?;
        Ok(Header::new(seq, Tempo::new(secs, nsecs), frame_id))
    }
}

// =========================================================================
// == Position ==
// =========================================================================

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PointBuilder {
    pub x: Option<f64>,
    pub y: Option<f64>,
    pub z: Option<f64>,
}

impl PointBuilder {
    pub fn apply(&mut self, line: &str) -> Result<(), FieldError> {
        if let Some(raw) = field_value(line, "x:") {
            self.x = Some(coerce_float("x", raw)?);
        } else if let Some(raw) = field_value(line, "y:") {
            self.y = Some(coerce_float("y", raw)?);
        } else if let Some(raw) = field_value(line, "z:") {
            self.z = Some(coerce_float("z", raw)?);
        }
        Ok(())
    }

    pub fn is_complete(&self) -> bool {
        self.x.is_some() && self.y.is_some() && self.z.is_some()
    }

    pub fn build(self) -> Result<Point3D, AssemblyError> {
        Ok(Point3D::new(
            require(self.x, "position", "x")?,
            require(self.y, "position", "y")?,
            require(self.z, "position", "z")?,
        ))
    }
}

// =========================================================================
// == Orientation ==
// =========================================================================

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct OrientationBuilder {
    pub x: Option<f64>,
    pub y: Option<f64>,
    pub z: Option<f64>,
    pub w: Option<f64>,
}

impl OrientationBuilder {
    pub fn apply(&mut self, line: &str) -> Result<(), FieldError> {
        if let Some(raw) = field_value(line, "x:") {
            self.x = Some(coerce_float("x", raw)?);
        } else if let Some(raw) = field_value(line, "y:") {
            self.y = Some(coerce_float("y", raw)?);
        } else if let Some(raw) = field_value(line, "z:") {
            self.z = Some(coerce_float("z", raw)?);
        } else if let Some(raw) = field_value(line, "w:") {
            self.w = Some(coerce_float("w", raw)?);
        }
        Ok(())
    }

    pub fn is_complete(&self) -> bool {
        self.x.is_some() && self.y.is_some() && self.z.is_some() && self.w.is_some()
    }

    pub fn build(self) -> Result<Orientation, AssemblyError> {
        Ok(Orientation::from_xyzw(
            require(self.x, "orientation", "x")?,
            require(self.y, "orientation", "y")?,
            require(self.z, "orientation", "z")?,
            require(self.w, "orientation", "w")?,
        ))
    }
}

// =========================================================================
// == Temperature Reading ==
// =========================================================================

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ReadingBuilder {
    pub temperature: Option<f64>,
    pub variance: Option<f64>,
}

impl ReadingBuilder {
    pub fn apply(&mut self, line: &str) -> Result<(), FieldError> {
        if let Some(raw) = field_value(line, "temperature:") {
            self.temperature = Some(coerce_float("temperature", raw)?);
        } else if let Some(raw) = field_value(line, "variance:") {
            self.variance = Some(coerce_float("variance", raw)?);
        }
        Ok(())
    }

    pub fn is_complete(&self) -> bool {
        self.temperature.is_some() && self.variance.is_some()
    }

    /// Returns `(temperature, variance)`.
    pub fn build(self) -> Result<(f64, f64), AssemblyError> {
        Ok((
            require(self.temperature, "reading", "temperature")?,
            require(self.variance, "reading", "variance")?,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_builder_collects_fields_in_any_order() {
        let mut b = HeaderBuilder::default();
        for line in ["nsecs: 20", "frame_id: map", "secs: 10", "seq: 3"] {
            b.apply(line).unwrap();
        }
        assert!(b.is_complete());
        let header = b.build().unwrap();
        assert_eq!(header.seq, 3);
        assert_eq!(header.stamp, Tempo::new(10, 20));
        assert_eq!(header.frame_id, "map");
    }

    #[test]
    fn test_header_builder_failure_keeps_previous_fields() {
        let mut b = HeaderBuilder::default();
        b.apply("seq: 1").unwrap();
        assert!(b.apply("secs: soon").is_err());
        assert_eq!(b.seq, Some(1));
        assert_eq!(b.secs, None);
    }

    #[test]
    fn test_builders_ignore_foreign_keys() {
        let mut p = PointBuilder::default();
        p.apply("w: 1.0").unwrap();
        p.apply("seq: 1").unwrap();
        assert_eq!(p, PointBuilder::default());
    }

    #[test]
    fn test_incomplete_build_is_an_assembly_error() {
        let b = OrientationBuilder {
            x: Some(0.0),
            y: Some(0.0),
            z: Some(0.0),
            w: None,
        };
        assert_eq!(
            b.build().unwrap_err(),
            AssemblyError::MissingField {
                section: "orientation",
                field: "w"
            }
        );
    }

    #[test]
    fn test_orientation_builder_maps_w_to_scalar() {
        let mut b = OrientationBuilder::default();
        for line in ["x: 0.1", "y: 0.2", "z: 0.3", "w: 0.9"] {
            b.apply(line).unwrap();
        }
        let q = b.build().unwrap();
        assert_eq!((q.q0, q.q1, q.q2, q.q3), (0.9, 0.1, 0.2, 0.3));
    }

    #[test]
    fn test_reading_builder() {
        let mut b = ReadingBuilder::default();
        b.apply("temperature: 23.5").unwrap();
        assert!(!b.is_complete());
        assert!(b.apply("variance: n/a").is_err());
        b.apply("variance: 0.1").unwrap();
        assert_eq!(b.build().unwrap(), (23.5, 0.1));
    }
}
