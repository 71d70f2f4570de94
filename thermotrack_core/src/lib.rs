// thermotrack_core/src/lib.rs

//! Pose / temperature log ingestion and time alignment.
//!
//! The crate turns the line-oriented pose and temperature logs written by the
//! vehicle into typed records ([`parsing`]), associates every pose with the
//! temperature sample closest in time and densifies the result with a cubic
//! spline ([`alignment`]), and hands everything to a rendering backend through
//! the [`abstractions::TrajectorySink`] contract.

pub mod abstractions;
pub mod alignment;
pub mod error;
pub mod messages;
pub mod orientation;
pub mod parsing;
pub mod prelude;
pub mod trajectory;
pub mod types;
