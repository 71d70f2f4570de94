// thermotrack_core/src/prelude.rs

// --- Core Abstractions (The main contracts of the library) ---
pub use crate::abstractions::{render_scene, SceneOptions, TrajectorySink};
pub use crate::error::{Result, ThermotrackError};

// --- Core Data Structures (The "nouns" of the library) ---
pub use crate::messages::{Header, Pose, PoseWithHeader, TemperatureWithHeader};
pub use crate::orientation::Orientation;
pub use crate::trajectory::{OrientationGlyph, TemperatureSeries, Trajectory};
pub use crate::types::{Point3D, Tempo};

// --- Parsing ---
pub use crate::parsing::{
    parse_pose_log, parse_temperature_log, read_log_lines, ParseOutcome, ParseSummary,
    ParserOptions, PoseLogParser, QuaternionCheck, TemperatureLogParser,
};

// --- Alignment & Interpolation ---
pub use crate::alignment::spline::CubicSpline;
pub use crate::alignment::{align_and_interpolate, Alignment, AlignmentParams, ThermalPoint, TimeBase};
