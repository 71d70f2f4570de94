// thermotrack_core/src/abstractions.rs

use crate::alignment::{Alignment, ThermalPoint};
use crate::trajectory::{OrientationGlyph, Trajectory, DEFAULT_AXIS_SCALE};
use crate::types::Point3D;
use serde::{Deserialize, Serialize};

// --- VISUALIZATION SINK TRAIT ---
/// A rendering backend for trajectories and their temperature overlay.
///
/// The core never draws anything itself; it prepares plain geometry and hands
/// it over through these calls. Implementations decide what a "draw" means
/// (a plot window, an image file, a text report...).
pub trait TrajectorySink {
    /// Title of the scene, usually the log name. Called once, first.
    fn begin_scene(&mut self, title: &str) {
        let _ = title;
    }

    /// The polyline through every pose position, in log order.
    fn draw_path(&mut self, positions: &[Point3D]);

    /// Local axes at the sampled poses.
    fn draw_orientation_glyphs(&mut self, glyphs: &[OrientationGlyph]);

    /// Matched readings and the interpolated samples between them.
    fn draw_temperatures(&mut self, matched: &[ThermalPoint], interpolated: &[ThermalPoint]);

    /// Called once after everything else.
    fn finish_scene(&mut self) {}
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SceneOptions {
    /// Length of the drawn orientation axes.
    #[serde(default = "default_axis_scale")]
    pub axis_scale: f64,
}

fn default_axis_scale() -> f64 {
    DEFAULT_AXIS_SCALE
}

impl Default for SceneOptions {
    fn default() -> Self {
        Self {
            axis_scale: DEFAULT_AXIS_SCALE,
        }
    }
}

/// Feeds a trajectory (and, if present, its temperature alignment) to `sink`.
///
/// Returns the number of orientation glyphs drawn.
pub fn render_scene<S: TrajectorySink + ?Sized>(
    trajectory: &Trajectory,
    alignment: Option<&Alignment>,
    options: &SceneOptions,
    sink: &mut S,
) -> usize {
    sink.begin_scene(&trajectory.name);
    sink.draw_path(&trajectory.positions());

    let glyphs = trajectory.orientation_glyphs(options.axis_scale);
    sink.draw_orientation_glyphs(&glyphs);

    if let Some(alignment) = alignment {
        sink.draw_temperatures(&alignment.matched, &alignment.interpolated);
    }
    sink.finish_scene();
    glyphs.len()
}
