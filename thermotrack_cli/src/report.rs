// thermotrack_cli/src/report.rs

//! A plain-text rendering backend. Instead of opening a plot window it
//! summarises what would have been drawn.

use std::fmt::Write;
use thermotrack_core::prelude::{OrientationGlyph, Point3D, ThermalPoint, TrajectorySink};

#[derive(Debug, Default)]
pub struct TextReport {
    lines: Vec<String>,
}

impl TextReport {
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn render(&self) -> String {
        let mut out = String::new();
        for line in &self.lines {
            let _ = writeln!(out, "{}", line);
        }
        out
    }
}

fn path_length(positions: &[Point3D]) -> f64 {
    positions.windows(2).map(|w| (w[1] - w[0]).norm()).sum()
}

fn bounds(positions: &[Point3D]) -> Option<(Point3D, Point3D)> {
    let first = positions.first()?;
    Some(positions.iter().fold((*first, *first), |(lo, hi), p| {
        (lo.inf(p), hi.sup(p))
    }))
}

fn temperature_range(points: &[ThermalPoint]) -> Option<(f64, f64)> {
    points
        .iter()
        .map(|p| p.temperature)
        .fold(None, |acc, t| match acc {
            None => Some((t, t)),
            Some((lo, hi)) => Some((lo.min(t), hi.max(t))),
        })
}

impl TrajectorySink for TextReport {
    fn begin_scene(&mut self, title: &str) {
        self.lines.push(format!("Trajectory: {}", title));
    }

    fn draw_path(&mut self, positions: &[Point3D]) {
        self.lines.push(format!(
            "Path: {} points, length {:.3} m",
            positions.len(),
            path_length(positions)
        ));
        if let Some((lo, hi)) = bounds(positions) {
            self.lines.push(format!(
                "Bounds: x [{:.3}, {:.3}] y [{:.3}, {:.3}] z [{:.3}, {:.3}]",
                lo.x, hi.x, lo.y, hi.y, lo.z, hi.z
            ));
        }
    }

    fn draw_orientation_glyphs(&mut self, glyphs: &[OrientationGlyph]) {
        self.lines
            .push(format!("Number of orientations drawn: {}", glyphs.len()));
    }

    fn draw_temperatures(&mut self, matched: &[ThermalPoint], interpolated: &[ThermalPoint]) {
        self.lines
            .push(format!("Matched temperature points: {}", matched.len()));
        self.lines.push(format!(
            "Interpolated temperature points: {}",
            interpolated.len()
        ));
        if let Some((lo, hi)) = temperature_range(matched) {
            self.lines
                .push(format!("Temperature range: {:.2} .. {:.2}", lo, hi));
        }
    }
}
