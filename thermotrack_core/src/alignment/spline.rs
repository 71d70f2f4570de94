// thermotrack_core/src/alignment/spline.rs

//! One-dimensional cubic spline interpolation.

use crate::error::{Result, ThermotrackError};
use nalgebra::{DMatrix, DVector};

/// Cubic polynomial on `[x0, x0 + h]`:
/// `y(t) = a + b*(t-x0) + c*(t-x0)^2 + d*(t-x0)^3`.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Segment {
    x0: f64,
    a: f64,
    b: f64,
    c: f64,
    d: f64,
}

impl Segment {
    fn eval(&self, x: f64) -> f64 {
        let t = x - self.x0;
        self.a + t * (self.b + t * (self.c + t * self.d))
    }
}

/// A piecewise cubic interpolant through `(x_i, y_i)`.
///
/// * Two knots: the end slopes are pinned to the secant, which makes the
///   interpolant the straight line between the two values.
/// * Three or more knots: natural boundary conditions (zero curvature at both
///   ends), solved as a tridiagonal system.
///
/// Outside `[x_0, x_{n-1}]` the first/last polynomial is extrapolated.
#[derive(Debug, Clone, PartialEq)]
pub struct CubicSpline {
    knots: Vec<f64>,
    segments: Vec<Segment>,
}

impl CubicSpline {
    /// Knots must be finite and strictly increasing, with one value per knot.
    pub fn new(knots: &[f64], values: &[f64]) -> Result<Self> {
        let n = knots.len();
        if n < 2 {
            return Err(ThermotrackError::spline(format!("need at least 2 knots, got {}", n)));
        }
        if values.len() != n {
            return Err(ThermotrackError::spline(format!(
                "{} knots but {} values",
                n,
                values.len()
            )));
        }
        if knots.iter().any(|k| !k.is_finite()) {
            return Err(ThermotrackError::spline("knots must be finite"));
        }
        if knots.windows(2).any(|w| w[1] <= w[0]) {
            return Err(ThermotrackError::spline("knots must be strictly increasing"));
        }

        let segments = if n == 2 {
            let slope = (values[1] - values[0]) / (knots[1] - knots[0]);
            vec![Segment {
                x0: knots[0],
                a: values[0],
                b: slope,
                c: 0.0,
                d: 0.0,
            }]
        } else {
            Self::natural_segments(knots, values)?
        };

        Ok(Self {
            knots: knots.to_vec(),
            segments,
        })
    }

    fn natural_segments(x: &[f64], y: &[f64]) -> Result<Vec<Segment>> {
        let n = x.len();
        let h: Vec<f64> = x.windows(2).map(|w| w[1] - w[0]).collect();

        // Interior second derivatives M_1..M_{n-2}; M_0 = M_{n-1} = 0.
        let m = n - 2;
        let mut a = DMatrix::<f64>::zeros(m, m);
        let mut rhs = DVector::<f64>::zeros(m);
        for row in 0..m {
            let i = row + 1;
            if row > 0 {
                a[(row, row - 1)] = h[i - 1];
            }
            a[(row, row)] = 2.0 * (h[i - 1] + h[i]);
            if row + 1 < m {
                a[(row, row + 1)] = h[i];
            }
            rhs[row] = 6.0 * ((y[i + 1] - y[i]) / h[i] - (y[i] - y[i - 1]) / h[i - 1]);
        }
        let interior = a
            .lu()
            .solve(&rhs)
            .ok_or_else(|| ThermotrackError::spline("singular spline system"))?;

        let mut second = vec![0.0; n];
        second[1..n - 1].copy_from_slice(interior.as_slice());

        Ok((0..n - 1)
            .map(|i| Segment {
                x0: x[i],
                a: y[i],
                b: (y[i + 1] - y[i]) / h[i] - h[i] * (2.0 * second[i] + second[i + 1]) / 6.0,
                c: second[i] / 2.0,
                d: (second[i + 1] - second[i]) / (6.0 * h[i]),
            })
            .collect())
    }

    pub fn knots(&self) -> &[f64] {
        &self.knots
    }

    pub fn evaluate(&self, x: f64) -> f64 {
        // Index of the last knot <= x, clamped to a valid segment.
        let idx = self.knots.partition_point(|&k| k <= x);
        let seg = idx.saturating_sub(1).min(self.segments.len() - 1);
        self.segments[seg].eval(x)
    }

    pub fn sample(&self, xs: &[f64]) -> Vec<f64> {
        xs.iter().map(|&x| self.evaluate(x)).collect()
    }
}

/// `count` evenly spaced values from `start` to `end`, both inclusive.
/// One value yields `[start]`, zero yields nothing.
pub fn linspace(start: f64, end: f64, count: usize) -> Vec<f64> {
    match count {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (count - 1) as f64;
            let mut out: Vec<f64> = (0..count).map(|i| start + step * i as f64).collect();
            out[count - 1] = end;
            out
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_two_knot_spline_is_linear() {
        let s = CubicSpline::new(&[0.0, 2.0], &[10.0, 20.0]).unwrap();
        assert_abs_diff_eq!(s.evaluate(0.0), 10.0, epsilon = 1e-12);
        assert_abs_diff_eq!(s.evaluate(0.5), 12.5, epsilon = 1e-12);
        assert_abs_diff_eq!(s.evaluate(2.0), 20.0, epsilon = 1e-12);
    }

    #[test]
    fn test_natural_spline_passes_through_knots() {
        let xs = [0.0, 1.0, 2.5, 4.0];
        let ys = [1.0, 3.0, -1.0, 2.0];
        let s = CubicSpline::new(&xs, &ys).unwrap();
        for (x, y) in xs.iter().zip(ys.iter()) {
            assert_abs_diff_eq!(s.evaluate(*x), *y, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_natural_spline_reproduces_a_line() {
        let xs = [0.0, 1.0, 3.0, 6.0];
        let ys: Vec<f64> = xs.iter().map(|x| 2.0 * x - 1.0).collect();
        let s = CubicSpline::new(&xs, &ys).unwrap();
        assert_abs_diff_eq!(s.evaluate(4.5), 8.0, epsilon = 1e-9);
    }

    #[test]
    fn test_invalid_knots() {
        assert!(CubicSpline::new(&[0.0], &[1.0]).is_err());
        assert!(CubicSpline::new(&[0.0, 0.0], &[1.0, 2.0]).is_err());
        assert!(CubicSpline::new(&[0.0, f64::NAN], &[1.0, 2.0]).is_err());
        assert!(CubicSpline::new(&[0.0, 1.0], &[1.0]).is_err());
    }

    #[test]
    fn test_linspace_endpoints() {
        let v = linspace(0.0, 2.0, 10);
        assert_eq!(v.len(), 10);
        assert_eq!(v[0], 0.0);
        assert_eq!(v[9], 2.0);
        assert_abs_diff_eq!(v[1], 2.0 / 9.0, epsilon = 1e-15);
        assert_eq!(linspace(1.0, 5.0, 1), vec![1.0]);
        assert!(linspace(1.0, 5.0, 0).is_empty());
    }
}
