//! Natural cubic spline interpolation
//!
//! The classic two-pass formulation: solve the tridiagonal system for the
//! second derivatives at the knots, then evaluate piecewise cubics between
//! them. Knot x coordinates must be strictly increasing.

use crate::types::ControlPoint;

/// Solve for the second derivatives at each knot.
///
/// Natural boundary conditions: the second derivative is zero at both ends.
pub fn spline_solve(points: &[ControlPoint]) -> Vec<f32> {
    let n = points.len();
    let mut y2 = vec![0.0f32; n];
    if n < 3 {
        return y2;
    }

    let mut u = vec![0.0f32; n - 1];

    for i in 1..n - 1 {
        let sig = (points[i].x - points[i - 1].x) / (points[i + 1].x - points[i - 1].x);
        let p = sig * y2[i - 1] + 2.0;
        y2[i] = (sig - 1.0) / p;
        u[i] = (points[i + 1].y - points[i].y) / (points[i + 1].x - points[i].x)
            - (points[i].y - points[i - 1].y) / (points[i].x - points[i - 1].x);
        u[i] = (6.0 * u[i] / (points[i + 1].x - points[i - 1].x) - sig * u[i - 1]) / p;
    }

    for k in (0..n - 1).rev() {
        y2[k] = y2[k] * y2[k + 1] + u[k];
    }

    y2
}

/// Evaluate the spline at `val`.
///
/// `y2` must come from [`spline_solve`] over the same points, and there must
/// be at least two of them. Values outside the knot range extrapolate from
/// the end segments.
pub fn spline_eval(points: &[ControlPoint], y2: &[f32], val: f32) -> f32 {
    debug_assert_eq!(points.len(), y2.len());
    debug_assert!(points.len() >= 2);

    // Binary search for the interval containing val.
    let mut klo = 0;
    let mut khi = points.len() - 1;
    while khi - klo > 1 {
        let k = (khi + klo) / 2;
        if points[k].x > val {
            khi = k;
        } else {
            klo = k;
        }
    }

    let h = points[khi].x - points[klo].x;
    let a = (points[khi].x - val) / h;
    let b = (val - points[klo].x) / h;

    a * points[klo].y
        + b * points[khi].y
        + ((a * a * a - a) * y2[klo] + (b * b * b - b) * y2[khi]) * (h * h) / 6.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pts(coords: &[(f32, f32)]) -> Vec<ControlPoint> {
        coords.iter().map(|&(x, y)| ControlPoint::new(x, y)).collect()
    }

    #[test]
    fn test_passes_through_knots() {
        let points = pts(&[(0.0, 0.0), (0.25, 0.5), (0.5, 0.4), (1.0, 1.0)]);
        let y2 = spline_solve(&points);
        for p in &points {
            let y = spline_eval(&points, &y2, p.x);
            assert!((y - p.y).abs() < 1e-5, "spline misses knot ({}, {})", p.x, p.y);
        }
    }

    #[test]
    fn test_two_points_is_linear() {
        let points = pts(&[(0.0, 0.0), (1.0, 1.0)]);
        let y2 = spline_solve(&points);
        assert_eq!(y2, vec![0.0, 0.0]);
        for i in 0..=10 {
            let x = i as f32 / 10.0;
            assert!((spline_eval(&points, &y2, x) - x).abs() < 1e-6);
        }
    }

    #[test]
    fn test_collinear_points_stay_linear() {
        let points = pts(&[(0.0, 0.0), (0.5, 0.5), (1.0, 1.0)]);
        let y2 = spline_solve(&points);
        for i in 0..=20 {
            let x = i as f32 / 20.0;
            assert!((spline_eval(&points, &y2, x) - x).abs() < 1e-5);
        }
    }

    #[test]
    fn test_interior_smoothness_overshoots_linear() {
        // A spline through a step-like point set bulges beyond the chords;
        // this is what distinguishes it from Linear mode.
        let points = pts(&[(0.0, 0.0), (0.4, 0.0), (0.6, 1.0), (1.0, 1.0)]);
        let y2 = spline_solve(&points);
        let below = spline_eval(&points, &y2, 0.2);
        assert!(below < 0.0, "expected undershoot, got {below}");
    }
}
