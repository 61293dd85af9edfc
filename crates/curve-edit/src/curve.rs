//! Curve model
//!
//! A curve maps an x range onto a y range, either through control points
//! (spline or linear interpolation) or through a free-hand sample vector.
//! Hosts read it back with [`Curve::sample`] to apply the mapping, e.g. as a
//! gamma-correction lookup table.

use crate::spline::{spline_eval, spline_solve};
use crate::types::{ControlPoint, CurveError, CurveType, Result};

/// Sample columns backing a free-hand curve
pub const FREE_RESOLUTION: usize = 256;

/// Control points picked when converting a free-hand curve back to an
/// interpolated one
const RETAINED_POINTS: usize = 9;

#[derive(Debug, Clone)]
pub struct Curve {
    curve_type: CurveType,
    min_x: f32,
    max_x: f32,
    min_y: f32,
    max_y: f32,
    /// Control points in value space, x ascending; used by Spline/Linear
    points: Vec<ControlPoint>,
    /// Free-hand y values over FREE_RESOLUTION evenly spaced x columns
    samples: Vec<f32>,
}

impl Curve {
    /// Create a curve over the given bounds, reset to the identity diagonal.
    pub fn new(min_x: f32, max_x: f32, min_y: f32, max_y: f32) -> Result<Self> {
        if !(min_x < max_x) || !(min_y < max_y) {
            return Err(CurveError::DegenerateBounds(format!(
                "x {min_x}..{max_x}, y {min_y}..{max_y}"
            )));
        }
        let mut curve = Self {
            curve_type: CurveType::default(),
            min_x,
            max_x,
            min_y,
            max_y,
            points: Vec::new(),
            samples: vec![min_y; FREE_RESOLUTION],
        };
        curve.reset();
        Ok(curve)
    }

    /// Unit curve over 0..1 in both axes
    pub fn unit() -> Self {
        // Bounds are statically valid.
        Self::new(0.0, 1.0, 0.0, 1.0).unwrap()
    }

    pub fn curve_type(&self) -> CurveType {
        self.curve_type
    }

    pub fn x_bounds(&self) -> (f32, f32) {
        (self.min_x, self.max_x)
    }

    pub fn y_bounds(&self) -> (f32, f32) {
        (self.min_y, self.max_y)
    }

    pub fn control_points(&self) -> &[ControlPoint] {
        &self.points
    }

    /// Restore the identity diagonal with two control points, spline type.
    pub fn reset(&mut self) {
        self.points = vec![
            ControlPoint::new(self.min_x, self.min_y),
            ControlPoint::new(self.max_x, self.max_y),
        ];
        self.curve_type = CurveType::Spline;
    }

    /// Replace the curve with a gamma-correction free-hand curve
    /// `y = x_norm^(1/gamma)` mapped onto the bounds.
    pub fn set_gamma(&mut self, gamma: f32) -> Result<()> {
        if gamma <= 0.0 {
            return Err(CurveError::InvalidGamma(gamma));
        }
        let exponent = 1.0 / gamma;
        let last = (FREE_RESOLUTION - 1) as f32;
        for (i, sample) in self.samples.iter_mut().enumerate() {
            let x_norm = i as f32 / last;
            *sample = self.min_y + (self.max_y - self.min_y) * x_norm.powf(exponent);
        }
        self.curve_type = CurveType::Free;
        Ok(())
    }

    /// Switch interpolation mode, converting the current shape.
    ///
    /// To Free: the interpolation is sampled into the free-hand vector.
    /// From Free: evenly spaced control points are retained from the
    /// samples. Between Spline and Linear the control points carry over.
    pub fn set_curve_type(&mut self, curve_type: CurveType) {
        if curve_type == self.curve_type {
            return;
        }

        match (self.curve_type, curve_type) {
            (CurveType::Spline | CurveType::Linear, CurveType::Free) => {
                let last = (FREE_RESOLUTION - 1) as f32;
                for i in 0..FREE_RESOLUTION {
                    let x = self.min_x + (self.max_x - self.min_x) * i as f32 / last;
                    self.samples[i] = self.interpolate(x);
                }
            }
            (CurveType::Free, CurveType::Spline | CurveType::Linear) => {
                let last = (RETAINED_POINTS - 1) as f32;
                self.points = (0..RETAINED_POINTS)
                    .map(|i| {
                        let x = self.min_x + (self.max_x - self.min_x) * i as f32 / last;
                        ControlPoint::new(x, self.sample_at(x))
                    })
                    .collect();
            }
            _ => {}
        }

        self.curve_type = curve_type;
    }

    /// Evaluate the curve at `x`, clamped into the y bounds.
    pub fn interpolate(&self, x: f32) -> f32 {
        let y = match self.curve_type {
            CurveType::Free => self.sample_at(x),
            CurveType::Linear => self.interpolate_linear(x),
            CurveType::Spline => {
                let y2 = spline_solve(&self.points);
                spline_eval(&self.points, &y2, x)
            }
        };
        y.clamp(self.min_y, self.max_y)
    }

    /// `n` evenly spaced curve values across the x bounds
    pub fn sample(&self, n: usize) -> Vec<f32> {
        if n == 0 {
            return Vec::new();
        }
        if n == 1 {
            return vec![self.interpolate(self.min_x)];
        }

        // Solve the spline once rather than per column.
        let y2 = match self.curve_type {
            CurveType::Spline => Some(spline_solve(&self.points)),
            _ => None,
        };

        let last = (n - 1) as f32;
        (0..n)
            .map(|i| {
                let x = self.min_x + (self.max_x - self.min_x) * i as f32 / last;
                let y = match (&self.curve_type, &y2) {
                    (CurveType::Spline, Some(y2)) => spline_eval(&self.points, y2, x),
                    _ => self.interpolate(x),
                };
                y.clamp(self.min_y, self.max_y)
            })
            .collect()
    }

    /// Replace the curve with an explicit sample vector (free-hand type).
    pub fn set_sample_vector(&mut self, data: &[f32]) -> Result<()> {
        if data.is_empty() {
            return Err(CurveError::EmptyVector);
        }
        let last = (FREE_RESOLUTION - 1) as f32;
        let src_last = (data.len() - 1) as f32;
        for i in 0..FREE_RESOLUTION {
            // Resample with linear interpolation onto our resolution. A
            // one-element vector degenerates to a constant fill.
            let t = i as f32 / last * src_last;
            let lo = (t.floor() as usize).min(data.len() - 1);
            let hi = (lo + 1).min(data.len() - 1);
            let frac = t - lo as f32;
            let y = data[lo] * (1.0 - frac) + data[hi] * frac;
            self.samples[i] = y.clamp(self.min_y, self.max_y);
        }
        self.curve_type = CurveType::Free;
        Ok(())
    }

    pub(crate) fn samples(&self) -> &[f32] {
        &self.samples
    }

    pub(crate) fn set_sample_column(&mut self, column: usize, y: f32) {
        if let Some(sample) = self.samples.get_mut(column) {
            *sample = y.clamp(self.min_y, self.max_y);
        }
    }

    pub(crate) fn set_points(&mut self, points: Vec<ControlPoint>) {
        debug_assert!(points.len() >= 2);
        self.points = points;
    }

    /// x mapped to the free-hand column index
    pub(crate) fn column_for(&self, x: f32) -> usize {
        let t = (x - self.min_x) / (self.max_x - self.min_x);
        let column = (t * (FREE_RESOLUTION - 1) as f32).round() as isize;
        column.clamp(0, FREE_RESOLUTION as isize - 1) as usize
    }

    fn sample_at(&self, x: f32) -> f32 {
        let last = (FREE_RESOLUTION - 1) as f32;
        let t = ((x - self.min_x) / (self.max_x - self.min_x) * last).clamp(0.0, last);
        let lo = t.floor() as usize;
        let hi = (lo + 1).min(FREE_RESOLUTION - 1);
        let frac = t - lo as f32;
        self.samples[lo] * (1.0 - frac) + self.samples[hi] * frac
    }

    fn interpolate_linear(&self, x: f32) -> f32 {
        match self.points.iter().position(|p| p.x > x) {
            Some(0) => self.points[0].y,
            None => self.points[self.points.len() - 1].y,
            Some(hi) => {
                let (a, b) = (self.points[hi - 1], self.points[hi]);
                if b.x == a.x {
                    a.y
                } else {
                    a.y + (b.y - a.y) * (x - a.x) / (b.x - a.x)
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_degenerate_bounds() {
        assert!(Curve::new(0.0, 0.0, 0.0, 1.0).is_err());
        assert!(Curve::new(0.0, 1.0, 1.0, 1.0).is_err());
    }

    #[test]
    fn test_reset_is_identity_diagonal() {
        let curve = Curve::unit();
        assert_eq!(curve.curve_type(), CurveType::Spline);
        for i in 0..=10 {
            let x = i as f32 / 10.0;
            assert!((curve.interpolate(x) - x).abs() < 1e-5);
        }
    }

    #[test]
    fn test_gamma_one_is_identity() {
        let mut curve = Curve::unit();
        curve.set_gamma(1.0).unwrap();
        assert_eq!(curve.curve_type(), CurveType::Free);
        for i in 0..=10 {
            let x = i as f32 / 10.0;
            assert!((curve.interpolate(x) - x).abs() < 1e-3);
        }
    }

    #[test]
    fn test_gamma_curve_shape() {
        let mut curve = Curve::unit();
        curve.set_gamma(2.2).unwrap();
        // 1/2.2 exponent lifts the midtones.
        assert!(curve.interpolate(0.5) > 0.5);
        assert!((curve.interpolate(0.0) - 0.0).abs() < 1e-4);
        assert!((curve.interpolate(1.0) - 1.0).abs() < 1e-4);
    }

    #[test]
    fn test_invalid_gamma_is_rejected() {
        let mut curve = Curve::unit();
        assert_eq!(curve.set_gamma(0.0), Err(CurveError::InvalidGamma(0.0)));
        assert_eq!(curve.set_gamma(-1.0), Err(CurveError::InvalidGamma(-1.0)));
    }

    #[test]
    fn test_type_conversion_preserves_shape() {
        let mut curve = Curve::unit();
        curve.set_gamma(2.0).unwrap();
        let before = curve.sample(33);

        curve.set_curve_type(CurveType::Spline);
        assert_eq!(curve.control_points().len(), 9);
        let after = curve.sample(33);

        // sqrt-like shapes are hard to fit right at zero where the slope
        // blows up, so compare away from the left edge.
        for (b, a) in before.iter().zip(after.iter()).skip(4) {
            assert!((b - a).abs() < 0.05, "shape drifted: {b} vs {a}");
        }
    }

    #[test]
    fn test_sample_within_bounds_and_monotone_for_monotone_points() {
        let mut curve = Curve::unit();
        curve.set_points(vec![
            ControlPoint::new(0.0, 0.0),
            ControlPoint::new(0.5, 0.3),
            ControlPoint::new(1.0, 1.0),
        ]);
        curve.set_curve_type(CurveType::Linear);

        let samples = curve.sample(65);
        assert!(samples.iter().all(|y| (0.0..=1.0).contains(y)));
        assert!(samples.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn test_set_sample_vector_resamples() {
        let mut curve = Curve::unit();
        curve.set_sample_vector(&[0.0, 1.0]).unwrap();
        assert_eq!(curve.curve_type(), CurveType::Free);
        assert!((curve.interpolate(0.25) - 0.25).abs() < 1e-3);
        assert_eq!(curve.set_sample_vector(&[]), Err(CurveError::EmptyVector));
    }

    #[test]
    fn test_single_sample_vector_fills_constant() {
        let mut curve = Curve::unit();
        curve.set_sample_vector(&[0.5]).unwrap();
        assert_eq!(curve.curve_type(), CurveType::Free);
        for i in 0..=10 {
            let x = i as f32 / 10.0;
            assert!((curve.interpolate(x) - 0.5).abs() < 1e-6);
        }
    }

    #[test]
    fn test_spline_interpolation_clamped_to_y_bounds() {
        let mut curve = Curve::unit();
        // A shape that would overshoot 1.0 near the plateau.
        curve.set_points(vec![
            ControlPoint::new(0.0, 0.0),
            ControlPoint::new(0.4, 1.0),
            ControlPoint::new(0.6, 1.0),
            ControlPoint::new(1.0, 0.0),
        ]);
        for i in 0..=40 {
            let y = curve.interpolate(i as f32 / 40.0);
            assert!((0.0..=1.0).contains(&y));
        }
    }
}
