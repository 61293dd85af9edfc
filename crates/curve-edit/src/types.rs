use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum CurveError {
    #[error("gamma must be positive, got {0}")]
    InvalidGamma(f32),
    #[error("sample vector is empty")]
    EmptyVector,
    #[error("curve bounds are degenerate: {0}")]
    DegenerateBounds(String),
}

pub type Result<T> = std::result::Result<T, CurveError>;

/// How the curve interpolates between control points
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CurveType {
    /// Natural cubic spline through the control points
    #[default]
    Spline,
    /// Straight segments between control points
    Linear,
    /// Free-hand drawn sample vector, no control points
    Free,
}

/// A control point in value space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ControlPoint {
    pub x: f32,
    pub y: f32,
}

impl ControlPoint {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}
