mod curve;
mod drag;
mod spline;
mod types;

pub use curve::{Curve, FREE_RESOLUTION};
pub use drag::{CurveLayout, DragController, MIN_DISTANCE};
pub use spline::{spline_eval, spline_solve};
pub use types::*;
