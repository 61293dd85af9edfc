//! Drag-interaction state machine
//!
//! Translates pointer events in widget pixels into curve edits. In the
//! interpolated modes a press grabs the closest control point within reach
//! or inserts a new one, and dragging moves it, swallowing control points it
//! passes. In free-hand mode dragging paints the sample vector, filling in
//! the columns a fast pointer skipped.

use crate::curve::Curve;
use crate::types::{ControlPoint, CurveType};

/// Pixel reach within which a press grabs an existing control point
/// instead of inserting a new one
pub const MIN_DISTANCE: f32 = 8.0;

/// Pixel size of the curve-editing area, mapping widget space onto the
/// curve's value space. y runs downward, as in widget coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurveLayout {
    pub width: f32,
    pub height: f32,
}

impl CurveLayout {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Value-space point for a pixel position, clamped into the bounds
    pub fn unproject(&self, curve: &Curve, px: f32, py: f32) -> ControlPoint {
        let (min_x, max_x) = curve.x_bounds();
        let (min_y, max_y) = curve.y_bounds();
        let tx = (px / self.width).clamp(0.0, 1.0);
        let ty = (py / self.height).clamp(0.0, 1.0);
        ControlPoint::new(min_x + (max_x - min_x) * tx, max_y - (max_y - min_y) * ty)
    }

    /// Pixel position of a value-space point
    pub fn project(&self, curve: &Curve, point: ControlPoint) -> (f32, f32) {
        let (min_x, max_x) = curve.x_bounds();
        let (min_y, max_y) = curve.y_bounds();
        (
            (point.x - min_x) / (max_x - min_x) * self.width,
            (max_y - point.y) / (max_y - min_y) * self.height,
        )
    }
}

/// Pointer-drag state for one curve widget
#[derive(Debug, Default)]
pub struct DragController {
    grabbed: Option<usize>,
    /// Last painted free-hand column and its value, the anchor for
    /// interpolating across skipped columns
    last_free: Option<(usize, f32)>,
}

impl DragController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_dragging(&self) -> bool {
        self.grabbed.is_some() || self.last_free.is_some()
    }

    /// Index of the control point currently being dragged
    pub fn grabbed_point(&self) -> Option<usize> {
        self.grabbed
    }

    /// Pointer pressed at (`px`, `py`). Returns true when the curve changed.
    pub fn on_press(&mut self, curve: &mut Curve, layout: &CurveLayout, px: f32, py: f32) -> bool {
        match curve.curve_type() {
            CurveType::Free => {
                let target = layout.unproject(curve, px, py);
                let column = curve.column_for(target.x);
                curve.set_sample_column(column, target.y);
                self.last_free = Some((column, target.y));
                true
            }
            CurveType::Spline | CurveType::Linear => {
                let target = layout.unproject(curve, px, py);
                let closest = closest_point(curve, layout, px);

                match closest {
                    Some((index, distance)) if distance <= MIN_DISTANCE => {
                        self.grabbed = Some(index);
                        self.move_grabbed(curve, target)
                    }
                    _ => {
                        let mut points = curve.control_points().to_vec();
                        let index = points
                            .iter()
                            .position(|p| p.x > target.x)
                            .unwrap_or(points.len());
                        points.insert(index, target);
                        curve.set_points(points);
                        self.grabbed = Some(index);
                        true
                    }
                }
            }
        }
    }

    /// Pointer moved to (`px`, `py`) while pressed.
    pub fn on_drag(&mut self, curve: &mut Curve, layout: &CurveLayout, px: f32, py: f32) -> bool {
        match curve.curve_type() {
            CurveType::Free => {
                let Some((last_column, last_y)) = self.last_free else {
                    return false;
                };
                let target = layout.unproject(curve, px, py);
                let column = curve.column_for(target.x);
                if column == last_column && target.y == last_y {
                    return false;
                }

                // Fill every column between the anchor and the pointer so a
                // fast drag leaves no gaps.
                if column != last_column {
                    let span = column as f32 - last_column as f32;
                    let step = if column > last_column { 1 } else { -1isize };
                    let mut c = last_column as isize;
                    loop {
                        c += step;
                        let frac = (c as f32 - last_column as f32) / span;
                        let y = last_y + (target.y - last_y) * frac;
                        curve.set_sample_column(c as usize, y);
                        if c as usize == column {
                            break;
                        }
                    }
                } else {
                    curve.set_sample_column(column, target.y);
                }
                self.last_free = Some((column, target.y));
                true
            }
            CurveType::Spline | CurveType::Linear => {
                if self.grabbed.is_none() {
                    return false;
                }
                let target = layout.unproject(curve, px, py);
                self.move_grabbed(curve, target)
            }
        }
    }

    /// Pointer released; ends the drag.
    pub fn on_release(&mut self) {
        self.grabbed = None;
        self.last_free = None;
    }

    /// Move the grabbed point to `target`, swallowing control points whose
    /// pixel column it now occupies, and keep the list sorted by x.
    fn move_grabbed(&mut self, curve: &mut Curve, target: ControlPoint) -> bool {
        let Some(grabbed) = self.grabbed else {
            return false;
        };
        let mut points = curve.control_points().to_vec();
        if points[grabbed] == target {
            return false;
        }

        // Swallowing must never leave fewer than two control points, so a
        // drag that would collapse the curve onto a single x stops short.
        let coincident = points
            .iter()
            .enumerate()
            .filter(|&(i, p)| i != grabbed && (p.x - target.x).abs() < f32::EPSILON)
            .count();
        if points.len() - coincident < 2 {
            return false;
        }
        points[grabbed] = target;

        // Swallow other points that collapse onto the same x.
        let mut index = grabbed;
        let mut i = 0;
        while i < points.len() {
            if i != index && (points[i].x - target.x).abs() < f32::EPSILON {
                points.remove(i);
                if i < index {
                    index -= 1;
                }
            } else {
                i += 1;
            }
        }

        // Re-sort by x and follow the moved point to its new slot.
        let moved = points.remove(index);
        let new_index = points
            .iter()
            .position(|p| p.x > moved.x)
            .unwrap_or(points.len());
        points.insert(new_index, moved);

        self.grabbed = Some(new_index);
        curve.set_points(points);
        true
    }
}

fn closest_point(curve: &Curve, layout: &CurveLayout, px: f32) -> Option<(usize, f32)> {
    curve
        .control_points()
        .iter()
        .enumerate()
        .map(|(i, p)| {
            let (point_px, _) = layout.project(curve, *p);
            (i, (point_px - px).abs())
        })
        .min_by(|a, b| a.1.total_cmp(&b.1))
}
