//! egui adapter for the curve editor
//!
//! Paints the grid, the interpolated curve and its control points, and maps
//! pointer presses and drags onto the drag controller.

use curve_edit::{ControlPoint, Curve, CurveLayout, CurveType, DragController};
use eframe::egui;

pub struct CurveWidget {
    drag: DragController,
}

impl CurveWidget {
    pub fn new() -> Self {
        Self {
            drag: DragController::new(),
        }
    }

    /// Returns true when the pointer edited the curve this frame.
    pub fn show(&mut self, ui: &mut egui::Ui, curve: &mut Curve, size: egui::Vec2) -> bool {
        let (rect, response) = ui.allocate_exact_size(size, egui::Sense::click_and_drag());
        let layout = CurveLayout::new(rect.width(), rect.height());

        let mut changed = false;
        if let Some(pos) = response.interact_pointer_pos() {
            let local = pos - rect.min;
            if response.drag_started() || response.clicked() {
                changed |= self.drag.on_press(curve, &layout, local.x, local.y);
            } else if response.dragged() {
                changed |= self.drag.on_drag(curve, &layout, local.x, local.y);
            }
        }
        if response.drag_stopped() {
            self.drag.on_release();
        }

        if ui.is_rect_visible(rect) {
            self.paint(ui, curve, &layout, rect);
        }
        changed
    }

    fn paint(&self, ui: &egui::Ui, curve: &Curve, layout: &CurveLayout, rect: egui::Rect) {
        let painter = ui.painter_at(rect);
        let visuals = ui.visuals();
        painter.rect_filled(rect, 2.0, visuals.extreme_bg_color);

        // Quarter grid
        let grid_stroke = egui::Stroke::new(1.0, visuals.faint_bg_color);
        for i in 1..4 {
            let t = i as f32 / 4.0;
            let x = rect.left() + rect.width() * t;
            let y = rect.top() + rect.height() * t;
            painter.line_segment([egui::pos2(x, rect.top()), egui::pos2(x, rect.bottom())], grid_stroke);
            painter.line_segment([egui::pos2(rect.left(), y), egui::pos2(rect.right(), y)], grid_stroke);
        }

        // The curve itself, one sample per pixel column
        let columns = (rect.width() as usize).max(2);
        let (min_x, max_x) = curve.x_bounds();
        let samples = curve.sample(columns);
        let last = (columns - 1) as f32;
        let points: Vec<egui::Pos2> = samples
            .iter()
            .enumerate()
            .map(|(i, &y)| {
                let x = min_x + (max_x - min_x) * i as f32 / last;
                let (px, py) = layout.project(curve, ControlPoint::new(x, y));
                rect.min + egui::vec2(px, py)
            })
            .collect();
        painter.add(egui::Shape::line(
            points,
            egui::Stroke::new(1.5, visuals.text_color()),
        ));

        // Control point handles, except in free-hand mode
        if curve.curve_type() != CurveType::Free {
            for (i, point) in curve.control_points().iter().enumerate() {
                let (px, py) = layout.project(curve, *point);
                let center = rect.min + egui::vec2(px, py);
                let color = if self.drag.grabbed_point() == Some(i) {
                    visuals.warn_fg_color
                } else {
                    visuals.text_color()
                };
                painter.circle_filled(center, 3.0, color);
            }
        }
    }
}
