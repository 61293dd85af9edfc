//! egui adapter for the ruler layout engine
//!
//! Feeds the allocation and font metrics in, rasterizes the tick scene and
//! the position marker, and turns redraw requests into repaint requests.

use eframe::egui;
use ruler_layout::{
    BorderInsets, Orientation, RedrawRequest, Ruler, RulerGeometry, TextMetrics, TrackSourceId,
};

pub struct RulerWidget {
    ruler: Ruler,
    source: TrackSourceId,
}

impl RulerWidget {
    pub fn new(orientation: Orientation, source: TrackSourceId) -> Self {
        let mut ruler = Ruler::new(orientation);
        if let Err(err) = ruler.add_track_source(source) {
            log::warn!("Ruler track source registration failed: {err}");
        }
        Self { ruler, source }
    }

    pub fn set_unit(&mut self, unit: ruler_layout::Unit) {
        self.ruler.set_unit(unit);
    }

    pub fn set_range(&mut self, lower: f64, upper: f64, max_size: f64) {
        self.ruler.set_range(lower, upper, max_size);
    }

    /// Size across the measurement axis the ruler wants, in points
    pub fn breadth(&self, ui: &egui::Ui) -> f32 {
        let (w, h) = self
            .ruler
            .preferred_size(&text_metrics(ui), BorderInsets::default());
        match self.ruler.orientation() {
            Orientation::Horizontal => h as f32,
            Orientation::Vertical => w as f32,
        }
    }

    /// Forward pointer motion from the tracked canvas, in ruler-local
    /// coordinates.
    pub fn pointer_moved(&mut self, ctx: &egui::Context, x: f64, y: f64) {
        match self.ruler.pointer_moved(self.source, x, y) {
            Ok(request) => apply_redraw_request(ctx, request),
            Err(err) => log::warn!("Dropped motion event: {err}"),
        }
    }

    pub fn show(&mut self, ui: &mut egui::Ui, size: egui::Vec2) -> egui::Response {
        let (rect, response) = ui.allocate_exact_size(size, egui::Sense::hover());
        if !ui.is_rect_visible(rect) {
            return response;
        }

        let metrics = text_metrics(ui);
        self.ruler
            .allocate(RulerGeometry::new(rect.width() as i32, rect.height() as i32));

        // Idle hook: a coalesced marker repaint pending from earlier motion
        // lands on this frame.
        if self.ruler.on_idle().is_some() {
            ui.ctx().request_repaint();
        }

        let painter = ui.painter_at(rect);
        let visuals = ui.visuals();
        painter.rect_filled(rect, 0.0, visuals.extreme_bg_color);

        let tick_stroke = egui::Stroke::new(1.0, visuals.text_color());
        let font_id = egui::TextStyle::Small.resolve(ui.style());

        if let Some(scene) = self.ruler.paint(&metrics) {
            if let Some(baseline) = scene.baseline {
                painter.line_segment(
                    [
                        rect.min + egui::vec2(baseline.x0 as f32, baseline.y0 as f32),
                        rect.min + egui::vec2(baseline.x1 as f32, baseline.y1 as f32),
                    ],
                    tick_stroke,
                );
            }
            for tick in &scene.ticks {
                painter.line_segment(
                    [
                        rect.min + egui::vec2(tick.x0 as f32, tick.y0 as f32),
                        rect.min + egui::vec2(tick.x1 as f32, tick.y1 as f32),
                    ],
                    tick_stroke,
                );
            }
            for glyph in &scene.glyphs {
                painter.text(
                    rect.min + egui::vec2(glyph.x as f32, glyph.y as f32),
                    egui::Align2::LEFT_TOP,
                    &glyph.text,
                    font_id.clone(),
                    visuals.text_color(),
                );
            }
        }

        // The marker moves independently of the ticks, so it is drawn over
        // the scene on every frame.
        let marker = self.ruler.current_indicator_rect();
        if !marker.is_empty() {
            let points = self
                .ruler
                .marker_triangle(marker)
                .map(|(x, y)| rect.min + egui::vec2(x as f32, y as f32));
            painter.add(egui::Shape::convex_polygon(
                points.to_vec(),
                visuals.warn_fg_color,
                egui::Stroke::NONE,
            ));
            self.ruler.mark_indicator_drawn(marker);
        }

        response
    }
}

fn apply_redraw_request(ctx: &egui::Context, request: RedrawRequest) {
    match request {
        RedrawRequest::None => {}
        RedrawRequest::Immediate(_) => ctx.request_repaint(),
        // The deferred repaint is picked up by the idle hook next frame.
        RedrawRequest::Deferred => ctx.request_repaint(),
    }
}

fn text_metrics(ui: &egui::Ui) -> TextMetrics {
    let font_id = egui::TextStyle::Small.resolve(ui.style());
    let glyph_height = ui.fonts_mut(|fonts| fonts.row_height(&font_id)) as f64;
    TextMetrics { glyph_height }
}
