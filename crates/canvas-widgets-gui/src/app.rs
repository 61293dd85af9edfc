use eframe::egui;
use ruler_layout::{Orientation, TrackSourceId, Unit};

use crate::gamma_dialog::GammaDialog;
use crate::logger::AppLogger;
use crate::ruler_widget::RulerWidget;

/// The canvas is the single motion source both rulers track.
const CANVAS_SOURCE: TrackSourceId = TrackSourceId(1);

pub struct CanvasWidgetsApp {
    logger: AppLogger,
    unit: Unit,
    h_ruler: RulerWidget,
    v_ruler: RulerWidget,
    gamma_dialog: GammaDialog,
    correction: Option<Vec<f32>>,
    show_log: bool,
    /// Document units per canvas pixel is 1/zoom
    zoom: f64,
    /// Document coordinate at the canvas origin
    origin: f64,
}

impl CanvasWidgetsApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, logger: AppLogger) -> Self {
        log::info!("Canvas widgets started");
        Self {
            logger,
            unit: Unit::default(),
            h_ruler: RulerWidget::new(Orientation::Horizontal, CANVAS_SOURCE),
            v_ruler: RulerWidget::new(Orientation::Vertical, CANVAS_SOURCE),
            gamma_dialog: GammaDialog::new(),
            correction: None,
            show_log: false,
            zoom: 1.0,
            origin: 0.0,
        }
    }
}

impl eframe::App for CanvasWidgetsApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("menu").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label("Units:");
                let mut unit = self.unit;
                egui::ComboBox::from_id_salt("units")
                    .selected_text(unit_label(unit))
                    .show_ui(ui, |ui| {
                        ui.selectable_value(&mut unit, Unit::Decimal, "Decimal");
                        ui.selectable_value(&mut unit, Unit::Inches, "Inches");
                    });
                if unit != self.unit {
                    self.unit = unit;
                    self.h_ruler.set_unit(unit);
                    self.v_ruler.set_unit(unit);
                    log::info!("Switched units to {}", unit_label(unit));
                }

                ui.separator();
                ui.label("Zoom:");
                ui.add(
                    egui::Slider::new(&mut self.zoom, 0.1..=8.0)
                        .logarithmic(true)
                        .fixed_decimals(2),
                );
                ui.label("Origin:");
                ui.add(egui::DragValue::new(&mut self.origin).speed(1.0));

                ui.separator();
                if ui.button("Gamma correction…").clicked() {
                    self.gamma_dialog.toggle();
                }

                ui.separator();
                ui.checkbox(&mut self.show_log, "Log");
            });
        });

        egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
            ui.label(
                self.logger
                    .latest_message()
                    .unwrap_or_else(|| "Ready".to_string()),
            );
        });

        if self.show_log {
            egui::SidePanel::right("log").show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.heading("Log");
                    if ui.button("Clear").clicked() {
                        self.logger.clear();
                    }
                });
                egui::ScrollArea::vertical()
                    .stick_to_bottom(true)
                    .show(ui, |ui| {
                        for entry in self.logger.entries() {
                            ui.label(format!(
                                "{} {} {}",
                                entry.timestamp.format("%H:%M:%S"),
                                entry.level,
                                entry.message
                            ));
                        }
                    });
            });
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.spacing_mut().item_spacing = egui::Vec2::ZERO;

            let h_breadth = self.h_ruler.breadth(ui);
            let v_breadth = self.v_ruler.breadth(ui);

            ui.horizontal(|ui| {
                // Corner cell where the two rulers meet
                let (corner, _) = ui.allocate_exact_size(
                    egui::vec2(v_breadth, h_breadth),
                    egui::Sense::hover(),
                );
                ui.painter()
                    .rect_filled(corner, 0.0, ui.visuals().extreme_bg_color);

                let width = ui.available_width();
                self.h_ruler.show(ui, egui::vec2(width, h_breadth));
            });

            ui.horizontal(|ui| {
                let height = ui.available_height();
                self.v_ruler.show(ui, egui::vec2(v_breadth, height));

                let canvas_size = egui::vec2(ui.available_width(), height);
                let (canvas, response) =
                    ui.allocate_exact_size(canvas_size, egui::Sense::hover());

                // The visible document span follows the pan/zoom controls.
                let h_upper = self.origin + canvas.width() as f64 / self.zoom;
                let v_upper = self.origin + canvas.height() as f64 / self.zoom;
                self.h_ruler
                    .set_range(self.origin, h_upper, self.origin.abs().max(h_upper.abs()));
                self.v_ruler
                    .set_range(self.origin, v_upper, self.origin.abs().max(v_upper.abs()));

                let painter = ui.painter_at(canvas);
                painter.rect_filled(canvas, 0.0, egui::Color32::from_gray(24));
                paint_gradient(&painter, canvas, self.correction.as_deref());

                if let Some(pos) = response.hover_pos() {
                    let local = pos - canvas.min;
                    self.h_ruler
                        .pointer_moved(ui.ctx(), local.x as f64, local.y as f64);
                    self.v_ruler
                        .pointer_moved(ui.ctx(), local.x as f64, local.y as f64);

                    // Crosshair under the pointer
                    let stroke = egui::Stroke::new(1.0, egui::Color32::from_gray(90));
                    painter.line_segment(
                        [
                            egui::pos2(pos.x, canvas.top()),
                            egui::pos2(pos.x, canvas.bottom()),
                        ],
                        stroke,
                    );
                    painter.line_segment(
                        [
                            egui::pos2(canvas.left(), pos.y),
                            egui::pos2(canvas.right(), pos.y),
                        ],
                        stroke,
                    );
                }
            });
        });

        if let Some(table) = self.gamma_dialog.show(ctx) {
            log::info!("Applied correction curve ({} samples)", table.len());
            self.correction = Some(table);
        }
    }
}

fn unit_label(unit: Unit) -> &'static str {
    match unit {
        Unit::Decimal => "Decimal",
        Unit::Inches => "Inches",
    }
}

/// Grayscale ramp across the top of the canvas, run through the correction
/// table when one is set
fn paint_gradient(painter: &egui::Painter, canvas: egui::Rect, correction: Option<&[f32]>) {
    let bar = egui::Rect::from_min_size(
        canvas.min + egui::vec2(16.0, 16.0),
        egui::vec2(canvas.width() - 32.0, 24.0),
    );
    if bar.width() <= 0.0 {
        return;
    }

    let steps = 64;
    for i in 0..steps {
        let t = i as f32 / (steps - 1) as f32;
        let level = match correction {
            Some(table) if !table.is_empty() => {
                let index = (t * (table.len() - 1) as f32).round() as usize;
                table[index].clamp(0.0, 1.0)
            }
            _ => t,
        };
        let x0 = bar.left() + bar.width() * i as f32 / steps as f32;
        let x1 = bar.left() + bar.width() * (i + 1) as f32 / steps as f32;
        let cell = egui::Rect::from_min_max(egui::pos2(x0, bar.top()), egui::pos2(x1, bar.bottom()));
        painter.rect_filled(cell, 0.0, egui::Color32::from_gray((level * 255.0) as u8));
    }
}
