//! Gamma-correction dialog
//!
//! A window holding a curve editor, a curve-type selector, a gamma entry,
//! and reset/apply controls. Applying hands the host a sampled lookup table.

use curve_edit::{Curve, CurveType};
use eframe::egui;

use crate::curve_widget::CurveWidget;

/// Samples in the lookup table handed back on apply
const TABLE_SIZE: usize = 256;

pub struct GammaDialog {
    open: bool,
    curve: Curve,
    gamma_text: String,
    widget: CurveWidget,
}

impl GammaDialog {
    pub fn new() -> Self {
        Self {
            open: false,
            curve: Curve::unit(),
            gamma_text: "1.0".to_string(),
            widget: CurveWidget::new(),
        }
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    /// Show the dialog. Returns the correction table when the user applies
    /// the curve.
    pub fn show(&mut self, ctx: &egui::Context) -> Option<Vec<f32>> {
        if !self.open {
            return None;
        }

        let mut applied = None;
        let mut open = self.open;
        egui::Window::new("Gamma Correction")
            .open(&mut open)
            .resizable(false)
            .show(ctx, |ui| {
                self.widget
                    .show(ui, &mut self.curve, egui::vec2(256.0, 256.0));

                let mut curve_type = self.curve.curve_type();
                ui.horizontal(|ui| {
                    ui.label("Curve type:");
                    egui::ComboBox::from_id_salt("curve_type")
                        .selected_text(type_label(curve_type))
                        .show_ui(ui, |ui| {
                            ui.selectable_value(&mut curve_type, CurveType::Spline, "Spline");
                            ui.selectable_value(&mut curve_type, CurveType::Linear, "Linear");
                            ui.selectable_value(&mut curve_type, CurveType::Free, "Free");
                        });
                });
                if curve_type != self.curve.curve_type() {
                    self.curve.set_curve_type(curve_type);
                }

                ui.horizontal(|ui| {
                    ui.label("Gamma:");
                    ui.add(egui::TextEdit::singleline(&mut self.gamma_text).desired_width(60.0));
                    if ui.button("Set gamma").clicked() {
                        match self.gamma_text.trim().parse::<f32>() {
                            Ok(gamma) => match self.curve.set_gamma(gamma) {
                                Ok(()) => log::info!("Gamma curve set to {gamma}"),
                                Err(err) => log::warn!("{err}"),
                            },
                            Err(_) => {
                                log::warn!("Gamma value '{}' is not a number", self.gamma_text)
                            }
                        }
                    }
                });

                ui.separator();
                ui.horizontal(|ui| {
                    if ui.button("Reset").clicked() {
                        self.curve.reset();
                        log::info!("Curve reset to identity");
                    }
                    if ui.button("Apply").clicked() {
                        applied = Some(self.curve.sample(TABLE_SIZE));
                    }
                });
            });
        self.open = open;
        applied
    }
}

fn type_label(curve_type: CurveType) -> &'static str {
    match curve_type {
        CurveType::Spline => "Spline",
        CurveType::Linear => "Linear",
        CurveType::Free => "Free",
    }
}
