#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use eframe::egui;

mod app;
mod curve_widget;
mod gamma_dialog;
mod logger;
mod ruler_widget;

fn main() -> anyhow::Result<()> {
    let logger = logger::AppLogger::new(500);
    if let Err(err) = logger.clone().init() {
        eprintln!("Failed to install logger: {err}");
    }

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([960.0, 680.0])
            .with_title("Canvas Widgets"),
        ..Default::default()
    };

    eframe::run_native(
        "Canvas Widgets",
        options,
        Box::new(move |cc| Ok(Box::new(app::CanvasWidgetsApp::new(cc, logger)))),
    )
    .map_err(|err| anyhow::anyhow!("eframe exited with an error: {err}"))
}
