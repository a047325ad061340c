#![deny(missing_docs)]
#![deny(warnings)]

//! Entry point for the egui-based student performance predictor.
#![cfg_attr(
    all(not(debug_assertions), target_os = "windows"),
    windows_subsystem = "windows"
)]
use eframe::egui;
use student_predictor::config;
use student_predictor::egui_app::ui::{EguiApp, MIN_VIEWPORT_SIZE};
use student_predictor::logging;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    if let Err(err) = logging::init() {
        eprintln!("Logging disabled: {err}");
    }

    let service_config = config::load_service_config();
    if let Err(err) = &service_config {
        tracing::error!("Failed to load service config: {err}");
    }

    let viewport = egui::ViewportBuilder::default()
        .with_title("Student Performance Predictor")
        .with_inner_size([480.0, 600.0])
        .with_min_inner_size(MIN_VIEWPORT_SIZE);
    let native_options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };

    eframe::run_native(
        "Student Performance Predictor",
        native_options,
        Box::new(move |_cc| match service_config {
            Ok(config) => Ok(Box::new(EguiApp::new(&config))),
            Err(err) => Ok(Box::new(LaunchError {
                message: format!("Failed to load config: {err}"),
            })),
        }),
    )?;
    Ok(())
}

/// Minimal fallback app to display initialization errors.
struct LaunchError {
    message: String,
}

impl eframe::App for LaunchError {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.heading("Failed to start UI");
                ui.label(&self.message);
            });
        });
    }
}
