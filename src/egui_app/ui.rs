//! egui renderer for the predictor window.

mod form_panel;
mod status_bar;
pub mod style;

use crate::config::ServiceConfig;
use crate::egui_app::controller::EguiController;
use eframe::egui;
use std::time::Duration;

/// Minimum viewport size that keeps the form readable.
pub const MIN_VIEWPORT_SIZE: egui::Vec2 = egui::vec2(420.0, 520.0);
/// Poll interval while a request is outstanding, in case a wake-up is missed.
const PENDING_REPAINT_INTERVAL: Duration = Duration::from_millis(250);

/// Renders the egui UI using the shared controller state.
pub struct EguiApp {
    controller: EguiController,
    visuals_set: bool,
    context_registered: bool,
}

impl EguiApp {
    /// Create the app and kick off an initial service health probe.
    pub fn new(config: &ServiceConfig) -> Self {
        Self::with_controller(EguiController::from_config(config))
    }

    pub fn with_controller(mut controller: EguiController) -> Self {
        controller.check_service_health();
        Self {
            controller,
            visuals_set: false,
            context_registered: false,
        }
    }

    fn apply_visuals(&mut self, ctx: &egui::Context) {
        if self.visuals_set {
            return;
        }
        let mut visuals = egui::Visuals::dark();
        style::apply_visuals(&mut visuals);
        ctx.set_visuals(visuals);
        self.visuals_set = true;
    }

    fn register_context(&mut self, ctx: &egui::Context) {
        if self.context_registered {
            return;
        }
        self.controller.set_repaint_context(ctx.clone());
        self.context_registered = true;
    }
}

impl eframe::App for EguiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.register_context(ctx);
        self.apply_visuals(ctx);
        self.controller.tick();

        self.render_status_bar(ctx);
        egui::CentralPanel::default().show(ctx, |ui| {
            self.render_form_panel(ui);
        });

        if self.controller.has_pending_work() {
            ctx.request_repaint_after(PENDING_REPAINT_INTERVAL);
        }
    }
}
