//! Controller that owns the form state and bridges it to the prediction service.

mod background_jobs;
mod health;
mod jobs;
mod prediction;


use crate::config::ServiceConfig;
use crate::egui_app::state::*;
use crate::egui_app::ui::style::StatusTone;
use crate::prediction::{HttpPredictionClient, PredictionService};
use jobs::ControllerJobs;
use std::sync::Arc;

/// Maintains app state and bridges the prediction client to the egui UI.
pub struct EguiController {
    pub ui: UiState,
    service: Arc<dyn PredictionService>,
    jobs: ControllerJobs,
}

impl EguiController {
    /// Create a controller backed by any prediction service.
    pub fn new(service: Arc<dyn PredictionService>, predict_url: impl Into<String>) -> Self {
        let mut ui = UiState::default();
        ui.service.predict_url = predict_url.into();
        Self {
            ui,
            service,
            jobs: ControllerJobs::new(),
        }
    }

    /// Create a controller that talks HTTP to the configured service.
    pub fn from_config(config: &ServiceConfig) -> Self {
        let client = HttpPredictionClient::new(config);
        let predict_url = client.predict_url().to_string();
        tracing::info!("Prediction endpoint: {predict_url}");
        Self::new(Arc::new(client), predict_url)
    }

    /// Let worker threads wake the UI when they finish.
    pub fn set_repaint_context(&mut self, ctx: egui::Context) {
        self.jobs.set_repaint_context(ctx);
    }

    /// Apply finished background work. Call once per frame.
    pub fn tick(&mut self) {
        self.poll_background_jobs();
    }

    /// True while a prediction or health probe is outstanding.
    pub fn has_pending_work(&self) -> bool {
        self.jobs.prediction_in_progress() || self.jobs.health_check_in_progress()
    }

    /// Toggle the rolling status log panel.
    pub fn toggle_status_log(&mut self) {
        self.ui.show_status_log = !self.ui.show_status_log;
    }

    pub(crate) fn set_status(&mut self, text: impl Into<String>, tone: StatusTone) {
        self.ui.status.set(text.into(), tone);
    }
}
