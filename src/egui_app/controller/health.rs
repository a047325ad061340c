use super::*;
use crate::prediction::{PredictionError, ServiceHealth};

impl EguiController {
    /// Probe `GET /health` in the background. Ignored while a probe is running.
    pub fn check_service_health(&mut self) {
        if !self.jobs.begin_health_check(Arc::clone(&self.service)) {
            return;
        }
        self.ui.service.health = ServiceHealth::Checking;
    }

    pub(super) fn apply_health_result(&mut self, result: Result<ServiceHealth, PredictionError>) {
        let health = result.unwrap_or_else(|err| ServiceHealth::Offline(err.to_string()));
        match &health {
            ServiceHealth::Online => tracing::info!("Prediction service is online"),
            ServiceHealth::Offline(reason) => {
                tracing::warn!("Prediction service unavailable: {reason}");
                if !self.ui.prediction.lifecycle.is_submitting() {
                    self.set_status(
                        format!("Prediction service unavailable: {reason}"),
                        StatusTone::Warning,
                    );
                }
            }
            ServiceHealth::Unknown | ServiceHealth::Checking => {}
        }
        self.ui.service.health = health;
    }
}
