use super::jobs::PredictionJobResult;
use super::*;
use crate::prediction::FormField;

impl EguiController {
    /// Store the raw text of one field. No validation happens here.
    pub fn update_field(&mut self, field: FormField, value: impl Into<String>) {
        self.ui.prediction.form.set(field, value);
        if self.ui.prediction.missing_field == Some(field) {
            self.ui.prediction.missing_field = None;
        }
    }

    /// Whether the Predict control should accept input.
    pub fn can_submit(&self) -> bool {
        !self.ui.prediction.lifecycle.is_submitting()
    }

    /// Start a prediction for the current form contents.
    ///
    /// Returns false when nothing was sent: a request is already in flight or
    /// a field is empty.
    pub fn submit_prediction(&mut self) -> bool {
        if !self.can_submit() {
            return false;
        }
        if let Some(field) = self.ui.prediction.form.first_missing() {
            self.ui.prediction.missing_field = Some(field);
            self.ui.prediction.focus_requested = Some(field);
            tracing::debug!("Submission blocked; {} is empty", field.key());
            self.set_status(MISSING_FIELD_MESSAGE, StatusTone::Warning);
            return false;
        }
        self.ui.prediction.missing_field = None;

        let unparsable = self.ui.prediction.form.unparsable_fields();
        if !unparsable.is_empty() {
            let keys: Vec<&str> = unparsable.iter().map(|field| field.key()).collect();
            tracing::warn!("Submitting non-numeric input as null: {}", keys.join(", "));
        }
        let request = self.ui.prediction.form.to_request();
        let Some(request_id) = self.jobs.begin_prediction(Arc::clone(&self.service), request)
        else {
            return false;
        };
        tracing::info!(request_id, ?request, "Prediction requested");
        self.ui.prediction.lifecycle = RequestLifecycle::Submitting;
        self.set_status("Requesting prediction...", StatusTone::Busy);
        true
    }

    /// Clear every field. An outstanding request still completes normally.
    pub fn reset_form(&mut self) {
        self.ui.prediction.form.clear();
        self.ui.prediction.missing_field = None;
        self.ui.prediction.focus_requested = Some(FormField::ALL[0]);
        if !self.ui.prediction.lifecycle.is_submitting() {
            self.ui.prediction.lifecycle = RequestLifecycle::Idle;
            self.set_status("Form cleared", StatusTone::Idle);
        }
    }

    pub(super) fn apply_prediction_result(&mut self, message: PredictionJobResult) {
        if !self.jobs.finish_prediction(message.request_id) {
            tracing::debug!(
                request_id = message.request_id,
                "Dropping response for a request that is no longer active"
            );
            return;
        }
        match message.result {
            Ok(result) => {
                tracing::info!(
                    request_id = message.request_id,
                    label = result.label(),
                    probability = ?result.probability(),
                    "Prediction received"
                );
                let summary = match result.confidence_text() {
                    Some(confidence) => {
                        format!("Prediction: {} ({confidence})", result.display_label())
                    }
                    None => format!("Prediction: {}", result.display_label()),
                };
                self.set_status(summary, StatusTone::Info);
                self.ui.prediction.lifecycle = RequestLifecycle::Succeeded(result);
            }
            Err(err) => {
                tracing::warn!(request_id = message.request_id, "Prediction failed: {err}");
                self.set_status(CONNECTION_ERROR_MESSAGE, StatusTone::Error);
                self.ui.prediction.lifecycle =
                    RequestLifecycle::Failed(CONNECTION_ERROR_MESSAGE.to_string());
            }
        }
    }
}
