//! Helpers to convert controller state into egui-facing view structs.

use crate::egui_app::state::RequestLifecycle;

/// How the result card should be coloured.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ResultTone {
    Pass,
    Fail,
    Error,
}

/// Render-ready projection of a finished request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResultView {
    /// Upper-cased label such as `PASS`, or the error message.
    pub label: String,
    /// Formatted confidence such as `87.00%`; present only with a label and probability.
    pub confidence: Option<String>,
    pub tone: ResultTone,
}

impl ResultView {
    pub fn heading(&self) -> String {
        match self.tone {
            ResultTone::Error => self.label.clone(),
            ResultTone::Pass | ResultTone::Fail => format!("Prediction: {}", self.label),
        }
    }
}

/// Project the lifecycle into what the result area shows, if anything.
pub fn result_view(lifecycle: &RequestLifecycle) -> Option<ResultView> {
    match lifecycle {
        RequestLifecycle::Idle | RequestLifecycle::Submitting => None,
        RequestLifecycle::Succeeded(result) => Some(ResultView {
            label: result.display_label(),
            confidence: result.confidence_text(),
            tone: if result.is_pass() {
                ResultTone::Pass
            } else {
                ResultTone::Fail
            },
        }),
        RequestLifecycle::Failed(message) => Some(ResultView {
            label: message.clone(),
            confidence: None,
            tone: ResultTone::Error,
        }),
    }
}

pub fn submit_caption(lifecycle: &RequestLifecycle) -> &'static str {
    if lifecycle.is_submitting() {
        "Predicting..."
    } else {
        "Predict"
    }
}
