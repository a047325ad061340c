use crate::prediction::{FormField, FormState, PredictionResult, ServiceHealth};

/// Message shown for every failed submission.
pub const CONNECTION_ERROR_MESSAGE: &str = "Error connecting to server";
/// Message shown next to the first empty field on a blocked submission.
pub const MISSING_FIELD_MESSAGE: &str = "Please fill out this field.";

/// Stage of the submit/respond cycle. Exactly one holds at a time.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum RequestLifecycle {
    #[default]
    Idle,
    Submitting,
    Succeeded(PredictionResult),
    Failed(String),
}

impl RequestLifecycle {
    pub fn is_submitting(&self) -> bool {
        matches!(self, Self::Submitting)
    }

    pub fn result(&self) -> Option<&PredictionResult> {
        match self {
            Self::Succeeded(result) => Some(result),
            _ => None,
        }
    }
}

/// UI state for the prediction form.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PredictionFormUiState {
    /// Raw field text.
    pub form: FormState,
    pub lifecycle: RequestLifecycle,
    /// Field that blocked the last submit attempt because it was empty.
    pub missing_field: Option<FormField>,
    /// Field the renderer should focus on the next frame.
    pub focus_requested: Option<FormField>,
}

/// What the footer knows about the prediction service.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ServiceUiState {
    /// Endpoint requests are posted to.
    pub predict_url: String,
    pub health: ServiceHealth,
}
