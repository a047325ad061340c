//! Shared state types for the egui UI.

mod prediction;
mod status;

pub use prediction::{
    CONNECTION_ERROR_MESSAGE, MISSING_FIELD_MESSAGE, PredictionFormUiState, RequestLifecycle,
    ServiceUiState,
};
pub use status::{STATUS_LOG_LIMIT, StatusBarState};

/// Top-level UI model consumed by the egui renderer.
#[derive(Clone, Debug)]
pub struct UiState {
    pub status: StatusBarState,
    pub prediction: PredictionFormUiState,
    pub service: ServiceUiState,
    /// Whether the status log panel is expanded.
    pub show_status_log: bool,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            status: StatusBarState::idle(),
            prediction: PredictionFormUiState::default(),
            service: ServiceUiState::default(),
            show_status_log: false,
        }
    }
}
