//! Prediction service types: form input, request/response, and the client seam.

mod form;

pub mod api;

pub use api::{HttpPredictionClient, PredictionError};
pub use form::{FormField, FormState, PredictionRequest};

/// Backend that classifies a student record.
///
/// Implementations block; callers run them off the UI thread.
pub trait PredictionService: Send + Sync {
    /// Classify one submitted form.
    fn predict(&self, request: &PredictionRequest) -> Result<PredictionResult, PredictionError>;

    /// Probe whether the service is reachable and ready.
    fn health(&self) -> Result<ServiceHealth, PredictionError>;
}

/// Classification returned by the service.
#[derive(Clone, Debug, PartialEq)]
pub struct PredictionResult {
    label: String,
    probability: Option<f64>,
}

impl PredictionResult {
    /// Wrap a label and optional probability in `0.0..=1.0`.
    pub fn new(label: impl Into<String>, probability: Option<f64>) -> Self {
        Self {
            label: label.into(),
            probability,
        }
    }

    /// Label as returned by the service, e.g. `"pass"`.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Probability of the label, when the service sent one.
    pub fn probability(&self) -> Option<f64> {
        self.probability
    }

    /// Label upper-cased for display.
    pub fn display_label(&self) -> String {
        self.label.to_uppercase()
    }

    /// Probability as a percentage with two decimals, e.g. `"87.00%"`.
    pub fn confidence_text(&self) -> Option<String> {
        if self.label.is_empty() {
            return None;
        }
        self.probability
            .map(|probability| format!("{:.2}%", probability * 100.0))
    }

    /// True for a `pass` label, ignoring case.
    pub fn is_pass(&self) -> bool {
        self.label.trim().eq_ignore_ascii_case("pass")
    }
}

/// Result of probing `GET /health`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum ServiceHealth {
    #[default]
    Unknown,
    Checking,
    Online,
    Offline(String),
}

impl ServiceHealth {
    pub fn badge_label(&self) -> &'static str {
        match self {
            Self::Unknown => "Unknown",
            Self::Checking => "Checking",
            Self::Online => "Online",
            Self::Offline(_) => "Offline",
        }
    }
}
