//! HTTP client for the prediction service.

use serde::Deserialize;

use super::form::PredictionRequest;
use super::{PredictionResult, PredictionService, ServiceHealth};
use crate::config::ServiceConfig;
use crate::http_client;

const PREDICT_PATH: &str = "/predict";
const HEALTH_PATH: &str = "/health";
const MAX_PREDICTION_RESPONSE_BYTES: usize = 64 * 1024;
const MAX_ERROR_BODY_CHARS: usize = 512;

#[derive(Debug, thiserror::Error)]
pub enum PredictionError {
    #[error("HTTP error: {0}")]
    Transport(String),
    #[error("Server returned HTTP {code}: {body}")]
    Status { code: u16, body: String },
    #[error("JSON error: {0}")]
    Json(String),
    #[error("Unexpected response: {0}")]
    InvalidResponse(String),
}

#[derive(Clone, Debug, Deserialize)]
struct PredictResponseWire {
    prediction: Option<String>,
    #[serde(default)]
    probability: Option<f64>,
}

#[derive(Clone, Debug, Deserialize)]
struct HealthResponseWire {
    status: Option<String>,
}

/// Blocking client for `POST /predict` and `GET /health`.
pub struct HttpPredictionClient {
    agent: ureq::Agent,
    predict_url: String,
    health_url: String,
}

impl HttpPredictionClient {
    pub fn new(config: &ServiceConfig) -> Self {
        Self {
            agent: http_client::build_agent(config.timeouts),
            predict_url: config.endpoint(PREDICT_PATH),
            health_url: config.endpoint(HEALTH_PATH),
        }
    }

    pub fn predict_url(&self) -> &str {
        &self.predict_url
    }

    fn read_body(response: ureq::Response) -> Result<String, PredictionError> {
        http_client::read_response_text(response, MAX_PREDICTION_RESPONSE_BYTES)
            .map_err(|err| PredictionError::InvalidResponse(err.to_string()))
    }
}

impl PredictionService for HttpPredictionClient {
    fn predict(&self, request: &PredictionRequest) -> Result<PredictionResult, PredictionError> {
        let req = self
            .agent
            .post(&self.predict_url)
            .set("Accept", "application/json")
            .set("Content-Type", "application/json");
        let response = req.send_json(request).map_err(map_ureq_error)?;
        parse_prediction_response(&Self::read_body(response)?)
    }

    fn health(&self) -> Result<ServiceHealth, PredictionError> {
        let req = self
            .agent
            .get(&self.health_url)
            .set("Accept", "application/json");
        let response = match req.call() {
            Ok(response) => response,
            Err(ureq::Error::Status(code, _)) => {
                return Ok(ServiceHealth::Offline(format!("HTTP {code}")));
            }
            Err(ureq::Error::Transport(err)) => {
                return Err(PredictionError::Transport(err.to_string()));
            }
        };
        Ok(parse_health_response(&Self::read_body(response)?))
    }
}

fn map_ureq_error(err: ureq::Error) -> PredictionError {
    match err {
        ureq::Error::Status(code, response) => {
            let body = http_client::read_response_text(response, MAX_PREDICTION_RESPONSE_BYTES)
                .unwrap_or_else(|err| err.to_string());
            PredictionError::Status {
                code,
                body: truncate_chars(body.trim(), MAX_ERROR_BODY_CHARS),
            }
        }
        ureq::Error::Transport(err) => PredictionError::Transport(err.to_string()),
    }
}

/// Decode a `/predict` body into a result.
///
/// `prediction` must be a non-empty string. A missing, `null`, or non-finite
/// `probability` yields a result without confidence.
pub fn parse_prediction_response(body: &str) -> Result<PredictionResult, PredictionError> {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return Err(PredictionError::Json("Empty response body".to_string()));
    }
    let wire: PredictResponseWire = serde_json::from_str(trimmed)
        .map_err(|err| PredictionError::Json(format!("{err}: {trimmed}")))?;
    let label = wire
        .prediction
        .map(|label| label.trim().to_string())
        .filter(|label| !label.is_empty())
        .ok_or_else(|| PredictionError::InvalidResponse("missing prediction".to_string()))?;
    Ok(PredictionResult::new(
        label,
        wire.probability.filter(|value| value.is_finite()),
    ))
}

/// Decode a `/health` body; anything but `{"status":"ok"}` counts as offline.
pub fn parse_health_response(body: &str) -> ServiceHealth {
    match serde_json::from_str::<HealthResponseWire>(body.trim()) {
        Ok(HealthResponseWire {
            status: Some(status),
        }) if status.eq_ignore_ascii_case("ok") => ServiceHealth::Online,
        Ok(HealthResponseWire {
            status: Some(status),
        }) => ServiceHealth::Offline(format!("status {status:?}")),
        Ok(HealthResponseWire { status: None }) => {
            ServiceHealth::Offline("missing status".to_string())
        }
        Err(err) => ServiceHealth::Offline(format!("invalid health response: {err}")),
    }
}

fn truncate_chars(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((index, _)) => format!("{}…", &text[..index]),
        None => text.to_string(),
    }
}
