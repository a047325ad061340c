//! Library exports for the predictor binary and integration tests.
/// Application directory resolution.
pub mod app_dirs;
/// Service settings loading.
pub mod config;
/// Shared egui UI modules.
pub mod egui_app;
/// HTTP agent and bounded response helpers.
pub mod http_client;
/// Tracing subscriber setup.
pub mod logging;
/// Prediction service client and form types.
pub mod prediction;
