mod support;

use std::time::Duration;

use student_predictor::config;
use student_predictor::egui_app::controller::EguiController;
use student_predictor::egui_app::state::{CONNECTION_ERROR_MESSAGE, RequestLifecycle};
use student_predictor::egui_app::view_model;
use student_predictor::prediction::FormField;
use support::http_stub::{StubServer, unreachable_base_url};
use support::predictor_env::PredictorEnvGuard;
use tempfile::TempDir;

struct ControllerHarness {
    _env: PredictorEnvGuard,
    _temp: TempDir,
    controller: EguiController,
}

impl ControllerHarness {
    fn new(api_url: Option<&str>, settings: Option<&str>) -> Self {
        let temp = tempfile::tempdir().expect("create tempdir");
        let env = PredictorEnvGuard::new()
            .config_home(temp.path().to_path_buf())
            .api_url(api_url);
        if let Some(settings) = settings {
            let path = config::config_path().expect("config path");
            std::fs::write(path, settings).expect("write settings");
        }
        let service_config = config::load_service_config().expect("load service config");
        Self {
            _env: env,
            _temp: temp,
            controller: EguiController::from_config(&service_config),
        }
    }

    fn fill(&mut self) {
        for (field, value) in [
            (FormField::WeeklySelfStudyHours, "6"),
            (FormField::AttendancePercentage, "92"),
            (FormField::ClassParticipation, "7"),
            (FormField::TotalScore, "71"),
        ] {
            self.controller.update_field(field, value);
        }
    }

    fn wait_for_completion(&mut self) {
        for _ in 0..400 {
            self.controller.tick();
            if !self.controller.ui.prediction.lifecycle.is_submitting() {
                return;
            }
            std::thread::sleep(Duration::from_millis(5));
        }
        panic!("prediction did not complete");
    }
}

#[test]
fn env_override_routes_submission_and_renders_result() {
    let server = StubServer::respond_once("200 OK", r#"{"prediction":"pass","probability":0.87}"#);
    let mut harness = ControllerHarness::new(Some(&server.base_url), None);
    assert_eq!(
        harness.controller.ui.service.predict_url,
        format!("{}/predict", server.base_url)
    );
    harness.fill();

    assert!(harness.controller.submit_prediction());
    assert!(!harness.controller.can_submit());
    harness.wait_for_completion();

    let view = view_model::result_view(&harness.controller.ui.prediction.lifecycle)
        .expect("result shown");
    assert_eq!(view.label, "PASS");
    assert_eq!(view.confidence.as_deref(), Some("87.00%"));

    let body: serde_json::Value =
        serde_json::from_str(&server.next_request().body).expect("json body");
    assert_eq!(body["attendance_percentage"], serde_json::json!(92.0));
}

#[test]
fn settings_file_url_is_used_without_env_override() {
    let server = StubServer::respond_once("200 OK", r#"{"prediction":"fail","probability":0.2}"#);
    let settings = format!("[service]\nbase_url = \"{}\"\n", server.base_url);
    let mut harness = ControllerHarness::new(None, Some(&settings));
    harness.fill();

    harness.controller.submit_prediction();
    harness.wait_for_completion();

    let view = view_model::result_view(&harness.controller.ui.prediction.lifecycle)
        .expect("result shown");
    assert_eq!(view.label, "FAIL");
    assert_eq!(view.confidence.as_deref(), Some("20.00%"));
}

#[test]
fn unreachable_service_shows_connection_error() {
    let url = unreachable_base_url();
    let mut harness = ControllerHarness::new(Some(&url), None);
    harness.fill();

    harness.controller.submit_prediction();
    harness.wait_for_completion();

    assert_eq!(
        harness.controller.ui.prediction.lifecycle,
        RequestLifecycle::Failed(CONNECTION_ERROR_MESSAGE.to_string())
    );
    let view = view_model::result_view(&harness.controller.ui.prediction.lifecycle)
        .expect("error shown");
    assert_eq!(view.confidence, None);
}

#[test]
fn default_url_points_at_local_service() {
    let harness = ControllerHarness::new(None, None);
    assert_eq!(
        harness.controller.ui.service.predict_url,
        "http://localhost:8000/predict"
    );
}
