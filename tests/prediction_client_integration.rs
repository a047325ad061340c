mod support;

use student_predictor::config::ServiceConfig;
use student_predictor::prediction::{
    FormField, FormState, HttpPredictionClient, PredictionError, PredictionService, ServiceHealth,
};
use support::http_stub::{StubServer, unreachable_base_url};

fn client_for(base_url: &str) -> HttpPredictionClient {
    HttpPredictionClient::new(&ServiceConfig::for_base_url(base_url).expect("valid base url"))
}

fn sample_form() -> FormState {
    let mut form = FormState::default();
    form.set(FormField::WeeklySelfStudyHours, "5");
    form.set(FormField::AttendancePercentage, "85");
    form.set(FormField::ClassParticipation, "4");
    form.set(FormField::TotalScore, "67.5");
    form
}

#[test]
fn posts_json_body_to_predict_endpoint() {
    let server = StubServer::respond_once("200 OK", r#"{"prediction":"pass","probability":0.87}"#);
    let client = client_for(&server.base_url);

    let result = client.predict(&sample_form().to_request()).expect("prediction");
    assert_eq!(result.display_label(), "PASS");
    assert_eq!(result.confidence_text().as_deref(), Some("87.00%"));

    let request = server.next_request();
    assert_eq!(request.method, "POST");
    assert_eq!(request.path, "/predict");
    assert_eq!(request.header("Content-Type"), Some("application/json"));
    let body: serde_json::Value = serde_json::from_str(&request.body).expect("json body");
    assert_eq!(
        body,
        serde_json::json!({
            "weekly_self_study_hours": 5.0,
            "attendance_percentage": 85.0,
            "class_participation": 4.0,
            "total_score": 67.5,
        })
    );
}

#[test]
fn keeps_base_path_prefix() {
    let server = StubServer::respond_once("200 OK", r#"{"prediction":"fail"}"#);
    let client = client_for(&format!("{}/api/", server.base_url));

    let result = client.predict(&sample_form().to_request()).expect("prediction");
    assert_eq!(result.probability(), None);
    assert_eq!(server.next_request().path, "/api/predict");
}

#[test]
fn non_numeric_field_is_posted_as_null() {
    let server = StubServer::respond_once("200 OK", r#"{"prediction":"fail","probability":0.1}"#);
    let client = client_for(&server.base_url);
    let mut form = sample_form();
    form.set(FormField::TotalScore, "n/a");

    client.predict(&form.to_request()).expect("prediction");
    let body: serde_json::Value =
        serde_json::from_str(&server.next_request().body).expect("json body");
    assert!(body["total_score"].is_null());
}

#[test]
fn server_error_maps_to_status_error() {
    let server = StubServer::respond_once(
        "500 Internal Server Error",
        r#"{"detail":"Model not loaded"}"#,
    );
    let client = client_for(&server.base_url);

    let err = client.predict(&sample_form().to_request()).unwrap_err();
    match err {
        PredictionError::Status { code, body } => {
            assert_eq!(code, 500);
            assert!(body.contains("Model not loaded"));
        }
        other => panic!("expected status error, got {other:?}"),
    }
}

#[test]
fn malformed_body_maps_to_json_error() {
    let server = StubServer::respond_once("200 OK", "not json");
    let client = client_for(&server.base_url);
    let err = client.predict(&sample_form().to_request()).unwrap_err();
    assert!(matches!(err, PredictionError::Json(_)));
}

#[test]
fn unreachable_service_maps_to_transport_error() {
    let client = client_for(&unreachable_base_url());
    let err = client.predict(&sample_form().to_request()).unwrap_err();
    assert!(matches!(err, PredictionError::Transport(_)));
}

#[test]
fn health_endpoint_reports_online() {
    let server = StubServer::respond_once("200 OK", r#"{"status":"ok"}"#);
    let client = client_for(&server.base_url);
    assert_eq!(client.health().expect("health"), ServiceHealth::Online);
    let request = server.next_request();
    assert_eq!(request.method, "GET");
    assert_eq!(request.path, "/health");
}

#[test]
fn health_endpoint_error_status_is_offline() {
    let server = StubServer::respond_once("503 Service Unavailable", "{}");
    let client = client_for(&server.base_url);
    assert_eq!(
        client.health().expect("health"),
        ServiceHealth::Offline("HTTP 503".to_string())
    );
}
