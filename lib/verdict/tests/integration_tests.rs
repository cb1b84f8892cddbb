//! Integration tests for `ServiceClient` + `HyperClient` using wiremock.

use std::sync::Once;

use serde::{Deserialize, Serialize};
use verdict::{ErrorPayload, HyperClient, Outcome, ServiceClient, Telemetry};
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{body_json, method, path},
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
struct Widget {
    id: u64,
    name: String,
}

static TRACING: Once = Once::new();

fn init_tracing() {
    TRACING.call_once(|| {
        drop(Telemetry::new("verdict-tests").init());
    });
}

fn service_for(mock_server: &MockServer) -> ServiceClient<HyperClient> {
    init_tracing();
    let client = HyperClient::builder().with_logging().build();
    ServiceClient::new(client, mock_server.uri()).expect("base url")
}

#[tokio::test]
async fn success_response_decodes_expected_payload() {
    let mock_server = MockServer::start().await;

    let widget = Widget {
        id: 7,
        name: "gear".to_string(),
    };

    Mock::given(method("GET"))
        .and(path("/widgets/7"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&widget))
        .mount(&mock_server)
        .await;

    let service = service_for(&mock_server);
    let outcome = service.get::<Widget>("/widgets/7").await.expect("send");

    assert_eq!(outcome, Outcome::Success(widget));
}

#[tokio::test]
async fn client_error_decodes_shared_error_shape() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/widgets/0"))
        .respond_with(ResponseTemplate::new(404).set_body_json(serde_json::json!({
            "code": "NOT_FOUND",
            "message": "no such id"
        })))
        .mount(&mock_server)
        .await;

    let service = service_for(&mock_server);
    let outcome = service.get::<Widget>("/widgets/0").await.expect("send");

    assert_eq!(
        outcome,
        Outcome::Error(ErrorPayload::new("NOT_FOUND", "no such id"))
    );
}

#[tokio::test]
async fn server_error_decodes_shared_error_shape() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/widgets/7"))
        .respond_with(ResponseTemplate::new(503).set_body_json(serde_json::json!({
            "code": "UNAVAILABLE",
            "message": "retry later"
        })))
        .mount(&mock_server)
        .await;

    let service = service_for(&mock_server);
    let outcome = service.get::<Widget>("/widgets/7").await.expect("send");

    // The caller, not the classifier, decides whether to retry.
    assert_eq!(
        outcome,
        Outcome::Error(ErrorPayload::new("UNAVAILABLE", "retry later"))
    );
}

#[tokio::test]
async fn post_round_trip() {
    let mock_server = MockServer::start().await;

    let input = serde_json::json!({"name": "gear"});
    let created = Widget {
        id: 42,
        name: "gear".to_string(),
    };

    Mock::given(method("POST"))
        .and(path("/widgets"))
        .and(body_json(&input))
        .respond_with(ResponseTemplate::new(201).set_body_json(&created))
        .mount(&mock_server)
        .await;

    let service = service_for(&mock_server);
    let outcome = service
        .post::<_, Widget>("/widgets", &input)
        .await
        .expect("send");

    assert_eq!(outcome, Outcome::Success(created));
}

#[tokio::test]
async fn nonstandard_status_is_a_classification_failure() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/widgets/7"))
        .respond_with(ResponseTemplate::new(999).set_body_string("whatever"))
        .mount(&mock_server)
        .await;

    let service = service_for(&mock_server);
    let err = service
        .get::<Widget>("/widgets/7")
        .await
        .expect_err("classification failure");

    assert!(err.is_classification(), "got: {err}");
    assert_eq!(err.status(), Some(999));
}

#[tokio::test]
async fn redirect_status_is_a_classification_failure() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/widgets/7"))
        .respond_with(ResponseTemplate::new(301).insert_header("Location", "/elsewhere"))
        .mount(&mock_server)
        .await;

    let service = service_for(&mock_server);
    let err = service
        .get::<Widget>("/widgets/7")
        .await
        .expect_err("classification failure");

    assert!(err.is_classification(), "got: {err}");
    assert_eq!(err.status(), Some(301));
}

#[tokio::test]
async fn malformed_success_body_is_a_decode_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/widgets/7"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not-json"))
        .mount(&mock_server)
        .await;

    let service = service_for(&mock_server);
    let err = service
        .get::<Widget>("/widgets/7")
        .await
        .expect_err("decode error");

    assert!(err.is_decode(), "got: {err}");
    assert!(!err.is_classification());
}

#[tokio::test]
async fn timeout_surfaces_as_transport_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/slow"))
        .respond_with(ResponseTemplate::new(200).set_delay(std::time::Duration::from_secs(5)))
        .mount(&mock_server)
        .await;

    init_tracing();
    let client = HyperClient::builder()
        .timeout(std::time::Duration::from_millis(100))
        .build();
    let service = ServiceClient::new(client, mock_server.uri()).expect("base url");

    let err = service.get::<Widget>("/slow").await.expect_err("timeout");
    assert!(err.is_timeout(), "got: {err}");
}

#[tokio::test]
async fn connection_refused_surfaces_as_transport_error() {
    init_tracing();
    let service =
        ServiceClient::new(HyperClient::new(), "http://127.0.0.1:1").expect("base url");

    let err = service
        .get::<Widget>("/widgets/7")
        .await
        .expect_err("connection error");
    assert!(err.is_connection(), "got: {err}");
}
