mod common;

use std::sync::Arc;

use axum::http::StatusCode;
use axum_test::TestServer;
use common::{StubRepository, launches};
use serde_json::{Value, json};
use wiremock::matchers::{body_partial_json, method};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn test_health_check_healthy() {
    let upstream = MockServer::start().await;
    Mock::given(method("POST"))
        .and(body_partial_json(json!({ "operationName": "Ping" })))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "data": { "__typename": "Query" } })),
        )
        .mount(&upstream)
        .await;

    let state = common::create_test_state_with(
        Arc::new(StubRepository::new(launches(1))),
        &upstream.uri(),
    );
    let server = TestServer::new(common::test_app(state)).unwrap();

    let response = server.get("/health").await;
    response.assert_status_ok();

    let body: Value = response.json();
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
    assert_eq!(body["checks"]["graphql"]["status"], "ok");
    assert_eq!(body["checks"]["cache"]["status"], "ok");
    assert_eq!(body["checks"]["feeds"]["status"], "ok");
    assert_eq!(body["checks"]["feeds"]["message"], "Open sessions: 0/64");
}

#[tokio::test]
async fn test_health_check_degraded_when_graphql_unreachable() {
    let state = common::create_test_state(Arc::new(StubRepository::new(launches(1))));
    let server = TestServer::new(common::test_app(state)).unwrap();

    let response = server.get("/health").await;
    response.assert_status(StatusCode::SERVICE_UNAVAILABLE);

    let body: Value = response.json();
    assert_eq!(body["status"], "degraded");
    assert_eq!(body["checks"]["graphql"]["status"], "error");
}

#[tokio::test]
async fn test_health_check_degraded_on_graphql_errors() {
    let upstream = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": null,
            "errors": [{ "message": "service unavailable" }]
        })))
        .mount(&upstream)
        .await;

    let state = common::create_test_state_with(
        Arc::new(StubRepository::new(launches(1))),
        &upstream.uri(),
    );
    let server = TestServer::new(common::test_app(state)).unwrap();

    server
        .get("/health")
        .await
        .assert_status(StatusCode::SERVICE_UNAVAILABLE);
}
