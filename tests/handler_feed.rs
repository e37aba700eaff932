mod common;

use std::sync::Arc;

use axum::http::StatusCode;
use axum_test::TestServer;
use common::{ScriptedRepository, Step, StubRepository, launch, launch_with_video, launches};
use serde_json::Value;

fn make_server(repo: Arc<dyn launch_portal::domain::repositories::LaunchRepository>) -> TestServer {
    let state = common::create_test_state(repo);
    TestServer::new(common::test_app(state)).unwrap()
}

async fn open_session(server: &TestServer, query: &str) -> String {
    let html = server.get(&format!("/launches{query}")).await.text();
    common::session_id(&html)
}

// ─── next ────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_next_appends_until_end() {
    let server = make_server(Arc::new(StubRepository::new(launches(30))));
    let session = open_session(&server, "").await;

    let body: Value = server
        .post(&format!("/launches/feed/{session}/next"))
        .await
        .json();
    assert_eq!(body["appended"], 12);
    assert_eq!(body["total"], 24);
    assert_eq!(body["reached_end"], false);
    assert!(body["error"].is_null());
    assert!(body["html"].as_str().unwrap().contains("Mission L12"));
    assert!(!body["html"].as_str().unwrap().contains("Mission L11"));

    let body: Value = server
        .post(&format!("/launches/feed/{session}/next"))
        .await
        .json();
    assert_eq!(body["appended"], 6);
    assert_eq!(body["total"], 30);
    assert_eq!(body["reached_end"], true);

    let body: Value = server
        .post(&format!("/launches/feed/{session}/next"))
        .await
        .json();
    assert_eq!(body["appended"], 0);
    assert!(body["html"].as_str().unwrap().trim().is_empty());
    assert_eq!(body["reached_end"], true);
}

#[tokio::test]
async fn test_next_failure_then_retry_same_offset() {
    let first_page: Vec<_> = (0..12).map(|i| launch(&format!("A{i}"))).collect();
    let second_page: Vec<_> = (0..12).map(|i| launch(&format!("B{i}"))).collect();
    let repo = Arc::new(ScriptedRepository::new(vec![
        Step::Page(first_page),
        Step::Fail,
        Step::Page(second_page),
    ]));
    let server = make_server(repo.clone());
    let session = open_session(&server, "").await;

    let failed: Value = server
        .post(&format!("/launches/feed/{session}/next"))
        .await
        .json();
    assert_eq!(failed["appended"], 0);
    assert_eq!(failed["total"], 12);
    assert!(failed["error"].is_string());

    let retried: Value = server
        .post(&format!("/launches/feed/{session}/next"))
        .await
        .json();
    assert_eq!(retried["appended"], 12);
    assert_eq!(retried["total"], 24);
    assert!(retried["error"].is_null());

    assert_eq!(repo.offsets(), vec![0, 12, 12]);
}

#[tokio::test]
async fn test_unknown_session_is_not_found() {
    let server = make_server(Arc::new(StubRepository::new(launches(3))));

    let response = server
        .post(&format!("/launches/feed/{}/next", "0".repeat(32)))
        .await;
    response.assert_status(StatusCode::NOT_FOUND);
    let body: Value = response.json();
    assert_eq!(body["error"]["code"], "not_found");

    server
        .post("/launches/feed/not-a-session/next")
        .await
        .assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_next_continues_after_filtered_empty_first_page() {
    let mut all = launches(12);
    all.push(launch_with_video("V1"));
    let server = make_server(Arc::new(StubRepository::new(all)));
    let session = open_session(&server, "?video=1&page_size=12").await;

    let body: Value = server
        .post(&format!("/launches/feed/{session}/next"))
        .await
        .json();
    assert_eq!(body["appended"], 1);
    assert_eq!(body["total"], 1);
    assert_eq!(body["reached_end"], true);
    assert!(body["html"].as_str().unwrap().contains("Mission V1"));
}

// ─── reset ───────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_reset_replaces_list_with_filtered_first_page() {
    let mut all = launches(5);
    all.insert(1, launch_with_video("V1"));
    all.insert(4, launch_with_video("V2"));
    let server = make_server(Arc::new(StubRepository::new(all)));
    let session = open_session(&server, "?page_size=2").await;

    let body: Value = server
        .post(&format!("/launches/feed/{session}/reset?video=1&page_size=50"))
        .await
        .json();

    let html = body["html"].as_str().unwrap();
    assert_eq!(body["appended"], 2);
    assert_eq!(body["total"], 2);
    assert_eq!(body["reached_end"], true);
    assert!(html.contains("Mission V1"));
    assert!(html.contains("Mission V2"));
    assert!(html.contains("Com Vídeo"));
    assert!(!html.contains("Mission L0"));
}

#[tokio::test]
async fn test_reset_without_filter_starts_over() {
    let server = make_server(Arc::new(StubRepository::new(launches(10))));
    let session = open_session(&server, "?page_size=4").await;

    server
        .post(&format!("/launches/feed/{session}/next"))
        .await
        .assert_status_ok();

    let body: Value = server
        .post(&format!("/launches/feed/{session}/reset?page_size=4"))
        .await
        .json();
    assert_eq!(body["total"], 4);
    assert!(body["html"].as_str().unwrap().contains("Mission L0"));
}

// ─── close ───────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_close_removes_session() {
    let server = make_server(Arc::new(StubRepository::new(launches(30))));
    let session = open_session(&server, "").await;

    server
        .post(&format!("/launches/feed/{session}/close"))
        .await
        .assert_status(StatusCode::NO_CONTENT);

    server
        .post(&format!("/launches/feed/{session}/next"))
        .await
        .assert_status(StatusCode::NOT_FOUND);

    // Closing twice is harmless.
    server
        .post(&format!("/launches/feed/{session}/close"))
        .await
        .assert_status(StatusCode::NO_CONTENT);
}
