//! Service metadata and IP validation over HTTP

#[path = "../common/mod.rs"]
mod common;

use common::{TestServer, TestServerBuilder};
use reqwest::StatusCode;
use serde_json::{json, Value};

#[tokio::test]
async fn test_root_reports_service_info() {
    let server = TestServerBuilder::new()
        .with_kubernetes(true)
        .build()
        .await
        .expect("Failed to start server");

    let response = reqwest::get(server.url("/")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = response.json().await.unwrap();

    assert_eq!(body["version"], "0.1.0");
    assert_eq!(body["kubernetes"], true);
    assert!(body["date"].as_i64().unwrap() > 1_600_000_000);
}

#[tokio::test]
async fn test_validate_round_trip() {
    let server = TestServer::start().await.expect("Failed to start server");
    let client = reqwest::Client::new();
    let url = server.url("/v1/tools/validate");

    let cases = [
        ("10.0.0.1", StatusCode::OK),
        ("::ffff:10.0.0.1", StatusCode::OK),
        ("fe80::1", StatusCode::OK),
        ("10.0.0.256", StatusCode::BAD_REQUEST),
        ("example.com", StatusCode::BAD_REQUEST),
        (" 10.0.0.1", StatusCode::BAD_REQUEST),
    ];

    for (ip, expected) in cases {
        let response = client
            .post(&url)
            .json(&json!({ "ip": ip }))
            .send()
            .await
            .unwrap();
        assert_eq!(response.status(), expected, "{ip:?}");
    }
}

#[tokio::test]
async fn test_validate_rejects_non_json_body() {
    let server = TestServer::start().await.expect("Failed to start server");

    let response = reqwest::Client::new()
        .post(server.url("/v1/tools/validate"))
        .header("content-type", "application/json")
        .body("ip=10.0.0.1")
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = response.json().await.unwrap();
    assert!(body["message"]
        .as_str()
        .unwrap()
        .starts_with("Invalid request: "));
}

#[tokio::test]
async fn test_validate_does_not_touch_history() {
    let server = TestServer::start().await.expect("Failed to start server");

    reqwest::Client::new()
        .post(server.url("/v1/tools/validate"))
        .json(&json!({ "ip": "192.168.0.1" }))
        .send()
        .await
        .unwrap();

    assert_eq!(server.store.len("queries").await, 0);
}
