//! Store outage flow
//!
//! Lookups keep answering while the history store is down; listing fails.

#[path = "../common/mod.rs"]
mod common;

use common::{TestDomains, TestServer};
use reqwest::StatusCode;
use serde_json::{json, Value};

#[tokio::test]
async fn test_lookup_succeeds_while_store_is_down() {
    let server = TestServer::start().await.expect("Failed to start server");
    server
        .resolver
        .insert(TestDomains::example(), &["93.184.216.34"])
        .await;
    server.store.set_down(true).await;

    let response = reqwest::get(server.url("/v1/tools/lookup?domain=example.com"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let query: Value = response.json().await.unwrap();
    assert_eq!(query["addresses"], json!([{ "ip": "93.184.216.34" }]));

    server.store.set_down(false).await;
    assert_eq!(server.store.len("queries").await, 0);
}

#[tokio::test]
async fn test_history_fails_while_store_is_down() {
    let server = TestServer::start().await.expect("Failed to start server");
    server.store.set_down(true).await;

    let response = reqwest::get(server.url("/v1/history")).await.unwrap();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body, json!({ "message": "Error retrieving query history" }));
}

#[tokio::test]
async fn test_health_ignores_store_state() {
    let server = TestServer::start().await.expect("Failed to start server");
    server.store.set_down(true).await;

    let response = reqwest::get(server.url("/health")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert!(response.text().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_history_recovers_after_outage() {
    let server = TestServer::start().await.expect("Failed to start server");
    server
        .resolver
        .insert(TestDomains::example(), &["93.184.216.34"])
        .await;

    server.store.set_down(true).await;
    reqwest::get(server.url("/v1/tools/lookup?domain=example.com"))
        .await
        .unwrap();
    server.store.set_down(false).await;
    reqwest::get(server.url("/v1/tools/lookup?domain=example.com"))
        .await
        .unwrap();

    let history: Value = reqwest::get(server.url("/v1/history"))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(history.as_array().unwrap().len(), 1);
}
