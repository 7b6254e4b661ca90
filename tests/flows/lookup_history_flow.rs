//! Lookup → history flow
//!
//! A successful lookup over HTTP is recorded and served back newest first.

#[path = "../common/mod.rs"]
mod common;

use common::{domains_of, stored_entry, TestDomains, TestServer, TestServerBuilder};
use reqwest::StatusCode;
use serde_json::{json, Value};

async fn get_json(url: &str) -> (StatusCode, Value) {
    let response = reqwest::get(url).await.expect("request succeeds");
    let status = response.status();
    (status, response.json().await.expect("json body"))
}

#[tokio::test]
async fn test_lookup_is_recorded_with_peer_address() {
    let server = TestServer::start().await.expect("Failed to start server");
    server
        .resolver
        .insert(TestDomains::example(), &["93.184.216.34"])
        .await;

    let (status, query) = get_json(&server.url("/v1/tools/lookup?domain=example.com")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(query["client_ip"], "127.0.0.1");

    let (status, history) = get_json(&server.url("/v1/history")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(history.as_array().unwrap().len(), 1);
    assert_eq!(history[0], query);

    server.shutdown();
}

#[tokio::test]
async fn test_forwarded_client_address_is_recorded() {
    let server = TestServer::start().await.expect("Failed to start server");
    server
        .resolver
        .insert(TestDomains::example(), &["93.184.216.34"])
        .await;

    let response = reqwest::Client::new()
        .get(server.url("/v1/tools/lookup?domain=example.com"))
        .header("X-Forwarded-For", "203.0.113.50, 10.1.1.1")
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let (_, history) = get_json(&server.url("/v1/history")).await;
    assert_eq!(history[0]["client_ip"], "203.0.113.50");
}

#[tokio::test]
async fn test_only_ipv4_answers_are_kept() {
    let server = TestServer::start().await.expect("Failed to start server");
    server
        .resolver
        .insert(
            TestDomains::dual_stack(),
            &["2001:db8::1", "192.0.2.1", "::ffff:192.0.2.2", "192.0.2.3"],
        )
        .await;
    server
        .resolver
        .insert(TestDomains::ipv6_only(), &["2001:db8::2"])
        .await;

    let (_, query) = get_json(&server.url("/v1/tools/lookup?domain=dual.example.net")).await;
    assert_eq!(
        query["addresses"],
        json!([{ "ip": "192.0.2.1" }, { "ip": "192.0.2.2" }, { "ip": "192.0.2.3" }])
    );

    let (status, query) = get_json(&server.url("/v1/tools/lookup?domain=v6only.example.org")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(query["addresses"], json!([]));

    // Both lookups are recorded, including the one without IPv4 answers
    assert_eq!(server.store.len("queries").await, 2);
}

#[tokio::test]
async fn test_failed_lookups_are_not_recorded() {
    let server = TestServer::start().await.expect("Failed to start server");

    let (status, body) = get_json(&server.url("/v1/tools/lookup?domain=nonexistent.invalid")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(
        body["message"],
        format!(
            "Unable to find IP addresses for domain: {}",
            TestDomains::nonexistent()
        )
    );

    let (status, _) = get_json(&server.url("/v1/tools/lookup")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (_, history) = get_json(&server.url("/v1/history")).await;
    assert_eq!(history, json!([]));
}

#[tokio::test]
async fn test_history_is_newest_first_and_bounded() {
    let server = TestServerBuilder::new()
        .with_max_query_history(3)
        .build()
        .await
        .expect("Failed to start server");
    for i in 0..5 {
        let domain = format!("host{i}.example");
        server.resolver.insert(&domain, &["10.0.0.1"]).await;
        let (status, _) = get_json(&server.url(&format!("/v1/tools/lookup?domain={domain}"))).await;
        assert_eq!(status, StatusCode::OK);
    }

    let (_, history) = get_json(&server.url("/v1/history")).await;
    assert_eq!(
        domains_of(&history),
        vec!["host4.example", "host3.example", "host2.example"]
    );

    // Reads never trim the underlying list
    assert_eq!(server.store.len("queries").await, 5);
}

#[tokio::test]
async fn test_history_reads_are_idempotent() {
    let server = TestServer::start().await.expect("Failed to start server");
    for i in 0..3 {
        server
            .store
            .push_raw("queries", &stored_entry(&format!("d{i}.example"), 1_700_000_000 + i, &["10.0.0.1"]))
            .await;
    }

    let (_, first) = get_json(&server.url("/v1/history")).await;
    let (_, second) = get_json(&server.url("/v1/history")).await;
    assert_eq!(first, second);
    assert_eq!(domains_of(&first), vec!["d2.example", "d1.example", "d0.example"]);
}

#[tokio::test]
async fn test_corrupt_and_legacy_entries() {
    let server = TestServer::start().await.expect("Failed to start server");
    server
        .store
        .push_raw("queries", &stored_entry("old.example", 1_600_000_000, &["10.0.0.1"]))
        .await;
    server.store.push_raw("queries", "{not json").await;
    server
        .store
        .push_raw(
            "queries",
            r#"{"addresses":null,"client_ip":"10.0.0.9","created_at":1650000000,"domain":"legacy.example"}"#,
        )
        .await;

    let (status, history) = get_json(&server.url("/v1/history")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(domains_of(&history), vec!["legacy.example", "old.example"]);
    assert_eq!(history[0]["addresses"], json!([]));
}
