//! Integration tests for the CORS allowlist.
//!
//! Only explicitly configured origins are ever reflected; the default
//! allowlist is empty.

use std::sync::Arc;

use media_gateway::storage::MemoryStore;
use media_gateway::GatewayConfig;

mod common;

#[tokio::test]
async fn test_unknown_origin_is_not_reflected() {
    let addr = common::start_gateway(GatewayConfig::default(), Arc::new(MemoryStore::new())).await;
    let client = reqwest::Client::new();

    let response = client
        .request(reqwest::Method::OPTIONS, format!("http://{addr}/login"))
        .header("Origin", "https://evil.com")
        .header("Access-Control-Request-Method", "POST")
        .send()
        .await
        .unwrap();

    assert!(response
        .headers()
        .get("access-control-allow-origin")
        .is_none());
}

#[tokio::test]
async fn test_configured_origin_is_allowed() {
    let mut config = GatewayConfig::default();
    config.cors.allowed_origins = vec!["https://console.example.com".to_string()];

    let addr = common::start_gateway(config, Arc::new(MemoryStore::new())).await;
    let client = reqwest::Client::new();

    let response = client
        .request(reqwest::Method::OPTIONS, format!("http://{addr}/login"))
        .header("Origin", "https://console.example.com")
        .header("Access-Control-Request-Method", "POST")
        .send()
        .await
        .unwrap();

    assert_eq!(
        response.headers()["access-control-allow-origin"],
        "https://console.example.com"
    );
}
