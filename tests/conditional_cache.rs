//! Integration tests for the conditional cache flow.

use std::sync::Arc;

use media_gateway::storage::MemoryStore;
use media_gateway::GatewayConfig;

mod common;

const PNG_BYTES: &[u8] = &[137, 80, 78, 71, 13, 10, 26, 10];

fn seeded_store() -> Arc<MemoryStore> {
    let store = Arc::new(MemoryStore::new());
    store.insert("media", "segments/42/last_frame.png", PNG_BYTES.to_vec());
    store.insert("media", "models/detail.safetensors", vec![0u8; 64]);
    store
}

#[tokio::test]
async fn test_serve_then_not_modified_round_trip() {
    let addr = common::start_gateway(GatewayConfig::default(), seeded_store()).await;
    let client = reqwest::Client::new();
    let url = format!("http://{addr}/files?path=s3://media/segments/42/last_frame.png");

    let first = client.get(&url).send().await.unwrap();
    assert_eq!(first.status(), 200);
    assert_eq!(first.headers()["content-type"], "image/png");
    assert_eq!(
        first.headers()["cache-control"],
        "public, max-age=31536000, immutable"
    );
    let etag = first.headers()["etag"].to_str().unwrap().to_string();
    assert_eq!(first.bytes().await.unwrap().as_ref(), PNG_BYTES);

    // Replaying the validator must short-circuit with an empty body
    let second = client
        .get(&url)
        .header("If-None-Match", &etag)
        .send()
        .await
        .unwrap();
    assert_eq!(second.status(), 304);
    assert_eq!(second.headers()["etag"].to_str().unwrap(), etag);
    assert!(second.bytes().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_stale_validator_serves_full_body() {
    let addr = common::start_gateway(GatewayConfig::default(), seeded_store()).await;
    let client = reqwest::Client::new();
    let url = format!("http://{addr}/files?path=s3://media/segments/42/last_frame.png");

    let response = client
        .get(&url)
        .header("If-None-Match", "\"stale\"")
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 200);
    assert!(response.headers().contains_key("etag"));
    assert_eq!(response.bytes().await.unwrap().as_ref(), PNG_BYTES);
}

#[tokio::test]
async fn test_opaque_objects_are_never_cacheable() {
    let addr = common::start_gateway(GatewayConfig::default(), seeded_store()).await;
    let client = reqwest::Client::new();
    let url = format!("http://{addr}/files?path=s3://media/models/detail.safetensors");

    let first = client.get(&url).send().await.unwrap();
    assert_eq!(first.status(), 200);
    assert_eq!(first.headers()["cache-control"], "no-store");
    assert_eq!(first.headers()["content-type"], "application/octet-stream");
    assert!(
        !first.headers().contains_key("etag"),
        "opaque objects must not carry a validator"
    );
}

#[tokio::test]
async fn test_missing_object_is_404() {
    let addr = common::start_gateway(GatewayConfig::default(), seeded_store()).await;
    let client = reqwest::Client::new();

    let response = client
        .get(format!("http://{addr}/files?path=s3://media/absent.png"))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 404);
}

#[tokio::test]
async fn test_non_s3_path_is_400() {
    let addr = common::start_gateway(GatewayConfig::default(), seeded_store()).await;
    let client = reqwest::Client::new();

    let response = client
        .get(format!("http://{addr}/files?path=/etc/passwd"))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 400);
}

#[tokio::test]
async fn test_storage_outage_is_502() {
    let store = seeded_store();
    let addr = common::start_gateway(GatewayConfig::default(), store.clone()).await;
    let client = reqwest::Client::new();
    let url = format!("http://{addr}/files?path=s3://media/segments/42/last_frame.png");

    store.set_unavailable(true);
    let response = client.get(&url).send().await.unwrap();
    assert_eq!(response.status(), 502);
}

#[tokio::test]
async fn test_conditional_match_skips_storage_entirely() {
    let store = seeded_store();
    let addr = common::start_gateway(GatewayConfig::default(), store.clone()).await;
    let client = reqwest::Client::new();
    let url = format!("http://{addr}/files?path=s3://media/segments/42/last_frame.png");

    let first = client.get(&url).send().await.unwrap();
    let etag = first.headers()["etag"].to_str().unwrap().to_string();

    // With the backend down, a conditional match must still answer 304
    store.set_unavailable(true);
    let second = client
        .get(&url)
        .header("If-None-Match", &etag)
        .send()
        .await
        .unwrap();
    assert_eq!(second.status(), 304);
}
