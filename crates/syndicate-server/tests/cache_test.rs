//! Tests de los endpoints de cache.

mod helpers;

use std::sync::Arc;

use axum::http::StatusCode;
use helpers::*;
use serde_json::Value;

#[tokio::test]
async fn invalidate_all_forces_refetch() {
    let feed = Arc::new(StubFeed::returning(sample_records()));
    let client = client_with(feed.clone());

    client.get("/dining?loc=1").await;
    client.get("/dining?loc=1").await;
    assert_eq!(feed.calls(), 1);

    let response = client.delete("/cache").await;
    response.assert_status(StatusCode::OK);

    client.get("/dining?loc=1").await;
    assert_eq!(feed.calls(), 2);
}

#[tokio::test]
async fn invalidate_namespace_leaves_other_surfaces() {
    let feed = Arc::new(StubFeed::returning(sample_records()));
    let client = client_with(feed.clone());

    client.get("/dining?loc=1").await;
    client.get("/render/dining_feed?output=headline").await;
    assert_eq!(feed.calls(), 2);

    let response = client.delete("/cache/dining").await;
    response.assert_status(StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(body["invalidated"], 1);

    client.get("/render/dining_feed?output=headline").await;
    assert_eq!(feed.calls(), 2);

    client.get("/dining?loc=1").await;
    assert_eq!(feed.calls(), 3);
}

#[tokio::test]
async fn invalidate_unknown_namespace_is_bad_request() {
    let response = client().delete("/cache/unknown").await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["error"], "Bad Request");
}

#[tokio::test]
async fn touch_bumps_generation() {
    let feed = Arc::new(StubFeed::returning(sample_records()));
    let client = client_with(feed.clone());

    let body: Value = client.post("/cache/touch").await.json();
    assert_eq!(body["generation"], 1);

    let body: Value = client.post("/cache/touch").await.json();
    assert_eq!(body["generation"], 2);
}

#[tokio::test]
async fn touch_refreshes_feed_surface_only() {
    let feed = Arc::new(StubFeed::returning(sample_records()));
    let client = client_with(feed.clone());

    client.get("/dining").await;
    client.get("/render/dining_feed?output=cards").await;
    assert_eq!(feed.calls(), 2);

    client.post("/cache/touch").await;

    client.get("/dining").await;
    assert_eq!(feed.calls(), 2);

    client.get("/render/dining_feed?output=cards").await;
    assert_eq!(feed.calls(), 3);
}
