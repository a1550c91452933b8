//! Tests del endpoint de health y del middleware.

mod helpers;

use axum::http::StatusCode;
use helpers::client;
use serde_json::Value;
use uuid::Uuid;

#[tokio::test]
async fn health_returns_up() {
    let response = client().get("/health").await;

    response.assert_status(StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(body["status"], "UP");
}

#[tokio::test]
async fn response_includes_request_id() {
    let response = client().get("/health").await;

    response.assert_header_exists("x-request-id");
}

#[tokio::test]
async fn request_id_is_uuid_v4() {
    let response = client().get("/health").await;

    let id = response.header("x-request-id").unwrap();
    let parsed = Uuid::parse_str(id).unwrap();

    assert_eq!(parsed.get_version_num(), 4);
}

#[tokio::test]
async fn propagates_incoming_request_id() {
    let custom_id = "my-custom-request-id-12345";

    let response = client()
        .get_with_headers("/health", vec![("x-request-id", custom_id)])
        .await;

    response.assert_header("x-request-id", custom_id);
}

#[tokio::test]
async fn metrics_endpoint_responds() {
    let response = client().get("/metrics").await;

    response.assert_status(StatusCode::OK);
}

#[tokio::test]
async fn unknown_route_is_404() {
    let response = client().get("/nope").await;

    response.assert_status(StatusCode::NOT_FOUND);
}
