//! Cliente HTTP en proceso sobre el router real.

use std::sync::Arc;

use axum::{
    Router,
    body::Body,
    http::{HeaderMap, Request, StatusCode},
};
use http_body_util::BodyExt;
use syndicate_server::cache::MenuCache;
use syndicate_server::metrics::setup::detached_handle;
use syndicate_server::{AppState, MenuService, create_router};
use tower::ServiceExt;

use super::feed::{StubFeed, sample_records};

pub struct TestClient {
    app: Router,
}

impl TestClient {
    pub async fn get(&self, uri: &str) -> TestResponse {
        self.send("GET", uri, &[]).await
    }

    pub async fn get_with_headers(&self, uri: &str, headers: Vec<(&str, &str)>) -> TestResponse {
        self.send("GET", uri, &headers).await
    }

    pub async fn post(&self, uri: &str) -> TestResponse {
        self.send("POST", uri, &[]).await
    }

    pub async fn delete(&self, uri: &str) -> TestResponse {
        self.send("DELETE", uri, &[]).await
    }

    async fn send(&self, method: &str, uri: &str, headers: &[(&str, &str)]) -> TestResponse {
        let request = headers
            .iter()
            .fold(Request::builder().method(method).uri(uri), |b, (k, v)| b.header(*k, *v))
            .body(Body::empty())
            .unwrap();

        let response = self.app.clone().oneshot(request).await.unwrap();
        let (parts, body) = response.into_parts();
        TestResponse {
            status: parts.status,
            headers: parts.headers,
            body: body.collect().await.unwrap().to_bytes().to_vec(),
        }
    }
}

/// Status, headers y body ya leidos.
pub struct TestResponse {
    status: StatusCode,
    headers: HeaderMap,
    body: Vec<u8>,
}

impl TestResponse {
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }

    pub fn json<T: serde::de::DeserializeOwned>(&self) -> T {
        serde_json::from_slice(&self.body).unwrap()
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }

    pub fn assert_status(&self, expected: StatusCode) -> &Self {
        assert_eq!(self.status, expected, "body: {}", self.text());
        self
    }

    pub fn assert_content_type_contains(&self, expected: &str) -> &Self {
        let content_type = self.header("content-type").unwrap_or_default();
        assert!(content_type.contains(expected), "content-type: {content_type}");
        self
    }

    pub fn assert_header_exists(&self, name: &str) -> &Self {
        assert!(self.headers.contains_key(name), "missing header {name}");
        self
    }

    pub fn assert_header(&self, name: &str, expected: &str) -> &Self {
        assert_eq!(self.header(name), Some(expected), "header {name}");
        self
    }
}

/// Router completo sobre `feed` con una cache vacia.
pub fn client_with(feed: Arc<StubFeed>) -> TestClient {
    let service = MenuService::new(feed, MenuCache::default());
    TestClient {
        app: create_router(AppState::new(service), detached_handle()),
    }
}

/// Router completo sobre los registros de ejemplo.
pub fn client() -> TestClient {
    client_with(Arc::new(StubFeed::returning(sample_records())))
}
