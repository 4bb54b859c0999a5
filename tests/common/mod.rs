//! Shared helpers for driving the router in-process.

#![allow(dead_code)]

use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::Router;
use pessoa_api::http_server::app_router;
use pessoa_api::store::PersonStore;
use serde_json::Value;
use tower::ServiceExt;

/// Fresh store plus a router bound to it
pub fn test_app() -> (Arc<PersonStore>, Router) {
    let store = Arc::new(PersonStore::new());
    let router = app_router(Arc::clone(&store));
    (store, router)
}

/// Send a request with an optional raw body, returning status and body bytes
pub async fn send_raw(app: &Router, method: &str, uri: &str, body: Option<&str>) -> (StatusCode, Vec<u8>) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(raw) => builder
            .header("content-type", "application/json")
            .body(Body::from(raw.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, bytes.to_vec())
}

/// Send a request with an optional JSON body and parse the JSON response
pub async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let raw = body.map(|v| v.to_string());
    let (status, bytes) = send_raw(app, method, uri, raw.as_deref()).await;
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, json)
}

pub async fn count(app: &Router) -> u64 {
    let (_, body) = send(app, "GET", "/pessoas", None).await;
    body["count"].as_u64().unwrap()
}
