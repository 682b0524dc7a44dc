//! Shared helpers for the HTTP surface tests.
//!
//! Each test builds the full router (middleware included) over an in-memory
//! store and drives it with `tower::ServiceExt::oneshot`.

// Helpers are used across test files; each file is compiled independently.
#![allow(dead_code)]

use std::sync::Arc;

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use tower::ServiceExt;

use todo_api::app::build_router;
use todo_api::config::{AppEnv, Config};
use todo_api::repos::todo_store::TodoStore;
use todo_api::state::AppState;

pub fn test_config() -> Config {
    Config {
        addr: "127.0.0.1:0".parse().unwrap(),
        database_url: String::new(),
        app_env: AppEnv::Development,
        cors_allowed_origins: Vec::new(),
    }
}

/// Full router over the given store, middleware applied as in production.
pub fn create_test_app(store: Arc<dyn TodoStore>) -> Router {
    build_router(AppState::new(store), &test_config())
}

/// Send a request and return status + raw body bytes.
pub async fn send(
    app: Router,
    method: &str,
    uri: &str,
    body: Option<serde_json::Value>,
) -> (StatusCode, Vec<u8>) {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(json) => {
            builder = builder.header("content-type", "application/json");
            Body::from(serde_json::to_string(&json).unwrap())
        }
        None => Body::empty(),
    };

    let response = app.oneshot(builder.body(body).unwrap()).await.unwrap();

    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();

    (status, bytes.to_vec())
}

/// Send a request and parse the response body as JSON.
pub async fn send_json(
    app: Router,
    method: &str,
    uri: &str,
    body: Option<serde_json::Value>,
) -> (StatusCode, serde_json::Value) {
    let (status, bytes) = send(app, method, uri, body).await;
    let json = serde_json::from_slice(&bytes)
        .unwrap_or_else(|_| panic!("non-JSON response body: {:?}", String::from_utf8_lossy(&bytes)));

    (status, json)
}
