#![allow(dead_code)]

use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use little_lemon::{
    app::App,
    types::{AppContext, AppEnvironment, Context},
    utils::database::memory::MemoryDatabase,
};
use serde_json::Value;
use std::sync::Arc;
use tower::ServiceExt;

pub const BASE_URL: &str = "http://testserver";

pub struct TestApp {
    router: Router,
}

pub fn app_context() -> AppContext {
    AppContext {
        host: "127.0.0.1".to_string(),
        environment: AppEnvironment::Development,
        port: 8000,
        url: BASE_URL.to_string(),
    }
}

impl TestApp {
    pub fn new() -> Self {
        Self::with_context(Context::new(app_context(), MemoryDatabase::new()))
    }

    pub fn with_context(ctx: Context) -> Self {
        Self {
            router: App::new(Arc::new(ctx)).router(),
        }
    }

    pub async fn send(&self, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Vec<u8>) {
        let request = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(body) => request
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string())),
            None => request.body(Body::empty()),
        }
        .unwrap();

        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();

        (status, bytes.to_vec())
    }

    pub async fn json(&self, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let (status, bytes) = self.send(method, uri, body).await;
        let value = match bytes.is_empty() {
            true => Value::Null,
            false => serde_json::from_slice(&bytes).unwrap(),
        };

        (status, value)
    }

    pub async fn get(&self, uri: &str) -> (StatusCode, Value) {
        self.json(Method::GET, uri, None).await
    }

    pub async fn post(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        self.json(Method::POST, uri, Some(body)).await
    }

    pub async fn put(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        self.json(Method::PUT, uri, Some(body)).await
    }

    pub async fn patch(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        self.json(Method::PATCH, uri, Some(body)).await
    }

    pub async fn delete(&self, uri: &str) -> (StatusCode, Value) {
        self.json(Method::DELETE, uri, None).await
    }

    /// Creates a record and returns its wire object, failing the test otherwise.
    pub async fn create(&self, collection: &str, body: Value) -> Value {
        let (status, record) = self.post(&format!("/api/{}/", collection), body).await;
        assert_eq!(status, StatusCode::CREATED, "{}", record);
        record
    }

    pub async fn total(&self, collection: &str) -> u64 {
        let (status, page) = self.get(&format!("/api/{}/", collection)).await;
        assert_eq!(status, StatusCode::OK);
        page["meta"]["total"].as_u64().unwrap()
    }
}
