#![allow(dead_code)]

use std::net::SocketAddr;
use std::sync::Arc;

use async_trait::async_trait;
use lambda_runtime::{Context, LambdaEvent};
use reqwest::{Client, StatusCode};
use serde_json::{json, Value};

use student_intake::config::{Config, RunMode, StoreBackend};
use student_intake::db::{MemorySubmissionStore, SubmissionStore};
use student_intake::error::StoreError;
use student_intake::models::UserSubmission;
use student_intake::state::{AppState, SharedState};

pub fn test_config() -> Config {
    Config {
        table_name: "usersDB".to_string(),
        mode: RunMode::Local,
        store: StoreBackend::Memory,
        dynamodb_endpoint: None,
        host: "127.0.0.1".parse().unwrap(),
        port: 0, // unused, we bind to random port
        log_level: "warn".to_string(),
    }
}

/// State backed by an in-memory store the test can inspect.
pub fn memory_state() -> (SharedState, Arc<MemorySubmissionStore>) {
    let store = Arc::new(MemorySubmissionStore::new());
    let state = Arc::new(AppState {
        config: test_config(),
        store: store.clone(),
    });
    (state, store)
}

/// Store that rejects every write, like a throttled or denied table.
pub struct FailingStore;

#[async_trait]
impl SubmissionStore for FailingStore {
    async fn put(&self, _record: &UserSubmission) -> Result<(), StoreError> {
        Err(StoreError::Unavailable("write rejected".to_string()))
    }
}

pub fn failing_state() -> SharedState {
    Arc::new(AppState {
        config: test_config(),
        store: Arc::new(FailingStore),
    })
}

pub fn event(payload: Value) -> LambdaEvent<Value> {
    LambdaEvent::new(payload, Context::default())
}

pub fn full_payload() -> Value {
    json!({
        "student_name": "Ada Lovelace",
        "parent_name": "Anne Byron",
        "email": "anne@example.com",
        "course_name": "Mathematics",
        "additional_info": "Prefers mornings",
    })
}

pub fn minimal_payload() -> Value {
    json!({
        "student_name": "Alan Turing",
        "parent_name": "Sara Turing",
        "email": "sara@example.com",
        "course_name": "Logic",
    })
}

/// A running local server instance over an in-memory store.
pub struct TestApp {
    pub addr: SocketAddr,
    pub store: Arc<MemorySubmissionStore>,
    pub client: Client,
}

impl TestApp {
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    /// Submit JSON, return (parsed body, status).
    pub async fn submit_json(&self, data: &Value) -> (Value, StatusCode) {
        let resp = self
            .client
            .post(self.url("/submissions"))
            .json(data)
            .send()
            .await
            .expect("submit json failed");
        let status = resp.status();
        let body: Value = resp.json().await.unwrap_or(json!(null));
        (body, status)
    }

    /// Submit form-urlencoded data, return (parsed body, status).
    pub async fn submit_form(&self, data: &[(&str, &str)]) -> (Value, StatusCode) {
        let resp = self
            .client
            .post(self.url("/submissions"))
            .form(data)
            .send()
            .await
            .expect("submit form failed");
        let status = resp.status();
        let body: Value = resp.json().await.unwrap_or(json!(null));
        (body, status)
    }
}

pub async fn spawn_app() -> TestApp {
    let (state, store) = memory_state();
    spawn_with_state(state, store).await
}

pub async fn spawn_with_state(state: SharedState, store: Arc<MemorySubmissionStore>) -> TestApp {
    let app = student_intake::build_app(state);

    // Bind to random port
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind to random port");
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("Server failed");
    });

    TestApp {
        addr,
        store,
        client: Client::new(),
    }
}
