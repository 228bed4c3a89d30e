//! Helpers shared by the integration tests

#![allow(dead_code)]

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use axum::Router;
use axum::body::Body;
use http::{Method, Request, StatusCode, header};
use http_body_util::BodyExt;
use hrms_server::db::models::EmployeeId;
use hrms_server::{
    Config, EmployeeStore, MemoryEmployeeRepository, RepoError, RepoResult, ServerState,
};
use serde_json::Value;
use shared::models::Employee;
use tower::ServiceExt;

/// A response reduced to what the assertions look at
pub struct TestResponse {
    pub status: StatusCode,
    pub content_type: Option<String>,
    pub body: Vec<u8>,
}

impl TestResponse {
    pub fn json(&self) -> Value {
        serde_json::from_slice(&self.body).expect("response body is not JSON")
    }

    pub fn text(&self) -> String {
        String::from_utf8(self.body.clone()).expect("response body is not UTF-8")
    }

    pub fn is_json(&self) -> bool {
        self.content_type.as_deref() == Some("application/json")
    }
}

pub fn app_with(store: Arc<dyn EmployeeStore>) -> Router {
    ServerState::new(Config::default(), store).router()
}

pub fn app_with_timeout(store: Arc<dyn EmployeeStore>, timeout: Duration) -> Router {
    let config = Config {
        operation_timeout: timeout,
        ..Config::default()
    };
    ServerState::new(config, store).router()
}

pub fn memory_app() -> (Router, Arc<MemoryEmployeeRepository>) {
    let store = Arc::new(MemoryEmployeeRepository::new());
    (app_with(store.clone()), store)
}

pub async fn send(app: &Router, method: Method, uri: &str, body: Option<&str>) -> TestResponse {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(json) => {
            builder = builder.header(header::CONTENT_TYPE, "application/json");
            Body::from(json.to_string())
        }
        None => Body::empty(),
    };
    send_request(app, builder.body(body).unwrap()).await
}

pub async fn send_request(app: &Router, request: Request<Body>) -> TestResponse {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(|s| s.to_string());
    let body = response.into_body().collect().await.unwrap().to_bytes().to_vec();
    TestResponse {
        status,
        content_type,
        body,
    }
}

pub async fn get(app: &Router, uri: &str) -> TestResponse {
    send(app, Method::GET, uri, None).await
}

pub async fn post(app: &Router, uri: &str, body: &str) -> TestResponse {
    send(app, Method::POST, uri, Some(body)).await
}

pub async fn put(app: &Router, uri: &str, body: &str) -> TestResponse {
    send(app, Method::PUT, uri, Some(body)).await
}

pub async fn delete(app: &Router, uri: &str) -> TestResponse {
    send(app, Method::DELETE, uri, None).await
}

/// Create an employee through the API and return its id from the listing
pub async fn create_employee(app: &Router, name: &str, age: f64, salary: f64) -> String {
    let body = serde_json::json!({ "name": name, "age": age, "salary": salary }).to_string();
    let response = post(app, "/employee", &body).await;
    assert_eq!(response.status, StatusCode::CREATED);

    let listing = get(app, "/employees").await.json();
    listing
        .as_array()
        .unwrap()
        .iter()
        .rev()
        .find(|e| e["name"] == name)
        .and_then(|e| e["id"].as_str())
        .expect("created employee missing from listing")
        .to_string()
}

/// Counts every storage call, delegating to an in-memory store
#[derive(Default)]
pub struct CountingStore {
    inner: MemoryEmployeeRepository,
    calls: AtomicUsize,
}

impl CountingStore {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn hit(&self) {
        self.calls.fetch_add(1, Ordering::SeqCst);
    }
}

#[async_trait]
impl EmployeeStore for CountingStore {
    async fn find_all(&self) -> RepoResult<Vec<Employee>> {
        self.hit();
        self.inner.find_all().await
    }

    async fn find_by_id(&self, id: EmployeeId) -> RepoResult<Option<Employee>> {
        self.hit();
        self.inner.find_by_id(id).await
    }

    async fn insert_one(&self, employee: &Employee) -> RepoResult<EmployeeId> {
        self.hit();
        self.inner.insert_one(employee).await
    }

    async fn update_one(&self, id: EmployeeId, employee: &Employee) -> RepoResult<u64> {
        self.hit();
        self.inner.update_one(id, employee).await
    }

    async fn delete_one(&self, id: EmployeeId) -> RepoResult<u64> {
        self.hit();
        self.inner.delete_one(id).await
    }
}

/// In-memory store whose reads and/or writes fail on demand
#[derive(Default)]
pub struct FaultyStore {
    pub inner: MemoryEmployeeRepository,
    pub fail_reads: bool,
    pub fail_writes: bool,
}

impl FaultyStore {
    pub fn failing_reads() -> Self {
        Self {
            fail_reads: true,
            ..Self::default()
        }
    }

    pub fn failing_writes() -> Self {
        Self {
            fail_writes: true,
            ..Self::default()
        }
    }

    fn read_fault(&self) -> RepoResult<()> {
        if self.fail_reads {
            return Err(RepoError::Database("connection reset by peer".into()));
        }
        Ok(())
    }

    fn write_fault(&self) -> RepoResult<()> {
        if self.fail_writes {
            return Err(RepoError::Database("not primary".into()));
        }
        Ok(())
    }
}

#[async_trait]
impl EmployeeStore for FaultyStore {
    async fn find_all(&self) -> RepoResult<Vec<Employee>> {
        self.read_fault()?;
        self.inner.find_all().await
    }

    async fn find_by_id(&self, id: EmployeeId) -> RepoResult<Option<Employee>> {
        self.read_fault()?;
        self.inner.find_by_id(id).await
    }

    async fn insert_one(&self, employee: &Employee) -> RepoResult<EmployeeId> {
        self.write_fault()?;
        self.inner.insert_one(employee).await
    }

    async fn update_one(&self, id: EmployeeId, employee: &Employee) -> RepoResult<u64> {
        self.write_fault()?;
        self.inner.update_one(id, employee).await
    }

    async fn delete_one(&self, id: EmployeeId) -> RepoResult<u64> {
        self.write_fault()?;
        self.inner.delete_one(id).await
    }
}

/// Store that never answers within any reasonable deadline
pub struct StalledStore {
    pub delay: Duration,
}

impl StalledStore {
    async fn stall(&self) {
        tokio::time::sleep(self.delay).await;
    }
}

#[async_trait]
impl EmployeeStore for StalledStore {
    async fn find_all(&self) -> RepoResult<Vec<Employee>> {
        self.stall().await;
        Ok(Vec::new())
    }

    async fn find_by_id(&self, _id: EmployeeId) -> RepoResult<Option<Employee>> {
        self.stall().await;
        Ok(None)
    }

    async fn insert_one(&self, _employee: &Employee) -> RepoResult<EmployeeId> {
        self.stall().await;
        Ok(EmployeeId::generate())
    }

    async fn update_one(&self, _id: EmployeeId, _employee: &Employee) -> RepoResult<u64> {
        self.stall().await;
        Ok(1)
    }

    async fn delete_one(&self, _id: EmployeeId) -> RepoResult<u64> {
        self.stall().await;
        Ok(1)
    }
}
