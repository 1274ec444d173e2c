//! HTTP tests driving the full router against a throwaway SQLite file.

mod common;

use std::sync::Arc;

use axum::{
    body::{to_bytes, Body},
    http::{Method, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tempfile::TempDir;
use tower::ServiceExt;

use employee_records::api::create_router;
use employee_records::{AppState, Config};

use common::test_database;

struct TestApp {
    router: Router,
    _dir: TempDir,
}

impl TestApp {
    async fn new() -> Self {
        let (dir, db) = test_database().await;
        let state = AppState::from_database(Arc::new(db));
        Self {
            router: create_router(state, &Config::default()),
            _dir: dir,
        }
    }

    async fn with_employees(rows: &[(&str, i32)]) -> Self {
        let app = Self::new().await;
        for (name, value) in rows {
            let (status, _) = app
                .send(Method::POST, "/employees/AddEmployee", Some(json!({"name": name, "value": value})))
                .await;
            assert_eq!(status, StatusCode::CREATED);
        }
        app
    }

    async fn send(&self, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Vec<u8>) {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(json) => builder
                .header("content-type", "application/json")
                .body(Body::from(json.to_string())),
            None => builder.body(Body::empty()),
        }
        .unwrap();

        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, bytes.to_vec())
    }

    async fn get_json(&self, uri: &str) -> (StatusCode, Value) {
        let (status, bytes) = self.send(Method::GET, uri, None).await;
        (status, serde_json::from_slice(&bytes).unwrap())
    }
}

#[tokio::test]
async fn test_health_reports_database() {
    let app = TestApp::new().await;

    let (status, body) = app.get_json("/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["services"]["database"]["status"], "healthy");
}

#[tokio::test]
async fn test_get_employees_pages_and_counts() {
    let app = TestApp::with_employees(&[("Zed", 1), ("Alice", 3), ("Mia", 2)]).await;

    let (status, body) = app
        .get_json("/employees/GetEmployees?pageNumber=1&pageSize=2&sortColumn=name")
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["totalCount"], 3);
    assert_eq!(
        body["employees"],
        json!([{"name": "Alice", "value": 3}, {"name": "Mia", "value": 2}])
    );

    let (_, body) = app
        .get_json("/employees/GetEmployees?pageNumber=2&pageSize=2&sortColumn=Value")
        .await;
    assert_eq!(body["employees"], json!([{"name": "Alice", "value": 3}]));
}

#[tokio::test]
async fn test_get_employees_uses_defaults() {
    let app = TestApp::with_employees(&[("Bob", 1)]).await;

    let (status, body) = app.get_json("/employees/GetEmployees").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["totalCount"], 1);
}

#[tokio::test]
async fn test_get_employees_rejects_bad_parameters() {
    let app = TestApp::new().await;

    for uri in [
        "/employees/GetEmployees?pageNumber=0",
        "/employees/GetEmployees?pageSize=-3",
        "/employees/GetEmployees?sortColumn=Name%3B%20DROP%20TABLE%20Employees",
        "/employees/GetEmployees?pageNumber=abc",
    ] {
        let (status, body) = app.get_json(uri).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{uri}");
        assert_eq!(body["error"]["code"], "INVALID_ARGUMENT", "{uri}");
    }
}

#[tokio::test]
async fn test_get_employee_by_name_and_missing() {
    let app = TestApp::with_employees(&[("Eve", 5)]).await;

    let (status, body) = app.get_json("/employees/GetEmployee?name=Eve").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"name": "Eve", "value": 5}));

    let (status, body) = app.get_json("/employees/GetEmployee?name=Nobody").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["message"], "Employee with name 'Nobody' not found.");
}

#[tokio::test]
async fn test_get_employee_without_name_lists_all() {
    let app = TestApp::with_employees(&[("Eve", 5), ("Gus", 6)]).await;

    let (status, body) = app.get_json("/employees/GetEmployee").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().map(Vec::len), Some(2));
}

#[tokio::test]
async fn test_add_employee_validation_and_conflict() {
    let app = TestApp::with_employees(&[("Eve", 5)]).await;

    let (status, _) = app
        .send(Method::POST, "/employees/AddEmployee", Some(json!({"name": "", "value": 1})))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, bytes) = app
        .send(Method::POST, "/employees/AddEmployee", Some(json!({"value": 1})))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    assert_eq!(body["error"]["message"], "Employee data is invalid.");

    let (status, _) = app
        .send(Method::POST, "/employees/AddEmployee", Some(json!({"name": "Eve", "value": 9})))
        .await;
    assert_eq!(status, StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_add_employee_returns_created_body() {
    let app = TestApp::new().await;

    let (status, bytes) = app
        .send(Method::POST, "/employees/AddEmployee", Some(json!({"name": "Nora", "value": 4})))
        .await;

    assert_eq!(status, StatusCode::CREATED);
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body, json!({"name": "Nora", "value": 4}));
}

#[tokio::test]
async fn test_update_employee() {
    let app = TestApp::with_employees(&[("Eve", 5)]).await;

    let (status, _) = app
        .send(Method::PUT, "/employees/UpdateEmployee", Some(json!({"name": "Eve", "value": 50})))
        .await;
    assert_eq!(status, StatusCode::OK);

    let (_, body) = app.get_json("/employees/GetEmployee?name=Eve").await;
    assert_eq!(body["value"], 50);

    let (status, _) = app
        .send(Method::PUT, "/employees/UpdateEmployee", Some(json!({"name": "Ghost", "value": 1})))
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = app
        .send(Method::PUT, "/employees/UpdateEmployee", Some(json!({"name": "", "value": 1})))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_delete_employee() {
    let app = TestApp::with_employees(&[("Eve", 5)]).await;

    let (status, _) = app.send(Method::DELETE, "/employees/DeleteEmployee/Eve", None).await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = app.send(Method::DELETE, "/employees/DeleteEmployee/Eve", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_increment_values_endpoint() {
    let app = TestApp::with_employees(&[("Eve", 1), ("Gus", 1), ("Zed", 1)]).await;

    let (status, bytes) = app.send(Method::POST, "/list/increment-values", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        String::from_utf8(bytes).unwrap(),
        "Employee values have been successfully incremented."
    );

    let (_, body) = app
        .get_json("/employees/GetEmployees?sortColumn=Name")
        .await;
    assert_eq!(
        body["employees"],
        json!([
            {"name": "Eve", "value": 2},
            {"name": "Gus", "value": 11},
            {"name": "Zed", "value": 101}
        ])
    );
}

#[tokio::test]
async fn test_sum_abc_endpoint() {
    let app =
        TestApp::with_employees(&[("Alice", 5000), ("Bob", 6200), ("Carl", 0), ("Dan", 9999)])
            .await;

    let (status, body) = app.get_json("/list/sum-abc").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"sum": 11200}));

    app.send(Method::DELETE, "/employees/DeleteEmployee/Bob", None).await;
    let (_, body) = app.get_json("/list/sum-abc").await;
    assert_eq!(body, json!({"sum": 0}));
}
