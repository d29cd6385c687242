//! End-to-end HTTP tests over the document-backed ledger.

use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tempfile::TempDir;
use tower::ServiceExt;

use fairshare::adapters::build_store_factory;
use fairshare::adapters::http::{app_router, LedgerAppState};
use fairshare::config::{ServerConfig, StorageBackend, StorageConfig};

async fn app(dir: &TempDir, backend: StorageBackend) -> Router {
    let storage = StorageConfig {
        backend,
        data_dir: dir.path().to_path_buf(),
        ..Default::default()
    };
    let stores = build_store_factory(&storage).await.unwrap();
    let state = LedgerAppState::new(stores, storage.default_group.clone());
    app_router(state, &ServerConfig::default())
}

async fn call(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let request = match body {
        Some(json) => Request::builder()
            .method(method)
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

async fn pay(app: &Router, name: &str, amount: Value, group: Option<&str>) {
    let mut body = json!({"name": name, "amount": amount, "time": "2024-06-01"});
    if let Some(group) = group {
        body["group"] = json!(group);
    }
    let (status, _) = call(app, "POST", "/api/ledger/payments", Some(body)).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn payment_round_trip_through_document_file() {
    let dir = TempDir::new().unwrap();
    let app = app(&dir, StorageBackend::Document).await;

    pay(&app, "Alice", json!(10), None).await;
    pay(&app, "Bob", json!("60.004"), None).await;

    let (_, display) = call(&app, "GET", "/api/ledger/display", None).await;
    assert_eq!(display, json!({"Alice": [10.0, 1], "Bob": [60.0, 1]}));

    let (_, weights) = call(&app, "GET", "/api/ledger/next-payer", None).await;
    assert_eq!(weights, json!({"Alice": 100.0, "Bob": 50.0}));

    assert!(dir.path().join("default.json").exists());
}

#[tokio::test]
async fn group_scope_and_cascade() {
    let dir = TempDir::new().unwrap();
    let app = app(&dir, StorageBackend::Relational).await;

    pay(&app, "Alice", json!(10), Some("rent")).await;
    pay(&app, "Bob", json!(120), Some("rent")).await;
    pay(&app, "Carol", json!(3), Some("food")).await;

    let (_, weights) = call(&app, "GET", "/api/ledger/next-payer?group=rent", None).await;
    assert_eq!(weights, json!({"Alice": 100.0}));

    let (_, groups) = call(&app, "GET", "/api/groups", None).await;
    let rent_id = groups
        .as_array()
        .unwrap()
        .iter()
        .find(|g| g["name"] == "rent")
        .unwrap()["id"]
        .as_i64()
        .unwrap();

    let (status, _) = call(&app, "DELETE", &format!("/api/groups/{}", rent_id), None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (_, payments) = call(&app, "GET", "/api/ledger/payments", None).await;
    assert!(payments.get("rent").is_none());
    assert_eq!(payments["food"].as_array().unwrap().len(), 1);

    // Alice and Bob have nothing left, so they are newcomers again
    let (_, weights) = call(&app, "GET", "/api/ledger/next-payer", None).await;
    assert_eq!(weights, json!({"Alice": 1.0, "Bob": 1.0}));
}

#[tokio::test]
async fn negative_amount_is_rejected() {
    let dir = TempDir::new().unwrap();
    let app = app(&dir, StorageBackend::Document).await;

    let (status, body) = call(
        &app,
        "POST",
        "/api/ledger/payments",
        Some(json!({"name": "Alice", "amount": -5, "time": "2024-06-01"})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "VALIDATION_FAILED");

    let (_, display) = call(&app, "GET", "/api/ledger/display", None).await;
    assert_eq!(display, json!({}));
}
