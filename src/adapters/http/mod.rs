//! HTTP adapters - REST API implementations.
//!
//! Each area has its own adapter (`ledger`, `groups`); `app_router` mounts
//! them under `/api` with tracing, CORS and timeout layers.

pub mod error;
pub mod groups;
pub mod ledger;
pub mod state;

use axum::extract::State;
use axum::http::HeaderValue;
use axum::routing::get;
use axum::{Json, Router};
use serde_json::{json, Value};
use tower_http::cors::{Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing::warn;

use crate::config::ServerConfig;

pub use error::{ApiError, ErrorResponse};
pub use groups::group_routes;
pub use ledger::ledger_routes;
pub use state::LedgerAppState;

/// Builds the complete application router.
pub fn app_router(state: LedgerAppState, server: &ServerConfig) -> Router {
    Router::new()
        .route("/health", get(health))
        .nest("/api/ledger", ledger_routes())
        .nest("/api/groups", group_routes())
        .layer(cors_layer(&server.cors_origins_list()))
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::new(server.request_timeout()))
        .with_state(state)
}

/// GET /health
async fn health(State(state): State<LedgerAppState>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "backend": state.stores.backend_name(),
    }))
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    if origins.iter().any(|o| o == "*") {
        return CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);
    }

    let parsed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();
    if parsed.len() < origins.len() {
        warn!("Ignoring unparseable CORS origins");
    }

    CorsLayer::new()
        .allow_origin(parsed)
        .allow_methods(Any)
        .allow_headers(Any)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::sqlite::SqliteStoreFactory;
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use std::sync::Arc;
    use tower::ServiceExt;

    async fn test_app() -> Router {
        let factory = SqliteStoreFactory::in_memory().await.unwrap();
        let state = LedgerAppState::new(Arc::new(factory), "default");
        app_router(state, &ServerConfig::default())
    }

    async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        let body = match body {
            Some(json) => {
                builder = builder.header("content-type", "application/json");
                Body::from(json.to_string())
            }
            None => Body::empty(),
        };

        let response = app
            .clone()
            .oneshot(builder.body(body).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, value)
    }

    #[tokio::test]
    async fn health_reports_backend() {
        let app = test_app().await;
        let (status, body) = send(&app, "GET", "/health", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["backend"], "relational");
    }

    #[tokio::test]
    async fn record_then_display_round() {
        let app = test_app().await;
        for amount in [json!(1.0), json!("2.00")] {
            let (status, body) = send(
                &app,
                "POST",
                "/api/ledger/payments",
                Some(json!({"name": "Alice", "amount": amount, "time": "2024-01-01"})),
            )
            .await;
            assert_eq!(status, StatusCode::OK);
            assert_eq!(body["result"], "write successfully!");
            assert!(body["payment_id"].as_i64().unwrap() > 0);
        }

        let (status, body) = send(&app, "GET", "/api/ledger/display", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"Alice": [3.0, 2]}));
    }

    #[tokio::test]
    async fn next_payer_weights() {
        let app = test_app().await;
        for (name, amount) in [("Alice", 10.0), ("Bob", 60.0)] {
            send(
                &app,
                "POST",
                "/api/ledger/payments",
                Some(json!({"name": name, "amount": amount, "time": "2024-01-01"})),
            )
            .await;
        }

        let (status, body) = send(&app, "GET", "/api/ledger/next-payer", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"Alice": 100.0, "Bob": 50.0}));
    }

    #[tokio::test]
    async fn invalid_amount_is_bad_request() {
        let app = test_app().await;
        let (status, body) = send(
            &app,
            "POST",
            "/api/ledger/payments",
            Some(json!({"name": "Alice", "amount": "lots", "time": "2024-01-01"})),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], "VALIDATION_FAILED");
    }

    #[tokio::test]
    async fn missing_field_is_bad_request() {
        let app = test_app().await;
        let (status, body) = send(
            &app,
            "POST",
            "/api/ledger/payments",
            Some(json!({"name": "Alice", "time": "2024-01-01"})),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], "VALIDATION_FAILED");
    }

    #[tokio::test]
    async fn unknown_group_scope_is_not_found() {
        let app = test_app().await;
        let (status, body) = send(&app, "GET", "/api/ledger/display?group=nope", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["code"], "GROUP_NOT_FOUND");
    }

    #[tokio::test]
    async fn group_lifecycle() {
        let app = test_app().await;

        let (status, group) = send(&app, "POST", "/api/groups", Some(json!({"name": "rent"}))).await;
        assert_eq!(status, StatusCode::CREATED);
        let id = group["id"].as_i64().unwrap();

        let (status, _) = send(&app, "POST", "/api/groups", Some(json!({"name": "rent"}))).await;
        assert_eq!(status, StatusCode::CONFLICT);

        let (status, renamed) = send(
            &app,
            "PATCH",
            &format!("/api/groups/{}", id),
            Some(json!({"name": "housing"})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(renamed["name"], "housing");

        let (status, _) = send(&app, "DELETE", &format!("/api/groups/{}", id), None).await;
        assert_eq!(status, StatusCode::NO_CONTENT);

        let (status, _) = send(&app, "GET", &format!("/api/groups/{}", id), None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn non_numeric_id_is_bad_request() {
        let app = test_app().await;
        let (status, _) = send(&app, "DELETE", "/api/ledger/payments/abc", None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn remove_payment_then_missing() {
        let app = test_app().await;
        let (_, body) = send(
            &app,
            "POST",
            "/api/ledger/payments",
            Some(json!({"name": "Alice", "amount": 5, "time": "2024-01-01", "group": "rent"})),
        )
        .await;
        let uri = format!("/api/ledger/payments/{}", body["payment_id"]);

        let (status, _) = send(&app, "DELETE", &uri, None).await;
        assert_eq!(status, StatusCode::NO_CONTENT);
        let (status, body) = send(&app, "DELETE", &uri, None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["code"], "PAYMENT_NOT_FOUND");

        let (_, payments) = send(&app, "GET", "/api/ledger/payments", None).await;
        assert_eq!(payments, json!({}));
    }
}
