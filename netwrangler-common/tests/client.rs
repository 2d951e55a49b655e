//! Integration tests for the API client against an in-process HTTP server.

use std::time::Duration;

use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use netwrangler_common::{ApiClient, ApiConfig, FetchError, SliceId};
use serde_json::json;

/// Serve a router on an ephemeral port and return its base URL.
async fn serve(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind test listener");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        axum::serve(listener, router).await.expect("test server");
    });
    format!("http://{}", addr)
}

/// Helper to create a client for a test server.
fn client_for(base_url: &str) -> ApiClient {
    let config = ApiConfig {
        base_url: base_url.to_string(),
        request_timeout_ms: 2_000,
        ..ApiConfig::default()
    };
    ApiClient::new(&config).expect("client")
}

/// Router serving healthy responses on all three operations endpoints.
fn operations_router() -> Router {
    Router::new()
        .route(
            "/api/v1/performance/metrics",
            get(|| async { Json(json!({"health_score": 97.5, "active_cells": 1200})) }),
        )
        .route(
            "/api/v1/slicing/performance",
            get(|| async { Json(json!({"embb-1": {"throughput": 120}})) }),
        )
        .route(
            "/api/v1/analytics/anomalies",
            get(|| async { Json(json!([{"cell": "A12", "kind": "latency_spike"}])) }),
        )
}

#[tokio::test]
async fn test_fetch_operations_success() {
    let base = serve(operations_router()).await;
    let client = client_for(&base);

    let snapshot = client.fetch_operations().await.expect("fetch operations");

    assert_eq!(snapshot.metrics.health_score(), Some(97.5));
    assert_eq!(snapshot.metrics.get("active_cells"), Some(1200.0));
    assert_eq!(snapshot.slice_performance["embb-1"]["throughput"], 120);
    assert_eq!(snapshot.anomalies.len(), 1);
}

#[tokio::test]
async fn test_fetch_operations_fails_when_one_endpoint_fails() {
    let router = Router::new()
        .route(
            "/api/v1/performance/metrics",
            get(|| async { Json(json!({"health_score": 97.5})) }),
        )
        .route(
            "/api/v1/slicing/performance",
            get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "boom") }),
        )
        .route(
            "/api/v1/analytics/anomalies",
            get(|| async { Json(json!([])) }),
        );
    let base = serve(router).await;
    let client = client_for(&base);

    let err = client.fetch_operations().await.unwrap_err();

    assert_eq!(
        err,
        FetchError::Status {
            url: format!("{}/api/v1/slicing/performance", base),
            status: 500,
        }
    );
}

#[tokio::test]
async fn test_fetch_operations_fails_for_each_endpoint() {
    let endpoints = [
        "/api/v1/performance/metrics",
        "/api/v1/slicing/performance",
        "/api/v1/analytics/anomalies",
    ];

    for failing in endpoints {
        let mut router = Router::new();
        for path in endpoints {
            router = if path == failing {
                router.route(path, get(|| async { StatusCode::SERVICE_UNAVAILABLE }))
            } else if path == "/api/v1/analytics/anomalies" {
                router.route(path, get(|| async { Json(json!([])) }))
            } else {
                router.route(path, get(|| async { Json(json!({"health_score": 97.5})) }))
            };
        }
        let base = serve(router).await;
        let client = client_for(&base);

        let err = client.fetch_operations().await.unwrap_err();

        assert_eq!(
            err,
            FetchError::Status {
                url: format!("{}{}", base, failing),
                status: 503,
            },
            "failing endpoint {}",
            failing
        );
    }
}

#[tokio::test]
async fn test_fetch_operations_rejects_non_json_body() {
    let router = Router::new()
        .route(
            "/api/v1/performance/metrics",
            get(|| async { Json(json!({"health_score": 97.5})) }),
        )
        .route(
            "/api/v1/slicing/performance",
            get(|| async { Json(json!({})) }),
        )
        .route(
            "/api/v1/analytics/anomalies",
            get(|| async { "<html>maintenance</html>" }),
        );
    let base = serve(router).await;
    let client = client_for(&base);

    let err = client.fetch_operations().await.unwrap_err();

    assert!(matches!(err, FetchError::Decode { .. }));
    assert!(err.url().ends_with("/api/v1/analytics/anomalies"));
}

#[tokio::test]
async fn test_fetch_operations_missing_endpoint() {
    // Only metrics is served; the other two answer 404.
    let router = Router::new().route(
        "/api/v1/performance/metrics",
        get(|| async { Json(json!({"health_score": 50})) }),
    );
    let base = serve(router).await;
    let client = client_for(&base);

    let err = client.fetch_operations().await.unwrap_err();

    assert!(matches!(err, FetchError::Status { status: 404, .. }));
}

#[tokio::test]
async fn test_fetch_slices() {
    let router = Router::new().route(
        "/api/v1/slicing/slices",
        get(|| async {
            Json(json!({"slices": [
                {"id": 1, "type": "eMBB", "throughput": 120, "latency": 8},
                {"id": "urllc-1", "type": "URLLC", "status": "active"}
            ]}))
        }),
    );
    let base = serve(router).await;
    let client = client_for(&base);

    let slices = client.fetch_slices().await.expect("fetch slices");

    assert_eq!(slices.len(), 2);
    assert_eq!(slices[0].id, SliceId::Number(1));
    assert_eq!(slices[0].kind, "eMBB");
    assert_eq!(slices[1].id, SliceId::from("urllc-1"));
    assert_eq!(slices[1].status.as_deref(), Some("active"));
}

#[tokio::test]
async fn test_fetch_slices_keeps_odd_records() {
    let router = Router::new().route(
        "/api/v1/slicing/slices",
        get(|| async {
            Json(json!({"slices": [
                {"id": 1, "type": "eMBB", "throughput": 120, "latency": 8},
                {"id": 2, "type": "URLLC", "throughput": 40, "latency": {"p50": 1}},
                {"id": 3.5, "type": "mMTC", "throughput": false}
            ]}))
        }),
    );
    let base = serve(router).await;
    let client = client_for(&base);

    let slices = client.fetch_slices().await.expect("fetch slices");

    assert_eq!(slices.len(), 3);
    assert_eq!(slices[1].latency.as_ref().unwrap().to_string(), r#"{"p50":1}"#);
    assert_eq!(slices[2].id.to_string(), "3.5");
    assert_eq!(slices[2].throughput.as_ref().unwrap().to_string(), "false");
}

#[tokio::test]
async fn test_fetch_slices_missing_field_is_decode_error() {
    let router = Router::new().route(
        "/api/v1/slicing/slices",
        get(|| async { Json(json!({"message": "no slices"})) }),
    );
    let base = serve(router).await;
    let client = client_for(&base);

    let err = client.fetch_slices().await.unwrap_err();

    assert!(matches!(err, FetchError::Decode { .. }));
}

#[tokio::test]
async fn test_connection_refused_is_transport_error() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = client_for(&format!("http://{}", addr));
    let err = client.fetch_slices().await.unwrap_err();

    assert!(matches!(err, FetchError::Transport { .. }));
}

#[tokio::test]
async fn test_slow_endpoint_times_out() {
    let router = Router::new().route(
        "/api/v1/slicing/slices",
        get(|| async {
            tokio::time::sleep(Duration::from_secs(5)).await;
            Json(json!({"slices": []}))
        }),
    );
    let base = serve(router).await;
    let config = ApiConfig {
        base_url: base,
        request_timeout_ms: 100,
        ..ApiConfig::default()
    };
    let client = ApiClient::new(&config).unwrap();

    let err = client.fetch_slices().await.unwrap_err();

    assert!(matches!(err, FetchError::Timeout { .. }));
}
