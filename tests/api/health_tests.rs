//! Health Check and Metrics API Tests

use serde_json::Value;

use crate::common::TestApp;

#[tokio::test]
async fn test_health_check_returns_json() {
    let app = TestApp::new();

    let response = app.server.get("/health").await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
}

#[tokio::test]
async fn test_liveness_probe() {
    let app = TestApp::new();

    let response = app.server.get("/health/live").await;

    response.assert_status_ok();
    response.assert_json(&serde_json::json!({ "status": "alive" }));
}

#[tokio::test]
async fn test_metrics_endpoint_exposes_counters() {
    let app = TestApp::new();
    app.server.get("/health").await.assert_status_ok();

    let response = app.server.get("/metrics").await;

    response.assert_status_ok();
    assert!(response.text().contains("athletica_http_requests_total"));
}
