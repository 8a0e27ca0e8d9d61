//! Prometheus Metrics Module
//!
//! # Metrics Collected
//! - HTTP request counts by method, path, and status
//! - HTTP request latency histograms
//! - Store dispatch outcomes by slice and operation
//! - Contact-form submissions by outcome

use once_cell::sync::Lazy;
use prometheus::{Encoder, HistogramOpts, HistogramVec, IntCounterVec, Opts, Registry, TextEncoder};

/// Global metrics registry
pub static REGISTRY: Lazy<Registry> = Lazy::new(|| {
    let registry = Registry::new();
    register_metrics(&registry);
    registry
});

/// HTTP request counter by method, path, and status code
pub static HTTP_REQUESTS_TOTAL: Lazy<IntCounterVec> = Lazy::new(|| {
    IntCounterVec::new(
        Opts::new("http_requests_total", "Total number of HTTP requests").namespace("athletica"),
        &["method", "path", "status"],
    )
    .expect("Failed to create HTTP_REQUESTS_TOTAL metric")
});

/// HTTP request latency in seconds
pub static HTTP_REQUEST_DURATION_SECONDS: Lazy<HistogramVec> = Lazy::new(|| {
    let buckets = vec![0.001, 0.005, 0.01, 0.025, 0.05, 0.1, 0.25, 0.5, 1.0, 2.5, 5.0];
    HistogramVec::new(
        HistogramOpts::new("http_request_duration_seconds", "HTTP request latency in seconds")
            .namespace("athletica")
            .buckets(buckets),
        &["method", "path"],
    )
    .expect("Failed to create HTTP_REQUEST_DURATION_SECONDS metric")
});

/// Store dispatches by slice, operation and outcome ("fulfilled", "rejected")
pub static STORE_DISPATCH_TOTAL: Lazy<IntCounterVec> = Lazy::new(|| {
    IntCounterVec::new(
        Opts::new("store_dispatch_total", "Completed store dispatches").namespace("athletica"),
        &["slice", "operation", "outcome"],
    )
    .expect("Failed to create STORE_DISPATCH_TOTAL metric")
});

/// Contact submissions by outcome ("stored", "invalid", "failed")
pub static CONTACT_SUBMISSIONS_TOTAL: Lazy<IntCounterVec> = Lazy::new(|| {
    IntCounterVec::new(
        Opts::new("contact_submissions_total", "Contact form submissions").namespace("athletica"),
        &["outcome"],
    )
    .expect("Failed to create CONTACT_SUBMISSIONS_TOTAL metric")
});

fn register_metrics(registry: &Registry) {
    registry
        .register(Box::new(HTTP_REQUESTS_TOTAL.clone()))
        .expect("Failed to register HTTP_REQUESTS_TOTAL");
    registry
        .register(Box::new(HTTP_REQUEST_DURATION_SECONDS.clone()))
        .expect("Failed to register HTTP_REQUEST_DURATION_SECONDS");
    registry
        .register(Box::new(STORE_DISPATCH_TOTAL.clone()))
        .expect("Failed to register STORE_DISPATCH_TOTAL");
    registry
        .register(Box::new(CONTACT_SUBMISSIONS_TOTAL.clone()))
        .expect("Failed to register CONTACT_SUBMISSIONS_TOTAL");
}

/// Collect and encode all metrics as Prometheus text format
pub fn gather_metrics() -> String {
    let encoder = TextEncoder::new();
    let metric_families = REGISTRY.gather();
    let mut buffer = Vec::new();
    if let Err(e) = encoder.encode(&metric_families, &mut buffer) {
        tracing::error!(error = %e, "Failed to encode metrics");
        return String::new();
    }
    String::from_utf8(buffer).unwrap_or_default()
}

/// Record one HTTP request
pub fn record_http_request(method: &str, path: &str, status: u16, duration_secs: f64) {
    HTTP_REQUESTS_TOTAL
        .with_label_values(&[method, path, &status.to_string()])
        .inc();
    HTTP_REQUEST_DURATION_SECONDS
        .with_label_values(&[method, path])
        .observe(duration_secs);
}

/// Record the outcome of a store dispatch
pub fn record_dispatch(slice: &str, operation: &str, outcome: &str) {
    STORE_DISPATCH_TOTAL
        .with_label_values(&[slice, operation, outcome])
        .inc();
}

/// Record the outcome of a contact submission
pub fn record_contact_submission(outcome: &str) {
    CONTACT_SUBMISSIONS_TOTAL.with_label_values(&[outcome]).inc();
}
