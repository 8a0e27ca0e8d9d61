//! Route Configuration
//!
//! Contact-form API, admin page, probes, metrics and the static site.

use axum::{
    middleware,
    response::IntoResponse,
    routing::{get, post},
    Router,
};
use tower_http::services::ServeDir;

use super::handlers;
use crate::infrastructure::metrics;
use crate::presentation::middleware::track_http_metrics;
use crate::startup::AppState;

/// Create the main router
pub fn create_router(state: AppState) -> Router {
    let site = ServeDir::new(&state.settings.contact.site_dir);

    Router::new()
        .route("/submit", post(handlers::contact::submit))
        .route("/admin", get(handlers::admin::admin_page))
        .route("/health", get(handlers::health::health_check))
        .route("/health/live", get(handlers::health::liveness))
        .route("/metrics", get(metrics_handler))
        .route_layer(middleware::from_fn(track_http_metrics))
        .fallback_service(site)
        .with_state(state)
}

/// Prometheus metrics endpoint handler
async fn metrics_handler() -> impl IntoResponse {
    (
        [(
            axum::http::header::CONTENT_TYPE,
            "text/plain; version=0.0.4; charset=utf-8",
        )],
        metrics::gather_metrics(),
    )
}
