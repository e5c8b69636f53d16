//! Prometheus metrics for the API server.

use axum::body::Body;
use axum::extract::MatchedPath;
use axum::http::{Request, Response};
use axum::middleware::Next;
use cine_models::SceneAnalysis;
use metrics::{counter, gauge, histogram};
use metrics_exporter_prometheus::{BuildError, PrometheusBuilder, PrometheusHandle};
use std::time::Instant;

/// Install the Prometheus recorder. Returns a handle for rendering.
pub fn init_metrics() -> Result<PrometheusHandle, BuildError> {
    PrometheusBuilder::new().install_recorder()
}

/// Metric names as constants for consistency.
pub mod names {
    // HTTP metrics
    pub const HTTP_REQUESTS_TOTAL: &str = "cine_http_requests_total";
    pub const HTTP_REQUEST_DURATION_SECONDS: &str = "cine_http_request_duration_seconds";
    pub const HTTP_REQUESTS_IN_FLIGHT: &str = "cine_http_requests_in_flight";

    // Analysis metrics
    pub const ANALYSES_TOTAL: &str = "cine_analyses_total";
    pub const ANALYSIS_DURATION_SECONDS: &str = "cine_analysis_duration_seconds";
    pub const ANALYSIS_FAILURES_TOTAL: &str = "cine_analysis_failures_total";

    // Rate limiting metrics
    pub const RATE_LIMIT_HITS_TOTAL: &str = "cine_rate_limit_hits_total";
}

/// Record an HTTP request.
pub fn record_http_request(method: &str, path: &str, status: u16, duration_secs: f64) {
    let labels = [
        ("method", method.to_string()),
        ("path", path.to_string()),
        ("status", status.to_string()),
    ];

    counter!(names::HTTP_REQUESTS_TOTAL, &labels).increment(1);
    histogram!(names::HTTP_REQUEST_DURATION_SECONDS, &labels).record(duration_secs);
}

/// Record a completed analysis.
pub fn record_analysis(source: &'static str, analysis: &SceneAnalysis, duration_secs: f64) {
    let labels = [
        ("source", source.to_string()),
        ("profile", analysis.intent_profile.profile.as_str().to_string()),
        ("emotion", analysis.emotion.as_str().to_string()),
    ];
    counter!(names::ANALYSES_TOTAL, &labels).increment(1);

    let source_label = [("source", source.to_string())];
    histogram!(names::ANALYSIS_DURATION_SECONDS, &source_label).record(duration_secs);
}

/// Record a failed analysis.
pub fn record_analysis_failure(source: &'static str, kind: &'static str) {
    let labels = [("source", source.to_string()), ("kind", kind.to_string())];
    counter!(names::ANALYSIS_FAILURES_TOTAL, &labels).increment(1);
}

/// Record rate limit hit.
pub fn record_rate_limit_hit(endpoint: &str) {
    let labels = [("endpoint", endpoint.to_string())];
    counter!(names::RATE_LIMIT_HITS_TOTAL, &labels).increment(1);
}

/// Metrics middleware for HTTP requests.
pub async fn metrics_middleware(request: Request<Body>, next: Next) -> Response<Body> {
    let method = request.method().to_string();
    // Route templates keep label cardinality bounded
    let path = request
        .extensions()
        .get::<MatchedPath>()
        .map(|p| p.as_str().to_string())
        .unwrap_or_else(|| "unmatched".to_string());
    let start = Instant::now();

    gauge!(names::HTTP_REQUESTS_IN_FLIGHT).increment(1.0);
    let response = next.run(request).await;
    gauge!(names::HTTP_REQUESTS_IN_FLIGHT).decrement(1.0);

    record_http_request(
        &method,
        &path,
        response.status().as_u16(),
        start.elapsed().as_secs_f64(),
    );

    response
}
