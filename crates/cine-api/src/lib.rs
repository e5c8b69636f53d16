//! Axum HTTP API server for scene analysis.
//!
//! This crate provides:
//! - `POST /api/analyze` and `POST /api/analyze/image`
//! - Liveness and readiness checks
//! - Per-IP rate limiting and security headers
//! - Prometheus metrics

pub mod config;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod metrics;
pub mod middleware;
pub mod routes;
pub mod security;
pub mod state;

pub use config::ApiConfig;
pub use error::{ApiError, ApiResult};
pub use routes::create_router;
pub use state::AppState;
