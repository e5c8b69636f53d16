//! API configuration.

use std::time::Duration;

/// API server configuration.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Server host
    pub host: String,
    /// Server port
    pub port: u16,
    /// CORS origins
    pub cors_origins: Vec<String>,
    /// Rate limit requests per second (per client IP)
    pub rate_limit_rps: u32,
    /// Rate limit burst
    pub rate_limit_burst: u32,
    /// Key rate limits on X-Forwarded-For / X-Real-IP. Only safe behind a proxy
    /// that overwrites those headers.
    pub trust_proxy_headers: bool,
    /// Request timeout
    pub request_timeout: Duration,
    /// Max request body size
    pub max_body_size: usize,
    /// Max scene text length in characters
    pub max_scene_chars: usize,
    /// Max decoded image size in bytes
    pub max_image_bytes: usize,
    /// Expose Prometheus metrics at /metrics
    pub metrics_enabled: bool,
    /// Environment (development/production)
    pub environment: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8000,
            cors_origins: vec!["*".to_string()],
            rate_limit_rps: 10,
            rate_limit_burst: 20,
            trust_proxy_headers: false,
            request_timeout: Duration::from_secs(60),
            max_body_size: 12 * 1024 * 1024, // base64 overhead on top of max_image_bytes
            max_scene_chars: 2000,
            max_image_bytes: 8 * 1024 * 1024,
            metrics_enabled: true,
            environment: "development".to_string(),
        }
    }
}

fn env_or<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(default)
}

fn env_flag(key: &str, default: bool) -> bool {
    std::env::var(key)
        .map(|v| v == "true" || v == "1")
        .unwrap_or(default)
}

/// Whether an `ENVIRONMENT` value names production. Case-insensitive.
pub fn is_production_env(environment: &str) -> bool {
    environment.trim().eq_ignore_ascii_case("production")
}

/// Read `ENVIRONMENT` from the process environment.
pub fn production_from_env() -> bool {
    std::env::var("ENVIRONMENT")
        .map(|v| is_production_env(&v))
        .unwrap_or(false)
}

impl ApiConfig {
    /// Create config from environment variables.
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            host: std::env::var("API_HOST").unwrap_or(defaults.host),
            port: env_or("API_PORT", defaults.port),
            cors_origins: std::env::var("CORS_ORIGINS")
                .map(|s| s.split(',').map(|s| s.trim().to_string()).collect())
                .unwrap_or(defaults.cors_origins),
            rate_limit_rps: env_or("RATE_LIMIT_RPS", defaults.rate_limit_rps),
            rate_limit_burst: env_or("RATE_LIMIT_BURST", defaults.rate_limit_burst),
            trust_proxy_headers: env_flag("TRUST_PROXY_HEADERS", defaults.trust_proxy_headers),
            request_timeout: Duration::from_secs(env_or(
                "REQUEST_TIMEOUT",
                defaults.request_timeout.as_secs(),
            )),
            max_body_size: env_or("MAX_BODY_SIZE", defaults.max_body_size),
            max_scene_chars: env_or("MAX_SCENE_CHARS", defaults.max_scene_chars),
            max_image_bytes: env_or("MAX_IMAGE_BYTES", defaults.max_image_bytes),
            metrics_enabled: env_flag("METRICS_ENABLED", defaults.metrics_enabled),
            environment: std::env::var("ENVIRONMENT").unwrap_or(defaults.environment),
        }
    }

    /// Check if running in production mode.
    pub fn is_production(&self) -> bool {
        is_production_env(&self.environment)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = ApiConfig::default();
        assert_eq!(config.port, 8000);
        assert_eq!(config.max_scene_chars, 2000);
        assert!(config.max_body_size > config.max_image_bytes);
        assert!(!config.is_production());
        assert!(!config.trust_proxy_headers);
    }

    #[test]
    fn test_production_detection_ignores_case() {
        assert!(is_production_env("production"));
        assert!(is_production_env("Production"));
        assert!(is_production_env(" PRODUCTION "));
        assert!(!is_production_env("staging"));

        let config = ApiConfig {
            environment: "Production".to_string(),
            ..ApiConfig::default()
        };
        assert!(config.is_production());
    }
}
