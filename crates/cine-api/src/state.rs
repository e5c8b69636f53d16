//! Application state.

use std::sync::Arc;
use std::time::Duration;

use cine_intent::{IntentConfig, SceneAnalyzer, SceneClassifier};
use cine_ml_client::{MlClient, MlClientConfig, MlResult};

use crate::config::ApiConfig;
use crate::middleware::ClientRateLimiter;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub config: ApiConfig,
    /// Inference backend client, also used for captioning and readiness
    pub ml: Arc<MlClient>,
    pub analyzer: SceneAnalyzer,
    pub rate_limiter: ClientRateLimiter,
}

impl AppState {
    /// Create application state from explicit configuration.
    pub fn new(
        config: ApiConfig,
        ml_config: MlClientConfig,
        intent_config: &IntentConfig,
    ) -> MlResult<Self> {
        let ml = Arc::new(MlClient::new(ml_config)?);
        let classifier: Arc<dyn SceneClassifier> = ml.clone();
        let analyzer = SceneAnalyzer::new(classifier, intent_config)
            .with_inference_timeout(inference_budget(&config, intent_config));
        let rate_limiter = ClientRateLimiter::new(config.rate_limit_rps, config.rate_limit_burst)
            .trust_proxy_headers(config.trust_proxy_headers);

        Ok(Self {
            config,
            ml,
            analyzer,
            rate_limiter,
        })
    }

    /// Create application state from environment variables.
    pub fn from_env(config: ApiConfig) -> MlResult<Self> {
        Self::new(config, MlClientConfig::from_env(), &IntentConfig::from_env())
    }
}

/// Inference budget that leaves headroom under the HTTP request timeout, so a
/// stalled backend surfaces as 503 rather than a bare request timeout.
pub fn inference_budget(config: &ApiConfig, intent_config: &IntentConfig) -> Duration {
    intent_config
        .inference_timeout
        .min(config.request_timeout.mul_f64(0.75))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inference_budget_fits_request_timeout() {
        let intent = IntentConfig::default();

        let config = ApiConfig::default();
        assert_eq!(inference_budget(&config, &intent), Duration::from_secs(45));

        let tight = ApiConfig {
            request_timeout: Duration::from_secs(2),
            ..ApiConfig::default()
        };
        assert_eq!(inference_budget(&tight, &intent), Duration::from_millis(1500));
    }
}
