//! Intent engine configuration.

use std::time::Duration;

/// Default score below which the top emotion is treated as neutral.
pub const DEFAULT_NEUTRAL_THRESHOLD: f64 = 0.35;

/// Default wall-clock budget for all classifier calls of one analysis.
pub const DEFAULT_INFERENCE_TIMEOUT: Duration = Duration::from_secs(45);

/// Configuration for the emotion resolver and analyzer.
#[derive(Debug, Clone)]
pub struct IntentConfig {
    /// Minimum top-1 emotion score to keep the classifier label
    pub neutral_threshold: f64,
    /// Budget for the classifier calls of one analysis, retries included
    pub inference_timeout: Duration,
}

impl Default for IntentConfig {
    fn default() -> Self {
        Self {
            neutral_threshold: DEFAULT_NEUTRAL_THRESHOLD,
            inference_timeout: DEFAULT_INFERENCE_TIMEOUT,
        }
    }
}

impl IntentConfig {
    /// Create config from environment variables.
    pub fn from_env() -> Self {
        Self {
            neutral_threshold: std::env::var("NEUTRAL_THRESHOLD")
                .ok()
                .and_then(|s| s.parse().ok())
                .filter(|t: &f64| (0.0..=1.0).contains(t))
                .unwrap_or(DEFAULT_NEUTRAL_THRESHOLD),
            inference_timeout: std::env::var("INFERENCE_TIMEOUT")
                .ok()
                .and_then(|s| s.parse().ok())
                .filter(|secs: &u64| *secs > 0)
                .map(Duration::from_secs)
                .unwrap_or(DEFAULT_INFERENCE_TIMEOUT),
        }
    }
}
