//! ML service HTTP client.

use std::time::Duration;

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use cine_models::EmotionScore;
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, warn};

use crate::error::{MlError, MlResult};
use crate::types::{
    CaptionRequest, CaptionResponse, HealthResponse, LabelScore, TextRequest, ZeroShotRequest,
    ZeroShotResponse,
};

/// Upper bound on configured retries.
pub const MAX_RETRIES: u32 = 10;

const BASE_BACKOFF_MS: u64 = 200;
const MAX_BACKOFF: Duration = Duration::from_secs(10);

/// Exponential backoff before retry `attempt + 1`, capped at [`MAX_BACKOFF`].
fn backoff_delay(attempt: u32) -> Duration {
    let ms = 2u64
        .checked_pow(attempt)
        .and_then(|factor| factor.checked_mul(BASE_BACKOFF_MS))
        .unwrap_or(u64::MAX);
    Duration::from_millis(ms).min(MAX_BACKOFF)
}

/// Configuration for ML client.
#[derive(Debug, Clone)]
pub struct MlClientConfig {
    /// Base URL of ML service
    pub base_url: String,
    /// Request timeout
    pub timeout: Duration,
    /// Max retries
    pub max_retries: u32,
}

impl Default for MlClientConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8001".to_string(),
            timeout: Duration::from_secs(30),
            max_retries: 2,
        }
    }
}

impl MlClientConfig {
    /// Create config from environment variables.
    pub fn from_env() -> Self {
        Self {
            base_url: std::env::var("ML_SERVICE_URL")
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or_else(|_| "http://localhost:8001".to_string()),
            timeout: Duration::from_secs(
                std::env::var("ML_SERVICE_TIMEOUT")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(30),
            ),
            max_retries: std::env::var("ML_SERVICE_RETRIES")
                .ok()
                .and_then(|s| s.parse::<u32>().ok())
                .map(|n| n.min(MAX_RETRIES))
                .unwrap_or(2),
        }
    }
}

/// Client for the Python inference service.
pub struct MlClient {
    http: Client,
    config: MlClientConfig,
}

impl MlClient {
    /// Create a new ML client.
    pub fn new(config: MlClientConfig) -> MlResult<Self> {
        let http = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(MlError::Network)?;

        Ok(Self { http, config })
    }

    /// Create from environment variables.
    pub fn from_env() -> MlResult<Self> {
        Self::new(MlClientConfig::from_env())
    }

    pub fn config(&self) -> &MlClientConfig {
        &self.config
    }

    /// Check if ML service is healthy.
    pub async fn health_check(&self) -> MlResult<bool> {
        let url = format!("{}/health", self.config.base_url);

        match self.http.get(&url).send().await {
            Ok(response) if response.status().is_success() => {
                let health: HealthResponse = response.json().await?;
                Ok(health.status == "healthy" || health.status == "ok")
            }
            Ok(response) => {
                warn!("ML service health check failed: {}", response.status());
                Ok(false)
            }
            Err(e) => {
                warn!("ML service health check error: {}", e);
                Ok(false)
            }
        }
    }

    /// Multi-label emotion scores for `text`.
    pub async fn emotion_scores(&self, text: &str) -> MlResult<Vec<EmotionScore>> {
        let scores: Vec<LabelScore> = self
            .post_json("/classify/emotion", &TextRequest { text: text.to_string() })
            .await?;

        if scores.is_empty() {
            return Err(MlError::InvalidResponse(
                "emotion classifier returned no labels".to_string(),
            ));
        }
        if let Some(bad) = scores
            .iter()
            .find(|s| !(0.0..=1.0).contains(&s.score))
        {
            return Err(MlError::InvalidResponse(format!(
                "emotion score out of range for {}: {}",
                bad.label, bad.score
            )));
        }

        Ok(scores
            .into_iter()
            .map(|s| EmotionScore::new(s.label, s.score))
            .collect())
    }

    /// Top sentiment label code for `text`.
    pub async fn sentiment_label(&self, text: &str) -> MlResult<String> {
        let ranked: Vec<LabelScore> = self
            .post_json("/classify/sentiment", &TextRequest { text: text.to_string() })
            .await?;

        ranked.into_iter().next().map(|s| s.label).ok_or_else(|| {
            MlError::InvalidResponse("sentiment classifier returned no labels".to_string())
        })
    }

    /// Rank `candidate_labels` for `text` with the zero-shot classifier.
    pub async fn zero_shot(
        &self,
        text: &str,
        candidate_labels: Vec<String>,
    ) -> MlResult<ZeroShotResponse> {
        let request = ZeroShotRequest {
            text: text.to_string(),
            candidate_labels,
        };
        let response: ZeroShotResponse = self.post_json("/classify/zero-shot", &request).await?;

        if response.labels.is_empty() {
            return Err(MlError::InvalidResponse(
                "zero-shot classifier returned no labels".to_string(),
            ));
        }
        Ok(response)
    }

    /// Generate a scene caption for an image.
    pub async fn caption_image(&self, image: &[u8]) -> MlResult<String> {
        let request = CaptionRequest {
            image_base64: BASE64.encode(image),
        };
        let response: CaptionResponse = self.post_json("/caption", &request).await?;

        let caption = response.caption.trim();
        if caption.is_empty() {
            return Err(MlError::InvalidResponse("empty caption".to_string()));
        }
        Ok(caption.to_string())
    }

    /// POST a JSON body and decode the JSON response.
    async fn post_json<B, T>(&self, endpoint: &str, body: &B) -> MlResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = format!("{}{}", self.config.base_url, endpoint);
        let url = url.as_str();

        debug!("Sending inference request to {}", url);

        let response = self
            .with_retry(|| async move {
                let response = self
                    .http
                    .post(url)
                    .json(body)
                    .send()
                    .await
                    .map_err(MlError::Network)?;

                let status = response.status();
                if status.is_server_error() || status == StatusCode::TOO_MANY_REQUESTS {
                    return Err(MlError::ServiceUnavailable(format!(
                        "{} returned {}",
                        endpoint, status
                    )));
                }
                Ok(response)
            })
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(MlError::RequestFailed(format!(
                "ML service returned {}: {}",
                status, body
            )));
        }

        let bytes = response.bytes().await?;
        serde_json::from_slice(&bytes).map_err(|e| {
            MlError::InvalidResponse(format!("{} returned malformed JSON: {}", endpoint, e))
        })
    }

    /// Execute with retry logic.
    async fn with_retry<F, Fut, T>(&self, operation: F) -> MlResult<T>
    where
        F: Fn() -> Fut,
        Fut: std::future::Future<Output = MlResult<T>>,
    {
        let mut last_error = None;

        for attempt in 0..=self.config.max_retries {
            match operation().await {
                Ok(result) => return Ok(result),
                Err(e) if e.is_retryable() && attempt < self.config.max_retries => {
                    let delay = backoff_delay(attempt);
                    warn!(
                        "ML request failed (attempt {}), retrying in {:?}: {}",
                        attempt + 1,
                        delay,
                        e
                    );
                    tokio::time::sleep(delay).await;
                    last_error = Some(e);
                }
                Err(e) => return Err(e),
            }
        }

        Err(last_error.unwrap_or(MlError::RequestFailed("Unknown error".to_string())))
    }
}
