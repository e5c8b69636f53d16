//! Inference backend seams.
//!
//! The engine never loads models itself. Callers construct a classifier once
//! (usually the HTTP client in `cine-ml-client`) and hand it to the analyzer.

use async_trait::async_trait;
use cine_models::{EmotionScore, SceneIntent};

#[cfg(test)]
use mockall::automock;

use crate::error::IntentResult;

/// Text classifiers backing the emotion resolver.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait SceneClassifier: Send + Sync {
    /// Multi-label emotion scores. Scores need not sum to one.
    async fn classify_emotion(&self, text: &str) -> IntentResult<Vec<EmotionScore>>;

    /// Sentiment label code (`LABEL_0`, `LABEL_1` or `LABEL_2`).
    async fn classify_sentiment(&self, text: &str) -> IntentResult<String>;

    /// Zero-shot classification over `candidates`, ranked best first.
    async fn classify_intent(
        &self,
        text: &str,
        candidates: &[SceneIntent],
    ) -> IntentResult<Vec<String>>;
}

/// Image captioning used to turn a still frame into scene text.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait ImageCaptioner: Send + Sync {
    async fn caption(&self, image: &[u8]) -> IntentResult<String>;
}
