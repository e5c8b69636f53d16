//! Intent engine seams backed by the ML service.

use async_trait::async_trait;
use cine_intent::{ImageCaptioner, IntentResult, SceneClassifier};
use cine_models::{EmotionScore, SceneIntent};

use crate::client::MlClient;

#[async_trait]
impl SceneClassifier for MlClient {
    async fn classify_emotion(&self, text: &str) -> IntentResult<Vec<EmotionScore>> {
        Ok(self.emotion_scores(text).await?)
    }

    async fn classify_sentiment(&self, text: &str) -> IntentResult<String> {
        Ok(self.sentiment_label(text).await?)
    }

    async fn classify_intent(
        &self,
        text: &str,
        candidates: &[SceneIntent],
    ) -> IntentResult<Vec<String>> {
        let labels = candidates.iter().map(|c| c.as_str().to_string()).collect();
        Ok(self.zero_shot(text, labels).await?.labels)
    }
}

#[async_trait]
impl ImageCaptioner for MlClient {
    async fn caption(&self, image: &[u8]) -> IntentResult<String> {
        Ok(self.caption_image(image).await?)
    }
}
