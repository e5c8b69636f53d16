//! Scene analysis pipeline.
//!
//! Runs the classifiers, resolves the emotion, detects cues and derives the
//! full cinematic plan for one scene. The analyzer holds no mutable state and
//! can be shared across tasks behind an `Arc`.

use std::future::Future;
use std::sync::Arc;
use std::time::{Duration, Instant};

use cine_models::{SceneAnalysis, SceneIntent};
use tracing::{debug, info, warn};

use crate::classifier::{ImageCaptioner, SceneClassifier};
use crate::config::IntentConfig;
use crate::cues::detect_cues;
use crate::enhancements::cinematic_enhancements;
use crate::error::{IntentError, IntentResult};
use crate::mapper::map_intent;
use crate::resolver::{EmotionResolver, ResolvedEmotion};
use crate::shots::{generate_shots, suggest_movement};

/// Orchestrates classifier calls and the rule engine.
#[derive(Clone)]
pub struct SceneAnalyzer {
    classifier: Arc<dyn SceneClassifier>,
    resolver: EmotionResolver,
    inference_timeout: Duration,
}

impl SceneAnalyzer {
    pub fn new(classifier: Arc<dyn SceneClassifier>, config: &IntentConfig) -> Self {
        Self {
            classifier,
            resolver: EmotionResolver::new(config),
            inference_timeout: config.inference_timeout,
        }
    }

    /// Override the inference budget, e.g. to fit inside an HTTP request timeout.
    pub fn with_inference_timeout(mut self, timeout: Duration) -> Self {
        self.inference_timeout = timeout;
        self
    }

    pub fn resolver(&self) -> &EmotionResolver {
        &self.resolver
    }

    pub fn inference_timeout(&self) -> Duration {
        self.inference_timeout
    }

    /// Analyze a scene description.
    ///
    /// Emotion and sentiment are classified concurrently. The zero-shot intent
    /// classifier is only called when the emotion is still neutral after the
    /// subtle-scene adjustment. All classifier calls share one time budget;
    /// running out of it is reported as the backend being unavailable.
    pub async fn analyze(&self, text: &str) -> IntentResult<SceneAnalysis> {
        let scene = non_empty(text)?;

        let start = Instant::now();
        let resolved = self.within_budget(self.resolve(scene)).await?;
        let analysis = interpret(scene, resolved);
        log_analysis(&analysis, start);

        Ok(analysis)
    }

    /// Caption an image and analyze the caption as scene text.
    ///
    /// Captioning counts against the same budget as classification.
    pub async fn analyze_image(
        &self,
        captioner: &dyn ImageCaptioner,
        image: &[u8],
    ) -> IntentResult<SceneAnalysis> {
        let start = Instant::now();
        let (caption, resolved) = self
            .within_budget(async {
                let caption = captioner.caption(image).await?;
                debug!("Generated caption: {}", caption);
                let scene = non_empty(&caption)?.to_string();
                let resolved = self.resolve(&scene).await?;
                Ok((scene, resolved))
            })
            .await?;

        let analysis = interpret(&caption, resolved);
        log_analysis(&analysis, start);

        Ok(analysis)
    }

    async fn within_budget<T>(
        &self,
        inference: impl Future<Output = IntentResult<T>>,
    ) -> IntentResult<T> {
        match tokio::time::timeout(self.inference_timeout, inference).await {
            Ok(result) => result,
            Err(_) => {
                warn!(
                    timeout_ms = self.inference_timeout.as_millis() as u64,
                    "Inference exceeded its time budget"
                );
                Err(IntentError::unavailable(format!(
                    "inference did not finish within {:?}",
                    self.inference_timeout
                )))
            }
        }
    }

    async fn resolve(&self, scene: &str) -> IntentResult<ResolvedEmotion> {
        let (scores, sentiment_label) = tokio::try_join!(
            self.classifier.classify_emotion(scene),
            self.classifier.classify_sentiment(scene),
        )
        .map_err(|e| {
            warn!("Scene classification failed: {}", e);
            e
        })?;

        let provisional = self.resolver.provisional(scene, &scores);

        let intent_label = if provisional.needs_intent() {
            let ranked = self
                .classifier
                .classify_intent(scene, SceneIntent::ALL)
                .await?;
            let top = ranked.into_iter().next().ok_or_else(|| {
                IntentError::unavailable("zero-shot classifier returned no labels")
            })?;
            debug!("Zero-shot intent: {}", top);
            Some(top)
        } else {
            None
        };

        Ok(self
            .resolver
            .finish(provisional, &sentiment_label, intent_label.as_deref()))
    }
}

fn non_empty(text: &str) -> IntentResult<&str> {
    let scene = text.trim();
    if scene.is_empty() {
        Err(IntentError::EmptyScene)
    } else {
        Ok(scene)
    }
}

fn log_analysis(analysis: &SceneAnalysis, start: Instant) {
    info!(
        emotion = %analysis.emotion,
        sentiment = %analysis.sentiment,
        profile = analysis.intent_profile.profile.as_str(),
        duration_ms = start.elapsed().as_millis() as u64,
        "Scene analyzed"
    );
}

/// Derive the cinematic plan from a resolved emotion. Pure and deterministic.
pub fn interpret(scene: &str, resolved: ResolvedEmotion) -> SceneAnalysis {
    let (cues, trigger_words) = detect_cues(scene);
    let profile = map_intent(&resolved.emotion, resolved.sentiment, &cues);

    let shot_list = generate_shots(&resolved.emotion, profile.tension_level, profile.pacing);
    let camera_movement =
        suggest_movement(&resolved.emotion, profile.tension_level, profile.pacing);
    let enhancements = cinematic_enhancements(&resolved.emotion, &profile.mood, profile.pacing);

    SceneAnalysis {
        scene: scene.to_string(),
        emotion: resolved.emotion,
        emotion_strength: resolved.strength,
        sentiment: resolved.sentiment,
        cues,
        trigger_words,
        intent_profile: profile,
        shot_list,
        camera_movement,
        enhancements,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifier::{MockImageCaptioner, MockSceneClassifier};
    use cine_models::{Cue, Emotion, EmotionScore, Level, Pacing, ProfileKind, Sentiment};

    fn classifier(
        scores: Vec<(&'static str, f64)>,
        sentiment: &'static str,
        intent: Option<&'static str>,
    ) -> MockSceneClassifier {
        let mut mock = MockSceneClassifier::new();
        mock.expect_classify_emotion().returning(move |_| {
            Ok(scores
                .iter()
                .map(|(l, s)| EmotionScore::new(*l, *s))
                .collect())
        });
        mock.expect_classify_sentiment()
            .returning(move |_| Ok(sentiment.to_string()));
        match intent {
            Some(label) => {
                mock.expect_classify_intent()
                    .times(1)
                    .returning(move |_, _| Ok(vec![label.to_string(), "neutral".to_string()]));
            }
            None => {
                mock.expect_classify_intent().never();
            }
        }
        mock
    }

    fn analyzer(mock: MockSceneClassifier) -> SceneAnalyzer {
        SceneAnalyzer::new(Arc::new(mock), &IntentConfig::default())
    }

    #[tokio::test]
    async fn test_silence_and_avoidance_scene() {
        let analyzer = analyzer(classifier(vec![("neutral", 0.7)], "LABEL_1", None));

        let analysis = analyzer
            .analyze("The room falls silent. He avoids eye contact before answering.")
            .await
            .unwrap();

        // Neutral top label turns into anxiety through the nervous cue scan
        assert_eq!(analysis.emotion, Emotion::Anxiety);
        assert_eq!(analysis.sentiment, Sentiment::Neutral);
        assert_eq!(
            analysis.cues,
            [Cue::Silence, Cue::Discomfort].into_iter().collect()
        );

        let profile = &analysis.intent_profile;
        assert_eq!(profile.profile, ProfileKind::TenseAnticipation);
        assert_eq!(profile.mood, "tense anticipation");
        assert_eq!(profile.pacing, Pacing::VerySlow);
        assert_eq!(profile.camera_options, vec!["close-up", "static shot"]);
        assert_eq!(profile.lighting_options, vec!["dim", "low-key"]);
        assert_eq!(profile.tension_level, Level::High);

        assert_eq!(analysis.shot_list.len(), 3);
        assert_eq!(
            analysis.camera_movement,
            "Handheld camera for instability and tension"
        );
    }

    #[tokio::test]
    async fn test_joyful_scene() {
        let analyzer = analyzer(classifier(
            vec![("joy", 0.8), ("excitement", 0.1)],
            "LABEL_2",
            None,
        ));

        let analysis = analyzer.analyze("Friends dance around the bonfire.").await.unwrap();

        assert_eq!(analysis.emotion, Emotion::Joy);
        assert_eq!(analysis.emotion_strength, Level::High);
        assert_eq!(analysis.sentiment, Sentiment::Positive);
        assert!(analysis.cues.is_empty());
        assert_eq!(analysis.intent_profile.profile, ProfileKind::Uplifting);
        assert_eq!(analysis.intent_profile.pacing, Pacing::Fast);
        assert_eq!(analysis.intent_profile.tension_level, Level::Low);
        assert_eq!(analysis.shot_list.len(), 4);
        assert_eq!(analysis.enhancements.transitions, "Quick cuts");
    }

    #[tokio::test]
    async fn test_low_score_silence_becomes_anxiety() {
        let analyzer = analyzer(classifier(vec![("anger", 0.2)], "LABEL_1", None));

        let analysis = analyzer
            .analyze("Nobody speaks. Only silence.")
            .await
            .unwrap();

        assert_eq!(analysis.emotion, Emotion::Anxiety);
        assert_eq!(analysis.emotion_strength, Level::Low);
    }

    #[tokio::test]
    async fn test_intent_fallback_calls_zero_shot_once() {
        let analyzer = analyzer(classifier(
            vec![("neutral", 0.9)],
            "LABEL_0",
            Some("suspense"),
        ));

        let analysis = analyzer.analyze("A door creaks open.").await.unwrap();

        assert_eq!(analysis.emotion, Emotion::Fear);
        assert_eq!(analysis.intent_profile.profile, ProfileKind::Serious);
        assert_eq!(
            analysis.camera_movement,
            "Slow push-in toward character to build emotional depth"
        );
    }

    #[tokio::test]
    async fn test_disgust_with_neutral_sentiment() {
        let analyzer = analyzer(classifier(vec![("disgust", 0.8)], "LABEL_1", None));

        let analysis = analyzer.analyze("He opens the fridge.").await.unwrap();

        assert_eq!(analysis.emotion, Emotion::Neutral);
        assert_eq!(analysis.emotion_strength, Level::Low);
        assert_eq!(analysis.intent_profile.profile, ProfileKind::Neutral);
    }

    #[tokio::test]
    async fn test_empty_scene_is_rejected_before_inference() {
        let mut mock = MockSceneClassifier::new();
        mock.expect_classify_emotion().never();
        mock.expect_classify_sentiment().never();
        mock.expect_classify_intent().never();
        let analyzer = analyzer(mock);

        let err = analyzer.analyze("   \n\t").await.unwrap_err();
        assert!(matches!(err, IntentError::EmptyScene));
        assert!(err.is_validation());
    }

    #[tokio::test]
    async fn test_backend_failure_is_surfaced() {
        let mut mock = MockSceneClassifier::new();
        mock.expect_classify_emotion()
            .returning(|_| Err(IntentError::unavailable("connection refused")));
        mock.expect_classify_sentiment()
            .returning(|_| Ok("LABEL_1".to_string()));
        let analyzer = analyzer(mock);

        let err = analyzer.analyze("A quiet street.").await.unwrap_err();
        assert!(matches!(err, IntentError::InferenceUnavailable(_)));
        assert!(!err.is_validation());
    }

    #[tokio::test]
    async fn test_empty_zero_shot_ranking_is_an_error() {
        let mut mock = MockSceneClassifier::new();
        mock.expect_classify_emotion()
            .returning(|_| Ok(vec![EmotionScore::new("neutral", 0.9)]));
        mock.expect_classify_sentiment()
            .returning(|_| Ok("LABEL_1".to_string()));
        mock.expect_classify_intent().returning(|_, _| Ok(Vec::new()));
        let analyzer = analyzer(mock);

        let err = analyzer.analyze("A quiet street.").await.unwrap_err();
        assert!(matches!(err, IntentError::InferenceUnavailable(_)));
    }

    #[tokio::test]
    async fn test_analysis_is_idempotent() {
        let analyzer = analyzer(classifier(vec![("sadness", 0.5)], "LABEL_0", None));
        let text = "She waits by the window, gripping the letter.";

        let first = analyzer.analyze(text).await.unwrap();
        let second = analyzer.analyze(text).await.unwrap();

        assert_eq!(
            serde_json::to_string(&first).unwrap(),
            serde_json::to_string(&second).unwrap()
        );
    }

    #[tokio::test]
    async fn test_image_caption_is_analyzed() {
        let analyzer = analyzer(classifier(vec![("joy", 0.9)], "LABEL_2", None));
        let mut captioner = MockImageCaptioner::new();
        captioner
            .expect_caption()
            .returning(|_| Ok("a group of people laughing at a party".to_string()));

        let analysis = analyzer.analyze_image(&captioner, &[0xFF, 0xD8]).await.unwrap();

        assert_eq!(analysis.scene, "a group of people laughing at a party");
        assert!(analysis.cues.contains(&Cue::EmotionRelease));
        assert_eq!(analysis.intent_profile.profile, ProfileKind::Uplifting);
    }

    struct StalledClassifier;

    #[async_trait::async_trait]
    impl SceneClassifier for StalledClassifier {
        async fn classify_emotion(&self, _text: &str) -> IntentResult<Vec<EmotionScore>> {
            tokio::time::sleep(Duration::from_secs(30)).await;
            Ok(vec![EmotionScore::new("joy", 0.9)])
        }

        async fn classify_sentiment(&self, _text: &str) -> IntentResult<String> {
            Ok("LABEL_2".to_string())
        }

        async fn classify_intent(
            &self,
            _text: &str,
            _candidates: &[SceneIntent],
        ) -> IntentResult<Vec<String>> {
            Ok(vec!["neutral".to_string()])
        }
    }

    #[tokio::test]
    async fn test_stalled_backend_exceeds_budget() {
        let analyzer = SceneAnalyzer::new(Arc::new(StalledClassifier), &IntentConfig::default())
            .with_inference_timeout(Duration::from_millis(50));

        let start = Instant::now();
        let err = analyzer.analyze("A quiet street.").await.unwrap_err();

        assert!(matches!(err, IntentError::InferenceUnavailable(_)));
        assert!(start.elapsed() < Duration::from_secs(5));
    }

    #[tokio::test]
    async fn test_stalled_caption_pipeline_exceeds_budget() {
        let analyzer = SceneAnalyzer::new(Arc::new(StalledClassifier), &IntentConfig::default())
            .with_inference_timeout(Duration::from_millis(50));
        let mut captioner = MockImageCaptioner::new();
        captioner
            .expect_caption()
            .returning(|_| Ok("a man waits at a bus stop".to_string()));

        let err = analyzer
            .analyze_image(&captioner, &[0xFF, 0xD8])
            .await
            .unwrap_err();
        assert!(matches!(err, IntentError::InferenceUnavailable(_)));
    }

    #[tokio::test]
    async fn test_empty_caption_is_rejected() {
        let mut mock = MockSceneClassifier::new();
        mock.expect_classify_emotion().never();
        mock.expect_classify_sentiment().never();
        let analyzer = analyzer(mock);
        let mut captioner = MockImageCaptioner::new();
        captioner.expect_caption().returning(|_| Ok("  ".to_string()));

        let err = analyzer
            .analyze_image(&captioner, &[0xFF, 0xD8])
            .await
            .unwrap_err();
        assert!(matches!(err, IntentError::EmptyScene));
    }
}
