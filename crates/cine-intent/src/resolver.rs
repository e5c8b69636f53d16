//! Emotion and sentiment resolution.
//!
//! Raw classifier outputs go through a fixed adjustment chain:
//! 1. top-1 emotion label and score
//! 2. neutral fallback when the score is below the threshold
//! 3. subtle-scene adjustment (nervous cues turn neutral into anxiety)
//! 4. sentiment label mapping
//! 5. zero-shot intent fallback while the emotion is still neutral
//! 6. neutral sentiment vetoes anger and disgust
//! 7. strength from the step 1 score

use cine_models::{Emotion, EmotionScore, Level, SceneIntent, Sentiment};
use tracing::debug;

use crate::config::{IntentConfig, DEFAULT_NEUTRAL_THRESHOLD};

/// Substrings hinting at a nervous scene behind neutral wording.
pub const NERVOUS_CUES: &[&str] = &[
    "shift",
    "stare",
    "staring",
    "avoid",
    "wait",
    "waiting",
    "pause",
    "hesitate",
    "silent",
    "silence",
    "look down",
    "floor",
];

/// Sentiment classifier label codes. Unlisted codes map to neutral.
pub const SENTIMENT_LABELS: &[(&str, Sentiment)] = &[
    ("LABEL_0", Sentiment::Negative),
    ("LABEL_1", Sentiment::Neutral),
    ("LABEL_2", Sentiment::Positive),
];

/// Score at or above which a non-neutral emotion is strong.
pub const HIGH_STRENGTH_SCORE: f64 = 0.6;

/// Score at or above which a non-neutral emotion is moderate.
pub const MEDIUM_STRENGTH_SCORE: f64 = 0.4;

/// Emotion after steps 1 to 3, before sentiment and intent are consulted.
#[derive(Debug, Clone, PartialEq)]
pub struct ProvisionalEmotion {
    pub emotion: Emotion,
    /// Raw top-1 classifier score, kept even when the label is overridden
    pub score: f64,
}

impl ProvisionalEmotion {
    /// Whether the zero-shot intent classifier has to be consulted.
    pub fn needs_intent(&self) -> bool {
        self.emotion.is_neutral()
    }
}

/// Final (emotion, sentiment, strength) triple.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedEmotion {
    pub emotion: Emotion,
    pub sentiment: Sentiment,
    pub strength: Level,
    /// Raw top-1 classifier score
    pub score: f64,
}

/// Applies the adjustment chain with a configurable neutral threshold.
#[derive(Debug, Clone)]
pub struct EmotionResolver {
    /// Top-1 scores below this fall back to neutral.
    pub threshold: f64,
}

impl Default for EmotionResolver {
    fn default() -> Self {
        Self::with_threshold(DEFAULT_NEUTRAL_THRESHOLD)
    }
}

impl EmotionResolver {
    /// Create a resolver with the threshold from config.
    pub fn new(config: &IntentConfig) -> Self {
        Self::with_threshold(config.neutral_threshold)
    }

    pub fn with_threshold(threshold: f64) -> Self {
        Self { threshold }
    }

    /// Steps 1 to 3: top-1 selection, neutral fallback, subtle-scene adjustment.
    pub fn provisional(&self, text: &str, scores: &[EmotionScore]) -> ProvisionalEmotion {
        let (mut emotion, score) = top_emotion(scores);

        if score < self.threshold {
            debug!(
                "Top emotion {} scored {:.3} below threshold {:.2}, using neutral",
                emotion, score, self.threshold
            );
            emotion = Emotion::Neutral;
        }

        let emotion = adjust_for_subtle_scene(text, emotion);
        ProvisionalEmotion { emotion, score }
    }

    /// Steps 4 to 7. `intent_label` is the top zero-shot label, if one was fetched.
    pub fn finish(
        &self,
        provisional: ProvisionalEmotion,
        sentiment_label: &str,
        intent_label: Option<&str>,
    ) -> ResolvedEmotion {
        let ProvisionalEmotion { mut emotion, score } = provisional;
        let sentiment = map_sentiment(sentiment_label);

        if emotion.is_neutral() {
            if let Some(intent) = intent_label.and_then(SceneIntent::from_label) {
                emotion = intent_emotion(intent);
                debug!("Intent fallback: {} -> {}", intent.as_str(), emotion);
            }
        }

        if sentiment == Sentiment::Neutral && matches!(emotion, Emotion::Disgust | Emotion::Anger) {
            debug!("Neutral sentiment overrides {}", emotion);
            emotion = Emotion::Neutral;
        }

        let strength = emotion_strength(score, &emotion);

        ResolvedEmotion {
            emotion,
            sentiment,
            strength,
            score,
        }
    }

    /// Run the full chain over already-fetched classifier outputs.
    pub fn resolve(
        &self,
        text: &str,
        scores: &[EmotionScore],
        sentiment_label: &str,
        intent_label: Option<&str>,
    ) -> ResolvedEmotion {
        let provisional = self.provisional(text, scores);
        self.finish(provisional, sentiment_label, intent_label)
    }
}

/// Highest-scoring emotion. Ties keep the first entry; NaN scores are skipped.
/// An empty list resolves to neutral with score zero.
pub fn top_emotion(scores: &[EmotionScore]) -> (Emotion, f64) {
    scores
        .iter()
        .filter(|s| !s.score.is_nan())
        .fold(None::<&EmotionScore>, |best, candidate| match best {
            Some(b) if b.score >= candidate.score => Some(b),
            _ => Some(candidate),
        })
        .map(|top| (Emotion::from_label(&top.label), top.score))
        .unwrap_or((Emotion::Neutral, 0.0))
}

/// Turn a neutral emotion into anxiety when the text carries a nervous cue.
pub fn adjust_for_subtle_scene(text: &str, emotion: Emotion) -> Emotion {
    if !emotion.is_neutral() {
        return emotion;
    }

    let text = text.to_lowercase();
    if NERVOUS_CUES.iter().any(|cue| text.contains(cue)) {
        Emotion::Anxiety
    } else {
        emotion
    }
}

/// Map a sentiment label code. Unknown codes are neutral.
pub fn map_sentiment(label: &str) -> Sentiment {
    SENTIMENT_LABELS
        .iter()
        .find(|(code, _)| *code == label)
        .map(|(_, sentiment)| *sentiment)
        .unwrap_or(Sentiment::Neutral)
}

/// Emotion implied by a scene intent.
pub fn intent_emotion(intent: SceneIntent) -> Emotion {
    match intent {
        SceneIntent::Romance | SceneIntent::Celebration => Emotion::Joy,
        SceneIntent::Sadness => Emotion::Sadness,
        SceneIntent::Conflict => Emotion::Anger,
        SceneIntent::Suspense => Emotion::Fear,
        SceneIntent::Reconciliation => Emotion::Relief,
        SceneIntent::Anticipation => Emotion::Anxiety,
        SceneIntent::Neutral => Emotion::Neutral,
    }
}

/// Strength of the final emotion, always low for neutral.
pub fn emotion_strength(score: f64, emotion: &Emotion) -> Level {
    if emotion.is_neutral() {
        Level::Low
    } else if score >= HIGH_STRENGTH_SCORE {
        Level::High
    } else if score >= MEDIUM_STRENGTH_SCORE {
        Level::Medium
    } else {
        Level::Low
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scores(pairs: &[(&str, f64)]) -> Vec<EmotionScore> {
        pairs.iter().map(|(l, s)| EmotionScore::new(*l, *s)).collect()
    }

    #[test]
    fn test_top_emotion_selection() {
        let s = scores(&[("sadness", 0.2), ("Joy", 0.8), ("fear", 0.1)]);
        assert_eq!(top_emotion(&s), (Emotion::Joy, 0.8));
    }

    #[test]
    fn test_top_emotion_ties_keep_first() {
        let s = scores(&[("fear", 0.5), ("anger", 0.5)]);
        assert_eq!(top_emotion(&s).0, Emotion::Fear);
    }

    #[test]
    fn test_top_emotion_empty_is_neutral() {
        assert_eq!(top_emotion(&[]), (Emotion::Neutral, 0.0));
    }

    #[test]
    fn test_positive_scene() {
        let resolver = EmotionResolver::default();
        let s = scores(&[("joy", 0.8), ("admiration", 0.1)]);
        let resolved = resolver.resolve("They dance in the rain.", &s, "LABEL_2", None);

        assert_eq!(resolved.emotion, Emotion::Joy);
        assert_eq!(resolved.sentiment, Sentiment::Positive);
        assert_eq!(resolved.strength, Level::High);
    }

    #[test]
    fn test_low_score_with_nervous_cue_becomes_anxiety() {
        let resolver = EmotionResolver::default();
        let s = scores(&[("anger", 0.2)]);

        let provisional = resolver.provisional("A long silence fills the hall.", &s);
        assert_eq!(provisional.emotion, Emotion::Anxiety);
        assert!(!provisional.needs_intent());

        let resolved = resolver.finish(provisional, "LABEL_1", None);
        assert_eq!(resolved.emotion, Emotion::Anxiety);
        // 0.2 is below the medium cutoff
        assert_eq!(resolved.strength, Level::Low);
    }

    #[test]
    fn test_subtle_adjustment_only_applies_to_neutral() {
        assert_eq!(
            adjust_for_subtle_scene("He stares at the floor", Emotion::Sadness),
            Emotion::Sadness
        );
        assert_eq!(
            adjust_for_subtle_scene("She LOOKS DOWN. She Look Down again", Emotion::Neutral),
            Emotion::Anxiety
        );
        assert_eq!(
            adjust_for_subtle_scene("They eat lunch", Emotion::Neutral),
            Emotion::Neutral
        );
    }

    #[test]
    fn test_intent_fallback() {
        let resolver = EmotionResolver::default();
        let s = scores(&[("neutral", 0.9)]);

        let provisional = resolver.provisional("They meet at the station.", &s);
        assert!(provisional.needs_intent());

        let resolved = resolver.finish(provisional, "LABEL_2", Some("romance"));
        assert_eq!(resolved.emotion, Emotion::Joy);
        assert_eq!(resolved.strength, Level::High);
    }

    #[test]
    fn test_intent_ignored_when_emotion_known() {
        let resolver = EmotionResolver::default();
        let s = scores(&[("sadness", 0.7)]);
        let resolved = resolver.resolve("He reads the letter.", &s, "LABEL_0", Some("celebration"));
        assert_eq!(resolved.emotion, Emotion::Sadness);
    }

    #[test]
    fn test_unknown_intent_label_keeps_neutral() {
        let resolver = EmotionResolver::default();
        let s = scores(&[("neutral", 0.9)]);
        let resolved = resolver.resolve("They meet at the station.", &s, "LABEL_1", Some("heist"));
        assert_eq!(resolved.emotion, Emotion::Neutral);
        assert_eq!(resolved.strength, Level::Low);
    }

    #[test]
    fn test_intent_emotion_table() {
        assert_eq!(intent_emotion(SceneIntent::Celebration), Emotion::Joy);
        assert_eq!(intent_emotion(SceneIntent::Conflict), Emotion::Anger);
        assert_eq!(intent_emotion(SceneIntent::Suspense), Emotion::Fear);
        assert_eq!(intent_emotion(SceneIntent::Reconciliation), Emotion::Relief);
        assert_eq!(intent_emotion(SceneIntent::Anticipation), Emotion::Anxiety);
        assert_eq!(intent_emotion(SceneIntent::Neutral), Emotion::Neutral);
    }

    #[test]
    fn test_neutral_sentiment_vetoes_disgust() {
        let resolver = EmotionResolver::default();
        let s = scores(&[("disgust", 0.9)]);
        let resolved = resolver.resolve("He sniffs the milk.", &s, "LABEL_1", None);

        assert_eq!(resolved.emotion, Emotion::Neutral);
        assert_eq!(resolved.strength, Level::Low);
    }

    #[test]
    fn test_conflict_intent_vetoed_by_neutral_sentiment() {
        let resolver = EmotionResolver::default();
        let s = scores(&[("neutral", 0.7)]);
        let resolved = resolver.resolve("Two men talk.", &s, "LABEL_1", Some("conflict"));
        assert_eq!(resolved.emotion, Emotion::Neutral);
    }

    #[test]
    fn test_negative_sentiment_keeps_anger() {
        let resolver = EmotionResolver::default();
        let s = scores(&[("anger", 0.5)]);
        let resolved = resolver.resolve("He slams the door.", &s, "LABEL_0", None);
        assert_eq!(resolved.emotion, Emotion::Anger);
        assert_eq!(resolved.strength, Level::Medium);
    }

    #[test]
    fn test_sentiment_mapping() {
        assert_eq!(map_sentiment("LABEL_0"), Sentiment::Negative);
        assert_eq!(map_sentiment("LABEL_1"), Sentiment::Neutral);
        assert_eq!(map_sentiment("LABEL_2"), Sentiment::Positive);
        assert_eq!(map_sentiment("LABEL_9"), Sentiment::Neutral);
        assert_eq!(map_sentiment("positive"), Sentiment::Neutral);
    }

    #[test]
    fn test_strength_uses_raw_score_after_override() {
        // Below-threshold anger turned into anxiety still reports the raw score
        let resolver = EmotionResolver::with_threshold(0.5);
        let s = scores(&[("anger", 0.45)]);
        let resolved = resolver.resolve("They wait.", &s, "LABEL_0", None);
        assert_eq!(resolved.emotion, Emotion::Anxiety);
        assert_eq!(resolved.strength, Level::Medium);
        assert_eq!(resolved.score, 0.45);
    }

    #[test]
    fn test_strength_cutoffs() {
        assert_eq!(emotion_strength(0.6, &Emotion::Fear), Level::High);
        assert_eq!(emotion_strength(0.59, &Emotion::Fear), Level::Medium);
        assert_eq!(emotion_strength(0.4, &Emotion::Fear), Level::Medium);
        assert_eq!(emotion_strength(0.39, &Emotion::Fear), Level::Low);
        assert_eq!(emotion_strength(0.99, &Emotion::Neutral), Level::Low);
    }

    #[test]
    fn test_neutral_always_low_strength() {
        let resolver = EmotionResolver::default();
        let texts = ["They eat lunch.", "She waits.", "A quiet room"];
        let labels = ["LABEL_0", "LABEL_1", "LABEL_2", "bogus"];
        let intents = [None, Some("neutral"), Some("conflict"), Some("romance")];
        let top = [("neutral", 0.95), ("disgust", 0.9), ("anger", 0.1), ("joy", 0.3)];

        for text in texts {
            for label in labels {
                for intent in intents {
                    for (emotion, score) in top {
                        let s = scores(&[(emotion, score)]);
                        let resolved = resolver.resolve(text, &s, label, intent);
                        if resolved.emotion.is_neutral() {
                            assert_eq!(resolved.strength, Level::Low);
                        }
                    }
                }
            }
        }
    }
}
