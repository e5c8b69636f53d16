//! Emotion, sentiment and scene-intent vocabularies.
//!
//! Emotion labels are seeded by the GoEmotions taxonomy used by the upstream
//! classifier, plus the synthetic `anxiety` value produced by the resolver.
//! Labels outside the known set are kept verbatim in [`Emotion::Other`].

use std::fmt;

use schemars::gen::SchemaGenerator;
use schemars::schema::Schema;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Emotion tag attached to a scene.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Emotion {
    Admiration,
    Amusement,
    Anger,
    Annoyance,
    Anxiety,
    Approval,
    Caring,
    Confusion,
    Curiosity,
    Desire,
    Disappointment,
    Disapproval,
    Disgust,
    Embarrassment,
    Excitement,
    Fear,
    Gratitude,
    Grief,
    Joy,
    Love,
    Nervousness,
    #[default]
    Neutral,
    Optimism,
    Pride,
    Realization,
    Relief,
    Remorse,
    Sadness,
    Surprise,
    /// Label reported by the classifier that is not part of the known set.
    Other(String),
}

impl Emotion {
    /// Parse a classifier label. Matching is case-insensitive.
    pub fn from_label(label: &str) -> Self {
        let label = label.trim().to_lowercase();
        match label.as_str() {
            "admiration" => Self::Admiration,
            "amusement" => Self::Amusement,
            "anger" => Self::Anger,
            "annoyance" => Self::Annoyance,
            "anxiety" => Self::Anxiety,
            "approval" => Self::Approval,
            "caring" => Self::Caring,
            "confusion" => Self::Confusion,
            "curiosity" => Self::Curiosity,
            "desire" => Self::Desire,
            "disappointment" => Self::Disappointment,
            "disapproval" => Self::Disapproval,
            "disgust" => Self::Disgust,
            "embarrassment" => Self::Embarrassment,
            "excitement" => Self::Excitement,
            "fear" => Self::Fear,
            "gratitude" => Self::Gratitude,
            "grief" => Self::Grief,
            "joy" => Self::Joy,
            "love" => Self::Love,
            "nervousness" => Self::Nervousness,
            "neutral" => Self::Neutral,
            "optimism" => Self::Optimism,
            "pride" => Self::Pride,
            "realization" => Self::Realization,
            "relief" => Self::Relief,
            "remorse" => Self::Remorse,
            "sadness" => Self::Sadness,
            "surprise" => Self::Surprise,
            _ => Self::Other(label),
        }
    }

    /// Returns the lowercase label.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Admiration => "admiration",
            Self::Amusement => "amusement",
            Self::Anger => "anger",
            Self::Annoyance => "annoyance",
            Self::Anxiety => "anxiety",
            Self::Approval => "approval",
            Self::Caring => "caring",
            Self::Confusion => "confusion",
            Self::Curiosity => "curiosity",
            Self::Desire => "desire",
            Self::Disappointment => "disappointment",
            Self::Disapproval => "disapproval",
            Self::Disgust => "disgust",
            Self::Embarrassment => "embarrassment",
            Self::Excitement => "excitement",
            Self::Fear => "fear",
            Self::Gratitude => "gratitude",
            Self::Grief => "grief",
            Self::Joy => "joy",
            Self::Love => "love",
            Self::Nervousness => "nervousness",
            Self::Neutral => "neutral",
            Self::Optimism => "optimism",
            Self::Pride => "pride",
            Self::Realization => "realization",
            Self::Relief => "relief",
            Self::Remorse => "remorse",
            Self::Sadness => "sadness",
            Self::Surprise => "surprise",
            Self::Other(label) => label,
        }
    }

    pub fn is_neutral(&self) -> bool {
        matches!(self, Self::Neutral)
    }
}

impl From<String> for Emotion {
    fn from(label: String) -> Self {
        Self::from_label(&label)
    }
}

impl From<Emotion> for String {
    fn from(emotion: Emotion) -> Self {
        emotion.as_str().to_string()
    }
}

impl fmt::Display for Emotion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl JsonSchema for Emotion {
    fn schema_name() -> String {
        "Emotion".to_string()
    }

    fn json_schema(gen: &mut SchemaGenerator) -> Schema {
        String::json_schema(gen)
    }
}

/// Overall sentiment polarity of a scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema, Default)]
#[serde(rename_all = "snake_case")]
pub enum Sentiment {
    Positive,
    #[default]
    Neutral,
    Negative,
}

impl Sentiment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Sentiment::Positive => "positive",
            Sentiment::Neutral => "neutral",
            Sentiment::Negative => "negative",
        }
    }
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Three-step scale shared by emotion strength, tension level and confidence.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema, Default,
)]
#[serde(rename_all = "snake_case")]
pub enum Level {
    #[default]
    Low,
    Medium,
    High,
}

impl Level {
    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Low => "low",
            Level::Medium => "medium",
            Level::High => "high",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Scene intent categories offered to the zero-shot classifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum SceneIntent {
    Romance,
    Celebration,
    Sadness,
    Conflict,
    Suspense,
    Reconciliation,
    Anticipation,
    Neutral,
}

impl SceneIntent {
    /// Candidate labels in the order they are sent to the classifier.
    pub const ALL: &'static [SceneIntent] = &[
        SceneIntent::Romance,
        SceneIntent::Celebration,
        SceneIntent::Sadness,
        SceneIntent::Conflict,
        SceneIntent::Suspense,
        SceneIntent::Reconciliation,
        SceneIntent::Anticipation,
        SceneIntent::Neutral,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SceneIntent::Romance => "romance",
            SceneIntent::Celebration => "celebration",
            SceneIntent::Sadness => "sadness",
            SceneIntent::Conflict => "conflict",
            SceneIntent::Suspense => "suspense",
            SceneIntent::Reconciliation => "reconciliation",
            SceneIntent::Anticipation => "anticipation",
            SceneIntent::Neutral => "neutral",
        }
    }

    /// Parse a label returned by the classifier. Unknown labels yield `None`.
    pub fn from_label(label: &str) -> Option<Self> {
        let label = label.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|intent| intent.as_str().eq_ignore_ascii_case(label))
    }

    /// Candidate labels as owned strings, for request payloads.
    pub fn candidate_labels() -> Vec<String> {
        Self::ALL.iter().map(|i| i.as_str().to_string()).collect()
    }
}

/// A single (label, score) pair from the emotion classifier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct EmotionScore {
    pub label: String,
    pub score: f64,
}

impl EmotionScore {
    pub fn new(label: impl Into<String>, score: f64) -> Self {
        Self {
            label: label.into(),
            score,
        }
    }
}
