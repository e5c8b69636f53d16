//! Visual intent profile models.

use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::emotion::Level;

/// Qualitative scene tempo.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum Pacing {
    #[serde(rename = "very slow")]
    VerySlow,
    #[serde(rename = "slow")]
    Slow,
    #[serde(rename = "moderate")]
    Moderate,
    #[serde(rename = "fast")]
    Fast,
}

impl Pacing {
    pub fn as_str(&self) -> &'static str {
        match self {
            Pacing::VerySlow => "very slow",
            Pacing::Slow => "slow",
            Pacing::Moderate => "moderate",
            Pacing::Fast => "fast",
        }
    }

    /// True for `very slow` and `slow`.
    pub fn is_slow(&self) -> bool {
        matches!(self, Pacing::VerySlow | Pacing::Slow)
    }
}

impl fmt::Display for Pacing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Identifier of the mapping rule that produced an [`IntentProfile`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ProfileKind {
    /// Silence together with discomfort.
    TenseAnticipation,
    /// Tension or discomfort cues.
    Tense,
    /// Silence alone.
    Anticipation,
    /// Negative emotion without cues.
    Serious,
    /// Positive emotion without cues.
    Uplifting,
    /// Nothing notable detected.
    Neutral,
}

impl ProfileKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProfileKind::TenseAnticipation => "tense_anticipation",
            ProfileKind::Tense => "tense",
            ProfileKind::Anticipation => "anticipation",
            ProfileKind::Serious => "serious",
            ProfileKind::Uplifting => "uplifting",
            ProfileKind::Neutral => "neutral",
        }
    }
}

/// Camera, lighting and pacing recommendation for a scene.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct IntentProfile {
    /// Rule that fired
    pub profile: ProfileKind,

    /// Suggested framings, most preferred first
    pub camera_options: Vec<String>,

    /// Suggested lighting setups, most preferred first
    pub lighting_options: Vec<String>,

    pub pacing: Pacing,

    /// Short mood tag (e.g. "tense anticipation")
    pub mood: String,

    pub tension_level: Level,

    pub confidence: Level,

    /// Human-readable explanation of the recommendation
    pub reasoning: String,
}
