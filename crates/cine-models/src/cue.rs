//! Cinematic cue categories.

use std::collections::BTreeSet;
use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Keyword-triggered behavioral signal detected in scene text.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum Cue {
    Silence,
    Discomfort,
    Tension,
    EmotionRelease,
}

impl Cue {
    pub const ALL: &'static [Cue] = &[
        Cue::Silence,
        Cue::Discomfort,
        Cue::Tension,
        Cue::EmotionRelease,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Cue::Silence => "silence",
            Cue::Discomfort => "discomfort",
            Cue::Tension => "tension",
            Cue::EmotionRelease => "emotion_release",
        }
    }
}

impl fmt::Display for Cue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Matched cue categories. Ordered so serialized output is stable.
pub type CueSet = BTreeSet<Cue>;

/// Literal keywords that produced a cue match.
pub type TriggerWords = BTreeSet<String>;
