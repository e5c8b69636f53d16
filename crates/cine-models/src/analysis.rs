//! Scene analysis result models.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::cue::{CueSet, TriggerWords};
use crate::emotion::{Emotion, Level, Sentiment};
use crate::profile::IntentProfile;

/// Soundtrack, grading and transition suggestions derived from the profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Enhancements {
    pub soundtrack: String,
    pub color_grading: String,
    pub transitions: String,
    /// Free-text prompt suitable for a storyboard image generator
    pub storyboard_prompt: String,
}

/// Complete cinematic interpretation of one scene.
///
/// This is the record returned by the analyzer and serialized by the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct SceneAnalysis {
    /// Scene text that was analyzed (caption text for image input)
    pub scene: String,

    pub emotion: Emotion,

    pub emotion_strength: Level,

    pub sentiment: Sentiment,

    /// Detected cue categories
    pub cues: CueSet,

    /// Keywords that triggered the cues
    pub trigger_words: TriggerWords,

    pub intent_profile: IntentProfile,

    /// Ordered shot recommendations (3 or 4 entries)
    pub shot_list: Vec<String>,

    pub camera_movement: String,

    pub enhancements: Enhancements,
}
