//! Shared data models for CineIntent.
//!
//! This crate provides Serde-serializable types for:
//! - Emotion, sentiment and scene-intent vocabularies
//! - Cinematic cue categories
//! - Visual intent profiles and pacing
//! - The scene analysis record returned to clients

pub mod analysis;
pub mod cue;
pub mod emotion;
pub mod profile;

// Re-export common types
pub use analysis::{Enhancements, SceneAnalysis};
pub use cue::{Cue, CueSet, TriggerWords};
pub use emotion::{Emotion, EmotionScore, Level, SceneIntent, Sentiment};
pub use profile::{IntentProfile, Pacing, ProfileKind};
