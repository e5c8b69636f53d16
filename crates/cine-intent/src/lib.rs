//! Rule-based cinematic intent engine.
//!
//! This crate turns classifier outputs for a scene description into a
//! cinematic plan:
//! - Cue detection over fixed keyword lists
//! - Emotion/sentiment resolution with neutral, subtle-scene and intent fallbacks
//! - Visual intent profile selection
//! - Shot list, camera movement and enhancement suggestions
//!
//! Model inference stays behind the [`SceneClassifier`] and [`ImageCaptioner`]
//! traits; everything else is deterministic.

pub mod analyzer;
pub mod classifier;
pub mod config;
pub mod cues;
pub mod enhancements;
pub mod error;
pub mod mapper;
pub mod resolver;
pub mod shots;

pub use analyzer::{interpret, SceneAnalyzer};
pub use classifier::{ImageCaptioner, SceneClassifier};
pub use config::IntentConfig;
pub use cues::detect_cues;
pub use enhancements::cinematic_enhancements;
pub use error::{IntentError, IntentResult};
pub use mapper::{confidence, intensity, map_intent, select_profile};
pub use resolver::{EmotionResolver, ProvisionalEmotion, ResolvedEmotion};
pub use shots::{generate_shots, suggest_movement};
