//! Visual intent mapping.
//!
//! Profiles are chosen by an ordered rule list; the first rule whose predicate
//! holds wins. The final rule always matches, so every input yields a profile.

use cine_models::{Cue, CueSet, Emotion, IntentProfile, Level, Pacing, ProfileKind, Sentiment};
use tracing::debug;

/// Inputs visible to a mapping rule.
#[derive(Debug, Clone, Copy)]
pub struct IntentSignals<'a> {
    pub emotion: &'a Emotion,
    pub sentiment: Sentiment,
    pub cues: &'a CueSet,
}

/// Where a profile takes its tension level from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TensionSource {
    /// Computed from cue density
    Cues,
    /// Always low
    Low,
}

/// Fixed recommendation attached to a rule.
#[derive(Debug)]
struct ProfileTemplate {
    kind: ProfileKind,
    camera: &'static [&'static str],
    lighting: &'static [&'static str],
    pacing: Pacing,
    mood: &'static str,
    tension: TensionSource,
    reasoning: &'static str,
}

/// A (predicate, profile) pair in the mapping cascade.
struct IntentRule {
    applies: fn(&IntentSignals<'_>) -> bool,
    template: &'static ProfileTemplate,
}

const TENSE_ANTICIPATION: ProfileTemplate = ProfileTemplate {
    kind: ProfileKind::TenseAnticipation,
    camera: &["close-up", "static shot"],
    lighting: &["dim", "low-key"],
    pacing: Pacing::VerySlow,
    mood: "tense anticipation",
    tension: TensionSource::Cues,
    reasoning: "Detected silence and discomfort indicating internal tension and anticipation.",
};

const TENSE: ProfileTemplate = ProfileTemplate {
    kind: ProfileKind::Tense,
    camera: &["close-up"],
    lighting: &["low-key"],
    pacing: Pacing::Slow,
    mood: "tense",
    tension: TensionSource::Cues,
    reasoning: "Detected behavioral cues indicating discomfort or tension.",
};

const ANTICIPATION: ProfileTemplate = ProfileTemplate {
    kind: ProfileKind::Anticipation,
    camera: &["static shot", "wide shot"],
    lighting: &["dim"],
    pacing: Pacing::VerySlow,
    mood: "anticipation",
    tension: TensionSource::Cues,
    reasoning: "Silence suggests anticipation and emotional pause.",
};

const SERIOUS: ProfileTemplate = ProfileTemplate {
    kind: ProfileKind::Serious,
    camera: &["close-up"],
    lighting: &["low-key"],
    pacing: Pacing::Slow,
    mood: "serious",
    tension: TensionSource::Cues,
    reasoning: "Emotion analysis suggests a serious or intense scene.",
};

const UPLIFTING: ProfileTemplate = ProfileTemplate {
    kind: ProfileKind::Uplifting,
    camera: &["wide shot", "medium shot"],
    lighting: &["bright", "natural"],
    pacing: Pacing::Fast,
    mood: "uplifting",
    tension: TensionSource::Low,
    reasoning: "Positive emotion detected.",
};

const NEUTRAL: ProfileTemplate = ProfileTemplate {
    kind: ProfileKind::Neutral,
    camera: &["medium shot"],
    lighting: &["natural"],
    pacing: Pacing::Moderate,
    mood: "neutral",
    tension: TensionSource::Low,
    reasoning: "No strong cinematic signals detected.",
};

/// Mapping cascade in priority order.
const INTENT_RULES: &[IntentRule] = &[
    IntentRule {
        applies: |s| s.cues.contains(&Cue::Silence) && s.cues.contains(&Cue::Discomfort),
        template: &TENSE_ANTICIPATION,
    },
    IntentRule {
        applies: |s| s.cues.contains(&Cue::Tension) || s.cues.contains(&Cue::Discomfort),
        template: &TENSE,
    },
    IntentRule {
        applies: |s| s.cues.contains(&Cue::Silence),
        template: &ANTICIPATION,
    },
    IntentRule {
        applies: |s| {
            matches!(
                s.emotion,
                Emotion::Fear | Emotion::Sadness | Emotion::Anger | Emotion::Disgust
            )
        },
        template: &SERIOUS,
    },
    IntentRule {
        applies: |s| matches!(s.emotion, Emotion::Joy | Emotion::Surprise),
        template: &UPLIFTING,
    },
    IntentRule {
        applies: |_| true,
        template: &NEUTRAL,
    },
];

/// Tension from cue density: two or more cues is high, one is medium.
pub fn intensity(cues: &CueSet) -> Level {
    match cues.len() {
        0 => Level::Low,
        1 => Level::Medium,
        _ => Level::High,
    }
}

/// Confidence from cue density plus one point for a non-neutral emotion.
pub fn confidence(cues: &CueSet, emotion: &Emotion) -> Level {
    let cue_points = cues.len().min(2);
    let emotion_points = usize::from(!emotion.is_neutral());

    match cue_points + emotion_points {
        0 | 1 => Level::Low,
        2 => Level::Medium,
        _ => Level::High,
    }
}

fn select(signals: &IntentSignals<'_>) -> &'static ProfileTemplate {
    INTENT_RULES
        .iter()
        .find(|rule| (rule.applies)(signals))
        .map(|rule| rule.template)
        .unwrap_or(&NEUTRAL)
}

/// Which profile the cascade picks for the given inputs.
pub fn select_profile(emotion: &Emotion, sentiment: Sentiment, cues: &CueSet) -> ProfileKind {
    select(&IntentSignals {
        emotion,
        sentiment,
        cues,
    })
    .kind
}

/// Map resolved emotion, sentiment and cues to a visual intent profile.
pub fn map_intent(emotion: &Emotion, sentiment: Sentiment, cues: &CueSet) -> IntentProfile {
    let signals = IntentSignals {
        emotion,
        sentiment,
        cues,
    };
    let template = select(&signals);

    let tension_level = match template.tension {
        TensionSource::Cues => intensity(cues),
        TensionSource::Low => Level::Low,
    };
    let confidence = confidence(cues, emotion);

    debug!(
        profile = template.kind.as_str(),
        tension = tension_level.as_str(),
        confidence = confidence.as_str(),
        "Mapped visual intent"
    );

    IntentProfile {
        profile: template.kind,
        camera_options: template.camera.iter().map(|s| s.to_string()).collect(),
        lighting_options: template.lighting.iter().map(|s| s.to_string()).collect(),
        pacing: template.pacing,
        mood: template.mood.to_string(),
        tension_level,
        confidence,
        reasoning: template.reasoning.to_string(),
    }
}
