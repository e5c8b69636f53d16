//! Soundtrack, color grading and transition suggestions.

use cine_models::{Emotion, Enhancements, Pacing};

/// Soundtrack by emotion label.
pub const SOUNDTRACKS: &[(&str, &str)] = &[
    ("fear", "Low ambient drones, suspense strings"),
    ("sadness", "Soft piano, slow strings"),
    ("anger", "Heavy percussion, rising tension beats"),
    ("joy", "Light acoustic guitar, uplifting melodies"),
    ("surprise", "Sudden orchestral hits, dynamic cues"),
    ("neutral", DEFAULT_SOUNDTRACK),
];

/// Soundtrack for emotions missing from [`SOUNDTRACKS`].
pub const DEFAULT_SOUNDTRACK: &str = "Minimal ambient background";

/// Color grading by emotion label.
pub const COLOR_GRADES: &[(&str, &str)] = &[
    ("fear", "Cool blue tones, low saturation"),
    ("sadness", "Desaturated colors, soft shadows"),
    ("anger", "High contrast, warm tones"),
    ("joy", "Bright vibrant colors, warm highlights"),
    ("surprise", "Dynamic contrast shifts"),
    ("neutral", DEFAULT_COLOR_GRADE),
];

/// Color grading for emotions missing from [`COLOR_GRADES`].
pub const DEFAULT_COLOR_GRADE: &str = "Natural tones";

fn lookup(table: &[(&str, &'static str)], emotion: &Emotion, default: &'static str) -> &'static str {
    table
        .iter()
        .find(|(label, _)| *label == emotion.as_str())
        .map_or(default, |(_, value)| *value)
}

pub fn soundtrack(emotion: &Emotion) -> &'static str {
    lookup(SOUNDTRACKS, emotion, DEFAULT_SOUNDTRACK)
}

pub fn color_grading(emotion: &Emotion) -> &'static str {
    lookup(COLOR_GRADES, emotion, DEFAULT_COLOR_GRADE)
}

pub fn transition(pacing: Pacing) -> &'static str {
    match pacing {
        Pacing::VerySlow => "Fade-in / Fade-out",
        Pacing::Slow => "Cross dissolve",
        Pacing::Fast => "Quick cuts",
        Pacing::Moderate => "Standard cut",
    }
}

pub fn storyboard_prompt(mood: &str, emotion: &Emotion, pacing: Pacing) -> String {
    format!(
        "A cinematic scene showing {} mood with {} emotion, shot with {} pacing, \
         dramatic lighting, expressive character focus.",
        mood, emotion, pacing
    )
}

/// Build all enhancement suggestions for a scene.
pub fn cinematic_enhancements(emotion: &Emotion, mood: &str, pacing: Pacing) -> Enhancements {
    Enhancements {
        soundtrack: soundtrack(emotion).to_string(),
        color_grading: color_grading(emotion).to_string(),
        transitions: transition(pacing).to_string(),
        storyboard_prompt: storyboard_prompt(mood, emotion, pacing),
    }
}
