//! Shot list generation and camera movement advice.

use cine_models::{Emotion, Level, Pacing};

/// Inputs shared by the shot planner and the movement advisor.
#[derive(Debug, Clone, Copy)]
pub struct ShotContext<'a> {
    pub emotion: &'a Emotion,
    pub tension: Level,
    pub pacing: Pacing,
}

/// Two shots chosen by tension level.
fn tension_shots(tension: Level) -> [&'static str; 2] {
    match tension {
        Level::High => [
            "Extreme close-up to capture emotional intensity",
            "Over-the-shoulder shot to build tension",
        ],
        Level::Medium => [
            "Medium close-up for character focus",
            "Static reaction shot for subtle emotion",
        ],
        Level::Low => ["Wide establishing shot", "Natural interaction shot"],
    }
}

fn pacing_shot(pacing: Pacing) -> &'static str {
    if pacing.is_slow() {
        "Lingering static shot to emphasize mood"
    } else {
        "Quick cut shot for dynamic flow"
    }
}

fn emotion_shot(emotion: &Emotion) -> Option<&'static str> {
    match emotion {
        Emotion::Fear | Emotion::Sadness => Some("Close-up on facial expressions"),
        Emotion::Joy => Some("Wide group shot to show shared emotion"),
        _ => None,
    }
}

/// Ordered shot list: two tension shots, one pacing shot, then an optional
/// emotion shot. Always three or four entries.
pub fn generate_shots(emotion: &Emotion, tension: Level, pacing: Pacing) -> Vec<String> {
    tension_shots(tension)
        .into_iter()
        .chain(std::iter::once(pacing_shot(pacing)))
        .chain(emotion_shot(emotion))
        .map(str::to_string)
        .collect()
}

/// Fallback when no movement rule matches.
pub const DEFAULT_MOVEMENT: &str = "Natural camera movement";

struct MovementRule {
    applies: fn(&ShotContext<'_>) -> bool,
    movement: &'static str,
}

/// Movement cascade in priority order.
const MOVEMENT_RULES: &[MovementRule] = &[
    MovementRule {
        applies: |c| c.tension == Level::High,
        movement: "Handheld camera for instability and tension",
    },
    MovementRule {
        applies: |c| matches!(c.emotion, Emotion::Fear | Emotion::Sadness),
        movement: "Slow push-in toward character to build emotional depth",
    },
    MovementRule {
        applies: |c| matches!(c.emotion, Emotion::Joy),
        movement: "Smooth tracking shot to capture positive energy",
    },
    MovementRule {
        applies: |c| c.pacing.is_slow(),
        movement: "Static camera to emphasize silence and mood",
    },
];

/// Suggest a single camera movement; the first matching rule wins.
pub fn suggest_movement(emotion: &Emotion, tension: Level, pacing: Pacing) -> String {
    let context = ShotContext {
        emotion,
        tension,
        pacing,
    };

    MOVEMENT_RULES
        .iter()
        .find(|rule| (rule.applies)(&context))
        .map_or(DEFAULT_MOVEMENT, |rule| rule.movement)
        .to_string()
}
