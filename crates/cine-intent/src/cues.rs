//! Cinematic cue detection.
//!
//! Matching is plain substring containment on the lowercased text, so a
//! keyword also fires inside a longer word ("stare" matches "starers").

use cine_models::{Cue, CueSet, TriggerWords};

/// Keywords for each cue category.
pub const CUE_KEYWORDS: &[(Cue, &[&str])] = &[
    (
        Cue::Silence,
        &["silent", "silence", "pause", "paused", "still", "wait", "waiting"],
    ),
    (
        Cue::Discomfort,
        &["avoid", "avoids", "forced", "nervous", "uneasy", "awkward"],
    ),
    (Cue::Tension, &["hesitate", "grip", "tight", "shake", "stare"]),
    (Cue::EmotionRelease, &["laugh", "cry", "smile", "scream"]),
];

/// Detect cue categories and the keywords that triggered them.
pub fn detect_cues(text: &str) -> (CueSet, TriggerWords) {
    let text = text.to_lowercase();

    let mut cues = CueSet::new();
    let mut words = TriggerWords::new();

    for (cue, keywords) in CUE_KEYWORDS {
        for keyword in keywords.iter().filter(|k| text.contains(*k)) {
            cues.insert(*cue);
            words.insert((*keyword).to_string());
        }
    }

    (cues, words)
}
