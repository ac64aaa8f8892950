//! Title-keyword mood inference and the seed genres used for mood
//! recommendations.

use crate::models::Mood;

/// Checked in order; the first bucket with a match wins.
const KEYWORD_BUCKETS: [(Mood, &[&str]); 4] = [
    (Mood::Happy, &["happy", "joy", "sunny"]),
    (Mood::Sad, &["sad", "blue", "melancholy"]),
    (Mood::Chill, &["chill", "relax", "calm"]),
    (Mood::Energetic, &["energy", "pump", "dance"]),
];

/// Infers a mood from a track title by case-insensitive substring match.
/// Titles matching no bucket are `Focused`.
pub fn infer_mood(title: &str) -> Mood {
    let title = title.to_lowercase();
    KEYWORD_BUCKETS
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|k| title.contains(k)))
        .map(|(mood, _)| *mood)
        .unwrap_or(Mood::Focused)
}

pub fn seed_genres(mood: Mood) -> &'static [&'static str] {
    match mood {
        Mood::Happy => &["pop", "happy", "dance"],
        Mood::Sad => &["sad", "singer-songwriter", "blues"],
        Mood::Chill => &["chill", "ambient", "study"],
        Mood::Energetic => &["edm", "workout", "rock"],
        Mood::Focused => &["focus", "classical", "instrumental"],
    }
}
