use crate::error::AppError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mood {
    Happy,
    Sad,
    Chill,
    Energetic,
    Focused,
}

impl Mood {
    pub const ALL: [Mood; 5] = [
        Mood::Happy,
        Mood::Sad,
        Mood::Chill,
        Mood::Energetic,
        Mood::Focused,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Mood::Happy => "happy",
            Mood::Sad => "sad",
            Mood::Chill => "chill",
            Mood::Energetic => "energetic",
            Mood::Focused => "focused",
        }
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mood {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let label = s.trim().to_lowercase();
        Mood::ALL
            .into_iter()
            .find(|mood| mood.as_str() == label)
            .ok_or_else(|| AppError::Validation(format!("Unknown mood: {}", s)))
    }
}

/// A track as rendered by the client. Never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Song {
    pub id: String,
    pub title: String,
    pub artist: String,
    pub duration: String,
    pub mood: Mood,
    #[serde(rename = "albumArt")]
    pub album_art: Option<String>,
}

/// Formats a millisecond duration as `m:ss`, rounding to the nearest second.
pub fn format_duration(duration_ms: u64) -> String {
    let total_seconds = duration_ms.saturating_add(500) / 1000;
    format!("{}:{:02}", total_seconds / 60, total_seconds % 60)
}
