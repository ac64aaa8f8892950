use super::playlist::first_message;
use super::Mood;
use crate::error::AppError;
use serde::{Deserialize, Serialize};
use validator::Validate;

pub const GENRES: [&str; 10] = [
    "Pop", "Rock", "Hip Hop", "R&B", "Electronic", "Jazz", "Classical", "Country", "Latin", "Indie",
];

pub const ARTISTS: [&str; 12] = [
    "The Weeknd",
    "Billie Eilish",
    "Drake",
    "Dua Lipa",
    "Taylor Swift",
    "BTS",
    "Post Malone",
    "Bad Bunny",
    "Ed Sheeran",
    "Ariana Grande",
    "Harry Styles",
    "Adele",
];

/// Choices offered by the profile setup steps, in step order.
#[derive(Debug, Clone, Serialize)]
pub struct OnboardingOptions {
    pub moods: Vec<Mood>,
    pub genres: Vec<&'static str>,
    pub artists: Vec<&'static str>,
}

impl OnboardingOptions {
    pub fn sample() -> Self {
        Self {
            moods: Mood::ALL.to_vec(),
            genres: GENRES.to_vec(),
            artists: ARTISTS.to_vec(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct OnboardingSelection {
    #[validate(length(min = 1, message = "Please select at least one mood"))]
    pub moods: Vec<Mood>,
    #[validate(length(min = 1, message = "Please select at least one genre"))]
    pub genres: Vec<String>,
    #[validate(length(min = 1, message = "Please select at least one artist"))]
    pub artists: Vec<String>,
}

impl OnboardingSelection {
    /// Checks each step has a choice and that genres and artists come from
    /// the offered lists.
    pub fn check(&self) -> crate::error::Result<()> {
        self.validate()
            .map_err(|e| AppError::Validation(first_message(&e, &["moods", "genres", "artists"])))?;

        if let Some(genre) = self.genres.iter().find(|g| !GENRES.contains(&g.as_str())) {
            return Err(AppError::Validation(format!("Unknown genre: {}", genre)));
        }
        if let Some(artist) = self.artists.iter().find(|a| !ARTISTS.contains(&a.as_str())) {
            return Err(AppError::Validation(format!("Unknown artist: {}", artist)));
        }
        Ok(())
    }
}
