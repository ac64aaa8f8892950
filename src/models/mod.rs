pub mod library;
pub mod onboarding;
pub mod playlist;
pub mod song;

pub use library::{DashboardContent, HistoryContent, ProfileContent, SocialContent};
pub use onboarding::{OnboardingOptions, OnboardingSelection};
pub use playlist::{CreatePlaylistRequest, Playlist};
pub use song::{format_duration, Mood, Song};
