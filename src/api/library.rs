use crate::api::AppState;
use crate::error::Result;
use crate::models::{
    CreatePlaylistRequest, DashboardContent, HistoryContent, OnboardingOptions,
    OnboardingSelection, Playlist, ProfileContent, SocialContent,
};
use axum::{
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use std::sync::Arc;

pub fn library_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/dashboard", get(dashboard))
        .route("/history", get(history))
        .route("/social", get(social))
        .route("/profile", get(profile))
        .route("/onboarding", get(onboarding_options).post(complete_onboarding))
        .route("/playlists", post(save_playlist))
}

async fn dashboard() -> Json<DashboardContent> {
    Json(DashboardContent::sample())
}

async fn history() -> Json<HistoryContent> {
    Json(HistoryContent::sample())
}

async fn social() -> Json<SocialContent> {
    Json(SocialContent::sample())
}

async fn profile() -> Json<ProfileContent> {
    Json(ProfileContent::sample())
}

async fn onboarding_options() -> Json<OnboardingOptions> {
    Json(OnboardingOptions::sample())
}

#[derive(Debug, Serialize)]
struct OnboardingResponse {
    message: &'static str,
}

// Selections are checked but not stored
async fn complete_onboarding(
    Json(selection): Json<OnboardingSelection>,
) -> Result<Json<OnboardingResponse>> {
    selection.check()?;

    tracing::info!(
        "Profile setup complete: {} moods, {} genres, {} artists",
        selection.moods.len(),
        selection.genres.len(),
        selection.artists.len()
    );

    Ok(Json(OnboardingResponse {
        message: "Profile setup complete",
    }))
}

// Playlists are acknowledged but not stored
async fn save_playlist(Json(req): Json<CreatePlaylistRequest>) -> Result<Json<Playlist>> {
    let playlist = req.into_playlist()?;

    tracing::info!(
        "Saved playlist '{}' ({}) with {} songs",
        playlist.name,
        playlist.id,
        playlist.song_ids.len()
    );

    Ok(Json(playlist))
}
