use crate::api::AppState;
use crate::error::{AppError, Result};
use crate::models::{Mood, Song};
use crate::services::mood::seed_genres;
use crate::services::search_session::{resolve, ResultKind, SessionReply};
use crate::services::{MusicCatalog, SearchRequest};
use axum::{
    extract::{Path, Query, State},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

const MAX_SESSION_ID_LEN: usize = 128;

#[derive(Debug, Serialize)]
struct MoodInfo {
    mood: Mood,
    seed_genres: &'static [&'static str],
}

#[derive(Debug, Deserialize)]
struct SearchParams {
    #[serde(default)]
    q: String,
    mood: Option<String>,
}

#[derive(Debug, Deserialize)]
struct LiveSearchBody {
    #[serde(default)]
    query: String,
    mood: Option<String>,
}

#[derive(Debug, Serialize)]
struct SongsResponse {
    kind: ResultKind,
    songs: Vec<Song>,
}

#[derive(Debug, Serialize)]
struct LiveSearchResponse {
    generation: u64,
    superseded: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    kind: Option<ResultKind>,
    songs: Vec<Song>,
}

pub fn catalog_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/moods", get(list_moods))
        .route("/search", get(search))
        .route("/search/live/:session_id", post(live_search))
        .route("/recommendations/:mood", get(recommendations))
}

fn parse_mood(raw: Option<&str>) -> Result<Option<Mood>> {
    match raw.map(str::trim).filter(|m| !m.is_empty()) {
        Some(label) => label.parse().map(Some),
        None => Ok(None),
    }
}

async fn require_connection(state: &AppState) -> Result<()> {
    if state.catalog.is_connected().await {
        Ok(())
    } else {
        Err(AppError::CatalogNotConnected)
    }
}

async fn list_moods() -> Json<Vec<MoodInfo>> {
    Json(
        Mood::ALL
            .into_iter()
            .map(|mood| MoodInfo {
                mood,
                seed_genres: seed_genres(mood),
            })
            .collect(),
    )
}

async fn search(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SearchParams>,
) -> Result<Json<SongsResponse>> {
    let request = SearchRequest {
        mood: parse_mood(params.mood.as_deref())?,
        query: params.q,
    };
    require_connection(&state).await?;

    let (kind, songs) = resolve(state.catalog.as_ref(), &request).await;
    Ok(Json(SongsResponse { kind, songs }))
}

async fn recommendations(
    State(state): State<Arc<AppState>>,
    Path(mood): Path<String>,
) -> Result<Json<SongsResponse>> {
    let mood: Mood = mood.parse()?;
    require_connection(&state).await?;

    let songs = state.catalog.recommendations_by_mood(mood).await;
    Ok(Json(SongsResponse {
        kind: ResultKind::Recommendations,
        songs,
    }))
}

/// Debounced search for type-ahead clients. Clients should apply only
/// responses with `superseded: false`.
async fn live_search(
    State(state): State<Arc<AppState>>,
    Path(session_id): Path<String>,
    Json(body): Json<LiveSearchBody>,
) -> Result<Json<LiveSearchResponse>> {
    if session_id.len() > MAX_SESSION_ID_LEN {
        return Err(AppError::Validation("Session id is too long".to_string()));
    }

    let request = SearchRequest {
        mood: parse_mood(body.mood.as_deref())?,
        query: body.query,
    };
    require_connection(&state).await?;

    let response = match state.search_sessions.submit(&session_id, request).await {
        SessionReply::Applied(outcome) => LiveSearchResponse {
            generation: outcome.generation,
            superseded: false,
            kind: Some(outcome.kind),
            songs: outcome.songs,
        },
        SessionReply::Superseded { generation } => LiveSearchResponse {
            generation,
            superseded: true,
            kind: None,
            songs: Vec::new(),
        },
    };

    Ok(Json(response))
}
