use crate::api::AppState;
use crate::error::{AppError, Result};
use axum::{
    extract::State,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

#[derive(Debug, Serialize)]
pub struct ConnectionStatus {
    pub connected: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ConnectRequest {
    #[serde(default)]
    pub api_key: String,
}

pub fn settings_routes() -> Router<Arc<AppState>> {
    Router::new().route("/catalog/connection", get(get_connection).put(connect))
}

async fn get_connection(State(state): State<Arc<AppState>>) -> Json<ConnectionStatus> {
    Json(ConnectionStatus {
        connected: state.catalog.is_connected().await,
        message: None,
    })
}

/// Save the catalog API key and reconnect the client with it
async fn connect(
    State(state): State<Arc<AppState>>,
    Json(req): Json<ConnectRequest>,
) -> Result<Json<ConnectionStatus>> {
    if !state.key_store.initialize(&req.api_key).await? {
        return Err(AppError::Validation(
            "Please enter your Spotify API key".to_string(),
        ));
    }

    let api_key = state.key_store.stored_key().await;
    state
        .catalog
        .connect(&api_key)
        .await
        .map_err(|e| AppError::Internal(e.into()))?;

    Ok(Json(ConnectionStatus {
        connected: true,
        message: Some(
            "Your Spotify API key has been saved. You can now access Spotify's music library."
                .to_string(),
        ),
    }))
}
