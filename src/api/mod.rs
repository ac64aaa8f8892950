pub mod catalog;
pub mod library;
pub mod settings;

pub use catalog::catalog_routes;
pub use library::library_routes;
pub use settings::settings_routes;

use crate::error::AppError;
use crate::services::{ApiKeyStore, CatalogHandle, SearchSessions};
use axum::{http::Uri, routing::get, Router};
use std::sync::Arc;

pub struct AppState {
    pub key_store: Arc<ApiKeyStore>,
    pub catalog: Arc<CatalogHandle>,
    pub search_sessions: Arc<SearchSessions>,
}

/// All JSON routes, mounted under `/api/v1`.
pub fn api_router(state: Arc<AppState>) -> Router {
    Router::new().nest(
        "/api/v1",
        Router::new()
            .route("/health", get(|| async { "OK" }))
            .merge(catalog_routes())
            .merge(settings_routes())
            .merge(library_routes())
            .fallback(api_not_found)
            .with_state(state),
    )
}

async fn api_not_found(uri: Uri) -> AppError {
    AppError::NotFound(format!("No route for {}", uri.path()))
}
