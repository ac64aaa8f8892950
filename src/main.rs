mod api;
mod config;
mod error;
mod frontend;
mod models;
mod services;

use crate::api::AppState;
use crate::config::Config;
use crate::services::{ApiKeyStore, CatalogHandle, SearchSessions};
use axum::http::{header, HeaderValue, Method};
use std::sync::Arc;
use tower_http::{
    compression::CompressionLayer,
    cors::{AllowOrigin, Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,vibeharmony=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Config::from_env()?;
    tracing::info!("Configuration loaded");

    let key_store = Arc::new(ApiKeyStore::open(config.key_store_path.clone()).await?);
    let catalog = Arc::new(CatalogHandle::new(
        config.catalog_base_url.clone(),
        config.catalog_timeout,
    ));

    // A key saved through the UI wins over the environment
    let mut api_key = key_store.stored_key().await;
    if api_key.is_empty() {
        api_key = config.spotify_api_key.clone().unwrap_or_default();
    }
    if api_key.is_empty() {
        tracing::warn!(
            "No catalog API key configured; search stays disabled until one is saved to {}",
            key_store.path().display()
        );
    } else {
        catalog.connect(&api_key).await?;
    }

    let search_sessions = Arc::new(
        SearchSessions::new(catalog.clone(), config.search_debounce)
            .with_idle_timeout(config.search_session_idle),
    );

    let app_state = Arc::new(AppState {
        key_store,
        catalog,
        search_sessions,
    });

    let app = api::api_router(app_state)
        .fallback_service(frontend::frontend_service(&config.static_dir))
        .layer(CompressionLayer::new())
        .layer(
            CorsLayer::new()
                .allow_origin(allowed_origins(&config.cors_origins))
                .allow_methods([Method::GET, Method::POST, Method::PUT])
                .allow_headers([header::CONTENT_TYPE]),
        )
        .layer(TraceLayer::new_for_http());

    let addr = format!("{}:{}", config.server_host, config.server_port);
    tracing::info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

fn allowed_origins(origins: &[String]) -> AllowOrigin {
    if origins.iter().any(|o| o == "*") {
        return Any.into();
    }

    let origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!("Ignoring invalid CORS origin: {}", origin);
                None
            }
        })
        .collect();

    AllowOrigin::list(origins)
}
