use std::env;
use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_CATALOG_URL: &str = "https://api.spotify.com/v1";

#[derive(Debug, Clone)]
pub struct Config {
    pub catalog_base_url: String,
    /// Used only when the key store holds no key yet
    pub spotify_api_key: Option<String>,
    pub key_store_path: PathBuf,
    pub search_debounce: Duration,
    /// Live-search sessions idle this long are dropped
    pub search_session_idle: Duration,
    pub catalog_timeout: Duration,
    /// Directory holding the built single-page frontend
    pub static_dir: PathBuf,
    pub server_host: String,
    pub server_port: u16,
    /// Allowed CORS origins (comma-separated). Use "*" for any origin (development only).
    pub cors_origins: Vec<String>,
}

impl Config {
    pub fn from_env() -> Result<Self, anyhow::Error> {
        dotenvy::dotenv().ok();

        let catalog_base_url = env::var("CATALOG_BASE_URL")
            .unwrap_or_else(|_| DEFAULT_CATALOG_URL.to_string())
            .trim_end_matches('/')
            .to_string();

        if !catalog_base_url.starts_with("http://") && !catalog_base_url.starts_with("https://") {
            return Err(anyhow::anyhow!(
                "CATALOG_BASE_URL must start with http:// or https:// (got {})",
                catalog_base_url
            ));
        }

        let search_debounce_ms: u64 = parse_var("SEARCH_DEBOUNCE_MS", 500)?;
        let catalog_timeout_secs: u64 = parse_var("CATALOG_TIMEOUT_SECS", 15)?;
        let session_idle_secs: u64 = parse_var("SEARCH_SESSION_IDLE_SECS", 30 * 60)?;

        let cors_origins = env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:5173,http://localhost:8080".to_string())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        Ok(Config {
            catalog_base_url,
            spotify_api_key: env::var("SPOTIFY_API_KEY")
                .ok()
                .filter(|key| !key.trim().is_empty()),
            key_store_path: env::var("KEY_STORE_PATH")
                .unwrap_or_else(|_| "data/credentials.json".to_string())
                .into(),
            search_debounce: Duration::from_millis(search_debounce_ms),
            search_session_idle: Duration::from_secs(session_idle_secs),
            catalog_timeout: Duration::from_secs(catalog_timeout_secs),
            static_dir: env::var("STATIC_DIR")
                .unwrap_or_else(|_| "frontend/dist".to_string())
                .into(),
            server_host: env::var("SERVER_HOST")
                .unwrap_or_else(|_| "0.0.0.0".to_string()),
            server_port: parse_var("SERVER_PORT", 8000)?,
            cors_origins,
        })
    }
}

fn parse_var<T: std::str::FromStr>(name: &str, default: T) -> Result<T, anyhow::Error> {
    match env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map_err(|_| anyhow::anyhow!("{} must be a number (got {:?})", name, raw)),
        Err(_) => Ok(default),
    }
}
