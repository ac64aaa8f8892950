use crate::error::{AppError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tokio::sync::RwLock;

#[derive(Debug, Serialize, Deserialize)]
struct StoredCredentials {
    spotify_api_key: String,
    saved_at: DateTime<Utc>,
}

/// Holds the user-supplied catalog key in a local JSON file. The key is
/// stored as plain text and never checked against the provider.
pub struct ApiKeyStore {
    path: PathBuf,
    current: RwLock<String>,
}

impl ApiKeyStore {
    /// Opens the store, loading any previously saved key. A missing or
    /// unreadable file starts the store empty.
    pub async fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let current = match tokio::fs::read(&path).await {
            Ok(bytes) => match serde_json::from_slice::<StoredCredentials>(&bytes) {
                Ok(stored) => stored.spotify_api_key,
                Err(e) => {
                    tracing::warn!("Ignoring unreadable key store {}: {}", path.display(), e);
                    String::new()
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => String::new(),
            Err(e) => return Err(AppError::KeyStore(e)),
        };

        Ok(Self {
            path,
            current: RwLock::new(current),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Saves a new key. Returns `false` without writing anything when the
    /// key is empty.
    pub async fn initialize(&self, api_key: &str) -> Result<bool> {
        let api_key = api_key.trim();
        if api_key.is_empty() {
            return Ok(false);
        }

        let mut current = self.current.write().await;

        let stored = StoredCredentials {
            spotify_api_key: api_key.to_string(),
            saved_at: Utc::now(),
        };
        let contents = serde_json::to_vec_pretty(&stored)
            .map_err(|e| AppError::Internal(e.into()))?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent).await?;
        }

        let tmp_path = self.path.with_extension("json.tmp");
        tokio::fs::write(&tmp_path, contents).await?;
        tokio::fs::rename(&tmp_path, &self.path).await?;

        *current = api_key.to_string();
        tracing::info!("Catalog API key saved to {}", self.path.display());
        Ok(true)
    }

    /// The saved key, or an empty string if none is set.
    pub async fn stored_key(&self) -> String {
        self.current.read().await.clone()
    }
}
