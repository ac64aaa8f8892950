use crate::models::{format_duration, Mood, Song};
use crate::services::mood::{infer_mood, seed_genres};
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;

/// Upper bound on songs returned by any catalog lookup.
pub const RESULT_LIMIT: usize = 20;

#[derive(Debug, Clone)]
pub struct CatalogConfig {
    pub base_url: String,
    pub api_key: String,
    pub timeout: Duration,
}

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("API returned status: {status} - {body}")]
    Status { status: StatusCode, body: String },

    #[error("Failed to parse response: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Source of songs for search and mood recommendations. Lookups never fail:
/// implementations log errors and return an empty list.
#[async_trait]
pub trait MusicCatalog: Send + Sync {
    async fn search_tracks(&self, query: &str) -> Vec<Song>;
    async fn recommendations_by_mood(&self, mood: Mood) -> Vec<Song>;
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    tracks: TrackPage,
}

#[derive(Debug, Deserialize)]
struct TrackPage {
    items: Vec<CatalogTrack>,
}

#[derive(Debug, Deserialize)]
struct RecommendationsResponse {
    tracks: Vec<CatalogTrack>,
}

#[derive(Debug, Deserialize)]
struct CatalogArtist {
    name: String,
}

#[derive(Debug, Deserialize)]
struct CatalogImage {
    url: String,
}

#[derive(Debug, Deserialize)]
struct CatalogAlbum {
    #[serde(default)]
    images: Vec<CatalogImage>,
}

#[derive(Debug, Deserialize)]
struct CatalogTrack {
    id: String,
    name: String,
    artists: Vec<CatalogArtist>,
    duration_ms: u64,
    album: CatalogAlbum,
}

impl CatalogTrack {
    fn into_song(self, mood: Mood) -> Song {
        Song {
            id: self.id,
            artist: self
                .artists
                .into_iter()
                .map(|a| a.name)
                .collect::<Vec<_>>()
                .join(", "),
            duration: format_duration(self.duration_ms),
            mood,
            album_art: self.album.images.into_iter().next().map(|i| i.url),
            title: self.name,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CatalogClient {
    base_url: String,
    api_key: String,
    client: Client,
}

impl CatalogClient {
    pub fn new(config: CatalogConfig) -> Result<Self, CatalogError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(format!("vibeharmony/{}", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key,
            client,
        })
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        params: &[(&str, String)],
    ) -> Result<T, CatalogError> {
        let url = format!("{}/{}", self.base_url, endpoint);

        tracing::debug!("Querying catalog: {} with params: {:?}", url, params);

        let response = self
            .client
            .get(&url)
            .bearer_auth(&self.api_key)
            .query(params)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::error!("Catalog API error: {} - {}", status, body);
            return Err(CatalogError::Status { status, body });
        }

        let response_text = response.text().await?;

        tracing::debug!(
            "Catalog response: {}",
            response_text.chars().take(500).collect::<String>()
        );

        Ok(serde_json::from_str(&response_text)?)
    }

    /// Searches tracks by free text. An empty query returns no songs without
    /// touching the network.
    pub async fn try_search_tracks(&self, query: &str) -> Result<Vec<Song>, CatalogError> {
        let query = query.trim();
        if query.is_empty() {
            return Ok(Vec::new());
        }

        let data: SearchResponse = self
            .get_json(
                "search",
                &[
                    ("q", query.to_string()),
                    ("type", "track".to_string()),
                    ("limit", RESULT_LIMIT.to_string()),
                ],
            )
            .await?;

        tracing::debug!("Found {} tracks for query: {}", data.tracks.items.len(), query);

        Ok(data
            .tracks
            .items
            .into_iter()
            .take(RESULT_LIMIT)
            .map(|track| {
                let mood = infer_mood(&track.name);
                track.into_song(mood)
            })
            .collect())
    }

    /// Fetches recommendations seeded with the mood's genres. Every returned
    /// song carries the requested mood.
    pub async fn try_recommendations_by_mood(&self, mood: Mood) -> Result<Vec<Song>, CatalogError> {
        let data: RecommendationsResponse = self
            .get_json(
                "recommendations",
                &[
                    ("seed_genres", seed_genres(mood).join(",")),
                    ("limit", RESULT_LIMIT.to_string()),
                ],
            )
            .await?;

        Ok(data
            .tracks
            .into_iter()
            .take(RESULT_LIMIT)
            .map(|track| track.into_song(mood))
            .collect())
    }
}

#[async_trait]
impl MusicCatalog for CatalogClient {
    async fn search_tracks(&self, query: &str) -> Vec<Song> {
        self.try_search_tracks(query).await.unwrap_or_else(|e| {
            tracing::warn!("Error searching catalog tracks: {}", e);
            Vec::new()
        })
    }

    async fn recommendations_by_mood(&self, mood: Mood) -> Vec<Song> {
        self.try_recommendations_by_mood(mood).await.unwrap_or_else(|e| {
            tracing::warn!("Error getting {} recommendations: {}", mood, e);
            Vec::new()
        })
    }
}

/// The currently connected catalog client, if any. Connecting with a new key
/// replaces the client for all later lookups.
pub struct CatalogHandle {
    base_url: String,
    timeout: Duration,
    client: RwLock<Option<Arc<CatalogClient>>>,
}

impl CatalogHandle {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Self {
        Self {
            base_url: base_url.into(),
            timeout,
            client: RwLock::new(None),
        }
    }

    pub async fn connect(&self, api_key: &str) -> Result<(), CatalogError> {
        let client = CatalogClient::new(CatalogConfig {
            base_url: self.base_url.clone(),
            api_key: api_key.to_string(),
            timeout: self.timeout,
        })?;

        *self.client.write().await = Some(Arc::new(client));
        tracing::info!("Catalog client connected to {}", self.base_url);
        Ok(())
    }

    pub async fn is_connected(&self) -> bool {
        self.client.read().await.is_some()
    }

    async fn current(&self) -> Option<Arc<CatalogClient>> {
        self.client.read().await.clone()
    }
}

#[async_trait]
impl MusicCatalog for CatalogHandle {
    async fn search_tracks(&self, query: &str) -> Vec<Song> {
        match self.current().await {
            Some(client) => client.search_tracks(query).await,
            None => {
                tracing::debug!("Catalog not connected, skipping search");
                Vec::new()
            }
        }
    }

    async fn recommendations_by_mood(&self, mood: Mood) -> Vec<Song> {
        match self.current().await {
            Some(client) => client.recommendations_by_mood(mood).await,
            None => {
                tracing::debug!("Catalog not connected, skipping recommendations");
                Vec::new()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};
    use wiremock::matchers::{header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server: &MockServer) -> CatalogClient {
        CatalogClient::new(CatalogConfig {
            base_url: server.uri(),
            api_key: "test-key".to_string(),
            timeout: Duration::from_secs(5),
        })
        .unwrap()
    }

    fn track(id: &str, name: &str, artists: &[&str], duration_ms: u64, image: Option<&str>) -> Value {
        let images: Vec<Value> = image
            .map(|url| vec![json!({ "url": url, "height": 640, "width": 640 })])
            .unwrap_or_default();
        json!({
            "id": id,
            "name": name,
            "artists": artists.iter().map(|a| json!({ "id": a, "name": a })).collect::<Vec<_>>(),
            "duration_ms": duration_ms,
            "album": { "name": "Album", "images": images },
        })
    }

    #[tokio::test]
    async fn test_search_maps_tracks_to_songs() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/search"))
            .and(query_param("q", "sunny"))
            .and(query_param("type", "track"))
            .and(query_param("limit", "20"))
            .and(header("authorization", "Bearer test-key"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "tracks": { "items": [
                    track("t1", "Sunny Afternoon", &["The Kinks"], 215_000, Some("https://img/1.jpg")),
                    track("t2", "Study Session", &["Lo Fi", "Beats Crew"], 95_200, None),
                ]}
            })))
            .expect(1)
            .mount(&server)
            .await;

        let songs = client_for(&server).search_tracks("sunny").await;

        assert_eq!(songs.len(), 2);
        assert_eq!(songs[0].id, "t1");
        assert_eq!(songs[0].title, "Sunny Afternoon");
        assert_eq!(songs[0].artist, "The Kinks");
        assert_eq!(songs[0].duration, "3:35");
        assert_eq!(songs[0].mood, Mood::Happy);
        assert_eq!(songs[0].album_art.as_deref(), Some("https://img/1.jpg"));

        assert_eq!(songs[1].artist, "Lo Fi, Beats Crew");
        assert_eq!(songs[1].duration, "1:35");
        assert_eq!(songs[1].mood, Mood::Focused);
        assert!(songs[1].album_art.is_none());
    }

    #[tokio::test]
    async fn test_search_never_exceeds_limit() {
        let server = MockServer::start().await;

        let items: Vec<Value> = (0..25)
            .map(|i| track(&format!("t{}", i), "Track", &["Artist"], 180_000, None))
            .collect();

        Mock::given(method("GET"))
            .and(path("/search"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({ "tracks": { "items": items } })),
            )
            .mount(&server)
            .await;

        let songs = client_for(&server).search_tracks("track").await;
        assert_eq!(songs.len(), RESULT_LIMIT);
    }

    #[tokio::test]
    async fn test_empty_query_makes_no_request() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let client = client_for(&server);
        assert!(client.search_tracks("").await.is_empty());
        assert!(client.search_tracks("   ").await.is_empty());
    }

    #[tokio::test]
    async fn test_server_error_degrades_to_empty() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/search"))
            .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
            .mount(&server)
            .await;

        let client = client_for(&server);

        match client.try_search_tracks("happy").await {
            Err(CatalogError::Status { status, body }) => {
                assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
                assert_eq!(body, "boom");
            }
            other => panic!("Expected status error, got {:?}", other),
        }
        assert!(client.search_tracks("happy").await.is_empty());
    }

    #[tokio::test]
    async fn test_malformed_response_fails_closed() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/search"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "tracks": { "items": [ { "id": "t1", "name": "No Artists" } ] }
            })))
            .mount(&server)
            .await;

        let client = client_for(&server);
        assert!(matches!(
            client.try_search_tracks("anything").await,
            Err(CatalogError::Parse(_))
        ));
        assert!(client.search_tracks("anything").await.is_empty());
    }

    #[tokio::test]
    async fn test_recommendations_keep_requested_mood() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/recommendations"))
            .and(query_param("seed_genres", "edm,workout,rock"))
            .and(query_param("limit", "20"))
            .and(header("authorization", "Bearer test-key"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "tracks": [
                    track("r1", "Happy Days", &["A"], 200_000, None),
                    track("r2", "Calm Before", &["B"], 200_000, None),
                    track("r3", "Untitled", &["C"], 200_000, None),
                ]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let songs = client_for(&server)
            .recommendations_by_mood(Mood::Energetic)
            .await;

        assert_eq!(songs.len(), 3);
        assert!(songs.iter().all(|s| s.mood == Mood::Energetic));
    }

    #[tokio::test]
    async fn test_recommendations_error_degrades_to_empty() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/recommendations"))
            .and(query_param("seed_genres", "sad,singer-songwriter,blues"))
            .respond_with(ResponseTemplate::new(503).set_body_string("unavailable"))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/recommendations"))
            .and(query_param("seed_genres", "chill,ambient,study"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "seeds": [] })))
            .mount(&server)
            .await;

        let client = client_for(&server);

        assert!(matches!(
            client.try_recommendations_by_mood(Mood::Sad).await,
            Err(CatalogError::Status { .. })
        ));
        assert!(client.recommendations_by_mood(Mood::Sad).await.is_empty());

        assert!(matches!(
            client.try_recommendations_by_mood(Mood::Chill).await,
            Err(CatalogError::Parse(_))
        ));
        assert!(client.recommendations_by_mood(Mood::Chill).await.is_empty());
    }

    #[tokio::test]
    async fn test_unreachable_catalog_degrades_to_empty() {
        // Bind then drop to get a local port with nothing listening on it
        let addr = std::net::TcpListener::bind("127.0.0.1:0")
            .unwrap()
            .local_addr()
            .unwrap();

        let client = CatalogClient::new(CatalogConfig {
            base_url: format!("http://{}", addr),
            api_key: "test-key".to_string(),
            timeout: Duration::from_secs(5),
        })
        .unwrap();

        assert!(matches!(
            client.try_search_tracks("happy").await,
            Err(CatalogError::Request(_))
        ));
        assert!(client.search_tracks("happy").await.is_empty());
        assert!(client.recommendations_by_mood(Mood::Happy).await.is_empty());
    }

    #[tokio::test]
    async fn test_huge_duration_is_mapped_without_panicking() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/search"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "tracks": { "items": [ track("t1", "Endless", &["Loop"], u64::MAX, None) ] }
            })))
            .mount(&server)
            .await;

        let songs = client_for(&server).search_tracks("endless").await;
        assert_eq!(songs.len(), 1);
        assert!(!songs[0].duration.is_empty());
    }

    #[tokio::test]
    async fn test_handle_without_key_returns_nothing() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let handle = CatalogHandle::new(server.uri(), Duration::from_secs(5));
        assert!(!handle.is_connected().await);
        assert!(handle.search_tracks("happy").await.is_empty());
        assert!(handle.recommendations_by_mood(Mood::Sad).await.is_empty());
    }

    #[tokio::test]
    async fn test_handle_uses_latest_key() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/search"))
            .and(header("authorization", "Bearer second"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "tracks": { "items": [ track("t1", "Dance Floor", &["DJ"], 180_000, None) ] }
            })))
            .mount(&server)
            .await;

        let handle = CatalogHandle::new(server.uri(), Duration::from_secs(5));
        handle.connect("first").await.unwrap();
        assert!(handle.search_tracks("dance").await.is_empty());

        handle.connect("second").await.unwrap();
        let songs = handle.search_tracks("dance").await;
        assert_eq!(songs.len(), 1);
        assert_eq!(songs[0].mood, Mood::Energetic);
    }
}
