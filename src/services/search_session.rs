//! Debounced live search. Each client session carries a generation counter
//! and only the newest request in a session ever yields songs.

use crate::models::{Mood, Song};
use crate::services::MusicCatalog;
use serde::Serialize;
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::RwLock;

/// How long a session may go without requests before it is forgotten
pub const SESSION_IDLE_TIMEOUT: Duration = Duration::from_secs(30 * 60);

#[derive(Debug, Clone)]
pub struct SearchRequest {
    pub query: String,
    pub mood: Option<Mood>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ResultKind {
    Search,
    Recommendations,
    Cleared,
}

#[derive(Debug, Clone, Serialize)]
pub struct SearchOutcome {
    pub generation: u64,
    pub kind: ResultKind,
    pub songs: Vec<Song>,
}

#[derive(Debug, Clone)]
pub enum SessionReply {
    Applied(SearchOutcome),
    /// A newer request arrived in the same session
    Superseded { generation: u64 },
}

struct Session {
    generation: Arc<AtomicU64>,
    last_active: Instant,
}

/// Resolves a request without debouncing: a query searches (narrowed to the
/// mood when one is set), a bare mood fetches recommendations, and neither
/// clears the results.
pub async fn resolve(catalog: &dyn MusicCatalog, request: &SearchRequest) -> (ResultKind, Vec<Song>) {
    let query = request.query.trim();

    if !query.is_empty() {
        let mut songs = catalog.search_tracks(query).await;
        if let Some(mood) = request.mood {
            songs.retain(|song| song.mood == mood);
        }
        return (ResultKind::Search, songs);
    }

    match request.mood {
        Some(mood) => (ResultKind::Recommendations, catalog.recommendations_by_mood(mood).await),
        None => (ResultKind::Cleared, Vec::new()),
    }
}

pub struct SearchSessions {
    catalog: Arc<dyn MusicCatalog>,
    debounce: Duration,
    idle_timeout: Duration,
    sessions: RwLock<HashMap<String, Session>>,
}

impl SearchSessions {
    pub fn new(catalog: Arc<dyn MusicCatalog>, debounce: Duration) -> Self {
        Self {
            catalog,
            debounce,
            idle_timeout: SESSION_IDLE_TIMEOUT,
            sessions: RwLock::new(HashMap::new()),
        }
    }

    pub fn with_idle_timeout(mut self, idle_timeout: Duration) -> Self {
        self.idle_timeout = idle_timeout;
        self
    }

    pub async fn session_count(&self) -> usize {
        self.sessions.read().await.len()
    }

    /// Registers a new request and returns the session's counter with the
    /// generation assigned to it.
    async fn begin(&self, session_id: &str) -> (Arc<AtomicU64>, u64) {
        let now = Instant::now();
        let mut sessions = self.sessions.write().await;

        // A session with a request in flight holds a second reference to its
        // counter and is never evicted.
        let timeout = self.idle_timeout;
        sessions.retain(|id, session| {
            id == session_id
                || Arc::strong_count(&session.generation) > 1
                || now.duration_since(session.last_active) < timeout
        });

        let session = sessions.entry(session_id.to_string()).or_insert_with(|| Session {
            generation: Arc::new(AtomicU64::new(0)),
            last_active: now,
        });
        session.last_active = now;

        let generation = session.generation.fetch_add(1, Ordering::SeqCst) + 1;
        (session.generation.clone(), generation)
    }

    pub async fn submit(&self, session_id: &str, request: SearchRequest) -> SessionReply {
        let (counter, generation) = self.begin(session_id).await;

        if request.query.trim().is_empty() && request.mood.is_none() {
            return SessionReply::Applied(SearchOutcome {
                generation,
                kind: ResultKind::Cleared,
                songs: Vec::new(),
            });
        }

        tokio::time::sleep(self.debounce).await;

        if counter.load(Ordering::SeqCst) != generation {
            tracing::debug!("Search {} in session {} superseded during debounce", generation, session_id);
            return SessionReply::Superseded { generation };
        }

        let (kind, songs) = resolve(self.catalog.as_ref(), &request).await;

        if counter.load(Ordering::SeqCst) != generation {
            tracing::debug!(
                "Discarding {} stale results for search {} in session {}",
                songs.len(),
                generation,
                session_id
            );
            return SessionReply::Superseded { generation };
        }

        SessionReply::Applied(SearchOutcome { generation, kind, songs })
    }
}
