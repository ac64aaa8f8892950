use std::path::Path;
use tower_http::services::{ServeDir, ServeFile};

/// Serves the built single-page frontend. Paths with no matching file get
/// `index.html` so client-side routes like `/history` load the app.
pub fn frontend_service(static_dir: &Path) -> ServeDir<ServeFile> {
    ServeDir::new(static_dir).fallback(ServeFile::new(static_dir.join("index.html")))
}
