pub mod catalog;
pub mod key_store;
pub mod mood;
pub mod search_session;

pub use catalog::{CatalogClient, CatalogConfig, CatalogHandle, MusicCatalog};
pub use key_store::ApiKeyStore;
pub use search_session::{SearchRequest, SearchSessions};
