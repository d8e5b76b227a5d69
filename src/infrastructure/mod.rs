// Infrastructure - content storage, slug caching and HTTP middleware
pub mod cache;
pub mod content_store;
pub mod middleware;
pub mod sqlite_store;

pub use cache::Cache;
pub use content_store::{ContentStore, PostFilter};
pub use sqlite_store::SqliteContentStore;
