use std::sync::Arc;

use crate::{
    config::Config,
    infrastructure::{content_store::ContentStore, sqlite_store::SqliteContentStore},
    seo::SeoContext,
    services::{AdminService, PageService},
};

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub pages: PageService,
    pub admin: AdminService,
}

impl AppState {
    pub async fn new(config: Config) -> anyhow::Result<Self> {
        // Initialize database
        let store = if config.database.url.contains(":memory:") {
            SqliteContentStore::connect_in_memory(config.cache.capacity).await?
        } else {
            SqliteContentStore::connect(
                &config.database.url,
                config.database.max_connections,
                config.cache.capacity,
            )
            .await?
        };
        store.init().await?;

        Ok(Self::with_store(config, Arc::new(store)))
    }

    pub fn with_store(config: Config, store: Arc<dyn ContentStore>) -> Self {
        let seo = SeoContext::new(config.site.base_url.clone());
        Self {
            pages: PageService::new(store.clone(), seo),
            admin: AdminService::new(store),
            config,
        }
    }
}
