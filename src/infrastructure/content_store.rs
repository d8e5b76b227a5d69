// ContentStore - storage seam between page loading / admin and the database

use anyhow::Result;
use async_trait::async_trait;

use crate::core::{Locale, Localized};
use crate::models::{Case, Category, Post, Review, Service, SiteSettings};

/// Which posts a listing should include
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PostFilter {
    All,
    Published,
}

/// Persisted content access. Lookups by slug try the requested locale's slug
/// first, then the other locale's.
/// `save_*` inserts when `id == 0`, otherwise updates and returns `None` if
/// the row does not exist.
#[async_trait]
pub trait ContentStore: Send + Sync {
    async fn site_settings(&self) -> Result<Option<SiteSettings>>;
    async fn save_site_settings(&self, settings: &SiteSettings) -> Result<SiteSettings>;

    async fn list_services(&self) -> Result<Vec<Service>>;
    async fn service_by_slug(&self, locale: Locale, slug: &str) -> Result<Option<Service>>;
    async fn service_by_id(&self, id: i64) -> Result<Option<Service>>;
    async fn save_service(&self, service: &Service) -> Result<Option<Service>>;
    async fn delete_service(&self, id: i64) -> Result<bool>;

    async fn list_cases(&self) -> Result<Vec<Case>>;
    async fn case_by_slug(&self, locale: Locale, slug: &str) -> Result<Option<Case>>;
    async fn case_by_id(&self, id: i64) -> Result<Option<Case>>;
    async fn save_case(&self, case: &Case) -> Result<Option<Case>>;
    async fn delete_case(&self, id: i64) -> Result<bool>;

    async fn list_posts(&self, filter: PostFilter) -> Result<Vec<Post>>;
    async fn post_by_slug(&self, locale: Locale, slug: &str) -> Result<Option<Post>>;
    async fn post_by_id(&self, id: i64) -> Result<Option<Post>>;
    async fn save_post(&self, post: &Post) -> Result<Option<Post>>;
    async fn delete_post(&self, id: i64) -> Result<bool>;

    async fn list_categories(&self) -> Result<Vec<Category>>;
    async fn category_by_id(&self, id: i64) -> Result<Option<Category>>;
    async fn create_category(&self, name: &Localized<String>) -> Result<Category>;

    async fn list_reviews(&self) -> Result<Vec<Review>>;
    async fn review_by_id(&self, id: i64) -> Result<Option<Review>>;
    async fn save_review(&self, review: &Review) -> Result<Option<Review>>;
    async fn delete_review(&self, id: i64) -> Result<bool>;
}
