// SQLite-backed ContentStore with per-type slug caches

use anyhow::{Context, Result};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{
    query::Query,
    sqlite::{Sqlite, SqliteArguments, SqliteConnectOptions, SqlitePool, SqlitePoolOptions, SqliteRow},
    Row,
};
use std::path::Path;
use std::str::FromStr;
use tokio::sync::Mutex;
use tracing::{debug, info};

use super::cache::Cache;
use super::content_store::{ContentStore, PostFilter};
use crate::core::{Locale, Localized};
use crate::models::{
    Case, Category, Post, Review, SeoEntity, SeoFields, Service, SiteSettings, SITE_SETTINGS_ID,
};

type SqliteQuery<'q> = Query<'q, Sqlite, SqliteArguments<'q>>;

/// Slug lookups keyed by the locale the page was requested in
type SlugCache<T> = Mutex<Cache<(Locale, String), T>>;

const SEO_COLUMNS_DDL: &str = "
    meta_title_ru TEXT,
    meta_title_uz TEXT,
    meta_description_ru TEXT,
    meta_description_uz TEXT,
    meta_keywords_ru TEXT,
    meta_keywords_uz TEXT,
    og_title_ru TEXT,
    og_title_uz TEXT,
    og_description_ru TEXT,
    og_description_uz TEXT,
    canonical_url TEXT,
    og_image TEXT,
    \"index\" INTEGER,
    sitemap_priority TEXT,
    sitemap_changefreq TEXT";

// Same order as bind_seo
const SEO_COLUMNS: [&str; 15] = [
    "meta_title_ru",
    "meta_title_uz",
    "meta_description_ru",
    "meta_description_uz",
    "meta_keywords_ru",
    "meta_keywords_uz",
    "og_title_ru",
    "og_title_uz",
    "og_description_ru",
    "og_description_uz",
    "canonical_url",
    "og_image",
    "\"index\"",
    "sitemap_priority",
    "sitemap_changefreq",
];

/// A content table whose rows map onto one model type.
trait Record: SeoEntity + Clone + Send + Sync + Unpin + 'static {
    const TABLE: &'static str;
    const ORDER_BY: &'static str;

    /// Model-specific columns, excluding id, SEO columns and timestamps.
    /// Order must match `bind_fields`.
    fn columns() -> &'static [&'static str];

    fn from_row(row: &SqliteRow) -> Result<Self>;

    fn bind_fields<'q>(&'q self, query: SqliteQuery<'q>) -> SqliteQuery<'q>;

    fn id(&self) -> i64;
}

fn localized(row: &SqliteRow, column: &str) -> Result<Localized<String>> {
    Ok(Localized::new(
        row.try_get(format!("{}_ru", column).as_str())?,
        row.try_get(format!("{}_uz", column).as_str())?,
    ))
}

fn timestamp(row: &SqliteRow, column: &str) -> Result<DateTime<Utc>> {
    let seconds: i64 = row.try_get(column)?;
    Ok(from_seconds(seconds))
}

fn from_seconds(seconds: i64) -> DateTime<Utc> {
    DateTime::from_timestamp(seconds, 0).unwrap_or_default()
}

fn bind_localized<'q>(query: SqliteQuery<'q>, value: &'q Localized<String>) -> SqliteQuery<'q> {
    query.bind(value.raw(Locale::Ru)).bind(value.raw(Locale::Uz))
}

fn read_seo(row: &SqliteRow) -> Result<SeoFields> {
    Ok(SeoFields {
        meta_title: localized(row, "meta_title")?,
        meta_description: localized(row, "meta_description")?,
        meta_keywords: localized(row, "meta_keywords")?,
        og_title: localized(row, "og_title")?,
        og_description: localized(row, "og_description")?,
        canonical_url: row.try_get("canonical_url")?,
        og_image: row.try_get("og_image")?,
        index: row.try_get("index")?,
        sitemap_priority: row.try_get("sitemap_priority")?,
        sitemap_changefreq: row.try_get("sitemap_changefreq")?,
    })
}

fn bind_seo<'q>(query: SqliteQuery<'q>, seo: &'q SeoFields) -> SqliteQuery<'q> {
    let query = bind_localized(query, &seo.meta_title);
    let query = bind_localized(query, &seo.meta_description);
    let query = bind_localized(query, &seo.meta_keywords);
    let query = bind_localized(query, &seo.og_title);
    let query = bind_localized(query, &seo.og_description);
    query
        .bind(seo.canonical_url.as_deref())
        .bind(seo.og_image.as_deref())
        .bind(seo.index)
        .bind(seo.sitemap_priority.as_deref())
        .bind(seo.sitemap_changefreq.as_deref())
}

impl Record for Service {
    const TABLE: &'static str = "services";
    const ORDER_BY: &'static str = "id ASC";

    fn columns() -> &'static [&'static str] {
        &[
            "slug_ru",
            "slug_uz",
            "title_ru",
            "title_uz",
            "short_description_ru",
            "short_description_uz",
            "content_ru",
            "content_uz",
        ]
    }

    fn from_row(row: &SqliteRow) -> Result<Self> {
        Ok(Service {
            id: row.try_get("id")?,
            slug: localized(row, "slug")?,
            title: localized(row, "title")?,
            short_description: localized(row, "short_description")?,
            content: localized(row, "content")?,
            seo: read_seo(row)?,
            created_at: timestamp(row, "created_at")?,
            updated_at: timestamp(row, "updated_at")?,
        })
    }

    fn bind_fields<'q>(&'q self, query: SqliteQuery<'q>) -> SqliteQuery<'q> {
        let query = bind_localized(query, &self.slug);
        let query = bind_localized(query, &self.title);
        let query = bind_localized(query, &self.short_description);
        bind_localized(query, &self.content)
    }

    fn id(&self) -> i64 {
        self.id
    }
}

impl Record for Case {
    const TABLE: &'static str = "cases";
    const ORDER_BY: &'static str = "created_at DESC, id DESC";

    fn columns() -> &'static [&'static str] {
        &[
            "slug_ru",
            "slug_uz",
            "title_ru",
            "title_uz",
            "description_ru",
            "description_uz",
            "problem_ru",
            "problem_uz",
            "solution_ru",
            "solution_uz",
            "result_ru",
            "result_uz",
            "industry",
        ]
    }

    fn from_row(row: &SqliteRow) -> Result<Self> {
        Ok(Case {
            id: row.try_get("id")?,
            slug: localized(row, "slug")?,
            title: localized(row, "title")?,
            description: localized(row, "description")?,
            problem: localized(row, "problem")?,
            solution: localized(row, "solution")?,
            result: localized(row, "result")?,
            industry: row.try_get("industry")?,
            seo: read_seo(row)?,
            created_at: timestamp(row, "created_at")?,
            updated_at: timestamp(row, "updated_at")?,
        })
    }

    fn bind_fields<'q>(&'q self, query: SqliteQuery<'q>) -> SqliteQuery<'q> {
        let query = bind_localized(query, &self.slug);
        let query = bind_localized(query, &self.title);
        let query = bind_localized(query, &self.description);
        let query = bind_localized(query, &self.problem);
        let query = bind_localized(query, &self.solution);
        let query = bind_localized(query, &self.result);
        query.bind(self.industry.as_deref())
    }

    fn id(&self) -> i64 {
        self.id
    }
}

impl Record for Post {
    const TABLE: &'static str = "posts";
    const ORDER_BY: &'static str = "published_at DESC, id DESC";

    fn columns() -> &'static [&'static str] {
        &[
            "slug_ru",
            "slug_uz",
            "title_ru",
            "title_uz",
            "excerpt_ru",
            "excerpt_uz",
            "content_ru",
            "content_uz",
            "tags",
            "category_id",
            "is_published",
            "published_at",
        ]
    }

    fn from_row(row: &SqliteRow) -> Result<Self> {
        let published_at: Option<i64> = row.try_get("published_at")?;
        Ok(Post {
            id: row.try_get("id")?,
            slug: localized(row, "slug")?,
            title: localized(row, "title")?,
            excerpt: localized(row, "excerpt")?,
            content: localized(row, "content")?,
            tags: row.try_get("tags")?,
            category_id: row.try_get("category_id")?,
            is_published: row.try_get("is_published")?,
            published_at: published_at.map(from_seconds),
            seo: read_seo(row)?,
            created_at: timestamp(row, "created_at")?,
            updated_at: timestamp(row, "updated_at")?,
        })
    }

    fn bind_fields<'q>(&'q self, query: SqliteQuery<'q>) -> SqliteQuery<'q> {
        let query = bind_localized(query, &self.slug);
        let query = bind_localized(query, &self.title);
        let query = bind_localized(query, &self.excerpt);
        let query = bind_localized(query, &self.content);
        query
            .bind(self.tags.as_deref())
            .bind(self.category_id)
            .bind(self.is_published)
            .bind(self.published_at.map(|at| at.timestamp()))
    }

    fn id(&self) -> i64 {
        self.id
    }
}

impl Record for Review {
    const TABLE: &'static str = "reviews";
    const ORDER_BY: &'static str = "created_at DESC, id DESC";

    fn columns() -> &'static [&'static str] {
        &["client_name", "company", "text_ru", "text_uz", "rating"]
    }

    fn from_row(row: &SqliteRow) -> Result<Self> {
        Ok(Review {
            id: row.try_get("id")?,
            client_name: row.try_get("client_name")?,
            company: row.try_get("company")?,
            text: localized(row, "text")?,
            rating: row.try_get("rating")?,
            seo: read_seo(row)?,
            created_at: timestamp(row, "created_at")?,
            updated_at: timestamp(row, "updated_at")?,
        })
    }

    fn bind_fields<'q>(&'q self, query: SqliteQuery<'q>) -> SqliteQuery<'q> {
        let query = query.bind(self.client_name.as_str()).bind(self.company.as_deref());
        bind_localized(query, &self.text).bind(self.rating)
    }

    fn id(&self) -> i64 {
        self.id
    }
}

fn category_from_row(row: &SqliteRow) -> Result<Category> {
    Ok(Category {
        id: row.try_get("id")?,
        name: localized(row, "name")?,
        created_at: timestamp(row, "created_at")?,
    })
}

fn settings_from_row(row: &SqliteRow) -> Result<SiteSettings> {
    Ok(SiteSettings {
        default_meta_title: localized(row, "default_meta_title")?,
        default_meta_desc: localized(row, "default_meta_desc")?,
        default_og_image: row.try_get("default_og_image")?,
        company_name: row.try_get("company_name")?,
        logo: row.try_get("logo")?,
        instagram_url: row.try_get("instagram_url")?,
        telegram_url: row.try_get("telegram_url")?,
        facebook_url: row.try_get("facebook_url")?,
        linkedin_url: row.try_get("linkedin_url")?,
        whatsapp_url: row.try_get("whatsapp_url")?,
        updated_at: timestamp(row, "updated_at")?,
    })
}

/// On-disk path named by a `sqlite:` URL, if any
fn database_file(url: &str) -> Option<&Path> {
    let rest = url
        .strip_prefix("sqlite://")
        .or_else(|| url.strip_prefix("sqlite:"))?;
    let path = rest.split('?').next().unwrap_or(rest);
    if path.is_empty() || path.contains(":memory:") {
        return None;
    }
    Some(Path::new(path))
}

pub struct SqliteContentStore {
    pub pool: SqlitePool,
    settings_cache: Mutex<Option<SiteSettings>>,
    service_cache: SlugCache<Service>,
    case_cache: SlugCache<Case>,
    post_cache: SlugCache<Post>,
}

impl SqliteContentStore {
    pub async fn connect(database_url: &str, max_connections: u32, cache_capacity: usize) -> Result<Self> {
        let options = SqliteConnectOptions::from_str(database_url)
            .with_context(|| format!("invalid database url {}", database_url))?
            .create_if_missing(true);
        if let Some(parent) = database_file(database_url).and_then(Path::parent) {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("failed to create {}", parent.display()))?;
            }
        }
        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections.max(1))
            .connect_with(options)
            .await?;
        info!("Connected to {}", database_url);
        Ok(Self::with_pool(pool, cache_capacity))
    }

    /// Private in-memory database on a single long-lived connection.
    pub async fn connect_in_memory(cache_capacity: usize) -> Result<Self> {
        let options = SqliteConnectOptions::from_str("sqlite::memory:")?;
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await?;
        Ok(Self::with_pool(pool, cache_capacity))
    }

    fn with_pool(pool: SqlitePool, cache_capacity: usize) -> Self {
        Self {
            pool,
            settings_cache: Mutex::new(None),
            service_cache: Mutex::new(Cache::new(cache_capacity)),
            case_cache: Mutex::new(Cache::new(cache_capacity)),
            post_cache: Mutex::new(Cache::new(cache_capacity)),
        }
    }

    pub async fn init(&self) -> Result<()> {
        let tables = [
            format!(
                "CREATE TABLE IF NOT EXISTS services (
                    id INTEGER PRIMARY KEY AUTOINCREMENT,
                    slug_ru TEXT NOT NULL UNIQUE,
                    slug_uz TEXT NOT NULL UNIQUE,
                    title_ru TEXT,
                    title_uz TEXT,
                    short_description_ru TEXT,
                    short_description_uz TEXT,
                    content_ru TEXT,
                    content_uz TEXT,{},
                    created_at INTEGER NOT NULL,
                    updated_at INTEGER NOT NULL
                )",
                SEO_COLUMNS_DDL
            ),
            format!(
                "CREATE TABLE IF NOT EXISTS cases (
                    id INTEGER PRIMARY KEY AUTOINCREMENT,
                    slug_ru TEXT NOT NULL UNIQUE,
                    slug_uz TEXT NOT NULL UNIQUE,
                    title_ru TEXT,
                    title_uz TEXT,
                    description_ru TEXT,
                    description_uz TEXT,
                    problem_ru TEXT,
                    problem_uz TEXT,
                    solution_ru TEXT,
                    solution_uz TEXT,
                    result_ru TEXT,
                    result_uz TEXT,
                    industry TEXT,{},
                    created_at INTEGER NOT NULL,
                    updated_at INTEGER NOT NULL
                )",
                SEO_COLUMNS_DDL
            ),
            "CREATE TABLE IF NOT EXISTS categories (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name_ru TEXT,
                name_uz TEXT,
                created_at INTEGER NOT NULL
            )"
            .to_string(),
            format!(
                "CREATE TABLE IF NOT EXISTS posts (
                    id INTEGER PRIMARY KEY AUTOINCREMENT,
                    slug_ru TEXT NOT NULL UNIQUE,
                    slug_uz TEXT NOT NULL UNIQUE,
                    title_ru TEXT,
                    title_uz TEXT,
                    excerpt_ru TEXT,
                    excerpt_uz TEXT,
                    content_ru TEXT,
                    content_uz TEXT,
                    tags TEXT,
                    category_id INTEGER REFERENCES categories(id) ON DELETE SET NULL,
                    is_published INTEGER NOT NULL DEFAULT 0,
                    published_at INTEGER,{},
                    created_at INTEGER NOT NULL,
                    updated_at INTEGER NOT NULL
                )",
                SEO_COLUMNS_DDL
            ),
            format!(
                "CREATE TABLE IF NOT EXISTS reviews (
                    id INTEGER PRIMARY KEY AUTOINCREMENT,
                    client_name TEXT NOT NULL,
                    company TEXT,
                    text_ru TEXT,
                    text_uz TEXT,
                    rating INTEGER NOT NULL DEFAULT 5,{},
                    created_at INTEGER NOT NULL,
                    updated_at INTEGER NOT NULL
                )",
                SEO_COLUMNS_DDL
            ),
            "CREATE TABLE IF NOT EXISTS site_settings (
                id INTEGER PRIMARY KEY,
                default_meta_title_ru TEXT,
                default_meta_title_uz TEXT,
                default_meta_desc_ru TEXT,
                default_meta_desc_uz TEXT,
                default_og_image TEXT,
                company_name TEXT,
                logo TEXT,
                instagram_url TEXT,
                telegram_url TEXT,
                facebook_url TEXT,
                linkedin_url TEXT,
                whatsapp_url TEXT,
                updated_at INTEGER NOT NULL
            )"
            .to_string(),
        ];

        for ddl in &tables {
            sqlx::query(ddl).execute(&self.pool).await?;
        }

        sqlx::query("CREATE INDEX IF NOT EXISTS idx_posts_published ON posts(is_published, published_at)")
            .execute(&self.pool)
            .await?;

        debug!("Content schema ready");
        Ok(())
    }

    async fn fetch_all<T: Record>(&self, where_clause: &str) -> Result<Vec<T>> {
        let sql = format!("SELECT * FROM {} {} ORDER BY {}", T::TABLE, where_clause, T::ORDER_BY);
        let rows = sqlx::query(&sql).fetch_all(&self.pool).await?;
        rows.iter().map(T::from_row).collect()
    }

    async fn fetch_by_id<T: Record>(&self, id: i64) -> Result<Option<T>> {
        let sql = format!("SELECT * FROM {} WHERE id = ?", T::TABLE);
        let row = sqlx::query(&sql).bind(id).fetch_optional(&self.pool).await?;
        row.as_ref().map(T::from_row).transpose()
    }

    async fn fetch_by_slug<T: Record>(
        &self,
        cache: &SlugCache<T>,
        locale: Locale,
        slug: &str,
    ) -> Result<Option<T>> {
        let key = (locale, slug.to_string());
        {
            let mut cache = cache.lock().await;
            if let Some(record) = cache.get(&key) {
                return Ok(Some(record.clone()));
            }
        }

        // Requested locale's slug wins over a colliding slug in the other locale
        let candidates = std::iter::once(locale)
            .chain(Locale::ALL.into_iter().filter(|other| *other != locale));
        for candidate in candidates {
            let sql = format!("SELECT * FROM {} WHERE slug_{} = ? LIMIT 1", T::TABLE, candidate.code());
            if let Some(row) = sqlx::query(&sql).bind(slug).fetch_optional(&self.pool).await? {
                let record = T::from_row(&row)?;
                cache.lock().await.insert(key, record.clone());
                return Ok(Some(record));
            }
        }
        Ok(None)
    }

    async fn save<T: Record>(&self, record: &T) -> Result<Option<T>> {
        let now = Utc::now().timestamp();
        let columns: Vec<&str> = T::columns().iter().chain(SEO_COLUMNS.iter()).copied().collect();

        if record.id() == 0 {
            let placeholders = vec!["?"; columns.len() + 2].join(", ");
            let sql = format!(
                "INSERT INTO {} ({}, created_at, updated_at) VALUES ({})",
                T::TABLE,
                columns.join(", "),
                placeholders
            );
            let query = bind_seo(record.bind_fields(sqlx::query(&sql)), record.seo());
            let result = query.bind(now).bind(now).execute(&self.pool).await?;
            let id = result.last_insert_rowid();
            info!("Created {} row {}", T::TABLE, id);
            let created = self
                .fetch_by_id::<T>(id)
                .await?
                .with_context(|| format!("{} row {} missing after insert", T::TABLE, id))?;
            return Ok(Some(created));
        }

        let assignments: Vec<String> = columns.iter().map(|column| format!("{} = ?", column)).collect();
        let sql = format!(
            "UPDATE {} SET {}, updated_at = ? WHERE id = ?",
            T::TABLE,
            assignments.join(", ")
        );
        let query = bind_seo(record.bind_fields(sqlx::query(&sql)), record.seo());
        let result = query.bind(now).bind(record.id()).execute(&self.pool).await?;
        if result.rows_affected() == 0 {
            return Ok(None);
        }
        info!("Updated {} row {}", T::TABLE, record.id());
        self.fetch_by_id::<T>(record.id()).await
    }

    async fn delete<T: Record>(&self, id: i64) -> Result<bool> {
        let sql = format!("DELETE FROM {} WHERE id = ?", T::TABLE);
        let result = sqlx::query(&sql).bind(id).execute(&self.pool).await?;
        let deleted = result.rows_affected() > 0;
        if deleted {
            info!("Deleted {} row {}", T::TABLE, id);
        }
        Ok(deleted)
    }

    async fn invalidate<T: Record>(&self, cache: &SlugCache<T>) {
        let mut cache = cache.lock().await;
        if cache.is_empty() {
            return;
        }
        debug!("Invalidating {} cached {} slugs", cache.len(), T::TABLE);
        cache.clear();
    }
}

#[async_trait]
impl ContentStore for SqliteContentStore {
    async fn site_settings(&self) -> Result<Option<SiteSettings>> {
        if let Some(settings) = self.settings_cache.lock().await.clone() {
            return Ok(Some(settings));
        }
        let row = sqlx::query("SELECT * FROM site_settings WHERE id = ?")
            .bind(SITE_SETTINGS_ID)
            .fetch_optional(&self.pool)
            .await?;
        let settings = row.as_ref().map(settings_from_row).transpose()?;
        if let Some(settings) = &settings {
            *self.settings_cache.lock().await = Some(settings.clone());
        }
        Ok(settings)
    }

    async fn save_site_settings(&self, settings: &SiteSettings) -> Result<SiteSettings> {
        let now = Utc::now().timestamp();
        let query = sqlx::query(
            "INSERT INTO site_settings (
                id, default_meta_title_ru, default_meta_title_uz, default_meta_desc_ru,
                default_meta_desc_uz, default_og_image, company_name, logo, instagram_url,
                telegram_url, facebook_url, linkedin_url, whatsapp_url, updated_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            ON CONFLICT(id) DO UPDATE SET
                default_meta_title_ru = excluded.default_meta_title_ru,
                default_meta_title_uz = excluded.default_meta_title_uz,
                default_meta_desc_ru = excluded.default_meta_desc_ru,
                default_meta_desc_uz = excluded.default_meta_desc_uz,
                default_og_image = excluded.default_og_image,
                company_name = excluded.company_name,
                logo = excluded.logo,
                instagram_url = excluded.instagram_url,
                telegram_url = excluded.telegram_url,
                facebook_url = excluded.facebook_url,
                linkedin_url = excluded.linkedin_url,
                whatsapp_url = excluded.whatsapp_url,
                updated_at = excluded.updated_at",
        )
        .bind(SITE_SETTINGS_ID);
        let query = bind_localized(query, &settings.default_meta_title);
        let query = bind_localized(query, &settings.default_meta_desc);
        query
            .bind(settings.default_og_image.as_deref())
            .bind(settings.company_name.as_deref())
            .bind(settings.logo.as_deref())
            .bind(settings.instagram_url.as_deref())
            .bind(settings.telegram_url.as_deref())
            .bind(settings.facebook_url.as_deref())
            .bind(settings.linkedin_url.as_deref())
            .bind(settings.whatsapp_url.as_deref())
            .bind(now)
            .execute(&self.pool)
            .await?;

        *self.settings_cache.lock().await = None;
        info!("Saved site settings");
        self.site_settings()
            .await?
            .context("site settings missing after upsert")
    }

    async fn list_services(&self) -> Result<Vec<Service>> {
        self.fetch_all("").await
    }

    async fn service_by_slug(&self, locale: Locale, slug: &str) -> Result<Option<Service>> {
        self.fetch_by_slug(&self.service_cache, locale, slug).await
    }

    async fn service_by_id(&self, id: i64) -> Result<Option<Service>> {
        self.fetch_by_id(id).await
    }

    async fn save_service(&self, service: &Service) -> Result<Option<Service>> {
        let saved = self.save(service).await?;
        self.invalidate(&self.service_cache).await;
        Ok(saved)
    }

    async fn delete_service(&self, id: i64) -> Result<bool> {
        let deleted = self.delete::<Service>(id).await?;
        self.invalidate(&self.service_cache).await;
        Ok(deleted)
    }

    async fn list_cases(&self) -> Result<Vec<Case>> {
        self.fetch_all("").await
    }

    async fn case_by_slug(&self, locale: Locale, slug: &str) -> Result<Option<Case>> {
        self.fetch_by_slug(&self.case_cache, locale, slug).await
    }

    async fn case_by_id(&self, id: i64) -> Result<Option<Case>> {
        self.fetch_by_id(id).await
    }

    async fn save_case(&self, case: &Case) -> Result<Option<Case>> {
        let saved = self.save(case).await?;
        self.invalidate(&self.case_cache).await;
        Ok(saved)
    }

    async fn delete_case(&self, id: i64) -> Result<bool> {
        let deleted = self.delete::<Case>(id).await?;
        self.invalidate(&self.case_cache).await;
        Ok(deleted)
    }

    async fn list_posts(&self, filter: PostFilter) -> Result<Vec<Post>> {
        match filter {
            PostFilter::All => self.fetch_all("").await,
            PostFilter::Published => self.fetch_all("WHERE is_published = 1").await,
        }
    }

    async fn post_by_slug(&self, locale: Locale, slug: &str) -> Result<Option<Post>> {
        self.fetch_by_slug(&self.post_cache, locale, slug).await
    }

    async fn post_by_id(&self, id: i64) -> Result<Option<Post>> {
        self.fetch_by_id(id).await
    }

    async fn save_post(&self, post: &Post) -> Result<Option<Post>> {
        let saved = self.save(post).await?;
        self.invalidate(&self.post_cache).await;
        Ok(saved)
    }

    async fn delete_post(&self, id: i64) -> Result<bool> {
        let deleted = self.delete::<Post>(id).await?;
        self.invalidate(&self.post_cache).await;
        Ok(deleted)
    }

    async fn list_categories(&self) -> Result<Vec<Category>> {
        let rows = sqlx::query("SELECT * FROM categories ORDER BY created_at DESC, id DESC")
            .fetch_all(&self.pool)
            .await?;
        rows.iter().map(category_from_row).collect()
    }

    async fn category_by_id(&self, id: i64) -> Result<Option<Category>> {
        let row = sqlx::query("SELECT * FROM categories WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        row.as_ref().map(category_from_row).transpose()
    }

    async fn create_category(&self, name: &Localized<String>) -> Result<Category> {
        let query = sqlx::query("INSERT INTO categories (name_ru, name_uz, created_at) VALUES (?, ?, ?)");
        let result = bind_localized(query, name)
            .bind(Utc::now().timestamp())
            .execute(&self.pool)
            .await?;
        let id = result.last_insert_rowid();
        info!("Created categories row {}", id);
        self.category_by_id(id)
            .await?
            .with_context(|| format!("categories row {} missing after insert", id))
    }

    async fn list_reviews(&self) -> Result<Vec<Review>> {
        self.fetch_all("").await
    }

    async fn review_by_id(&self, id: i64) -> Result<Option<Review>> {
        self.fetch_by_id(id).await
    }

    async fn save_review(&self, review: &Review) -> Result<Option<Review>> {
        self.save(review).await
    }

    async fn delete_review(&self, id: i64) -> Result<bool> {
        self.delete::<Review>(id).await
    }
}
