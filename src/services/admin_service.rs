// AdminService - validated CRUD over site content for the admin API

use chrono::Utc;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::de::DeserializeOwned;
use serde_json::{json, Value};
use std::sync::Arc;
use tracing::info;

use crate::{
    core::{Locale, Localized},
    error::{AppError, AppResult},
    infrastructure::content_store::{ContentStore, PostFilter},
    models::{Case, Category, EntityKind, Post, Review, SeoFields, Service, SiteSettings},
};

static SLUG_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-z0-9-]+$").expect("slug pattern is valid"));

/// Admin collection name in the URL, e.g. `/api/admin/services`
pub fn parse_collection(name: &str) -> AppResult<EntityKind> {
    match name {
        "services" => Ok(EntityKind::Service),
        "cases" => Ok(EntityKind::Case),
        "posts" => Ok(EntityKind::Post),
        "reviews" => Ok(EntityKind::Review),
        _ => Err(AppError::NotFound(format!("Unknown collection: {}", name))),
    }
}

pub fn validate_slugs(slug: &Localized<String>) -> AppResult<()> {
    for locale in Locale::ALL {
        let value = slug
            .text(locale)
            .ok_or_else(|| AppError::Validation(format!("slug_{} is required", locale)))?;
        if !SLUG_PATTERN.is_match(value) {
            return Err(AppError::Validation(format!(
                "slug_{} may only contain lowercase letters, digits and '-'",
                locale
            )));
        }
    }
    Ok(())
}

pub fn validate_review(review: &Review) -> AppResult<()> {
    if review.client_name.trim().is_empty() {
        return Err(AppError::Validation("client_name is required".to_string()));
    }
    if !(1..=5).contains(&review.rating) {
        return Err(AppError::Validation("rating must be between 1 and 5".to_string()));
    }
    Ok(())
}

/// Image and canonical URLs must be site-relative (`/...`) or absolute
/// `http(s)` URLs. A bare host like `possible.uz/ru/x` would be read as a path.
pub fn validate_url(field: &str, value: Option<&str>) -> AppResult<()> {
    let Some(value) = value.map(str::trim).filter(|v| !v.is_empty()) else {
        return Ok(());
    };
    if value.starts_with('/') || value.starts_with("http://") || value.starts_with("https://") {
        return Ok(());
    }
    Err(AppError::Validation(format!(
        "{} must start with '/' or http(s)://, got {}",
        field, value
    )))
}

fn validate_seo(seo: &SeoFields) -> AppResult<()> {
    validate_url("seo.canonical_url", seo.canonical_url.as_deref())?;
    validate_url("seo.og_image", seo.og_image.as_deref())
}

/// Overlay `patch` onto `target`. Objects merge key by key, anything else
/// replaces the target value.
fn merge_json(target: &mut Value, patch: Value) {
    match (target, patch) {
        (Value::Object(target), Value::Object(patch)) => {
            for (key, value) in patch {
                match target.get_mut(&key) {
                    Some(existing) => merge_json(existing, value),
                    None => {
                        target.insert(key, value);
                    }
                }
            }
        }
        (target, patch) => *target = patch,
    }
}

fn parse_body<T: DeserializeOwned>(body: Value) -> AppResult<T> {
    serde_json::from_value(body).map_err(|err| AppError::BadRequest(format!("Invalid body: {}", err)))
}

fn to_json<T: serde::Serialize>(value: &T) -> AppResult<Value> {
    serde_json::to_value(value).map_err(|err| AppError::Internal(err.to_string()))
}

fn missing(kind: EntityKind, id: i64) -> AppError {
    AppError::NotFound(format!("{:?} with id {} not found", kind, id))
}

#[derive(Clone)]
pub struct AdminService {
    store: Arc<dyn ContentStore>,
}

impl AdminService {
    pub fn new(store: Arc<dyn ContentStore>) -> Self {
        Self { store }
    }

    pub async fn settings(&self) -> AppResult<Value> {
        let settings = self.store.site_settings().await?.unwrap_or_default();
        to_json(&settings)
    }

    /// Fields missing from `body` keep their stored values.
    pub async fn save_settings(&self, body: Value) -> AppResult<Value> {
        let mut merged = self.settings().await?;
        merge_json(&mut merged, body);
        let settings: SiteSettings = parse_body(merged)?;
        validate_url("default_og_image", settings.default_og_image.as_deref())?;
        validate_url("logo", settings.logo.as_deref())?;
        let saved = self.store.save_site_settings(&settings).await?;
        to_json(&saved)
    }

    pub async fn list(&self, kind: EntityKind) -> AppResult<Value> {
        match kind {
            EntityKind::Service => to_json(&self.store.list_services().await?),
            EntityKind::Case => to_json(&self.store.list_cases().await?),
            EntityKind::Post => to_json(&self.store.list_posts(PostFilter::All).await?),
            EntityKind::Review => to_json(&self.store.list_reviews().await?),
        }
    }

    pub async fn get(&self, kind: EntityKind, id: i64) -> AppResult<Value> {
        let found = match kind {
            EntityKind::Service => self.store.service_by_id(id).await?.map(|e| to_json(&e)),
            EntityKind::Case => self.store.case_by_id(id).await?.map(|e| to_json(&e)),
            EntityKind::Post => self.store.post_by_id(id).await?.map(|e| to_json(&e)),
            EntityKind::Review => self.store.review_by_id(id).await?.map(|e| to_json(&e)),
        };
        found.unwrap_or_else(|| Err(missing(kind, id)))
    }

    pub async fn create(&self, kind: EntityKind, body: Value) -> AppResult<Value> {
        self.save(kind, 0, body).await
    }

    /// Partial update: the body is merged over the stored row, so omitted
    /// fields are left as they are.
    pub async fn update(&self, kind: EntityKind, id: i64, body: Value) -> AppResult<Value> {
        if id <= 0 {
            return Err(missing(kind, id));
        }
        let mut merged = self.get(kind, id).await?;
        merge_json(&mut merged, body);
        self.save(kind, id, merged).await
    }

    pub async fn categories(&self) -> AppResult<Value> {
        to_json(&self.store.list_categories().await?)
    }

    pub async fn create_category(&self, body: Value) -> AppResult<Value> {
        let category: Category = parse_body(body)?;
        if Locale::ALL.into_iter().all(|locale| category.name.text(locale).is_none()) {
            return Err(AppError::Validation("name is required".to_string()));
        }
        let created = self.store.create_category(&category.name).await?;
        info!("Admin created category {}", created.id);
        to_json(&created)
    }

    /// Insert when `id == 0`, otherwise update the existing row.
    async fn save(&self, kind: EntityKind, id: i64, body: Value) -> AppResult<Value> {
        let saved = match kind {
            EntityKind::Service => {
                let mut service: Service = parse_body(body)?;
                service.id = id;
                validate_slugs(&service.slug)?;
                validate_seo(&service.seo)?;
                self.store.save_service(&service).await?.map(|e| to_json(&e))
            }
            EntityKind::Case => {
                let mut case: Case = parse_body(body)?;
                case.id = id;
                validate_slugs(&case.slug)?;
                validate_seo(&case.seo)?;
                self.store.save_case(&case).await?.map(|e| to_json(&e))
            }
            EntityKind::Post => {
                let mut post: Post = parse_body(body)?;
                post.id = id;
                validate_slugs(&post.slug)?;
                validate_seo(&post.seo)?;
                if let Some(category_id) = post.category_id {
                    if self.store.category_by_id(category_id).await?.is_none() {
                        return Err(AppError::Validation(format!(
                            "category {} does not exist",
                            category_id
                        )));
                    }
                }
                if post.is_published && post.published_at.is_none() {
                    post.published_at = Some(Utc::now());
                }
                self.store.save_post(&post).await?.map(|e| to_json(&e))
            }
            EntityKind::Review => {
                let mut review: Review = parse_body(body)?;
                review.id = id;
                validate_review(&review)?;
                validate_seo(&review.seo)?;
                self.store.save_review(&review).await?.map(|e| to_json(&e))
            }
        };

        let saved = saved.unwrap_or_else(|| Err(missing(kind, id)))?;
        info!("Admin saved {:?} {}", kind, saved["id"]);
        Ok(saved)
    }

    pub async fn delete(&self, kind: EntityKind, id: i64) -> AppResult<Value> {
        let deleted = match kind {
            EntityKind::Service => self.store.delete_service(id).await?,
            EntityKind::Case => self.store.delete_case(id).await?,
            EntityKind::Post => self.store.delete_post(id).await?,
            EntityKind::Review => self.store.delete_review(id).await?,
        };
        if !deleted {
            return Err(missing(kind, id));
        }
        info!("Admin deleted {:?} {}", kind, id);
        Ok(json!({ "id": id, "deleted": true }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::sqlite_store::SqliteContentStore;

    async fn admin() -> AdminService {
        let store = SqliteContentStore::connect_in_memory(10).await.unwrap();
        store.init().await.unwrap();
        AdminService::new(Arc::new(store))
    }

    #[test]
    fn test_slug_validation() {
        assert!(validate_slugs(&Localized::from_strs("crm-1", "crm-uz")).is_ok());
        assert!(validate_slugs(&Localized::from_strs("CRM", "crm")).is_err());
        assert!(validate_slugs(&Localized::from_strs("crm", "  ")).is_err());
        assert!(validate_slugs(&Localized::from_strs("crm doc", "crm")).is_err());
    }

    #[test]
    fn test_review_rating_bounds() {
        let mut review = Review {
            client_name: "Aziz".to_string(),
            ..Default::default()
        };
        assert!(validate_review(&review).is_ok());
        review.rating = 0;
        assert!(validate_review(&review).is_err());
        review.rating = 6;
        assert!(validate_review(&review).is_err());
    }

    #[test]
    fn test_unknown_collection() {
        assert!(matches!(parse_collection("users"), Err(AppError::NotFound(_))));
        assert_eq!(parse_collection("posts").unwrap(), EntityKind::Post);
    }

    #[tokio::test]
    async fn test_publishing_stamps_published_at() {
        let admin = admin().await;
        let created = admin
            .create(
                EntityKind::Post,
                json!({ "slug": { "ru": "novost", "uz": "yangilik" }, "is_published": true }),
            )
            .await
            .unwrap();
        assert!(created["published_at"].is_string());
    }

    #[test]
    fn test_url_validation() {
        assert!(validate_url("seo.og_image", None).is_ok());
        assert!(validate_url("seo.og_image", Some("/og.png")).is_ok());
        assert!(validate_url("seo.og_image", Some("https://cdn.example.com/og.png")).is_ok());
        assert!(matches!(
            validate_url("seo.canonical_url", Some("possible.uz/ru/x")),
            Err(AppError::Validation(_))
        ));
    }

    #[test]
    fn test_merge_json_keeps_omitted_fields() {
        let mut stored = json!({ "title": { "ru": "A", "uz": "B" }, "seo": { "index": null, "meta_title": { "ru": "M" } } });
        merge_json(&mut stored, json!({ "title": { "uz": "C" }, "seo": { "index": false } }));
        assert_eq!(
            stored,
            json!({ "title": { "ru": "A", "uz": "C" }, "seo": { "index": false, "meta_title": { "ru": "M" } } })
        );
    }

    #[tokio::test]
    async fn test_partial_update_keeps_stored_fields() {
        let admin = admin().await;
        let created = admin
            .create(
                EntityKind::Post,
                json!({
                    "slug": { "ru": "novost", "uz": "yangilik" },
                    "title": { "ru": "Новость", "uz": "Yangilik" },
                    "content": { "ru": "Текст", "uz": "Matn" },
                    "is_published": true,
                    "seo": { "meta_title": { "ru": "Мета" } },
                }),
            )
            .await
            .unwrap();
        let id = created["id"].as_i64().unwrap();

        let updated = admin
            .update(
                EntityKind::Post,
                id,
                json!({ "slug": { "ru": "novost-2", "uz": "yangilik" }, "seo": { "index": false } }),
            )
            .await
            .unwrap();
        assert_eq!(updated["slug"]["ru"], "novost-2");
        assert_eq!(updated["seo"]["index"], false);
        assert_eq!(updated["title"], created["title"]);
        assert_eq!(updated["content"], created["content"]);
        assert_eq!(updated["seo"]["meta_title"]["ru"], "Мета");
        assert_eq!(updated["published_at"], created["published_at"]);
        assert_eq!(updated["is_published"], true);
    }

    #[tokio::test]
    async fn test_partial_settings_update() {
        let admin = admin().await;
        admin
            .save_settings(json!({ "company_name": "Possible Group", "logo": "/logo.png" }))
            .await
            .unwrap();
        let saved = admin.save_settings(json!({ "logo": "/logo-2.png" })).await.unwrap();
        assert_eq!(saved["company_name"], "Possible Group");
        assert_eq!(saved["logo"], "/logo-2.png");

        assert!(matches!(
            admin.save_settings(json!({ "logo": "possible.uz/logo.png" })).await,
            Err(AppError::Validation(_))
        ));
    }

    #[tokio::test]
    async fn test_host_like_canonical_is_rejected() {
        let admin = admin().await;
        let body = json!({
            "slug": { "ru": "crm", "uz": "crm-uz" },
            "seo": { "canonical_url": "possible.uz/ru/services/crm" },
        });
        assert!(matches!(
            admin.create(EntityKind::Service, body).await,
            Err(AppError::Validation(_))
        ));
    }

    #[tokio::test]
    async fn test_categories() {
        let admin = admin().await;
        assert!(matches!(
            admin.create_category(json!({ "name": { "ru": " " } })).await,
            Err(AppError::Validation(_))
        ));
        let category = admin
            .create_category(json!({ "name": { "ru": "Новости", "uz": "Yangiliklar" } }))
            .await
            .unwrap();
        assert_eq!(admin.categories().await.unwrap().as_array().unwrap().len(), 1);

        let post = admin
            .create(
                EntityKind::Post,
                json!({ "slug": { "ru": "a", "uz": "b" }, "category_id": category["id"] }),
            )
            .await
            .unwrap();
        assert_eq!(post["category_id"], category["id"]);
        assert!(matches!(
            admin
                .create(EntityKind::Post, json!({ "slug": { "ru": "c", "uz": "d" }, "category_id": 999 }))
                .await,
            Err(AppError::Validation(_))
        ));
    }

    #[tokio::test]
    async fn test_update_and_delete_missing_rows() {
        let admin = admin().await;
        let body = json!({ "slug": { "ru": "a", "uz": "b" } });
        assert!(matches!(
            admin.update(EntityKind::Service, 42, body).await,
            Err(AppError::NotFound(_))
        ));
        assert!(matches!(
            admin.delete(EntityKind::Case, 42).await,
            Err(AppError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_duplicate_slug_conflicts() {
        let admin = admin().await;
        let body = json!({ "slug": { "ru": "same", "uz": "same-uz" } });
        admin.create(EntityKind::Case, body.clone()).await.unwrap();
        assert!(matches!(
            admin.create(EntityKind::Case, body).await,
            Err(AppError::Conflict(_))
        ));
    }
}
