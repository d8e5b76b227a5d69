// PageService - loads content for a public page and resolves everything the
// page needs to render: metadata, JSON-LD and the visible content

use chrono::Utc;
use serde::Serialize;
use serde_json::{json, Value};
use std::sync::Arc;
use tracing::{debug, warn};

use crate::{
    core::{Locale, Section},
    error::{AppError, AppResult},
    infrastructure::content_store::{ContentStore, PostFilter},
    models::{Review, SeoEntity, SiteSettings},
    seo::{
        fallbacks::not_found_title, keywords::parse_keywords, render_sitemap_xml, robots::robots_txt,
        structured_data, AggregateRating, Page, ResolvedMetadata, SeoContext, SitemapSources,
    },
};

/// Number of case studies shown on the home page
const HOME_CASES: usize = 3;

/// Everything a public page renders from
#[derive(Debug, Clone, Serialize)]
pub struct PageView {
    pub metadata: ResolvedMetadata,
    pub structured_data: Vec<Value>,
    pub content: Value,
}

#[derive(Clone)]
pub struct PageService {
    store: Arc<dyn ContentStore>,
    seo: SeoContext,
}

impl PageService {
    pub fn new(store: Arc<dyn ContentStore>, seo: SeoContext) -> Self {
        Self { store, seo }
    }

    pub fn seo(&self) -> &SeoContext {
        &self.seo
    }

    /// Settings snapshot for one request. A failed read degrades to the
    /// hardcoded fallbacks instead of failing the page.
    async fn settings(&self) -> Option<SiteSettings> {
        match self.store.site_settings().await {
            Ok(settings) => settings,
            Err(err) => {
                warn!("Site settings unavailable, using fallbacks: {:#}", err);
                None
            }
        }
    }

    pub async fn home(&self, locale: Locale) -> AppResult<PageView> {
        let settings = self.settings().await;
        let settings = settings.as_ref();
        let metadata = self.seo.resolve_metadata(locale, Page::Section(Section::Home), settings);

        let services = self.store.list_services().await?;
        let cases = self.store.list_cases().await?;
        let reviews = self.store.list_reviews().await?;
        let aggregate = AggregateRating::from_reviews(&reviews);

        let organization = structured_data::organization(
            &self.seo,
            locale,
            settings,
            Some(metadata.description.as_str()),
            aggregate.as_ref().map(|rating| (rating, reviews.as_slice())),
        );
        let structured = vec![
            organization,
            structured_data::website(&self.seo, settings),
            structured_data::faq_page(locale),
        ];

        let faq: Vec<Value> = structured_data::faq_entries(locale)
            .iter()
            .map(|(question, answer)| json!({ "question": question, "answer": answer }))
            .collect();
        let content = json!({
            "services": services.iter().map(|s| self.card(locale, s, settings)).collect::<Vec<_>>(),
            "cases": cases.iter().take(HOME_CASES).map(|c| self.card(locale, c, settings)).collect::<Vec<_>>(),
            "reviews": reviews.iter().map(|r| review_card(locale, r)).collect::<Vec<_>>(),
            "aggregate_rating": aggregate.map(|rating| aggregate_json(&rating)),
            "faq": faq,
        });

        Ok(PageView {
            metadata,
            structured_data: structured,
            content,
        })
    }

    pub async fn listing(&self, locale: Locale, section: Section) -> AppResult<PageView> {
        let settings = self.settings().await;
        let settings = settings.as_ref();
        let metadata = self.seo.resolve_metadata(locale, Page::Section(section), settings);

        let view = match section {
            Section::Services => {
                let services = self.store.list_services().await?;
                let items: Vec<ResolvedMetadata> = services
                    .iter()
                    .map(|s| self.seo.resolve_metadata(locale, Page::Entity(s), settings))
                    .collect();
                self.item_listing(section, metadata, &items)
            }
            Section::Cases => {
                let cases = self.store.list_cases().await?;
                let items: Vec<ResolvedMetadata> = cases
                    .iter()
                    .map(|c| self.seo.resolve_metadata(locale, Page::Entity(c), settings))
                    .collect();
                self.item_listing(section, metadata, &items)
            }
            Section::Blog => {
                let posts = self.store.list_posts(PostFilter::Published).await?;
                let categories = self.store.list_categories().await?;
                let items: Vec<_> = posts
                    .iter()
                    .map(|p| (p, self.seo.resolve_metadata(locale, Page::Entity(p), settings)))
                    .collect();
                let cards: Vec<Value> = items
                    .iter()
                    .map(|(post, item)| {
                        let mut card = card_json(item);
                        card["published_at"] = json!(post.published_at);
                        card["tags"] = json!(post.tags.as_deref().map(parse_keywords).unwrap_or_default());
                        card["category_id"] = json!(post.category_id);
                        card
                    })
                    .collect();
                PageView {
                    structured_data: vec![
                        structured_data::blog(&metadata, &items),
                        structured_data::breadcrumbs(&self.seo, section, &metadata),
                    ],
                    content: json!({
                        "items": cards,
                        "categories": categories
                            .iter()
                            .map(|category| json!({ "id": category.id, "name": category.name.text(locale) }))
                            .collect::<Vec<_>>(),
                    }),
                    metadata,
                }
            }
            Section::Reviews => {
                let reviews = self.store.list_reviews().await?;
                let aggregate = AggregateRating::from_reviews(&reviews);
                let metadata = match &aggregate {
                    Some(rating) => metadata.with_title_suffix(&rating.title_suffix(locale)),
                    None => metadata,
                };
                let organization = structured_data::organization(
                    &self.seo,
                    locale,
                    settings,
                    None,
                    aggregate.as_ref().map(|rating| (rating, reviews.as_slice())),
                );
                PageView {
                    structured_data: vec![
                        organization,
                        structured_data::breadcrumbs(&self.seo, section, &metadata),
                    ],
                    content: json!({
                        "items": reviews.iter().map(|r| review_card(locale, r)).collect::<Vec<_>>(),
                        "aggregate_rating": aggregate.map(|rating| aggregate_json(&rating)),
                    }),
                    metadata,
                }
            }
            Section::About => PageView {
                structured_data: vec![
                    structured_data::organization(&self.seo, locale, settings, Some(metadata.description.as_str()), None),
                    structured_data::breadcrumbs(&self.seo, section, &metadata),
                ],
                content: json!({ "company_name": metadata.open_graph.site_name }),
                metadata,
            },
            Section::Contact => PageView {
                structured_data: vec![structured_data::breadcrumbs(&self.seo, section, &metadata)],
                content: json!({
                    "company_name": metadata.open_graph.site_name,
                    "social_links": settings.map(SiteSettings::social_links).unwrap_or_default(),
                }),
                metadata,
            },
            Section::Home => return self.home(locale).await,
        };

        Ok(view)
    }

    pub async fn detail(&self, locale: Locale, section: Section, slug: &str) -> AppResult<PageView> {
        let settings = self.settings().await;
        let settings = settings.as_ref();

        match section {
            Section::Services => {
                let service = self
                    .store
                    .service_by_slug(locale, slug)
                    .await?
                    .ok_or_else(|| not_found(section, slug))?;
                let metadata = self.seo.resolve_metadata(locale, Page::Entity(&service), settings);
                Ok(PageView {
                    structured_data: vec![
                        structured_data::service(&self.seo, &metadata, settings),
                        structured_data::breadcrumbs(&self.seo, section, &metadata),
                    ],
                    content: json!({
                        "title": service.title.text(locale),
                        "short_description": service.short_description.text(locale),
                        "body": service.content.text(locale),
                    }),
                    metadata,
                })
            }
            Section::Cases => {
                let case = self
                    .store
                    .case_by_slug(locale, slug)
                    .await?
                    .ok_or_else(|| not_found(section, slug))?;
                let metadata = self.seo.resolve_metadata(locale, Page::Entity(&case), settings);
                Ok(PageView {
                    structured_data: vec![
                        structured_data::case_study(&self.seo, &metadata, &case, settings),
                        structured_data::breadcrumbs(&self.seo, section, &metadata),
                    ],
                    content: json!({
                        "title": case.title.text(locale),
                        "description": case.description.text(locale),
                        "problem": case.problem.text(locale),
                        "solution": case.solution.text(locale),
                        "result": case.result.text(locale),
                        "industry": case.industry,
                    }),
                    metadata,
                })
            }
            Section::Blog => {
                let post = self
                    .store
                    .post_by_slug(locale, slug)
                    .await?
                    .filter(|post| post.is_published)
                    .ok_or_else(|| not_found(section, slug))?;
                let metadata = self.seo.resolve_metadata(locale, Page::Entity(&post), settings);
                Ok(PageView {
                    structured_data: vec![
                        structured_data::blog_posting(&self.seo, &metadata, &post, settings),
                        structured_data::breadcrumbs(&self.seo, section, &metadata),
                    ],
                    content: json!({
                        "title": post.title.text(locale),
                        "excerpt": post.excerpt.text(locale),
                        "body": post.content.text(locale),
                        "tags": post.tags.as_deref().map(parse_keywords).unwrap_or_default(),
                        "published_at": post.published_at,
                    }),
                    metadata,
                })
            }
            _ => Err(not_found(section, slug)),
        }
    }

    /// View rendered alongside a 404: never indexed.
    pub fn not_found_view(&self, locale: Locale, section: Section, message: &str) -> PageView {
        PageView {
            metadata: self.seo.not_found_metadata(locale, section),
            structured_data: Vec::new(),
            content: json!({
                "title": not_found_title(locale),
                "error": message,
            }),
        }
    }

    pub async fn sitemap_xml(&self) -> AppResult<String> {
        let services = self.store.list_services().await?;
        let cases = self.store.list_cases().await?;
        let posts = self.store.list_posts(PostFilter::Published).await?;
        let entries = self.seo.build_sitemap(
            SitemapSources {
                services: &services,
                cases: &cases,
                posts: &posts,
            },
            Utc::now(),
        );
        debug!("Sitemap built with {} entries", entries.len());
        Ok(render_sitemap_xml(&entries))
    }

    pub fn robots_txt(&self) -> String {
        robots_txt(&self.seo)
    }

    fn item_listing(&self, section: Section, metadata: ResolvedMetadata, items: &[ResolvedMetadata]) -> PageView {
        PageView {
            structured_data: vec![
                structured_data::item_list(&metadata, items),
                structured_data::breadcrumbs(&self.seo, section, &metadata),
            ],
            content: json!({ "items": items.iter().map(card_json).collect::<Vec<_>>() }),
            metadata,
        }
    }

    fn card(&self, locale: Locale, entity: &dyn SeoEntity, settings: Option<&SiteSettings>) -> Value {
        card_json(&self.seo.resolve_metadata(locale, Page::Entity(entity), settings))
    }
}

/// Listing card built from the item's own resolved metadata
fn card_json(metadata: &ResolvedMetadata) -> Value {
    json!({
        "url": metadata.canonical,
        "title": metadata.title,
        "description": metadata.description,
        "image": metadata.open_graph.image,
    })
}

fn review_card(locale: Locale, review: &Review) -> Value {
    json!({
        "client_name": review.client_name,
        "company": review.company,
        "text": review.text.text(locale),
        "rating": review.rating,
    })
}

fn aggregate_json(rating: &AggregateRating) -> Value {
    json!({
        "rating_value": rating.rating_value(),
        "review_count": rating.count,
    })
}

fn not_found(section: Section, slug: &str) -> AppError {
    AppError::NotFound(format!("No {:?} page for slug '{}'", section, slug))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Localized;
    use crate::infrastructure::sqlite_store::SqliteContentStore;
    use crate::models::{Post, Service};

    const BASE: &str = "https://possible.uz";

    async fn pages() -> (PageService, Arc<SqliteContentStore>) {
        let store = Arc::new(SqliteContentStore::connect_in_memory(10).await.unwrap());
        store.init().await.unwrap();
        let pages = PageService::new(store.clone(), SeoContext::new(BASE));
        (pages, store)
    }

    #[tokio::test]
    async fn test_detail_structured_data_matches_metadata() {
        let (pages, store) = pages().await;
        store
            .save_service(&Service {
                slug: Localized::from_strs("crm", "crm-tizimi"),
                title: Localized::from_strs("CRM", "CRM tizimi"),
                ..Default::default()
            })
            .await
            .unwrap();

        let view = pages.detail(Locale::Uz, Section::Services, "crm").await.unwrap();
        assert_eq!(view.metadata.canonical, "https://possible.uz/uz/xizmatlar/crm-tizimi");
        assert_eq!(view.metadata.title, "CRM tizimi");
        assert_eq!(view.structured_data[0]["url"], json!(view.metadata.canonical));
        assert_eq!(view.structured_data[0]["name"], json!(view.metadata.title));
        assert_eq!(view.content["title"], json!("CRM tizimi"));
    }

    #[tokio::test]
    async fn test_unpublished_post_is_not_found() {
        let (pages, store) = pages().await;
        store
            .save_post(&Post {
                slug: Localized::from_strs("draft", "qoralama"),
                ..Default::default()
            })
            .await
            .unwrap();

        let err = pages.detail(Locale::Ru, Section::Blog, "draft").await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_sections_without_detail_pages_are_not_found() {
        let (pages, _) = pages().await;
        let err = pages.detail(Locale::Ru, Section::Reviews, "anything").await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_reviews_listing_carries_aggregate() {
        let (pages, store) = pages().await;
        for rating in [5, 5, 4] {
            store
                .save_review(&Review {
                    client_name: "Client".to_string(),
                    rating,
                    ..Default::default()
                })
                .await
                .unwrap();
        }

        let view = pages.listing(Locale::Ru, Section::Reviews).await.unwrap();
        assert!(view.metadata.title.ends_with("4.7 из 5"));
        let org = &view.structured_data[0];
        assert_eq!(org["aggregateRating"]["ratingValue"], json!("4.7"));
        assert_eq!(org["aggregateRating"]["reviewCount"], json!(3));
        assert_eq!(view.content["aggregate_rating"]["review_count"], json!(3));
    }

    #[tokio::test]
    async fn test_not_found_view_disables_indexing() {
        let (pages, _) = pages().await;
        let view = pages.not_found_view(Locale::Uz, Section::Blog, "missing");
        assert!(!view.metadata.robots.index);
        assert!(!view.metadata.robots.follow);
        assert!(view.structured_data.is_empty());
    }
}
