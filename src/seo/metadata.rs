// Metadata resolution - one precedence chain for every page type
//
// Per text field: entity SEO field -> entity content field -> site settings
// default -> hardcoded literal. OG fields fall back to the resolved meta
// values only. Canonical: explicit override, else base + locale path + slug.

use serde::Serialize;
use std::collections::BTreeMap;

use super::fallbacks::{
    entity_fallback, listing_keywords, not_found_title, page_fallback, DEFAULT_OG_IMAGE,
    DEFAULT_SITE_NAME,
};
use super::keywords::parse_keywords;
use crate::core::{absolute_url, page_path, Locale, Localized, Section};
use crate::models::{SeoEntity, SiteSettings};

/// What a page is about: a static/listing section or a single entity.
#[derive(Clone, Copy)]
pub enum Page<'a> {
    Section(Section),
    Entity(&'a dyn SeoEntity),
}

impl<'a> Page<'a> {
    fn entity(self) -> Option<&'a dyn SeoEntity> {
        match self {
            Page::Entity(entity) => Some(entity),
            Page::Section(_) => None,
        }
    }

    fn section(self) -> Section {
        match self {
            Page::Entity(entity) => entity.kind().section(),
            Page::Section(section) => section,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Robots {
    pub index: bool,
    pub follow: bool,
}

impl Robots {
    /// `follow` always mirrors `index`.
    pub fn from_index(index: bool) -> Self {
        Self {
            index,
            follow: index,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OpenGraph {
    pub title: String,
    pub description: String,
    pub url: String,
    pub image: String,
    pub site_name: String,
    #[serde(rename = "type")]
    pub og_type: String,
    pub locale: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TwitterCard {
    pub card: String,
    pub title: String,
    pub description: String,
    pub image: String,
}

/// Fully resolved page metadata. A pure function of its inputs, recomputed
/// per request and never persisted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolvedMetadata {
    pub locale: Locale,
    pub title: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keywords: Option<Vec<String>>,
    pub canonical: String,
    /// Locale-specific self URL; equals `canonical` unless an override is set
    pub url: String,
    pub alternates: BTreeMap<Locale, String>,
    pub open_graph: OpenGraph,
    pub twitter: TwitterCard,
    pub robots: Robots,
}

impl ResolvedMetadata {
    /// Append a suffix to the page title, keeping OG and Twitter titles in
    /// step when they mirror it.
    pub fn with_title_suffix(mut self, suffix: &str) -> Self {
        let previous = self.title.clone();
        self.title = format!("{} {}", previous, suffix);
        if self.open_graph.title == previous {
            self.open_graph.title = self.title.clone();
        }
        if self.twitter.title == previous {
            self.twitter.title = self.title.clone();
        }
        self
    }
}

/// Base origin plus the URL rules shared by metadata, sitemap and
/// structured data. Cheap to clone; holds no request state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeoContext {
    base_url: String,
}

impl SeoContext {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn absolute(&self, path: &str) -> String {
        absolute_url(&self.base_url, path)
    }

    pub fn section_url(&self, locale: Locale, section: Section) -> String {
        self.absolute(&page_path(locale, section, None))
    }

    /// Locale-specific address of an entity page, ignoring any override.
    /// Entities without a slug in `locale` resolve to their section page.
    pub fn entity_url(&self, locale: Locale, entity: &dyn SeoEntity) -> String {
        let section = entity.kind().section();
        let slug = entity.slug(locale).filter(|_| section.has_detail_pages());
        self.absolute(&page_path(locale, section, slug))
    }

    /// The address a live page of this entity reports as canonical.
    pub fn canonical_url(&self, locale: Locale, entity: &dyn SeoEntity) -> String {
        match entity.seo().canonical_override() {
            Some(url) => self.absolute(url),
            None => self.entity_url(locale, entity),
        }
    }

    pub fn page_url(&self, locale: Locale, page: Page<'_>) -> String {
        match page {
            Page::Entity(entity) => self.entity_url(locale, entity),
            Page::Section(section) => self.section_url(locale, section),
        }
    }

    pub fn resolve_metadata(
        &self,
        locale: Locale,
        page: Page<'_>,
        settings: Option<&SiteSettings>,
    ) -> ResolvedMetadata {
        let entity = page.entity();
        let section = page.section();
        let fallback = match entity {
            Some(entity) => entity_fallback(entity.kind(), locale),
            None => page_fallback(section, locale),
        };

        let title = resolve_text(
            locale,
            entity.map(|e| &e.seo().meta_title),
            entity.and_then(|e| e.content_title(locale)),
            settings.map(|s| &s.default_meta_title),
            fallback.title,
        )
        .to_string();
        let description = resolve_text(
            locale,
            entity.map(|e| &e.seo().meta_description),
            entity.and_then(|e| e.content_description(locale)),
            settings.map(|s| &s.default_meta_desc),
            fallback.description,
        )
        .to_string();

        let keywords = match entity {
            Some(entity) => entity
                .seo()
                .meta_keywords
                .get(locale)
                .map(|raw| parse_keywords(raw))
                .filter(|keywords| !keywords.is_empty()),
            None => listing_keywords(section, locale)
                .map(|list| list.iter().map(|k| k.to_string()).collect()),
        };

        let url = self.page_url(locale, page);
        let canonical = match entity {
            Some(entity) => self.canonical_url(locale, entity),
            None => url.clone(),
        };
        let alternates = Locale::ALL
            .into_iter()
            .map(|alt| (alt, self.page_url(alt, page)))
            .collect();

        let og_title = entity
            .and_then(|e| e.seo().og_title.text(locale))
            .map(str::to_string)
            .unwrap_or_else(|| title.clone());
        let og_description = entity
            .and_then(|e| e.seo().og_description.text(locale))
            .map(str::to_string)
            .unwrap_or_else(|| description.clone());
        let og_image = self.absolute(
            entity
                .and_then(|e| e.seo().og_image())
                .or_else(|| settings.and_then(SiteSettings::default_og_image))
                .unwrap_or(DEFAULT_OG_IMAGE),
        );
        let site_name = settings
            .and_then(SiteSettings::company_name)
            .unwrap_or(DEFAULT_SITE_NAME)
            .to_string();
        let og_type = entity.map(|e| e.kind().og_type()).unwrap_or("website");

        let robots = Robots::from_index(entity.map_or(true, |e| e.seo().allows_indexing()));

        ResolvedMetadata {
            locale,
            twitter: TwitterCard {
                card: "summary_large_image".to_string(),
                title: og_title.clone(),
                description: og_description.clone(),
                image: og_image.clone(),
            },
            open_graph: OpenGraph {
                title: og_title,
                description: og_description,
                url: canonical.clone(),
                image: og_image,
                site_name,
                og_type: og_type.to_string(),
                locale: locale.og_locale().to_string(),
            },
            title,
            description,
            keywords,
            canonical,
            url,
            alternates,
            robots,
        }
    }

    /// Metadata for a response whose entity was not found: never indexed.
    pub fn not_found_metadata(&self, locale: Locale, section: Section) -> ResolvedMetadata {
        let page = Page::Section(section);
        let mut metadata = self.resolve_metadata(locale, page, None);
        metadata.title = not_found_title(locale).to_string();
        metadata.open_graph.title = metadata.title.clone();
        metadata.twitter.title = metadata.title.clone();
        metadata.keywords = None;
        metadata.robots = Robots::from_index(false);
        metadata
    }
}

/// First non-blank value along the fallback chain for one text field.
fn resolve_text<'a>(
    locale: Locale,
    entity_field: Option<&'a Localized<String>>,
    content_field: Option<&'a str>,
    settings_field: Option<&'a Localized<String>>,
    fallback: &'a str,
) -> &'a str {
    entity_field
        .and_then(|field| field.text(locale))
        .or(content_field)
        .or_else(|| settings_field.and_then(|field| field.text(locale)))
        .unwrap_or(fallback)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Case, Post, Review, Service};

    const BASE: &str = "https://possible.uz";

    fn service() -> Service {
        Service {
            id: 1,
            slug: Localized::from_strs("avtomatizaciya", "avtomatlashtirish"),
            ..Default::default()
        }
    }

    fn settings() -> SiteSettings {
        SiteSettings {
            default_meta_title: Localized::from_strs("Настройки RU", "Sozlamalar UZ"),
            default_meta_desc: Localized::from_strs("Описание RU", "Tavsif UZ"),
            default_og_image: Some("/uploads/og.png".to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_empty_entity_reaches_hardcoded_fallback() {
        let ctx = SeoContext::new(BASE);
        let entity = service();
        for locale in Locale::ALL {
            let meta = ctx.resolve_metadata(locale, Page::Entity(&entity), None);
            assert!(!meta.title.is_empty());
            assert!(!meta.description.is_empty());
            assert_eq!(meta.robots, Robots { index: true, follow: true });
            assert_eq!(meta.open_graph.image, "https://possible.uz/og-default.png");
            assert!(meta.keywords.is_none());
        }
    }

    #[test]
    fn test_entity_meta_title_wins() {
        let ctx = SeoContext::new(BASE);
        let mut entity = service();
        entity.seo.meta_title.ru = Some("X".to_string());
        entity.title = Localized::from_strs("Content", "Kontent");
        let meta = ctx.resolve_metadata(Locale::Ru, Page::Entity(&entity), Some(&settings()));
        assert_eq!(meta.title, "X");
        assert_eq!(meta.open_graph.title, "X");
    }

    #[test]
    fn test_other_locale_never_leaks() {
        let ctx = SeoContext::new(BASE);
        let mut entity = service();
        entity.seo.meta_title.uz = Some("Faqat UZ".to_string());

        // no content, no settings: hardcoded
        let meta = ctx.resolve_metadata(Locale::Ru, Page::Entity(&entity), None);
        assert_eq!(meta.title, entity_fallback(entity.kind(), Locale::Ru).title);

        // settings tier
        let meta = ctx.resolve_metadata(Locale::Ru, Page::Entity(&entity), Some(&settings()));
        assert_eq!(meta.title, "Настройки RU");

        // content tier
        entity.title.ru = Some("Контент".to_string());
        let meta = ctx.resolve_metadata(Locale::Ru, Page::Entity(&entity), Some(&settings()));
        assert_eq!(meta.title, "Контент");

        let meta = ctx.resolve_metadata(Locale::Uz, Page::Entity(&entity), Some(&settings()));
        assert_eq!(meta.title, "Faqat UZ");
    }

    #[test]
    fn test_blank_fields_fall_through() {
        let ctx = SeoContext::new(BASE);
        let mut entity = service();
        entity.seo.meta_description.ru = Some("   ".to_string());
        entity.short_description.ru = Some("Кратко".to_string());
        let meta = ctx.resolve_metadata(Locale::Ru, Page::Entity(&entity), None);
        assert_eq!(meta.description, "Кратко");
    }

    #[test]
    fn test_og_fields_fall_back_to_resolved_meta_only() {
        let ctx = SeoContext::new(BASE);
        let mut entity = service();
        entity.seo.og_description.ru = Some("OG".to_string());
        let meta = ctx.resolve_metadata(Locale::Ru, Page::Entity(&entity), Some(&settings()));
        assert_eq!(meta.open_graph.title, meta.title);
        assert_eq!(meta.open_graph.description, "OG");
        assert_eq!(meta.twitter.description, "OG");
        assert_eq!(meta.open_graph.image, "https://possible.uz/uploads/og.png");

        entity.seo.og_image = Some("https://cdn.example.com/s.png".to_string());
        let meta = ctx.resolve_metadata(Locale::Ru, Page::Entity(&entity), Some(&settings()));
        assert_eq!(meta.open_graph.image, "https://cdn.example.com/s.png");
    }

    #[test]
    fn test_noindex_disables_follow() {
        let ctx = SeoContext::new(BASE);
        let mut entity = service();
        entity.seo.index = Some(false);
        let meta = ctx.resolve_metadata(Locale::Uz, Page::Entity(&entity), None);
        assert_eq!(meta.robots, Robots { index: false, follow: false });

        entity.seo.index = Some(true);
        let meta = ctx.resolve_metadata(Locale::Uz, Page::Entity(&entity), None);
        assert_eq!(meta.robots, Robots { index: true, follow: true });
    }

    #[test]
    fn test_canonical_and_alternates() {
        let ctx = SeoContext::new("https://possible.uz/");
        let mut entity = service();
        let meta = ctx.resolve_metadata(Locale::Uz, Page::Entity(&entity), None);
        assert_eq!(meta.canonical, "https://possible.uz/uz/xizmatlar/avtomatlashtirish");
        assert_eq!(meta.url, meta.canonical);
        assert_eq!(
            meta.alternates[&Locale::Ru],
            "https://possible.uz/ru/services/avtomatizaciya"
        );

        entity.seo.canonical_url = Some("/ru/services/main".to_string());
        let meta = ctx.resolve_metadata(Locale::Uz, Page::Entity(&entity), None);
        assert_eq!(meta.canonical, "https://possible.uz/ru/services/main");
        assert_eq!(meta.open_graph.url, meta.canonical);
        assert_eq!(meta.url, "https://possible.uz/uz/xizmatlar/avtomatlashtirish");

        entity.seo.canonical_url = Some("  ".to_string());
        let meta = ctx.resolve_metadata(Locale::Uz, Page::Entity(&entity), None);
        assert_eq!(meta.canonical, meta.url);
    }

    #[test]
    fn test_entity_keywords() {
        let ctx = SeoContext::new(BASE);
        let mut entity = Case {
            slug: Localized::from_strs("kejs", "keys"),
            ..Default::default()
        };
        let meta = ctx.resolve_metadata(Locale::Ru, Page::Entity(&entity), Some(&settings()));
        assert!(meta.keywords.is_none());

        entity.seo.meta_keywords.ru = Some("a, b ,,c".to_string());
        let meta = ctx.resolve_metadata(Locale::Ru, Page::Entity(&entity), None);
        assert_eq!(meta.keywords, Some(vec!["a".into(), "b".into(), "c".into()]));
        assert_eq!(meta.open_graph.og_type, "article");

        let meta = ctx.resolve_metadata(Locale::Uz, Page::Entity(&entity), None);
        assert!(meta.keywords.is_none());
    }

    #[test]
    fn test_listing_pages() {
        let ctx = SeoContext::new(BASE);
        let meta = ctx.resolve_metadata(Locale::Uz, Page::Section(Section::Blog), None);
        assert_eq!(meta.canonical, "https://possible.uz/uz/blog");
        assert_eq!(meta.title, page_fallback(Section::Blog, Locale::Uz).title);
        assert!(meta.keywords.as_ref().is_some_and(|k| !k.is_empty()));
        assert_eq!(meta.open_graph.og_type, "website");

        let meta = ctx.resolve_metadata(Locale::Ru, Page::Section(Section::Cases), Some(&settings()));
        assert_eq!(meta.title, "Настройки RU");
        assert_eq!(meta.description, "Описание RU");
    }

    #[test]
    fn test_post_excerpt_is_description_fallback() {
        let ctx = SeoContext::new(BASE);
        let post = Post {
            slug: Localized::from_strs("statya", "maqola"),
            title: Localized::from_strs("Статья", "Maqola"),
            excerpt: Localized::from_strs("Коротко", "Qisqa"),
            ..Default::default()
        };
        let meta = ctx.resolve_metadata(Locale::Uz, Page::Entity(&post), Some(&settings()));
        assert_eq!(meta.title, "Maqola");
        assert_eq!(meta.description, "Qisqa");
        assert_eq!(meta.canonical, "https://possible.uz/uz/blog/maqola");
    }

    #[test]
    fn test_review_resolves_to_reviews_section() {
        let ctx = SeoContext::new(BASE);
        let review = Review {
            client_name: "Aziz".to_string(),
            ..Default::default()
        };
        let meta = ctx.resolve_metadata(Locale::Uz, Page::Entity(&review), None);
        assert_eq!(meta.canonical, "https://possible.uz/uz/sharhlar");
        assert_eq!(meta.title, "Aziz");
    }

    #[test]
    fn test_title_suffix_and_not_found() {
        let ctx = SeoContext::new(BASE);
        let meta = ctx
            .resolve_metadata(Locale::Ru, Page::Section(Section::Reviews), None)
            .with_title_suffix("| 4.7");
        assert!(meta.title.ends_with(" | 4.7"));
        assert_eq!(meta.open_graph.title, meta.title);

        let meta = ctx.not_found_metadata(Locale::Uz, Section::Cases);
        assert_eq!(meta.robots, Robots { index: false, follow: false });
        assert_eq!(meta.title, not_found_title(Locale::Uz));
    }
}
