// SEO fields carried by every content entity

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::core::{Locale, Localized, Section};

/// Per-entity SEO overrides. Every field is optional; resolution falls back
/// through site settings and hardcoded defaults when a field is missing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SeoFields {
    pub meta_title: Localized<String>,
    pub meta_description: Localized<String>,
    /// Comma-separated keyword list
    pub meta_keywords: Localized<String>,
    pub og_title: Localized<String>,
    pub og_description: Localized<String>,
    pub canonical_url: Option<String>,
    pub og_image: Option<String>,
    /// Allow indexing. Absent means allowed.
    pub index: Option<bool>,
    /// Raw sitemap priority hint, kept as text so malformed input survives
    /// storage and is interpreted as absent at sitemap time.
    pub sitemap_priority: Option<String>,
    pub sitemap_changefreq: Option<String>,
}

impl SeoFields {
    /// Explicit canonical override, if set to something non-blank
    pub fn canonical_override(&self) -> Option<&str> {
        self.canonical_url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
    }

    pub fn og_image(&self) -> Option<&str> {
        self.og_image
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
    }

    pub fn allows_indexing(&self) -> bool {
        self.index.unwrap_or(true)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    Service,
    Case,
    Post,
    Review,
}

impl EntityKind {
    pub fn section(self) -> Section {
        match self {
            EntityKind::Service => Section::Services,
            EntityKind::Case => Section::Cases,
            EntityKind::Post => Section::Blog,
            EntityKind::Review => Section::Reviews,
        }
    }

    pub fn og_type(self) -> &'static str {
        match self {
            EntityKind::Post | EntityKind::Case => "article",
            EntityKind::Service | EntityKind::Review => "website",
        }
    }
}

/// Structural capability shared by services, cases, posts and reviews:
/// bilingual SEO fields plus the content fields used as semantic fallbacks.
pub trait SeoEntity {
    fn kind(&self) -> EntityKind;

    fn seo(&self) -> &SeoFields;

    /// Locale-specific slug. `None` for entities without their own page.
    fn slug(&self, locale: Locale) -> Option<&str>;

    /// Plain content title used when no meta title is set
    fn content_title(&self, locale: Locale) -> Option<&str>;

    /// Plain content summary used when no meta description is set
    fn content_description(&self, locale: Locale) -> Option<&str>;

    fn updated_at(&self) -> DateTime<Utc>;
}
