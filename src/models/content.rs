// Content entities - services, case studies, blog posts, categories and reviews

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::seo::{EntityKind, SeoEntity, SeoFields};
use crate::core::{Locale, Localized};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Service {
    pub id: i64,
    pub slug: Localized<String>,
    pub title: Localized<String>,
    pub short_description: Localized<String>,
    pub content: Localized<String>,
    pub seo: SeoFields,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Case {
    pub id: i64,
    pub slug: Localized<String>,
    pub title: Localized<String>,
    pub description: Localized<String>,
    pub problem: Localized<String>,
    pub solution: Localized<String>,
    pub result: Localized<String>,
    pub industry: Option<String>,
    pub seo: SeoFields,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Post {
    pub id: i64,
    pub slug: Localized<String>,
    pub title: Localized<String>,
    pub excerpt: Localized<String>,
    pub content: Localized<String>,
    /// Comma-separated tags
    pub tags: Option<String>,
    pub category_id: Option<i64>,
    pub is_published: bool,
    pub published_at: Option<DateTime<Utc>>,
    pub seo: SeoFields,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Review {
    pub id: i64,
    pub client_name: String,
    pub company: Option<String>,
    pub text: Localized<String>,
    /// 1..=5
    pub rating: i64,
    pub seo: SeoFields,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Blog post grouping, picked per post in the admin
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Category {
    pub id: i64,
    pub name: Localized<String>,
    pub created_at: DateTime<Utc>,
}

impl Default for Review {
    fn default() -> Self {
        Self {
            id: 0,
            client_name: String::new(),
            company: None,
            text: Localized::default(),
            rating: 5,
            seo: SeoFields::default(),
            created_at: DateTime::<Utc>::default(),
            updated_at: DateTime::<Utc>::default(),
        }
    }
}

impl SeoEntity for Service {
    fn kind(&self) -> EntityKind {
        EntityKind::Service
    }

    fn seo(&self) -> &SeoFields {
        &self.seo
    }

    fn slug(&self, locale: Locale) -> Option<&str> {
        self.slug.text(locale)
    }

    fn content_title(&self, locale: Locale) -> Option<&str> {
        self.title.text(locale)
    }

    fn content_description(&self, locale: Locale) -> Option<&str> {
        self.short_description.text(locale)
    }

    fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }
}

impl SeoEntity for Case {
    fn kind(&self) -> EntityKind {
        EntityKind::Case
    }

    fn seo(&self) -> &SeoFields {
        &self.seo
    }

    fn slug(&self, locale: Locale) -> Option<&str> {
        self.slug.text(locale)
    }

    fn content_title(&self, locale: Locale) -> Option<&str> {
        self.title.text(locale)
    }

    fn content_description(&self, locale: Locale) -> Option<&str> {
        self.description.text(locale)
    }

    fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }
}

impl SeoEntity for Post {
    fn kind(&self) -> EntityKind {
        EntityKind::Post
    }

    fn seo(&self) -> &SeoFields {
        &self.seo
    }

    fn slug(&self, locale: Locale) -> Option<&str> {
        self.slug.text(locale)
    }

    fn content_title(&self, locale: Locale) -> Option<&str> {
        self.title.text(locale)
    }

    fn content_description(&self, locale: Locale) -> Option<&str> {
        self.excerpt.text(locale)
    }

    fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }
}

// Reviews have no page of their own; they resolve against the reviews listing.
impl SeoEntity for Review {
    fn kind(&self) -> EntityKind {
        EntityKind::Review
    }

    fn seo(&self) -> &SeoFields {
        &self.seo
    }

    fn slug(&self, _locale: Locale) -> Option<&str> {
        None
    }

    fn content_title(&self, _locale: Locale) -> Option<&str> {
        Some(self.client_name.as_str()).filter(|name| !name.trim().is_empty())
    }

    fn content_description(&self, locale: Locale) -> Option<&str> {
        self.text.text(locale)
    }

    fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }
}
