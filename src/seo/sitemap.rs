// Sitemap builder - enumerates indexable URLs from the same URL rules the
// metadata resolver uses, so the two can never disagree.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;
use std::fmt::Write as _;

use super::metadata::SeoContext;
use crate::core::{Locale, Section};
use crate::models::{Case, EntityKind, Post, SeoEntity, Service};

pub const STATIC_PAGE_PRIORITY: f32 = 0.7;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeFreq {
    Daily,
    Weekly,
    Monthly,
}

impl ChangeFreq {
    pub fn as_str(self) -> &'static str {
        match self {
            ChangeFreq::Daily => "daily",
            ChangeFreq::Weekly => "weekly",
            ChangeFreq::Monthly => "monthly",
        }
    }

    /// Lenient parse; unknown values are treated as absent.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "daily" => Some(ChangeFreq::Daily),
            "weekly" => Some(ChangeFreq::Weekly),
            "monthly" => Some(ChangeFreq::Monthly),
            _ => None,
        }
    }
}

/// Parse a stored priority hint. Non-numeric, non-finite and out-of-range
/// values are treated as absent.
pub fn parse_priority(raw: &str) -> Option<f32> {
    raw.trim()
        .parse::<f32>()
        .ok()
        .filter(|priority| priority.is_finite() && (0.0..=1.0).contains(priority))
}

/// Defaults applied when an entity carries no (valid) hint
pub fn sitemap_defaults(kind: EntityKind) -> (f32, ChangeFreq) {
    match kind {
        EntityKind::Service => (0.8, ChangeFreq::Monthly),
        EntityKind::Case => (0.6, ChangeFreq::Monthly),
        EntityKind::Post => (0.7, ChangeFreq::Weekly),
        EntityKind::Review => (STATIC_PAGE_PRIORITY, ChangeFreq::Weekly),
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SitemapEntry {
    pub url: String,
    pub last_modified: DateTime<Utc>,
    pub change_frequency: ChangeFreq,
    pub priority: f32,
}

/// Entity snapshots the sitemap is built from.
#[derive(Debug, Clone, Copy, Default)]
pub struct SitemapSources<'a> {
    pub services: &'a [Service],
    pub cases: &'a [Case],
    pub posts: &'a [Post],
}

impl SeoContext {
    /// Static pages first, then services, cases and published posts.
    pub fn build_sitemap(
        &self,
        sources: SitemapSources<'_>,
        generated_at: DateTime<Utc>,
    ) -> Vec<SitemapEntry> {
        let mut entries = Vec::new();

        let static_entry = |url: String| SitemapEntry {
            url,
            last_modified: generated_at,
            change_frequency: ChangeFreq::Weekly,
            priority: STATIC_PAGE_PRIORITY,
        };
        entries.push(static_entry(self.absolute("")));
        for section in Section::ALL {
            for locale in Locale::ALL {
                entries.push(static_entry(self.section_url(locale, section)));
            }
        }

        for service in sources.services {
            self.push_entity_entries(&mut entries, service);
        }
        for case in sources.cases {
            self.push_entity_entries(&mut entries, case);
        }
        for post in sources.posts.iter().filter(|post| post.is_published) {
            self.push_entity_entries(&mut entries, post);
        }

        entries
    }

    /// One entry per locale at the locale path. When the entity declares a
    /// canonical override, only that URL is listed (once), and only if it
    /// lives on this site.
    fn push_entity_entries(&self, entries: &mut Vec<SitemapEntry>, entity: &dyn SeoEntity) {
        let seo = entity.seo();
        let (default_priority, default_freq) = sitemap_defaults(entity.kind());
        let priority = seo
            .sitemap_priority
            .as_deref()
            .and_then(parse_priority)
            .unwrap_or(default_priority);
        let change_frequency = seo
            .sitemap_changefreq
            .as_deref()
            .and_then(ChangeFreq::parse)
            .unwrap_or(default_freq);
        let entry = |url: String| SitemapEntry {
            url,
            last_modified: entity.updated_at(),
            change_frequency,
            priority,
        };

        if seo.canonical_override().is_some() {
            let canonical = self.canonical_url(Locale::DEFAULT, entity);
            if self.is_same_site(&canonical) {
                entries.push(entry(canonical));
            }
            return;
        }

        for locale in Locale::ALL {
            if entity.slug(locale).is_some() {
                entries.push(entry(self.entity_url(locale, entity)));
            }
        }
    }

    fn is_same_site(&self, url: &str) -> bool {
        url == self.base_url()
            || url
                .strip_prefix(self.base_url())
                .is_some_and(|rest| rest.starts_with('/') || rest.starts_with('?'))
    }
}

/// Render entries as a sitemaps.org `urlset` document.
pub fn render_sitemap_xml(entries: &[SitemapEntry]) -> String {
    let mut xml = String::from(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">\n",
    );
    for entry in entries {
        // Writing into a String cannot fail
        let _ = write!(
            xml,
            "  <url>\n    <loc>{}</loc>\n    <lastmod>{}</lastmod>\n    <changefreq>{}</changefreq>\n    <priority>{:.1}</priority>\n  </url>\n",
            xml_escape(&entry.url),
            entry.last_modified.to_rfc3339_opts(SecondsFormat::Secs, true),
            entry.change_frequency.as_str(),
            entry.priority,
        );
    }
    xml.push_str("</urlset>\n");
    xml
}

fn xml_escape(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(ch),
        }
    }
    out
}
