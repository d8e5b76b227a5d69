// Section - top-level site areas and their localized path segments

use serde::{Deserialize, Serialize};

use super::locale::Locale;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    Home,
    Services,
    Cases,
    Blog,
    Reviews,
    About,
    Contact,
}

impl Section {
    pub const ALL: [Section; 7] = [
        Section::Home,
        Section::Services,
        Section::Cases,
        Section::Blog,
        Section::Reviews,
        Section::About,
        Section::Contact,
    ];

    /// Canonical path segment for this section in the given locale.
    /// `None` for the home page, which lives directly under `/{locale}`.
    pub fn segment(self, locale: Locale) -> Option<&'static str> {
        let segment = match (self, locale) {
            (Section::Home, _) => return None,
            (Section::Services, Locale::Ru) => "services",
            (Section::Services, Locale::Uz) => "xizmatlar",
            (Section::Cases, _) => "cases",
            (Section::Blog, _) => "blog",
            (Section::Reviews, Locale::Ru) => "reviews",
            (Section::Reviews, Locale::Uz) => "sharhlar",
            (Section::About, Locale::Ru) => "about",
            (Section::About, Locale::Uz) => "biz-haqimizda",
            (Section::Contact, Locale::Ru) => "contact",
            (Section::Contact, Locale::Uz) => "aloqa",
        };
        Some(segment)
    }

    /// Match an incoming path segment against every locale's segment, so
    /// `/uz/services` and `/uz/xizmatlar` both reach the services section.
    pub fn from_segment(segment: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|section| {
            Locale::ALL
                .into_iter()
                .any(|locale| section.segment(locale) == Some(segment))
        })
    }

    /// Sections whose entities are addressable at `/{locale}/{segment}/{slug}`
    pub fn has_detail_pages(self) -> bool {
        matches!(self, Section::Services | Section::Cases | Section::Blog)
    }
}

/// Site-relative path for a page. Every emitted URL goes through here.
pub fn page_path(locale: Locale, section: Section, slug: Option<&str>) -> String {
    let mut path = format!("/{}", locale.code());
    if let Some(segment) = section.segment(locale) {
        path.push('/');
        path.push_str(segment);
        if let Some(slug) = slug {
            path.push('/');
            path.push_str(slug);
        }
    }
    path
}

/// Join the base origin and a site-relative path.
pub fn absolute_url(base_url: &str, path: &str) -> String {
    if path.starts_with("http://") || path.starts_with("https://") {
        return path.to_string();
    }
    // Protocol-relative: keep the host, borrow the base scheme
    if let Some(rest) = path.strip_prefix("//") {
        let scheme = base_url.split_once("://").map_or("https", |(scheme, _)| scheme);
        return format!("{}://{}", scheme, rest);
    }
    let base = base_url.trim_end_matches('/');
    if path.is_empty() {
        base.to_string()
    } else if path.starts_with('/') {
        format!("{}{}", base, path)
    } else {
        format!("{}/{}", base, path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_paths() {
        assert_eq!(page_path(Locale::Ru, Section::Home, None), "/ru");
        assert_eq!(page_path(Locale::Uz, Section::Services, None), "/uz/xizmatlar");
        assert_eq!(
            page_path(Locale::Ru, Section::Services, Some("crm")),
            "/ru/services/crm"
        );
        assert_eq!(
            page_path(Locale::Uz, Section::Blog, Some("maqola")),
            "/uz/blog/maqola"
        );
        // Home ignores slugs
        assert_eq!(page_path(Locale::Uz, Section::Home, Some("x")), "/uz");
    }

    #[test]
    fn test_segments_resolve_from_either_locale() {
        assert_eq!(Section::from_segment("services"), Some(Section::Services));
        assert_eq!(Section::from_segment("xizmatlar"), Some(Section::Services));
        assert_eq!(Section::from_segment("sharhlar"), Some(Section::Reviews));
        assert_eq!(Section::from_segment("biz-haqimizda"), Some(Section::About));
        assert_eq!(Section::from_segment("admin"), None);
        assert_eq!(Section::from_segment(""), None);
    }

    #[test]
    fn test_absolute_url() {
        assert_eq!(absolute_url("https://possible.uz/", "/ru"), "https://possible.uz/ru");
        assert_eq!(absolute_url("https://possible.uz", ""), "https://possible.uz");
        assert_eq!(
            absolute_url("https://possible.uz", "og.png"),
            "https://possible.uz/og.png"
        );
        assert_eq!(
            absolute_url("https://possible.uz", "https://cdn.example.com/a.png"),
            "https://cdn.example.com/a.png"
        );
        assert_eq!(
            absolute_url("https://possible.uz", "//cdn.example.com/a.png"),
            "https://cdn.example.com/a.png"
        );
    }
}
