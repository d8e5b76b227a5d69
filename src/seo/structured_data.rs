// JSON-LD emitters. Identifying fields (url, name/headline, description)
// are always read from a ResolvedMetadata, never recomputed here.

use serde_json::{json, Map, Value};

use super::fallbacks::{DEFAULT_LOGO, DEFAULT_SITE_NAME};
use super::metadata::{ResolvedMetadata, SeoContext};
use crate::core::{Locale, Section};
use crate::models::{Case, Post, Review, SiteSettings};

const SCHEMA_CONTEXT: &str = "https://schema.org";
const MAX_LISTED_REVIEWS: usize = 10;

/// Average rating across every review row, computed once per request.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AggregateRating {
    pub average: f64,
    pub count: usize,
}

impl AggregateRating {
    /// `None` when there are no reviews.
    pub fn from_reviews(reviews: &[Review]) -> Option<Self> {
        if reviews.is_empty() {
            return None;
        }
        let total: i64 = reviews.iter().map(|review| review.rating).sum();
        Some(Self {
            average: total as f64 / reviews.len() as f64,
            count: reviews.len(),
        })
    }

    /// Average rendered to one decimal place
    pub fn rating_value(&self) -> String {
        format!("{:.1}", self.average)
    }

    /// Title suffix for the reviews listing
    pub fn title_suffix(&self, locale: Locale) -> String {
        match locale {
            Locale::Ru => format!("| Средняя оценка {} из 5", self.rating_value()),
            Locale::Uz => format!("| O‘rtacha baho {} / 5", self.rating_value()),
        }
    }
}

/// Navigation label used in breadcrumbs
pub fn section_label(section: Section, locale: Locale) -> &'static str {
    match (section, locale) {
        (Section::Home, Locale::Ru) => "Главная",
        (Section::Home, Locale::Uz) => "Bosh sahifa",
        (Section::Services, Locale::Ru) => "Услуги",
        (Section::Services, Locale::Uz) => "Xizmatlar",
        (Section::Cases, Locale::Ru) => "Кейсы",
        (Section::Cases, Locale::Uz) => "Keyslar",
        (Section::Blog, Locale::Ru) => "Блог",
        (Section::Blog, Locale::Uz) => "Blog",
        (Section::Reviews, Locale::Ru) => "Отзывы",
        (Section::Reviews, Locale::Uz) => "Sharhlar",
        (Section::About, Locale::Ru) => "О нас",
        (Section::About, Locale::Uz) => "Biz haqimizda",
        (Section::Contact, Locale::Ru) => "Контакты",
        (Section::Contact, Locale::Uz) => "Aloqa",
    }
}

fn site_name(settings: Option<&SiteSettings>) -> &str {
    settings
        .and_then(SiteSettings::company_name)
        .unwrap_or(DEFAULT_SITE_NAME)
}

fn publisher(ctx: &SeoContext, settings: Option<&SiteSettings>) -> Value {
    json!({
        "@type": "Organization",
        "name": site_name(settings),
        "url": ctx.base_url(),
    })
}

pub fn organization(
    ctx: &SeoContext,
    locale: Locale,
    settings: Option<&SiteSettings>,
    description: Option<&str>,
    ratings: Option<(&AggregateRating, &[Review])>,
) -> Value {
    let logo = ctx.absolute(settings.and_then(SiteSettings::logo).unwrap_or(DEFAULT_LOGO));
    let same_as = settings.map(SiteSettings::social_links).unwrap_or_default();

    let mut org = Map::new();
    org.insert("@context".into(), json!(SCHEMA_CONTEXT));
    org.insert("@type".into(), json!("Organization"));
    org.insert("name".into(), json!(site_name(settings)));
    org.insert("url".into(), json!(ctx.base_url()));
    org.insert("logo".into(), json!(logo));
    org.insert("sameAs".into(), json!(same_as));
    if let Some(description) = description {
        org.insert("description".into(), json!(description));
    }
    org.insert(
        "address".into(),
        json!({
            "@type": "PostalAddress",
            "addressCountry": "UZ",
            "addressLocality": "Tashkent",
        }),
    );

    if let Some((aggregate, reviews)) = ratings {
        org.insert(
            "aggregateRating".into(),
            json!({
                "@type": "AggregateRating",
                "ratingValue": aggregate.rating_value(),
                "reviewCount": aggregate.count,
                "bestRating": 5,
                "worstRating": 1,
            }),
        );
        let listed: Vec<Value> = reviews
            .iter()
            .take(MAX_LISTED_REVIEWS)
            .map(|review| {
                json!({
                    "@type": "Review",
                    "author": { "@type": "Person", "name": review.client_name },
                    "reviewBody": review.text.text(locale),
                    "reviewRating": {
                        "@type": "Rating",
                        "ratingValue": review.rating,
                        "bestRating": 5,
                        "worstRating": 1,
                    },
                })
            })
            .collect();
        org.insert("review".into(), Value::Array(listed));
    }

    Value::Object(org)
}

pub fn website(ctx: &SeoContext, settings: Option<&SiteSettings>) -> Value {
    json!({
        "@context": SCHEMA_CONTEXT,
        "@type": "WebSite",
        "name": site_name(settings),
        "url": ctx.base_url(),
    })
}

/// Home page FAQ content
pub fn faq_entries(locale: Locale) -> [(&'static str, &'static str); 3] {
    match locale {
        Locale::Ru => [
            (
                "Сколько времени занимает автоматизация?",
                "Типовой запуск POS или CRM занимает от 2 до 6 недель, в зависимости от числа точек и интеграций.",
            ),
            (
                "Можно ли интегрировать уже используемые системы?",
                "Да, мы подключаем Poster, Billz, 1C, МойСклад и другие сервисы, сохраняя ваши текущие данные.",
            ),
            (
                "Вы работаете только в Узбекистане?",
                "Основной фокус — Узбекистан, но мы ведём проекты и в соседних странах, если есть доступ к нужной инфраструктуре.",
            ),
        ],
        Locale::Uz => [
            (
                "Avtomatlashtirish qancha vaqt oladi?",
                "Odatda POS yoki CRM ishga tushirish nuqtalar va integratsiyalar soniga qarab 2 dan 6 haftagacha davom etadi.",
            ),
            (
                "Hozir ishlatayotgan tizimlarni ulash mumkinmi?",
                "Ha, Poster, Billz, 1C, MoySklad va boshqa servislarni mavjud ma’lumotlaringizni saqlagan holda ulaymiz.",
            ),
            (
                "Faqat O‘zbekistonda ishlaysizmi?",
                "Asosiy fokus — O‘zbekiston, lekin zarur infratuzilma bo‘lsa, qo‘shni mamlakatlardagi loyihalar bilan ham ishlaymiz.",
            ),
        ],
    }
}

pub fn faq_page(locale: Locale) -> Value {
    let questions: Vec<Value> = faq_entries(locale)
        .iter()
        .map(|(question, answer)| {
            json!({
                "@type": "Question",
                "name": question,
                "acceptedAnswer": { "@type": "Answer", "text": answer },
            })
        })
        .collect();
    json!({
        "@context": SCHEMA_CONTEXT,
        "@type": "FAQPage",
        "mainEntity": questions,
    })
}

/// Blog listing with one BlogPosting per item. `items` pairs each post with
/// the metadata its own page resolves to.
pub fn blog(metadata: &ResolvedMetadata, items: &[(&Post, ResolvedMetadata)]) -> Value {
    let postings: Vec<Value> = items
        .iter()
        .map(|(post, item)| {
            json!({
                "@type": "BlogPosting",
                "headline": item.title,
                "name": item.title,
                "description": item.description,
                "url": item.canonical,
                "datePublished": post.published_at.map(|at| at.to_rfc3339()),
                "inLanguage": metadata.locale.language_tag(),
            })
        })
        .collect();
    json!({
        "@context": SCHEMA_CONTEXT,
        "@type": "Blog",
        "name": metadata.title,
        "description": metadata.description,
        "url": metadata.canonical,
        "inLanguage": metadata.locale.language_tag(),
        "blogPost": postings,
    })
}

pub fn blog_posting(
    ctx: &SeoContext,
    metadata: &ResolvedMetadata,
    post: &Post,
    settings: Option<&SiteSettings>,
) -> Value {
    json!({
        "@context": SCHEMA_CONTEXT,
        "@type": "BlogPosting",
        "headline": metadata.title,
        "description": metadata.description,
        "url": metadata.canonical,
        "mainEntityOfPage": metadata.canonical,
        "image": metadata.open_graph.image,
        "inLanguage": metadata.locale.language_tag(),
        "datePublished": post.published_at.map(|at| at.to_rfc3339()),
        "dateModified": post.updated_at.to_rfc3339(),
        "author": publisher(ctx, settings),
        "publisher": publisher(ctx, settings),
    })
}

pub fn service(
    ctx: &SeoContext,
    metadata: &ResolvedMetadata,
    settings: Option<&SiteSettings>,
) -> Value {
    let service_type = match metadata.locale {
        Locale::Ru => "Автоматизация бизнеса и IT-решения",
        Locale::Uz => "Biznes avtomatlashtirish va IT yechimlari",
    };
    json!({
        "@context": SCHEMA_CONTEXT,
        "@type": "Service",
        "name": metadata.title,
        "description": metadata.description,
        "url": metadata.canonical,
        "serviceType": service_type,
        "areaServed": { "@type": "Country", "name": "Uzbekistan" },
        "provider": publisher(ctx, settings),
    })
}

pub fn case_study(
    ctx: &SeoContext,
    metadata: &ResolvedMetadata,
    case: &Case,
    settings: Option<&SiteSettings>,
) -> Value {
    json!({
        "@context": SCHEMA_CONTEXT,
        "@type": "Article",
        "headline": metadata.title,
        "description": metadata.description,
        "url": metadata.canonical,
        "image": metadata.open_graph.image,
        "inLanguage": metadata.locale.language_tag(),
        "about": case.industry,
        "dateModified": case.updated_at.to_rfc3339(),
        "publisher": publisher(ctx, settings),
    })
}

/// ItemList for services and cases listings
pub fn item_list(metadata: &ResolvedMetadata, items: &[ResolvedMetadata]) -> Value {
    let elements: Vec<Value> = items
        .iter()
        .enumerate()
        .map(|(index, item)| {
            json!({
                "@type": "ListItem",
                "position": index + 1,
                "url": item.canonical,
                "name": item.title,
                "description": item.description,
            })
        })
        .collect();
    json!({
        "@context": SCHEMA_CONTEXT,
        "@type": "ItemList",
        "name": metadata.title,
        "description": metadata.description,
        "url": metadata.canonical,
        "itemListElement": elements,
    })
}

/// Home -> section -> (current page). The last crumb reuses the page's
/// own title and canonical.
pub fn breadcrumbs(ctx: &SeoContext, section: Section, metadata: &ResolvedMetadata) -> Value {
    let locale = metadata.locale;
    let mut trail = vec![(
        section_label(Section::Home, locale).to_string(),
        ctx.section_url(locale, Section::Home),
    )];
    if section != Section::Home {
        let section_url = ctx.section_url(locale, section);
        if section_url != metadata.canonical {
            trail.push((section_label(section, locale).to_string(), section_url));
        }
        trail.push((metadata.title.clone(), metadata.canonical.clone()));
    }

    let elements: Vec<Value> = trail
        .into_iter()
        .enumerate()
        .map(|(index, (name, url))| {
            json!({
                "@type": "ListItem",
                "position": index + 1,
                "name": name,
                "item": url,
            })
        })
        .collect();
    json!({
        "@context": SCHEMA_CONTEXT,
        "@type": "BreadcrumbList",
        "itemListElement": elements,
    })
}
