mod common;

use axum::http::StatusCode;

use common::{body_json, body_text, get, test_app, BASE};
use possible_site::{
    core::{Locale, Localized},
    infrastructure::ContentStore,
    models::{Case, Post, SeoFields, Service},
};

fn loc_entries(xml: &str) -> Vec<String> {
    xml.lines()
        .filter_map(|line| {
            line.trim()
                .strip_prefix("<loc>")
                .and_then(|rest| rest.strip_suffix("</loc>"))
                .map(str::to_string)
        })
        .collect()
}

#[tokio::test]
async fn test_sitemap_urls_match_page_canonicals() {
    let (app, store) = test_app(None).await;
    store
        .save_service(&Service {
            slug: Localized::from_strs("crm", "crm-tizimi"),
            ..Default::default()
        })
        .await
        .unwrap();
    store
        .save_case(&Case {
            slug: Localized::from_strs("kofeynya", "kofexona"),
            seo: SeoFields {
                sitemap_priority: Some("abc".to_string()),
                ..Default::default()
            },
            ..Default::default()
        })
        .await
        .unwrap();
    store
        .save_post(&Post {
            slug: Localized::from_strs("novost", "yangilik"),
            is_published: true,
            ..Default::default()
        })
        .await
        .unwrap();
    store
        .save_post(&Post {
            slug: Localized::from_strs("chernovik", "qoralama"),
            ..Default::default()
        })
        .await
        .unwrap();

    let response = get(&app, "/sitemap.xml").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(response.headers()["content-type"]
        .to_str()
        .unwrap()
        .starts_with("application/xml"));
    let xml = body_text(response).await;
    let urls = loc_entries(&xml);

    assert_eq!(urls[0], BASE);
    assert!(!xml.contains("chernovik"));
    assert!(xml.contains("<priority>0.6</priority>"));

    for (locale, path) in [
        (Locale::Ru, "/ru/services/crm"),
        (Locale::Uz, "/uz/xizmatlar/crm-tizimi"),
        (Locale::Ru, "/ru/cases/kofeynya"),
        (Locale::Uz, "/uz/cases/kofexona"),
        (Locale::Ru, "/ru/blog/novost"),
        (Locale::Uz, "/uz/blog/yangilik"),
    ] {
        let view = body_json(get(&app, path).await).await;
        let canonical = view["metadata"]["canonical"].as_str().unwrap().to_string();
        assert_eq!(canonical, format!("{}{}", BASE, path), "{:?}", locale);
        assert!(urls.contains(&canonical), "{} missing from sitemap", canonical);
    }
}

#[tokio::test]
async fn test_canonical_override_listed_once() {
    let (app, store) = test_app(None).await;
    store
        .save_service(&Service {
            slug: Localized::from_strs("pos", "pos-uz"),
            seo: SeoFields {
                canonical_url: Some("/ru/services/pos".to_string()),
                ..Default::default()
            },
            ..Default::default()
        })
        .await
        .unwrap();

    let xml = body_text(get(&app, "/sitemap.xml").await).await;
    let urls = loc_entries(&xml);
    let pos_urls: Vec<&String> = urls
        .iter()
        .filter(|url| url.ends_with("/pos") || url.ends_with("/pos-uz"))
        .collect();
    assert_eq!(pos_urls, [&format!("{}/ru/services/pos", BASE)]);

    let view = body_json(get(&app, "/uz/xizmatlar/pos-uz").await).await;
    assert_eq!(view["metadata"]["canonical"], format!("{}/ru/services/pos", BASE));
    assert_eq!(view["metadata"]["url"], format!("{}/uz/xizmatlar/pos-uz", BASE));
}
