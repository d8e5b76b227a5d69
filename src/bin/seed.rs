use chrono::Utc;
use tracing::info;

use possible_site::{
    config::Config,
    core::{Locale, Localized},
    infrastructure::{ContentStore, SqliteContentStore},
    models::{Case, Post, Review, SeoFields, Service, SiteSettings},
};

fn text(ru: &str, uz: &str) -> Localized<String> {
    Localized::from_strs(ru, uz)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let config = Config::from_env()?;
    info!("Seeding {}", config.database.url);

    let store = SqliteContentStore::connect(
        &config.database.url,
        config.database.max_connections,
        config.cache.capacity,
    )
    .await?;
    store.init().await?;

    store
        .save_site_settings(&SiteSettings {
            default_meta_title: text(
                "Possible Group — автоматизация бизнеса в Узбекистане",
                "Possible Group — O‘zbekistonda biznesni avtomatlashtirish",
            ),
            default_meta_desc: text(
                "Внедряем POS, CRM и складской учёт для ресторанов, магазинов и сервисных компаний.",
                "Restoran, do‘kon va xizmat ko‘rsatish kompaniyalari uchun POS, CRM va ombor hisobini joriy qilamiz.",
            ),
            default_og_image: Some("/og-default.png".to_string()),
            company_name: Some("Possible Group".to_string()),
            logo: Some("/logo.png".to_string()),
            telegram_url: Some("https://t.me/possible_uz".to_string()),
            instagram_url: Some("https://instagram.com/possible.uz".to_string()),
            ..Default::default()
        })
        .await?;
    info!("Site settings saved");

    if store.service_by_slug(Locale::Ru, "avtomatizaciya-restoranov").await?.is_none() {
        store
            .save_service(&Service {
                slug: text("avtomatizaciya-restoranov", "restoranlarni-avtomatlashtirish"),
                title: text("Автоматизация ресторанов", "Restoranlarni avtomatlashtirish"),
                short_description: text(
                    "POS-система, учёт продаж и склада для ресторанов и кафе.",
                    "Restoran va kafelar uchun POS tizimi, savdo va ombor hisobi.",
                ),
                content: text(
                    "Подбираем оборудование, настраиваем меню и обучаем персонал.",
                    "Uskunalarni tanlaymiz, menyuni sozlaymiz va xodimlarni o‘qitamiz.",
                ),
                ..Default::default()
            })
            .await?;
        info!("Sample service created");
    }

    if store.case_by_slug(Locale::Ru, "set-kofeen").await?.is_none() {
        store
            .save_case(&Case {
                slug: text("set-kofeen", "kofexonalar-tarmogi"),
                title: text("Сеть кофеен: единый учёт", "Kofexonalar tarmog‘i: yagona hisob"),
                description: text(
                    "Объединили пять точек в одну систему учёта.",
                    "Beshta nuqtani yagona hisob tizimiga birlashtirdik.",
                ),
                problem: text("Разрозненные кассы и ручной учёт.", "Tarqoq kassalar va qo‘lda hisob."),
                solution: text("Единая POS и облачный склад.", "Yagona POS va bulutli ombor."),
                result: text("Минус 30% времени на отчёты.", "Hisobotlarga 30% kam vaqt."),
                industry: Some("HoReCa".to_string()),
                seo: SeoFields {
                    sitemap_priority: Some("0.7".to_string()),
                    ..Default::default()
                },
                ..Default::default()
            })
            .await?;
        info!("Sample case created");
    }

    if store.post_by_slug(Locale::Ru, "kak-vybrat-pos").await?.is_none() {
        store
            .save_post(&Post {
                slug: text("kak-vybrat-pos", "pos-tanlash"),
                title: text("Как выбрать POS-систему", "POS tizimini qanday tanlash kerak"),
                excerpt: text(
                    "Пять вопросов, которые стоит задать до покупки.",
                    "Sotib olishdan oldin beriladigan beshta savol.",
                ),
                content: text("Полный текст статьи.", "Maqolaning to‘liq matni."),
                tags: Some("pos, автоматизация".to_string()),
                is_published: true,
                published_at: Some(Utc::now()),
                ..Default::default()
            })
            .await?;
        info!("Sample post created");
    }

    if store.list_reviews().await?.is_empty() {
        store
            .save_review(&Review {
                client_name: "Азиз Каримов".to_string(),
                company: Some("Coffee Lab".to_string()),
                text: text(
                    "Запустили учёт за две недели, всё работает.",
                    "Hisobni ikki haftada ishga tushirdik, hammasi ishlayapti.",
                ),
                rating: 5,
                ..Default::default()
            })
            .await?;
        info!("Sample review created");
    }

    info!("Seeding complete");
    Ok(())
}
