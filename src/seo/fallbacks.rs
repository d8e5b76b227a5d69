// Hardcoded last-resort SEO texts. Resolution never returns empty metadata.

use crate::core::{Locale, Section};
use crate::models::EntityKind;

pub const DEFAULT_SITE_NAME: &str = "Possible Group";
pub const DEFAULT_OG_IMAGE: &str = "/og-default.png";
pub const DEFAULT_LOGO: &str = "/logo.png";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FallbackText {
    pub title: &'static str,
    pub description: &'static str,
}

/// Terminal tier for static and listing pages
pub fn page_fallback(section: Section, locale: Locale) -> FallbackText {
    let (title, description) = match (section, locale) {
        (Section::Home, Locale::Ru) => (
            "Автоматизация бизнеса в Узбекистане — Possible Group",
            "Possible Group автоматизирует бизнес в Узбекистане: POS, CRM, ERP, склад, доставка, лояльность и интеграции — реальные IT-решения под ритейл и общепит.",
        ),
        (Section::Home, Locale::Uz) => (
            "O‘zbekistonda biznes avtomatlashtirish — Possible Group",
            "Possible Group O‘zbekistonda biznesni avtomatlashtiradi: POS, CRM, ERP, ombor, yetkazib berish, sodiqlik va integratsiyalar — retail va umumiy ovqatlanish uchun amaliy IT yechimlar.",
        ),
        (Section::Services, Locale::Ru) => (
            "Услуги Possible Group — автоматизация бизнеса в Узбекистане",
            "Услуги Possible Group по автоматизации бизнеса: разработка POS-систем, CRM, ERP, интеграции с Poster, Billz, 1C, МойСклад, а также кастомные IT-решения для ритейла и общепита в Узбекистане.",
        ),
        (Section::Services, Locale::Uz) => (
            "Possible Group xizmatlari — O‘zbekistonda biznes avtomatlashtirish",
            "Possible Group xizmatlari: POS tizimlar, CRM, ERP, Poster, Billz, 1C, MoyiSklad integratsiyasi va retail hamda umumiy ovqatlanish uchun maxsus IT yechimlar.",
        ),
        (Section::Cases, Locale::Ru) => (
            "Кейсы Possible Group — автоматизация реального бизнеса",
            "Реальные кейсы Possible Group по автоматизации ритейла, общепита и сервисов: POS, CRM, ERP, интеграции и кастомные IT-системы.",
        ),
        (Section::Cases, Locale::Uz) => (
            "Possible Group keyslari — real biznes avtomatlashtirish",
            "Possible Group tomonidan retail, umumiy ovqatlanish va xizmatlar uchun avtomatlashtirish bo‘yicha real keyslari: POS, CRM, ERP, integratsiyalar va maxsus IT tizimlar.",
        ),
        (Section::Blog, Locale::Ru) => (
            "Блог Possible Group — автоматизация, CRM, ERP, интеграции и рост бизнеса",
            "Статьи Possible Group про автоматизацию бизнеса, CRM/ERP, интеграции (Poster, Billz, 1C и др.), реальные кейсы клиентов и управляемый рост компаний в Узбекистане.",
        ),
        (Section::Blog, Locale::Uz) => (
            "Possible Group blogi — avtomatlashtirish, CRM, ERP, integratsiyalar va biznes o‘sishi",
            "Possible Group blogi: biznesni avtomatlashtirish, CRM/ERP, Poster, Billz, 1C integratsiyalari, mijozlar keyslari va O‘zbekiston sharoitida boshqariladigan o‘sish haqida maqolalar.",
        ),
        (Section::Reviews, Locale::Ru) => (
            "Отзывы клиентов — Possible Group",
            "Читайте реальные отзывы владельцев бизнеса, автоматизировавших свои процессы с Possible Group. Результаты, опыт и впечатления клиентов из Узбекистана.",
        ),
        (Section::Reviews, Locale::Uz) => (
            "Mijozlar fikrlari — Possible Group",
            "Possible Group bilan jarayonlarini avtomatlashtirgan biznes egalari bergan real sharhlar, natijalar va taassurotlar.",
        ),
        (Section::About, Locale::Ru) => (
            "О Possible Group — автоматизация бизнеса в Узбекистане",
            "Possible Group — продуктовая команда из Узбекистана. Автоматизируем розницу, общепит, дистрибуцию и онлайн-бизнес: POS, CRM, ERP, интеграции и аналитика в одной экосистеме.",
        ),
        (Section::About, Locale::Uz) => (
            "Possible Group haqida — O‘zbekistonda biznes avtomatlashtirish",
            "Possible Group — O‘zbekistondagi mahsulot jamoasi. Retail, umumiy ovqatlanish, distributsiya va onlayn biznes uchun POS, CRM, ERP, integratsiyalar va analitikani yagona ekotizimga yig‘amiz.",
        ),
        (Section::Contact, Locale::Ru) => (
            "Контакты Possible Group — автоматизация бизнеса",
            "Свяжитесь с Possible Group: консультация по автоматизации бизнеса в Узбекистане, POS, CRM, ERP, интеграции и SaaS-решения.",
        ),
        (Section::Contact, Locale::Uz) => (
            "Possible Group bilan aloqa — biznes avtomatlashtirish",
            "Possible Group bilan O‘zbekistonda biznesni avtomatlashtirish uchun aloqa sahifasi: POS, CRM, ERP, integratsiyalar va SaaS yechimlar.",
        ),
    };
    FallbackText { title, description }
}

/// Terminal tier for entity detail pages
pub fn entity_fallback(kind: EntityKind, locale: Locale) -> FallbackText {
    let (title, description) = match (kind, locale) {
        (EntityKind::Service, Locale::Ru) => (
            "Автоматизация бизнеса и IT-решения — Possible Group",
            "Автоматизация ритейла, общепита и сервисных бизнесов в Узбекистане: CRM, ERP, POS, интеграции и кастомные IT-решения.",
        ),
        (EntityKind::Service, Locale::Uz) => (
            "Biznes avtomatlashtirish va IT yechimlari — Possible Group",
            "O‘zbekistonda retail, umumiy ovqatlanish va servis bizneslari uchun avtomatlashtirish: CRM, ERP, POS va maxsus IT yechimlar.",
        ),
        (EntityKind::Case, Locale::Ru) => (
            "Кейс | Possible Group",
            "Кейс по автоматизации бизнеса от Possible Group.",
        ),
        (EntityKind::Case, Locale::Uz) => (
            "Keys | Possible Group",
            "Possible Group biznes avtomatlashtirish keysi.",
        ),
        (EntityKind::Post, Locale::Ru) => (
            "Статья | Блог Possible Group",
            "Статья блога Possible Group об автоматизации бизнеса.",
        ),
        (EntityKind::Post, Locale::Uz) => (
            "Maqola | Possible Group blogi",
            "Possible Group blogidagi biznes avtomatlashtirish haqidagi maqola.",
        ),
        (EntityKind::Review, locale) => {
            let text = page_fallback(Section::Reviews, locale);
            (text.title, text.description)
        }
    };
    FallbackText { title, description }
}

/// Title used when a requested entity does not exist
pub fn not_found_title(locale: Locale) -> &'static str {
    match locale {
        Locale::Ru => "Страница не найдена | Possible Group",
        Locale::Uz => "Sahifa topilmadi | Possible Group",
    }
}

/// Fixed keyword lists for listing and static pages.
/// Sections without a list emit no keywords.
pub fn listing_keywords(section: Section, locale: Locale) -> Option<&'static [&'static str]> {
    let keywords: &'static [&'static str] = match (section, locale) {
        (Section::Home, Locale::Ru) => &[
            "автоматизация бизнеса",
            "POS система Узбекистан",
            "CRM для ритейла",
            "ERP решения Узбекистан",
            "интеграция Poster Billz 1C",
            "автоматизация розничной сети",
            "автоматизация ресторана",
            "Possible Group",
        ],
        (Section::Home, Locale::Uz) => &[
            "biznes avtomatlashtirish",
            "POS tizim O‘zbekiston",
            "CRM retail uchun",
            "ERP yechimlar UZ",
            "Poster Billz 1C integratsiyasi",
            "Possible Group",
        ],
        (Section::Services, Locale::Ru) => &[
            "услуги Possible Group",
            "автоматизация бизнеса Узбекистан",
            "разработка POS системы",
            "CRM для ритейла Узбекистан",
            "ERP внедрение Ташкент",
            "интеграция Poster Billz 1C",
            "автоматизация ресторана",
            "автоматизация розничной сети",
        ],
        (Section::Services, Locale::Uz) => &[
            "Possible Group xizmatlari",
            "biznes avtomatlashtirish O‘zbekiston",
            "POS tizim yaratish",
            "retail uchun CRM",
            "ERP joriy etish Toshkent",
            "Poster Billz 1C integratsiyasi",
            "restoran avtomatlashtirish",
            "do‘konlar tarmog‘ini avtomatlashtirish",
        ],
        (Section::Cases, Locale::Ru) => &[
            "кейсы автоматизации",
            "кейсы Possible Group",
            "автоматизация бизнеса Узбекистан",
            "автоматизация ритейла",
            "автоматизация общепита",
            "POS система кейс",
            "CRM внедрение кейс",
            "ERP кейс Узбекистан",
            "интеграция Poster",
            "интеграция Billz",
            "интеграция 1C",
            "кейсы цифровизации",
            "IT-решения для бизнеса",
        ],
        (Section::Cases, Locale::Uz) => &[
            "biznes avtomatlashtirish keyslari",
            "Possible Group case",
            "O‘zbekiston biznes avtomatlashtirish",
            "retail avtomatlashtirish",
            "umumiy ovqatlanish avtomatlashtirish",
            "POS tizim keys",
            "CRM joriy etish keys",
            "ERP keys O‘zbekiston",
            "Poster integratsiya keys",
            "Billz integratsiya",
            "1C integratsiya",
            "raqamlashtirish keyslari",
            "biznes uchun IT yechimlar",
        ],
        (Section::Blog, Locale::Ru) => &[
            "Possible Group блог",
            "блог Possible Group",
            "автоматизация бизнеса Узбекистан",
            "CRM Узбекистан",
            "ERP Узбекистан",
            "POS система Узбекистан",
            "интеграция Poster",
            "интеграция Billz",
            "интеграция 1C",
            "кейсы автоматизации",
            "кейсы Possible Group",
            "рост выручки",
            "оптимизация процессов",
        ],
        (Section::Blog, Locale::Uz) => &[
            "Possible Group blog",
            "Possible Group blogi",
            "biznesni avtomatlashtirish",
            "CRM O‘zbekiston",
            "ERP O‘zbekiston",
            "POS tizimlari",
            "Poster integratsiyasi",
            "Billz integratsiyasi",
            "1C integratsiyasi",
            "avtomatlashtirish keyslari",
            "Possible Group keyslari",
            "tushumni oshirish",
            "jarayonlarni optimallashtirish",
        ],
        (Section::Reviews, Locale::Ru) => &[
            "отзывы",
            "отзывы клиентов",
            "отзывы о Possible Group",
            "рейтинг Possible Group",
            "автоматизация бизнеса",
            "CRM Узбекистан",
            "ERP Узбекистан",
        ],
        (Section::Reviews, Locale::Uz) => &[
            "sharhlar",
            "mijozlar sharhlari",
            "Possible Group sharhlari",
            "kompaniya reytingi",
            "biznes avtomatlashtirish",
            "CRM O‘zbekiston",
            "ERP O‘zbekiston",
        ],
        (Section::About, Locale::Ru) => &[
            "автоматизация бизнеса",
            "автоматизация Узбекистан",
            "POS система Узбекистан",
            "CRM для ритейла",
            "ERP для общепита",
            "Possible Group",
            "IT компания Ташкент",
        ],
        (Section::About, Locale::Uz) => &[
            "biznes avtomatlashtirish",
            "POS tizim O‘zbekiston",
            "CRM tizim retail",
            "ERP umumiy ovqatlanish",
            "Possible Group",
            "IT kompaniya Toshkent",
        ],
        (Section::Contact, _) => return None,
    };
    Some(keywords)
}
