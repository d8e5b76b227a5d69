// Core types shared by routing, SEO resolution and storage
pub mod locale;
pub mod localized;
pub mod section;

pub use locale::{normalize_locale, Locale};
pub use localized::Localized;
pub use section::{absolute_url, page_path, Section};
