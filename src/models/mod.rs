// Domain models - persisted content and settings snapshots
pub mod content;
pub mod seo;
pub mod settings;

pub use content::{Case, Category, Post, Review, Service};
pub use seo::{EntityKind, SeoEntity, SeoFields};
pub use settings::{SiteSettings, SITE_SETTINGS_ID};
