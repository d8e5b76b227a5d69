// SEO layer - metadata resolution, sitemap, robots.txt and JSON-LD
pub mod fallbacks;
pub mod keywords;
pub mod metadata;
pub mod robots;
pub mod sitemap;
pub mod structured_data;

pub use metadata::{OpenGraph, Page, ResolvedMetadata, Robots, SeoContext, TwitterCard};
pub use sitemap::{render_sitemap_xml, ChangeFreq, SitemapEntry, SitemapSources};
pub use structured_data::AggregateRating;
