// Possible site - bilingual marketing site with SEO metadata resolution

// Core types: locales, localized values and site sections
pub mod core;

// Content and settings models
pub mod models;

// Metadata, sitemap, robots.txt and structured data
pub mod seo;

// Storage, caching and middleware
pub mod infrastructure;

// Page loading and admin writes
pub mod services;

// HTTP surface
pub mod app_state;
pub mod site_interface;

// Common utilities
pub mod config;
pub mod error;

// Re-exports for convenience
pub use error::{AppError, AppResult};
