use super::metadata::SeoContext;

/// `robots.txt` body. Points crawlers at the same sitemap the site serves.
pub fn robots_txt(ctx: &SeoContext) -> String {
    format!(
        "User-agent: *\nDisallow: /admin\nDisallow: /api/admin\nAllow: /\n\nSitemap: {}\n",
        ctx.absolute("/sitemap.xml")
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_robots_txt_points_to_sitemap() {
        let body = robots_txt(&SeoContext::new("https://possible.uz/"));
        assert!(body.starts_with("User-agent: *\n"));
        assert!(body.contains("Disallow: /admin\n"));
        assert!(body.ends_with("Sitemap: https://possible.uz/sitemap.xml\n"));
    }
}
