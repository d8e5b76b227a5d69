// SiteSettings - singleton row with site-wide SEO defaults and company profile

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::core::Localized;

/// Fixed primary key of the settings row
pub const SITE_SETTINGS_ID: i64 = 1;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteSettings {
    pub default_meta_title: Localized<String>,
    pub default_meta_desc: Localized<String>,
    pub default_og_image: Option<String>,
    pub company_name: Option<String>,
    pub logo: Option<String>,
    pub instagram_url: Option<String>,
    pub telegram_url: Option<String>,
    pub facebook_url: Option<String>,
    pub linkedin_url: Option<String>,
    pub whatsapp_url: Option<String>,
    pub updated_at: DateTime<Utc>,
}

impl SiteSettings {
    pub fn default_og_image(&self) -> Option<&str> {
        non_blank(self.default_og_image.as_deref())
    }

    pub fn company_name(&self) -> Option<&str> {
        non_blank(self.company_name.as_deref())
    }

    pub fn logo(&self) -> Option<&str> {
        non_blank(self.logo.as_deref())
    }

    /// Social profile links for Organization `sameAs`, in a stable order
    pub fn social_links(&self) -> Vec<&str> {
        [
            &self.instagram_url,
            &self.telegram_url,
            &self.facebook_url,
            &self.linkedin_url,
            &self.whatsapp_url,
        ]
        .into_iter()
        .filter_map(|url| non_blank(url.as_deref()))
        .collect()
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}
