// Locale - the closed set of site languages and URL-segment normalization

use serde::{Deserialize, Serialize};
use std::fmt;

/// Supported site locale. Russian is the primary locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    Ru,
    Uz,
}

impl Locale {
    pub const ALL: [Locale; 2] = [Locale::Ru, Locale::Uz];
    pub const DEFAULT: Locale = Locale::Ru;

    /// Two-letter code, also used as the first URL path segment
    pub fn code(self) -> &'static str {
        match self {
            Locale::Ru => "ru",
            Locale::Uz => "uz",
        }
    }

    /// Open Graph locale tag
    pub fn og_locale(self) -> &'static str {
        match self {
            Locale::Ru => "ru_RU",
            Locale::Uz => "uz_UZ",
        }
    }

    /// Language tag for JSON-LD `inLanguage`
    pub fn language_tag(self) -> &'static str {
        match self {
            Locale::Ru => "ru-RU",
            Locale::Uz => "uz-UZ",
        }
    }

    /// Exact match against a supported code.
    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|locale| locale.code() == raw)
    }
}

impl Default for Locale {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Resolve a raw path segment to a supported locale.
///
/// Unknown input is never an error: anything that is not exactly a supported
/// code resolves to [`Locale::DEFAULT`].
pub fn normalize_locale(raw: &str) -> Locale {
    Locale::parse(raw).unwrap_or(Locale::DEFAULT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_supported_codes_pass_through() {
        assert_eq!(normalize_locale("ru"), Locale::Ru);
        assert_eq!(normalize_locale("uz"), Locale::Uz);
    }

    #[test]
    fn test_unknown_input_resolves_to_default() {
        for raw in ["", "en", "RU", "Uz", " ru", "ru ", "uz-UZ", "favicon.ico", "рус"] {
            assert_eq!(normalize_locale(raw), Locale::DEFAULT, "input {:?}", raw);
        }
    }

    #[test]
    fn test_codes_and_tags() {
        assert_eq!(Locale::Uz.to_string(), "uz");
        assert_eq!(Locale::Ru.og_locale(), "ru_RU");
        assert_eq!(Locale::Uz.language_tag(), "uz-UZ");
        assert_eq!(serde_json::to_string(&Locale::Uz).unwrap(), "\"uz\"");
    }
}
