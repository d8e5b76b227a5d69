// Localized - per-locale optional values (the `_ru` / `_uz` column pairs)

use serde::{Deserialize, Serialize};

use super::locale::Locale;

/// One optional value per supported locale.
///
/// Each slot is independent: a missing Uzbek value says nothing about the
/// Russian one, and lookups never cross locales.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Localized<T> {
    pub ru: Option<T>,
    pub uz: Option<T>,
}

impl<T> Localized<T> {
    pub fn new(ru: Option<T>, uz: Option<T>) -> Self {
        Self { ru, uz }
    }

    pub fn get(&self, locale: Locale) -> Option<&T> {
        match locale {
            Locale::Ru => self.ru.as_ref(),
            Locale::Uz => self.uz.as_ref(),
        }
    }

    pub fn set(&mut self, locale: Locale, value: Option<T>) {
        match locale {
            Locale::Ru => self.ru = value,
            Locale::Uz => self.uz = value,
        }
    }

    pub fn map<U>(&self, mut f: impl FnMut(&T) -> U) -> Localized<U> {
        Localized {
            ru: self.ru.as_ref().map(&mut f),
            uz: self.uz.as_ref().map(&mut f),
        }
    }
}

impl Localized<String> {
    pub fn from_strs(ru: &str, uz: &str) -> Self {
        Self::new(Some(ru.to_string()), Some(uz.to_string()))
    }

    /// The value for `locale` if it has visible content.
    /// Blank strings count as absent.
    pub fn text(&self, locale: Locale) -> Option<&str> {
        self.get(locale)
            .map(String::as_str)
            .filter(|value| !value.trim().is_empty())
    }

    /// Raw value for storage binding
    pub fn raw(&self, locale: Locale) -> Option<&str> {
        self.get(locale).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_locales_are_independent() {
        let value = Localized::new(None, Some("salom".to_string()));
        assert_eq!(value.text(Locale::Ru), None);
        assert_eq!(value.text(Locale::Uz), Some("salom"));
    }

    #[test]
    fn test_blank_is_absent() {
        let value = Localized::from_strs("  ", "");
        assert_eq!(value.text(Locale::Ru), None);
        assert_eq!(value.text(Locale::Uz), None);
        assert_eq!(value.raw(Locale::Ru), Some("  "));
    }

    #[test]
    fn test_set_and_deserialize_partial() {
        let mut value: Localized<String> = serde_json::from_str(r#"{"uz":"a"}"#).unwrap();
        assert_eq!(value.get(Locale::Ru), None);
        value.set(Locale::Ru, Some("b".to_string()));
        assert_eq!(value.text(Locale::Ru), Some("b"));
    }
}
