use crate::constants::DEFAULT_PRIMARY_LOCALE;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A label carried in several locales (`{"fr": "Prénom", "en": "First name"}`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LocalizedString(IndexMap<String, String>);

impl LocalizedString {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a label with a single locale entry.
    pub fn single(locale: impl Into<String>, text: impl Into<String>) -> Self {
        Self::new().with(locale, text)
    }

    pub fn with(mut self, locale: impl Into<String>, text: impl Into<String>) -> Self {
        self.insert(locale, text);
        self
    }

    pub fn insert(&mut self, locale: impl Into<String>, text: impl Into<String>) {
        self.0.insert(locale.into(), text.into());
    }

    /// Text for exactly `locale`, if present and non-empty.
    pub fn exact(&self, locale: &str) -> Option<&str> {
        self.0
            .get(locale)
            .map(String::as_str)
            .filter(|text| !text.is_empty())
    }

    /// Text for `locale`, falling back to the default locale, then to the
    /// first non-empty entry, then to `""`.
    pub fn get(&self, locale: &str) -> &str {
        self.exact(locale)
            .or_else(|| self.exact(DEFAULT_PRIMARY_LOCALE))
            .or_else(|| self.0.values().map(String::as_str).find(|t| !t.is_empty()))
            .unwrap_or("")
    }

    pub fn is_empty(&self) -> bool {
        self.0.values().all(String::is_empty)
    }

    pub fn locales(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }
}

impl<L: Into<String>, T: Into<String>> FromIterator<(L, T)> for LocalizedString {
    fn from_iter<I: IntoIterator<Item = (L, T)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(locale, text)| (locale.into(), text.into()))
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_prefers_requested_locale() {
        let label = LocalizedString::single("fr", "Prénom").with("en", "First name");
        assert_eq!(label.get("en"), "First name");
        assert_eq!(label.get("fr"), "Prénom");
    }

    #[test]
    fn test_get_falls_back_to_french_then_any() {
        let label = LocalizedString::single("fr", "Nom").with("en", "");
        assert_eq!(label.get("en"), "Nom");
        assert_eq!(label.get("es"), "Nom");

        let english_only = LocalizedString::single("en", "Surname");
        assert_eq!(english_only.get("fr"), "Surname");

        assert_eq!(LocalizedString::new().get("fr"), "");
    }

    #[test]
    fn test_deserializes_from_plain_object() {
        let label: LocalizedString =
            serde_json::from_value(serde_json::json!({"fr": "Sexe", "en": "Gender"})).unwrap();
        assert_eq!(label.get("en"), "Gender");
        assert_eq!(label.locales().collect::<Vec<_>>(), vec!["fr", "en"]);
    }
}
