//! Localized display strings for settings rows.
//!
//! Rows refer to text by numeric id. Tables are grouped per locale and
//! lookups fall back to English when a locale lacks an entry.

use std::borrow::Cow;
use std::collections::HashMap;

use thiserror::Error;

/// Locale used when the requested one has no entry
pub const FALLBACK_LOCALE: &str = "en";

#[derive(Error, Debug)]
pub enum StringsError {
    #[error("Failed to parse string table: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid string id '{id}' in locale '{locale}'")]
    InvalidId { locale: String, id: String },

    #[error("String id 0 is reserved (locale '{0}')")]
    ReservedId(String),
}

/// String ids mapped to text, per locale
#[derive(Debug, Clone, Default)]
pub struct StringTable {
    locales: HashMap<String, HashMap<u32, String>>,
}

impl StringTable {
    /// Parse a table of the form `[locale]` followed by `id = "text"` lines
    pub fn from_toml(content: &str) -> Result<Self, StringsError> {
        let raw: HashMap<String, HashMap<String, String>> = toml::from_str(content)?;

        let mut locales = HashMap::with_capacity(raw.len());
        for (locale, entries) in raw {
            let mut strings = HashMap::with_capacity(entries.len());
            for (key, text) in entries {
                let id: u32 = key.parse().map_err(|_| StringsError::InvalidId {
                    locale: locale.clone(),
                    id: key.clone(),
                })?;
                if id == 0 {
                    return Err(StringsError::ReservedId(locale));
                }
                strings.insert(id, text);
            }
            locales.insert(locale, strings);
        }

        Ok(Self { locales })
    }

    /// Look up text for an id, falling back to English. Id 0 never resolves.
    pub fn resolve(&self, locale: &str, id: u32) -> Option<&str> {
        if id == 0 {
            return None;
        }

        self.lookup(locale, id)
            .or_else(|| self.lookup(FALLBACK_LOCALE, id))
    }

    /// Text for an id, or a `#<id>` placeholder when it is missing
    pub fn text(&self, locale: &str, id: u32) -> Cow<'_, str> {
        match self.resolve(locale, id) {
            Some(text) => Cow::Borrowed(text),
            None => {
                tracing::debug!("No string for id {} in locale {}", id, locale);
                Cow::Owned(format!("#{}", id))
            }
        }
    }

    pub fn has_locale(&self, locale: &str) -> bool {
        self.locales.contains_key(locale)
    }

    /// Known locales, sorted
    pub fn locales(&self) -> Vec<&str> {
        let mut locales: Vec<&str> = self.locales.keys().map(String::as_str).collect();
        locales.sort_unstable();
        locales
    }

    fn lookup(&self, locale: &str, id: u32) -> Option<&str> {
        self.locales
            .get(locale)
            .and_then(|strings| strings.get(&id))
            .map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"
        [en]
        1 = "Settings"
        2 = "Audio"

        [de]
        1 = "Einstellungen"
    "#;

    #[test]
    fn test_resolve_with_fallback() {
        let table = StringTable::from_toml(SAMPLE).unwrap();

        assert_eq!(table.resolve("en", 1), Some("Settings"));
        assert_eq!(table.resolve("de", 1), Some("Einstellungen"));
        assert_eq!(table.resolve("de", 2), Some("Audio"));
        assert_eq!(table.resolve("fr", 2), Some("Audio"));
        assert_eq!(table.resolve("en", 3), None);
    }

    #[test]
    fn test_zero_id_means_no_text() {
        let table = StringTable::from_toml(SAMPLE).unwrap();
        assert_eq!(table.resolve("en", 0), None);
    }

    #[test]
    fn test_text_placeholder() {
        let table = StringTable::from_toml(SAMPLE).unwrap();
        assert_eq!(table.text("en", 2), "Audio");
        assert_eq!(table.text("en", 42), "#42");
    }

    #[test]
    fn test_locales_sorted() {
        let table = StringTable::from_toml(SAMPLE).unwrap();
        assert_eq!(table.locales(), vec!["de", "en"]);
        assert!(table.has_locale("de"));
        assert!(!table.has_locale("fr"));
    }

    #[test]
    fn test_invalid_id_rejected() {
        let result = StringTable::from_toml("[en]\ntitle = \"Settings\"\n");
        assert!(matches!(result, Err(StringsError::InvalidId { .. })));

        let result = StringTable::from_toml("[en]\n0 = \"Nothing\"\n");
        assert!(matches!(result, Err(StringsError::ReservedId(_))));
    }
}
