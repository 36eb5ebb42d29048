//! Display names for celebration keys.
//!
//! The engine only ever handles keys; names come from a [`Localize`]
//! implementation chosen by the caller.

use std::collections::HashMap;

/// Looks up the display name of a key in a locale.
pub trait Localize: Send + Sync {
    /// The name of `key` in `locale`, if known.
    fn localize(&self, key: &str, locale: &str) -> Option<String>;

    /// The name of `key` in `locale`, or the key itself.
    fn name(&self, key: &str, locale: &str) -> String {
        self.localize(key, locale).unwrap_or_else(|| key.to_owned())
    }
}

/// Returns every key unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct KeyFallback;

impl Localize for KeyFallback {
    fn localize(&self, key: &str, _locale: &str) -> Option<String> {
        Some(key.to_owned())
    }
}

/// Per-locale key → name tables.
///
/// A regional locale such as `"lt-LT"` falls back to its language
/// (`"lt"`), then to the catalog's default locale.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    default_locale: Option<String>,
    names: HashMap<String, HashMap<String, String>>,
}

impl Catalog {
    /// An empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Use `locale` when the requested one has no entry.
    pub fn with_default_locale(mut self, locale: impl Into<String>) -> Self {
        self.default_locale = Some(locale.into());
        self
    }

    /// Add one name.
    pub fn insert(&mut self, locale: impl Into<String>, key: impl Into<String>, name: impl Into<String>) {
        self.names
            .entry(locale.into())
            .or_default()
            .insert(key.into(), name.into());
    }

    /// Add several names of one locale.
    pub fn with_names<K, V>(mut self, locale: &str, names: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        let table = self.names.entry(locale.to_owned()).or_default();
        table.extend(names.into_iter().map(|(k, v)| (k.into(), v.into())));
        self
    }

    fn lookup(&self, key: &str, locale: &str) -> Option<String> {
        self.names.get(locale)?.get(key).cloned()
    }
}

impl Localize for Catalog {
    fn localize(&self, key: &str, locale: &str) -> Option<String> {
        let language = locale.split(['-', '_']).next().unwrap_or(locale);
        self.lookup(key, locale)
            .or_else(|| self.lookup(key, language))
            .or_else(|| self.default_locale.as_deref().and_then(|l| self.lookup(key, l)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn regional_locale_falls_back_to_language() {
        let catalog = Catalog::new()
            .with_default_locale("en")
            .with_names("en", [("christmas", "Christmas"), ("easter", "Easter Sunday")])
            .with_names("lt", [("christmas", "Kalėdos")]);
        assert_eq!(catalog.localize("christmas", "lt-LT").as_deref(), Some("Kalėdos"));
        assert_eq!(catalog.localize("easter", "lt").as_deref(), Some("Easter Sunday"));
        assert_eq!(catalog.localize("pentecostSunday", "lt"), None);
        assert_eq!(catalog.name("pentecostSunday", "lt"), "pentecostSunday");
    }

    #[test]
    fn key_fallback() {
        assert_eq!(KeyFallback.name("saintCasimir", "lt"), "saintCasimir");
    }
}
