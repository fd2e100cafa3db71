//! Locales the site is published in.
//!
//! Built lazily on first access and immutable afterwards.

use std::sync::OnceLock;

/// Static metadata for one published locale.
#[derive(Debug, Clone)]
pub struct LanguageConfig {
    /// ISO 639-1 language code (e.g., "en", "es")
    pub code: &'static str,

    /// English name of the language (e.g., "English", "Spanish")
    pub name: &'static str,

    /// Native name of the language (e.g., "English", "Español")
    pub native_name: &'static str,

    /// Open Graph locale (e.g., "en_US")
    pub og_locale: &'static str,

    /// Whether this is the primary (default) language; exactly one must be true
    pub is_primary: bool,
}

pub struct LanguageRegistry {
    languages: Vec<LanguageConfig>,
}

static REGISTRY: OnceLock<LanguageRegistry> = OnceLock::new();

impl LanguageRegistry {
    /// Process-wide registry, built on first call.
    pub fn get() -> &'static LanguageRegistry {
        REGISTRY.get_or_init(|| LanguageRegistry {
            languages: default_languages(),
        })
    }

    /// Look up a locale by its two-letter code. Matching is exact.
    pub fn get_by_code(&self, code: &str) -> Option<&LanguageConfig> {
        self.languages.iter().find(|lang| lang.code == code)
    }

    /// Every locale, in publication order.
    pub fn list_all(&self) -> Vec<&LanguageConfig> {
        self.languages.iter().collect()
    }

    /// The locale served when no preference is stored.
    ///
    /// Panics unless exactly one entry is marked primary.
    pub fn primary(&self) -> &LanguageConfig {
        let primary_langs: Vec<_> = self
            .languages
            .iter()
            .filter(|lang| lang.is_primary)
            .collect();

        match primary_langs.len() {
            0 => panic!("No primary language found in registry"),
            1 => primary_langs[0],
            _ => panic!("Multiple primary languages found in registry"),
        }
    }

    /// Check if a language code is supported.
    pub fn is_supported(&self, code: &str) -> bool {
        self.get_by_code(code).is_some()
    }
}

/// Default language configurations: English (primary) and Spanish.
fn default_languages() -> Vec<LanguageConfig> {
    vec![
        LanguageConfig {
            code: "en",
            name: "English",
            native_name: "English",
            og_locale: "en_US",
            is_primary: true,
        },
        LanguageConfig {
            code: "es",
            name: "Spanish",
            native_name: "Español",
            og_locale: "es_ES",
            is_primary: false,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_get_returns_singleton() {
        let registry1 = LanguageRegistry::get();
        let registry2 = LanguageRegistry::get();

        assert!(std::ptr::eq(registry1, registry2));
    }

    #[test]
    fn test_get_by_code_english() {
        let config = LanguageRegistry::get()
            .get_by_code("en")
            .expect("English should be registered");

        assert_eq!(config.name, "English");
        assert_eq!(config.og_locale, "en_US");
        assert!(config.is_primary);
    }

    #[test]
    fn test_get_by_code_spanish() {
        let config = LanguageRegistry::get()
            .get_by_code("es")
            .expect("Spanish should be registered");

        assert_eq!(config.native_name, "Español");
        assert_eq!(config.og_locale, "es_ES");
        assert!(!config.is_primary);
    }

    #[test]
    fn test_get_by_code_is_case_sensitive() {
        let registry = LanguageRegistry::get();
        assert!(registry.get_by_code("EN").is_none());
        assert!(registry.get_by_code("fr").is_none());
        assert!(registry.get_by_code("").is_none());
    }

    #[test]
    fn test_list_all_order() {
        let codes: Vec<_> = LanguageRegistry::get()
            .list_all()
            .iter()
            .map(|lang| lang.code)
            .collect();
        assert_eq!(codes, vec!["en", "es"]);
    }

    #[test]
    fn test_primary_is_english() {
        assert_eq!(LanguageRegistry::get().primary().code, "en");
    }

    #[test]
    fn test_is_supported() {
        let registry = LanguageRegistry::get();
        assert!(registry.is_supported("en"));
        assert!(registry.is_supported("es"));
        assert!(!registry.is_supported("pt"));
    }
}
