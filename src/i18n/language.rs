//! Language type: the closed set of locales the site is published in.

use crate::i18n::{LanguageConfig, LanguageRegistry};
use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A supported language.
///
/// The set is closed: every value maps to an entry in the registry, so
/// lookups on a `Language` never fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Language {
    #[serde(rename = "en")]
    English,
    #[serde(rename = "es")]
    Spanish,
}

impl Language {
    /// Every supported language, in registry order.
    pub const ALL: [Language; 2] = [Language::English, Language::Spanish];

    /// Create a Language from a language code string.
    ///
    /// # Returns
    /// * `Ok(Language)` if the code is registered
    /// * `Err` if the code is unknown (codes are case-sensitive)
    pub fn from_code(code: &str) -> Result<Language> {
        if !LanguageRegistry::get().is_supported(code) {
            bail!("Unknown language code: '{}'", code);
        }

        match Self::ALL.into_iter().find(|lang| lang.code() == code) {
            Some(language) => Ok(language),
            None => bail!("Language '{}' is registered but has no variant", code),
        }
    }

    /// Get the primary language (the default when nothing is persisted).
    pub fn primary() -> Language {
        let code = LanguageRegistry::get().primary().code;
        Self::ALL
            .into_iter()
            .find(|lang| lang.code() == code)
            .unwrap_or(Language::English)
    }

    /// Get the ISO 639-1 language code.
    pub fn code(self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Spanish => "es",
        }
    }

    /// Get the full language configuration from the registry.
    ///
    /// # Panics
    /// Panics if the code is missing from the registry, which means the enum
    /// and the registry have drifted apart.
    pub fn config(self) -> &'static LanguageConfig {
        LanguageRegistry::get()
            .get_by_code(self.code())
            .expect("Language code should always be registered")
    }

    /// The language name in English (e.g., "Spanish").
    pub fn name(self) -> &'static str {
        self.config().name
    }

    /// The language name in its own language (e.g., "Español").
    pub fn native_name(self) -> &'static str {
        self.config().native_name
    }

    /// Open Graph locale (e.g., "es_ES").
    pub fn og_locale(self) -> &'static str {
        self.config().og_locale
    }

    pub fn is_primary(self) -> bool {
        self.config().is_primary
    }

    /// The language the toggle switches to.
    pub fn other(self) -> Language {
        match self {
            Language::English => Language::Spanish,
            Language::Spanish => Language::English,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        Language::from_code(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== from_code Tests ====================

    #[test]
    fn test_from_code_english() {
        let language = Language::from_code("en").expect("Should succeed");
        assert_eq!(language, Language::English);
        assert_eq!(language.name(), "English");
    }

    #[test]
    fn test_from_code_spanish() {
        let language = Language::from_code("es").expect("Should succeed");
        assert_eq!(language, Language::Spanish);
        assert_eq!(language.native_name(), "Español");
    }

    #[test]
    fn test_from_code_invalid() {
        let result = Language::from_code("fr");
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("Unknown"));
    }

    #[test]
    fn test_from_code_empty() {
        assert!(Language::from_code("").is_err());
    }

    #[test]
    fn test_from_code_rejects_uppercase() {
        assert!(Language::from_code("ES").is_err());
    }

    #[test]
    fn test_parse_via_from_str() {
        let language: Language = "es".parse().unwrap();
        assert_eq!(language, Language::Spanish);
    }

    // ==================== Metadata Tests ====================

    #[test]
    fn test_primary_is_english() {
        assert_eq!(Language::primary(), Language::English);
        assert!(Language::English.is_primary());
        assert!(!Language::Spanish.is_primary());
    }

    #[test]
    fn test_all_round_trips_through_codes() {
        for language in Language::ALL {
            assert_eq!(Language::from_code(language.code()).unwrap(), language);
        }
    }

    #[test]
    fn test_og_locale() {
        assert_eq!(Language::English.og_locale(), "en_US");
        assert_eq!(Language::Spanish.og_locale(), "es_ES");
    }

    #[test]
    fn test_other_toggles() {
        assert_eq!(Language::English.other(), Language::Spanish);
        assert_eq!(Language::Spanish.other(), Language::English);
    }

    #[test]
    fn test_display_is_code() {
        assert_eq!(Language::Spanish.to_string(), "es");
    }

    #[test]
    fn test_serializes_as_code() {
        let json = serde_json::to_string(&Language::Spanish).unwrap();
        assert_eq!(json, "\"es\"");
        let parsed: Language = serde_json::from_str("\"en\"").unwrap();
        assert_eq!(parsed, Language::English);
    }
}
