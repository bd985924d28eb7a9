//! Language type: flexible, validated language representation.

use crate::i18n::{LanguageConfig, LanguageRegistry};
use anyhow::{bail, Result};

/// A validated language.
///
/// Only supported, enabled languages can be constructed; the constants and
/// `from_code` both resolve through the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Language {
    /// ISO 639-1 language code ("en" or "ur")
    code: &'static str,
}

impl Language {
    pub const ENGLISH: Language = Language { code: "en" };
    pub const URDU: Language = Language { code: "ur" };

    /// Create a Language from a language code string.
    ///
    /// # Returns
    /// * `Ok(Language)` if the code is valid and the language is enabled
    /// * `Err` if the code is not found or the language is disabled
    pub fn from_code(code: &str) -> Result<Language> {
        let registry = LanguageRegistry::get();

        match registry.get_by_code(code) {
            Some(config) if config.enabled => Ok(Language {
                code: config.code, // Use the static str from the registry
            }),
            Some(_) => bail!("Language '{}' is not enabled", code),
            None => bail!("Unknown language code: '{}'", code),
        }
    }

    /// The canonical (source) language the UI text is authored in.
    pub fn canonical() -> Language {
        let config = LanguageRegistry::get().canonical();
        Language { code: config.code }
    }

    /// The other supported language. The UI supports exactly two, so a
    /// second toggle restores the original.
    pub fn toggled(&self) -> Language {
        if *self == Language::URDU {
            Language::ENGLISH
        } else {
            Language::URDU
        }
    }

    /// Get the ISO 639-1 language code.
    pub fn code(&self) -> &'static str {
        self.code
    }

    /// Get the full language configuration from the registry.
    ///
    /// # Panics
    /// Panics if the code is not in the registry, which cannot happen for a
    /// properly constructed Language.
    pub fn config(&self) -> &'static LanguageConfig {
        LanguageRegistry::get()
            .get_by_code(self.code)
            .expect("Language code should always be valid")
    }

    /// English name of the language.
    pub fn name(&self) -> &'static str {
        self.config().name
    }

    /// Native name of the language.
    pub fn native_name(&self) -> &'static str {
        self.config().native_name
    }

    /// Check if this is the canonical language.
    pub fn is_canonical(&self) -> bool {
        self.config().is_canonical
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== Constant Tests ====================

    #[test]
    fn test_english_constant() {
        let english = Language::ENGLISH;
        assert_eq!(english.code(), "en");
        assert_eq!(english.name(), "English");
        assert!(english.is_canonical());
    }

    #[test]
    fn test_urdu_constant() {
        let urdu = Language::URDU;
        assert_eq!(urdu.code(), "ur");
        assert_eq!(urdu.name(), "Urdu");
        assert_eq!(urdu.native_name(), "Roman Urdu");
        assert!(!urdu.is_canonical());
    }

    // ==================== from_code Tests ====================

    #[test]
    fn test_from_code_english() {
        let language = Language::from_code("en").expect("Should succeed");
        assert_eq!(language, Language::ENGLISH);
    }

    #[test]
    fn test_from_code_urdu() {
        let language = Language::from_code("ur").expect("Should succeed");
        assert_eq!(language, Language::URDU);
    }

    #[test]
    fn test_from_code_invalid() {
        let result = Language::from_code("es");
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("Unknown"));
    }

    #[test]
    fn test_from_code_empty() {
        assert!(Language::from_code("").is_err());
    }

    // ==================== canonical Tests ====================

    #[test]
    fn test_canonical_returns_english() {
        let canonical = Language::canonical();
        assert_eq!(canonical, Language::ENGLISH);
        assert!(canonical.is_canonical());
    }

    // ==================== toggled Tests ====================

    #[test]
    fn test_toggled_flips_between_the_two_languages() {
        assert_eq!(Language::ENGLISH.toggled(), Language::URDU);
        assert_eq!(Language::URDU.toggled(), Language::ENGLISH);
    }

    #[test]
    fn test_toggled_twice_is_identity() {
        assert_eq!(Language::ENGLISH.toggled().toggled(), Language::ENGLISH);
        assert_eq!(Language::URDU.toggled().toggled(), Language::URDU);
    }

    // ==================== Trait Tests ====================

    #[test]
    fn test_language_equality() {
        let lang1 = Language::ENGLISH;
        let lang2 = Language::from_code("en").unwrap();
        assert_eq!(lang1, lang2);
        assert_ne!(Language::ENGLISH, Language::URDU);
    }

    #[test]
    fn test_language_copy() {
        let lang1 = Language::URDU;
        let lang2 = lang1; // Copy
        assert_eq!(lang1, lang2);
    }

    #[test]
    fn test_language_debug() {
        let debug = format!("{:?}", Language::URDU);
        assert!(debug.contains("ur"));
    }
}
