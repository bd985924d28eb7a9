//! Dictionary quality validation.
//!
//! The translation store silently falls back to the raw key for a missing
//! entry, so a key present in one language but not the other would ship as
//! untranslated text without anyone noticing. This validator makes key
//! parity checkable: the test suite asserts the shipped dictionaries
//! validate clean.

use crate::i18n::strings::{ENGLISH, ROMAN_URDU};
use regex::Regex;
use std::collections::BTreeSet;
use std::sync::OnceLock;

/// Validation report containing errors and warnings about the dictionaries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    /// Parity violations and duplicate keys
    pub errors: Vec<String>,

    /// Non-critical issues such as placeholder mismatches
    pub warnings: Vec<String>,
}

impl ValidationReport {
    pub fn new() -> Self {
        Self {
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    pub fn is_clean(&self) -> bool {
        !self.has_errors() && !self.has_warnings()
    }
}

impl Default for ValidationReport {
    fn default() -> Self {
        Self::new()
    }
}

/// Validator for the shipped translation dictionaries.
pub struct DictionaryValidator;

static PLACEHOLDER_REGEX: OnceLock<Regex> = OnceLock::new();

impl DictionaryValidator {
    /// Validate the English and Roman-Urdu dictionaries against each other.
    ///
    /// Errors:
    /// - a key defined in one dictionary but not the other
    /// - a key defined twice within the same dictionary
    ///
    /// Warnings:
    /// - an empty value
    /// - `{placeholder}` sets that differ between the two values of a key
    pub fn validate() -> ValidationReport {
        Self::validate_pair(ENGLISH, ROMAN_URDU)
    }

    fn validate_pair(
        english: &[(&str, &str)],
        urdu: &[(&str, &str)],
    ) -> ValidationReport {
        let mut report = ValidationReport::new();

        Self::check_duplicates("en", english, &mut report);
        Self::check_duplicates("ur", urdu, &mut report);

        let english_keys: BTreeSet<&str> = english.iter().map(|(k, _)| *k).collect();
        let urdu_keys: BTreeSet<&str> = urdu.iter().map(|(k, _)| *k).collect();

        for key in english_keys.difference(&urdu_keys) {
            report
                .errors
                .push(format!("Key '{}' is defined for 'en' but not 'ur'", key));
        }
        for key in urdu_keys.difference(&english_keys) {
            report
                .errors
                .push(format!("Key '{}' is defined for 'ur' but not 'en'", key));
        }

        for (key, value) in english.iter().chain(urdu.iter()) {
            if value.is_empty() {
                report.warnings.push(format!("Key '{}' has an empty value", key));
            }
        }

        // Placeholder parity between the two values of each shared key
        for (key, english_value) in english {
            if let Some((_, urdu_value)) = urdu.iter().find(|(k, _)| k == key) {
                let english_placeholders = Self::extract_placeholders(english_value);
                let urdu_placeholders = Self::extract_placeholders(urdu_value);
                if english_placeholders != urdu_placeholders {
                    report.warnings.push(format!(
                        "Placeholder mismatch for key '{}': en has {:?}, ur has {:?}",
                        key, english_placeholders, urdu_placeholders
                    ));
                }
            }
        }

        report
    }

    fn check_duplicates(code: &str, dictionary: &[(&str, &str)], report: &mut ValidationReport) {
        let mut seen = BTreeSet::new();
        for (key, _) in dictionary {
            if !seen.insert(*key) {
                report
                    .errors
                    .push(format!("Key '{}' is defined twice for '{}'", key, code));
            }
        }
    }

    /// Extract `{placeholder}` names from a value.
    fn extract_placeholders(text: &str) -> BTreeSet<String> {
        let regex =
            PLACEHOLDER_REGEX.get_or_init(|| Regex::new(r"\{([a-zA-Z_]+)\}").unwrap());

        regex
            .captures_iter(text)
            .filter_map(|cap| cap.get(1).map(|m| m.as_str().to_string()))
            .collect()
    }
}
