//! Internationalization (i18n) module for the bilingual UI.
//!
//! All language-related logic lives here: the registry of supported
//! languages, the validated `Language` type, the key-based translation store
//! with English and Roman-Urdu dictionaries, the persisted language
//! preference, and dictionary quality validation.
//!
//! # Architecture
//!
//! - `registry`: Single source of truth for supported languages and their metadata
//! - `language`: Type-safe Language type validated against the registry
//! - `strings`: Flat key-to-text dictionaries and the `resolve` lookup
//! - `preferences`: Active-language state, persisted across restarts
//! - `validator`: Dictionary key-parity and placeholder validation
//! - `metrics`: Translation lookup observability

mod language;
mod metrics;
mod preferences;
mod registry;
mod strings;
mod validator;

pub use language::Language;
pub use metrics::{MetricsReport, TranslationMetrics};
pub use preferences::{LanguagePreferences, LANGUAGE_PREFERENCE_KEY};
pub use registry::{LanguageConfig, LanguageRegistry};
pub use strings::resolve;
pub use validator::{DictionaryValidator, ValidationReport};
