//! Persisted language preference.
//!
//! Holds the active UI language and writes every change through to the
//! preference store immediately, so the choice survives process restart.

use crate::i18n::Language;
use crate::store::PreferenceStore;
use anyhow::Result;
use std::sync::Mutex;
use tracing::{info, warn};

/// Fixed storage key for the active language code.
pub const LANGUAGE_PREFERENCE_KEY: &str = "healthmate-language";

pub struct LanguagePreferences {
    store: PreferenceStore,
    current: Mutex<Language>,
}

impl LanguagePreferences {
    /// Load the preference from the store. An absent or unrecognized stored
    /// value falls back to the canonical language (English).
    pub fn load(store: PreferenceStore) -> Result<Self> {
        let current = match store.get(LANGUAGE_PREFERENCE_KEY)? {
            Some(code) => match Language::from_code(&code) {
                Ok(language) => language,
                Err(_) => {
                    warn!(
                        "Stored language preference '{}' is not supported, using default",
                        code
                    );
                    Language::canonical()
                }
            },
            None => Language::canonical(),
        };

        Ok(Self {
            store,
            current: Mutex::new(current),
        })
    }

    /// The currently active language.
    pub fn language(&self) -> Language {
        *self.current.lock().unwrap()
    }

    /// Set the active language and persist it immediately.
    pub fn set_language(&self, language: Language) -> Result<()> {
        self.store.set(LANGUAGE_PREFERENCE_KEY, language.code())?;
        *self.current.lock().unwrap() = language;
        info!("Language preference set to '{}'", language.code());
        Ok(())
    }

    /// Flip between the two supported languages, persisting the result.
    pub fn toggle(&self) -> Result<Language> {
        let next = self.language().toggled();
        self.set_language(next)?;
        Ok(next)
    }
}
