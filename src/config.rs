use anyhow::{Context, Result};

#[derive(Debug, Clone)]
pub struct Config {
    // Backend
    pub api_url: String,
    pub api_token: Option<String>,

    // Local preference storage
    pub preferences_path: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            // Backend base URL, e.g. https://healthmate.example.com
            api_url: std::env::var("HEALTHMATE_API_URL")
                .context("HEALTHMATE_API_URL not set")?,
            api_token: std::env::var("HEALTHMATE_API_TOKEN").ok(),

            // Preference storage
            preferences_path: std::env::var("HEALTHMATE_PREFS_PATH")
                .unwrap_or_else(|_| "data/preferences.db".to_string()),
        })
    }
}
