//! Client library for the HealthMate backend: medical report upload and
//! retrieval, AI analysis summaries, vital-sign logging, and bilingual
//! (English / Roman-Urdu) UI strings with a persisted language preference.

pub mod auth;
pub mod config;
pub mod i18n;
pub mod models;
pub mod reports;
pub mod store;
pub mod upload;
pub mod vitals;
