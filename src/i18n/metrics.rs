//! Translation lookup observability.
//!
//! Counts dictionary lookups and key fallbacks so a rising fallback rate
//! (a key missing from a dictionary) is visible in diagnostics.

use serde::Serialize;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::OnceLock;

/// Global translation metrics singleton.
pub struct TranslationMetrics {
    /// Number of dictionary lookups performed
    lookups: AtomicUsize,

    /// Number of lookups that fell back to echoing the key
    fallbacks: AtomicUsize,
}

static METRICS: OnceLock<TranslationMetrics> = OnceLock::new();

impl TranslationMetrics {
    /// Get the global translation metrics instance.
    pub fn global() -> &'static TranslationMetrics {
        METRICS.get_or_init(|| TranslationMetrics {
            lookups: AtomicUsize::new(0),
            fallbacks: AtomicUsize::new(0),
        })
    }

    /// Record a dictionary lookup.
    pub fn record_lookup(&self) {
        self.lookups.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a lookup that fell back to the raw key.
    pub fn record_fallback(&self) {
        self.fallbacks.fetch_add(1, Ordering::Relaxed);
    }

    pub fn lookups(&self) -> usize {
        self.lookups.load(Ordering::Relaxed)
    }

    pub fn fallbacks(&self) -> usize {
        self.fallbacks.load(Ordering::Relaxed)
    }

    /// Snapshot of the current counters.
    pub fn report(&self) -> MetricsReport {
        let lookups = self.lookups();
        let fallbacks = self.fallbacks();

        MetricsReport {
            lookups,
            fallbacks,
            fallback_rate: if lookups > 0 {
                fallbacks as f64 / lookups as f64
            } else {
                0.0
            },
        }
    }
}

/// Serializable snapshot of translation metrics.
#[derive(Debug, Clone, Serialize)]
pub struct MetricsReport {
    pub lookups: usize,
    pub fallbacks: usize,
    pub fallback_rate: f64,
}
