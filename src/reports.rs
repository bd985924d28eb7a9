//! Report fetching, deletion, and client-side list shaping.
//!
//! The backend owns the records; every fetch is an independent snapshot.
//! `filter_and_sort` is the pure list processor the report view renders
//! through.

use crate::config::Config;
use crate::models::{Report, ReportType};
use anyhow::{bail, Context, Result};
use serde::Deserialize;
use std::str::FromStr;
use tracing::info;

#[derive(Debug, Deserialize)]
struct ReportListResponse {
    reports: Option<Vec<Report>>,
}

#[derive(Debug, Deserialize)]
struct ReportResponse {
    report: Report,
}

/// Column the report list is ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    /// Most recent first
    Date,
    /// Ascending lexicographic by title
    Title,
    /// Ascending lexicographic by type
    Type,
}

impl Default for SortKey {
    fn default() -> Self {
        SortKey::Date
    }
}

impl FromStr for SortKey {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "date" => Ok(SortKey::Date),
            "title" => Ok(SortKey::Title),
            "type" => Ok(SortKey::Type),
            other => bail!("Unknown sort key: '{}'", other),
        }
    }
}

/// Report-type filter; "all" is the wildcard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeFilter {
    All,
    Only(ReportType),
}

impl TypeFilter {
    pub fn parse(s: &str) -> TypeFilter {
        if s.eq_ignore_ascii_case("all") {
            TypeFilter::All
        } else {
            TypeFilter::Only(ReportType::from(s.to_string()))
        }
    }

    fn matches(&self, report: &Report) -> bool {
        match self {
            TypeFilter::All => true,
            TypeFilter::Only(report_type) => report.report_type == *report_type,
        }
    }
}

/// Produce the filtered, ordered view of a report list.
///
/// A report is included when its title contains `search` as a
/// case-insensitive substring and it passes the type filter. Sorting is
/// stable, so ties keep their input order. The input is not mutated.
pub fn filter_and_sort(
    reports: &[Report],
    search: &str,
    filter: &TypeFilter,
    sort: SortKey,
) -> Vec<Report> {
    let search = search.to_lowercase();

    let mut view: Vec<Report> = reports
        .iter()
        .filter(|report| report.title.to_lowercase().contains(&search))
        .filter(|report| filter.matches(report))
        .cloned()
        .collect();

    match sort {
        SortKey::Date => view.sort_by(|a, b| b.report_date.cmp(&a.report_date)),
        SortKey::Title => view.sort_by(|a, b| a.title.cmp(&b.title)),
        SortKey::Type => view.sort_by(|a, b| a.report_type.as_str().cmp(b.report_type.as_str())),
    }

    view
}

fn authorize(
    request: reqwest::RequestBuilder,
    config: &Config,
) -> reqwest::RequestBuilder {
    match &config.api_token {
        Some(token) => request.bearer_auth(token),
        None => request,
    }
}

/// Fetch the full report list. A missing or null `reports` array is treated
/// as empty.
pub async fn fetch_reports(config: &Config) -> Result<Vec<Report>> {
    let client = reqwest::Client::new();
    let url = format!("{}/api/reports", config.api_url);

    let response = authorize(client.get(&url), config)
        .send()
        .await
        .context("Failed to send report list request")?;

    if !response.status().is_success() {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        bail!("Report list request failed ({}): {}", status, body);
    }

    let list: ReportListResponse = response
        .json()
        .await
        .context("Failed to parse report list response")?;

    let reports = list.reports.unwrap_or_default();
    info!("Fetched {} reports", reports.len());
    Ok(reports)
}

/// Fetch a single report by id.
pub async fn fetch_report(config: &Config, id: &str) -> Result<Report> {
    let client = reqwest::Client::new();
    let url = format!("{}/api/reports/{}", config.api_url, id);

    let response = authorize(client.get(&url), config)
        .send()
        .await
        .context("Failed to send report request")?;

    if !response.status().is_success() {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        bail!("Report request failed ({}): {}", status, body);
    }

    let report: ReportResponse = response
        .json()
        .await
        .context("Failed to parse report response")?;

    Ok(report.report)
}

/// Delete a report. On success the caller removes the record from its local
/// list; no re-fetch is performed.
pub async fn delete_report(config: &Config, id: &str) -> Result<()> {
    let client = reqwest::Client::new();
    let url = format!("{}/api/reports/{}", config.api_url, id);

    let response = authorize(client.delete(&url), config)
        .send()
        .await
        .context("Failed to send report delete request")?;

    if !response.status().is_success() {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        bail!("Report delete failed ({}): {}", status, body);
    }

    info!("Deleted report {}", id);
    Ok(())
}
