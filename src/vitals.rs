//! Vital-sign composer and vitals API calls.
//!
//! The composer validates the draft's value shape for the chosen type and
//! forwards it; whether the reading is normal is the backend's call, so the
//! submitted payload never carries that flag.

use crate::config::Config;
use crate::models::{TimeOfDay, VitalReading, VitalType, VitalValue};
use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use tracing::{error, info};

#[derive(Debug, Deserialize)]
struct VitalListResponse {
    vitals: Option<Vec<VitalReading>>,
}

/// Wire payload for a new reading. Deliberately has no `isNormal` field.
#[derive(Debug, Serialize)]
struct VitalPayload<'a> {
    #[serde(rename = "type")]
    vital_type: &'a VitalType,
    value: VitalValue,
    date: NaiveDate,
    time: TimeOfDay,
    notes: &'a str,
}

/// Validation failure or submission failure for a vital draft.
#[derive(Debug, thiserror::Error)]
pub enum VitalError {
    #[error("systolic value is required for blood pressure")]
    MissingSystolic,

    #[error("diastolic value is required for blood pressure")]
    MissingDiastolic,

    #[error("a reading value is required")]
    MissingReading,

    #[error("server rejected the reading ({status}): {body}")]
    Server { status: u16, body: String },

    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),
}

impl VitalError {
    /// Client-detected validation failures never reach the network and are
    /// always locally recoverable.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            VitalError::MissingSystolic
                | VitalError::MissingDiastolic
                | VitalError::MissingReading
        )
    }
}

/// In-progress vital reading entry.
#[derive(Debug, Clone, PartialEq)]
pub struct VitalDraft {
    pub vital_type: VitalType,
    pub systolic: Option<f64>,
    pub diastolic: Option<f64>,
    pub reading: Option<f64>,
    pub unit: String,
    pub date: NaiveDate,
    pub time: TimeOfDay,
    pub notes: String,
}

impl Default for VitalDraft {
    fn default() -> Self {
        Self {
            vital_type: VitalType::BloodPressure,
            systolic: None,
            diastolic: None,
            reading: None,
            unit: String::new(),
            date: Local::now().date_naive(),
            time: TimeOfDay::Morning,
            notes: String::new(),
        }
    }
}

impl VitalDraft {
    /// Check the value shape against the chosen type and build the value to
    /// submit. Blood pressure needs both numbers; everything else needs a
    /// single reading (the unit defaults to the type's conventional one).
    pub fn validate(&self) -> Result<VitalValue, VitalError> {
        if self.vital_type == VitalType::BloodPressure {
            let systolic = self.systolic.ok_or(VitalError::MissingSystolic)?;
            let diastolic = self.diastolic.ok_or(VitalError::MissingDiastolic)?;
            Ok(VitalValue::BloodPressure { systolic, diastolic })
        } else {
            let reading = self.reading.ok_or(VitalError::MissingReading)?;
            let unit = if self.unit.is_empty() {
                self.vital_type.default_unit().to_string()
            } else {
                self.unit.clone()
            };
            Ok(VitalValue::Measurement { reading, unit })
        }
    }
}

/// Fetch all recorded vitals. A missing or null `vitals` array is treated as
/// empty.
pub async fn fetch_vitals(config: &Config) -> Result<Vec<VitalReading>, VitalError> {
    let client = reqwest::Client::new();
    let url = format!("{}/api/vitals", config.api_url);

    let mut request = client.get(&url);
    if let Some(token) = &config.api_token {
        request = request.bearer_auth(token);
    }

    let response = request.send().await?;

    if !response.status().is_success() {
        let status = response.status().as_u16();
        let body = response.text().await.unwrap_or_default();
        return Err(VitalError::Server { status, body });
    }

    let list: VitalListResponse = response.json().await?;
    let vitals = list.vitals.unwrap_or_default();
    info!("Fetched {} vital readings", vitals.len());
    Ok(vitals)
}

/// Validate and submit a draft reading.
///
/// A validation failure blocks submission with no network call and leaves
/// the draft untouched. On success the draft resets to the default (blood
/// pressure, empty values, today, morning); on a network or server failure
/// it stays intact so the user can retry.
pub async fn submit_vital(config: &Config, draft: &mut VitalDraft) -> Result<(), VitalError> {
    let value = draft.validate()?;

    let payload = VitalPayload {
        vital_type: &draft.vital_type,
        value,
        date: draft.date,
        time: draft.time,
        notes: &draft.notes,
    };

    let client = reqwest::Client::new();
    let url = format!("{}/api/vitals", config.api_url);

    let mut request = client.post(&url).json(&payload);
    if let Some(token) = &config.api_token {
        request = request.bearer_auth(token);
    }

    let response = request.send().await?;

    if !response.status().is_success() {
        let status = response.status().as_u16();
        let body = response.text().await.unwrap_or_default();
        error!("Vital submission rejected ({}): {}", status, body);
        return Err(VitalError::Server { status, body });
    }

    info!("Recorded {} reading", draft.vital_type);
    *draft = VitalDraft::default();
    Ok(())
}
