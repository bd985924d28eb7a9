//! Value records for backend-owned data.
//!
//! Everything here is a plain immutable snapshot of what the backend returned
//! for one request; the client never attempts cross-record consistency. Enum
//! fields tolerate unrecognized wire values by carrying them verbatim instead
//! of failing deserialization.

use crate::i18n::Language;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Category of a medical report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ReportType {
    BloodTest,
    UrineTest,
    Xray,
    CtScan,
    Mri,
    Ecg,
    Other,
    /// Unrecognized backend value, displayed verbatim.
    Unknown(String),
}

impl ReportType {
    /// All known report types, in the order the upload form offers them.
    pub const KNOWN: [ReportType; 7] = [
        ReportType::BloodTest,
        ReportType::UrineTest,
        ReportType::Xray,
        ReportType::CtScan,
        ReportType::Mri,
        ReportType::Ecg,
        ReportType::Other,
    ];

    pub fn as_str(&self) -> &str {
        match self {
            ReportType::BloodTest => "blood_test",
            ReportType::UrineTest => "urine_test",
            ReportType::Xray => "xray",
            ReportType::CtScan => "ct_scan",
            ReportType::Mri => "mri",
            ReportType::Ecg => "ecg",
            ReportType::Other => "other",
            ReportType::Unknown(value) => value,
        }
    }

    /// Translation key for the display label, or `None` for unrecognized
    /// values (those are shown verbatim).
    pub fn label_key(&self) -> Option<&'static str> {
        match self {
            ReportType::BloodTest => Some("bloodTest"),
            ReportType::UrineTest => Some("urineTest"),
            ReportType::Xray => Some("xray"),
            ReportType::CtScan => Some("ctScan"),
            ReportType::Mri => Some("mri"),
            ReportType::Ecg => Some("ecg"),
            ReportType::Other => Some("other"),
            ReportType::Unknown(_) => None,
        }
    }
}

impl From<String> for ReportType {
    fn from(value: String) -> Self {
        match value.as_str() {
            "blood_test" => ReportType::BloodTest,
            "urine_test" => ReportType::UrineTest,
            "xray" => ReportType::Xray,
            "ct_scan" => ReportType::CtScan,
            "mri" => ReportType::Mri,
            "ecg" => ReportType::Ecg,
            "other" => ReportType::Other,
            _ => ReportType::Unknown(value),
        }
    }
}

impl From<ReportType> for String {
    fn from(value: ReportType) -> Self {
        value.as_str().to_string()
    }
}

impl fmt::Display for ReportType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Severity of an abnormal value in an AI analysis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Severity {
    Normal,
    High,
    Low,
    Critical,
    /// Unrecognized backend value, displayed verbatim.
    Unknown(String),
}

impl Severity {
    pub fn as_str(&self) -> &str {
        match self {
            Severity::Normal => "normal",
            Severity::High => "high",
            Severity::Low => "low",
            Severity::Critical => "critical",
            Severity::Unknown(value) => value,
        }
    }
}

impl From<String> for Severity {
    fn from(value: String) -> Self {
        match value.as_str() {
            "normal" => Severity::Normal,
            "high" => Severity::High,
            "low" => Severity::Low,
            "critical" => Severity::Critical,
            _ => Severity::Unknown(value),
        }
    }
}

impl From<Severity> for String {
    fn from(value: Severity) -> Self {
        value.as_str().to_string()
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Kind of vital-sign reading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum VitalType {
    BloodPressure,
    BloodSugar,
    Weight,
    HeartRate,
    Temperature,
    OxygenSaturation,
    /// Unrecognized backend value, displayed verbatim.
    Unknown(String),
}

impl VitalType {
    pub const KNOWN: [VitalType; 6] = [
        VitalType::BloodPressure,
        VitalType::BloodSugar,
        VitalType::Weight,
        VitalType::HeartRate,
        VitalType::Temperature,
        VitalType::OxygenSaturation,
    ];

    pub fn as_str(&self) -> &str {
        match self {
            VitalType::BloodPressure => "blood_pressure",
            VitalType::BloodSugar => "blood_sugar",
            VitalType::Weight => "weight",
            VitalType::HeartRate => "heart_rate",
            VitalType::Temperature => "temperature",
            VitalType::OxygenSaturation => "oxygen_saturation",
            VitalType::Unknown(value) => value,
        }
    }

    /// Translation key for the display label, or `None` for unrecognized
    /// values (those are shown verbatim).
    pub fn label_key(&self) -> Option<&'static str> {
        match self {
            VitalType::BloodPressure => Some("bloodPressure"),
            VitalType::BloodSugar => Some("bloodSugar"),
            VitalType::Weight => Some("weight"),
            VitalType::HeartRate => Some("heartRate"),
            VitalType::Temperature => Some("temperature"),
            VitalType::OxygenSaturation => Some("oxygenSaturation"),
            VitalType::Unknown(_) => None,
        }
    }

    /// Conventional display unit for the reading.
    pub fn default_unit(&self) -> &'static str {
        match self {
            VitalType::BloodPressure => "mmHg",
            VitalType::BloodSugar => "mg/dL",
            VitalType::Weight => "kg",
            VitalType::HeartRate => "bpm",
            VitalType::Temperature => "°F",
            VitalType::OxygenSaturation => "%",
            VitalType::Unknown(_) => "",
        }
    }
}

impl From<String> for VitalType {
    fn from(value: String) -> Self {
        match value.as_str() {
            "blood_pressure" => VitalType::BloodPressure,
            "blood_sugar" => VitalType::BloodSugar,
            "weight" => VitalType::Weight,
            "heart_rate" => VitalType::HeartRate,
            "temperature" => VitalType::Temperature,
            "oxygen_saturation" => VitalType::OxygenSaturation,
            _ => VitalType::Unknown(value),
        }
    }
}

impl From<VitalType> for String {
    fn from(value: VitalType) -> Self {
        value.as_str().to_string()
    }
}

impl fmt::Display for VitalType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Time of day a vital reading was taken. Client-authored, so the set is
/// closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeOfDay {
    Morning,
    Afternoon,
    Evening,
    Night,
}

impl TimeOfDay {
    pub fn as_str(&self) -> &'static str {
        match self {
            TimeOfDay::Morning => "morning",
            TimeOfDay::Afternoon => "afternoon",
            TimeOfDay::Evening => "evening",
            TimeOfDay::Night => "night",
        }
    }

    pub fn label_key(&self) -> &'static str {
        self.as_str()
    }
}

/// Value of a vital reading. Blood pressure carries two numbers; every other
/// type carries a single reading with a unit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum VitalValue {
    BloodPressure { systolic: f64, diastolic: f64 },
    Measurement {
        reading: f64,
        #[serde(default)]
        unit: String,
    },
}

/// Text available in both UI languages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BilingualText {
    pub english: String,
    pub urdu: String,
}

impl BilingualText {
    pub fn for_language(&self, language: Language) -> &str {
        if language == Language::URDU {
            &self.urdu
        } else {
            &self.english
        }
    }
}

/// One out-of-range parameter flagged by the analysis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AbnormalValue {
    pub parameter: String,
    pub value: String,
    #[serde(rename = "normalRange")]
    pub normal_range: String,
    pub severity: Severity,
}

/// AI-generated analysis attached to a report. Immutable from the client's
/// perspective.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AiAnalysis {
    /// Confidence in percent, 0-100.
    pub confidence: u8,
    pub summary: BilingualText,
    #[serde(rename = "abnormalValues", default)]
    pub abnormal_values: Vec<AbnormalValue>,
    #[serde(rename = "doctorQuestions", default)]
    pub doctor_questions: Vec<String>,
    #[serde(rename = "dietSuggestions", default)]
    pub diet_suggestions: Vec<String>,
    #[serde(rename = "homeRemedies", default)]
    pub home_remedies: Vec<String>,
}

/// A medical report as returned by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    #[serde(rename = "type")]
    pub report_type: ReportType,
    #[serde(rename = "reportDate")]
    pub report_date: NaiveDate,
    #[serde(rename = "fileType", default)]
    pub file_type: String,
    #[serde(rename = "fileUrl", default)]
    pub file_url: String,
    #[serde(rename = "isAnalyzed", default)]
    pub is_analyzed: bool,
    #[serde(rename = "aiAnalysis", default, skip_serializing_if = "Option::is_none")]
    pub ai_analysis: Option<AiAnalysis>,
}

/// A vital-sign reading as returned by the backend. `is_normal` is computed
/// server-side; drafts created by this client never send it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VitalReading {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(rename = "type")]
    pub vital_type: VitalType,
    pub value: VitalValue,
    pub date: NaiveDate,
    pub time: TimeOfDay,
    #[serde(default)]
    pub notes: String,
    #[serde(rename = "isNormal", default)]
    pub is_normal: bool,
}
