//! Upload payload builder for new medical reports.
//!
//! Holds at most one selected file, validates it against type and size
//! constraints before any network activity, and assembles the multipart
//! submission the backend's upload endpoint expects.

use crate::config::Config;
use crate::i18n::{resolve, Language};
use crate::models::ReportType;
use chrono::{Local, NaiveDate};
use reqwest::multipart::{Form, Part};
use serde::Deserialize;
use std::path::Path;
use tracing::{error, info};

/// Maximum accepted file size: 10 MB.
pub const MAX_FILE_BYTES: u64 = 10 * 1024 * 1024;

/// Extensions the backend accepts (PDF plus common image formats).
const ACCEPTED_EXTENSIONS: [&str; 4] = ["pdf", "png", "jpg", "jpeg"];

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

/// Validation failure or submission failure for an upload draft.
#[derive(Debug, thiserror::Error)]
pub enum UploadError {
    #[error("no file selected")]
    NoFileSelected,

    #[error("unsupported file type '{0}' (accepted: pdf, png, jpg, jpeg)")]
    UnsupportedFileType(String),

    #[error("file is {0} bytes, larger than the 10 MB limit")]
    FileTooLarge(u64),

    #[error("could not read file: {0}")]
    Io(#[from] std::io::Error),

    #[error("upload rejected: {message}")]
    Server { status: u16, message: String },

    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),
}

impl UploadError {
    /// Client-detected validation failures never reach the network and are
    /// always locally recoverable.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            UploadError::NoFileSelected
                | UploadError::UnsupportedFileType(_)
                | UploadError::FileTooLarge(_)
        )
    }
}

/// A file accepted into the upload draft.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedFile {
    pub name: String,
    pub bytes: Vec<u8>,
}

impl SelectedFile {
    /// Lowercased extension, if any.
    fn extension(&self) -> Option<String> {
        Path::new(&self.name)
            .extension()
            .map(|ext| ext.to_string_lossy().to_lowercase())
    }

    /// Filename without its extension.
    fn stem(&self) -> String {
        Path::new(&self.name)
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.name.clone())
    }

    fn content_type(&self) -> &'static str {
        match self.extension().as_deref() {
            Some("pdf") => "application/pdf",
            Some("png") => "image/png",
            Some("jpg") | Some("jpeg") => "image/jpeg",
            _ => "application/octet-stream",
        }
    }
}

/// In-progress report upload: one optional file plus its metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct UploadDraft {
    pub file: Option<SelectedFile>,
    pub title: String,
    pub report_type: ReportType,
    pub report_date: NaiveDate,
}

impl Default for UploadDraft {
    fn default() -> Self {
        Self {
            file: None,
            title: String::new(),
            report_type: ReportType::BloodTest,
            report_date: Local::now().date_naive(),
        }
    }
}

impl UploadDraft {
    /// Accept a file into the draft, replacing any prior selection.
    ///
    /// Rejects unsupported extensions and files over [`MAX_FILE_BYTES`]
    /// before any network call; a rejected file leaves the prior selection
    /// untouched. When the title field is still empty the file's stem is
    /// filled in as a default; a title the user has already typed is never
    /// overwritten.
    pub fn select_file(&mut self, file: SelectedFile) -> Result<(), UploadError> {
        match file.extension() {
            Some(ext) if ACCEPTED_EXTENSIONS.contains(&ext.as_str()) => {}
            other => {
                return Err(UploadError::UnsupportedFileType(
                    other.unwrap_or_default(),
                ))
            }
        }

        let size = file.bytes.len() as u64;
        if size > MAX_FILE_BYTES {
            return Err(UploadError::FileTooLarge(size));
        }

        if self.title.is_empty() {
            self.title = file.stem();
        }
        self.file = Some(file);
        Ok(())
    }

    /// Read a file from disk and accept it into the draft. The size is
    /// checked against the metadata before the contents are read.
    pub fn select_path(&mut self, path: &Path) -> Result<(), UploadError> {
        let size = std::fs::metadata(path)?.len();
        if size > MAX_FILE_BYTES {
            return Err(UploadError::FileTooLarge(size));
        }

        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let bytes = std::fs::read(path)?;

        self.select_file(SelectedFile { name, bytes })
    }

    /// Clear the selected file. Whatever title text is present stays.
    pub fn remove_file(&mut self) {
        self.file = None;
    }
}

/// Submit the draft as one multipart request.
///
/// On success the draft clears (the caller navigates away); on failure the
/// backend's `message` is surfaced when present, falling back to the generic
/// localized upload-failure text, and the draft stays intact for retry.
pub async fn submit(
    config: &Config,
    language: Language,
    draft: &mut UploadDraft,
) -> Result<(), UploadError> {
    let file = draft.file.as_ref().ok_or(UploadError::NoFileSelected)?;

    let part = Part::bytes(file.bytes.clone())
        .file_name(file.name.clone())
        .mime_str(file.content_type())?;

    let form = Form::new()
        .part("file", part)
        .text("title", draft.title.clone())
        .text("type", draft.report_type.as_str().to_string())
        .text("reportDate", draft.report_date.to_string());

    let client = reqwest::Client::new();
    let url = format!("{}/api/reports/upload", config.api_url);

    let mut request = client.post(&url).multipart(form);
    if let Some(token) = &config.api_token {
        request = request.bearer_auth(token);
    }

    let response = request.send().await?;

    if !response.status().is_success() {
        let status = response.status().as_u16();
        let body = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<ErrorBody>(&body)
            .ok()
            .and_then(|b| b.message)
            .unwrap_or_else(|| resolve(language, "uploadError").to_string());

        error!("Upload rejected ({}): {}", status, message);
        return Err(UploadError::Server { status, message });
    }

    info!("Uploaded report '{}'", draft.title);
    *draft = UploadDraft::default();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pdf(name: &str, size: usize) -> SelectedFile {
        SelectedFile {
            name: name.to_string(),
            bytes: vec![0u8; size],
        }
    }

    // ==================== File Acceptance Tests ====================

    #[test]
    fn test_accepts_pdf_and_images() {
        for name in ["scan.pdf", "scan.png", "scan.jpg", "scan.jpeg", "SCAN.PDF"] {
            let mut draft = UploadDraft::default();
            assert!(draft.select_file(pdf(name, 10)).is_ok(), "{}", name);
            assert!(draft.file.is_some());
        }
    }

    #[test]
    fn test_rejects_unsupported_extension() {
        let mut draft = UploadDraft::default();
        let err = draft.select_file(pdf("notes.docx", 10)).unwrap_err();
        assert!(matches!(err, UploadError::UnsupportedFileType(ref ext) if ext == "docx"));
        assert!(err.is_validation());
        assert!(draft.file.is_none());
    }

    #[test]
    fn test_rejects_file_without_extension() {
        let mut draft = UploadDraft::default();
        assert!(matches!(
            draft.select_file(pdf("report", 10)).unwrap_err(),
            UploadError::UnsupportedFileType(_)
        ));
    }

    #[test]
    fn test_accepts_file_at_exact_size_limit() {
        let mut draft = UploadDraft::default();
        assert!(draft
            .select_file(pdf("big.pdf", (10 * 1024 * 1024) as usize))
            .is_ok());
    }

    #[test]
    fn test_rejects_file_one_byte_over_limit() {
        let mut draft = UploadDraft::default();
        let err = draft
            .select_file(pdf("big.pdf", (10 * 1024 * 1024 + 1) as usize))
            .unwrap_err();
        assert!(matches!(err, UploadError::FileTooLarge(_)));
        assert!(err.is_validation());
        assert!(draft.file.is_none());
    }

    #[test]
    fn test_rejected_file_keeps_prior_selection() {
        let mut draft = UploadDraft::default();
        draft.select_file(pdf("first.pdf", 10)).unwrap();
        draft.select_file(pdf("bad.docx", 10)).unwrap_err();

        assert_eq!(draft.file.as_ref().unwrap().name, "first.pdf");
    }

    #[test]
    fn test_new_selection_replaces_prior_file() {
        let mut draft = UploadDraft::default();
        draft.select_file(pdf("first.pdf", 10)).unwrap();
        draft.select_file(pdf("second.png", 10)).unwrap();

        assert_eq!(draft.file.as_ref().unwrap().name, "second.png");
    }

    // ==================== Title Defaulting Tests ====================

    #[test]
    fn test_empty_title_defaults_to_file_stem() {
        let mut draft = UploadDraft::default();
        draft.select_file(pdf("report.pdf", 10)).unwrap();
        assert_eq!(draft.title, "report");
    }

    #[test]
    fn test_user_title_is_never_overwritten() {
        let mut draft = UploadDraft::default();
        draft.select_file(pdf("report.pdf", 10)).unwrap();
        assert_eq!(draft.title, "report");

        draft.title = "My Report".to_string();
        draft.select_file(pdf("other.png", 10)).unwrap();
        assert_eq!(draft.title, "My Report");
        assert_eq!(draft.file.as_ref().unwrap().name, "other.png");
    }

    #[test]
    fn test_remove_file_keeps_typed_title() {
        let mut draft = UploadDraft::default();
        draft.select_file(pdf("report.pdf", 10)).unwrap();
        draft.remove_file();

        assert!(draft.file.is_none());
        assert_eq!(draft.title, "report");
    }

    // ==================== Default Draft Tests ====================

    #[test]
    fn test_default_draft_shape() {
        let draft = UploadDraft::default();
        assert!(draft.file.is_none());
        assert!(draft.title.is_empty());
        assert_eq!(draft.report_type, ReportType::BloodTest);
        assert_eq!(draft.report_date, Local::now().date_naive());
    }

    // ==================== Content Type Tests ====================

    #[test]
    fn test_content_type_inference() {
        assert_eq!(pdf("a.pdf", 1).content_type(), "application/pdf");
        assert_eq!(pdf("a.png", 1).content_type(), "image/png");
        assert_eq!(pdf("a.jpg", 1).content_type(), "image/jpeg");
        assert_eq!(pdf("a.jpeg", 1).content_type(), "image/jpeg");
    }

    // ==================== File Reading Tests ====================

    #[test]
    fn test_select_path_reads_and_validates() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scan.pdf");
        std::fs::write(&path, b"%PDF-1.4").unwrap();

        let mut draft = UploadDraft::default();
        draft.select_path(&path).unwrap();

        assert_eq!(draft.title, "scan");
        assert_eq!(draft.file.as_ref().unwrap().bytes, b"%PDF-1.4");
    }

    #[test]
    fn test_select_path_missing_file_is_io_error() {
        let mut draft = UploadDraft::default();
        let err = draft
            .select_path(Path::new("/nonexistent/scan.pdf"))
            .unwrap_err();
        assert!(matches!(err, UploadError::Io(_)));
    }

    // ==================== Submission Guard Tests ====================

    #[tokio::test]
    async fn test_submit_without_file_is_blocked() {
        let config = Config {
            api_url: "http://localhost:1".to_string(),
            api_token: None,
            preferences_path: String::new(),
        };
        let mut draft = UploadDraft::default();

        // No network call is attempted: the unroutable URL would error
        // differently if one were.
        let err = submit(&config, Language::ENGLISH, &mut draft)
            .await
            .unwrap_err();
        assert!(matches!(err, UploadError::NoFileSelected));
        assert!(err.is_validation());
    }
}
