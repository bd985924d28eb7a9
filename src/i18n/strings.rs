//! Flat key-to-text dictionaries for the two UI languages.
//!
//! Both dictionaries define the same key set; `DictionaryValidator` enforces
//! that parity. Many Roman-Urdu values are intentionally identical to the
//! English ones (untranslated pass-through terms).

use crate::i18n::{Language, TranslationMetrics};
use tracing::warn;

/// Resolve a display string for `key` under `language`.
///
/// Falls back to the key itself when the key is undefined, so rendering
/// never fails on a missing translation. Safe to call before any language
/// preference has been loaded.
pub fn resolve<'a>(language: Language, key: &'a str) -> &'a str {
    let metrics = TranslationMetrics::global();
    metrics.record_lookup();

    match dictionary(language).iter().find(|(k, _)| *k == key) {
        Some((_, value)) => value,
        None => {
            metrics.record_fallback();
            warn!(
                "No '{}' translation for key '{}', echoing the key",
                language.code(),
                key
            );
            key
        }
    }
}

pub(crate) fn dictionary(language: Language) -> &'static [(&'static str, &'static str)] {
    if language == Language::URDU {
        ROMAN_URDU
    } else {
        ENGLISH
    }
}

pub(crate) const ENGLISH: &[(&str, &str)] = &[
    // Navigation / chrome
    ("home", "Home"),
    ("dashboard", "Dashboard"),
    ("reports", "Reports"),
    ("vitals", "Vitals"),
    ("profile", "Profile"),
    ("login", "Login"),
    ("register", "Register"),
    ("logout", "Logout"),
    ("welcome", "Welcome"),
    ("loading", "Loading..."),
    ("error", "Error"),
    ("success", "Success"),
    ("save", "Save"),
    ("cancel", "Cancel"),
    ("delete", "Delete"),
    ("edit", "Edit"),
    ("view", "View"),
    ("upload", "Upload"),
    ("download", "Download"),
    ("search", "Search"),
    ("filter", "Filter"),
    ("sort", "Sort"),
    ("close", "Close"),
    ("back", "Back"),
    ("next", "Next"),
    ("previous", "Previous"),
    // Auth
    ("email", "Email"),
    ("password", "Password"),
    ("confirmPassword", "Confirm Password"),
    ("name", "Name"),
    ("rememberMe", "Remember Me"),
    ("forgotPassword", "Forgot Password?"),
    ("dontHaveAccount", "Don't have an account?"),
    ("alreadyHaveAccount", "Already have an account?"),
    ("signUp", "Sign Up"),
    ("signIn", "Sign In"),
    // Dashboard
    ("healthOverview", "Health Overview"),
    ("recentReports", "Recent Reports"),
    ("vitalSigns", "Vital Signs"),
    ("healthTips", "Health Tips"),
    ("friendlyMessage", "Friendly Message"),
    ("uploadNewReport", "Upload New Report"),
    ("addVitalReading", "Add Vital Reading"),
    // Reports
    ("medicalReports", "Medical Reports"),
    ("reportType", "Report Type"),
    ("reportDate", "Report Date"),
    ("uploadReport", "Upload Report"),
    ("reportAnalysis", "Report Analysis"),
    ("abnormalValues", "Abnormal Values"),
    ("doctorQuestions", "Questions for Doctor"),
    ("dietSuggestions", "Diet Suggestions"),
    ("homeRemedies", "Home Remedies"),
    ("confidence", "Confidence"),
    // Vitals
    ("bloodPressure", "Blood Pressure"),
    ("bloodSugar", "Blood Sugar"),
    ("weight", "Weight"),
    ("heartRate", "Heart Rate"),
    ("temperature", "Temperature"),
    ("oxygenSaturation", "Oxygen Saturation"),
    ("systolic", "Systolic"),
    ("diastolic", "Diastolic"),
    ("reading", "Reading"),
    ("unit", "Unit"),
    ("time", "Time"),
    ("notes", "Notes"),
    ("normal", "Normal"),
    ("high", "High"),
    ("low", "Low"),
    ("critical", "Critical"),
    // Profile
    ("profileSettings", "Profile Settings"),
    ("changePassword", "Change Password"),
    ("currentPassword", "Current Password"),
    ("newPassword", "New Password"),
    ("language", "Language"),
    ("avatar", "Avatar"),
    // Toasts / status messages
    (
        "welcomeMessage",
        "Welcome to HealthMate! Your AI-powered health companion.",
    ),
    ("loginSuccess", "Login successful! Welcome back!"),
    ("registerSuccess", "Registration successful! Welcome to HealthMate!"),
    ("logoutSuccess", "Logged out successfully!"),
    ("uploadSuccess", "Report uploaded and analyzed successfully!"),
    ("updateSuccess", "Updated successfully!"),
    ("deleteSuccess", "Deleted successfully!"),
    ("loginError", "Login failed. Please check your credentials."),
    ("registerError", "Registration failed. Please try again."),
    ("uploadError", "Upload failed. Please try again."),
    ("networkError", "Network error. Please check your connection."),
    ("serverError", "Server error. Please try again later."),
    (
        "disclaimer",
        "AI analysis is for educational purposes only. Please consult with healthcare professionals for medical advice.",
    ),
    // Times of day
    ("morning", "Morning"),
    ("afternoon", "Afternoon"),
    ("evening", "Evening"),
    ("night", "Night"),
    // Report types
    ("bloodTest", "Blood Test"),
    ("urineTest", "Urine Test"),
    ("xray", "X-Ray"),
    ("ctScan", "CT Scan"),
    ("mri", "MRI"),
    ("ecg", "ECG"),
    ("other", "Other"),
];

pub(crate) const ROMAN_URDU: &[(&str, &str)] = &[
    // Navigation / chrome
    ("home", "Ghar"),
    ("dashboard", "Dashboard"),
    ("reports", "Reports"),
    ("vitals", "Vitals"),
    ("profile", "Profile"),
    ("login", "Login"),
    ("register", "Register"),
    ("logout", "Logout"),
    ("welcome", "Khush Amdeed"),
    ("loading", "Loading..."),
    ("error", "Error"),
    ("success", "Success"),
    ("save", "Save"),
    ("cancel", "Cancel"),
    ("delete", "Delete"),
    ("edit", "Edit"),
    ("view", "View"),
    ("upload", "Upload"),
    ("download", "Download"),
    ("search", "Search"),
    ("filter", "Filter"),
    ("sort", "Sort"),
    ("close", "Close"),
    ("back", "Back"),
    ("next", "Next"),
    ("previous", "Previous"),
    // Auth
    ("email", "Email"),
    ("password", "Password"),
    ("confirmPassword", "Confirm Password"),
    ("name", "Name"),
    ("rememberMe", "Remember Me"),
    ("forgotPassword", "Forgot Password?"),
    ("dontHaveAccount", "Don't have an account?"),
    ("alreadyHaveAccount", "Already have an account?"),
    ("signUp", "Sign Up"),
    ("signIn", "Sign In"),
    // Dashboard
    ("healthOverview", "Health Overview"),
    ("recentReports", "Recent Reports"),
    ("vitalSigns", "Vital Signs"),
    ("healthTips", "Health Tips"),
    ("friendlyMessage", "Friendly Message"),
    ("uploadNewReport", "Upload New Report"),
    ("addVitalReading", "Add Vital Reading"),
    // Reports
    ("medicalReports", "Medical Reports"),
    ("reportType", "Report Type"),
    ("reportDate", "Report Date"),
    ("uploadReport", "Upload Report"),
    ("reportAnalysis", "Report Analysis"),
    ("abnormalValues", "Abnormal Values"),
    ("doctorQuestions", "Questions for Doctor"),
    ("dietSuggestions", "Diet Suggestions"),
    ("homeRemedies", "Home Remedies"),
    ("confidence", "Confidence"),
    // Vitals
    ("bloodPressure", "Blood Pressure"),
    ("bloodSugar", "Blood Sugar"),
    ("weight", "Weight"),
    ("heartRate", "Heart Rate"),
    ("temperature", "Temperature"),
    ("oxygenSaturation", "Oxygen Saturation"),
    ("systolic", "Systolic"),
    ("diastolic", "Diastolic"),
    ("reading", "Reading"),
    ("unit", "Unit"),
    ("time", "Time"),
    ("notes", "Notes"),
    ("normal", "Normal"),
    ("high", "High"),
    ("low", "Low"),
    ("critical", "Critical"),
    // Profile
    ("profileSettings", "Profile Settings"),
    ("changePassword", "Change Password"),
    ("currentPassword", "Current Password"),
    ("newPassword", "New Password"),
    ("language", "Language"),
    ("avatar", "Avatar"),
    // Toasts / status messages
    (
        "welcomeMessage",
        "HealthMate mein khush amdeed! Aap ka AI-powered health companion.",
    ),
    ("loginSuccess", "Login successful! Welcome back!"),
    ("registerSuccess", "Registration successful! Welcome to HealthMate!"),
    ("logoutSuccess", "Logged out successfully!"),
    ("uploadSuccess", "Report uploaded and analyzed successfully!"),
    ("updateSuccess", "Updated successfully!"),
    ("deleteSuccess", "Deleted successfully!"),
    ("loginError", "Login failed. Please check your credentials."),
    ("registerError", "Registration failed. Please try again."),
    ("uploadError", "Upload failed. Please try again."),
    ("networkError", "Network error. Please check your connection."),
    ("serverError", "Server error. Please try again later."),
    (
        "disclaimer",
        "AI analysis sirf educational purposes ke liye hai. Medical advice ke liye healthcare professionals se consult karein.",
    ),
    // Times of day
    ("morning", "Subah"),
    ("afternoon", "Dopahar"),
    ("evening", "Sham"),
    ("night", "Raat"),
    // Report types
    ("bloodTest", "Blood Test"),
    ("urineTest", "Urine Test"),
    ("xray", "X-Ray"),
    ("ctScan", "CT Scan"),
    ("mri", "MRI"),
    ("ecg", "ECG"),
    ("other", "Other"),
];

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== Resolution Tests ====================

    #[test]
    fn test_resolve_known_key_english() {
        assert_eq!(resolve(Language::ENGLISH, "welcome"), "Welcome");
        assert_eq!(resolve(Language::ENGLISH, "morning"), "Morning");
    }

    #[test]
    fn test_resolve_known_key_urdu() {
        assert_eq!(resolve(Language::URDU, "welcome"), "Khush Amdeed");
        assert_eq!(resolve(Language::URDU, "morning"), "Subah");
    }

    #[test]
    fn test_resolve_untranslated_term_passes_through() {
        // Many terms are deliberately identical in both languages.
        assert_eq!(resolve(Language::URDU, "bloodTest"), "Blood Test");
        assert_eq!(
            resolve(Language::URDU, "bloodTest"),
            resolve(Language::ENGLISH, "bloodTest")
        );
    }

    #[test]
    fn test_resolve_unknown_key_echoes_key() {
        assert_eq!(resolve(Language::ENGLISH, "noSuchKey"), "noSuchKey");
        assert_eq!(resolve(Language::URDU, "noSuchKey"), "noSuchKey");
    }

    #[test]
    fn test_resolve_empty_key_echoes_key() {
        assert_eq!(resolve(Language::ENGLISH, ""), "");
    }

    // ==================== Dictionary Shape Tests ====================

    #[test]
    fn test_all_defined_keys_resolve_to_non_empty_text() {
        for (key, _) in ENGLISH {
            assert!(
                !resolve(Language::ENGLISH, key).is_empty(),
                "empty English value for '{}'",
                key
            );
            assert!(
                !resolve(Language::URDU, key).is_empty(),
                "empty Urdu value for '{}'",
                key
            );
        }
    }

    #[test]
    fn test_dictionaries_have_same_length() {
        assert_eq!(ENGLISH.len(), ROMAN_URDU.len());
    }

    #[test]
    fn test_disclaimer_is_localized() {
        let english = resolve(Language::ENGLISH, "disclaimer");
        let urdu = resolve(Language::URDU, "disclaimer");
        assert!(english.contains("educational purposes"));
        assert!(urdu.contains("consult karein"));
    }
}
