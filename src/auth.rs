//! Client for the external authentication service.
//!
//! The service's internals (sessions, tokens, storage) are out of scope;
//! this module only shapes requests, performs the client-side validation the
//! forms need, and surfaces success or failure.

use crate::config::Config;
use crate::i18n::{resolve, Language, LanguagePreferences};
use serde::{Deserialize, Serialize};
use tracing::{error, info};

/// Minimum accepted password length.
pub const MIN_PASSWORD_LENGTH: usize = 6;

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

/// Validation failure or request failure for an auth operation.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("email and password are required")]
    MissingCredentials,

    #[error("passwords do not match")]
    PasswordMismatch,

    #[error("password must be at least {MIN_PASSWORD_LENGTH} characters")]
    PasswordTooShort,

    #[error("{message}")]
    Server { status: u16, message: String },

    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("failed to persist language preference: {0}")]
    Preference(#[source] anyhow::Error),
}

impl AuthError {
    /// Client-detected validation failures never reach the network and are
    /// always locally recoverable.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            AuthError::MissingCredentials
                | AuthError::PasswordMismatch
                | AuthError::PasswordTooShort
        )
    }
}

/// Registration form fields.
#[derive(Debug, Clone)]
pub struct RegisterForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

/// Profile settings form fields. The language carried here is a draft edit;
/// it takes global effect only after the profile save succeeds.
#[derive(Debug, Clone)]
pub struct ProfileUpdate {
    pub name: String,
    pub email: String,
    pub language: Language,
    pub avatar: String,
}

/// Password-change form fields.
#[derive(Debug, Clone)]
pub struct PasswordChange {
    pub current_password: String,
    pub new_password: String,
    pub confirm_password: String,
}

impl PasswordChange {
    fn validate(&self) -> Result<(), AuthError> {
        if self.new_password != self.confirm_password {
            return Err(AuthError::PasswordMismatch);
        }
        if self.new_password.len() < MIN_PASSWORD_LENGTH {
            return Err(AuthError::PasswordTooShort);
        }
        Ok(())
    }
}

impl RegisterForm {
    fn validate(&self) -> Result<(), AuthError> {
        if self.email.is_empty() || self.password.is_empty() {
            return Err(AuthError::MissingCredentials);
        }
        if self.password != self.confirm_password {
            return Err(AuthError::PasswordMismatch);
        }
        if self.password.len() < MIN_PASSWORD_LENGTH {
            return Err(AuthError::PasswordTooShort);
        }
        Ok(())
    }
}

fn server_error(status: u16, body: &str, fallback_key: &str) -> AuthError {
    let message = serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.message)
        .unwrap_or_else(|| resolve(Language::canonical(), fallback_key).to_string());

    error!("Auth request failed ({}): {}", status, message);
    AuthError::Server { status, message }
}

async fn post_json<T: Serialize>(
    config: &Config,
    method: reqwest::Method,
    path: &str,
    payload: &T,
    fallback_key: &str,
) -> Result<(), AuthError> {
    let client = reqwest::Client::new();
    let url = format!("{}{}", config.api_url, path);

    let mut request = client.request(method, &url).json(payload);
    if let Some(token) = &config.api_token {
        request = request.bearer_auth(token);
    }

    let response = request.send().await?;

    if !response.status().is_success() {
        let status = response.status().as_u16();
        let body = response.text().await.unwrap_or_default();
        return Err(server_error(status, &body, fallback_key));
    }

    Ok(())
}

/// Log in with email and password.
pub async fn login(config: &Config, email: &str, password: &str) -> Result<(), AuthError> {
    if email.is_empty() || password.is_empty() {
        return Err(AuthError::MissingCredentials);
    }

    #[derive(Serialize)]
    struct Payload<'a> {
        email: &'a str,
        password: &'a str,
    }

    post_json(
        config,
        reqwest::Method::POST,
        "/api/auth/login",
        &Payload { email, password },
        "loginError",
    )
    .await?;

    info!("Logged in as {}", email);
    Ok(())
}

/// Register a new account. Password mismatch and length are checked before
/// any network call.
pub async fn register(config: &Config, form: &RegisterForm) -> Result<(), AuthError> {
    form.validate()?;

    #[derive(Serialize)]
    struct Payload<'a> {
        name: &'a str,
        email: &'a str,
        password: &'a str,
    }

    post_json(
        config,
        reqwest::Method::POST,
        "/api/auth/register",
        &Payload {
            name: &form.name,
            email: &form.email,
            password: &form.password,
        },
        "registerError",
    )
    .await?;

    info!("Registered account for {}", form.email);
    Ok(())
}

/// Save profile settings.
///
/// The language selected in the form is committed to the persisted
/// preference only after the backend accepts the update, so abandoning the
/// form never flips the UI language.
pub async fn update_profile(
    config: &Config,
    prefs: &LanguagePreferences,
    update: &ProfileUpdate,
) -> Result<(), AuthError> {
    #[derive(Serialize)]
    struct Payload<'a> {
        name: &'a str,
        email: &'a str,
        language: &'a str,
        avatar: &'a str,
    }

    post_json(
        config,
        reqwest::Method::PUT,
        "/api/auth/profile",
        &Payload {
            name: &update.name,
            email: &update.email,
            language: update.language.code(),
            avatar: &update.avatar,
        },
        "serverError",
    )
    .await?;

    if prefs.language() != update.language {
        prefs
            .set_language(update.language)
            .map_err(AuthError::Preference)?;
    }

    info!("Updated profile for {}", update.email);
    Ok(())
}

/// Change the account password. Mismatch and length are checked before any
/// network call.
pub async fn change_password(config: &Config, change: &PasswordChange) -> Result<(), AuthError> {
    change.validate()?;

    #[derive(Serialize)]
    struct Payload<'a> {
        #[serde(rename = "currentPassword")]
        current_password: &'a str,
        #[serde(rename = "newPassword")]
        new_password: &'a str,
    }

    post_json(
        config,
        reqwest::Method::PUT,
        "/api/auth/password",
        &Payload {
            current_password: &change.current_password,
            new_password: &change.new_password,
        },
        "serverError",
    )
    .await?;

    info!("Password changed");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> Config {
        Config {
            api_url: "http://localhost:1".to_string(),
            api_token: None,
            preferences_path: String::new(),
        }
    }

    // ==================== Login Validation Tests ====================

    #[tokio::test]
    async fn test_login_requires_email_and_password() {
        let err = login(&config(), "", "secret").await.unwrap_err();
        assert!(matches!(err, AuthError::MissingCredentials));
        assert!(err.is_validation());

        let err = login(&config(), "a@b.com", "").await.unwrap_err();
        assert!(matches!(err, AuthError::MissingCredentials));
    }

    // ==================== Register Validation Tests ====================

    fn register_form() -> RegisterForm {
        RegisterForm {
            name: "Test User".to_string(),
            email: "test@example.com".to_string(),
            password: "secret123".to_string(),
            confirm_password: "secret123".to_string(),
        }
    }

    #[test]
    fn test_register_form_valid() {
        assert!(register_form().validate().is_ok());
    }

    #[test]
    fn test_register_password_mismatch_blocked() {
        let form = RegisterForm {
            confirm_password: "different".to_string(),
            ..register_form()
        };
        let err = form.validate().unwrap_err();
        assert!(matches!(err, AuthError::PasswordMismatch));
        assert!(err.is_validation());
    }

    #[test]
    fn test_register_short_password_blocked() {
        let form = RegisterForm {
            password: "abc".to_string(),
            confirm_password: "abc".to_string(),
            ..register_form()
        };
        assert!(matches!(
            form.validate().unwrap_err(),
            AuthError::PasswordTooShort
        ));
    }

    #[test]
    fn test_register_six_character_password_accepted() {
        let form = RegisterForm {
            password: "abcdef".to_string(),
            confirm_password: "abcdef".to_string(),
            ..register_form()
        };
        assert!(form.validate().is_ok());
    }

    // ==================== Password Change Validation Tests ====================

    #[test]
    fn test_password_change_mismatch_blocked() {
        let change = PasswordChange {
            current_password: "old-secret".to_string(),
            new_password: "new-secret".to_string(),
            confirm_password: "other".to_string(),
        };
        assert!(matches!(
            change.validate().unwrap_err(),
            AuthError::PasswordMismatch
        ));
    }

    #[test]
    fn test_password_change_short_password_blocked() {
        let change = PasswordChange {
            current_password: "old-secret".to_string(),
            new_password: "short".to_string(),
            confirm_password: "short".to_string(),
        };
        assert!(matches!(
            change.validate().unwrap_err(),
            AuthError::PasswordTooShort
        ));
    }

    // ==================== Error Message Tests ====================

    #[test]
    fn test_server_error_uses_backend_message() {
        let err = server_error(400, r#"{"message": "Email already registered"}"#, "registerError");
        assert!(err.to_string().contains("Email already registered"));
    }

    #[test]
    fn test_server_error_falls_back_to_generic_message() {
        let err = server_error(500, "not json", "loginError");
        assert!(err.to_string().contains("Login failed"));
    }
}
