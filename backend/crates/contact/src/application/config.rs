//! Application Configuration
//!
//! Configuration for the contact application layer, loaded from the
//! environment at startup and shared read-only by every request.

use std::fmt;
use std::time::Duration;

use kernel::error::app_error::{AppError, AppResult, ResultExt};
use kernel::error::kind::ErrorKind;
use platform::http_client::{DEFAULT_TIMEOUT, HttpClientConfig};

use crate::domain::value_objects::{SiteBranding, is_valid_email};

/// Google reCAPTCHA server-side verification endpoint
pub const RECAPTCHA_VERIFY_URL: &str = "https://www.google.com/recaptcha/api/siteverify";

/// Minimum accepted reCAPTCHA v3 score
pub const DEFAULT_SCORE_THRESHOLD: f64 = 0.5;

/// Collection the submissions are appended to
pub const DEFAULT_STORE_NAME: &str = "ContactForm";

/// Contact application configuration
#[derive(Clone)]
pub struct ContactConfig {
    /// Shared secret sent with every verification request
    pub recaptcha_secret: String,
    pub recaptcha_verify_url: String,
    /// Tokens scoring below this are rejected
    pub score_threshold: f64,
    /// Recipient of the new-submission notification
    pub owner_email: String,
    /// Collection name recorded on each stored row
    pub store_name: String,
    /// Mail API endpoint (accepts a JSON message, bearer auth)
    pub mail_api_url: String,
    pub mail_api_key: String,
    /// Sender address for all outgoing mail
    pub mail_from: String,
    pub site: SiteBranding,
    /// Timeout for outbound HTTP calls
    pub http_timeout: Duration,
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            recaptcha_secret: String::new(),
            recaptcha_verify_url: RECAPTCHA_VERIFY_URL.to_string(),
            score_threshold: DEFAULT_SCORE_THRESHOLD,
            owner_email: String::new(),
            store_name: DEFAULT_STORE_NAME.to_string(),
            mail_api_url: String::new(),
            mail_api_key: String::new(),
            mail_from: "no-reply@katplay.fun".to_string(),
            site: SiteBranding::default(),
            http_timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl ContactConfig {
    /// Create config for local development
    ///
    /// Uses Google's public test secret (always passes) and a mail catcher
    /// on localhost.
    pub fn development() -> Self {
        Self {
            recaptcha_secret: "6LeIxAcTAAAAAGG-vFI1TnRWxMZNFuojJ4WifJWe".to_string(),
            owner_email: "owner@localhost.test".to_string(),
            mail_api_url: "http://127.0.0.1:8025/api/send".to_string(),
            mail_api_key: "development".to_string(),
            ..Self::default()
        }
    }

    /// Overlay environment variables on `base` and validate the result
    pub fn from_env(base: Self) -> AppResult<Self> {
        Self::from_lookup(base, |key| std::env::var(key).ok())
    }

    /// Overlay values from `lookup` on `base` and validate the result
    pub fn from_lookup<F>(base: Self, lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = base;

        let text_keys: [(&str, &mut String); 10] = [
            ("RECAPTCHA_SECRET", &mut config.recaptcha_secret),
            ("RECAPTCHA_VERIFY_URL", &mut config.recaptcha_verify_url),
            ("CONTACT_OWNER_EMAIL", &mut config.owner_email),
            ("CONTACT_STORE_NAME", &mut config.store_name),
            ("MAIL_API_URL", &mut config.mail_api_url),
            ("MAIL_API_KEY", &mut config.mail_api_key),
            ("MAIL_FROM", &mut config.mail_from),
            ("SITE_NAME", &mut config.site.name),
            ("SITE_TAGLINE", &mut config.site.tagline),
            ("SITE_URL", &mut config.site.url),
        ];
        for (key, target) in text_keys {
            if let Some(value) = lookup(key) {
                *target = value.trim().to_string();
            }
        }

        if let Some(raw) = lookup("RECAPTCHA_MIN_SCORE") {
            config.score_threshold = raw
                .trim()
                .parse::<f64>()
                .map_app_err(ErrorKind::InternalServerError, "RECAPTCHA_MIN_SCORE must be a number")?;
        }

        if let Some(raw) = lookup("HTTP_TIMEOUT_SECS") {
            let secs = raw.trim().parse::<u64>().map_app_err(
                ErrorKind::InternalServerError,
                "HTTP_TIMEOUT_SECS must be a whole number of seconds",
            )?;
            config.http_timeout = Duration::from_secs(secs);
        }

        config.validate()?;
        Ok(config)
    }

    /// Check that every required value is present and well-formed
    pub fn validate(&self) -> AppResult<()> {
        let required = [
            ("RECAPTCHA_SECRET", &self.recaptcha_secret),
            ("RECAPTCHA_VERIFY_URL", &self.recaptcha_verify_url),
            ("CONTACT_OWNER_EMAIL", &self.owner_email),
            ("CONTACT_STORE_NAME", &self.store_name),
            ("MAIL_API_URL", &self.mail_api_url),
            ("MAIL_API_KEY", &self.mail_api_key),
            ("MAIL_FROM", &self.mail_from),
        ];
        if let Some((key, _)) = required.iter().find(|(_, value)| value.is_empty()) {
            return Err(AppError::internal(format!("{key} must be set")));
        }

        if !(0.0..=1.0).contains(&self.score_threshold) {
            return Err(AppError::internal(
                "RECAPTCHA_MIN_SCORE must be between 0.0 and 1.0",
            ));
        }

        if !is_valid_email(&self.owner_email) {
            return Err(AppError::internal(
                "CONTACT_OWNER_EMAIL is not a valid address",
            ));
        }

        if self.http_timeout.is_zero() {
            return Err(AppError::internal("HTTP_TIMEOUT_SECS must be positive"));
        }

        Ok(())
    }

    /// Settings for the shared outbound client
    pub fn http_client_config(&self) -> HttpClientConfig {
        HttpClientConfig {
            timeout: self.http_timeout,
            ..HttpClientConfig::default()
        }
    }
}

impl fmt::Debug for ContactConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ContactConfig")
            .field("recaptcha_secret", &"[REDACTED]")
            .field("recaptcha_verify_url", &self.recaptcha_verify_url)
            .field("score_threshold", &self.score_threshold)
            .field("owner_email", &self.owner_email)
            .field("store_name", &self.store_name)
            .field("mail_api_url", &self.mail_api_url)
            .field("mail_api_key", &"[REDACTED]")
            .field("mail_from", &self.mail_from)
            .field("site", &self.site)
            .field("http_timeout", &self.http_timeout)
            .finish()
    }
}
