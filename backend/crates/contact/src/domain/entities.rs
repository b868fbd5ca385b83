//! Domain Entities
//!
//! Core entities for the contact domain.

use chrono::{DateTime, Utc};
use kernel::id::SubmissionId;

use crate::domain::value_objects::is_valid_email;

/// Stored when the submitter leaves the name blank
pub const DEFAULT_NAME: &str = "No name";
/// Shown (and stored) when the submitter leaves the email blank
pub const DEFAULT_EMAIL: &str = "No email";
/// Stored when the submitter leaves the message blank
pub const DEFAULT_MESSAGE: &str = "No message";

/// A contact form submission with defaults applied
///
/// `email` is the display value; `raw_email` is what the submitter actually
/// sent and is the only value ever used as a reply address.
#[derive(Debug, Clone)]
pub struct ContactSubmission {
    pub id: SubmissionId,
    pub submitted_at: DateTime<Utc>,
    pub name: String,
    pub email: String,
    pub message: String,
    raw_email: Option<String>,
}

impl ContactSubmission {
    /// Create a submission, replacing absent or empty fields with defaults
    pub fn new(name: Option<String>, email: Option<String>, message: Option<String>) -> Self {
        let raw_email = email.filter(|e| !e.is_empty());
        Self {
            id: SubmissionId::new(),
            submitted_at: Utc::now(),
            name: or_default(name, DEFAULT_NAME),
            email: raw_email.clone().unwrap_or_else(|| DEFAULT_EMAIL.to_string()),
            message: or_default(message, DEFAULT_MESSAGE),
            raw_email,
        }
    }

    /// Address for the auto-reply, if the submitted email passes the format rule
    pub fn reply_address(&self) -> Option<&str> {
        self.raw_email.as_deref().filter(|e| is_valid_email(e))
    }
}

fn or_default(value: Option<String>, default: &str) -> String {
    value
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| default.to_string())
}

/// Answer from the anti-bot scoring service
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VerificationResult {
    pub success: bool,
    pub score: f64,
}

impl VerificationResult {
    /// `success` and a score at or above the threshold
    pub fn passes(&self, threshold: f64) -> bool {
        self.success && self.score >= threshold
    }
}

/// Body of an outgoing email
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MailBody {
    Text(String),
    Html(String),
}

/// An email ready to hand to the transport
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutgoingMail {
    pub to: String,
    pub subject: String,
    pub body: MailBody,
}

impl OutgoingMail {
    pub fn text(to: impl Into<String>, subject: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            to: to.into(),
            subject: subject.into(),
            body: MailBody::Text(body.into()),
        }
    }

    pub fn html(to: impl Into<String>, subject: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            to: to.into(),
            subject: subject.into(),
            body: MailBody::Html(body.into()),
        }
    }
}
