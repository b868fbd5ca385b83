//! Submission Outcome
//!
//! The caller sees a 200 with one of three plain-text bodies; the variant
//! determines which.

use std::fmt;

pub const SUCCESS_TEXT: &str = "Success";
pub const VERIFICATION_REJECTED_TEXT: &str = "reCAPTCHA failed";
pub const ERROR_PREFIX: &str = "Error: ";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionOutcome {
    /// Row appended and notifications handed to the transport
    Success,
    /// Token missing, failed, or scored below the threshold
    VerificationRejected,
    /// Input or collaborator failure; carries the detail shown to the caller
    DownstreamFailure(String),
}

impl SubmissionOutcome {
    pub fn response_text(&self) -> String {
        match self {
            SubmissionOutcome::Success => SUCCESS_TEXT.to_string(),
            SubmissionOutcome::VerificationRejected => VERIFICATION_REJECTED_TEXT.to_string(),
            SubmissionOutcome::DownstreamFailure(detail) => format!("{ERROR_PREFIX}{detail}"),
        }
    }
}

impl fmt::Display for SubmissionOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.response_text())
    }
}
