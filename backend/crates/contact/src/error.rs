//! Contact Error Types
//!
//! Pipeline failures. Each converts into `kernel::error::AppError` and from
//! there into [`SubmissionOutcome::DownstreamFailure`]; a rejected token is
//! not an error and never appears here.

use kernel::error::app_error::AppError;
use thiserror::Error;

use crate::domain::outcome::SubmissionOutcome;

/// Contact-specific result type alias
pub type ContactResult<T> = Result<T, ContactError>;

#[derive(Debug, Error)]
pub enum ContactError {
    /// Request body is not a valid submission object
    #[error("Malformed input: {0}")]
    MalformedInput(#[from] serde_json::Error),

    /// Request body could not be read
    #[error("Unreadable request body: {0}")]
    UnreadableBody(String),

    /// Verification service unreachable or answered with something unusable
    #[error("Verification request failed: {0}")]
    Verification(String),

    /// Submission store failure
    #[error("Database error: {0}")]
    Store(#[from] sqlx::Error),

    /// Mail transport failure
    #[error("Mail delivery failed: {0}")]
    Mail(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ContactError {
    /// Log the error with appropriate level
    pub fn log(&self) {
        match self {
            ContactError::MalformedInput(e) => {
                tracing::warn!(error = %e, "Malformed contact submission");
            }
            ContactError::UnreadableBody(msg) => {
                tracing::warn!(error = %msg, "Unreadable contact request body");
            }
            ContactError::Verification(msg) => {
                tracing::error!(error = %msg, "Token verification call failed");
            }
            ContactError::Store(e) => {
                tracing::error!(error = %e, "Submission store error");
            }
            ContactError::Mail(msg) => {
                tracing::error!(error = %msg, "Mail transport error");
            }
            ContactError::Internal(msg) => {
                tracing::error!(message = %msg, "Contact internal error");
            }
        }
    }
}

impl From<ContactError> for AppError {
    fn from(err: ContactError) -> Self {
        match err {
            ContactError::MalformedInput(e) => AppError::from(e),
            ContactError::UnreadableBody(msg) => {
                AppError::bad_request(format!("Unreadable request body: {msg}"))
            }
            ContactError::Verification(msg) => {
                AppError::bad_gateway(format!("Verification request failed: {msg}"))
            }
            ContactError::Store(e) => AppError::from(e),
            ContactError::Mail(msg) => AppError::bad_gateway(format!("Mail delivery failed: {msg}")),
            ContactError::Internal(msg) => AppError::internal(msg),
        }
    }
}

impl From<ContactError> for SubmissionOutcome {
    fn from(err: ContactError) -> Self {
        err.log();
        SubmissionOutcome::DownstreamFailure(AppError::from(err).detail())
    }
}
