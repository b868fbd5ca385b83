//! Repository and Gateway Traits
//!
//! Interfaces for the external collaborators. Implementations are in the
//! infrastructure layer.

use crate::domain::entities::{ContactSubmission, OutgoingMail, VerificationResult};
use crate::error::ContactResult;

/// Append-only submission store
#[trait_variant::make(SubmissionRepository: Send)]
pub trait LocalSubmissionRepository {
    /// Append one row; rows are never updated or read back
    async fn append(&self, submission: &ContactSubmission) -> ContactResult<()>;
}

/// Anti-bot token scoring service
#[trait_variant::make(TokenVerifier: Send)]
pub trait LocalTokenVerifier {
    /// Score a client-supplied token. One outbound call per invocation.
    async fn verify(&self, token: &str) -> ContactResult<VerificationResult>;
}

/// Outbound mail delivery
#[trait_variant::make(MailTransport: Send)]
pub trait LocalMailTransport {
    /// Hand one message to the transport. No delivery confirmation.
    async fn send(&self, mail: &OutgoingMail) -> ContactResult<()>;
}
