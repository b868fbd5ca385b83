//! Submit Contact Use Case
//!
//! verify token -> append row -> notify owner -> auto-reply (valid email only)

use crate::application::config::ContactConfig;
use crate::application::verify_token::VerifyTokenUseCase;
use crate::domain::entities::ContactSubmission;
use crate::domain::outcome::SubmissionOutcome;
use crate::domain::repository::{MailTransport, SubmissionRepository, TokenVerifier};
use crate::domain::templates;
use crate::error::ContactResult;
use kernel::id::SubmissionId;
use std::sync::Arc;

/// Input DTO for submit contact
#[derive(Debug, Clone, Default)]
pub struct SubmitContactInput {
    pub name: Option<String>,
    pub email: Option<String>,
    pub message: Option<String>,
    pub token: Option<String>,
}

/// Output DTO for submit contact
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitContactOutput {
    Accepted {
        submission_id: SubmissionId,
        auto_reply_sent: bool,
    },
    Rejected,
}

impl From<SubmitContactOutput> for SubmissionOutcome {
    fn from(output: SubmitContactOutput) -> Self {
        match output {
            SubmitContactOutput::Accepted { .. } => SubmissionOutcome::Success,
            SubmitContactOutput::Rejected => SubmissionOutcome::VerificationRejected,
        }
    }
}

/// Submit Contact Use Case
pub struct SubmitContactUseCase<R, V, M>
where
    R: SubmissionRepository,
    V: TokenVerifier,
    M: MailTransport,
{
    submission_repo: Arc<R>,
    verifier: Arc<V>,
    mailer: Arc<M>,
    config: Arc<ContactConfig>,
}

impl<R, V, M> SubmitContactUseCase<R, V, M>
where
    R: SubmissionRepository,
    V: TokenVerifier,
    M: MailTransport,
{
    pub fn new(
        submission_repo: Arc<R>,
        verifier: Arc<V>,
        mailer: Arc<M>,
        config: Arc<ContactConfig>,
    ) -> Self {
        Self {
            submission_repo,
            verifier,
            mailer,
            config,
        }
    }

    pub async fn execute(&self, input: SubmitContactInput) -> ContactResult<SubmitContactOutput> {
        let submission = ContactSubmission::new(input.name, input.email, input.message);

        let verify = VerifyTokenUseCase::new(self.verifier.clone(), self.config.clone());
        if !verify.execute(input.token.as_deref()).await? {
            return Ok(SubmitContactOutput::Rejected);
        }

        self.submission_repo.append(&submission).await?;

        tracing::info!(
            submission_id = %submission.id,
            collection = %self.config.store_name,
            "Submission recorded"
        );

        // The row stays even if a notification fails after this point
        let auto_reply_sent = self.notify(&submission).await.inspect_err(|e| {
            tracing::warn!(
                submission_id = %submission.id,
                error = %e,
                "Notification failed after submission was recorded"
            );
        })?;

        Ok(SubmitContactOutput::Accepted {
            submission_id: submission.id,
            auto_reply_sent,
        })
    }

    /// Owner notification, then the auto-reply when the address is valid.
    /// Returns whether the auto-reply was sent.
    async fn notify(&self, submission: &ContactSubmission) -> ContactResult<bool> {
        let owner_mail =
            templates::owner_notification(&self.config.owner_email, submission, &self.config.site);
        self.mailer.send(&owner_mail).await?;

        tracing::info!(submission_id = %submission.id, "Owner notified");

        let Some(reply_to) = submission.reply_address() else {
            tracing::debug!(
                submission_id = %submission.id,
                "No valid reply address; skipping auto-reply"
            );
            return Ok(false);
        };

        let reply = templates::auto_reply(reply_to, submission, &self.config.site);
        self.mailer.send(&reply).await?;

        tracing::info!(submission_id = %submission.id, "Auto-reply sent");

        Ok(true)
    }
}
