//! Send Test Mail Use Case
//!
//! Manual check of the mail transport; unrelated to the submission pipeline.

use crate::application::config::ContactConfig;
use crate::domain::repository::MailTransport;
use crate::domain::templates;
use crate::error::ContactResult;
use std::sync::Arc;

pub struct SendTestMailUseCase<M>
where
    M: MailTransport,
{
    mailer: Arc<M>,
    config: Arc<ContactConfig>,
}

impl<M> SendTestMailUseCase<M>
where
    M: MailTransport,
{
    pub fn new(mailer: Arc<M>, config: Arc<ContactConfig>) -> Self {
        Self { mailer, config }
    }

    /// Send the fixed test message to the owner address
    pub async fn execute(&self) -> ContactResult<()> {
        let mail = templates::test_mail(&self.config.owner_email, &self.config.site);
        self.mailer.send(&mail).await?;

        tracing::info!(to = %mail.to, "Test email sent");

        Ok(())
    }
}
