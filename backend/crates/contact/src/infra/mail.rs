//! HTTP mail API client
//!
//! Posts each message as JSON to a transactional mail API:
//! `{"from", "to": [..], "subject", "text" | "html"}` with a bearer key.
//! Any 2xx counts as accepted.

use serde::Serialize;

use crate::domain::entities::{MailBody, OutgoingMail};
use crate::domain::repository::MailTransport;
use crate::error::{ContactError, ContactResult};

#[derive(Debug, Serialize)]
struct MailApiRequest<'a> {
    from: &'a str,
    to: [&'a str; 1],
    subject: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    text: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    html: Option<&'a str>,
}

impl<'a> MailApiRequest<'a> {
    fn new(from: &'a str, mail: &'a OutgoingMail) -> Self {
        let (text, html) = match &mail.body {
            MailBody::Text(text) => (Some(text.as_str()), None),
            MailBody::Html(html) => (None, Some(html.as_str())),
        };
        Self {
            from,
            to: [mail.to.as_str()],
            subject: &mail.subject,
            text,
            html,
        }
    }
}

/// Mail transport backed by an HTTP JSON API
#[derive(Clone)]
pub struct HttpMailTransport {
    client: reqwest::Client,
    api_url: String,
    api_key: String,
    from: String,
}

impl HttpMailTransport {
    pub fn new(
        client: reqwest::Client,
        api_url: impl Into<String>,
        api_key: impl Into<String>,
        from: impl Into<String>,
    ) -> Self {
        Self {
            client,
            api_url: api_url.into(),
            api_key: api_key.into(),
            from: from.into(),
        }
    }
}

impl MailTransport for HttpMailTransport {
    async fn send(&self, mail: &OutgoingMail) -> ContactResult<()> {
        self.client
            .post(&self.api_url)
            .bearer_auth(&self.api_key)
            .json(&MailApiRequest::new(&self.from, mail))
            .send()
            .await
            .and_then(reqwest::Response::error_for_status)
            .map_err(|e| ContactError::Mail(e.to_string()))?;

        tracing::debug!(to = %mail.to, subject = %mail.subject, "Mail accepted by transport");

        Ok(())
    }
}
