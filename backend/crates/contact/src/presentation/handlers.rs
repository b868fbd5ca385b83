//! HTTP Handlers

use crate::application::config::ContactConfig;
use crate::application::{SubmitContactOutput, SubmitContactUseCase};
use crate::domain::outcome::SubmissionOutcome;
use crate::domain::repository::{MailTransport, SubmissionRepository, TokenVerifier};
use crate::error::{ContactError, ContactResult};
use crate::presentation::dto::ContactRequest;
use axum::extract::{ConnectInfo, Request, State};
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use platform::client::extract_client_ip;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::Instrument;

/// Upper bound on the submission body
pub const MAX_BODY_BYTES: usize = 64 * 1024;

/// Shared state for contact handlers
pub struct ContactAppState<R, V, M>
where
    R: SubmissionRepository + Send + Sync + 'static,
    V: TokenVerifier + Send + Sync + 'static,
    M: MailTransport + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub verifier: Arc<V>,
    pub mailer: Arc<M>,
    pub config: Arc<ContactConfig>,
}

// Manual impl: derive would require R, V, M: Clone
impl<R, V, M> Clone for ContactAppState<R, V, M>
where
    R: SubmissionRepository + Send + Sync + 'static,
    V: TokenVerifier + Send + Sync + 'static,
    M: MailTransport + Send + Sync + 'static,
{
    fn clone(&self) -> Self {
        Self {
            repo: self.repo.clone(),
            verifier: self.verifier.clone(),
            mailer: self.mailer.clone(),
            config: self.config.clone(),
        }
    }
}

/// Always 200 text/plain; the body text carries the outcome
impl IntoResponse for SubmissionOutcome {
    fn into_response(self) -> Response {
        (
            StatusCode::OK,
            [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
            self.response_text(),
        )
            .into_response()
    }
}

/// POST /api/contact
///
/// The body is read as raw bytes so that malformed JSON is reported in the
/// response text instead of as a framework rejection.
pub async fn submit_contact<R, V, M>(
    State(state): State<ContactAppState<R, V, M>>,
    request: Request,
) -> SubmissionOutcome
where
    R: SubmissionRepository + Send + Sync + 'static,
    V: TokenVerifier + Send + Sync + 'static,
    M: MailTransport + Send + Sync + 'static,
{
    let direct_ip = request
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|info| info.0.ip());
    let client_ip = extract_client_ip(request.headers(), direct_ip);

    let span = tracing::info_span!("contact_submission", client_ip = ?client_ip);

    async move {
        match process(&state, request).await {
            Ok(output) => {
                if let SubmitContactOutput::Accepted {
                    submission_id,
                    auto_reply_sent,
                } = &output
                {
                    tracing::info!(
                        submission_id = %submission_id,
                        auto_reply_sent = *auto_reply_sent,
                        "Contact submission accepted"
                    );
                }
                SubmissionOutcome::from(output)
            }
            Err(e) => SubmissionOutcome::from(e),
        }
    }
    .instrument(span)
    .await
}

async fn process<R, V, M>(
    state: &ContactAppState<R, V, M>,
    request: Request,
) -> ContactResult<SubmitContactOutput>
where
    R: SubmissionRepository + Send + Sync + 'static,
    V: TokenVerifier + Send + Sync + 'static,
    M: MailTransport + Send + Sync + 'static,
{
    let bytes = axum::body::to_bytes(request.into_body(), MAX_BODY_BYTES)
        .await
        .map_err(|e| ContactError::UnreadableBody(e.to_string()))?;

    let req: ContactRequest = serde_json::from_slice(&bytes)?;

    let use_case = SubmitContactUseCase::new(
        state.repo.clone(),
        state.verifier.clone(),
        state.mailer.clone(),
        state.config.clone(),
    );

    use_case.execute(req.into()).await
}

/// GET /api/health
pub async fn health() -> &'static str {
    "ok"
}
