//! Contact Router

use crate::application::config::ContactConfig;
use crate::domain::repository::{MailTransport, SubmissionRepository, TokenVerifier};
use crate::infra::mail::HttpMailTransport;
use crate::infra::postgres::PgSubmissionRepository;
use crate::infra::recaptcha::RecaptchaVerifier;
use crate::presentation::handlers::{self, ContactAppState};
use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;

/// Create the contact router with the production adapters
pub fn contact_router(
    repo: PgSubmissionRepository,
    verifier: RecaptchaVerifier,
    mailer: HttpMailTransport,
    config: ContactConfig,
) -> Router {
    contact_router_generic(repo, verifier, mailer, config)
}

/// Create a contact router for any adapter implementations
pub fn contact_router_generic<R, V, M>(repo: R, verifier: V, mailer: M, config: ContactConfig) -> Router
where
    R: SubmissionRepository + Send + Sync + 'static,
    V: TokenVerifier + Send + Sync + 'static,
    M: MailTransport + Send + Sync + 'static,
{
    let state = ContactAppState {
        repo: Arc::new(repo),
        verifier: Arc::new(verifier),
        mailer: Arc::new(mailer),
        config: Arc::new(config),
    };

    Router::new()
        .route("/contact", post(handlers::submit_contact::<R, V, M>))
        .route("/health", get(handlers::health))
        .with_state(state)
}
