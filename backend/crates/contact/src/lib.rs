//! Contact Form Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Entities, email rule, templates, port traits
//! - `application/` - Configuration and use cases
//! - `infra/` - PostgreSQL store, reCAPTCHA client, HTTP mail client
//! - `presentation/` - HTTP handlers, DTOs, router
//!
//! ## Request Flow
//! 1. Token verification (reject -> `reCAPTCHA failed`, nothing stored)
//! 2. Append the submission row, notify the owner
//! 3. Auto-reply, only when the submitted address passes the format rule
//!
//! The response is always 200 `text/plain`: `Success`, `reCAPTCHA failed`
//! or `Error: <detail>`.

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::config::ContactConfig;
pub use domain::outcome::SubmissionOutcome;
pub use error::{ContactError, ContactResult};
pub use infra::mail::HttpMailTransport;
pub use infra::postgres::PgSubmissionRepository;
pub use infra::recaptcha::RecaptchaVerifier;
pub use presentation::router::{contact_router, contact_router_generic};
