//! reCAPTCHA verification client

use serde::{Deserialize, Serialize};

use crate::domain::entities::VerificationResult;
use crate::domain::repository::TokenVerifier;
use crate::error::{ContactError, ContactResult};

/// Form body of a siteverify request
#[derive(Debug, Serialize)]
struct SiteVerifyRequest<'a> {
    secret: &'a str,
    response: &'a str,
}

/// Body of a siteverify response
///
/// `score` is absent for v2 tokens and for malformed tokens; it is read as 0.
#[derive(Debug, Deserialize)]
struct SiteVerifyResponse {
    success: bool,
    #[serde(default)]
    score: f64,
    #[serde(default)]
    action: Option<String>,
    #[serde(default, rename = "error-codes")]
    error_codes: Vec<String>,
}

/// Verifier backed by the reCAPTCHA siteverify endpoint
#[derive(Clone)]
pub struct RecaptchaVerifier {
    client: reqwest::Client,
    verify_url: String,
    secret: String,
}

impl RecaptchaVerifier {
    pub fn new(
        client: reqwest::Client,
        verify_url: impl Into<String>,
        secret: impl Into<String>,
    ) -> Self {
        Self {
            client,
            verify_url: verify_url.into(),
            secret: secret.into(),
        }
    }
}

impl TokenVerifier for RecaptchaVerifier {
    async fn verify(&self, token: &str) -> ContactResult<VerificationResult> {
        let response = self
            .client
            .post(&self.verify_url)
            .form(&SiteVerifyRequest {
                secret: &self.secret,
                response: token,
            })
            .send()
            .await
            .and_then(reqwest::Response::error_for_status)
            .map_err(|e| ContactError::Verification(e.to_string()))?;

        let body: SiteVerifyResponse = response
            .json()
            .await
            .map_err(|e| ContactError::Verification(e.to_string()))?;

        if !body.error_codes.is_empty() {
            tracing::debug!(error_codes = ?body.error_codes, "siteverify reported errors");
        }

        tracing::debug!(
            success = body.success,
            score = body.score,
            action = body.action.as_deref().unwrap_or(""),
            "siteverify response"
        );

        Ok(VerificationResult {
            success: body.success,
            score: body.score,
        })
    }
}
