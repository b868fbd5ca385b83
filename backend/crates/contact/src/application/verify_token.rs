//! Verify Token Use Case

use crate::application::config::ContactConfig;
use crate::domain::repository::TokenVerifier;
use crate::error::ContactResult;
use std::sync::Arc;

/// Verify Token Use Case
pub struct VerifyTokenUseCase<V>
where
    V: TokenVerifier,
{
    verifier: Arc<V>,
    config: Arc<ContactConfig>,
}

impl<V> VerifyTokenUseCase<V>
where
    V: TokenVerifier,
{
    pub fn new(verifier: Arc<V>, config: Arc<ContactConfig>) -> Self {
        Self { verifier, config }
    }

    /// `Ok(true)` iff the service reports success with a score at or above
    /// the configured threshold. A missing or empty token is rejected
    /// without calling the service.
    pub async fn execute(&self, token: Option<&str>) -> ContactResult<bool> {
        let Some(token) = token.filter(|t| !t.is_empty()) else {
            tracing::warn!("Submission without anti-bot token");
            return Ok(false);
        };

        let result = self.verifier.verify(token).await?;
        let passed = result.passes(self.config.score_threshold);

        if passed {
            tracing::debug!(score = result.score, "Token verified");
        } else {
            tracing::warn!(
                success = result.success,
                score = result.score,
                threshold = self.config.score_threshold,
                "Token rejected"
            );
        }

        Ok(passed)
    }
}
