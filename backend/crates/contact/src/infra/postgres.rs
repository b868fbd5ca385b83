//! PostgreSQL Repository Implementations

use crate::domain::entities::ContactSubmission;
use crate::domain::repository::SubmissionRepository;
use crate::error::ContactResult;
use sqlx::PgPool;

/// PostgreSQL-backed append-only submission store
///
/// Every row is tagged with the collection name it was configured with,
/// so several forms can share one table.
#[derive(Clone)]
pub struct PgSubmissionRepository {
    pool: PgPool,
    collection: String,
}

impl PgSubmissionRepository {
    pub fn new(pool: PgPool, collection: impl Into<String>) -> Self {
        Self {
            pool,
            collection: collection.into(),
        }
    }
}

impl SubmissionRepository for PgSubmissionRepository {
    async fn append(&self, submission: &ContactSubmission) -> ContactResult<()> {
        sqlx::query(
            r#"
            INSERT INTO form_submissions (
                submission_id,
                collection,
                submitted_at,
                name,
                email,
                message
            ) VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(submission.id.into_uuid())
        .bind(&self.collection)
        .bind(submission.submitted_at)
        .bind(&submission.name)
        .bind(&submission.email)
        .bind(&submission.message)
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}
