//! Repository for the `subscribers` table.
//!
//! Sign-up is a check-then-insert inside a SERIALIZABLE transaction, retried
//! when PostgreSQL aborts it because of a concurrent sign-up.

use std::time::Duration;

use medici_core::types::DbId;
use sqlx::PgPool;

use crate::models::subscriber::Subscriber;
use crate::pg_error::{is_retryable, unique_violation};

const COLUMNS: &str = "id, email, created_at, updated_at";

/// Base delay between attempts; attempt `n` waits `n * RETRY_BACKOFF`.
const RETRY_BACKOFF: Duration = Duration::from_millis(25);

/// Result of a newsletter sign-up.
#[derive(Debug, Clone)]
pub enum SubscribeOutcome {
    Created(Subscriber),
    AlreadySubscribed,
}

pub struct SubscriberRepo;

impl SubscriberRepo {
    /// Subscribe `email` (already normalised), making at most `max_attempts`
    /// attempts when the transaction hits a serialization failure.
    ///
    /// A unique violation on insert is reported as
    /// [`SubscribeOutcome::AlreadySubscribed`], not as an error.
    pub async fn subscribe(
        pool: &PgPool,
        email: &str,
        max_attempts: u32,
    ) -> Result<SubscribeOutcome, sqlx::Error> {
        let max_attempts = max_attempts.max(1);
        let mut attempt: u32 = 1;

        loop {
            match Self::try_subscribe(pool, email).await {
                Ok(outcome) => return Ok(outcome),
                Err(err) if unique_violation(&err).is_some() => {
                    return Ok(SubscribeOutcome::AlreadySubscribed);
                }
                Err(err) if is_retryable(&err) && attempt < max_attempts => {
                    tracing::warn!(attempt, max_attempts, error = %err, "Subscribe transaction conflicted, retrying");
                    tokio::time::sleep(RETRY_BACKOFF * attempt).await;
                    attempt += 1;
                }
                Err(err) => return Err(err),
            }
        }
    }

    /// One SERIALIZABLE check-then-insert. The transaction rolls back on drop
    /// if any step fails.
    async fn try_subscribe(pool: &PgPool, email: &str) -> Result<SubscribeOutcome, sqlx::Error> {
        let mut tx = pool.begin().await?;

        sqlx::query("SET TRANSACTION ISOLATION LEVEL SERIALIZABLE")
            .execute(&mut *tx)
            .await?;

        let existing: Option<(DbId,)> = sqlx::query_as("SELECT id FROM subscribers WHERE email = $1")
            .bind(email)
            .fetch_optional(&mut *tx)
            .await?;

        if existing.is_some() {
            tx.rollback().await?;
            return Ok(SubscribeOutcome::AlreadySubscribed);
        }

        let query = format!("INSERT INTO subscribers (email) VALUES ($1) RETURNING {COLUMNS}");
        let subscriber = sqlx::query_as::<_, Subscriber>(&query)
            .bind(email)
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(SubscribeOutcome::Created(subscriber))
    }
}
