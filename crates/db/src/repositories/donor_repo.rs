//! Repository for the `donors` table.

use sqlx::PgPool;

use crate::models::donor::{CreateDonor, Donor};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, email, created_at, updated_at";

/// Provides insert and listing for donor sign-ups.
pub struct DonorRepo;

impl DonorRepo {
    /// Insert a new donor, returning the created row.
    ///
    /// Fails with a `uq_donors_email` unique violation if the email exists.
    pub async fn create(pool: &PgPool, input: &CreateDonor) -> Result<Donor, sqlx::Error> {
        let query = format!(
            "INSERT INTO donors (name, email)
             VALUES ($1, $2)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Donor>(&query)
            .bind(&input.name)
            .bind(&input.email)
            .fetch_one(pool)
            .await
    }

    /// List all donors, most recent first.
    pub async fn list(pool: &PgPool) -> Result<Vec<Donor>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM donors ORDER BY created_at DESC, id DESC");
        sqlx::query_as::<_, Donor>(&query).fetch_all(pool).await
    }
}
