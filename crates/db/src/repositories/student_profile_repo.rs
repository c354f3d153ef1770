//! Repository for the `student_profiles` table.

use medici_core::student_profile::STATUS_PENDING;
use sqlx::types::Json;
use sqlx::PgPool;

use crate::models::student_profile::{CreateStudentProfile, StudentProfile};

const COLUMNS: &str = "id, full_name, email, country, university, program, degree_level, \
    funds_requested, referral_code, quick_bio, past, present, future, misc, social_links, \
    wallet_address, status, created_at, updated_at";

/// Provides persistence for student intake profiles.
pub struct StudentProfileRepo;

impl StudentProfileRepo {
    /// Insert a new profile in `pending` status, returning the created row.
    pub async fn create(
        pool: &PgPool,
        input: &CreateStudentProfile,
    ) -> Result<StudentProfile, sqlx::Error> {
        let query = format!(
            "INSERT INTO student_profiles \
                (full_name, email, country, university, program, degree_level, \
                 funds_requested, referral_code, quick_bio, past, present, future, misc, \
                 social_links, wallet_address, status) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, StudentProfile>(&query)
            .bind(&input.full_name)
            .bind(&input.email)
            .bind(&input.country)
            .bind(&input.university)
            .bind(&input.program)
            .bind(&input.degree_level)
            .bind(input.funds_requested)
            .bind(&input.referral_code)
            .bind(&input.quick_bio)
            .bind(&input.past)
            .bind(&input.present)
            .bind(&input.future)
            .bind(&input.misc)
            .bind(Json(&input.social_links))
            .bind(&input.wallet_address)
            .bind(STATUS_PENDING)
            .fetch_one(pool)
            .await
    }
}
