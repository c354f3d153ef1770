//! Repository for the `students` table.

use sqlx::PgPool;

use crate::models::student::{CreateStudent, Student};

const COLUMNS: &str = "id, name, email, university, field_of_study, degree, country, \
    funds_requested, created_at, updated_at";

/// Provides insert and listing for student interest forms.
pub struct StudentRepo;

impl StudentRepo {
    /// Insert a new student, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateStudent) -> Result<Student, sqlx::Error> {
        let query = format!(
            "INSERT INTO students \
                (name, email, university, field_of_study, degree, country, funds_requested) \
             VALUES ($1, $2, $3, $4, $5, $6, $7) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Student>(&query)
            .bind(&input.name)
            .bind(&input.email)
            .bind(&input.university)
            .bind(&input.field_of_study)
            .bind(&input.degree)
            .bind(&input.country)
            .bind(input.funds_requested)
            .fetch_one(pool)
            .await
    }

    /// List all students, most recent first.
    pub async fn list(pool: &PgPool) -> Result<Vec<Student>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM students ORDER BY created_at DESC, id DESC");
        sqlx::query_as::<_, Student>(&query).fetch_all(pool).await
    }
}
