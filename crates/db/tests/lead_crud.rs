//! Integration tests for the lead repositories.
//!
//! Exercises inserts, listings and unique constraints against a real
//! database.

use medici_core::student_profile::{SocialLink, STATUS_PENDING};
use medici_db::models::donor::CreateDonor;
use medici_db::models::student::CreateStudent;
use medici_db::models::student_profile::CreateStudentProfile;
use medici_db::pg_error::unique_violation;
use medici_db::repositories::{DonorRepo, StudentProfileRepo, StudentRepo};
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn new_donor(name: &str, email: &str) -> CreateDonor {
    CreateDonor {
        name: name.to_string(),
        email: email.to_string(),
    }
}

fn new_student(email: &str) -> CreateStudent {
    CreateStudent {
        name: "Ada".to_string(),
        email: email.to_string(),
        university: "MIT".to_string(),
        field_of_study: "Mathematics".to_string(),
        degree: "BSc".to_string(),
        country: "United Kingdom".to_string(),
        funds_requested: Some(2500.0),
    }
}

fn new_profile(email: &str) -> CreateStudentProfile {
    CreateStudentProfile {
        full_name: "Ada Lovelace".to_string(),
        email: email.to_string(),
        country: "United States".to_string(),
        university: Some("MIT".to_string()),
        program: Some("Computer Science".to_string()),
        degree_level: Some("graduate".to_string()),
        funds_requested: Some(12_000.0),
        referral_code: None,
        quick_bio: Some("First programmer".to_string()),
        past: None,
        present: None,
        future: None,
        misc: None,
        social_links: vec![SocialLink {
            platform: "github".to_string(),
            url: Some("https://github.com/ada".to_string()),
        }],
        wallet_address: None,
    }
}

async fn row_count(pool: &PgPool, table: &str) -> i64 {
    let (count,): (i64,) = sqlx::query_as(&format!("SELECT COUNT(*) FROM {table}"))
        .fetch_one(pool)
        .await
        .unwrap();
    count
}

// ---------------------------------------------------------------------------
// Donors
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_donor_returns_stored_row(pool: PgPool) {
    let donor = DonorRepo::create(&pool, &new_donor("Grace", "grace@example.com"))
        .await
        .unwrap();
    assert_eq!(donor.name, "Grace");
    assert_eq!(donor.created_at, donor.updated_at);

    let listed = DonorRepo::list(&pool).await.unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].id, donor.id);
    assert_eq!(listed[0].email, "grace@example.com");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_duplicate_donor_email_violates_unique(pool: PgPool) {
    DonorRepo::create(&pool, &new_donor("Grace", "grace@example.com"))
        .await
        .unwrap();
    let err = DonorRepo::create(&pool, &new_donor("Other", "grace@example.com"))
        .await
        .unwrap_err();

    assert_eq!(unique_violation(&err).as_deref(), Some("uq_donors_email"));
    assert_eq!(row_count(&pool, "donors").await, 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_donors_newest_first(pool: PgPool) {
    DonorRepo::create(&pool, &new_donor("First", "first@example.com"))
        .await
        .unwrap();
    DonorRepo::create(&pool, &new_donor("Second", "second@example.com"))
        .await
        .unwrap();

    let donors = DonorRepo::list(&pool).await.unwrap();
    let names: Vec<_> = donors.iter().map(|d| d.name.as_str()).collect();
    assert_eq!(names, ["Second", "First"]);
}

// ---------------------------------------------------------------------------
// Students
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_student_and_list(pool: PgPool) {
    let student = StudentRepo::create(&pool, &new_student("ada@example.com"))
        .await
        .unwrap();
    assert_eq!(student.funds_requested, Some(2500.0));
    assert_eq!(student.field_of_study, "Mathematics");

    let all = StudentRepo::list(&pool).await.unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].id, student.id);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_duplicate_student_email_violates_unique(pool: PgPool) {
    StudentRepo::create(&pool, &new_student("ada@example.com"))
        .await
        .unwrap();
    let err = StudentRepo::create(&pool, &new_student("ada@example.com"))
        .await
        .unwrap_err();
    assert_eq!(unique_violation(&err).as_deref(), Some("uq_students_email"));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_student_funds_must_be_positive(pool: PgPool) {
    let mut input = new_student("neg@example.com");
    input.funds_requested = Some(-1.0);
    assert!(StudentRepo::create(&pool, &input).await.is_err());
}

// ---------------------------------------------------------------------------
// Student profiles
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_profile_defaults_to_pending(pool: PgPool) {
    let profile = StudentProfileRepo::create(&pool, &new_profile("ada@example.com"))
        .await
        .unwrap();

    assert_eq!(profile.status, STATUS_PENDING);
    assert_eq!(profile.social_links.0.len(), 1);
    assert_eq!(profile.social_links.0[0].platform, "github");

    let (status,): (String,) =
        sqlx::query_as("SELECT status FROM student_profiles WHERE email = $1")
            .bind("ada@example.com")
            .fetch_one(&pool)
            .await
            .unwrap();
    assert_eq!(status, STATUS_PENDING);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_duplicate_profile_email_violates_unique(pool: PgPool) {
    StudentProfileRepo::create(&pool, &new_profile("ada@example.com"))
        .await
        .unwrap();
    let err = StudentProfileRepo::create(&pool, &new_profile("ada@example.com"))
        .await
        .unwrap_err();
    assert_eq!(
        unique_violation(&err).as_deref(),
        Some("uq_student_profiles_email")
    );
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_profile_rejects_unknown_degree_level(pool: PgPool) {
    let mut input = new_profile("ada@example.com");
    input.degree_level = Some("postdoc".to_string());
    let err = StudentProfileRepo::create(&pool, &input).await.unwrap_err();
    assert!(unique_violation(&err).is_none());
    assert_eq!(row_count(&pool, "student_profiles").await, 0);
}
