//! Student intake profile model and DTOs.

use medici_core::student_profile::{ProfileLead, SocialLink};
use medici_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::types::Json;
use sqlx::FromRow;

/// A row from the `student_profiles` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentProfile {
    pub id: DbId,
    pub full_name: String,
    pub email: String,
    pub country: String,
    pub university: Option<String>,
    pub program: Option<String>,
    pub degree_level: Option<String>,
    pub funds_requested: Option<f64>,
    pub referral_code: Option<String>,
    pub quick_bio: Option<String>,
    pub past: Option<String>,
    pub present: Option<String>,
    pub future: Option<String>,
    pub misc: Option<String>,
    pub social_links: Json<Vec<SocialLink>>,
    pub wallet_address: Option<String>,
    pub status: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for inserting a profile. Status always starts as `pending`.
#[derive(Debug, Clone)]
pub struct CreateStudentProfile {
    pub full_name: String,
    pub email: String,
    pub country: String,
    pub university: Option<String>,
    pub program: Option<String>,
    pub degree_level: Option<String>,
    pub funds_requested: Option<f64>,
    pub referral_code: Option<String>,
    pub quick_bio: Option<String>,
    pub past: Option<String>,
    pub present: Option<String>,
    pub future: Option<String>,
    pub misc: Option<String>,
    pub social_links: Vec<SocialLink>,
    pub wallet_address: Option<String>,
}

impl From<ProfileLead> for CreateStudentProfile {
    fn from(lead: ProfileLead) -> Self {
        Self {
            full_name: lead.full_name,
            email: lead.email,
            country: lead.country,
            university: lead.university,
            program: lead.program,
            degree_level: lead.degree_level,
            funds_requested: lead.funds_requested,
            referral_code: lead.referral_code,
            quick_bio: lead.quick_bio,
            past: lead.past,
            present: lead.present,
            future: lead.future,
            misc: lead.misc,
            social_links: lead.social_links,
            wallet_address: lead.wallet_address,
        }
    }
}
