//! Student interest entity model and DTOs.

use medici_core::leads::StudentLead;
use medici_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `students` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Student {
    pub id: DbId,
    pub name: String,
    pub email: String,
    pub university: String,
    pub field_of_study: String,
    pub degree: String,
    pub country: String,
    pub funds_requested: Option<f64>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for inserting a student.
#[derive(Debug, Clone)]
pub struct CreateStudent {
    pub name: String,
    pub email: String,
    pub university: String,
    pub field_of_study: String,
    pub degree: String,
    pub country: String,
    pub funds_requested: Option<f64>,
}

impl From<StudentLead> for CreateStudent {
    fn from(lead: StudentLead) -> Self {
        Self {
            name: lead.name,
            email: lead.email,
            university: lead.university,
            field_of_study: lead.field_of_study,
            degree: lead.degree,
            country: lead.country,
            funds_requested: Some(lead.funds_requested),
        }
    }
}
