//! Donor entity model and DTOs.

use medici_core::leads::DonorLead;
use medici_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `donors` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Donor {
    pub id: DbId,
    pub name: String,
    pub email: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for inserting a donor.
#[derive(Debug, Clone)]
pub struct CreateDonor {
    pub name: String,
    pub email: String,
}

impl From<DonorLead> for CreateDonor {
    fn from(lead: DonorLead) -> Self {
        Self {
            name: lead.name,
            email: lead.email,
        }
    }
}
