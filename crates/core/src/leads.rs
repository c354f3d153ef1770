//! Validation for the simple lead-capture forms (donor, student, newsletter).
//!
//! Submissions arrive with every field optional so that a missing field is
//! reported as a validation failure instead of a JSON decoding error.

use serde::Deserialize;

use crate::email::{is_valid_email, normalize_email};
use crate::error::{CoreError, FieldError};
use crate::lenient;

// ---------------------------------------------------------------------------
// Messages
// ---------------------------------------------------------------------------

pub const MSG_MISSING_FIELDS: &str = "Missing required fields";
pub const MSG_INVALID_EMAIL: &str = "Please enter a valid email address";
pub const MSG_INVALID_SUBSCRIBER_EMAIL: &str = "Please enter a valid email.";
pub const MSG_INVALID_FUNDS: &str = "Funds requested must be a positive number";

// ---------------------------------------------------------------------------
// Required-field collector
// ---------------------------------------------------------------------------

/// Collects missing required fields so every omission is reported at once.
#[derive(Debug, Default)]
pub struct RequiredFields {
    missing: Vec<FieldError>,
}

impl RequiredFields {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take a trimmed, non-blank value for `field`, recording it as missing
    /// otherwise. The returned string is empty when the field was missing.
    pub fn take(&mut self, field: &'static str, value: Option<String>) -> String {
        match value.map(|v| v.trim().to_string()) {
            Some(v) if !v.is_empty() => v,
            _ => {
                self.mark_missing(field);
                String::new()
            }
        }
    }

    pub fn mark_missing(&mut self, field: &'static str) {
        self.missing.push(FieldError {
            field: field.to_string(),
            message: format!("{field} is required"),
        });
    }

    /// Fail with [`MSG_MISSING_FIELDS`] if anything was missing.
    pub fn finish(self) -> Result<(), CoreError> {
        if self.missing.is_empty() {
            Ok(())
        } else {
            Err(CoreError::InvalidFields {
                message: MSG_MISSING_FIELDS.to_string(),
                fields: self.missing,
            })
        }
    }
}

fn invalid_field(field: &str, message: &str) -> CoreError {
    CoreError::InvalidFields {
        message: message.to_string(),
        fields: vec![FieldError {
            field: field.to_string(),
            message: message.to_string(),
        }],
    }
}

/// Normalise `email` and check its shape.
fn checked_email(email: &str, message: &str) -> Result<String, CoreError> {
    let email = normalize_email(email);
    if is_valid_email(&email) {
        Ok(email)
    } else {
        Err(invalid_field("email", message))
    }
}

// ---------------------------------------------------------------------------
// Donor
// ---------------------------------------------------------------------------

/// Raw donor early-access form.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DonorSubmission {
    pub name: Option<String>,
    pub email: Option<String>,
}

/// A donor submission that passed validation.
#[derive(Debug, Clone, PartialEq)]
pub struct DonorLead {
    pub name: String,
    pub email: String,
}

impl DonorSubmission {
    pub fn validate(self) -> Result<DonorLead, CoreError> {
        let mut required = RequiredFields::new();
        let name = required.take("name", self.name);
        let email = required.take("email", self.email);
        required.finish()?;

        Ok(DonorLead {
            name,
            email: checked_email(&email, MSG_INVALID_EMAIL)?,
        })
    }
}

// ---------------------------------------------------------------------------
// Student
// ---------------------------------------------------------------------------

/// Funding amount as sent by the student form: either a JSON number or the
/// raw text of a numeric input.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum FundsAmount {
    Number(f64),
    Text(String),
}

impl FundsAmount {
    /// Whether the form left the amount empty: blank text or the number 0.
    /// Text such as `"0"` counts as given and is range-checked by [`parse`].
    ///
    /// [`parse`]: FundsAmount::parse
    fn is_blank(&self) -> bool {
        match self {
            FundsAmount::Number(n) => *n == 0.0,
            FundsAmount::Text(s) => s.trim().is_empty(),
        }
    }

    /// Parse into a finite, strictly positive amount.
    pub fn parse(&self) -> Result<f64, CoreError> {
        let value = match self {
            FundsAmount::Number(n) => *n,
            FundsAmount::Text(s) => s
                .trim()
                .parse::<f64>()
                .map_err(|_| invalid_field("fundsRequested", MSG_INVALID_FUNDS))?,
        };
        if value.is_finite() && value > 0.0 {
            Ok(value)
        } else {
            Err(invalid_field("fundsRequested", MSG_INVALID_FUNDS))
        }
    }
}

/// Raw student interest form.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentSubmission {
    pub name: Option<String>,
    pub email: Option<String>,
    pub university: Option<String>,
    pub field_of_study: Option<String>,
    pub degree: Option<String>,
    pub funds_requested: Option<FundsAmount>,
    pub country: Option<String>,
}

/// A student submission that passed validation.
#[derive(Debug, Clone, PartialEq)]
pub struct StudentLead {
    pub name: String,
    pub email: String,
    pub university: String,
    pub field_of_study: String,
    pub degree: String,
    pub funds_requested: f64,
    pub country: String,
}

impl StudentSubmission {
    pub fn validate(self) -> Result<StudentLead, CoreError> {
        let mut required = RequiredFields::new();
        let name = required.take("name", self.name);
        let email = required.take("email", self.email);
        let university = required.take("university", self.university);
        let field_of_study = required.take("fieldOfStudy", self.field_of_study);
        let degree = required.take("degree", self.degree);
        let funds = self.funds_requested.filter(|amount| !amount.is_blank());
        if funds.is_none() {
            required.mark_missing("fundsRequested");
        }
        let country = required.take("country", self.country);
        required.finish()?;

        let email = checked_email(&email, MSG_INVALID_EMAIL)?;
        let funds_requested = funds.as_ref().map_or(Ok(0.0), FundsAmount::parse)?;

        Ok(StudentLead {
            name,
            email,
            university,
            field_of_study,
            degree,
            funds_requested,
            country,
        })
    }
}

// ---------------------------------------------------------------------------
// Newsletter
// ---------------------------------------------------------------------------

/// Raw newsletter sign-up.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SubscriberSubmission {
    #[serde(default, deserialize_with = "lenient::string")]
    pub email: Option<String>,
}

impl SubscriberSubmission {
    /// Returns the normalised email.
    pub fn validate(self) -> Result<String, CoreError> {
        let email = self.email.unwrap_or_default();
        checked_email(&email, MSG_INVALID_SUBSCRIBER_EMAIL)
    }
}
