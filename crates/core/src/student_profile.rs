//! Student intake profile rules.
//!
//! The intake wizard submits four steps in one payload: basic information,
//! the student's story, social links and a wallet address. Field limits here
//! mirror the character counters shown in the form.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use validator::{Validate, ValidationError, ValidationErrors, ValidationErrorsKind};

use crate::email::{normalize_email, validate_email_format};
use crate::error::{CoreError, FieldError};
use crate::lenient;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

pub const DEFAULT_COUNTRY: &str = "United States";

pub const MAX_QUICK_BIO_LENGTH: u64 = 80;
pub const MAX_STORY_LENGTH: u64 = 300;

pub const DEGREE_UNDERGRADUATE: &str = "undergraduate";
pub const DEGREE_GRADUATE: &str = "graduate";
pub const DEGREE_PHD: &str = "phd";

pub const VALID_DEGREE_LEVELS: &[&str] = &[DEGREE_UNDERGRADUATE, DEGREE_GRADUATE, DEGREE_PHD];

/// Every new profile waits for manual review.
pub const STATUS_PENDING: &str = "pending";

pub const MSG_INVALID_EMAIL: &str = "Please enter a valid email address";
pub const MSG_FULL_NAME_REQUIRED: &str = "Full name is required";
pub const MSG_SOCIAL_LINKS: &str = "Please check your social media links format";
pub const MSG_GENERIC: &str = "Please check your information and try again";

/// Order in which fields are checked when choosing the summary message.
/// Matches the order of the form's steps.
const FIELD_ORDER: &[&str] = &[
    "fullName",
    "email",
    "country",
    "university",
    "program",
    "degreeLevel",
    "fundsRequested",
    "referralCode",
    "quickBio",
    "past",
    "present",
    "future",
    "misc",
    "socialLinks",
    "walletAddress",
];

// ---------------------------------------------------------------------------
// Submission
// ---------------------------------------------------------------------------

/// A social profile link. The URL may be left blank in the form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLink {
    /// Missing or non-text platforms read as blank and fail validation.
    #[serde(default, deserialize_with = "lenient::string_or_empty")]
    pub platform: String,
    #[serde(default)]
    pub url: Option<String>,
}

/// The full intake payload as posted by the wizard.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ProfileSubmission {
    // Step 1: basic information
    #[serde(default, deserialize_with = "lenient::string_or_empty")]
    #[validate(custom(function = "validate_full_name"))]
    pub full_name: String,
    #[serde(default, deserialize_with = "lenient::string_or_empty")]
    #[validate(custom(function = "validate_email_format"))]
    pub email: String,
    pub country: Option<String>,
    pub university: Option<String>,
    pub program: Option<String>,
    #[validate(custom(function = "validate_degree_level"))]
    pub degree_level: Option<String>,
    #[validate(range(exclusive_min = 0.0))]
    pub funds_requested: Option<f64>,
    pub referral_code: Option<String>,

    // Step 2: story
    #[validate(length(max = MAX_QUICK_BIO_LENGTH))]
    pub quick_bio: Option<String>,
    #[validate(length(max = MAX_STORY_LENGTH))]
    pub past: Option<String>,
    #[validate(length(max = MAX_STORY_LENGTH))]
    pub present: Option<String>,
    #[validate(length(max = MAX_STORY_LENGTH))]
    pub future: Option<String>,
    #[validate(length(max = MAX_STORY_LENGTH))]
    pub misc: Option<String>,

    // Step 3: social links
    #[serde(default, deserialize_with = "lenient_social_links")]
    #[validate(custom(function = "validate_social_links"))]
    pub social_links: Option<Vec<SocialLink>>,

    // Step 4: wallet
    pub wallet_address: Option<String>,
}

/// A profile that passed validation, normalised and ready to store.
#[derive(Debug, Clone, PartialEq)]
pub struct ProfileLead {
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

impl ProfileSubmission {
    /// Validate every step and normalise the result.
    ///
    /// On failure the summary message is chosen from the first failing field
    /// in form order, and every failure is listed in the error's `fields`.
    pub fn into_lead(self) -> Result<ProfileLead, CoreError> {
        self.validate().map_err(validation_failure)?;

        Ok(ProfileLead {
            full_name: self.full_name.trim().to_string(),
            email: normalize_email(&self.email),
            country: non_blank(self.country).unwrap_or_else(|| DEFAULT_COUNTRY.to_string()),
            university: non_blank(self.university),
            program: non_blank(self.program),
            degree_level: self.degree_level,
            funds_requested: self.funds_requested,
            referral_code: non_blank(self.referral_code),
            quick_bio: self.quick_bio,
            past: self.past,
            present: self.present,
            future: self.future,
            misc: self.misc,
            social_links: filter_social_links(self.social_links.unwrap_or_default()),
            wallet_address: non_blank(self.wallet_address),
        })
    }
}

/// Drop links whose URL is missing or blank, trimming the rest.
pub fn filter_social_links(links: Vec<SocialLink>) -> Vec<SocialLink> {
    links
        .into_iter()
        .filter_map(|link| {
            let url = link.url?.trim().to_string();
            (!url.is_empty()).then_some(SocialLink {
                platform: link.platform,
                url: Some(url),
            })
        })
        .collect()
}

/// Malformed entries, or a `socialLinks` that is not a list, read as a blank
/// link so validation reports them under `socialLinks`.
fn lenient_social_links<'de, D>(deserializer: D) -> Result<Option<Vec<SocialLink>>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Null => None,
        Value::Array(items) => Some(
            items
                .into_iter()
                .map(|item| serde_json::from_value(item).unwrap_or_default())
                .collect(),
        ),
        _ => Some(vec![SocialLink::default()]),
    })
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

// ---------------------------------------------------------------------------
// Custom validators
// ---------------------------------------------------------------------------

fn validate_full_name(name: &str) -> Result<(), ValidationError> {
    if name.trim().is_empty() {
        Err(ValidationError::new("required").with_message(MSG_FULL_NAME_REQUIRED.into()))
    } else {
        Ok(())
    }
}

fn validate_degree_level(level: &str) -> Result<(), ValidationError> {
    if VALID_DEGREE_LEVELS.contains(&level) {
        Ok(())
    } else {
        Err(ValidationError::new("degree_level").with_message(
            format!("Degree level must be one of: {}", VALID_DEGREE_LEVELS.join(", ")).into(),
        ))
    }
}

fn validate_social_links(links: &[SocialLink]) -> Result<(), ValidationError> {
    if links.iter().any(|link| link.platform.trim().is_empty()) {
        Err(ValidationError::new("social_links").with_message(MSG_SOCIAL_LINKS.into()))
    } else {
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Error mapping
// ---------------------------------------------------------------------------

/// `validator` keys errors by Rust field name; the wire uses camelCase.
fn wire_name(field: &str) -> String {
    let mut out = String::with_capacity(field.len());
    let mut upper = false;
    for c in field.chars() {
        if c == '_' {
            upper = true;
        } else if upper {
            out.extend(c.to_uppercase());
            upper = false;
        } else {
            out.push(c);
        }
    }
    out
}

fn summary_for(field: &str) -> &'static str {
    match field {
        "email" => MSG_INVALID_EMAIL,
        "fullName" => MSG_FULL_NAME_REQUIRED,
        "socialLinks" => MSG_SOCIAL_LINKS,
        _ => MSG_GENERIC,
    }
}

fn validation_failure(errors: ValidationErrors) -> CoreError {
    let mut fields: Vec<FieldError> = errors
        .errors()
        .iter()
        .flat_map(|(name, kind)| {
            let field = wire_name(name);
            let messages: Vec<String> = match kind {
                ValidationErrorsKind::Field(errs) => errs
                    .iter()
                    .map(|e| {
                        e.message
                            .as_ref()
                            .map(|m| m.to_string())
                            .unwrap_or_else(|| format!("{field} is invalid ({})", e.code))
                    })
                    .collect(),
                _ => vec![format!("{field} is invalid")],
            };
            messages.into_iter().map(move |message| FieldError {
                field: field.clone(),
                message,
            })
        })
        .collect();

    let rank = |f: &FieldError| {
        FIELD_ORDER
            .iter()
            .position(|name| *name == f.field)
            .unwrap_or(FIELD_ORDER.len())
    };
    fields.sort_by_key(rank);

    let message = fields
        .first()
        .map(|f| summary_for(&f.field))
        .unwrap_or(MSG_GENERIC)
        .to_string();

    CoreError::InvalidFields { message, fields }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use serde_json::json;

    use super::*;

    fn submission() -> ProfileSubmission {
        ProfileSubmission {
            full_name: "Ada Lovelace".into(),
            email: "Ada@Example.com".into(),
            degree_level: Some(DEGREE_GRADUATE.into()),
            funds_requested: Some(12_000.0),
            quick_bio: Some("Mathematician".into()),
            ..Default::default()
        }
    }

    fn decode(json: serde_json::Value) -> ProfileSubmission {
        serde_json::from_value(json).unwrap()
    }

    #[test]
    fn valid_submission_is_normalised() {
        let lead = submission().into_lead().unwrap();
        assert_eq!(lead.email, "ada@example.com");
        assert_eq!(lead.country, DEFAULT_COUNTRY);
        assert!(lead.social_links.is_empty());
    }

    #[test]
    fn empty_social_link_urls_are_dropped() {
        let links = vec![
            SocialLink {
                platform: "linkedin".into(),
                url: Some(" https://linkedin.com/in/ada ".into()),
            },
            SocialLink {
                platform: "twitter".into(),
                url: Some("   ".into()),
            },
            SocialLink {
                platform: "github".into(),
                url: None,
            },
        ];
        let kept = filter_social_links(links);
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].url.as_deref(), Some("https://linkedin.com/in/ada"));
    }

    #[test]
    fn email_error_wins_summary() {
        let mut s = submission();
        s.email = "not-an-email".into();
        s.quick_bio = Some("x".repeat(81));

        assert_matches!(s.into_lead(), Err(CoreError::InvalidFields { message, fields }) => {
            assert_eq!(message, MSG_INVALID_EMAIL);
            assert_eq!(fields.len(), 2);
            assert_eq!(fields[1].field, "quickBio");
        });
    }

    #[test]
    fn blank_full_name_is_reported_first() {
        let mut s = submission();
        s.full_name = "  ".into();
        s.email = String::new();

        assert_matches!(s.into_lead(), Err(CoreError::InvalidFields { message, fields }) => {
            assert_eq!(message, MSG_FULL_NAME_REQUIRED);
            assert_eq!(fields[0].field, "fullName");
        });
    }

    #[test]
    fn story_length_limits_count_characters() {
        let mut s = submission();
        s.past = Some("é".repeat(300));
        assert!(s.clone().into_lead().is_ok());

        s.past = Some("é".repeat(301));
        assert_matches!(s.into_lead(), Err(CoreError::InvalidFields { message, .. }) => {
            assert_eq!(message, MSG_GENERIC);
        });
    }

    #[test]
    fn unknown_degree_level_is_rejected() {
        let mut s = submission();
        s.degree_level = Some("postdoc".into());
        assert_matches!(s.into_lead(), Err(CoreError::InvalidFields { fields, .. }) => {
            assert_eq!(fields[0].field, "degreeLevel");
        });
    }

    #[test]
    fn funds_must_be_positive() {
        let mut s = submission();
        s.funds_requested = Some(0.0);
        assert!(s.into_lead().is_err());
    }

    #[test]
    fn social_link_without_platform_uses_links_message() {
        let mut s = submission();
        s.social_links = Some(vec![SocialLink {
            platform: " ".into(),
            url: Some("https://example.com".into()),
        }]);
        assert_matches!(s.into_lead(), Err(CoreError::InvalidFields { message, .. }) => {
            assert_eq!(message, MSG_SOCIAL_LINKS);
        });
    }

    #[test]
    fn absent_or_null_social_links_are_accepted() {
        for body in [
            json!({"fullName": "Ada", "email": "ada@example.com"}),
            json!({"fullName": "Ada", "email": "ada@example.com", "socialLinks": null}),
        ] {
            let lead = decode(body).into_lead().unwrap();
            assert!(lead.social_links.is_empty());
        }
    }

    #[test]
    fn wire_names_are_camel_case() {
        assert_eq!(wire_name("quick_bio"), "quickBio");
        assert_eq!(wire_name("email"), "email");
        assert_eq!(wire_name("funds_requested"), "fundsRequested");
    }

    #[test]
    fn wrongly_typed_fields_fail_with_their_own_message() {
        let link = "https://x.com/ada";
        let cases = [
            (json!({"fullName": null, "email": "ada@example.com"}), MSG_FULL_NAME_REQUIRED),
            (json!({"fullName": 42, "email": "ada@example.com"}), MSG_FULL_NAME_REQUIRED),
            (json!({"fullName": "Ada", "email": null}), MSG_INVALID_EMAIL),
            (json!({"fullName": "Ada", "email": ["ada@example.com"]}), MSG_INVALID_EMAIL),
            (
                json!({"fullName": "Ada", "email": "ada@example.com", "socialLinks": [{"url": link}]}),
                MSG_SOCIAL_LINKS,
            ),
            (
                json!({"fullName": "Ada", "email": "ada@example.com",
                       "socialLinks": [{"platform": 7, "url": link}]}),
                MSG_SOCIAL_LINKS,
            ),
            (
                json!({"fullName": "Ada", "email": "ada@example.com",
                       "socialLinks": [{"platform": "x", "url": 7}]}),
                MSG_SOCIAL_LINKS,
            ),
            (
                json!({"fullName": "Ada", "email": "ada@example.com", "socialLinks": "x"}),
                MSG_SOCIAL_LINKS,
            ),
        ];

        for (body, expected) in cases {
            assert_matches!(decode(body.clone()).into_lead(), Err(CoreError::InvalidFields { message, .. }) => {
                assert_eq!(message, expected, "{body}");
            });
        }
    }
}
