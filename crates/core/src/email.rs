//! Email normalisation and format checks shared by every lead form.

use std::sync::LazyLock;

use regex::Regex;

/// Loose `local@domain.tld` shape check, matching what the site's forms
/// enforce client-side. Deliverability is not checked.
static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("email regex is valid")
});

/// Trim surrounding whitespace and lowercase the address.
///
/// Uniqueness constraints are applied to the normalised form, so
/// `Jane@Example.com ` and `jane@example.com` are the same lead.
pub fn normalize_email(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Whether `email` has a plausible address shape.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// `validator` adapter for [`is_valid_email`].
pub fn validate_email_format(email: &str) -> Result<(), validator::ValidationError> {
    if is_valid_email(email.trim()) {
        Ok(())
    } else {
        Err(validator::ValidationError::new("email")
            .with_message("Please enter a valid email address".into()))
    }
}
