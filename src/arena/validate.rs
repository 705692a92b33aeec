//! Sign-up validation
//!
//! The email check is intentionally loose: it only looks for the
//! `local@domain.tld` shape and never touches DNS.

use regex::Regex;
use std::sync::OnceLock;
use thiserror::Error;

/// Shape check for `local@domain.tld`, no whitespace and a single `@`
///
/// The byte order mark (U+FEFF) is rejected along with `\s`.
const EMAIL_PATTERN: &str = r"^[^\s\x{FEFF}@]+@[^\s\x{FEFF}@]+\.[^\s\x{FEFF}@]+$";

/// Why a submission was rejected
///
/// The `Display` text is the message shown to the visitor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// One or both fields were empty after trimming
    #[error("All fields are required to enter the arena.")]
    MissingField { name: bool, email: bool },

    /// Email was present but is not shaped like an address
    #[error("Provide a valid secure channel (email address).")]
    InvalidEmailFormat,
}

impl ValidationError {
    /// Whether the name field should be flagged
    pub fn flags_name(&self) -> bool {
        matches!(self, ValidationError::MissingField { name: true, .. })
    }

    /// Whether the email field should be flagged
    pub fn flags_email(&self) -> bool {
        match self {
            ValidationError::MissingField { email, .. } => *email,
            ValidationError::InvalidEmailFormat => true,
        }
    }
}

/// A submission that passed validation, with both values trimmed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub name: String,
    pub email: String,
}

fn email_regex() -> &'static Regex {
    static EMAIL: OnceLock<Regex> = OnceLock::new();
    EMAIL.get_or_init(|| Regex::new(EMAIL_PATTERN).expect("email pattern is valid"))
}

/// Check that `value` looks like `local-part@domain.tld`
pub fn is_valid_email(value: &str) -> bool {
    email_regex().is_match(value)
}

/// Trim whitespace and stray byte order marks from both ends
fn trim_blank(value: &str) -> &str {
    value.trim_matches(|c: char| c.is_whitespace() || c == '\u{FEFF}')
}

/// Trim and validate a name/email pair
///
/// Missing fields take precedence over a malformed email.
pub fn validate_submission(name: &str, email: &str) -> Result<Submission, ValidationError> {
    let name = trim_blank(name);
    let email = trim_blank(email);

    if name.is_empty() || email.is_empty() {
        return Err(ValidationError::MissingField {
            name: name.is_empty(),
            email: email.is_empty(),
        });
    }

    if !is_valid_email(email) {
        return Err(ValidationError::InvalidEmailFormat);
    }

    Ok(Submission {
        name: name.to_string(),
        email: email.to_string(),
    })
}
