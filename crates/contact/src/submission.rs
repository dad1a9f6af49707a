use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// `local@domain.tld` over printable ASCII, no whitespace, exactly one `@`.
static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[\x21-\x3F\x41-\x7E]+@[\x21-\x3F\x41-\x7E]+\.[\x21-\x3F\x41-\x7E]+$")
        .expect("email pattern is a valid regex")
});

const REQUIRED: &str = "required";

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("All fields are required")]
    MissingFields,

    #[error("Invalid email format")]
    InvalidEmail,
}

impl From<validator::ValidationErrors> for ValidationError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let missing = errors
            .field_errors()
            .values()
            .flat_map(|errs| errs.iter())
            .any(|err| err.code == REQUIRED);

        if missing {
            Self::MissingFields
        } else {
            Self::InvalidEmail
        }
    }
}

/// Raw body of a contact form request.
///
/// Every field is optional so that an absent or `null` value is reported as a
/// missing field rather than as a malformed body.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct ContactPayload {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub subject: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct ContactSubmission {
    #[validate(custom(function = "not_blank"))]
    pub name: String,
    #[validate(
        custom(function = "not_blank"),
        regex(path = *EMAIL_PATTERN, code = "email")
    )]
    pub email: String,
    #[validate(custom(function = "not_blank"))]
    pub subject: String,
    #[validate(custom(function = "not_blank"))]
    pub message: String,
}

fn not_blank(value: &str) -> Result<(), validator::ValidationError> {
    if value.trim().is_empty() {
        return Err(validator::ValidationError::new(REQUIRED));
    }

    Ok(())
}

impl ContactSubmission {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        subject: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            subject: subject.into(),
            message: message.into(),
        }
    }

    /// Builds a submission from a request payload.
    ///
    /// Missing fields are reported before a malformed email, whatever the
    /// email value is.
    pub fn parse(payload: ContactPayload) -> Result<Self, ValidationError> {
        let submission = Self {
            name: payload.name.unwrap_or_default(),
            email: payload.email.unwrap_or_default(),
            subject: payload.subject.unwrap_or_default(),
            message: payload.message.unwrap_or_default(),
        };

        submission.validate()?;

        Ok(submission)
    }
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload(name: &str, email: &str, subject: &str, message: &str) -> ContactPayload {
        ContactPayload {
            name: Some(name.to_owned()),
            email: Some(email.to_owned()),
            subject: Some(subject.to_owned()),
            message: Some(message.to_owned()),
        }
    }

    #[test]
    fn test_parse_accepts_complete_submission() {
        let submission =
            ContactSubmission::parse(payload("Ann", "ann@example.com", "Hi", "Hello there"))
                .unwrap();

        assert_eq!(
            submission,
            ContactSubmission::new("Ann", "ann@example.com", "Hi", "Hello there")
        );
    }

    #[test]
    fn test_parse_rejects_each_missing_field() {
        let cases = [
            payload("", "ann@example.com", "Hi", "Hello"),
            payload("Ann", "", "Hi", "Hello"),
            payload("Ann", "ann@example.com", "", "Hello"),
            payload("Ann", "ann@example.com", "Hi", ""),
            payload("   ", "ann@example.com", "Hi", "Hello"),
            payload("Ann", "ann@example.com", "Hi", "\n\t"),
        ];

        for case in cases {
            assert_eq!(
                ContactSubmission::parse(case),
                Err(ValidationError::MissingFields)
            );
        }
    }

    #[test]
    fn test_parse_treats_absent_fields_as_missing() {
        let partial = ContactPayload {
            name: Some("Ann".to_owned()),
            email: Some("ann@example.com".to_owned()),
            ..Default::default()
        };

        assert_eq!(
            ContactSubmission::parse(partial),
            Err(ValidationError::MissingFields)
        );
    }

    #[test]
    fn test_missing_field_wins_over_bad_email() {
        assert_eq!(
            ContactSubmission::parse(payload("", "not-an-email", "Hi", "Hello")),
            Err(ValidationError::MissingFields)
        );
    }

    #[test]
    fn test_parse_rejects_malformed_email() {
        assert_eq!(
            ContactSubmission::parse(payload("Ann", "not-an-email", "Hi", "Hello")),
            Err(ValidationError::InvalidEmail)
        );
    }

    #[test]
    fn test_email_pattern() {
        for valid in [
            "ann@example.com",
            "a.b+tag@mail.example.co.uk",
            "x@y.z",
        ] {
            assert!(is_valid_email(valid), "{valid} should be accepted");
        }

        for invalid in [
            "not-an-email",
            "ann@example",
            "@example.com",
            "ann@.com",
            "ann@example.",
            "ann@@example.com",
            "ann@exa@mple.com",
            "ann @example.com",
            "ann@example .com",
            " ann@example.com",
            "anné@example.com",
        ] {
            assert!(!is_valid_email(invalid), "{invalid} should be rejected");
        }
    }

    #[test]
    fn test_validation_messages() {
        assert_eq!(
            ValidationError::MissingFields.to_string(),
            "All fields are required"
        );
        assert_eq!(
            ValidationError::InvalidEmail.to_string(),
            "Invalid email format"
        );
    }
}
