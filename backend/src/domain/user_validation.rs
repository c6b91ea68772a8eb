//! Field validation for user records.
//!
//! Records are plain data holders; these functions run at the construction
//! and update boundaries (see [`crate::domain::UserRecordService`]) and
//! return a typed error instead of relying on framework interception.

use std::sync::OnceLock;

use regex::Regex;
use thiserror::Error;

/// Minimum number of characters in an email address.
pub const EMAIL_MIN: usize = 5;
/// Minimum number of characters in a user name.
pub const NAME_MIN: usize = 2;
/// Maximum number of characters in a user name.
pub const NAME_MAX: usize = 30;

/// Validation errors returned by the user record validators.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UserValidationError {
    /// Email was empty.
    #[error("email must not be empty")]
    EmptyEmail,
    /// Email was shorter than [`EMAIL_MIN`] characters.
    #[error("email must be at least {min} characters")]
    EmailTooShort { min: usize },
    /// Email did not look like `local@domain`.
    #[error("email must be a well-formed address")]
    InvalidEmailFormat,
    /// Password was empty.
    #[error("password must not be empty")]
    EmptyPassword,
    /// Name was shorter than [`NAME_MIN`] characters.
    #[error("name must be at least {min} characters")]
    NameTooShort { min: usize },
    /// Name was longer than [`NAME_MAX`] characters.
    #[error("name must be at most {max} characters")]
    NameTooLong { max: usize },
}

static EMAIL_RE: OnceLock<Regex> = OnceLock::new();

fn email_regex() -> &'static Regex {
    EMAIL_RE.get_or_init(|| {
        // Length is enforced separately; this only constrains the shape.
        let pattern = concat!(
            r"^[A-Za-z0-9!#$%&'*+/=?^_`{|}~-]+(?:\.[A-Za-z0-9!#$%&'*+/=?^_`{|}~-]+)*",
            r"@[A-Za-z0-9](?:[A-Za-z0-9-]*[A-Za-z0-9])?",
            r"(?:\.[A-Za-z0-9](?:[A-Za-z0-9-]*[A-Za-z0-9])?)*$",
        );
        Regex::new(pattern).unwrap_or_else(|error| panic!("email regex failed to compile: {error}"))
    })
}

/// Check that an email is present, long enough, and well formed.
///
/// # Examples
/// ```
/// use usr_backend::domain::{UserValidationError, validate_email};
///
/// assert!(validate_email("toby@gmail.com").is_ok());
/// assert_eq!(validate_email("a@b"), Err(UserValidationError::EmailTooShort { min: 5 }));
/// ```
pub fn validate_email(email: &str) -> Result<(), UserValidationError> {
    if email.is_empty() {
        return Err(UserValidationError::EmptyEmail);
    }
    if email.chars().count() < EMAIL_MIN {
        return Err(UserValidationError::EmailTooShort { min: EMAIL_MIN });
    }
    if !email_regex().is_match(email) {
        return Err(UserValidationError::InvalidEmailFormat);
    }
    Ok(())
}

/// Check that a password is non-empty.
///
/// Whitespace is kept as supplied; only the empty string is rejected.
pub fn validate_password(password: &str) -> Result<(), UserValidationError> {
    if password.is_empty() {
        return Err(UserValidationError::EmptyPassword);
    }
    Ok(())
}

/// Check that a name is between [`NAME_MIN`] and [`NAME_MAX`] characters.
pub fn validate_name(name: &str) -> Result<(), UserValidationError> {
    let length = name.chars().count();
    if length < NAME_MIN {
        return Err(UserValidationError::NameTooShort { min: NAME_MIN });
    }
    if length > NAME_MAX {
        return Err(UserValidationError::NameTooLong { max: NAME_MAX });
    }
    Ok(())
}
