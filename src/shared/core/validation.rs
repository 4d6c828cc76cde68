// Validation helpers shared by the decide functions of several use cases.
//
// Boundaries
// - Pure functions only. Never perform input or output.

use crate::shared::application::errors::ValidationError;
use chrono::{DateTime, Utc};
use regex::Regex;
use std::sync::OnceLock;

pub const MIN_PASSWORD_LENGTH: usize = 6;

pub fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

pub fn is_valid_email(email: &str) -> bool {
    const RE: &str = r"^[^\s@]+@[^\s@]+\.[^\s@]+$";
    static REGEX: OnceLock<Regex> = OnceLock::new();
    let re = REGEX.get_or_init(|| Regex::new(RE).expect("email pattern is valid"));
    re.is_match(email)
}

pub fn ensure_title(title: &str) -> Result<(), ValidationError> {
    if is_blank(title) {
        return Err(ValidationError::EmptyTitle);
    }
    Ok(())
}

pub fn ensure_email(email: &str) -> Result<(), ValidationError> {
    if !is_valid_email(email) {
        return Err(ValidationError::InvalidEmail);
    }
    Ok(())
}

pub fn ensure_password(password: &str) -> Result<(), ValidationError> {
    if password.chars().count() < MIN_PASSWORD_LENGTH {
        return Err(ValidationError::PasswordTooShort {
            min: MIN_PASSWORD_LENGTH,
        });
    }
    Ok(())
}

/// Equal boundaries are accepted: a zero length event is valid.
pub fn ensure_interval(
    start: DateTime<Utc>,
    end: DateTime<Utc>,
) -> Result<(), ValidationError> {
    if end < start {
        return Err(ValidationError::InvalidInterval);
    }
    Ok(())
}
