//! Contact domain model and field validation.
//!
//! # Responsibility
//! - Define raw-input, validated, and persisted contact shapes.
//! - Check candidate field values against fixed rules before any write.
//!
//! # Invariants
//! - `id` is assigned by the store on insert and never changes.
//! - Write paths accept only `ValidContact`.
//! - Validation is pure: deterministic, no storage access, no side effects.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Store-assigned row identifier.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type ContactId = i64;

pub const AGE_MIN: i64 = 18;
pub const AGE_MAX: i64 = 100;
pub const NAME_MIN_CHARS: usize = 2;

/// `local@domain` shape: non-empty local part, one `@`, non-empty domain,
/// no whitespace. Deliberately not full RFC address validation.
static EMAIL_SHAPE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^@\s]+@[^@\s]+$").expect("valid email shape regex"));

/// Raw field values as collected from a form or command line.
///
/// Nothing is checked at construction; `validate` is the only gate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactInput {
    pub name: String,
    pub age: String,
    pub email: String,
    pub phone: String,
}

/// A contact whose fields passed every validation rule.
///
/// Write paths accept only this type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidContact {
    pub name: String,
    pub age: i64,
    pub email: String,
    /// Digits only; formatting and leading zeros are not preserved.
    pub phone: i64,
}

/// One persisted contact row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    /// Store-assigned identifier, immutable for the row lifetime.
    pub id: ContactId,
    pub name: String,
    pub age: i64,
    pub email: String,
    pub phone: i64,
}

/// Field-specific validation failure.
///
/// Rules are checked in a fixed priority order, so the variant always names
/// the first rule the input broke.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContactValidationError {
    /// Age is not an integer in `[AGE_MIN, AGE_MAX]`.
    AgeOutOfRange { value: String },
    /// Name has fewer than `NAME_MIN_CHARS` characters.
    NameTooShort { length: usize },
    /// Email does not match the `local@domain` shape.
    InvalidEmail { value: String },
    /// Phone is not a plain digit sequence.
    InvalidPhone { value: String },
}

impl Display for ContactValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AgeOutOfRange { value } => write!(
                f,
                "age `{value}` must be an integer between {AGE_MIN} and {AGE_MAX}"
            ),
            Self::NameTooShort { length } => write!(
                f,
                "name must have at least {NAME_MIN_CHARS} characters, got {length}"
            ),
            Self::InvalidEmail { value } => {
                write!(f, "email `{value}` is not of the form local@domain")
            }
            Self::InvalidPhone { value } => {
                write!(f, "phone `{value}` must contain digits only")
            }
        }
    }
}

impl Error for ContactValidationError {}

impl ContactInput {
    pub fn new(
        name: impl Into<String>,
        age: impl Into<String>,
        email: impl Into<String>,
        phone: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            age: age.into(),
            email: email.into(),
            phone: phone.into(),
        }
    }

    /// Checks every field against its rule and returns the normalized record.
    ///
    /// # Contract
    /// - Rules run in priority order: age, name, email, phone. The first
    ///   failing rule determines the returned error.
    /// - Age input that does not parse as an integer can never satisfy the
    ///   range rule and is reported as `AgeOutOfRange`.
    pub fn validate(&self) -> Result<ValidContact, ContactValidationError> {
        let age = self
            .age
            .trim()
            .parse::<i64>()
            .ok()
            .filter(|age| age_in_range(*age))
            .ok_or_else(|| ContactValidationError::AgeOutOfRange {
                value: self.age.clone(),
            })?;

        let name_chars = self.name.chars().count();
        if name_chars < NAME_MIN_CHARS {
            return Err(ContactValidationError::NameTooShort { length: name_chars });
        }

        if !email_is_well_formed(&self.email) {
            return Err(ContactValidationError::InvalidEmail {
                value: self.email.clone(),
            });
        }

        let phone = parse_phone(&self.phone).ok_or_else(|| ContactValidationError::InvalidPhone {
            value: self.phone.clone(),
        })?;

        Ok(ValidContact {
            name: self.name.clone(),
            age,
            email: self.email.clone(),
            phone,
        })
    }
}

/// Returns whether `age` lies in the accepted range, bounds inclusive.
pub fn age_in_range(age: i64) -> bool {
    (AGE_MIN..=AGE_MAX).contains(&age)
}

/// Returns whether `value` matches the `local@domain` shape.
pub fn email_is_well_formed(value: &str) -> bool {
    EMAIL_SHAPE_RE.is_match(value)
}

fn parse_phone(value: &str) -> Option<i64> {
    if value.is_empty() || !value.bytes().all(|byte| byte.is_ascii_digit()) {
        return None;
    }
    value.parse::<i64>().ok()
}

#[cfg(test)]
mod tests {
    use super::{age_in_range, email_is_well_formed, parse_phone};

    #[test]
    fn age_bounds_are_inclusive() {
        assert!(age_in_range(18));
        assert!(age_in_range(100));
        assert!(!age_in_range(17));
        assert!(!age_in_range(101));
    }

    #[test]
    fn email_shape_requires_nonempty_local_and_domain() {
        assert!(email_is_well_formed("a@x.com"));
        assert!(!email_is_well_formed("plainaddress"));
        assert!(!email_is_well_formed("@x.com"));
        assert!(!email_is_well_formed("a@"));
        assert!(!email_is_well_formed("a b@x.com"));
    }

    #[test]
    fn phone_accepts_digit_sequences_only() {
        assert_eq!(parse_phone("111"), Some(111));
        assert_eq!(parse_phone("0034123"), Some(34123));
        assert_eq!(parse_phone(""), None);
        assert_eq!(parse_phone("+34123"), None);
        assert_eq!(parse_phone("12-34"), None);
        // 20 digits overflows i64
        assert_eq!(parse_phone("99999999999999999999"), None);
    }
}
