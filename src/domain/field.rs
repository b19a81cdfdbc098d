//! Contact fields and their validation rules.

use super::errors::ValidationError;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;

// Character classes are spelled out as ASCII ranges: `\d` in the regex crate
// matches any Unicode decimal digit.
static NAME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Z][a-zA-Z]{2,}$").expect("Failed to compile name regex"));
// Any four or more characters on a single line.
static LOCALITY_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\n\r\u{2028}\u{2029}]{4,}$").expect("Failed to compile locality regex")
});
static ZIP_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{5}$").expect("Failed to compile zip regex"));
static PHONE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{3}-[0-9]{4}$").expect("Failed to compile phone regex"));
static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$")
        .expect("Failed to compile email regex")
});

/// The validated fields of a [`Contact`](crate::models::Contact).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContactField {
    FirstName,
    LastName,
    Address,
    City,
    State,
    Zip,
    PhoneNumber,
    Email,
}

impl ContactField {
    /// All fields, in the order a contact validates them.
    pub const ALL: [ContactField; 8] = [
        ContactField::FirstName,
        ContactField::LastName,
        ContactField::Address,
        ContactField::City,
        ContactField::State,
        ContactField::Zip,
        ContactField::PhoneNumber,
        ContactField::Email,
    ];

    /// Name of the field as shown to users.
    pub fn display_name(self) -> &'static str {
        match self {
            Self::FirstName => "First Name",
            Self::LastName => "Last Name",
            Self::Address => "Address",
            Self::City => "City",
            Self::State => "State",
            Self::Zip => "Zip",
            Self::PhoneNumber => "Phone Number",
            Self::Email => "Email",
        }
    }

    /// Description of the rule a value for this field must satisfy.
    pub fn rule(self) -> &'static str {
        match self {
            Self::FirstName | Self::LastName => {
                "should start with a capital letter and have at least 3 characters"
            }
            Self::Address | Self::City | Self::State => "should have at least 4 characters",
            Self::Zip => "should be a 5-digit number",
            Self::PhoneNumber => "should be in the format 555-1234",
            Self::Email => "is not valid",
        }
    }

    fn pattern(self) -> &'static Regex {
        match self {
            Self::FirstName | Self::LastName => &*NAME_RE,
            Self::Address | Self::City | Self::State => &*LOCALITY_RE,
            Self::Zip => &*ZIP_RE,
            Self::PhoneNumber => &*PHONE_RE,
            Self::Email => &*EMAIL_RE,
        }
    }

    /// Check whether `value` satisfies this field's rule.
    pub fn is_valid(self, value: &str) -> bool {
        self.pattern().is_match(value)
    }

    /// Validate `value` against this field's rule.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] naming this field if the value is rejected.
    pub fn validate(self, value: &str) -> Result<(), ValidationError> {
        if self.is_valid(value) {
            Ok(())
        } else {
            Err(ValidationError::new(self, value))
        }
    }
}

impl fmt::Display for ContactField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}
