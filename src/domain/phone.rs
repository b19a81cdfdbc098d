//! PhoneNumber value object.

use super::errors::ValidationError;
use super::field::ContactField;
use serde::{Serialize, Serializer};
use std::fmt;

/// A seven-digit local phone number written as `NNN-NNNN`.
///
/// # Example
///
/// ```
/// use address_book::domain::PhoneNumber;
///
/// let phone = PhoneNumber::new("555-1234").unwrap();
/// assert_eq!(phone.exchange(), "555");
/// assert_eq!(phone.line(), "1234");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    /// Create a new PhoneNumber, validating the format.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] for [`ContactField::PhoneNumber`] unless the
    /// value is three digits, a hyphen, and four digits.
    pub fn new(phone: impl Into<String>) -> Result<Self, ValidationError> {
        let phone = phone.into();
        ContactField::PhoneNumber.validate(&phone)?;
        Ok(Self(phone))
    }

    /// Get the phone number as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into the underlying String.
    pub fn into_inner(self) -> String {
        self.0
    }

    /// The three-digit exchange prefix.
    pub fn exchange(&self) -> &str {
        &self.0[..3]
    }

    /// The four-digit line number.
    pub fn line(&self) -> &str {
        &self.0[4..]
    }
}

impl Serialize for PhoneNumber {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
