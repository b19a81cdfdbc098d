//! PersonName value object.

use super::errors::ValidationError;
use super::field::ContactField;
use serde::{Serialize, Serializer};
use std::fmt;

/// A validated first or last name.
///
/// Names start with an uppercase ASCII letter followed by at least two more
/// ASCII letters.
///
/// # Example
///
/// ```
/// use address_book::domain::PersonName;
///
/// let name = PersonName::first("Prize").unwrap();
/// assert_eq!(name.as_str(), "Prize");
/// assert!(PersonName::last("al").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PersonName(String);

impl PersonName {
    /// Create a first name.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] for [`ContactField::FirstName`].
    pub fn first(name: impl Into<String>) -> Result<Self, ValidationError> {
        Self::for_field(ContactField::FirstName, name.into())
    }

    /// Create a last name.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] for [`ContactField::LastName`].
    pub fn last(name: impl Into<String>) -> Result<Self, ValidationError> {
        Self::for_field(ContactField::LastName, name.into())
    }

    fn for_field(field: ContactField, name: String) -> Result<Self, ValidationError> {
        field.validate(&name)?;
        Ok(Self(name))
    }

    /// Get the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into the underlying String.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Serialize for PersonName {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl fmt::Display for PersonName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
