//! Locality value object for address, city and state.

use super::errors::ValidationError;
use super::field::ContactField;
use serde::{Serialize, Serializer};
use std::fmt;

/// A validated address line, city or state.
///
/// Any characters are accepted as long as there are at least four of them on
/// a single line.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Locality(String);

impl Locality {
    /// Create a street address.
    pub fn address(value: impl Into<String>) -> Result<Self, ValidationError> {
        Self::for_field(ContactField::Address, value.into())
    }

    /// Create a city.
    pub fn city(value: impl Into<String>) -> Result<Self, ValidationError> {
        Self::for_field(ContactField::City, value.into())
    }

    /// Create a state.
    pub fn state(value: impl Into<String>) -> Result<Self, ValidationError> {
        Self::for_field(ContactField::State, value.into())
    }

    fn for_field(field: ContactField, value: String) -> Result<Self, ValidationError> {
        field.validate(&value)?;
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Serialize for Locality {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl fmt::Display for Locality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
