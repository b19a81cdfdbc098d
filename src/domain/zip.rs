//! ZipCode value object.

use super::errors::ValidationError;
use super::field::ContactField;
use serde::{Serialize, Serializer};
use std::fmt;

/// A five-digit postal code.
///
/// # Example
///
/// ```
/// use address_book::domain::ZipCode;
///
/// assert!(ZipCode::new("12345").is_ok());
/// assert!(ZipCode::new("123").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ZipCode(String);

impl ZipCode {
    /// Create a new ZipCode.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] unless the value is exactly five ASCII digits.
    pub fn new(zip: impl Into<String>) -> Result<Self, ValidationError> {
        let zip = zip.into();
        ContactField::Zip.validate(&zip)?;
        Ok(Self(zip))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Serialize for ZipCode {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl fmt::Display for ZipCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zip_valid() {
        assert_eq!(ZipCode::new("12345").unwrap().as_str(), "12345");
    }

    #[test]
    fn test_zip_invalid() {
        let err = ZipCode::new("123").unwrap_err();
        assert_eq!(err.field(), ContactField::Zip);
        assert!(ZipCode::new("12 45").is_err());
        assert!(ZipCode::new("").is_err());
    }
}
