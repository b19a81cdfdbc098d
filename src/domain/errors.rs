//! Domain validation errors.

use super::field::ContactField;
use std::fmt;

/// A field value that failed its validation rule.
///
/// Carries the field that rejected the value and the rejected value itself;
/// [`ValidationError::rule`] describes what the field expects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    field: ContactField,
    value: String,
}

impl ValidationError {
    /// Create a new error for `field` rejecting `value`.
    pub fn new(field: ContactField, value: impl Into<String>) -> Self {
        Self {
            field,
            value: value.into(),
        }
    }

    /// The field whose rule was violated.
    pub fn field(&self) -> ContactField {
        self.field
    }

    /// The rejected value.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Human-readable description of the violated rule.
    pub fn rule(&self) -> &'static str {
        self.field.rule()
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {}: {:?}",
            self.field.display_name(),
            self.rule(),
            self.value
        )
    }
}

impl std::error::Error for ValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_display() {
        let err = ValidationError::new(ContactField::Zip, "123");
        assert_eq!(err.to_string(), "Zip should be a 5-digit number: \"123\"");
    }

    #[test]
    fn test_validation_error_accessors() {
        let err = ValidationError::new(ContactField::FirstName, "al");
        assert_eq!(err.field(), ContactField::FirstName);
        assert_eq!(err.value(), "al");
        assert!(err.rule().contains("capital letter"));
    }
}
