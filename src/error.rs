//! Error types for the address book.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use crate::domain::ValidationError;
use thiserror::Error;

/// Errors raised by address book and manager operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AddressBookError {
    /// A field value was rejected by its validation rule
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// A contact with the same name pair already exists in the book
    #[error("Duplicate contact found: {first_name} {last_name}")]
    DuplicateContact {
        first_name: String,
        last_name: String,
    },

    /// No contact with the given name pair exists in the book
    #[error("Contact not found: {first_name} {last_name}")]
    ContactNotFound {
        first_name: String,
        last_name: String,
    },

    /// No address book with the given name exists
    #[error("Address book not found: {0}")]
    AddressBookNotFound(String),

    /// Invalid request
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

impl AddressBookError {
    pub(crate) fn duplicate(first_name: &str, last_name: &str) -> Self {
        Self::DuplicateContact {
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
        }
    }

    pub(crate) fn not_found(first_name: &str, last_name: &str) -> Self {
        Self::ContactNotFound {
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
        }
    }
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with AddressBookError
pub type AddressBookResult<T> = Result<T, AddressBookError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
