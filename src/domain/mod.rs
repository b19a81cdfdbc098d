//! Domain value objects and field rules.
//!
//! Every contact field has a validation rule, described by [`ContactField`].
//! The value objects in this module check that rule at construction time so an
//! invalid value can never be represented.

pub mod email;
pub mod errors;
pub mod field;
pub mod locality;
pub mod name;
pub mod phone;
pub mod zip;

pub use email::EmailAddress;
pub use errors::ValidationError;
pub use field::ContactField;
pub use locality::Locality;
pub use name::PersonName;
pub use phone::PhoneNumber;
pub use zip::ZipCode;
