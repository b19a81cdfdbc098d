//! Data models for address book contacts.

pub mod contact;

pub use contact::{Contact, ContactDetails, ContactRecord};
