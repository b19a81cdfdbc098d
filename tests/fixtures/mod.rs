//! Test fixtures and sample data for integration tests.
//!
//! This module provides reusable contacts built from valid field values.

#![allow(dead_code)]

use address_book::Contact;

/// The contact used throughout the address book walkthrough.
pub fn prize() -> Contact {
    Contact::new(
        "Prize",
        "Aseeja",
        "SGNR",
        "GHARPE",
        "INDIA",
        "12345",
        "555-1234",
        "prize@x.com",
    )
    .expect("fixture contact is valid")
}

/// A second contact sharing Prize's last name, city and state.
pub fn kunal() -> Contact {
    Contact::new(
        "Kunal",
        "Aseeja",
        "SGNR",
        "GHARPE",
        "INDIA",
        "67890",
        "555-5678",
        "abhiaseeja@gmail.com",
    )
    .expect("fixture contact is valid")
}

/// Create a contact with the given name and location; other fields are filler.
pub fn sample_contact(first_name: &str, last_name: &str, city: &str, state: &str) -> Contact {
    Contact::new(
        first_name,
        last_name,
        "221B Baker Street",
        city,
        state,
        "10001",
        "555-0100",
        "sample@example.com",
    )
    .expect("fixture contact is valid")
}
