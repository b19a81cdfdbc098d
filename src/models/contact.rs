//! Contact model representing one person in an address book.

use crate::domain::{
    ContactField, EmailAddress, Locality, PersonName, PhoneNumber, ValidationError, ZipCode,
};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A validated contact.
///
/// Every field is checked against its [`ContactField`] rule before it is
/// stored, so a `Contact` can never hold an invalid value. Setters validate
/// only the field they change and leave the contact untouched on failure.
///
/// Serializes as a flat [`ContactRecord`]; deserializing goes through the same
/// validation as [`Contact::new`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "ContactRecord", into = "ContactRecord")]
pub struct Contact {
    first_name: PersonName,
    last_name: PersonName,
    address: Locality,
    city: Locality,
    state: Locality,
    zip: ZipCode,
    phone_number: PhoneNumber,
    email: EmailAddress,
}

impl Contact {
    /// Create a new contact, validating every field.
    ///
    /// Fields are checked in declaration order and the first failure is returned.
    ///
    /// # Errors
    ///
    /// Returns the [`ValidationError`] of the first field that fails its rule.
    ///
    /// # Example
    ///
    /// ```
    /// use address_book::Contact;
    ///
    /// let contact = Contact::new(
    ///     "Prize", "Aseeja", "SGNR", "GHARPE", "INDIA", "12345", "555-1234", "prize@x.com",
    /// )
    /// .unwrap();
    /// assert_eq!(contact.city(), "GHARPE");
    /// ```
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        address: impl Into<String>,
        city: impl Into<String>,
        state: impl Into<String>,
        zip: impl Into<String>,
        phone_number: impl Into<String>,
        email: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            first_name: PersonName::first(first_name)?,
            last_name: PersonName::last(last_name)?,
            address: Locality::address(address)?,
            city: Locality::city(city)?,
            state: Locality::state(state)?,
            zip: ZipCode::new(zip)?,
            phone_number: PhoneNumber::new(phone_number)?,
            email: EmailAddress::new(email)?,
        })
    }

    pub fn first_name(&self) -> &str {
        self.first_name.as_str()
    }

    pub fn last_name(&self) -> &str {
        self.last_name.as_str()
    }

    pub fn address(&self) -> &str {
        self.address.as_str()
    }

    pub fn city(&self) -> &str {
        self.city.as_str()
    }

    pub fn state(&self) -> &str {
        self.state.as_str()
    }

    pub fn zip(&self) -> &str {
        self.zip.as_str()
    }

    pub fn phone_number(&self) -> &str {
        self.phone_number.as_str()
    }

    pub fn email(&self) -> &str {
        self.email.as_str()
    }

    /// The (first name, last name) pair that identifies this contact within a book.
    pub fn name_pair(&self) -> (&str, &str) {
        (self.first_name(), self.last_name())
    }

    /// Whether this contact carries exactly the given name pair.
    pub fn has_name(&self, first_name: &str, last_name: &str) -> bool {
        self.first_name() == first_name && self.last_name() == last_name
    }

    /// Full name, first then last.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    pub fn set_first_name(&mut self, first_name: impl Into<String>) -> Result<(), ValidationError> {
        self.first_name = PersonName::first(first_name)?;
        Ok(())
    }

    pub fn set_last_name(&mut self, last_name: impl Into<String>) -> Result<(), ValidationError> {
        self.last_name = PersonName::last(last_name)?;
        Ok(())
    }

    pub fn set_address(&mut self, address: impl Into<String>) -> Result<(), ValidationError> {
        self.address = Locality::address(address)?;
        Ok(())
    }

    pub fn set_city(&mut self, city: impl Into<String>) -> Result<(), ValidationError> {
        self.city = Locality::city(city)?;
        Ok(())
    }

    pub fn set_state(&mut self, state: impl Into<String>) -> Result<(), ValidationError> {
        self.state = Locality::state(state)?;
        Ok(())
    }

    pub fn set_zip(&mut self, zip: impl Into<String>) -> Result<(), ValidationError> {
        self.zip = ZipCode::new(zip)?;
        Ok(())
    }

    pub fn set_phone_number(
        &mut self,
        phone_number: impl Into<String>,
    ) -> Result<(), ValidationError> {
        self.phone_number = PhoneNumber::new(phone_number)?;
        Ok(())
    }

    pub fn set_email(&mut self, email: impl Into<String>) -> Result<(), ValidationError> {
        self.email = EmailAddress::new(email)?;
        Ok(())
    }

    /// Set a single field by name.
    pub fn set_field(
        &mut self,
        field: ContactField,
        value: impl Into<String>,
    ) -> Result<(), ValidationError> {
        match field {
            ContactField::FirstName => self.set_first_name(value),
            ContactField::LastName => self.set_last_name(value),
            ContactField::Address => self.set_address(value),
            ContactField::City => self.set_city(value),
            ContactField::State => self.set_state(value),
            ContactField::Zip => self.set_zip(value),
            ContactField::PhoneNumber => self.set_phone_number(value),
            ContactField::Email => self.set_email(value),
        }
    }

    /// Apply a partial update, one field at a time.
    ///
    /// Present, non-empty fields are applied in [`ContactField::ALL`] order. The update is
    /// not transactional: it stops at the first invalid value, and fields
    /// applied before it keep their new values.
    ///
    /// # Errors
    ///
    /// Returns the [`ValidationError`] of the first rejected field.
    pub fn apply(&mut self, details: &ContactDetails) -> Result<(), ValidationError> {
        for field in ContactField::ALL {
            if let Some(value) = details.get(field) {
                self.set_field(field, value)?;
            }
        }
        Ok(())
    }
}

impl fmt::Display for Contact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {}, {}, {}, {} {}, {}, {}",
            self.first_name,
            self.last_name,
            self.address,
            self.city,
            self.state,
            self.zip,
            self.phone_number,
            self.email
        )
    }
}

/// Unvalidated wire form of a [`Contact`].
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
pub struct ContactRecord {
    /// First name, e.g. "Prize"
    pub first_name: String,
    /// Last name, e.g. "Aseeja"
    pub last_name: String,
    /// Street address (at least 4 characters)
    pub address: String,
    /// City (at least 4 characters)
    pub city: String,
    /// State (at least 4 characters)
    pub state: String,
    /// Five-digit zip code
    pub zip: String,
    /// Phone number in the format 555-1234
    pub phone_number: String,
    /// Email address
    pub email: String,
}

impl TryFrom<ContactRecord> for Contact {
    type Error = ValidationError;

    fn try_from(record: ContactRecord) -> Result<Self, Self::Error> {
        Contact::new(
            record.first_name,
            record.last_name,
            record.address,
            record.city,
            record.state,
            record.zip,
            record.phone_number,
            record.email,
        )
    }
}

impl From<Contact> for ContactRecord {
    fn from(contact: Contact) -> Self {
        Self {
            first_name: contact.first_name.into_inner(),
            last_name: contact.last_name.into_inner(),
            address: contact.address.into_inner(),
            city: contact.city.into_inner(),
            state: contact.state.into_inner(),
            zip: contact.zip.into_inner(),
            phone_number: contact.phone_number.into_inner(),
            email: contact.email.into_inner(),
        }
    }
}

/// A partial update to a contact. Absent or empty fields are left unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct ContactDetails {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zip: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl ContactDetails {
    /// The new value for `field`, if one was supplied. An empty string counts
    /// as not supplied.
    pub fn get(&self, field: ContactField) -> Option<&str> {
        let value = match field {
            ContactField::FirstName => &self.first_name,
            ContactField::LastName => &self.last_name,
            ContactField::Address => &self.address,
            ContactField::City => &self.city,
            ContactField::State => &self.state,
            ContactField::Zip => &self.zip,
            ContactField::PhoneNumber => &self.phone_number,
            ContactField::Email => &self.email,
        };
        value.as_deref().filter(|v| !v.is_empty())
    }

    /// Whether no field is present.
    pub fn is_empty(&self) -> bool {
        ContactField::ALL.iter().all(|field| self.get(*field).is_none())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn prize() -> Contact {
        Contact::new(
            "Prize",
            "Aseeja",
            "SGNR",
            "GHARPE",
            "INDIA",
            "12345",
            "555-1234",
            "prize15092000@gmail.com",
        )
        .unwrap()
    }

    #[test]
    fn test_contact_new_stores_input() {
        let contact = prize();
        assert_eq!(contact.first_name(), "Prize");
        assert_eq!(contact.last_name(), "Aseeja");
        assert_eq!(contact.address(), "SGNR");
        assert_eq!(contact.city(), "GHARPE");
        assert_eq!(contact.state(), "INDIA");
        assert_eq!(contact.zip(), "12345");
        assert_eq!(contact.phone_number(), "555-1234");
        assert_eq!(contact.email(), "prize15092000@gmail.com");
        assert_eq!(contact.name_pair(), ("Prize", "Aseeja"));
        assert_eq!(contact.full_name(), "Prize Aseeja");
    }

    #[test]
    fn test_contact_new_rejects_lowercase_name() {
        let err = Contact::new(
            "al", "Aseeja", "SGNR", "GHARPE", "INDIA", "12345", "555-1234", "a@b.com",
        )
        .unwrap_err();
        assert_eq!(err.field(), ContactField::FirstName);
    }

    #[test]
    fn test_contact_new_reports_first_invalid_field() {
        // Both zip and email are invalid; zip is checked first
        let err = Contact::new(
            "Prize", "Aseeja", "SGNR", "GHARPE", "INDIA", "123", "555-1234", "nope",
        )
        .unwrap_err();
        assert_eq!(err.field(), ContactField::Zip);
    }

    #[test]
    fn test_setter_leaves_contact_unchanged_on_failure() {
        let mut contact = prize();
        let before = contact.clone();

        assert!(contact.set_zip("123").is_err());
        assert!(contact.set_city("NYC").is_err());
        assert!(contact.set_email("prize@").is_err());
        assert_eq!(contact, before);

        contact.set_zip("54321").unwrap();
        assert_eq!(contact.zip(), "54321");
    }

    #[test]
    fn test_apply_is_not_transactional() {
        let mut contact = prize();
        let details = ContactDetails {
            city: Some("NewCity".to_string()),
            phone_number: Some("bad".to_string()),
            email: Some("new@example.com".to_string()),
            ..Default::default()
        };

        let err = contact.apply(&details).unwrap_err();
        assert_eq!(err.field(), ContactField::PhoneNumber);
        assert_eq!(contact.city(), "NewCity");
        assert_eq!(contact.phone_number(), "555-1234");
        assert_eq!(contact.email(), "prize15092000@gmail.com");
    }

    #[test]
    fn test_apply_all_fields() {
        let mut contact = prize();
        let details = ContactDetails {
            city: Some("NewCity".to_string()),
            phone_number: Some("555-9999".to_string()),
            ..Default::default()
        };
        contact.apply(&details).unwrap();
        assert_eq!(contact.city(), "NewCity");
        assert_eq!(contact.phone_number(), "555-9999");
    }

    #[test]
    fn test_apply_skips_empty_values() {
        let mut contact = prize();
        let before = contact.clone();
        let details = ContactDetails {
            city: Some(String::new()),
            zip: Some(String::new()),
            ..Default::default()
        };

        contact.apply(&details).unwrap();
        assert_eq!(contact, before);
    }

    #[test]
    fn test_contact_details_is_empty() {
        let blank = ContactDetails {
            email: Some(String::new()),
            ..Default::default()
        };
        assert!(blank.is_empty());
        assert_eq!(blank.get(ContactField::Email), None);

        assert!(ContactDetails::default().is_empty());
        let details = ContactDetails {
            zip: Some("12345".to_string()),
            ..Default::default()
        };
        assert!(!details.is_empty());
        assert_eq!(details.get(ContactField::Zip), Some("12345"));
    }

    #[test]
    fn test_contact_serialization() {
        let json = serde_json::to_value(prize()).unwrap();
        assert_eq!(json["first_name"], "Prize");
        assert_eq!(json["phone_number"], "555-1234");
    }

    #[test]
    fn test_contact_deserialization_validates() {
        let json = r#"{"first_name":"Kunal","last_name":"Aseeja","address":"SGNR","city":"GHARPE","state":"INDIA","zip":"67890","phone_number":"555-5678","email":"abhiaseeja@gmail.com"}"#;
        let contact: Contact = serde_json::from_str(json).unwrap();
        assert_eq!(contact.first_name(), "Kunal");

        let bad = json.replace("67890", "6789");
        let result: Result<Contact, _> = serde_json::from_str(&bad);
        assert!(result.is_err());
    }

    #[test]
    fn test_contact_display() {
        assert_eq!(
            prize().to_string(),
            "Prize Aseeja, SGNR, GHARPE, INDIA 12345, 555-1234, prize15092000@gmail.com"
        );
    }
}
