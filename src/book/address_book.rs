//! A named, ordered collection of contacts.

use crate::domain::ContactField;
use crate::error::{AddressBookError, AddressBookResult};
use crate::models::{Contact, ContactDetails};
use indexmap::IndexMap;

/// An address book holding contacts in insertion order.
///
/// No two contacts in a book share the same (first name, last name) pair.
/// Books are created through [`AddressBookManager`](super::AddressBookManager).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddressBook {
    name: String,
    contacts: Vec<Contact>,
}

impl AddressBook {
    pub(crate) fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            contacts: Vec::new(),
        }
    }

    /// The name this book was created with.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Append a contact to the end of the book.
    ///
    /// # Errors
    ///
    /// Returns `AddressBookError::DuplicateContact` if a contact with the same
    /// name pair is already present. The existing contact is left unchanged.
    pub fn add_contact(&mut self, contact: Contact) -> AddressBookResult<()> {
        let (first_name, last_name) = contact.name_pair();
        if self.is_duplicate(first_name, last_name) {
            return Err(AddressBookError::duplicate(first_name, last_name));
        }

        tracing::debug!(book = %self.name, contact = %contact.full_name(), "Adding contact");
        self.contacts.push(contact);
        Ok(())
    }

    /// Whether a contact with this name pair is already in the book.
    pub fn is_duplicate(&self, first_name: &str, last_name: &str) -> bool {
        self.contacts
            .iter()
            .any(|contact| contact.has_name(first_name, last_name))
    }

    /// Find the first contact with the given name pair.
    pub fn find_contact_by_name(&self, first_name: &str, last_name: &str) -> Option<&Contact> {
        self.contacts
            .iter()
            .find(|contact| contact.has_name(first_name, last_name))
    }

    fn position(&self, first_name: &str, last_name: &str) -> Option<usize> {
        self.contacts
            .iter()
            .position(|contact| contact.has_name(first_name, last_name))
    }

    /// Remove every contact with the given name pair.
    ///
    /// Removing a name pair that is not present is a no-op. Returns the number
    /// of contacts removed.
    pub fn remove_contact(&mut self, first_name: &str, last_name: &str) -> usize {
        let before = self.contacts.len();
        self.contacts
            .retain(|contact| !contact.has_name(first_name, last_name));
        let removed = before - self.contacts.len();

        tracing::debug!(
            book = %self.name,
            first_name,
            last_name,
            removed,
            "Removed contacts"
        );
        removed
    }

    /// Delete the first contact with the given name pair and return it.
    ///
    /// # Errors
    ///
    /// Returns `AddressBookError::ContactNotFound` if no contact matches.
    pub fn delete_contact(&mut self, first_name: &str, last_name: &str) -> AddressBookResult<Contact> {
        let index = self
            .position(first_name, last_name)
            .ok_or_else(|| AddressBookError::not_found(first_name, last_name))?;

        tracing::debug!(book = %self.name, first_name, last_name, "Deleting contact");
        Ok(self.contacts.remove(index))
    }

    /// Update the contact with the given name pair from a partial set of details.
    ///
    /// Each non-empty field is validated and stored on its own, in the order
    /// first name, last name, address, city, state, zip, phone number, email.
    /// There is no rollback: if a later field is invalid, earlier fields stay
    /// updated.
    ///
    /// # Errors
    ///
    /// - `ContactNotFound` if no contact has this name pair.
    /// - `DuplicateContact` if the new name pair belongs to another contact.
    ///   Nothing is changed in that case.
    /// - `Validation` for the first rejected field value.
    pub fn edit_contact(
        &mut self,
        first_name: &str,
        last_name: &str,
        details: &ContactDetails,
    ) -> AddressBookResult<&Contact> {
        let index = self
            .position(first_name, last_name)
            .ok_or_else(|| AddressBookError::not_found(first_name, last_name))?;

        let new_first = details.get(ContactField::FirstName).unwrap_or(first_name);
        let new_last = details.get(ContactField::LastName).unwrap_or(last_name);
        let renamed_onto_other = self
            .contacts
            .iter()
            .enumerate()
            .any(|(i, contact)| i != index && contact.has_name(new_first, new_last));
        if renamed_onto_other {
            return Err(AddressBookError::duplicate(new_first, new_last));
        }

        tracing::debug!(book = %self.name, first_name, last_name, ?details, "Editing contact");
        let contact = &mut self.contacts[index];
        contact.apply(details)?;
        Ok(&*contact)
    }

    /// All contacts, in insertion order.
    pub fn list_contacts(&self) -> &[Contact] {
        &self.contacts
    }

    pub fn count_contacts(&self) -> usize {
        self.contacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }

    /// Contacts whose city matches exactly (case-sensitive).
    pub fn find_contacts_by_city(&self, city: &str) -> Vec<&Contact> {
        self.filter_by(|contact| contact.city() == city)
    }

    /// Contacts whose state matches exactly (case-sensitive).
    pub fn find_contacts_by_state(&self, state: &str) -> Vec<&Contact> {
        self.filter_by(|contact| contact.state() == state)
    }

    /// Contacts grouped by city, groups in first-encountered order.
    pub fn view_contacts_by_city(&self) -> IndexMap<&str, Vec<&Contact>> {
        self.group_by(Contact::city)
    }

    /// Contacts grouped by state, groups in first-encountered order.
    pub fn view_contacts_by_state(&self) -> IndexMap<&str, Vec<&Contact>> {
        self.group_by(Contact::state)
    }

    /// Number of contacts per city, in first-encountered order.
    pub fn count_contacts_by_city(&self) -> IndexMap<&str, usize> {
        self.count_by(Contact::city)
    }

    /// Number of contacts per state, in first-encountered order.
    pub fn count_contacts_by_state(&self) -> IndexMap<&str, usize> {
        self.count_by(Contact::state)
    }

    fn filter_by<F>(&self, predicate: F) -> Vec<&Contact>
    where
        F: Fn(&Contact) -> bool,
    {
        self.contacts.iter().filter(|c| predicate(c)).collect()
    }

    fn group_by<'a, F>(&'a self, key: F) -> IndexMap<&'a str, Vec<&'a Contact>>
    where
        F: Fn(&'a Contact) -> &'a str,
    {
        let mut groups: IndexMap<&str, Vec<&Contact>> = IndexMap::new();
        for contact in &self.contacts {
            groups.entry(key(contact)).or_default().push(contact);
        }
        groups
    }

    fn count_by<'a, F>(&'a self, key: F) -> IndexMap<&'a str, usize>
    where
        F: Fn(&'a Contact) -> &'a str,
    {
        let mut counts: IndexMap<&str, usize> = IndexMap::new();
        for contact in &self.contacts {
            *counts.entry(key(contact)).or_insert(0) += 1;
        }
        counts
    }
}
