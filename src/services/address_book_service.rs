//! Address book service layer.
//!
//! Resolves books by name and serializes access to the shared manager so that
//! find-then-mutate sequences (duplicate checks, edits, deletes) are atomic.

use crate::book::{AddressBook, AddressBookManager};
use crate::config::Config;
use crate::error::{AddressBookError, AddressBookResult};
use crate::models::{Contact, ContactDetails};
use async_trait::async_trait;
use indexmap::IndexMap;
use serde::Serialize;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Name and size of an address book.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AddressBookSummary {
    pub name: String,
    pub contact_count: usize,
}

impl From<&AddressBook> for AddressBookSummary {
    fn from(book: &AddressBook) -> Self {
        Self {
            name: book.name().to_string(),
            contact_count: book.count_contacts(),
        }
    }
}

/// Address book service trait for business operations.
///
/// Books are addressed by name; every operation on an unknown book fails with
/// `AddressBookError::AddressBookNotFound`. Results are owned copies taken
/// while the lock is held.
#[async_trait]
pub trait AddressBookService: Send + Sync {
    /// Create a new address book.
    async fn create_address_book(&self, name: String) -> AddressBookResult<AddressBookSummary>;

    /// List all address books in creation order.
    async fn list_address_books(&self) -> Vec<AddressBookSummary>;

    /// Add a contact to a book.
    async fn add_contact(&self, book: &str, contact: Contact) -> AddressBookResult<()>;

    /// Find a contact by name pair.
    async fn find_contact(
        &self,
        book: &str,
        first_name: &str,
        last_name: &str,
    ) -> AddressBookResult<Option<Contact>>;

    /// Remove every contact with the name pair, returning how many were removed.
    async fn remove_contact(
        &self,
        book: &str,
        first_name: &str,
        last_name: &str,
    ) -> AddressBookResult<usize>;

    /// Delete the first contact with the name pair.
    async fn delete_contact(
        &self,
        book: &str,
        first_name: &str,
        last_name: &str,
    ) -> AddressBookResult<Contact>;

    /// Apply a partial update to a contact and return its new state.
    async fn edit_contact(
        &self,
        book: &str,
        first_name: &str,
        last_name: &str,
        details: ContactDetails,
    ) -> AddressBookResult<Contact>;

    async fn list_contacts(&self, book: &str) -> AddressBookResult<Vec<Contact>>;

    async fn count_contacts(&self, book: &str) -> AddressBookResult<usize>;

    async fn find_contacts_by_city(&self, book: &str, city: &str)
        -> AddressBookResult<Vec<Contact>>;

    async fn find_contacts_by_state(
        &self,
        book: &str,
        state: &str,
    ) -> AddressBookResult<Vec<Contact>>;

    async fn view_contacts_by_city(
        &self,
        book: &str,
    ) -> AddressBookResult<IndexMap<String, Vec<Contact>>>;

    async fn view_contacts_by_state(
        &self,
        book: &str,
    ) -> AddressBookResult<IndexMap<String, Vec<Contact>>>;

    async fn count_contacts_by_city(&self, book: &str) -> AddressBookResult<IndexMap<String, usize>>;

    async fn count_contacts_by_state(&self, book: &str)
        -> AddressBookResult<IndexMap<String, usize>>;
}

/// Default implementation of AddressBookService.
pub struct AddressBookServiceImpl {
    manager: Arc<RwLock<AddressBookManager>>,
    max_contacts_per_book: Option<usize>,
}

impl AddressBookServiceImpl {
    /// Create a new service around an existing manager.
    pub fn new(manager: AddressBookManager) -> Self {
        Self {
            manager: Arc::new(RwLock::new(manager)),
            max_contacts_per_book: None,
        }
    }

    /// Limit the number of contacts any single book may hold.
    pub fn with_max_contacts(mut self, limit: usize) -> Self {
        self.max_contacts_per_book = Some(limit);
        self
    }

    /// Create a service from configuration, pre-creating the default books.
    pub fn from_config(config: &Config) -> Self {
        let mut manager = AddressBookManager::new();
        for name in &config.default_books {
            manager.create_address_book(name.clone());
        }

        Self {
            manager: Arc::new(RwLock::new(manager)),
            max_contacts_per_book: config.max_contacts_per_book,
        }
    }

    fn book<'a>(manager: &'a AddressBookManager, name: &str) -> AddressBookResult<&'a AddressBook> {
        manager
            .find_address_book(name)
            .ok_or_else(|| AddressBookError::AddressBookNotFound(name.to_string()))
    }

    fn book_mut<'a>(
        manager: &'a mut AddressBookManager,
        name: &str,
    ) -> AddressBookResult<&'a mut AddressBook> {
        manager
            .find_address_book_mut(name)
            .ok_or_else(|| AddressBookError::AddressBookNotFound(name.to_string()))
    }

    /// Validate a book name supplied by a caller.
    fn validate_book_name(name: &str) -> AddressBookResult<()> {
        if name.trim().is_empty() {
            return Err(AddressBookError::InvalidRequest(
                "Address book name cannot be empty".to_string(),
            ));
        }
        Ok(())
    }

    fn to_owned_groups(groups: IndexMap<&str, Vec<&Contact>>) -> IndexMap<String, Vec<Contact>> {
        groups
            .into_iter()
            .map(|(key, contacts)| {
                (
                    key.to_string(),
                    contacts.into_iter().cloned().collect::<Vec<_>>(),
                )
            })
            .collect()
    }

    fn to_owned_counts(counts: IndexMap<&str, usize>) -> IndexMap<String, usize> {
        counts
            .into_iter()
            .map(|(key, count)| (key.to_string(), count))
            .collect()
    }
}

impl Default for AddressBookServiceImpl {
    fn default() -> Self {
        Self::new(AddressBookManager::new())
    }
}

#[async_trait]
impl AddressBookService for AddressBookServiceImpl {
    async fn create_address_book(&self, name: String) -> AddressBookResult<AddressBookSummary> {
        Self::validate_book_name(&name)?;

        let mut manager = self.manager.write().await;
        let book = manager.create_address_book(name);
        tracing::info!(book = %book.name(), "Address book created");
        Ok(AddressBookSummary::from(&*book))
    }

    async fn list_address_books(&self) -> Vec<AddressBookSummary> {
        let manager = self.manager.read().await;
        manager
            .list_address_books()
            .iter()
            .map(AddressBookSummary::from)
            .collect()
    }

    async fn add_contact(&self, book: &str, contact: Contact) -> AddressBookResult<()> {
        let mut manager = self.manager.write().await;
        let address_book = Self::book_mut(&mut manager, book)?;

        if let Some(limit) = self.max_contacts_per_book {
            if address_book.count_contacts() >= limit {
                return Err(AddressBookError::InvalidRequest(format!(
                    "Address book '{}' is full ({} contacts)",
                    book, limit
                )));
            }
        }

        let full_name = contact.full_name();
        address_book.add_contact(contact)?;
        tracing::info!(book, contact = %full_name, "Contact added");
        Ok(())
    }

    async fn find_contact(
        &self,
        book: &str,
        first_name: &str,
        last_name: &str,
    ) -> AddressBookResult<Option<Contact>> {
        let manager = self.manager.read().await;
        let address_book = Self::book(&manager, book)?;
        Ok(address_book
            .find_contact_by_name(first_name, last_name)
            .cloned())
    }

    async fn remove_contact(
        &self,
        book: &str,
        first_name: &str,
        last_name: &str,
    ) -> AddressBookResult<usize> {
        let mut manager = self.manager.write().await;
        let address_book = Self::book_mut(&mut manager, book)?;
        let removed = address_book.remove_contact(first_name, last_name);
        tracing::info!(book, first_name, last_name, removed, "Contacts removed");
        Ok(removed)
    }

    async fn delete_contact(
        &self,
        book: &str,
        first_name: &str,
        last_name: &str,
    ) -> AddressBookResult<Contact> {
        let mut manager = self.manager.write().await;
        let address_book = Self::book_mut(&mut manager, book)?;
        let deleted = address_book.delete_contact(first_name, last_name)?;
        tracing::info!(book, first_name, last_name, "Contact deleted");
        Ok(deleted)
    }

    async fn edit_contact(
        &self,
        book: &str,
        first_name: &str,
        last_name: &str,
        details: ContactDetails,
    ) -> AddressBookResult<Contact> {
        let mut manager = self.manager.write().await;
        let address_book = Self::book_mut(&mut manager, book)?;
        let edited = address_book
            .edit_contact(first_name, last_name, &details)?
            .clone();
        tracing::info!(book, first_name, last_name, "Contact edited");
        Ok(edited)
    }

    async fn list_contacts(&self, book: &str) -> AddressBookResult<Vec<Contact>> {
        let manager = self.manager.read().await;
        Ok(Self::book(&manager, book)?.list_contacts().to_vec())
    }

    async fn count_contacts(&self, book: &str) -> AddressBookResult<usize> {
        let manager = self.manager.read().await;
        Ok(Self::book(&manager, book)?.count_contacts())
    }

    async fn find_contacts_by_city(
        &self,
        book: &str,
        city: &str,
    ) -> AddressBookResult<Vec<Contact>> {
        let manager = self.manager.read().await;
        let address_book = Self::book(&manager, book)?;
        Ok(address_book
            .find_contacts_by_city(city)
            .into_iter()
            .cloned()
            .collect())
    }

    async fn find_contacts_by_state(
        &self,
        book: &str,
        state: &str,
    ) -> AddressBookResult<Vec<Contact>> {
        let manager = self.manager.read().await;
        let address_book = Self::book(&manager, book)?;
        Ok(address_book
            .find_contacts_by_state(state)
            .into_iter()
            .cloned()
            .collect())
    }

    async fn view_contacts_by_city(
        &self,
        book: &str,
    ) -> AddressBookResult<IndexMap<String, Vec<Contact>>> {
        let manager = self.manager.read().await;
        let address_book = Self::book(&manager, book)?;
        Ok(Self::to_owned_groups(address_book.view_contacts_by_city()))
    }

    async fn view_contacts_by_state(
        &self,
        book: &str,
    ) -> AddressBookResult<IndexMap<String, Vec<Contact>>> {
        let manager = self.manager.read().await;
        let address_book = Self::book(&manager, book)?;
        Ok(Self::to_owned_groups(address_book.view_contacts_by_state()))
    }

    async fn count_contacts_by_city(
        &self,
        book: &str,
    ) -> AddressBookResult<IndexMap<String, usize>> {
        let manager = self.manager.read().await;
        let address_book = Self::book(&manager, book)?;
        Ok(Self::to_owned_counts(address_book.count_contacts_by_city()))
    }

    async fn count_contacts_by_state(
        &self,
        book: &str,
    ) -> AddressBookResult<IndexMap<String, usize>> {
        let manager = self.manager.read().await;
        let address_book = Self::book(&manager, book)?;
        Ok(Self::to_owned_counts(address_book.count_contacts_by_state()))
    }
}
