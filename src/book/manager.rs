//! Ownership of every address book.

use super::AddressBook;

/// An ordered collection of address books.
///
/// Book names are not required to be unique; lookups by name resolve to the
/// first book created with that name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddressBookManager {
    address_books: Vec<AddressBook>,
}

impl AddressBookManager {
    /// Create an empty manager.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new, empty address book and append it to the manager.
    ///
    /// The returned reference points at the book owned by the manager.
    ///
    /// # Example
    ///
    /// ```
    /// use address_book::{AddressBookManager, Contact};
    ///
    /// let mut manager = AddressBookManager::new();
    /// let personal = manager.create_address_book("Personal");
    /// personal
    ///     .add_contact(
    ///         Contact::new(
    ///             "Prize", "Aseeja", "SGNR", "GHARPE", "INDIA", "12345", "555-1234", "prize@x.com",
    ///         )
    ///         .unwrap(),
    ///     )
    ///     .unwrap();
    ///
    /// assert_eq!(manager.list_address_books()[0].count_contacts(), 1);
    /// ```
    pub fn create_address_book(&mut self, name: impl Into<String>) -> &mut AddressBook {
        let book = AddressBook::new(name);
        tracing::debug!(book = %book.name(), "Creating address book");
        self.address_books.push(book);
        let last = self.address_books.len() - 1;
        &mut self.address_books[last]
    }

    /// All address books, in creation order.
    pub fn list_address_books(&self) -> &[AddressBook] {
        &self.address_books
    }

    /// The first address book with the given name.
    pub fn find_address_book(&self, name: &str) -> Option<&AddressBook> {
        self.address_books.iter().find(|book| book.name() == name)
    }

    /// Mutable access to the first address book with the given name.
    pub fn find_address_book_mut(&mut self, name: &str) -> Option<&mut AddressBook> {
        self.address_books
            .iter_mut()
            .find(|book| book.name() == name)
    }

    pub fn len(&self) -> usize {
        self.address_books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.address_books.is_empty()
    }
}
