//! Address books and the manager that owns them.
//!
//! This is the synchronous core: every operation is an in-memory scan or
//! mutation of a `Vec`, with no I/O and no locking.

mod address_book;
mod manager;

pub use address_book::AddressBook;
pub use manager::AddressBookManager;
