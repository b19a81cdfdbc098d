//! Application service layer.
//!
//! Services wrap the synchronous address book core for use from async
//! handlers. They own the shared state and provide a clean boundary between
//! the MCP handlers and the core types.

mod address_book_service;

pub use address_book_service::{AddressBookService, AddressBookServiceImpl, AddressBookSummary};
