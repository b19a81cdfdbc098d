//! Address Book - validated, in-memory contact management.
//!
//! This library keeps contacts in named address books, validating every
//! field on the way in, and can serve them to AI assistants over the Model
//! Context Protocol.
//!
//! # Architecture
//!
//! - **domain**: Field rules and validated value objects
//! - **models**: The `Contact` record and its wire and partial-update forms
//! - **book**: `AddressBook` and `AddressBookManager`, the synchronous core
//! - **error**: Custom error types for precise error handling
//! - **config**: Configuration management from environment variables
//! - **services**: Async service layer over a shared manager
//! - **server**: MCP protocol server

pub mod book;
pub mod config;
pub mod domain;
pub mod error;
pub mod models;
pub mod server;
pub mod services;

pub use book::{AddressBook, AddressBookManager};
pub use config::Config;
pub use domain::{ContactField, ValidationError};
pub use error::{AddressBookError, AddressBookResult, ConfigError};
pub use models::{Contact, ContactDetails, ContactRecord};
pub use server::AddressBookMcpServer;
pub use services::{AddressBookService, AddressBookServiceImpl, AddressBookSummary};
