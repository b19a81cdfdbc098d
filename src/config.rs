//! Configuration management for the address book server.
//!
//! This module handles loading and validating configuration from environment variables.
//! A `.env` file is read if present, without writing anything to stdout (which MCP
//! uses for communication).

use crate::error::{ConfigError, ConfigResult};
use std::env;

/// Configuration for the address book server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Address books created at startup, in order (default: none)
    pub default_books: Vec<String>,

    /// Maximum number of contacts per address book (default: unlimited)
    pub max_contacts_per_book: Option<usize>,

    /// Log level used when `RUST_LOG` is unset (default: "error")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `ADDRESS_BOOK_DEFAULT_BOOKS`: Comma-separated book names to create at startup
    /// - `ADDRESS_BOOK_MAX_CONTACTS`: Maximum contacts per book (must be > 0)
    /// - `LOG_LEVEL`: Logging level (default: "error")
    pub fn from_env() -> ConfigResult<Self> {
        let _ = dotenvy::dotenv();

        let default_books = match env::var("ADDRESS_BOOK_DEFAULT_BOOKS") {
            Ok(val) => Self::parse_book_list("ADDRESS_BOOK_DEFAULT_BOOKS", &val)?,
            Err(_) => Vec::new(),
        };

        let max_contacts_per_book = Self::parse_env_limit("ADDRESS_BOOK_MAX_CONTACTS")?;

        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "error".to_string());

        Ok(Config {
            default_books,
            max_contacts_per_book,
            log_level,
        })
    }

    /// Parse a comma-separated list of book names.
    ///
    /// An empty or whitespace-only value yields no books; a blank entry between
    /// commas is rejected.
    fn parse_book_list(var_name: &str, val: &str) -> ConfigResult<Vec<String>> {
        if val.trim().is_empty() {
            return Ok(Vec::new());
        }

        val.split(',')
            .map(str::trim)
            .map(|name| {
                if name.is_empty() {
                    Err(ConfigError::InvalidValue {
                        var: var_name.to_string(),
                        reason: format!("Book names cannot be blank, got: {:?}", val),
                    })
                } else {
                    Ok(name.to_string())
                }
            })
            .collect()
    }

    /// Parse an optional positive limit.
    fn parse_env_limit(var_name: &str) -> ConfigResult<Option<usize>> {
        match env::var(var_name) {
            Ok(val) => match val.trim().parse::<usize>() {
                Ok(0) => Err(ConfigError::InvalidValue {
                    var: var_name.to_string(),
                    reason: "Must be greater than zero".to_string(),
                }),
                Ok(limit) => Ok(Some(limit)),
                Err(_) => Err(ConfigError::InvalidValue {
                    var: var_name.to_string(),
                    reason: format!("Must be a positive number, got: {}", val),
                }),
            },
            Err(_) => Ok(None),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            default_books: Vec::new(),
            max_contacts_per_book: None,
            log_level: "error".to_string(),
        }
    }
}
