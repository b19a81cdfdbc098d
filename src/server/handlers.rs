//! MCP tool handlers for the address book server.
//!
//! This module implements all the MCP tools using the rmcp SDK's tool_router pattern.

use crate::error::AddressBookError;
use crate::models::{Contact, ContactDetails, ContactRecord};
use crate::services::AddressBookService;
use rmcp::handler::server::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::*;
use rmcp::{tool, tool_handler, tool_router, ErrorData as McpError, ServerHandler};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::sync::Arc;

/// The MCP server that exposes address book tools.
#[derive(Clone)]
pub struct AddressBookMcpServer {
    service: Arc<dyn AddressBookService>,
    tool_router: ToolRouter<Self>,
}

// Implement ServerHandler using the tool_handler macro
#[tool_handler]
impl ServerHandler for AddressBookMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities {
                tools: Some(Default::default()),
                ..Default::default()
            },
            server_info: Implementation {
                name: "address-book-mcp".into(),
                version: env!("CARGO_PKG_VERSION").into(),
                icons: None,
                title: None,
                website_url: None,
            },
            instructions: Some("MCP server for address books - create books, add, edit and delete validated contacts, and group or count them by city and state.".into()),
        }
    }
}

// Helper structs for tool parameters
#[derive(Debug, Deserialize, JsonSchema)]
struct BookNameParams {
    /// Name of the address book
    book: String,
}

#[derive(Debug, Deserialize, JsonSchema)]
struct AddContactParams {
    book: String,
    contact: ContactRecord,
}

#[derive(Debug, Deserialize, JsonSchema)]
struct ContactNameParams {
    book: String,
    first_name: String,
    last_name: String,
}

#[derive(Debug, Deserialize, JsonSchema)]
struct EditContactParams {
    book: String,
    first_name: String,
    last_name: String,
    /// Fields to change; omitted fields are left as they are
    changes: ContactDetails,
}

#[derive(Debug, Deserialize, JsonSchema)]
struct CityParams {
    book: String,
    city: String,
}

#[derive(Debug, Deserialize, JsonSchema)]
struct StateParams {
    book: String,
    state: String,
}

// Helper function to convert errors to MCP errors
fn to_mcp_error(e: impl std::fmt::Display) -> McpError {
    McpError {
        code: ErrorCode::INTERNAL_ERROR,
        message: Cow::from(e.to_string()),
        data: None,
    }
}

// Address book errors are caused by the request, not the server
fn book_error(e: AddressBookError) -> McpError {
    tracing::warn!("Address book request rejected: {}", e);
    McpError {
        code: ErrorCode::INVALID_PARAMS,
        message: Cow::from(e.to_string()),
        data: None,
    }
}

fn json_result<T: Serialize>(value: &T) -> Result<CallToolResult, McpError> {
    let json_response = serde_json::to_string_pretty(value).map_err(to_mcp_error)?;
    Ok(CallToolResult::success(vec![Content::text(json_response)]))
}

// Tool router implementation
#[tool_router]
impl AddressBookMcpServer {
    /// Create a new address book MCP server.
    pub fn new(service: Arc<dyn AddressBookService>) -> Self {
        Self {
            service,
            tool_router: Self::tool_router(),
        }
    }

    /// Create a new, empty address book.
    #[tool(description = "Create a new, empty address book with the given name")]
    async fn create_address_book(
        &self,
        params: Parameters<BookNameParams>,
    ) -> Result<CallToolResult, McpError> {
        let summary = self
            .service
            .create_address_book(params.0.book)
            .await
            .map_err(book_error)?;

        json_result(&summary)
    }

    /// List every address book.
    #[tool(description = "List all address books in creation order with their contact counts")]
    async fn list_address_books(&self) -> Result<CallToolResult, McpError> {
        let books = self.service.list_address_books().await;
        json_result(&serde_json::json!({
            "book_count": books.len(),
            "books": books,
        }))
    }

    /// Add a validated contact to a book.
    #[tool(
        description = "Add a contact to an address book. Names must start with a capital letter (3+ letters), address/city/state need 4+ characters, zip is 5 digits, phone is 555-1234 format. Fails if a contact with the same first and last name exists."
    )]
    async fn add_contact(
        &self,
        params: Parameters<AddContactParams>,
    ) -> Result<CallToolResult, McpError> {
        let params = params.0;

        tracing::info!("MCP Handler: add_contact called");
        tracing::debug!(
            "Parameters: book={}, first_name={}, last_name={}",
            params.book,
            params.contact.first_name,
            params.contact.last_name
        );

        let contact = Contact::try_from(params.contact)
            .map_err(|e| book_error(AddressBookError::from(e)))?;
        self.service
            .add_contact(&params.book, contact.clone())
            .await
            .map_err(book_error)?;

        json_result(&serde_json::json!({
            "book": params.book,
            "added": contact,
        }))
    }

    /// Look up a contact by first and last name.
    #[tool(description = "Find a contact in an address book by exact first and last name")]
    async fn find_contact(
        &self,
        params: Parameters<ContactNameParams>,
    ) -> Result<CallToolResult, McpError> {
        let params = params.0;

        let contact = self
            .service
            .find_contact(&params.book, &params.first_name, &params.last_name)
            .await
            .map_err(book_error)?;

        json_result(&serde_json::json!({
            "found": contact.is_some(),
            "contact": contact,
        }))
    }

    /// Remove all contacts with a name pair.
    #[tool(
        description = "Remove every contact with the given first and last name. Succeeds even if none match and reports how many were removed."
    )]
    async fn remove_contact(
        &self,
        params: Parameters<ContactNameParams>,
    ) -> Result<CallToolResult, McpError> {
        let params = params.0;

        let removed = self
            .service
            .remove_contact(&params.book, &params.first_name, &params.last_name)
            .await
            .map_err(book_error)?;

        json_result(&serde_json::json!({ "removed": removed }))
    }

    /// Delete the first contact with a name pair.
    #[tool(
        description = "Delete the contact with the given first and last name. Fails if no such contact exists."
    )]
    async fn delete_contact(
        &self,
        params: Parameters<ContactNameParams>,
    ) -> Result<CallToolResult, McpError> {
        let params = params.0;

        let deleted = self
            .service
            .delete_contact(&params.book, &params.first_name, &params.last_name)
            .await
            .map_err(book_error)?;

        json_result(&serde_json::json!({ "deleted": deleted }))
    }

    /// Update some fields of a contact.
    #[tool(
        description = "Edit a contact's fields. Each supplied field is validated and saved in turn; if one is invalid, fields saved before it stay changed."
    )]
    async fn edit_contact(
        &self,
        params: Parameters<EditContactParams>,
    ) -> Result<CallToolResult, McpError> {
        let params = params.0;

        tracing::info!("MCP Handler: edit_contact called");
        tracing::debug!("Parameters: book={}, changes={:?}", params.book, params.changes);

        let contact = self
            .service
            .edit_contact(
                &params.book,
                &params.first_name,
                &params.last_name,
                params.changes,
            )
            .await
            .map_err(book_error)?;

        json_result(&contact)
    }

    /// List every contact in a book.
    #[tool(description = "List all contacts in an address book in insertion order")]
    async fn list_contacts(
        &self,
        params: Parameters<BookNameParams>,
    ) -> Result<CallToolResult, McpError> {
        let contacts = self
            .service
            .list_contacts(&params.0.book)
            .await
            .map_err(book_error)?;

        json_result(&contacts)
    }

    #[tool(description = "Count the contacts in an address book")]
    async fn count_contacts(
        &self,
        params: Parameters<BookNameParams>,
    ) -> Result<CallToolResult, McpError> {
        let params = params.0;

        let count = self
            .service
            .count_contacts(&params.book)
            .await
            .map_err(book_error)?;

        json_result(&serde_json::json!({ "book": params.book, "count": count }))
    }

    #[tool(description = "Find all contacts in an address book living in a city (exact, case-sensitive)")]
    async fn find_contacts_by_city(
        &self,
        params: Parameters<CityParams>,
    ) -> Result<CallToolResult, McpError> {
        let params = params.0;

        let contacts = self
            .service
            .find_contacts_by_city(&params.book, &params.city)
            .await
            .map_err(book_error)?;

        json_result(&contacts)
    }

    #[tool(description = "Find all contacts in an address book living in a state (exact, case-sensitive)")]
    async fn find_contacts_by_state(
        &self,
        params: Parameters<StateParams>,
    ) -> Result<CallToolResult, McpError> {
        let params = params.0;

        let contacts = self
            .service
            .find_contacts_by_state(&params.book, &params.state)
            .await
            .map_err(book_error)?;

        json_result(&contacts)
    }

    #[tool(description = "Group the contacts of an address book by city")]
    async fn view_contacts_by_city(
        &self,
        params: Parameters<BookNameParams>,
    ) -> Result<CallToolResult, McpError> {
        let groups = self
            .service
            .view_contacts_by_city(&params.0.book)
            .await
            .map_err(book_error)?;

        json_result(&groups)
    }

    #[tool(description = "Group the contacts of an address book by state")]
    async fn view_contacts_by_state(
        &self,
        params: Parameters<BookNameParams>,
    ) -> Result<CallToolResult, McpError> {
        let groups = self
            .service
            .view_contacts_by_state(&params.0.book)
            .await
            .map_err(book_error)?;

        json_result(&groups)
    }

    #[tool(description = "Count the contacts of an address book per city")]
    async fn count_contacts_by_city(
        &self,
        params: Parameters<BookNameParams>,
    ) -> Result<CallToolResult, McpError> {
        let counts = self
            .service
            .count_contacts_by_city(&params.0.book)
            .await
            .map_err(book_error)?;

        json_result(&counts)
    }

    #[tool(description = "Count the contacts of an address book per state")]
    async fn count_contacts_by_state(
        &self,
        params: Parameters<BookNameParams>,
    ) -> Result<CallToolResult, McpError> {
        let counts = self
            .service
            .count_contacts_by_state(&params.0.book)
            .await
            .map_err(book_error)?;

        json_result(&counts)
    }
}
