//! Address book MCP server - main entry point
//!
//! Serves in-memory address books over the Model Context Protocol on stdio.

use anyhow::Result;
use address_book::services::{AddressBookService, AddressBookServiceImpl};
use address_book::{AddressBookMcpServer, Config};
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Load configuration before logging so LOG_LEVEL can seed the filter
    let config = Config::from_env();
    let log_level = config
        .as_ref()
        .map(|cfg| cfg.log_level.clone())
        .unwrap_or_else(|_| "error".to_string());

    // Initialize logging (stderr only to avoid polluting stdout/MCP communication)
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = match config {
        Ok(cfg) => {
            info!("Configuration loaded successfully");
            cfg
        }
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    let service =
        Arc::new(AddressBookServiceImpl::from_config(&config)) as Arc<dyn AddressBookService>;

    info!(
        "Address book server initialized with {} default book(s)",
        service.list_address_books().await.len()
    );
    if let Some(limit) = config.max_contacts_per_book {
        info!("Contact limit per book: {}", limit);
    }

    let server = AddressBookMcpServer::new(service);

    // Run the server (this will block until the client disconnects)
    info!("Starting MCP server with stdio transport");
    address_book::server::run_server(server).await?;

    info!("Address book server shutdown complete");
    Ok(())
}
