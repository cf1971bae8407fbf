//! Server Initialization
//!
//! Handles server startup: configuration loading, logging initialization,
//! provider construction, service wiring, and the stdio transport loop.
//!
//! The wiring is plain constructor injection: configuration arrives as an
//! explicit `AppConfig`, providers are built from it, services receive the
//! providers, and the builder assembles the server. No ambient globals.

use std::path::Path;
use std::sync::Arc;

use rmcp::ServiceExt;
use rmcp::transport::stdio;
use tracing::info;

use mcc_application::use_cases::{CatalogService, UpdateService};
use mcc_infrastructure::config::{AppConfig, ConfigLoader};
use mcc_providers::{GitCliProvider, HttpCatalogProvider};

use crate::McpServer;
use crate::McpServerBuilder;

/// Run the MCP Component Catalog server
///
/// This is the main entry point that initializes all components and serves
/// the MCP protocol over stdio until the client disconnects.
pub async fn run_server(config_path: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    let config = load_config(config_path)?;
    mcc_infrastructure::logging::init_logging(config.logging.clone())?;

    info!(
        catalog = %config.catalog.base_url,
        repository = %config.repository.root.display(),
        branch = %config.repository.branch,
        "Starting MCP Component Catalog server"
    );

    let server = create_mcp_server(&config)?;
    info!("MCP server initialized successfully");

    serve_stdio(server).await
}

/// Load configuration from optional path
fn load_config(config_path: Option<&Path>) -> Result<AppConfig, Box<dyn std::error::Error>> {
    let loader = match config_path {
        Some(path) => ConfigLoader::new().with_config_path(path),
        None => ConfigLoader::new(),
    };
    Ok(loader.load()?)
}

/// Create and configure the MCP server with all services
fn create_mcp_server(config: &AppConfig) -> Result<McpServer, Box<dyn std::error::Error>> {
    let http_client = reqwest::Client::builder()
        .timeout(config.catalog.request_timeout())
        .build()?;

    let catalog_provider = Arc::new(HttpCatalogProvider::new(
        config.catalog.base_url.clone(),
        config.catalog.request_timeout(),
        http_client,
    ));
    let upstream_provider = Arc::new(GitCliProvider::new(
        config.repository.root.clone(),
        config.repository.remote.clone(),
        config.repository.branch.clone(),
        config.repository.command_timeout(),
    ));

    let catalog_service = Arc::new(CatalogService::new(catalog_provider));
    let update_service = Arc::new(UpdateService::new(upstream_provider));

    Ok(McpServerBuilder::new()
        .with_catalog_service(catalog_service)
        .with_update_service(update_service)
        .with_content_prefixes(config.repository.content_prefixes.clone())
        .build()?)
}

/// Serve the MCP protocol over stdio until shutdown
async fn serve_stdio(server: McpServer) -> Result<(), Box<dyn std::error::Error>> {
    info!("Starting MCP protocol server on stdio transport");

    let service = server
        .serve(stdio())
        .await
        .map_err(|e| format!("Failed to start MCP service: {:?}", e))?;

    service
        .waiting()
        .await
        .map_err(|e| format!("MCP service error: {:?}", e))?;

    info!("MCP server shutdown complete");
    Ok(())
}
