//! MCP Server Builder
//!
//! Builder pattern for constructing MCP servers with dependency injection.
//! Ensures all required dependencies are provided before server construction.

use crate::McpServer;
use mcc_application::ports::services::{CatalogQueryInterface, UpdateCheckInterface};
use mcc_infrastructure::constants::DEFAULT_CONTENT_PREFIXES;
use std::sync::Arc;

/// Builder for MCP Server with dependency injection
///
/// Ensures all required application services are provided before server
/// construction. Content prefixes fall back to the configured defaults
/// when not set.
#[derive(Default)]
pub struct McpServerBuilder {
    catalog_service: Option<Arc<dyn CatalogQueryInterface>>,
    update_service: Option<Arc<dyn UpdateCheckInterface>>,
    content_prefixes: Option<Vec<String>>,
}

impl McpServerBuilder {
    /// Create a new server builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the catalog query service
    ///
    /// # Arguments
    /// * `service` - Implementation of the catalog query port
    pub fn with_catalog_service(mut self, service: Arc<dyn CatalogQueryInterface>) -> Self {
        self.catalog_service = Some(service);
        self
    }

    /// Set the update check service
    ///
    /// # Arguments
    /// * `service` - Implementation of the update check port
    pub fn with_update_service(mut self, service: Arc<dyn UpdateCheckInterface>) -> Self {
        self.update_service = Some(service);
        self
    }

    /// Set the path prefixes that mark a changed file as catalog content
    pub fn with_content_prefixes(mut self, prefixes: Vec<String>) -> Self {
        self.content_prefixes = Some(prefixes);
        self
    }

    /// Build the MCP server
    ///
    /// # Errors
    /// Returns `BuilderError::MissingDependency` if any required service is
    /// not provided
    pub fn build(self) -> Result<McpServer, BuilderError> {
        let catalog_service = self
            .catalog_service
            .ok_or(BuilderError::MissingDependency("catalog service"))?;
        let update_service = self
            .update_service
            .ok_or(BuilderError::MissingDependency("update service"))?;
        let content_prefixes = self.content_prefixes.unwrap_or_else(|| {
            DEFAULT_CONTENT_PREFIXES
                .iter()
                .map(|p| (*p).to_string())
                .collect()
        });

        Ok(McpServer::new(
            catalog_service,
            update_service,
            content_prefixes,
        ))
    }
}

/// Errors that can occur during server building
#[derive(Debug, thiserror::Error)]
pub enum BuilderError {
    /// A required dependency was not provided
    #[error("Missing required dependency: {0}")]
    MissingDependency(&'static str),
}
