//! List Components Tool Handler
//!
//! Handles the list_components MCP tool call using the catalog query service.

use rmcp::ErrorData as McpError;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::CallToolResult;
use std::sync::Arc;

use mcc_application::ports::services::CatalogQueryInterface;

use crate::args::ListComponentsArgs;
use crate::formatter::ResponseFormatter;

/// Handler for index listing
pub struct ListComponentsHandler {
    catalog_service: Arc<dyn CatalogQueryInterface>,
}

impl ListComponentsHandler {
    /// Create a new list_components handler
    pub fn new(catalog_service: Arc<dyn CatalogQueryInterface>) -> Self {
        Self { catalog_service }
    }

    /// Handle the list_components tool request
    pub async fn handle(
        &self,
        Parameters(_args): Parameters<ListComponentsArgs>,
    ) -> Result<CallToolResult, McpError> {
        match self.catalog_service.list_components().await {
            Ok(index) => ResponseFormatter::format_component_list(&index),
            Err(e) => Ok(ResponseFormatter::format_index_error(&e)),
        }
    }
}
