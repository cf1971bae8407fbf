//! Search Components Tool Handler
//!
//! Handles the search_components MCP tool call using the catalog query service.

use rmcp::ErrorData as McpError;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::CallToolResult;
use std::sync::Arc;
use validator::Validate;

use mcc_application::ports::services::CatalogQueryInterface;

use crate::args::SearchComponentsArgs;
use crate::formatter::ResponseFormatter;

/// Handler for index searches
pub struct SearchComponentsHandler {
    catalog_service: Arc<dyn CatalogQueryInterface>,
}

impl SearchComponentsHandler {
    /// Create a new search_components handler
    pub fn new(catalog_service: Arc<dyn CatalogQueryInterface>) -> Self {
        Self { catalog_service }
    }

    /// Handle the search_components tool request
    pub async fn handle(
        &self,
        Parameters(mut args): Parameters<SearchComponentsArgs>,
    ) -> Result<CallToolResult, McpError> {
        args.query = args.query.trim().to_string();
        if let Err(e) = args.validate() {
            return Err(McpError::invalid_params(
                format!("Invalid arguments: {}", e),
                None,
            ));
        }

        match self.catalog_service.search_components(&args.query).await {
            Ok(matches) => ResponseFormatter::format_search_results(&args.query, &matches),
            Err(e) => Ok(ResponseFormatter::format_index_error(&e)),
        }
    }
}
