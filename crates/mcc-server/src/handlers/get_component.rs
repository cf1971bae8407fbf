//! Get Component Tool Handler
//!
//! Handles the get_component MCP tool call using the catalog query service.

use rmcp::ErrorData as McpError;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::CallToolResult;
use std::sync::Arc;
use validator::Validate;

use mcc_application::ports::services::CatalogQueryInterface;

use crate::args::GetComponentArgs;
use crate::formatter::ResponseFormatter;

/// Handler for per-component fetches
pub struct GetComponentHandler {
    catalog_service: Arc<dyn CatalogQueryInterface>,
}

impl GetComponentHandler {
    /// Create a new get_component handler
    pub fn new(catalog_service: Arc<dyn CatalogQueryInterface>) -> Self {
        Self { catalog_service }
    }

    /// Handle the get_component tool request
    pub async fn handle(
        &self,
        Parameters(mut args): Parameters<GetComponentArgs>,
    ) -> Result<CallToolResult, McpError> {
        args.name = args.name.trim().to_string();
        if let Err(e) = args.validate() {
            return Err(McpError::invalid_params(
                format!("Invalid arguments: {}", e),
                None,
            ));
        }

        match self.catalog_service.get_component(&args.name).await {
            Ok(spec) => ResponseFormatter::format_component_spec(&spec),
            Err(e) => Ok(ResponseFormatter::format_component_error(&args.name, &e)),
        }
    }
}
