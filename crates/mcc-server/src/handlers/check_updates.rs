//! Check Updates Tool Handler
//!
//! Handles the check_updates MCP tool call using the update check service.

use rmcp::ErrorData as McpError;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::CallToolResult;
use std::sync::Arc;

use mcc_application::ports::services::UpdateCheckInterface;

use crate::args::CheckUpdatesArgs;
use crate::formatter::ResponseFormatter;

/// Handler for upstream update checks
pub struct CheckUpdatesHandler {
    update_service: Arc<dyn UpdateCheckInterface>,
    content_prefixes: Vec<String>,
}

impl CheckUpdatesHandler {
    /// Create a new check_updates handler
    ///
    /// # Arguments
    /// * `update_service` - Implementation of the update check port
    /// * `content_prefixes` - Path prefixes that mark catalog content
    pub fn new(
        update_service: Arc<dyn UpdateCheckInterface>,
        content_prefixes: Vec<String>,
    ) -> Self {
        Self {
            update_service,
            content_prefixes,
        }
    }

    /// Handle the check_updates tool request
    pub async fn handle(
        &self,
        Parameters(_args): Parameters<CheckUpdatesArgs>,
    ) -> Result<CallToolResult, McpError> {
        match self.update_service.check_updates().await {
            Ok(outcome) => Ok(ResponseFormatter::format_update_outcome(
                &outcome,
                &self.content_prefixes,
            )),
            Err(e) => Ok(ResponseFormatter::format_update_error(&e)),
        }
    }
}
